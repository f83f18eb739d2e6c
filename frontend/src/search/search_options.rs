use js_sys::Reflect;
use tube_catalog::RawSearchOptions;
use wasm_bindgen::JsValue;
use web_sys::{Event, MouseEvent};
use yew::{function_component, html, Callback, Html, Properties};

#[derive(Debug, Clone, Copy, PartialEq)]
enum OptionField {
    PublishedBefore,
    MinDuration,
    PageCount,
}

impl OptionField {
    fn set(self, options: &mut RawSearchOptions, value: String) {
        match self {
            OptionField::PublishedBefore => options.published_before = value,
            OptionField::MinDuration => options.min_duration = value,
            OptionField::PageCount => options.page_count = value,
        }
    }
}

// Helper to read "value" from any event target without a typed element.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct SearchOptionsProps {
    pub options: RawSearchOptions,
    pub visible: bool,
    pub on_toggle: Callback<()>,
    pub on_change: Callback<RawSearchOptions>,
}

#[function_component(SearchOptionsPanel)]
pub fn search_options(props: &SearchOptionsProps) -> Html {
    let on_field_change = |field: OptionField| {
        let current = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                let mut updated = current.clone();
                field.set(&mut updated, value);
                on_change.emit(updated);
            }
        })
    };

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <div class="mb-4">
            <button
                type="button"
                id="expand-options-btn"
                class="text-sm text-blue-600 hover:underline"
                onclick={on_toggle}
            >
                { if props.visible { "Hide options" } else { "Options" } }
            </button>
            {
                if props.visible {
                    html! {
                        <div id="options" class="search-options flex flex-wrap gap-4 mt-2">
                            <label class="search-option">
                                { "Published before" }
                                <input
                                    type="date"
                                    id="published-before"
                                    value={props.options.published_before.clone()}
                                    onchange={on_field_change(OptionField::PublishedBefore)}
                                />
                            </label>
                            <label class="search-option">
                                { "Min. duration (minutes)" }
                                <input
                                    type="number"
                                    min="0"
                                    step="any"
                                    id="min-duration"
                                    value={props.options.min_duration.clone()}
                                    onchange={on_field_change(OptionField::MinDuration)}
                                />
                            </label>
                            <label class="search-option">
                                { "Pages" }
                                <input
                                    type="number"
                                    min="1"
                                    id="page-count"
                                    value={props.options.page_count.clone()}
                                    onchange={on_field_change(OptionField::PageCount)}
                                />
                            </label>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
