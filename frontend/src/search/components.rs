use crate::utils::{format_count, format_timestamp};
use chrono::Utc;
use tube_catalog::Record;
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoItemProps {
    pub record: Record,
}

#[derive(Properties, PartialEq)]
pub struct ResultsListProps {
    pub records: Vec<Record>,
    pub loading: bool,
    pub searched: bool,
    pub unresolved: usize,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    // Searches start on Enter only.
    let on_keyup = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_search.emit((*current_input).clone());
            }
        })
    };

    html! {
        <div class="flex mb-4">
            <input
                type="text"
                id="yt-query"
                class="flex-grow p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Search YouTube and press Enter..."
                value={(*current_input).clone()}
                oninput={on_input}
                onkeyup={on_keyup}
                disabled={props.loading}
            />
        </div>
    }
}

#[function_component(VideoItem)]
pub fn video_item(props: &VideoItemProps) -> Html {
    let record = &props.record;

    let on_open = {
        let watch_url = record.watch_url();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                if window
                    .open_with_url_and_target(&watch_url, "_blank")
                    .is_err()
                {
                    log::warn!("Could not open {watch_url}");
                }
            }
        })
    };

    // The channel link opens on its own; the click must not also open the video.
    let on_channel_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let duration = record
        .formatted_duration()
        .unwrap_or_else(|| "--:--:--".to_string());

    html! {
        <div class="video flex gap-4 p-4 bg-gray-100 rounded-lg cursor-pointer hover:bg-gray-200" id={record.id().to_string()} onclick={on_open}>
            {
                match &record.thumbnail_url {
                    Some(url) => html! { <img class="thumb" src={url.clone()} alt="" /> },
                    None => html! {},
                }
            }
            <div class="info flex-grow">
                <div class="title text-lg font-semibold text-gray-800">{ record.title.clone() }</div>
                <div class="desc text-sm text-gray-600">{ record.description.clone() }</div>
                <div class="info-footer flex flex-wrap gap-4 text-sm mt-2">
                    <div class="duration">{"⏱️ "}{ duration }</div>
                    <div class="published-at">
                        {"📅 "}{ record.age(Utc::now()).to_string() }
                        <span class="published-at-date ml-1 text-gray-500">{ format_timestamp(&record.published_at) }</span>
                    </div>
                    <div class="channel">
                        {"📺 "}
                        <a href={record.channel_url()} target="_blank" class="text-blue-600 hover:underline" onclick={on_channel_click}>
                            { record.channel_name.clone() }
                        </a>
                    </div>
                    <div class="views">{"👁️ "}{ format_count(record.view_count, "views") }</div>
                    <div class="likes">{"👍 "}{ format_count(record.like_count, "likes") }</div>
                    <div class="comments">{"💬 "}{ format_count(record.comment_count, "comments") }</div>
                    <div class="favs">{"⭐ "}{ format_count(record.favorite_count, "favorites") }</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ResultsList)]
pub fn results_list(props: &ResultsListProps) -> Html {
    if props.loading {
        return html! {
            <p class="text-center text-gray-500">{"Searching..."}</p>
        };
    }

    if !props.searched {
        return html! {};
    }

    html! {
        <div class="mt-8">
            <div id="result-count" class="text-gray-700 mb-4">
                { format!("{} result(s)", props.records.len()) }
                {
                    if props.unresolved > 0 {
                        html! {
                            <span class="ml-2 text-gray-500">
                                { format!("({} without a known duration)", props.unresolved) }
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div id="results" class="space-y-4">
                { for props.records.iter().map(|record| html! {
                    <VideoItem key={record.id().to_string()} record={record.clone()} />
                })}
            </div>
        </div>
    }
}
