use crate::env_variable_utils::get_app_name;
use crate::search::api::{execute_search, GlooApi};
use crate::search::components::{ResultsList, SearchBar};
use crate::search::search_options::SearchOptionsPanel;
use tube_catalog::{RawSearchOptions, Record, SearchOptions};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(SearchApp)]
pub fn search_app() -> Html {
    let search_query = use_state(String::new);
    let raw_options = use_state(RawSearchOptions::default);
    let options_visible = use_state(|| false);
    let records = use_state(Vec::<Record>::default);
    let unresolved = use_state(|| 0usize);
    let searched = use_state(|| false);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);
    // Bumped per search; a search that finishes after a newer one started is dropped.
    let generation = use_mut_ref(|| 0u64);

    let on_search = {
        let search_query = search_query.clone();
        let raw_options = raw_options.clone();
        let records = records.clone();
        let unresolved = unresolved.clone();
        let searched = searched.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let generation = generation.clone();

        Callback::from(move |query: String| {
            search_query.set(query.clone());

            let options = match SearchOptions::parse(&raw_options) {
                Ok(options) => options,
                Err(e) => {
                    log::warn!("Rejected search options: {e}");
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };

            records.set(Vec::new());
            loading.set(true);
            error_message.set(None);

            let records = records.clone();
            let unresolved = unresolved.clone();
            let searched = searched.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let generation = generation.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = GlooApi::from_env();
                let result = execute_search(&api, &query, &options).await;

                if *generation.borrow() != current {
                    log::debug!("Discarding results of superseded search '{query}'");
                    return;
                }

                match result {
                    Ok(outcome) => {
                        log::info!("Showing {} result(s) for '{query}'", outcome.records.len());
                        unresolved.set(outcome.unresolved);
                        records.set(outcome.records);
                    }
                    Err(e) => {
                        log::error!("Search for '{query}' failed: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }
                searched.set(true);
                loading.set(false);
            });
        })
    };

    let on_options_change = {
        let raw_options = raw_options.clone();
        Callback::from(move |updated: RawSearchOptions| raw_options.set(updated))
    };

    let on_options_toggle = {
        let options_visible = options_visible.clone();
        Callback::from(move |()| options_visible.set(!*options_visible))
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-4xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { get_app_name() }
                </h1>

                <SearchBar
                    query={(*search_query).clone()}
                    loading={*loading}
                    on_search={on_search}
                />

                <SearchOptionsPanel
                    options={(*raw_options).clone()}
                    visible={*options_visible}
                    on_toggle={on_options_toggle}
                    on_change={on_options_change}
                />

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <p class="text-red-600 text-center mb-4">{ format!("Error: {msg}") }</p>
                        }
                    } else {
                        html! {}
                    }
                }

                <ResultsList
                    records={(*records).clone()}
                    loading={*loading}
                    searched={*searched}
                    unresolved={*unresolved}
                />
            </div>
        </div>
    }
}
