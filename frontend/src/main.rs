mod env_variable_utils;
mod logging;
mod router;
mod search;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, API_CONFIG};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    logging::init_logger(is_debug_mode());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        API_CONFIG.base_url,
        is_debug_mode()
    );
}
