use lazy_static::lazy_static;
use tube_catalog::config::BUILD_API_KEY;
use tube_catalog::ApiConfig;
use web_sys::window;

lazy_static! {
    pub static ref API_CONFIG: ApiConfig = get_api_config();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    // Get the specific environment variable
    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    // Convert to string if it's not undefined
    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_key() -> String {
    get_env_var("YOUTUBE_API_KEY")
        .or_else(|| BUILD_API_KEY.map(String::from))
        .unwrap_or_else(|| {
            log::error!("No YOUTUBE_API_KEY configured - every search will be rejected");
            String::new()
        })
}

pub fn get_api_config() -> ApiConfig {
    let config = ApiConfig::new(get_api_key());
    match get_env_var("YOUTUBE_API_BASE_URL") {
        Some(base_url) => config.with_base_url(base_url),
        None => config,
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Long Video Search".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
