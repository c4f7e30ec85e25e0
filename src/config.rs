//! Build-time configuration for the account API with an optional runtime
//! override. The runtime config is read from `window.GYM_TRACKER_CONFIG` (if
//! present) so static deployments can point at another API without
//! rebuilding. Configuration values are public; do not store secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when nothing is configured at build time.
const DEFAULT_API_BASE_URL: &str = "http://localhost:4001";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("GYM_TRACKER_API_BASE_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());

        let mut config = Self { api_base_url };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins `path` onto the configured API base.
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("GYM_TRACKER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
    })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(feature = "hydrate")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
