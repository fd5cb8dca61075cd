//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.SWIFTLOGIN_CONFIG` (if present) so static
//! deployments can point at an API or change verbosity without rebuilding.
//! Configuration values are public; do not store secrets here.

/// Delay of the simulated submission when no API is configured.
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_500;
/// Log level used when none (or an invalid one) is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Auth API base URL. Empty means submissions are simulated.
    pub api_base_url: String,
    pub submit_delay_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        let build = RuntimeConfig {
            api_base_url: option_env!("SWIFTLOGIN_API_BASE_URL").and_then(normalize_runtime_value),
            submit_delay_ms: option_env!("SWIFTLOGIN_SUBMIT_DELAY_MS")
                .and_then(normalize_runtime_value),
            log_level: option_env!("SWIFTLOGIN_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Whether submissions go to a real API instead of the simulated delay.
    pub fn has_api(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    submit_delay_ms: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.submit_delay_ms.and_then(|value| value.parse::<u32>().ok()) {
        config.submit_delay_ms = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SWIFTLOGIN_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        submit_delay_ms: read_runtime_value(&object, "submit_delay_ms"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Reads a string or number property; numbers are accepted for the delay.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
