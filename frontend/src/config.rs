use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to fetch runtime config: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("runtime config request returned status {0}")]
    Status(u16),
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global_key(_global: &str, _keys: &[&str]) -> Option<String> {
    None
}

fn snapshot_from_globals() -> Option<String> {
    // window.__STAFFDESK_ENV (env.js) wins over window.__STAFFDESK_CONFIG.
    read_global_key("__STAFFDESK_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__STAFFDESK_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

/// Trims whitespace and trailing slashes so paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    API_BASE_URL.get_or_init(|| value).clone()
}

async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let resp = reqwest::get("./config.json").await?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) if !url.trim().is_empty() => return cache_base_url(&url),
        Ok(_) => log::info!("config.json has no api_base_url; using default"),
        Err(err) => log::warn!("{}; using default API base URL", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://hr.example.com/api/ "),
            "https://hr.example.com/api"
        );
        assert_eq!(normalize_base_url("http://localhost:3000/api"), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://hr.example.com/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://hr.example.com/api"));

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }

    #[test]
    fn globals_are_absent_outside_the_browser() {
        assert!(snapshot_from_globals().is_none());
    }
}
