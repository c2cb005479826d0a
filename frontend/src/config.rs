use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const SESSION_ENDPOINT_PATH: &str = "/api/auth/session";

/// Web app settings for the identity provider SDK, in the provider's own
/// camelCase shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
}

impl FirebaseWebConfig {
    /// Sign-in needs at least the key, auth domain and project.
    pub fn is_complete(&self) -> bool {
        [&self.api_key, &self.auth_domain, &self.project_id]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub maps_api_key: Option<String>,
    pub session_endpoint: Option<String>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub firebase: Option<FirebaseWebConfig>,
}

/// Fully resolved settings. Every field has a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub maps_api_key: String,
    pub session_endpoint: String,
    pub log_level: log::Level,
    /// `None` when no complete identity provider config was found.
    pub firebase: Option<FirebaseWebConfig>,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

impl RuntimeConfig {
    /// Fills gaps in `self` with values from `other`.
    pub fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_empty(self.api_base_url).or(non_empty(other.api_base_url)),
            maps_api_key: non_empty(self.maps_api_key).or(non_empty(other.maps_api_key)),
            session_endpoint: non_empty(self.session_endpoint)
                .or(non_empty(other.session_endpoint)),
            log_level: non_empty(self.log_level).or(non_empty(other.log_level)),
            firebase: self
                .firebase
                .filter(FirebaseWebConfig::is_complete)
                .or(other.firebase.filter(FirebaseWebConfig::is_complete)),
        }
    }

    pub fn resolve(self, origin: Option<&str>) -> ResolvedConfig {
        let api_base_url = non_empty(self.api_base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let session_endpoint = non_empty(self.session_endpoint).unwrap_or_else(|| {
            format!(
                "{}{}",
                origin.unwrap_or_default().trim_end_matches('/'),
                SESSION_ENDPOINT_PATH
            )
        });
        let log_level = self
            .log_level
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(log::Level::Info);
        ResolvedConfig {
            api_base_url,
            maps_api_key: self.maps_api_key.unwrap_or_default(),
            session_endpoint,
            log_level,
            firebase: self.firebase.filter(FirebaseWebConfig::is_complete),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn read_global(name: &str) -> RuntimeConfig {
    let Some(w) = web_sys::window() else {
        return RuntimeConfig::default();
    };
    let Ok(any) = js_sys::Reflect::get(&w, &name.into()) else {
        return RuntimeConfig::default();
    };
    if any.is_undefined() || any.is_null() {
        return RuntimeConfig::default();
    }
    // Accept both upper and lower case keys.
    let field = |upper: &str, lower: &str| {
        js_sys::Reflect::get(&any, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&any, &lower.into()).ok())
            .and_then(|v| v.as_string())
    };
    RuntimeConfig {
        api_base_url: field("API_BASE_URL", "api_base_url"),
        maps_api_key: field("MAPS_API_KEY", "maps_api_key"),
        session_endpoint: field("SESSION_ENDPOINT", "session_endpoint"),
        log_level: field("LOG_LEVEL", "log_level"),
        firebase: firebase_field(&any),
    }
}

fn firebase_field(target: &wasm_bindgen::JsValue) -> Option<FirebaseWebConfig> {
    let value = ["FIREBASE", "firebase"]
        .iter()
        .filter_map(|key| js_sys::Reflect::get(target, &(*key).into()).ok())
        .find(|v| v.is_object())?;
    let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = format!("{}/config.json", window_origin()?);
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves configuration once: `window.__KENCANKUY_ENV`, then
/// `window.__KENCANKUY_CONFIG`, then `./config.json`, then defaults.
pub async fn resolved() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut merged = read_global("__KENCANKUY_ENV").merge(read_global("__KENCANKUY_CONFIG"));
    if merged.api_base_url.is_none()
        || merged.maps_api_key.is_none()
        || merged.firebase.is_none()
    {
        if let Some(file) = fetch_runtime_config().await {
            merged = merged.merge(file);
        }
    }
    let resolved = merged.resolve(window_origin().as_deref());
    let _ = RESOLVED.set(resolved.clone());
    RESOLVED.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    resolved().await.api_base_url
}

pub async fn await_session_endpoint() -> String {
    resolved().await.session_endpoint
}

/// Synchronous view for render paths; empty until `init` has completed.
pub fn maps_api_key() -> String {
    RESOLVED
        .get()
        .map(|cfg| cfg.maps_api_key.clone())
        .unwrap_or_default()
}

pub async fn init() -> ResolvedConfig {
    resolved().await
}
