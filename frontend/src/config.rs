pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub api_url: String,
}

impl FrontendConfig {
    /// `CAMPUS_EVENTS_API_URL` at runtime on desktop, at build time on web.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let value = std::env::var("CAMPUS_EVENTS_API_URL").ok();
        #[cfg(target_arch = "wasm32")]
        let value = option_env!("CAMPUS_EVENTS_API_URL").map(String::from);
        Self::from_value(value)
    }

    pub fn from_value(value: Option<String>) -> Self {
        let api_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}
