/// Where the backend lives. The realtime url is derived from the base url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub ws_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let ws_url = if let Some(rest) = base_url.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = base_url.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            base_url.clone()
        };
        Self { base_url, ws_url }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_url_follows_scheme() {
        let cfg = ClientConfig::new("http://127.0.0.1:8000/");
        assert_eq!(cfg.base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.ws_url, "ws://127.0.0.1:8000");

        let cfg = ClientConfig::new("https://events.campus.edu");
        assert_eq!(cfg.ws_url, "wss://events.campus.edu");
        assert_eq!(cfg.api_url("/api/events"), "https://events.campus.edu/api/events");
    }
}
