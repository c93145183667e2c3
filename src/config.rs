//! Client Configuration
//!
//! Fixed backend address and logging defaults.

/// Backend address used by the app
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// How long a notice banner stays up
pub const NOTICE_DISMISS_MS: u32 = 4000;

/// Where the items REST API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint
    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    pub fn item_url(&self, id: u32) -> String {
        format!("{}/api/items/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Console log level: verbose in debug builds
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
