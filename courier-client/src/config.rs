//! Client configuration
//!
//! The bearer credential is part of the configuration and is injected into
//! every request by the transport; business logic never reads it from
//! ambient storage.

/// Client configuration for connecting to the delivery-management backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.example.com"); an empty value
    /// means same-origin relative paths
    pub base_url: String,

    /// Bearer credential; absence is not an error at this layer, the
    /// backend is the authority on authorization
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Records per page for the report collector
    pub page_size: u32,

    /// Fail-closed cap on report pagination: collection past this many
    /// pages reports an error rather than looping forever
    pub max_pages: u32,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: 30,
            page_size: 1000,
            max_pages: 100,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the collector page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the collector page cap
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Load configuration from the environment
    ///
    /// `COURIER_BASE_URL` selects the backend origin (defaults to empty,
    /// i.e. same-origin relative paths); `COURIER_API_TOKEN`,
    /// `COURIER_TIMEOUT`, `COURIER_PAGE_SIZE` and `COURIER_MAX_PAGES`
    /// override the remaining fields when set.
    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var("COURIER_BASE_URL").unwrap_or_default());
        if let Ok(token) = std::env::var("COURIER_API_TOKEN") {
            if !token.is_empty() {
                config = config.with_token(token);
            }
        }
        if let Some(timeout) = env_number("COURIER_TIMEOUT") {
            config = config.with_timeout(timeout);
        }
        if let Some(page_size) = env_number("COURIER_PAGE_SIZE") {
            config = config.with_page_size(page_size as u32);
        }
        if let Some(max_pages) = env_number("COURIER_MAX_PAGES") {
            config = config.with_max_pages(max_pages as u32);
        }
        config
    }

    /// Create an HTTP API client from this configuration
    pub fn build_api(&self) -> crate::ClientResult<crate::HttpCourierApi> {
        let transport = crate::HttpTransport::new(self)?;
        Ok(crate::HttpCourierApi::new(transport))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("")
    }
}

fn env_number(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
