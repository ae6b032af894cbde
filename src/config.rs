use crate::errors::ChatError;

/// Endpoint used when nothing is configured (local development backend).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";

/// Environment variable holding the chat endpoint URL.
pub const ENDPOINT_ENV: &str = "MOSDAC_API_URL";

/// Client configuration, handed to the controller at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ChatError> {
        let endpoint = endpoint.into().trim().to_string();
        if endpoint.is_empty() {
            return Err(ChatError::Config("endpoint cannot be empty".to_string()));
        }
        let absolute = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        if !absolute && !endpoint.starts_with('/') {
            return Err(ChatError::Config(format!(
                "endpoint '{endpoint}' must be an http(s) URL or a path starting with '/'"
            )));
        }
        Ok(Self { endpoint })
    }

    /// A path such as `/chat` resolves against the page origin in the
    /// browser; native clients need an absolute URL.
    pub fn is_relative(&self) -> bool {
        self.endpoint.starts_with('/')
    }

    /// Builds the config from an optional override, falling back to
    /// [`DEFAULT_ENDPOINT`] when the override is absent or blank.
    pub fn from_override(value: Option<&str>) -> Result<Self, ChatError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_ENDPOINT),
        }
    }

    /// Reads [`ENDPOINT_ENV`] from the process environment.
    ///
    /// Relative paths are rejected here since there is no origin to resolve
    /// them against outside the browser.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ChatError> {
        Self::native(std::env::var(ENDPOINT_ENV).ok().as_deref())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn native(value: Option<&str>) -> Result<Self, ChatError> {
        let config = Self::from_override(value)?;
        if config.is_relative() {
            return Err(ChatError::Config(format!(
                "endpoint '{}' must be an absolute http(s) URL for {ENDPOINT_ENV}",
                config.endpoint
            )));
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string() }
    }
}
