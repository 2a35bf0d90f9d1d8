//! Socket endpoint configuration.
//!
//! The page connects to [`DEFAULT_ENDPOINT`] unless the URL carries a
//! `ws` query parameter, e.g. `/?ws=wss://chat.example.com/socket`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ENDPOINT: &str = "ws://localhost:3000";
pub const ENDPOINT_QUERY_PARAM: &str = "ws";

/// Rejected endpoint override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint must start with ws:// or wss://: {0}")]
    Scheme(String),
    #[error("endpoint has no host: {0}")]
    MissingHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_owned() }
    }
}

impl ClientConfig {
    /// Build a config for an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Scheme`] unless the endpoint uses `ws://` or
    /// `wss://`, and [`ConfigError::MissingHost`] when nothing follows it.
    pub fn with_endpoint(raw: &str) -> Result<Self, ConfigError> {
        let endpoint = raw.trim();
        let rest = endpoint
            .strip_prefix("ws://")
            .or_else(|| endpoint.strip_prefix("wss://"))
            .ok_or_else(|| ConfigError::Scheme(endpoint.to_owned()))?;
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::MissingHost(endpoint.to_owned()));
        }
        Ok(Self { endpoint: endpoint.to_owned() })
    }

    /// Resolve an optional override, falling back to the default endpoint.
    pub fn resolve(override_endpoint: Option<&str>) -> Self {
        match override_endpoint {
            None => Self::default(),
            Some(raw) => Self::with_endpoint(raw).unwrap_or_else(|e| {
                leptos::logging::warn!("ignoring endpoint override: {e}");
                Self::default()
            }),
        }
    }

    /// Read the endpoint override from the current page URL.
    pub fn from_browser() -> Self {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let override_endpoint = web_sys::UrlSearchParams::new_with_str(&search)
                .ok()
                .and_then(|params| params.get(ENDPOINT_QUERY_PARAM));
            Self::resolve(override_endpoint.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
