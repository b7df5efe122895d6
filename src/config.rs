//! Client configuration.

use crate::proxy::ProxyServer;

/// Default base URL for TMDB API v3.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Configuration for a [`TmdbClient`](crate::TmdbClient).
///
/// Built once and handed to the client, which keeps everything it needs;
/// there is no process-wide state, so two clients with different keys or
/// proxy pools can coexist.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key, sent as the `api_key` query parameter on every request.
    pub api_key: String,
    /// Route requests through the proxy pool. Only takes effect when
    /// `proxies` holds at least two entries.
    pub use_proxy: bool,
    /// Proxy servers to rotate across.
    pub proxies: Vec<ProxyServer>,
    /// Base URL for API requests. Overridable for tests against a local
    /// mock server.
    pub base_url: String,
}

impl Config {
    /// Create a configuration builder. The API key is the one required
    /// field.
    pub fn builder(api_key: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(api_key)
    }
}

/// Builder for [`Config`].
#[derive(Debug)]
pub struct ConfigBuilder {
    api_key: String,
    use_proxy: bool,
    proxies: Vec<ProxyServer>,
    base_url: Option<String>,
}

impl ConfigBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            use_proxy: false,
            proxies: Vec::new(),
            base_url: None,
        }
    }

    /// Enable routing through the proxy pool.
    pub fn use_proxy(mut self, use_proxy: bool) -> Self {
        self.use_proxy = use_proxy;
        self
    }

    /// Set the proxy servers to rotate across.
    pub fn proxies(mut self, proxies: Vec<ProxyServer>) -> Self {
        self.proxies = proxies;
        self
    }

    /// Override the base URL (for tests against a local mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Config {
        Config {
            api_key: self.api_key,
            use_proxy: self.use_proxy,
            proxies: self.proxies,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_direct_against_the_real_api() {
        let config = Config::builder("secret").build();
        assert_eq!(config.api_key, "secret");
        assert!(!config.use_proxy);
        assert!(config.proxies.is_empty());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_override_sticks() {
        let config = Config::builder("secret")
            .base_url("http://127.0.0.1:8080")
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
