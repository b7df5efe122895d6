//! Proxy server records and their URL construction.

use url::Url;

use crate::error::{Error, Result};

/// Sentinel host that turns a pool slot into a direct connection. Lets one
/// rotation slot bypass proxying without resizing the pool.
const DIRECT_SENTINEL: &str = "localhost";

/// One proxy server endpoint.
///
/// Records are immutable once handed to a pool; the pool keeps its own copy,
/// so mutating the caller's list afterwards has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyServer {
    /// Host name or IP address.
    pub host: String,
    /// Port, kept as text the way it appears in the proxy URL.
    pub port: String,
    /// Login, embedded as URL user-info when `auth` is set.
    pub login: String,
    /// Password, embedded as URL user-info when `auth` is set.
    pub password: String,
    /// Whether the proxy requires credentials.
    pub auth: bool,
}

impl ProxyServer {
    /// Create an unauthenticated proxy record.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            login: String::new(),
            password: String::new(),
            auth: false,
        }
    }

    /// Create a proxy record with credentials.
    pub fn with_auth(
        host: impl Into<String>,
        port: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            login: login.into(),
            password: password.into(),
            auth: true,
        }
    }

    /// True when this slot dispatches directly instead of through a proxy.
    pub fn is_direct(&self) -> bool {
        self.host == DIRECT_SENTINEL
    }

    /// Build the proxy URL, embedding user-info when `auth` is set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProxyUrl`] when the record does not form a valid URL.
    pub fn to_url(&self) -> Result<Url> {
        let raw = if self.auth {
            format!(
                "https://{}:{}@{}:{}",
                self.login, self.password, self.host, self.port
            )
        } else {
            format!("https://{}:{}", self.host, self.port)
        };

        Url::parse(&raw).map_err(|source| Error::InvalidProxyUrl { url: raw, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_has_host_and_port() {
        let url = ProxyServer::new("proxy.example.com", "3128").to_url().unwrap();
        assert_eq!(url.as_str(), "https://proxy.example.com:3128/");
        assert_eq!(url.username(), "");
    }

    #[test]
    fn auth_url_embeds_user_info() {
        let proxy = ProxyServer::with_auth("proxy.example.com", "3128", "user", "secret");
        let url = proxy.to_url().unwrap();
        assert_eq!(url.username(), "user");
        assert_eq!(url.password(), Some("secret"));
        assert_eq!(url.host_str(), Some("proxy.example.com"));
    }

    #[test]
    fn localhost_is_direct_regardless_of_other_fields() {
        let proxy = ProxyServer::with_auth("localhost", "8080", "user", "secret");
        assert!(proxy.is_direct());
        assert!(!ProxyServer::new("127.0.0.1", "8080").is_direct());
    }

    #[test]
    fn malformed_record_fails_to_build_a_url() {
        let err = ProxyServer::new("not a host", "3128").to_url().unwrap_err();
        assert!(matches!(err, Error::InvalidProxyUrl { .. }));
    }
}
