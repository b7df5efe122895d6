//! `TmdbClient` and the generic fetch pipeline shared by every endpoint.

use log::warn;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pool::ProxyPool;
use crate::types::ApiStatus;

/// TMDB API client.
///
/// Owns its configuration outright. Endpoint methods (see the `tv_*` family)
/// format a URL and hand it to the one fetch pipeline; there is no other
/// request path.
#[derive(Debug)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    pool: Option<ProxyPool>,
}

impl TmdbClient {
    /// Build a client from `config`.
    ///
    /// Proxying activates only when the flag is set and the list holds at
    /// least two servers; rotating over a single entry is no different from
    /// dispatching directly. Every proxy URL is validated here, so a
    /// misconfigured pool fails construction rather than a later request.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProxyUrl`] when a proxy record does not form a URL.
    pub fn new(config: Config) -> Result<Self> {
        let pool = if config.use_proxy && config.proxies.len() >= 2 {
            Some(ProxyPool::prepare(&config.proxies)?)
        } else {
            if config.use_proxy {
                warn!(
                    "proxying requested with {} proxy server(s); need at least 2, \
                     dispatching directly",
                    config.proxies.len()
                );
            }
            None
        };

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url,
            pool,
        })
    }

    /// True when requests rotate through a proxy pool.
    pub fn uses_proxies(&self) -> bool {
        self.pool.is_some()
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the transport for one request: a fresh client, routed through
    /// the pool's next slot when proxying is active. Clients share no
    /// mutable state, so concurrent requests only contend on the selector
    /// cursor.
    fn http_client(&self) -> Result<Client> {
        let builder = Client::builder();
        let builder = match self.pool.as_ref().and_then(ProxyPool::next_proxy) {
            Some(proxy) => builder.proxy(proxy),
            None => builder,
        };
        Ok(builder.build()?)
    }

    /// Issue one GET to `url` and decode the response into `T`.
    ///
    /// Success is any status in `[200, 300)`. Failure responses are expected
    /// to carry the standard `{status_code, status_message}` envelope; when
    /// they do not, the raw body is surfaced for diagnostics. The response
    /// body is fully consumed (and the connection released) on every path.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http_client()?.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|source| Error::Decode {
                status: status.as_u16(),
                source,
            });
        }

        match serde_json::from_str::<ApiStatus>(&body) {
            Ok(envelope) => Err(Error::Api {
                code: envelope.status_code,
                message: envelope.status_message,
            }),
            Err(source) => Err(Error::ErrorBody {
                status: status.as_u16(),
                body,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::ProxyServer;

    fn proxies(count: usize) -> Vec<ProxyServer> {
        (0..count)
            .map(|i| ProxyServer::new(format!("proxy-{i}.example.com"), "3128"))
            .collect()
    }

    #[test]
    fn proxying_needs_at_least_two_servers() {
        for count in 0..2 {
            let config = Config::builder("secret")
                .use_proxy(true)
                .proxies(proxies(count))
                .build();
            let client = TmdbClient::new(config).unwrap();
            assert!(!client.uses_proxies(), "{count} proxies");
        }

        let config = Config::builder("secret")
            .use_proxy(true)
            .proxies(proxies(2))
            .build();
        assert!(TmdbClient::new(config).unwrap().uses_proxies());
    }

    #[test]
    fn proxy_list_is_inert_without_the_flag() {
        let config = Config::builder("secret").proxies(proxies(3)).build();
        assert!(!TmdbClient::new(config).unwrap().uses_proxies());
    }

    #[test]
    fn bad_proxy_url_fails_at_construction() {
        let mut servers = proxies(2);
        servers[1].host = "not a host".into();
        let config = Config::builder("secret")
            .use_proxy(true)
            .proxies(servers)
            .build();
        assert!(matches!(
            TmdbClient::new(config).unwrap_err(),
            Error::InvalidProxyUrl { .. }
        ));
    }
}
