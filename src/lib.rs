//! # tmdb-rotate
//!
//! A TMDB v3 API client that can rotate requests across a pool of proxy
//! servers.
//!
//! Every request is a plain GET authenticated with the `api_key` query
//! parameter. When a proxy pool with at least two servers is configured,
//! each request goes out through the next server in round-robin order; a
//! slot whose host is `localhost` dispatches directly, which disables
//! proxying for that slot without resizing the pool.
//!
//! ```no_run
//! use tmdb_rotate::{Config, ProxyServer, TmdbClient};
//!
//! # async fn run() -> tmdb_rotate::Result<()> {
//! let config = Config::builder("api-key")
//!     .use_proxy(true)
//!     .proxies(vec![
//!         ProxyServer::new("proxy-a.example.com", "3128"),
//!         ProxyServer::new("proxy-b.example.com", "3128"),
//!     ])
//!     .build();
//!
//! let client = TmdbClient::new(config)?;
//! let show = client.tv_info(1399, &Default::default()).await?;
//! println!("{}", show.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod pool;
pub mod proxy;
pub mod types;
mod tv;
mod utils;

pub use client::TmdbClient;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use pool::{ProxyPool, RoundRobin};
pub use proxy::ProxyServer;
pub use tv::Options;
pub use utils::to_pretty_json;
