//! Round-robin selection over a prepared proxy pool.

use log::debug;
use parking_lot::Mutex;

use crate::error::Result;
use crate::proxy::ProxyServer;

/// Cyclic index dispenser over a fixed number of slots.
///
/// Yields 0, 1, ..., N-1, 0, 1, ... forever, wrapping silently at the pool
/// boundary. Safe for concurrent use: the cursor is advanced under a lock,
/// so no index is skipped or handed out twice beyond the natural
/// interleaving of concurrent callers.
#[derive(Debug)]
pub struct RoundRobin {
    /// Next position to hand out, always in `[0, modulus)`.
    cursor: Mutex<usize>,
    modulus: usize,
}

impl RoundRobin {
    /// Create a selector over `modulus` slots.
    ///
    /// `modulus` must be non-zero; pools guard this before construction.
    pub fn new(modulus: usize) -> Self {
        debug_assert!(modulus > 0, "selector needs at least one slot");
        Self {
            cursor: Mutex::new(0),
            modulus,
        }
    }

    /// Next 0-based slot index.
    pub fn next_index(&self) -> usize {
        let mut cursor = self.cursor.lock();
        let index = *cursor;
        *cursor = (index + 1) % self.modulus;
        index
    }
}

/// An immutable pool of proxy servers with pre-validated transports.
///
/// Prepared once and read for the life of the client; the only mutable state
/// is the selector cursor.
#[derive(Debug)]
pub struct ProxyPool {
    /// Defensive copy of the caller's records.
    servers: Vec<ProxyServer>,
    /// Per-slot transport. `None` marks a `localhost` slot that dispatches
    /// directly.
    slots: Vec<Option<reqwest::Proxy>>,
    selector: RoundRobin,
}

impl ProxyPool {
    /// Prepare a pool from the caller's records.
    ///
    /// The records are copied, so mutating the caller's list afterwards
    /// cannot affect the pool. Every non-`localhost` URL is parsed here;
    /// a malformed entry fails construction instead of surfacing
    /// mid-traffic. `servers` must not be empty; the client only builds a
    /// pool for lists of two or more.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProxyUrl`](crate::Error::InvalidProxyUrl) for the
    /// first record that does not form a valid URL.
    pub fn prepare(servers: &[ProxyServer]) -> Result<Self> {
        let servers = servers.to_vec();

        let mut slots = Vec::with_capacity(servers.len());
        for server in &servers {
            if server.is_direct() {
                slots.push(None);
            } else {
                let url = server.to_url()?;
                slots.push(Some(reqwest::Proxy::all(url)?));
            }
        }

        debug!("proxy pool prepared with {} slots", servers.len());

        let selector = RoundRobin::new(servers.len());
        Ok(Self {
            servers,
            slots,
            selector,
        })
    }

    /// The records this pool was prepared from.
    pub fn servers(&self) -> &[ProxyServer] {
        &self.servers
    }

    /// Number of slots in the pool.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the pool has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Advance the selector and return the chosen slot's transport.
    ///
    /// `None` means the selected slot is a `localhost` escape hatch and the
    /// request goes out directly.
    pub(crate) fn next_proxy(&self) -> Option<reqwest::Proxy> {
        let index = self.selector.next_index();
        debug!("dispatching through proxy slot {index}");
        self.slots[index].clone()
    }
}
