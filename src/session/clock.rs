//! Coarse server clock synchronization
//!
//! The cooldown compares timestamps against the session authority's clock,
//! not the local one. A client sends one [`ClockSyncRequest`] when the
//! panel opens and keeps using its cached offset until the response
//! arrives (fire-and-forget). The authority answers from its own clock
//! with zero latency. The offset is never persisted.

use serde::{Deserialize, Serialize};

/// Empty request for the authority's current time
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClockSyncRequest;

/// Response carrying the authority's current unix time
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClockSyncResponse {
    pub unix_secs: i64,
}

impl ClockSyncResponse {
    pub fn to_wire(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_wire(raw: &str) -> crate::core::error::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Answer a sync request on the authority side
pub fn respond(local_now_unix: i64) -> ClockSyncResponse {
    ClockSyncResponse {
        unix_secs: local_now_unix,
    }
}

/// Locally cached offset from the authority's clock.
///
/// Eventually consistent and deliberately coarse; it only gates a cooldown
/// measured in hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerClock {
    offset_secs: i64,
    synced: bool,
}

impl ServerClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sync response into the cached offset
    pub fn apply_response(&mut self, response: &ClockSyncResponse, local_now_unix: i64) {
        self.offset_secs = response.unix_secs - local_now_unix;
        self.synced = true;
    }

    /// Current server time estimate; the local clock until the first
    /// response arrives
    pub fn now(&self, local_now_unix: i64) -> i64 {
        local_now_unix + self.offset_secs
    }

    /// Whether at least one response has been applied this session
    pub fn is_synced(&self) -> bool {
        self.synced
    }
}
