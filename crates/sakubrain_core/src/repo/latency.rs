//! Simulated network latency for in-memory stores.
//!
//! Every repository call sleeps for the delay of its call class before
//! touching the store, then emits one `repo_call` log event with duration.

use crate::repo::RepoResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Kind of repository call, used to pick a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallClass {
    /// Single-record or small reference reads.
    Lookup,
    /// List queries and aggregates.
    Query,
    /// In-place mutation of one record.
    Update,
    Delete,
    /// Full record upsert.
    Save,
}

/// Per-call-class delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatencyProfile {
    pub lookup_ms: u64,
    pub query_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub save_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::network_like()
    }
}

impl LatencyProfile {
    /// Delays that feel like a remote API.
    pub const fn network_like() -> Self {
        Self {
            lookup_ms: 200,
            query_ms: 300,
            update_ms: 300,
            delete_ms: 400,
            save_ms: 500,
        }
    }

    /// No delay at all.
    pub const fn instant() -> Self {
        Self {
            lookup_ms: 0,
            query_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            save_ms: 0,
        }
    }

    pub fn delay_for(&self, class: CallClass) -> Duration {
        let millis = match class {
            CallClass::Lookup => self.lookup_ms,
            CallClass::Query => self.query_ms,
            CallClass::Update => self.update_ms,
            CallClass::Delete => self.delete_ms,
            CallClass::Save => self.save_ms,
        };
        Duration::from_millis(millis)
    }

    /// Sleeps for the class delay, runs `call`, and logs the outcome.
    pub(crate) fn run<T>(
        &self,
        module: &'static str,
        op: &'static str,
        class: CallClass,
        call: impl FnOnce() -> RepoResult<T>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let delay = self.delay_for(class);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let result = call();
        match &result {
            Ok(_) => debug!(
                "event=repo_call module={module} op={op} status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=repo_call module={module} op={op} status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{CallClass, LatencyProfile};
    use std::time::Duration;

    #[test]
    fn network_profile_orders_saves_slowest() {
        let profile = LatencyProfile::network_like();
        assert_eq!(profile.delay_for(CallClass::Lookup), Duration::from_millis(200));
        assert_eq!(profile.delay_for(CallClass::Save), Duration::from_millis(500));
    }

    #[test]
    fn instant_profile_has_no_delay() {
        let profile = LatencyProfile::instant();
        for class in [
            CallClass::Lookup,
            CallClass::Query,
            CallClass::Update,
            CallClass::Delete,
            CallClass::Save,
        ] {
            assert!(profile.delay_for(class).is_zero());
        }
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let profile: LatencyProfile = serde_json::from_str(r#"{"saveMs": 5}"#).unwrap();
        assert_eq!(profile.save_ms, 5);
        assert_eq!(profile.query_ms, 300);
    }
}
