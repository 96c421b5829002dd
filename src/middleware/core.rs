use std::time::Duration;

use crate::dispatcher::{DetectRequest, DispatchOutcome};

/// Observation hooks around one dispatch.
///
/// `before` runs synchronously at trigger time, `after` runs on the dispatch
/// coroutine once the terminal outcome is known. Middleware observes only;
/// it cannot veto a dispatch or rewrite the outcome.
pub trait Middleware: Send + Sync {
    fn before(&self, _req: &DetectRequest) {}
    fn after(&self, _req: &DetectRequest, _outcome: &DispatchOutcome, _latency: Duration) {}
}
