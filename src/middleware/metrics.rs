use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use super::Middleware;
use crate::dispatcher::{DetectRequest, DispatchOutcome, IgnoreReason};

/// Middleware for collecting dispatch metrics.
///
/// All counters use atomic operations for thread-safe updates without locks;
/// completion hooks run on dispatch coroutines concurrently.
///
/// Metrics collected:
/// - Dispatched count (triggers)
/// - Displayed count (200 responses that wrote the display)
/// - Ignored count, split into non-success statuses and transport failures
/// - Average completion latency
pub struct MetricsMiddleware {
    dispatched: AtomicUsize,
    displayed: AtomicUsize,
    ignored_non_success: AtomicUsize,
    ignored_transport: AtomicUsize,
    total_latency_ns: AtomicU64,
}

impl Default for MetricsMiddleware {
    fn default() -> Self {
        Self {
            dispatched: AtomicUsize::new(0),
            displayed: AtomicUsize::new(0),
            ignored_non_success: AtomicUsize::new(0),
            ignored_transport: AtomicUsize::new(0),
            total_latency_ns: AtomicU64::new(0),
        }
    }
}

impl MetricsMiddleware {
    /// Create a new metrics middleware with all counters initialized to zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of dispatches triggered
    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::Relaxed)
    }

    /// Number of dispatches that wrote the display (status 200)
    pub fn displayed(&self) -> usize {
        self.displayed.load(Ordering::Relaxed)
    }

    /// Number of completed dispatches that left the display untouched
    pub fn ignored(&self) -> usize {
        self.ignored_non_success.load(Ordering::Relaxed)
            + self.ignored_transport.load(Ordering::Relaxed)
    }

    /// Number of dispatches ignored because of a non-200 status
    pub fn ignored_non_success(&self) -> usize {
        self.ignored_non_success.load(Ordering::Relaxed)
    }

    /// Number of dispatches ignored because the transport failed
    pub fn ignored_transport(&self) -> usize {
        self.ignored_transport.load(Ordering::Relaxed)
    }

    /// Counter snapshot as JSON, for session summaries and health reports.
    pub fn snapshot_json(&self) -> serde_json::Value {
        serde_json::json!({
            "dispatched": self.dispatched(),
            "displayed": self.displayed(),
            "ignored_non_success": self.ignored_non_success(),
            "ignored_transport": self.ignored_transport(),
            "avg_latency_ms": self.average_latency().as_millis() as u64,
        })
    }

    /// Mean time from request issue to terminal state.
    ///
    /// Returns zero duration if no dispatch has completed yet. In-flight
    /// dispatches do not contribute.
    pub fn average_latency(&self) -> Duration {
        let completed = (self.displayed() + self.ignored()) as u64;
        if completed == 0 {
            Duration::from_nanos(0)
        } else {
            Duration::from_nanos(self.total_latency_ns.load(Ordering::Relaxed) / completed)
        }
    }
}

impl Middleware for MetricsMiddleware {
    fn before(&self, _req: &DetectRequest) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    fn after(&self, _req: &DetectRequest, outcome: &DispatchOutcome, latency: Duration) {
        match outcome {
            DispatchOutcome::Displayed { .. } => {
                self.displayed.fetch_add(1, Ordering::Relaxed);
            }
            DispatchOutcome::Ignored {
                reason: IgnoreReason::NonSuccess { .. },
            } => {
                self.ignored_non_success.fetch_add(1, Ordering::Relaxed);
            }
            DispatchOutcome::Ignored {
                reason: IgnoreReason::TransportFailed { .. },
            } => {
                self.ignored_transport.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
    }
}
