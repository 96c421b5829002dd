use std::time::Duration;

use tracing::info;

use super::Middleware;
use crate::dispatcher::{DetectRequest, DispatchOutcome, IgnoreReason};

/// Middleware that emits one structured event per dispatch edge.
///
/// The trigger and the completion happen on different coroutines, so this
/// records paired events keyed by request id rather than holding a span
/// guard across the gap.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn before(&self, req: &DetectRequest) {
        info!(
            request_id = %req.request_id,
            method = %req.method,
            target = %req.target,
            "dispatch start"
        );
    }

    fn after(&self, req: &DetectRequest, outcome: &DispatchOutcome, latency: Duration) {
        match outcome {
            DispatchOutcome::Displayed { status, body_bytes } => info!(
                request_id = %req.request_id,
                status = status,
                body_bytes = body_bytes,
                latency_ms = latency.as_millis() as u64,
                "dispatch displayed"
            ),
            DispatchOutcome::Ignored { reason } => {
                let reason = match reason {
                    IgnoreReason::NonSuccess { status } => format!("status {status}"),
                    IgnoreReason::TransportFailed { message } => message.clone(),
                };
                info!(
                    request_id = %req.request_id,
                    reason = %reason,
                    latency_ms = latency.as_millis() as u64,
                    "dispatch ignored"
                );
            }
        }
    }
}
