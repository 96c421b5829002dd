//! # Middleware Module
//!
//! Pluggable observation hooks around each dispatch. The original handler
//! had zero observability - failures vanished silently. The display contract
//! keeps that silence (nothing is written on failure), so middleware is
//! where the silence gets an audit trail: tracing events and metrics
//! counters, without changing what the user sees.

mod core;
mod metrics;
mod tracing;

pub use core::Middleware;
pub use metrics::MetricsMiddleware;
pub use tracing::TracingMiddleware;
