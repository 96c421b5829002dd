//! # Transport Module
//!
//! The transport is the facility that performs one HTTP GET round trip for
//! the dispatcher. The upstream client drove a shared mutable request object
//! through readystate callbacks; here the same round trip is a single-shot
//! call returning `Result<TransportReply>`:
//!
//! - `Ok(reply)` - the request reached its terminal state; `reply.status`
//!   and `reply.body` carry whatever the server answered.
//! - `Err(_)` - the transport failed before producing a response (connection
//!   refused, DNS failure, timeout if one was configured).
//!
//! Returning from `fetch` *is* the terminal state: no further progress
//! signals exist. The dispatcher owns the only policy decision (act on 200,
//! ignore everything else); transports report outcomes without filtering.
//!
//! [`HttpTransport`] is the production implementation. Tests substitute
//! scripted transports to control completion order and failure modes.

mod http;

pub use http::HttpTransport;

/// Terminal result of one request round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code answered by the server.
    pub status: u16,
    /// Raw response body, unparsed and unescaped.
    pub body: String,
}

impl TransportReply {
    /// Whether the reply carries the one status the dispatcher acts on.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Single-shot request facility.
///
/// `fetch` blocks the calling coroutine until the request reaches its
/// terminal state. The dispatcher always invokes it from a dedicated
/// coroutine, so the triggering caller is never blocked.
pub trait Transport: Send + Sync {
    /// Issue one GET for the given relative target and wait for completion.
    fn fetch(&self, target: &str) -> anyhow::Result<TransportReply>;
}
