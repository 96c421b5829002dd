//! # Dispatcher Module
//!
//! Coroutine-based request dispatch for the detection client. This is the
//! reimplementation of the original browser handler: where that handler read
//! an input field by global id, drove an `XMLHttpRequest` through readystate
//! callbacks, and poked the response into a page element, the dispatcher
//! takes its input and display resources as explicit dependencies and turns
//! the callback state machine into a single-shot `Result` with explicit
//! success/failure branches.
//!
//! ## Request Flow
//!
//! 1. Trigger: [`Dispatcher::dispatch`] samples the [`TextSource`] and
//!    builds the relative target (`emotionDetector?inputText=...`)
//! 2. A `may` coroutine is spawned for the round trip; the trigger returns
//!    immediately with a [`DispatchHandle`]
//! 3. The coroutine calls [`Transport::fetch`] and branches on the result:
//!    200 writes the raw body to the display, everything else leaves it
//!    untouched
//! 4. The outcome is reported over the handle's channel and via `tracing`
//!
//! ## Concurrency
//!
//! Dispatches are independent and uncoordinated. Two rapid triggers create
//! two in-flight requests that may complete in either order; both write the
//! same display element, so the surviving content belongs to whichever
//! completed last ("last response wins"). The original offered no
//! cancellation and neither does this - a handle can be awaited or dropped,
//! not aborted.
//!
//! [`TextSource`]: crate::ui::TextSource
//! [`Transport::fetch`]: crate::transport::Transport::fetch

mod core;

pub use core::{DetectRequest, DispatchHandle, DispatchOutcome, Dispatcher, IgnoreReason};
