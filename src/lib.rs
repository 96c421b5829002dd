//! # emotion-dispatch
//!
//! **emotion-dispatch** is a coroutine-powered client dispatcher for a remote
//! emotion-detection endpoint, built on the `may` runtime.
//!
//! ## Overview
//!
//! The crate reimplements a familiar browser pattern - read a text field,
//! `GET emotionDetector?inputText=<value>`, write the response body into a
//! display region when the request completes with status 200 - as an
//! embeddable Rust library with explicit dependencies instead of global UI
//! lookups, and a `Result`-returning single-shot transport instead of a
//! callback state machine.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`dispatcher`]** - Coroutine-based request dispatch (the core)
//! - **[`transport`]** - Single-shot GET facility; `reqwest`-backed in production
//! - **[`target`]** - Request target construction (`emotionDetector?inputText=...`)
//! - **[`ui`]** - Injected input ([`ui::TextSource`]) and display
//!   ([`ui::DisplaySink`]) resources
//! - **[`middleware`]** - Observation hooks (tracing, metrics)
//! - **[`config`]** - Client configuration (endpoint, encoding, timeout)
//! - **[`runtime_config`]** - Coroutine runtime tuning from the environment
//! - **[`logging`]** - Structured logging initialization
//! - **[`cli`]** - Command-line front end
//!
//! ## Dispatch Flow
//!
//! 1. A trigger calls [`dispatcher::Dispatcher::dispatch`] with a text source
//! 2. The input is sampled once and the relative target is built; the raw
//!    text is embedded unencoded unless
//!    [`config::ClientConfig::encode_input`] is set
//! 3. A `may` coroutine performs the round trip; the trigger returns a
//!    [`dispatcher::DispatchHandle`] immediately
//! 4. Status 200 assigns the raw body verbatim to the display sink; any
//!    other terminal state leaves the display untouched and is visible only
//!    through logs, metrics, and the handle's outcome channel
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use emotion_dispatch::config::ClientConfig;
//! use emotion_dispatch::dispatcher::Dispatcher;
//! use emotion_dispatch::transport::HttpTransport;
//! use emotion_dispatch::ui::{InMemoryField, InMemoryPanel};
//!
//! let config = ClientConfig::default();
//! let transport = Arc::new(HttpTransport::new(&config).expect("build transport"));
//! let display = Arc::new(InMemoryPanel::new());
//! let dispatcher = Dispatcher::new(transport, display, config);
//!
//! let field = InMemoryField::new("I am glad this happened");
//! let handle = dispatcher.dispatch(&field);
//! let outcome = handle.wait().expect("dispatch outcome");
//! ```
//!
//! ## Concurrency Model
//!
//! Triggers never block: each dispatch runs on its own coroutine and
//! completes independently. Overlapping dispatches write the shared display
//! in completion order - last response wins, which is the inherited (not
//! designed) policy of the original client. There is no cancellation and no
//! retry.
//!
//! ## Runtime Considerations
//!
//! emotion-dispatch uses the `may` coroutine runtime, not tokio or
//! async-std. Stack size for dispatch coroutines is configurable via the
//! `EMOD_STACK_SIZE` environment variable.

pub mod cli;

pub mod config;
pub mod dispatcher;
pub mod ids;
pub mod logging;
pub mod middleware;
pub mod runtime_config;
pub mod target;
pub mod transport;
pub mod ui;

pub use config::ClientConfig;
pub use dispatcher::{DetectRequest, DispatchHandle, DispatchOutcome, Dispatcher, IgnoreReason};
pub use target::build_target;
pub use transport::{HttpTransport, Transport, TransportReply};
pub use ui::{DisplaySink, TextSource};
