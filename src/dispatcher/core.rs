//! Dispatcher core module - the request/response round trip.

use std::sync::Arc;
use std::time::Instant;

use http::Method;
use may::coroutine;
use may::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::ids::RequestId;
use crate::middleware::Middleware;
use crate::runtime_config::RuntimeConfig;
use crate::target::build_target;
use crate::transport::Transport;
use crate::ui::{DisplaySink, TextSource};

/// One detection request as sampled at trigger time.
///
/// Captures everything the dispatch coroutine and the middleware hooks need:
/// the correlation id, the (fixed) method, the built relative target, and
/// the input text that produced it. The input is consumed at invocation
/// time; later edits to the source do not affect this request.
#[derive(Debug, Clone)]
pub struct DetectRequest {
    /// Unique dispatch id for tracing and correlation
    pub request_id: RequestId,
    /// HTTP method (always GET for the detector endpoint)
    pub method: Method,
    /// Relative request target, e.g. `emotionDetector?inputText=hello`
    pub target: String,
    /// Input text exactly as read from the source
    pub input_text: String,
}

/// Why a completed dispatch left the display untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The transport reached its terminal state but the status was not 200.
    NonSuccess { status: u16 },
    /// The transport failed before producing a response.
    TransportFailed { message: String },
}

/// Terminal outcome of one dispatch.
///
/// The display element is only written for `Displayed`; every `Ignored`
/// outcome leaves it exactly as it was. The outcome is reported through the
/// [`DispatchHandle`] and through structured logs - the display itself stays
/// silent on failure, as the original behavior demands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Status 200: the raw body was assigned verbatim to the display.
    Displayed { status: u16, body_bytes: usize },
    /// Any other terminal state: no display write, no retry.
    Ignored { reason: IgnoreReason },
}

/// Handle to one in-flight dispatch.
///
/// Returned immediately by [`Dispatcher::dispatch`]; the trigger never
/// blocks. Waiting is optional - dropping the handle keeps the request
/// in flight and preserves fire-and-forget behavior. The handle only
/// observes; it cannot cancel the request.
pub struct DispatchHandle {
    /// Dispatch id, for correlating with log output
    pub request_id: RequestId,
    outcome_rx: mpsc::Receiver<DispatchOutcome>,
}

impl DispatchHandle {
    /// Block until the dispatch reaches its terminal state.
    ///
    /// # Errors
    ///
    /// Fails if the dispatch coroutine terminated without reporting an
    /// outcome (it could not be spawned, or it panicked).
    pub fn wait(&self) -> anyhow::Result<DispatchOutcome> {
        self.outcome_rx
            .recv()
            .map_err(|_| anyhow::anyhow!("dispatch coroutine ended without reporting an outcome"))
    }
}

/// Client-side request dispatcher for the detection endpoint.
///
/// Owns its collaborators explicitly: the transport that performs the round
/// trip, the display sink that receives successful response bodies, and an
/// ordered middleware list observing each dispatch. Input sources are passed
/// per invocation, since different triggers may read different fields.
///
/// # Concurrency
///
/// Each dispatch runs on its own `may` coroutine. Invocations are
/// independent and uncoordinated: two in-flight requests may complete in
/// either order and both write the shared display, so the content ends up
/// being the body of whichever completed last. No cancellation is offered.
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    display: Arc<dyn DisplaySink>,
    middlewares: Vec<Arc<dyn Middleware>>,
    config: ClientConfig,
    stack_size: usize,
}

impl Dispatcher {
    /// Create a dispatcher over the given transport and display sink.
    ///
    /// The coroutine stack size is read from the environment
    /// (`EMOD_STACK_SIZE`, see [`RuntimeConfig`]).
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        display: Arc<dyn DisplaySink>,
        config: ClientConfig,
    ) -> Self {
        Self {
            transport,
            display,
            middlewares: Vec::new(),
            config,
            stack_size: RuntimeConfig::from_env().stack_size,
        }
    }

    /// Add middleware to the dispatch pipeline.
    ///
    /// Middleware is executed in the order it's added: `before` hooks run
    /// synchronously at trigger time, `after` hooks run on the dispatch
    /// coroutine once the outcome is known.
    pub fn add_middleware(&mut self, mw: Arc<dyn Middleware>) {
        self.middlewares.push(mw);
    }

    /// The display sink shared by all dispatches.
    #[must_use]
    pub fn display(&self) -> Arc<dyn DisplaySink> {
        Arc::clone(&self.display)
    }

    /// Trigger one dispatch: read the source, issue the request, return.
    ///
    /// The call itself only samples the input, builds the target, and spawns
    /// the dispatch coroutine - it never blocks on the network. The visible
    /// effect (a display write on status 200) happens from the coroutine,
    /// arbitrarily later or never.
    #[must_use]
    pub fn dispatch(&self, source: &dyn TextSource) -> DispatchHandle {
        let input_text = source.current_text();
        let target = build_target(&self.config, &input_text);
        let request_id = RequestId::new();

        let request = DetectRequest {
            request_id,
            method: Method::GET,
            target,
            input_text,
        };

        // D1: Trigger
        debug!(
            request_id = %request_id,
            target = %request.target,
            input_bytes = request.input_text.len(),
            "Dispatch triggered"
        );

        for mw in &self.middlewares {
            mw.before(&request);
        }

        let (outcome_tx, outcome_rx) = mpsc::channel::<DispatchOutcome>();
        let transport = Arc::clone(&self.transport);
        let display = Arc::clone(&self.display);
        let middlewares = self.middlewares.clone();
        let stack_size = self.stack_size;

        // SAFETY: may::coroutine::Builder::spawn() is marked unsafe by the may
        // runtime. The unsafety comes from the coroutine runtime's requirements,
        // not from this function's logic. The closure is Send + 'static: it owns
        // Arc clones of the transport, display, and middleware list, and reports
        // back through a channel rather than borrowed state.
        let spawn_result = unsafe {
            coroutine::Builder::new()
                .stack_size(stack_size)
                .spawn(move || {
                    // D2: Request issued
                    info!(
                        request_id = %request.request_id,
                        method = %request.method,
                        target = %request.target,
                        "Request issued"
                    );

                    let start = Instant::now();
                    let outcome = match transport.fetch(&request.target) {
                        Ok(reply) if reply.is_success() => {
                            // D3: Success - the one case that touches the display
                            let body_bytes = reply.body.len();
                            display.set_content(reply.body);
                            info!(
                                request_id = %request.request_id,
                                status = reply.status,
                                body_bytes = body_bytes,
                                latency_ms = start.elapsed().as_millis() as u64,
                                "Response displayed"
                            );
                            DispatchOutcome::Displayed {
                                status: reply.status,
                                body_bytes,
                            }
                        }
                        Ok(reply) => {
                            // D4: Terminal but not 200 - display untouched
                            warn!(
                                request_id = %request.request_id,
                                status = reply.status,
                                latency_ms = start.elapsed().as_millis() as u64,
                                "Non-success status - display left unchanged"
                            );
                            DispatchOutcome::Ignored {
                                reason: IgnoreReason::NonSuccess {
                                    status: reply.status,
                                },
                            }
                        }
                        Err(e) => {
                            // D5: Transport failure - display untouched
                            error!(
                                request_id = %request.request_id,
                                error = %e,
                                latency_ms = start.elapsed().as_millis() as u64,
                                "Transport failed - display left unchanged"
                            );
                            DispatchOutcome::Ignored {
                                reason: IgnoreReason::TransportFailed {
                                    message: e.to_string(),
                                },
                            }
                        }
                    };

                    let latency = start.elapsed();
                    for mw in &middlewares {
                        mw.after(&request, &outcome, latency);
                    }

                    // The handle may have been dropped (fire-and-forget); a
                    // closed channel is not an error here.
                    let _ = outcome_tx.send(outcome);
                })
        };

        if let Err(e) = spawn_result {
            // Handle stays usable: wait() reports the closed channel.
            error!(
                request_id = %request_id,
                error = %e,
                stack_size = stack_size,
                "Failed to spawn dispatch coroutine - CRITICAL"
            );
        }

        DispatchHandle {
            request_id,
            outcome_rx,
        }
    }
}
