#![allow(dead_code)]

pub mod runtime {
    use std::sync::Once;

    /// Ensures May coroutines are configured only once
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
        });
    }
}

pub mod transports {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use emotion_dispatch::transport::{Transport, TransportReply};

    /// Transport that records every target and answers from a script.
    ///
    /// Replies are consumed in order; running past the script is a test bug
    /// and panics.
    pub struct ScriptedTransport {
        targets: Mutex<Vec<String>>,
        replies: Mutex<VecDeque<anyhow::Result<TransportReply>>>,
    }

    impl ScriptedTransport {
        pub fn new(replies: Vec<anyhow::Result<TransportReply>>) -> Self {
            Self {
                targets: Mutex::new(Vec::new()),
                replies: Mutex::new(replies.into_iter().collect()),
            }
        }

        /// Script a single reply with the given status and body.
        pub fn once(status: u16, body: &str) -> Self {
            Self::new(vec![Ok(TransportReply {
                status,
                body: body.to_string(),
            })])
        }

        /// Script a single transport-level failure.
        pub fn once_failing(message: &str) -> Self {
            Self::new(vec![Err(anyhow::anyhow!(message.to_string()))])
        }

        /// Targets fetched so far, in dispatch order.
        pub fn targets(&self) -> Vec<String> {
            self.targets.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn fetch(&self, target: &str) -> anyhow::Result<TransportReply> {
            self.targets.lock().unwrap().push(target.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted transport ran out of replies")
        }
    }

    /// Transport whose completions are released manually, per target.
    ///
    /// Each expected target gets a gate channel; `fetch` blocks the dispatch
    /// coroutine until the test sends a reply through the matching gate.
    /// This is how completion order is forced in race tests, and how "never
    /// completes" is modeled (register a gate and never feed it).
    pub struct GatedTransport {
        gates: Mutex<HashMap<String, may::sync::mpsc::Receiver<TransportReply>>>,
        targets: Mutex<Vec<String>>,
    }

    impl GatedTransport {
        pub fn new() -> Self {
            Self {
                gates: Mutex::new(HashMap::new()),
                targets: Mutex::new(Vec::new()),
            }
        }

        /// Register a gate for the given target. Keep the returned sender
        /// alive: dropping it unblocks the fetch with an error instead.
        pub fn gate(&self, target: &str) -> may::sync::mpsc::Sender<TransportReply> {
            let (tx, rx) = may::sync::mpsc::channel();
            self.gates.lock().unwrap().insert(target.to_string(), rx);
            tx
        }

        pub fn targets(&self) -> Vec<String> {
            self.targets.lock().unwrap().clone()
        }
    }

    impl Transport for GatedTransport {
        fn fetch(&self, target: &str) -> anyhow::Result<TransportReply> {
            self.targets.lock().unwrap().push(target.to_string());
            let rx = self
                .gates
                .lock()
                .unwrap()
                .remove(target)
                .expect("no gate registered for target");
            rx.recv()
                .map_err(|_| anyhow::anyhow!("gate closed before a reply was released"))
        }
    }
}
