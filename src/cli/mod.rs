//! # CLI Module
//!
//! Command-line front end for the detection client. The terminal stands in
//! for the original page: arguments and stdin lines are the input field,
//! stdout is the display element.
//!
//! ## Commands
//!
//! ### `detect`
//!
//! One-shot dispatch; prints the response body on success, prints nothing on
//! failure (the display contract), and exits once the request reaches its
//! terminal state:
//!
//! ```bash
//! emotion-dispatch detect --text "I am glad this happened" \
//!     --endpoint http://127.0.0.1:5000
//! ```
//!
//! ### `repl`
//!
//! Dispatches one request per stdin line without waiting in between, so
//! overlapping in-flight requests behave exactly like rapid re-triggers in
//! the original UI:
//!
//! ```bash
//! printf 'first line\nsecond line\n' | emotion-dispatch repl
//! ```
//!
//! ## Configuration
//!
//! Flags override the YAML config file (`--config`), which overrides the
//! defaults. `EMOD_ENDPOINT`, `EMOD_LOG`, `EMOD_LOG_FORMAT`, `EMOD_LOG_DIR`
//! and `EMOD_STACK_SIZE` are honored from the environment.

mod commands;


pub use commands::{run_cli, Cli, Commands};
