use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::logging::{init_logging, LogConfig};
use crate::middleware::{MetricsMiddleware, Middleware, TracingMiddleware};
use crate::runtime_config::RuntimeConfig;
use crate::transport::HttpTransport;
use crate::ui::{ConsolePanel, InMemoryField, StaticText};

/// Command-line interface for the emotion detection client
///
/// Provides a one-shot detection command and an interactive loop that
/// dispatches a request per input line.
#[derive(Parser)]
#[command(name = "emotion-dispatch")]
#[command(about = "Emotion detection client CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send one piece of text to the detector and display the result
    Detect {
        /// Text to analyze
        #[arg(short, long)]
        text: String,

        /// Base URL of the detection service
        #[arg(short, long, env = "EMOD_ENDPOINT")]
        endpoint: Option<String>,

        /// Path to a YAML client configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Percent-encode the input text in the query string
        #[arg(long, default_value_t = false)]
        encode: bool,

        /// Request timeout in milliseconds (default: none)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Read lines from stdin and dispatch each without waiting
    Repl {
        /// Base URL of the detection service
        #[arg(short, long, env = "EMOD_ENDPOINT")]
        endpoint: Option<String>,

        /// Path to a YAML client configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Percent-encode the input text in the query string
        #[arg(long, default_value_t = false)]
        encode: bool,

        /// Request timeout in milliseconds (default: none)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

fn load_config(
    config: Option<&PathBuf>,
    endpoint: Option<String>,
    encode: bool,
    timeout_ms: Option<u64>,
) -> anyhow::Result<ClientConfig> {
    let mut cfg = match config {
        Some(path) => ClientConfig::from_yaml_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(endpoint) = endpoint {
        cfg.endpoint = endpoint;
    }
    if encode {
        cfg.encode_input = true;
    }
    if timeout_ms.is_some() {
        cfg.timeout_ms = timeout_ms;
    }
    Ok(cfg)
}

fn build_dispatcher(cfg: &ClientConfig) -> anyhow::Result<(Dispatcher, Arc<MetricsMiddleware>)> {
    let transport = Arc::new(HttpTransport::new(cfg)?);
    let display = Arc::new(ConsolePanel::new());
    let mut dispatcher = Dispatcher::new(transport, display, cfg.clone());
    let metrics = Arc::new(MetricsMiddleware::new());
    dispatcher.add_middleware(Arc::new(TracingMiddleware));
    dispatcher.add_middleware(Arc::clone(&metrics) as Arc<dyn Middleware>);
    Ok((dispatcher, metrics))
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&LogConfig::from_env())?;
    may::config().set_stack_size(RuntimeConfig::from_env().stack_size);

    match cli.command {
        Commands::Detect {
            text,
            endpoint,
            config,
            encode,
            timeout_ms,
        } => {
            let cfg = load_config(config.as_ref(), endpoint, encode, timeout_ms)?;
            let (dispatcher, _metrics) = build_dispatcher(&cfg)?;

            let handle = dispatcher.dispatch(&StaticText(text));
            // The display write is asynchronous; wait for the terminal state
            // so the process does not exit with the request still in flight.
            // Failures stay off the display and are reported via logs only.
            let outcome = handle.wait()?;
            info!(request_id = %handle.request_id, outcome = ?outcome, "detect complete");
            Ok(())
        }
        Commands::Repl {
            endpoint,
            config,
            encode,
            timeout_ms,
        } => {
            let cfg = load_config(config.as_ref(), endpoint, encode, timeout_ms)?;
            let (dispatcher, metrics) = build_dispatcher(&cfg)?;

            let field = InMemoryField::new("");
            let stdin = io::stdin();
            let mut handles = Vec::new();
            for line in stdin.lock().lines() {
                let line = line?;
                field.set_text(line);
                // Fire-and-forget: a fast typist gets overlapping in-flight
                // requests, and the display shows whichever completes last.
                handles.push(dispatcher.dispatch(&field));
            }

            // Drain before exit so late completions still reach the display.
            for handle in &handles {
                let _ = handle.wait();
            }

            info!(summary = %metrics.snapshot_json(), "session summary");
            Ok(())
        }
    }
}
