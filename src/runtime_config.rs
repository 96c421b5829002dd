//! # Runtime Configuration Module
//!
//! Environment variable based configuration for the coroutine runtime.
//!
//! ## Environment Variables
//!
//! ### `EMOD_STACK_SIZE`
//!
//! Sets the stack size for dispatch coroutines. Accepts values in:
//! - Decimal: `16384` (16 KB)
//! - Hexadecimal: `0x4000` (16 KB)
//!
//! Default: `0x4000` (16 KB)
//!
//! Each in-flight detection request runs on its own coroutine, so total
//! memory is `stack_size × concurrent dispatches`. A dispatch coroutine only
//! performs one blocking HTTP round trip and one display write, so the
//! default is generous already; raise it if a custom [`crate::transport::Transport`]
//! implementation needs deeper call chains.
//!
//! ## Usage
//!
//! ```rust
//! use emotion_dispatch::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! may::config().set_stack_size(config.stack_size);
//! ```

use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`] to configure
/// the coroutine runtime behavior.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for dispatch coroutines in bytes (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = match env::var("EMOD_STACK_SIZE") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(0x4000)
                } else {
                    val.parse().unwrap_or(0x4000)
                }
            }
            Err(_) => 0x4000,
        };
        RuntimeConfig { stack_size }
    }
}
