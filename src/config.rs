//! # Client Configuration Module
//!
//! Configuration for the detection client: where the detector endpoint
//! lives, how the request target is shaped, and whether the input text is
//! percent-encoded before it is embedded into the query string.
//!
//! Configuration can be loaded from a YAML file and then overridden
//! programmatically (the CLI maps its flags onto these fields):
//!
//! ```yaml
//! endpoint: "http://127.0.0.1:5000"
//! detector_path: "emotionDetector"
//! query_param: "inputText"
//! encode_input: false
//! timeout_ms: null
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Default relative path of the detection endpoint.
pub const DEFAULT_DETECTOR_PATH: &str = "emotionDetector";

/// Default name of the query parameter carrying the input text.
pub const DEFAULT_QUERY_PARAM: &str = "inputText";

/// Client configuration for the emotion detection dispatcher.
///
/// The defaults reproduce the upstream wire behavior exactly: relative path
/// `emotionDetector`, query parameter `inputText`, input embedded raw with
/// no percent-encoding, and no request timeout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the service hosting the detector endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Relative path of the detector endpoint (no leading slash).
    #[serde(default = "default_detector_path")]
    pub detector_path: String,
    /// Name of the query parameter carrying the input text.
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Percent-encode the input text before embedding it into the query
    /// string. Off by default: the upstream client sends the text raw.
    #[serde(default)]
    pub encode_input: bool,
    /// Request timeout in milliseconds. `None` means no timeout is set and
    /// a request that never completes is waited on indefinitely.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_detector_path() -> String {
    DEFAULT_DETECTOR_PATH.to_string()
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            detector_path: default_detector_path(),
            query_param: default_query_param(),
            encode_input: false,
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file.
    ///
    /// Missing fields fall back to the faithful defaults; unknown fields are
    /// rejected so typos in config files fail loudly at startup.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let cfg: ClientConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }
}
