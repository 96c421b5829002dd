//! Request target construction.
//!
//! A "target" is the relative request line sent to the detection service:
//! the detector path plus a single query parameter carrying the input text,
//! e.g. `emotionDetector?inputText=I am glad this happened`.
//!
//! By default the input text is embedded into the query string byte-for-byte
//! with **no** percent-encoding. That reproduces the upstream client, which
//! concatenated the raw field value straight into the URL. Setting
//! [`ClientConfig::encode_input`](crate::config::ClientConfig::encode_input)
//! opts into RFC 3986 percent-encoding via the `urlencoding` crate for
//! deployments that front the detector with stricter HTTP parsers.

use crate::config::ClientConfig;

/// Build the relative request target for the given input text.
///
/// The empty string is not special-cased: it produces
/// `emotionDetector?inputText=` and is dispatched like any other input.
#[must_use]
pub fn build_target(cfg: &ClientConfig, input_text: &str) -> String {
    if cfg.encode_input {
        format!(
            "{}?{}={}",
            cfg.detector_path,
            cfg.query_param,
            urlencoding::encode(input_text)
        )
    } else {
        format!("{}?{}={}", cfg.detector_path, cfg.query_param, input_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_input_is_embedded_byte_for_byte() {
        let cfg = ClientConfig::default();
        let target = build_target(&cfg, "I am so happy & excited = yes");
        assert_eq!(
            target,
            "emotionDetector?inputText=I am so happy & excited = yes"
        );
    }

    #[test]
    fn empty_input_still_produces_a_query() {
        let cfg = ClientConfig::default();
        assert_eq!(build_target(&cfg, ""), "emotionDetector?inputText=");
    }

    #[test]
    fn encode_input_applies_percent_encoding() {
        let cfg = ClientConfig {
            encode_input: true,
            ..ClientConfig::default()
        };
        assert_eq!(
            build_target(&cfg, "glad & sad"),
            "emotionDetector?inputText=glad%20%26%20sad"
        );
    }

    #[test]
    fn custom_path_and_param_are_honored() {
        let cfg = ClientConfig {
            detector_path: "sentiment".to_string(),
            query_param: "text".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(build_target(&cfg, "ok"), "sentiment?text=ok");
    }
}
