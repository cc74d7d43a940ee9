//! Mapping of transport failures into [`CincError`]
//!
//! The REST client is the only place where errors are classified. Nothing
//! from `reqwest` leaks past this module.

use cinc_types::CincError;
use serde_json::Value;

const NETWORK_FAILURE: &str = "Network request failed - please check your connection";

/// Classify a `reqwest` error raised before a response status was available
///
/// Requests that could not be built (bad header, bad URL) are generic
/// errors; everything else means no response arrived and is a network error.
pub(crate) fn from_transport(err: &reqwest::Error) -> CincError {
    if err.is_builder() {
        return CincError::generic(format!("Failed to build request: {}", err));
    }

    let detail = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };
    CincError::network(format!("{}: {}", NETWORK_FAILURE, detail))
}

/// Decode a raw response body for error reporting
///
/// Empty bodies become `None`; bodies that are not JSON are kept as a JSON
/// string so the raw text is still available to callers.
pub(crate) fn parse_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}

/// Default message for a failed status when the body carries none
pub(crate) fn status_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}
