//! Escaping helpers for text placed into the generated document.
use crate::error::Result;
use serde::Serialize;

/// Escape text for use in HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Serialize `value` as a JSON literal safe to embed in an inline `<script>`.
///
/// `<` only ever appears inside JSON strings, where `\u003c` is an equivalent
/// escape, so a file named `</script>` cannot end the script block early.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}
