//! JSON output encoding for query results.
//!
//! Result rows are wrapped in a `{"data": [ <row>, ... ]}` envelope,
//! preserving executor order. Output is deterministic: serde_json's `Map`
//! keeps document keys sorted.

use crate::store::Document;
use serde_json::json;

/// Encodes result rows into the output envelope.
///
/// # Examples
///
/// ```
/// use docq::output::encode;
///
/// let rows = vec![];
/// assert_eq!(encode(&rows, false).unwrap(), r#"{"data":[]}"#);
/// ```
pub fn encode(rows: &[Document], pretty: bool) -> Result<String, serde_json::Error> {
    let envelope = json!({ "data": rows });
    if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    }
}
