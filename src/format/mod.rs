//! Content-aware pretty printing for record display.
//!
//! Dispatches on a record's declared content type: JSON is re-serialized with
//! two-space indentation, XML is re-indented, anything else is shown as is.
//! Formatting never fails from the caller's point of view; when the content
//! cannot be reformatted the original text is returned.

mod cache;
mod xml;

pub use cache::FormatCache;
pub use xml::{format_xml_pretty, try_format_xml};

use thiserror::Error;
use tracing::debug;

use crate::response::Record;

/// Why a piece of content could not be reformatted.
///
/// These are recoverable: callers map them to "show the original text".
#[derive(Error, Debug)]
pub enum FormatError {
    /// The text contains no markup at all.
    #[error("not XML: no tags found")]
    NotXml,

    /// A tag, comment or CDATA section was opened but never closed.
    #[error("unterminated markup starting at byte {0}")]
    UnterminatedTag(usize),

    /// A `<` appeared inside a tag.
    #[error("unexpected '<' inside tag starting at byte {0}")]
    NestedTag(usize),

    /// The content is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty-prints JSON with two-space indentation, keeping key order.
///
/// Numbers are written the way serde_json writes them: a float stays a
/// float (`1.0` prints as `1.0`, `1e2` as `100.0`), unlike JavaScript's
/// `JSON.stringify`, which prints `1` and `100`. Integers outside the 64-bit
/// range become floats.
pub fn format_json_pretty(text: &str) -> Result<String, FormatError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Formats a record's content for display according to its content type.
pub fn format_record(record: &Record) -> String {
    format_content(record.content(), record.content_type())
}

/// Formats `content` according to `content_type`.
///
/// The content type is matched case-insensitively by substring: `json`
/// selects JSON pretty printing, `xml` selects XML indentation, anything else
/// returns the content unchanged.
pub fn format_content(content: &str, content_type: &str) -> String {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains("json") {
        format_json_pretty(content).unwrap_or_else(|e| {
            debug!(error = %e, "Showing raw JSON content");
            content.to_string()
        })
    } else if content_type.contains("xml") {
        format_xml_pretty(content)
    } else {
        content.to_string()
    }
}
