//! Rendering parsed responses for the terminal.

use std::fmt::Write as _;

use crate::config::OutputFormat;
use crate::error::{Result, ViewError};
use crate::format::FormatCache;
use crate::response::{Envelope, Record};

/// Renders an envelope in the requested format.
///
/// `pretty` applies content-aware formatting to each record in the text and
/// JSON formats. The aggregate format is always the raw contents joined with
/// newlines.
pub fn render(envelope: &Envelope, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(envelope, pretty)),
        OutputFormat::Json => render_json(envelope, pretty),
        OutputFormat::Aggregate => Ok(envelope.aggregate()),
    }
}

fn render_text(envelope: &Envelope, pretty: bool) -> String {
    let mut cache = FormatCache::new();
    let mut out = String::new();

    for (index, record) in envelope.iter().enumerate() {
        if index > 0 {
            out.push_str("\n\n");
        }
        write_record_header(&mut out, index + 1, record);
        out.push('\n');
        if pretty {
            out.push_str(cache.format(record));
        } else {
            out.push_str(record.content());
        }
    }

    out
}

fn write_record_header(out: &mut String, number: usize, record: &Record) {
    let content_type = if record.content_type().is_empty() {
        "(no content type)"
    } else {
        record.content_type()
    };
    let _ = write!(out, "[{number}] {content_type}");
    if !record.primitive().is_empty() {
        let _ = write!(out, " ({})", record.primitive());
    }
    out.push('\n');

    for (label, value) in [("uri", record.uri()), ("path", record.path())] {
        if !value.is_empty() {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    let _ = writeln!(out, "language: {}", record.language());
}

fn render_json(envelope: &Envelope, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(&envelope.display_records())
    } else {
        serde_json::to_string_pretty(envelope)
    };
    json.map_err(|e| ViewError::internal(format!("Failed to serialize records: {e}")))
}
