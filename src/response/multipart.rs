//! Multipart response splitting.
//!
//! A multipart eval response is a sequence of parts, each introduced by a
//! `--<boundary>` line and the whole sequence closed by `--<boundary>--`:
//!
//! ```text
//! --abc123
//! Content-Type: text/plain
//! X-Primitive: xs:string
//!
//! First
//! --abc123
//! Content-Type: text/plain
//!
//! Second
//! --abc123--
//! ```
//!
//! Splitting is a single forward scan with one compiled delimiter pattern,
//! so the work is linear in the size of the response no matter how many
//! parts it holds.

use regex::Regex;
use tracing::{debug, warn};

use super::boundary::{boundary_from_content_type, escape_boundary};
use super::part::{is_header_block, parse_single};
use super::{Envelope, Record};

/// Parses a multipart response into records, in source order.
///
/// Falls back to parsing the whole input as a single part when `boundary` is
/// `None` or empty, or when no delimiter line for it occurs in `text`.
pub fn parse_multipart(text: &str, boundary: Option<&str>) -> Envelope {
    let Some(boundary) = boundary.filter(|b| !b.is_empty()) else {
        debug!("No multipart boundary, parsing response as a single part");
        return single_part(text);
    };

    match split_parts(text, boundary) {
        Some(records) => {
            debug!(parts = records.len(), boundary, "Parsed multipart response");
            Envelope::new(records)
        }
        None => {
            debug!(boundary, "Boundary not found, parsing response as a single part");
            single_part(text)
        }
    }
}

/// Parses a response given the `Content-Type` header it was returned with.
///
/// A `multipart/*` header with a boundary parameter selects multipart
/// parsing; anything else (including no header) is a single-part response.
pub fn parse_response(text: &str, content_type: Option<&str>) -> Envelope {
    let boundary = content_type.and_then(boundary_from_content_type);
    parse_multipart(text, boundary.as_deref())
}

/// Flattens a response into one string: every record's content, in order,
/// joined with a newline.
pub fn aggregate(text: &str, boundary: Option<&str>) -> String {
    parse_multipart(text, boundary).aggregate()
}

fn single_part(text: &str) -> Envelope {
    Envelope::new(vec![parse_single(text)])
}

/// Builds the delimiter pattern for `boundary`.
///
/// A match covers the line break before the delimiter (so it is not part of
/// the preceding body), the `--<boundary>` line itself with an optional
/// terminal `--` (captured as group 1) and transport padding, and the
/// delimiter's own line ending.
fn delimiter_pattern(boundary: &str) -> Option<Regex> {
    let pattern = format!(
        r"(?m)(?:\r?\n)?^--{}(--)?[ \t]*\r?(?:\n|\z)",
        escape_boundary(boundary)
    );
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            // Only reachable if the boundary is large enough to hit the
            // regex size limit.
            debug!(error = %e, "Could not compile boundary pattern");
            None
        }
    }
}

/// Splits `text` at delimiter lines and parses each part.
///
/// Returns `None` if no delimiter occurs. The preamble, the epilogue after
/// the terminal delimiter, and blank segments are discarded. A response
/// that is cut off before its terminal delimiter keeps its last part.
fn split_parts(text: &str, boundary: &str) -> Option<Vec<Record>> {
    let delimiter = delimiter_pattern(boundary)?;

    let mut records = Vec::new();
    let mut preamble_end: Option<usize> = None;
    let mut part_start: Option<usize> = None;

    for caps in delimiter.captures_iter(text) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        preamble_end.get_or_insert(m.start());

        if let Some(start) = part_start.take() {
            push_part(&mut records, &text[start..m.start()], leading_line_break(m.as_str()));
        }

        if caps.get(1).is_some() {
            break;
        }
        part_start = Some(m.end());
    }

    let preamble_end = preamble_end?;

    if let Some(start) = part_start {
        debug!("Multipart response has no terminal delimiter");
        push_part(&mut records, &text[start..], "");
    }
    if records.is_empty() {
        let preamble = &text[..preamble_end];
        if preamble.trim().is_empty() {
            debug!("Multipart response contained no parts");
        } else {
            warn!(
                dropped_bytes = preamble.len(),
                "Multipart response contained no parts; discarded text before the first delimiter"
            );
        }
    }

    Some(records)
}

/// The line break a delimiter match took from the end of the preceding part.
fn leading_line_break(delimiter: &str) -> &str {
    let end = delimiter.find('-').unwrap_or(0);
    &delimiter[..end]
}

fn push_part(records: &mut Vec<Record>, segment: &str, line_break: &str) {
    if segment.trim().is_empty() {
        return;
    }
    let record = if !line_break.is_empty() && is_header_block(segment) {
        // Headers with an empty body: the delimiter took the blank line that
        // ends the header block, so put it back.
        parse_single(&format!("{segment}{line_break}"))
    } else {
        parse_single(segment)
    };
    records.push(record);
}
