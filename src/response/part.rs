//! Single-part parsing: a header block, one blank line, then the body.

use super::Record;

const CONTENT_TYPE: &str = "Content-Type";
const PRIMITIVE: &str = "X-Primitive";
const URI: &str = "X-Uri";
const PATH: &str = "X-Path";

/// Parses one "headers, blank line, body" unit into a record.
///
/// Header lines have the form `Name: value`; only `Content-Type`,
/// `X-Primitive`, `X-Uri` and `X-Path` are kept (case-sensitive), others are
/// ignored. Everything after the first blank line is the content, verbatim.
/// If there is no blank line the whole input becomes the content and every
/// header field stays empty, so this never fails.
pub fn parse_single(text: &str) -> Record {
    let Some((headers, body)) = split_header_block(text) else {
        return Record::new(text);
    };

    let mut record = Record::new(body);
    for line in headers.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim_end() {
            CONTENT_TYPE => record.content_type = value.to_string(),
            PRIMITIVE => record.primitive = value.to_string(),
            URI => record.uri = value.to_string(),
            PATH => record.path = value.to_string(),
            _ => {}
        }
    }
    record
}

/// Splits `text` at the first blank line (LF or CRLF terminated).
///
/// Returns the header block (without the separator) and the body, or `None`
/// if no blank line exists.
fn split_header_block(text: &str) -> Option<(&str, &str)> {
    let mut line_start = 0;
    while let Some(offset) = text[line_start..].find('\n') {
        let line_end = line_start + offset;
        let line = &text[line_start..line_end];
        if line.is_empty() || line == "\r" {
            return Some((&text[..line_start], &text[line_end + 1..]));
        }
        line_start = line_end + 1;
    }
    None
}

/// Returns true if `text` is nothing but complete `Name: value` lines, with
/// no blank-line separator and no body.
///
/// This is the shape of a multipart body-part whose body is empty once the
/// line break before the next delimiter has been taken by that delimiter.
pub(super) fn is_header_block(text: &str) -> bool {
    text.ends_with('\n')
        && split_header_block(text).is_none()
        && text.lines().all(is_header_line)
}

fn is_header_line(line: &str) -> bool {
    line.split_once(':').is_some_and(|(name, _)| {
        let name = name.trim_end();
        !name.is_empty() && !name.contains(char::is_whitespace)
    })
}
