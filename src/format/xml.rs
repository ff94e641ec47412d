//! XML re-indentation.
//!
//! This is a display formatter, not a validating parser: it splits the text
//! into tags and text with a small state machine and indents by nesting
//! depth. Mismatched element names are not detected.

use tracing::debug;

use super::FormatError;

const INDENT: &str = "  ";

/// A lexical unit of XML text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Anything from `<` to its matching `>`, including comments and CDATA.
    Tag(&'a str),
    /// Character data between tags.
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Tag,
    Quoted(u8),
    Comment,
    CData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Opening,
    Closing,
    /// Self-closing elements, processing instructions, comments and other
    /// `<!...>` declarations.
    Standalone,
}

/// Re-indents `text` as XML, returning it unchanged if it cannot be.
pub fn format_xml_pretty(text: &str) -> String {
    try_format_xml(text).unwrap_or_else(|e| {
        debug!(error = %e, "Showing raw XML content");
        text.to_string()
    })
}

/// Re-indents `text` as XML with two spaces per nesting level.
///
/// Each tag and each non-blank text run goes on its own line. Closing tags
/// dedent before they are written (never below zero); self-closing tags,
/// processing instructions and declarations do not change the depth.
pub fn try_format_xml(text: &str) -> Result<String, FormatError> {
    let tokens = tokenize(text)?;
    if !tokens.iter().any(|t| matches!(t, Token::Tag(_))) {
        return Err(FormatError::NotXml);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut depth = 0usize;

    for token in tokens {
        let line = match token {
            Token::Tag(tag) => match tag_kind(tag) {
                TagKind::Closing => {
                    depth = depth.saturating_sub(1);
                    push_line(&mut out, depth, tag);
                    continue;
                }
                TagKind::Standalone => tag,
                TagKind::Opening => {
                    push_line(&mut out, depth, tag);
                    depth += 1;
                    continue;
                }
            },
            Token::Text(text) => text.trim(),
        };
        if !line.is_empty() {
            push_line(&mut out, depth, line);
        }
    }

    Ok(out)
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
}

fn tag_kind(tag: &str) -> TagKind {
    if tag.starts_with("</") {
        TagKind::Closing
    } else if tag.starts_with("<?") || tag.starts_with("<!") || tag.ends_with("/>") {
        TagKind::Standalone
    } else {
        TagKind::Opening
    }
}

/// Splits `text` into tag and text tokens.
///
/// Quoted attribute values, comments and CDATA sections may contain `<` and
/// `>` without ending the tag. Whitespace-only text between tags is dropped.
fn tokenize(text: &str) -> Result<Vec<Token<'_>>, FormatError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut state = State::Text;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Text => {
                if b == b'<' {
                    push_text(&mut tokens, &text[start..i]);
                    start = i;
                    let rest = &text[i..];
                    if rest.starts_with("<!--") {
                        state = State::Comment;
                        i += 4;
                        continue;
                    }
                    if rest.starts_with("<![CDATA[") {
                        state = State::CData;
                        i += 9;
                        continue;
                    }
                    state = State::Tag;
                }
            }
            State::Tag => match b {
                b'"' | b'\'' => state = State::Quoted(b),
                b'<' => return Err(FormatError::NestedTag(start)),
                b'>' => {
                    tokens.push(Token::Tag(&text[start..=i]));
                    start = i + 1;
                    state = State::Text;
                }
                _ => {}
            },
            State::Quoted(quote) => {
                if b == quote {
                    state = State::Tag;
                }
            }
            State::Comment | State::CData => {
                let terminator = if state == State::Comment { "-->" } else { "]]>" };
                if bytes[i..].starts_with(terminator.as_bytes()) {
                    let end = i + terminator.len();
                    tokens.push(Token::Tag(&text[start..end]));
                    start = end;
                    state = State::Text;
                    i = end;
                    continue;
                }
            }
        }
        i += 1;
    }

    if state != State::Text {
        return Err(FormatError::UnterminatedTag(start));
    }
    push_text(&mut tokens, &text[start..]);
    Ok(tokens)
}

fn push_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        tokens.push(Token::Text(text));
    }
}
