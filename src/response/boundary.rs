//! Multipart boundary handling.

/// Escapes a boundary token for use as a literal inside a regex pattern.
///
/// Every regex metacharacter in `boundary` is neutralized, so a pattern built
/// from the result matches only exact occurrences of the original string.
pub fn escape_boundary(boundary: &str) -> String {
    regex::escape(boundary)
}

/// Extracts the boundary parameter from a `multipart/*` Content-Type value.
///
/// Accepts quoted and unquoted values, e.g.
/// `multipart/mixed; boundary="abc 123"`. Returns `None` for non-multipart
/// types or when the parameter is missing or empty.
pub fn boundary_from_content_type(content_type: &str) -> Option<String> {
    let mut params = content_type.split(';');
    let media_type = params.next()?.trim();
    if !media_type.to_ascii_lowercase().starts_with("multipart/") {
        return None;
    }

    params.find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("boundary") {
            return None;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        (!value.is_empty()).then(|| value.to_string())
    })
}
