//! Syntax-highlighting language resolution.
//!
//! Maps a record's content type, or the language a query was written in, to
//! the language tag the editor uses for highlighting.

use serde::Serialize;
use std::fmt;

/// Highlighting language for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Json,
    Xml,
    Html,
    Javascript,
    Sql,
    #[default]
    Plaintext,
}

impl Language {
    /// Returns the editor's identifier for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Html => "html",
            Self::Javascript => "javascript",
            Self::Sql => "sql",
            Self::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query languages accepted by the eval endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    XQuery,
    JavaScript,
    Sparql,
}

impl QueryType {
    /// Parses a query type identifier. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "xquery" => Some(Self::XQuery),
            "javascript" => Some(Self::JavaScript),
            "sparql" => Some(Self::Sparql),
            _ => None,
        }
    }

    /// Returns the identifier for this query type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XQuery => "xquery",
            Self::JavaScript => "javascript",
            Self::Sparql => "sparql",
        }
    }

    /// Highlighting language for query source of this type.
    pub fn language(&self) -> Language {
        match self {
            Self::XQuery => Language::Xml,
            Self::JavaScript => Language::Javascript,
            Self::Sparql => Language::Sql,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a content type to a highlighting language.
///
/// Case-insensitive substring checks, first match wins: `json`, `xml`,
/// `html`, then `javascript` or `js`. Anything else is plaintext.
pub fn language_from_content_type(content_type: &str) -> Language {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains("json") {
        Language::Json
    } else if content_type.contains("xml") {
        Language::Xml
    } else if content_type.contains("html") {
        Language::Html
    } else if content_type.contains("javascript") || content_type.contains("js") {
        Language::Javascript
    } else {
        Language::Plaintext
    }
}

/// Resolves a query type identifier to a highlighting language.
///
/// Unknown query types are plaintext.
pub fn language_from_query_type(query_type: &str) -> Language {
    QueryType::parse(query_type).map_or(Language::Plaintext, |qt| qt.language())
}

/// Resolves either a query type identifier or a content type.
///
/// Exact query type identifiers (`xquery`, `javascript`, `sparql`) use the
/// query type table; everything else is treated as a content type.
pub fn resolve_language(content_type_or_query_type: &str) -> Language {
    match QueryType::parse(content_type_or_query_type) {
        Some(query_type) => query_type.language(),
        None => language_from_content_type(content_type_or_query_type),
    }
}
