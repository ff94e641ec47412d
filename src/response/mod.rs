//! Eval response parsing.
//!
//! Turns the raw text returned by a query eval endpoint into an ordered
//! sequence of typed records. A response is either a single
//! "headers, blank line, body" unit or a boundary-delimited multipart
//! sequence of such units.

mod boundary;
mod multipart;
mod part;

pub use boundary::{boundary_from_content_type, escape_boundary};
pub use multipart::{aggregate, parse_multipart, parse_response};
pub use part::parse_single;

use serde::Serialize;

use crate::format::format_content;
use crate::language::{language_from_content_type, Language};

/// The parsed representation of one part of an eval response.
///
/// Absent headers are empty strings, never missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    content_type: String,
    primitive: String,
    uri: String,
    path: String,
    content: String,
}

impl Record {
    /// Creates a record with the given content and no headers.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Sets the declared content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the declared primitive type (e.g. `xs:string`).
    pub fn with_primitive(mut self, primitive: impl Into<String>) -> Self {
        self.primitive = primitive.into();
        self
    }

    /// Sets the document URI.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Sets the node path within the document.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Value of the `Content-Type` header.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Value of the `X-Primitive` header.
    pub fn primitive(&self) -> &str {
        &self.primitive
    }

    /// Value of the `X-Uri` header.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Value of the `X-Path` header.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The part body, verbatim.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Highlighting language for this record's content.
    pub fn language(&self) -> Language {
        language_from_content_type(&self.content_type)
    }
}

/// The ordered records produced by a single parse.
///
/// Order matches the order of parts in the source text. An envelope is never
/// modified after parsing; a new response produces a new envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Envelope {
    records: Vec<Record>,
}

impl Envelope {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the response contained no parts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Returns the first record, if any.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Iterates over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterates over each record's content.
    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::content)
    }

    /// Joins every record's content with a single newline.
    pub fn aggregate(&self) -> String {
        self.contents().collect::<Vec<_>>().join("\n")
    }

    /// Pairs each record with its formatted content and language.
    pub fn display_records(&self) -> Vec<DisplayRecord> {
        self.records.iter().map(DisplayRecord::from_record).collect()
    }

    /// Consumes the envelope, returning the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl IntoIterator for Envelope {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Envelope {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A record ready for display: the record itself, its pretty-printed
/// content and the language tag used for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    #[serde(flatten)]
    pub record: Record,
    pub formatted: String,
    pub language: Language,
}

impl DisplayRecord {
    /// Builds the display form of a record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            formatted: format_content(record.content(), record.content_type()),
            language: record.language(),
            record: record.clone(),
        }
    }
}
