//! evalview - parse and pretty-print query eval responses.
//!
//! Turns the raw text returned by a query eval endpoint (a single
//! "headers, blank line, body" unit or a boundary-delimited multipart
//! sequence of them) into ordered records, and derives display metadata:
//! pretty-printed content and a syntax-highlighting language.
//!
//! ```
//! use evalview::format::format_record;
//! use evalview::language::Language;
//! use evalview::response::parse_multipart;
//!
//! let body = "--abc\nContent-Type: application/json\n\n{\"a\":1}\n--abc--\n";
//! let envelope = parse_multipart(body, Some("abc"));
//!
//! let record = &envelope.records()[0];
//! assert_eq!(record.language(), Language::Json);
//! assert_eq!(format_record(record), "{\n  \"a\": 1\n}");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod language;
pub mod output;
pub mod response;
