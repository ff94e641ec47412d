//! Display metadata derived from parsed records.

use evalview::config::OutputFormat;
use evalview::format::{format_record, FormatCache};
use evalview::language::{resolve_language, Language};
use evalview::output::render;
use evalview::response::{parse_multipart, DisplayRecord, Record};
use pretty_assertions::assert_eq;

const RESPONSE: &str = "--abc123\n\
    Content-Type: application/xml\n\
    X-Primitive: document-node()\n\
    X-Uri: /orders/42.xml\n\
    \n\
    <?xml version=\"1.0\"?>\n<order id=\"42\">\n<line sku=\"A1\"/>\n<total>9.50</total>\n</order>\n\
    --abc123\n\
    Content-Type: application/json\n\
    \n\
    {\"status\":\"shipped\",\"items\":[1,2]}\n\
    --abc123\n\
    Content-Type: application/json\n\
    \n\
    {broken\n\
    --abc123\n\
    Content-Type: text/plain\n\
    X-Primitive: xs:integer\n\
    \n\
    42\n\
    --abc123--\n";

#[test]
fn test_display_records_for_mixed_response() {
    let envelope = parse_multipart(RESPONSE, Some("abc123"));
    let display = envelope.display_records();

    assert_eq!(display.len(), 4);

    assert_eq!(display[0].language, Language::Xml);
    assert_eq!(
        display[0].formatted,
        "<?xml version=\"1.0\"?>\n\
         <order id=\"42\">\n  \
         <line sku=\"A1\"/>\n  \
         <total>\n    \
         9.50\n  \
         </total>\n\
         </order>"
    );

    assert_eq!(display[1].language, Language::Json);
    assert_eq!(
        display[1].formatted,
        "{\n  \"status\": \"shipped\",\n  \"items\": [\n    1,\n    2\n  ]\n}"
    );

    // Malformed JSON is shown as received.
    assert_eq!(display[2].formatted, "{broken");

    assert_eq!(display[3].language, Language::Plaintext);
    assert_eq!(display[3].formatted, "42");
}

#[test]
fn test_display_record_matches_format_record() {
    let envelope = parse_multipart(RESPONSE, Some("abc123"));
    for record in &envelope {
        assert_eq!(DisplayRecord::from_record(record).formatted, format_record(record));
    }
}

#[test]
fn test_cache_agrees_with_direct_formatting() {
    let envelope = parse_multipart(RESPONSE, Some("abc123"));
    let mut cache = FormatCache::new();

    for _ in 0..3 {
        for record in &envelope {
            assert_eq!(cache.format(record), format_record(record));
        }
    }
    assert_eq!(cache.misses(), 4);
    assert_eq!(cache.hits(), 8);
}

#[test]
fn test_editor_language_for_query_and_result() {
    assert_eq!(resolve_language("xquery"), Language::Xml);
    assert_eq!(resolve_language("sparql"), Language::Sql);

    let record = Record::new("<a/>").with_content_type("text/xml");
    assert_eq!(resolve_language(record.content_type()), record.language());
}

#[test]
fn test_render_formats_end_to_end() {
    let envelope = parse_multipart(RESPONSE, Some("abc123"));

    let aggregate = render(&envelope, OutputFormat::Aggregate, true).unwrap();
    assert!(aggregate.ends_with("{broken\n42"));

    let text = render(&envelope, OutputFormat::Text, true).unwrap();
    assert!(text.starts_with("[1] application/xml (document-node())\nuri: /orders/42.xml\n"));
    assert!(text.contains("[4] text/plain (xs:integer)\nlanguage: plaintext\n\n42"));

    let json = render(&envelope, OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["primitive"], "document-node()");
    assert_eq!(value[3]["formatted"], "42");
}
