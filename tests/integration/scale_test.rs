//! Large responses.

use evalview::response::{aggregate, parse_multipart};
use std::time::{Duration, Instant};

const BOUNDARY: &str = "b0undary+5k";

fn large_response(parts: usize) -> String {
    let mut text = String::with_capacity(parts * 96);
    for i in 0..parts {
        text.push_str("--");
        text.push_str(BOUNDARY);
        text.push_str("\r\nContent-Type: application/json\r\nX-Primitive: map\r\n");
        text.push_str(&format!("X-Uri: /docs/{i}.json\r\n\r\n"));
        text.push_str(&format!("{{\"id\":{i},\"name\":\"item {i}\"}}\r\n"));
    }
    text.push_str("--");
    text.push_str(BOUNDARY);
    text.push_str("--\r\n");
    text
}

#[test]
fn test_five_thousand_parts() {
    let text = large_response(5_000);
    let envelope = parse_multipart(&text, Some(BOUNDARY));

    assert_eq!(envelope.len(), 5_000);

    let first = &envelope.records()[0];
    assert_eq!(first.content_type(), "application/json");
    assert!(first.content().contains("\"id\":0"));
    assert_eq!(first.uri(), "/docs/0.json");

    let last = &envelope.records()[4_999];
    assert_eq!(last.content(), "{\"id\":4999,\"name\":\"item 4999\"}");
}

#[test]
fn test_order_is_preserved() {
    let text = large_response(500);
    let envelope = parse_multipart(&text, Some(BOUNDARY));

    for (i, record) in envelope.iter().enumerate() {
        assert_eq!(record.uri(), format!("/docs/{i}.json"));
    }
}

#[test]
fn test_aggregate_line_count() {
    let text = large_response(1_000);
    let joined = aggregate(&text, Some(BOUNDARY));

    assert_eq!(joined.lines().count(), 1_000);
}

#[test]
fn test_parse_time_grows_linearly() {
    // Generous bound: a quadratic splitter takes far longer than this on
    // 20,000 parts, a linear one finishes in milliseconds.
    let text = large_response(20_000);
    let started = Instant::now();
    let envelope = parse_multipart(&text, Some(BOUNDARY));

    assert_eq!(envelope.len(), 20_000);
    assert!(started.elapsed() < Duration::from_secs(10));
}
