//! Multipart response parsing through the public API.

use evalview::response::{aggregate, parse_multipart, parse_response, parse_single, Record};
use pretty_assertions::assert_eq;

/// A response as returned by an XQuery eval mixing item types.
fn mixed_response(line_ending: &str) -> String {
    [
        "--ML_BOUNDARY_7f3a",
        "Content-Type: text/plain",
        "X-Primitive: xs:string",
        "",
        "hello",
        "--ML_BOUNDARY_7f3a",
        "Content-Type: application/xml",
        "X-Primitive: element()",
        "X-Uri: /books/dune.xml",
        "X-Path: /book",
        "",
        "<book><title>Dune</title></book>",
        "--ML_BOUNDARY_7f3a",
        "Content-Type: application/json",
        "X-Primitive: map",
        "",
        "{\"count\":3}",
        "--ML_BOUNDARY_7f3a--",
        "",
    ]
    .join(line_ending)
}

#[test]
fn test_mixed_response_lf() {
    let envelope = parse_multipart(&mixed_response("\n"), Some("ML_BOUNDARY_7f3a"));

    assert_eq!(
        envelope.records(),
        &[
            Record::new("hello")
                .with_content_type("text/plain")
                .with_primitive("xs:string"),
            Record::new("<book><title>Dune</title></book>")
                .with_content_type("application/xml")
                .with_primitive("element()")
                .with_uri("/books/dune.xml")
                .with_path("/book"),
            Record::new("{\"count\":3}")
                .with_content_type("application/json")
                .with_primitive("map"),
        ]
    );
}

#[test]
fn test_crlf_and_lf_agree() {
    let lf = parse_multipart(&mixed_response("\n"), Some("ML_BOUNDARY_7f3a"));
    let crlf = parse_multipart(&mixed_response("\r\n"), Some("ML_BOUNDARY_7f3a"));

    assert_eq!(lf, crlf);
}

#[test]
fn test_parse_response_with_http_content_type() {
    let text = mixed_response("\r\n");
    let envelope = parse_response(
        &text,
        Some("multipart/mixed; boundary=ML_BOUNDARY_7f3a"),
    );

    assert_eq!(envelope.len(), 3);
    assert_eq!(envelope.records()[1].uri(), "/books/dune.xml");
}

#[test]
fn test_aggregate_agrees_with_parse() {
    let text = mixed_response("\n");
    let envelope = parse_multipart(&text, Some("ML_BOUNDARY_7f3a"));

    assert_eq!(aggregate(&text, Some("ML_BOUNDARY_7f3a")), envelope.aggregate());
    assert_eq!(
        aggregate(&text, Some("ML_BOUNDARY_7f3a")),
        "hello\n<book><title>Dune</title></book>\n{\"count\":3}"
    );
}

#[test]
fn test_single_part_response_without_boundary() {
    let text = "Content-Type: application/json\r\nX-Primitive: array-node()\r\n\r\n[1,2,3]";
    let envelope = parse_multipart(text, None);

    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope.records()[0], parse_single(text));
    assert_eq!(envelope.records()[0].primitive(), "array-node()");
    assert_eq!(envelope.records()[0].content(), "[1,2,3]");
}

#[test]
fn test_wrong_boundary_falls_back_to_single_part() {
    let text = mixed_response("\n");
    let envelope = parse_multipart(&text, Some("OTHER"));

    // The first line is not a header and there is a blank line after the
    // first header block, so everything after it is content.
    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope.records()[0].content_type(), "text/plain");
    assert!(envelope.records()[0].content().starts_with("hello\n--ML_BOUNDARY_7f3a"));
}

/// An eval returning `("", 1)`: the empty string's part has headers and no body.
fn response_with_empty_string(line_ending: &str) -> String {
    [
        "--b",
        "Content-Type: text/plain",
        "X-Primitive: xs:string",
        "",
        "--b",
        "Content-Type: text/plain",
        "X-Primitive: integer",
        "",
        "1",
        "--b--",
    ]
    .join(line_ending)
}

#[test]
fn test_empty_string_result_keeps_headers() {
    for line_ending in ["\n", "\r\n"] {
        let envelope = parse_multipart(&response_with_empty_string(line_ending), Some("b"));

        assert_eq!(
            envelope.records(),
            &[
                Record::new("")
                    .with_content_type("text/plain")
                    .with_primitive("xs:string"),
                Record::new("1")
                    .with_content_type("text/plain")
                    .with_primitive("integer"),
            ]
        );
        assert_eq!(envelope.aggregate(), "\n1");
    }
}

#[test]
fn test_malformed_input_never_panics() {
    let inputs = [
        "",
        "\n",
        "\r\n\r\n",
        "--",
        "----",
        "--b",
        "--b--",
        "--b\n",
        "--b\r",
        "--b\n\n",
        "--b\nno separator",
        ":\n\n:",
        "Content-Type\n\n",
        "\u{feff}--b\nContent-Type: text/plain\n\nx\n--b--",
    ];

    for input in inputs {
        let envelope = parse_multipart(input, Some("b"));
        for record in envelope.iter() {
            let _ = evalview::format::format_record(record);
        }
        let _ = aggregate(input, Some("b"));
        let _ = parse_single(input);
    }
}
