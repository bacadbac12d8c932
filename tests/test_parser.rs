use emberd::http::parser::{drain_headers, parse_request_line, scan_content_length};
use emberd::http::reader::{LineReader, MAX_LINE};
use emberd::http::request::Method;

#[test]
fn test_parse_simple_get_request_line() {
    let parsed = parse_request_line("GET /index.html HTTP/1.0\n");

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.query, None);
}

#[test]
fn test_parse_methods_case_insensitively() {
    assert_eq!(parse_request_line("get / HTTP/1.0\n").method, Method::Get);
    assert_eq!(parse_request_line("GeT / HTTP/1.0\n").method, Method::Get);
    assert_eq!(parse_request_line("post / HTTP/1.0\n").method, Method::Post);
    assert_eq!(parse_request_line("POST / HTTP/1.0\n").method, Method::Post);
}

#[test]
fn test_parse_unsupported_method_short_circuits() {
    for line in [
        "DELETE /x HTTP/1.0\n",
        "PUT /x HTTP/1.0\n",
        "HEAD /x HTTP/1.0\n",
        "garbage\n",
        "",
    ] {
        let parsed = parse_request_line(line);
        assert_eq!(parsed.method, Method::Unsupported, "line {:?}", line);
        assert_eq!(parsed.path, "");
        assert_eq!(parsed.query, None);
    }
}

#[test]
fn test_parse_get_query_string_extraction() {
    let parsed = parse_request_line("GET /color.cgi?color=red HTTP/1.0\n");

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "/color.cgi");
    assert_eq!(parsed.query.as_deref(), Some("color=red"));
}

#[test]
fn test_parse_get_splits_at_first_question_mark_only() {
    let parsed = parse_request_line("GET /a?b=1?c=2 HTTP/1.0\n");

    assert_eq!(parsed.path, "/a");
    assert_eq!(parsed.query.as_deref(), Some("b=1?c=2"));
}

#[test]
fn test_parse_get_empty_query_still_populated() {
    let parsed = parse_request_line("GET /script.cgi? HTTP/1.0\n");

    assert_eq!(parsed.path, "/script.cgi");
    assert_eq!(parsed.query.as_deref(), Some(""));
}

#[test]
fn test_parse_post_target_keeps_question_mark() {
    let parsed = parse_request_line("POST /a?b=1 HTTP/1.0\n");

    assert_eq!(parsed.method, Method::Post);
    assert_eq!(parsed.path, "/a?b=1");
    assert_eq!(parsed.query, None);
}

#[test]
fn test_parse_overlong_target_silently_truncated() {
    let long = "a".repeat(400);
    let parsed = parse_request_line(&format!("GET /{} HTTP/1.0\n", long));

    assert_eq!(parsed.path.len(), 254);
    assert!(parsed.path.starts_with("/aaa"));
}

#[test]
fn test_parse_missing_target_yields_empty_path() {
    let parsed = parse_request_line("GET\n");

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "");
}

#[tokio::test]
async fn test_drain_headers_stops_at_blank_line() {
    let mut reader = LineReader::new(&b"Host: x\r\nAccept: */*\r\n\r\nbody"[..]);

    drain_headers(&mut reader).await.unwrap();

    // Body bytes are untouched by the drain.
    let mut sink = Vec::new();
    reader.copy_exact(4, &mut sink).await.unwrap();
    assert_eq!(sink, b"body");
}

#[tokio::test]
async fn test_drain_headers_stops_on_peer_close() {
    let mut reader = LineReader::new(&b"Host: x\r\n"[..]);
    drain_headers(&mut reader).await.unwrap();
}

#[tokio::test]
async fn test_scan_finds_content_length() {
    let mut reader = LineReader::new(&b"Host: x\r\nContent-Length: 5\r\n\r\n"[..]);

    let length = scan_content_length(&mut reader).await.unwrap();
    assert_eq!(length, Some(5));
}

#[tokio::test]
async fn test_scan_matches_header_name_case_insensitively() {
    let mut reader = LineReader::new(&b"content-length: 42\r\n\r\n"[..]);

    let length = scan_content_length(&mut reader).await.unwrap();
    assert_eq!(length, Some(42));
}

#[tokio::test]
async fn test_scan_returns_none_when_header_absent() {
    let mut reader = LineReader::new(&b"Host: x\r\nAccept: */*\r\n\r\n"[..]);

    let length = scan_content_length(&mut reader).await.unwrap();
    assert_eq!(length, None);
}

#[tokio::test]
async fn test_scan_unparsable_value_counts_as_zero() {
    let mut reader = LineReader::new(&b"Content-Length: banana\r\n\r\n"[..]);

    let length = scan_content_length(&mut reader).await.unwrap();
    assert_eq!(length, Some(0));
}

#[tokio::test]
async fn test_scan_consumes_entire_header_block() {
    let mut reader =
        LineReader::new(&b"Content-Length: 2\r\nTrailing: header\r\n\r\nok"[..]);

    let length = scan_content_length(&mut reader).await.unwrap();
    assert_eq!(length, Some(2));

    let mut sink = Vec::new();
    reader.copy_exact(2, &mut sink).await.unwrap();
    assert_eq!(sink, b"ok");
}
