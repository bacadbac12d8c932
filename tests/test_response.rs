use emberd::http::response::{Response, SERVER_STRING, StatusCode, status_line};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "BAD REQUEST");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
    assert_eq!(
        StatusCode::NotImplemented.reason_phrase(),
        "Method Not Implemented"
    );
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_status_line_format() {
    assert_eq!(status_line(StatusCode::Ok), "HTTP/1.0 200 OK\r\n");
    assert_eq!(
        status_line(StatusCode::NotImplemented),
        "HTTP/1.0 501 Method Not Implemented\r\n"
    );
}

#[test]
fn test_not_implemented_document() {
    let bytes = Response::not_implemented().to_bytes();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("HTTP/1.0 501 Method Not Implemented\r\n"));
    assert!(text.contains(SERVER_STRING));
    assert!(text.contains("Content-Type: text/html\r\n\r\n"));
    assert!(text.ends_with("<BODY><P>HTTP request method not supported.\r\n</BODY></HTML>\r\n"));
}

#[test]
fn test_not_found_document_exact_bytes() {
    let expected = concat!(
        "HTTP/1.0 404 NOT FOUND\r\n",
        "Server: emberd/0.1.0\r\n",
        "Content-Type: text/html\r\n",
        "\r\n",
        "<HTML><TITLE>Not Found<TITLE>\r\n",
        "<BODY><P>The server could not fulfill\r\n",
        "your request because the resource specified\r\n",
        "is unavailable or nonexistent.\r\n",
        "</BODY></HTML>\r\n",
    );

    assert_eq!(Response::not_found().to_bytes(), expected.as_bytes());
}

#[test]
fn test_bad_request_document_has_no_server_header() {
    let expected = concat!(
        "HTTP/1.0 400 BAD REQUEST\r\n",
        "Content-Type: text/html\r\n",
        "\r\n",
        "<P>Your browser sent a bad request, such as a POST without a Content-Length.\r\n",
    );

    assert_eq!(Response::bad_request().to_bytes(), expected.as_bytes());
}

#[test]
fn test_cannot_execute_document_exact_bytes() {
    let expected = concat!(
        "HTTP/1.0 500 Internal Server Error\r\n",
        "Content-Type: text/html\r\n",
        "\r\n",
        "<P>Error prohibited CGI execution.\r\n",
    );

    assert_eq!(Response::cannot_execute().to_bytes(), expected.as_bytes());
}

#[test]
fn test_static_ok_is_headers_only() {
    let expected = concat!(
        "HTTP/1.0 200 OK\r\n",
        "Server: emberd/0.1.0\r\n",
        "Content-Type: text/html\r\n",
        "\r\n",
    );

    assert_eq!(Response::static_ok().to_bytes(), expected.as_bytes());
}
