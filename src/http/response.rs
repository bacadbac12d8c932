/// Identification header sent on 200 (static), 404 and 501 responses.
pub const SERVER_STRING: &str = "Server: emberd/0.1.0\r\n";

const PROTOCOL: &str = "HTTP/1.0";

/// HTTP status codes emitted by the server.
///
/// - `Ok` (200): static headers or the bare CGI status line
/// - `BadRequest` (400): POST without a Content-Length header
/// - `NotFound` (404): resolved path missing on disk
/// - `NotImplemented` (501): method other than GET/POST
/// - `InternalServerError` (500): CGI subprocess could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    NotImplemented,
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use emberd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
            StatusCode::InternalServerError => 500,
        }
    }

    /// The reason phrase used on the wire, upper-cased where the original
    /// server shipped it that way.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "BAD REQUEST",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::NotImplemented => "Method Not Implemented",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Formats the bare status line, CRLF included.
pub fn status_line(status: StatusCode) -> String {
    format!(
        "{} {} {}\r\n",
        PROTOCOL,
        status.as_u16(),
        status.reason_phrase()
    )
}

/// A fixed-shape HTTP/1.0 response.
///
/// Every response here is status line, optional Server header,
/// `Content-Type: text/html`, blank line, then a canned HTML body. Bodies
/// are close-delimited; no Content-Length is ever sent.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    server_header: bool,
    body: &'static str,
}

impl Response {
    /// 501 for any method other than GET/POST.
    pub fn not_implemented() -> Self {
        Self {
            status: StatusCode::NotImplemented,
            server_header: true,
            body: "<HTML><HEAD><TITLE>Method Not Implemented\r\n\
                   </TITLE></HEAD>\r\n\
                   <BODY><P>HTTP request method not supported.\r\n\
                   </BODY></HTML>\r\n",
        }
    }

    /// 404 for a resolved path missing on disk or a file that will not open.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            server_header: true,
            body: "<HTML><TITLE>Not Found<TITLE>\r\n\
                   <BODY><P>The server could not fulfill\r\n\
                   your request because the resource specified\r\n\
                   is unavailable or nonexistent.\r\n\
                   </BODY></HTML>\r\n",
        }
    }

    /// 400 for a POST that arrived without a Content-Length header.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            server_header: false,
            body: "<P>Your browser sent a bad request, \
                   such as a POST without a Content-Length.\r\n",
        }
    }

    /// 500 when the CGI subprocess could not be started.
    pub fn cannot_execute() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            server_header: false,
            body: "<P>Error prohibited CGI execution.\r\n",
        }
    }

    /// The 200 header block preceding a static file body.
    pub fn static_ok() -> Self {
        Self {
            status: StatusCode::Ok,
            server_header: true,
            body: "",
        }
    }

    /// Serializes the response for the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(status_line(self.status).as_bytes());
        if self.server_header {
            buf.extend_from_slice(SERVER_STRING.as_bytes());
        }
        buf.extend_from_slice(b"Content-Type: text/html\r\n");
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(self.body.as_bytes());

        buf
    }
}
