/// HTTP request methods.
///
/// The server implements GET and POST; everything else parses to
/// `Unsupported` and is answered with 501 before any further reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Unsupported,
}

impl Method {
    /// Parses an HTTP method token, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use emberd::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::Get);
    /// assert_eq!(Method::parse("post"), Method::Post);
    /// assert_eq!(Method::parse("DELETE"), Method::Unsupported);
    /// ```
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("GET") {
            Method::Get
        } else if token.eq_ignore_ascii_case("POST") {
            Method::Post
        } else {
            Method::Unsupported
        }
    }

    /// Canonical method name, as handed to CGI children via `REQUEST_METHOD`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Unsupported => "",
        }
    }
}

/// The parsed first line of a request.
///
/// `query` is populated only for GET targets containing a `?`, in which case
/// `path` has been truncated at the delimiter. A POST target keeps any `?`
/// it carries.
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
}
