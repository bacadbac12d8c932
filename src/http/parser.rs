use std::io;

use tokio::io::AsyncRead;

use crate::http::reader::{LineReader, MAX_LINE};
use crate::http::request::{Method, RequestLine};

/// Target buffer bound; longer targets are silently truncated.
const MAX_TARGET: usize = 255;

const CONTENT_LENGTH_PREFIX: &str = "Content-Length:";

/// Splits a request line into method, path and query string.
///
/// The method token is matched case-insensitively against GET and POST; an
/// unsupported method short-circuits, leaving path and query empty. The
/// target is copied up to `MAX_TARGET - 1` characters. Only GET targets are
/// scanned for a `?`; everything after the first one becomes the query
/// string and the path is truncated at the delimiter.
pub fn parse_request_line(line: &str) -> RequestLine {
    let mut parts = line.split_whitespace();

    let method = Method::parse(parts.next().unwrap_or(""));
    if method == Method::Unsupported {
        return RequestLine {
            method,
            path: String::new(),
            query: None,
        };
    }

    let mut path: String = parts
        .next()
        .unwrap_or("")
        .chars()
        .take(MAX_TARGET - 1)
        .collect();

    let mut query = None;
    if method == Method::Get {
        if let Some(pos) = path.find('?') {
            query = Some(path[pos + 1..].to_string());
            path.truncate(pos);
        }
    }

    RequestLine {
        method,
        path,
        query,
    }
}

/// Consumes header lines until the empty line or a zero-length read.
///
/// The full request head must be read off the socket before a response goes
/// out on the same stream.
pub async fn drain_headers<R>(reader: &mut LineReader<R>) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    loop {
        let line = reader.read_line(MAX_LINE).await?;
        if line.is_empty() || line == "\n" {
            return Ok(());
        }
    }
}

/// Drains the header block while looking for a `Content-Length:` value.
///
/// The prefix match is case-insensitive. A header whose value does not parse
/// counts as length 0; `None` means no such header was present at all.
pub async fn scan_content_length<R>(reader: &mut LineReader<R>) -> io::Result<Option<usize>>
where
    R: AsyncRead + Unpin,
{
    let mut content_length = None;

    loop {
        let line = reader.read_line(MAX_LINE).await?;
        if line.is_empty() || line == "\n" {
            return Ok(content_length);
        }

        let bytes = line.as_bytes();
        if bytes.len() >= CONTENT_LENGTH_PREFIX.len()
            && bytes[..CONTENT_LENGTH_PREFIX.len()]
                .eq_ignore_ascii_case(CONTENT_LENGTH_PREFIX.as_bytes())
        {
            let value = line[CONTENT_LENGTH_PREFIX.len()..].trim();
            content_length = Some(value.parse().unwrap_or(0));
        }
    }
}
