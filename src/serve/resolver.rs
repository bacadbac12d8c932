use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use crate::config::ContentConfig;
use crate::http::request::{Method, RequestLine};

/// Routing decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routing {
    NotFound,
    Static(PathBuf),
    Cgi(PathBuf),
}

/// Maps a request target to a filesystem path under the document root and
/// decides between static serving and CGI execution.
///
/// A target ending in `/` gets the index document appended before the
/// lookup; a target that turns out to be a directory gets it appended after.
/// Metadata is queried exactly once, so in the latter case the mode bits
/// tested are the directory's. CGI eligibility is the OR of: POST method,
/// GET with a query string present, any execute bit set.
pub async fn resolve(content: &ContentConfig, request: &RequestLine) -> Routing {
    let mut path = format!("{}{}", content.root, request.path);
    if path.ends_with('/') {
        path.push_str(&content.index);
    }

    let meta = match tokio::fs::metadata(&path).await {
        Ok(meta) => meta,
        Err(_) => return Routing::NotFound,
    };

    if meta.is_dir() {
        path.push('/');
        path.push_str(&content.index);
    }

    let executable = meta.permissions().mode() & 0o111 != 0;
    let cgi = request.method == Method::Post
        || (request.method == Method::Get && request.query.is_some())
        || executable;

    if cgi {
        Routing::Cgi(PathBuf::from(path))
    } else {
        Routing::Static(PathBuf::from(path))
    }
}
