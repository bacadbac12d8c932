use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

use crate::http::parser::{drain_headers, scan_content_length};
use crate::http::reader::LineReader;
use crate::http::request::Method;
use crate::http::response::{Response, StatusCode, status_line};
use crate::http::writer::ResponseWriter;

const DRAIN_BUFFER: usize = 8192;

/// Runs the resolved executable as a CGI child and ferries bytes between
/// the client connection and the child's pipes.
///
/// GET consumes the remaining header lines and passes `QUERY_STRING`; POST
/// scans them for `Content-Length` (mandatory, else 400 and no child) and
/// passes `CONTENT_LENGTH`. The `200 OK` status line goes out as soon as
/// the child is spawned, before any script output; response headers are the
/// script's responsibility. The child is always reaped before returning.
pub async fn execute<R, W>(
    reader: &mut LineReader<R>,
    writer: &mut W,
    path: &Path,
    method: Method,
    query: Option<&str>,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let content_length = if method == Method::Post {
        match scan_content_length(reader).await? {
            Some(length) => Some(length),
            None => {
                ResponseWriter::new(&Response::bad_request())
                    .write_to_stream(writer)
                    .await?;
                return Ok(());
            }
        }
    } else {
        drain_headers(reader).await?;
        None
    };

    let mut command = Command::new(path);
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .env("REQUEST_METHOD", method.as_str());
    match content_length {
        Some(length) => {
            command.env("CONTENT_LENGTH", length.to_string());
        }
        None => {
            command.env("QUERY_STRING", query.unwrap_or(""));
        }
    }

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(error) => {
            tracing::warn!("CGI spawn failed for {}: {}", path.display(), error);
            ResponseWriter::new(&Response::cannot_execute())
                .write_to_stream(writer)
                .await?;
            return Ok(());
        }
    };

    // Eager status line; a script that dies after this point still got its
    // 200 on the wire.
    writer
        .write_all(status_line(StatusCode::Ok).as_bytes())
        .await?;

    let mut stdin = child.stdin.take().context("child stdin not captured")?;
    let mut stdout = child.stdout.take().context("child stdout not captured")?;

    if let Some(length) = content_length {
        reader.copy_exact(length, &mut stdin).await?;
    }
    // Close the child's stdin so scripts reading to EOF terminate.
    drop(stdin);

    let mut buffer = BytesMut::with_capacity(DRAIN_BUFFER);
    loop {
        let n = stdout.read_buf(&mut buffer).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer).await?;
        buffer.clear();
    }

    child.wait().await?;
    Ok(())
}
