use tokio::io::{AsyncRead, AsyncWrite, ReadHalf, WriteHalf};

use crate::config::ContentConfig;
use crate::http::parser::{drain_headers, parse_request_line};
use crate::http::reader::{LineReader, MAX_LINE};
use crate::http::request::Method;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::serve::{self, Routing, cgi, static_files};

/// One accepted connection, from request line to close.
///
/// The handler owns the stream; whatever path `run` takes, the socket is
/// closed exactly once when the connection is dropped. Generic over the
/// stream so real sockets and in-memory duplex pipes both work.
pub struct Connection<S> {
    reader: LineReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    content: ContentConfig,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, content: ContentConfig) -> Self {
        let (read_half, write_half) = tokio::io::split(stream);
        Self {
            reader: LineReader::new(read_half),
            writer: write_half,
            content,
        }
    }

    /// Processes exactly one request: request line, header drain, body
    /// relay if any, response. HTTP/1.0, so the connection closes after.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let line = self.reader.read_line(MAX_LINE).await?;
        let request = parse_request_line(&line);

        if request.method == Method::Unsupported {
            // 501 without touching the rest of the request.
            return ResponseWriter::new(&Response::not_implemented())
                .write_to_stream(&mut self.writer)
                .await;
        }

        match serve::resolve(&self.content, &request).await {
            Routing::NotFound => {
                drain_headers(&mut self.reader).await?;
                ResponseWriter::new(&Response::not_found())
                    .write_to_stream(&mut self.writer)
                    .await?;
            }
            Routing::Static(path) => {
                static_files::serve(&mut self.reader, &mut self.writer, &path).await?;
            }
            Routing::Cgi(path) => {
                cgi::execute(
                    &mut self.reader,
                    &mut self.writer,
                    &path,
                    request.method,
                    request.query.as_deref(),
                )
                .await?;
            }
        }

        Ok(())
    }
}
