use std::path::Path;

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::drain_headers;
use crate::http::reader::LineReader;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

const COPY_BUFFER: usize = 8192;

/// Serves a resolved file: drains the request head, then either the fixed
/// 404 document or the fixed 200 header block followed by the file bytes
/// verbatim until EOF. The body is close-delimited, HTTP/1.0 style.
pub async fn serve<R, W>(
    reader: &mut LineReader<R>,
    writer: &mut W,
    path: &Path,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    drain_headers(reader).await?;

    match File::open(path).await {
        Err(_) => {
            ResponseWriter::new(&Response::not_found())
                .write_to_stream(writer)
                .await?;
        }
        Ok(mut file) => {
            ResponseWriter::new(&Response::static_ok())
                .write_to_stream(writer)
                .await?;
            send_contents(&mut file, writer).await?;
        }
    }

    Ok(())
}

async fn send_contents<W>(file: &mut File, writer: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buffer = BytesMut::with_capacity(COPY_BUFFER);

    loop {
        let n = file.read_buf(&mut buffer).await?;
        if n == 0 {
            return Ok(());
        }
        writer.write_all(&buffer).await?;
        buffer.clear();
    }
}
