use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Longest request or header line the reader will frame, terminator included.
pub const MAX_LINE: usize = 1024;

/// Frames CR/LF-terminated lines off a byte stream, one byte at a time.
///
/// A single-byte lookahead slot stands in for an `MSG_PEEK` recv: after a
/// `\r` the next byte is fetched to decide whether it completes a CRLF pair,
/// and kept pending when it does not. Request-body bytes must be pulled
/// through the same reader so a pending byte is never lost.
pub struct LineReader<R> {
    inner: R,
    lookahead: Option<u8>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookahead: None,
        }
    }

    async fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        if self.inner.read(&mut buf).await? == 0 {
            return Ok(None);
        }
        Ok(Some(buf[0]))
    }

    async fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        if self.lookahead.is_none() {
            let mut buf = [0u8; 1];
            if self.inner.read(&mut buf).await? == 1 {
                self.lookahead = Some(buf[0]);
            }
        }
        Ok(self.lookahead)
    }

    /// Reads one line of at most `max - 1` bytes.
    ///
    /// `\n`, `\r` and `\r\n` all terminate the line and are normalized to a
    /// single trailing `\n`. A line cut off by the length bound or by peer
    /// close comes back without the trailing `\n`; once the stream is
    /// exhausted the result is an empty string.
    pub async fn read_line(&mut self, max: usize) -> io::Result<String> {
        let mut line: Vec<u8> = Vec::new();

        while line.len() < max - 1 {
            match self.next_byte().await? {
                Some(b'\n') => {
                    line.push(b'\n');
                    break;
                }
                Some(b'\r') => {
                    // CRLF collapses to LF; a lone CR terminates the line
                    // and the peeked byte stays pending for the next read.
                    if self.peek_byte().await? == Some(b'\n') {
                        self.lookahead = None;
                    }
                    line.push(b'\n');
                    break;
                }
                Some(byte) => line.push(byte),
                None => break,
            }
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Relays up to `count` body bytes into `dst`, pending lookahead first.
    ///
    /// Returns the number of bytes actually relayed; short only when the
    /// peer closes early.
    pub async fn copy_exact<W>(&mut self, count: usize, dst: &mut W) -> io::Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        let mut relayed = 0;
        while relayed < count {
            match self.next_byte().await? {
                Some(byte) => {
                    dst.write_all(&[byte]).await?;
                    relayed += 1;
                }
                None => break,
            }
        }
        Ok(relayed)
    }
}
