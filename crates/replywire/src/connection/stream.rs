//! Low-level TP stream handling.

use crate::error::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Buffered line stream over a duplex byte stream.
///
/// Provides the two transport operations the TP client needs: line-delimited
/// reads and raw writes. The stream is only ever read and written, never
/// shut down; opening and closing the connection stays with the caller.
#[derive(Debug)]
pub struct LineStream<S> {
    inner: BufReader<S>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> LineStream<S> {
    /// Wraps a stream.
    #[must_use]
    pub fn new(stream: S) -> Self {
        Self {
            inner: BufReader::new(stream),
        }
    }

    /// Reads one line from the stream.
    ///
    /// The line terminator is kept. Returns an empty string at EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.inner.read_line(&mut line).await?;
        Ok(line)
    }

    /// Writes data to the stream and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.inner.get_mut().write_all(data).await?;
        self.inner.get_mut().flush().await?;
        Ok(())
    }

    /// Returns a reference to the underlying stream.
    #[must_use]
    pub fn get_ref(&self) -> &S {
        self.inner.get_ref()
    }

    /// Unwraps the underlying stream.
    ///
    /// Any input buffered but not yet consumed is discarded.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

/// Connects to a server over plain TCP.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn connect(hostname: &str, port: u16) -> Result<TcpStream> {
    let addr = format!("{hostname}:{port}");
    Ok(TcpStream::connect(&addr).await?)
}
