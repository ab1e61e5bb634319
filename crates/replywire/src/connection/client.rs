//! The TP client state machine.

use super::stream::LineStream;
use crate::error::{Error, Result};
use crate::parser::parse_status_line;
use crate::trace::{Direction, Trace};
use std::fmt;
use tokio::io::{AsyncRead, AsyncWrite};

/// Client-side driver for one session of a line-oriented command/response
/// protocol.
///
/// A `TpClient` wraps an already-open connection and alternates between
/// sending command lines ([`write_line`](Self::write_line)) and validating
/// status responses ([`expect`](Self::expect)). The first failure of any
/// kind latches: every later operation returns the same error without
/// touching the connection, and [`err`](Self::err) exposes it. A latched
/// client cannot be reset; discard it and start a fresh session, recovering
/// the connection with [`into_inner`](Self::into_inner) if needed.
///
/// The protocol is a strict request-then-response alternation, so a client
/// must have a single owner: all operations take `&mut self` and there is no
/// internal locking. Timeout policy belongs to the caller, e.g.
/// `tokio::time::timeout` around [`expect`](Self::expect).
pub struct TpClient<S> {
    stream: LineStream<S>,
    trace: Option<Box<dyn Trace + Send>>,
    err: Option<Error>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> TpClient<S> {
    /// Creates a client over an already-open connection.
    ///
    /// The client never opens or closes the connection; both stay with the
    /// caller.
    #[must_use]
    pub fn new(stream: S) -> Self {
        Self {
            stream: LineStream::new(stream),
            trace: None,
            err: None,
        }
    }

    /// Attaches a trace sink that receives every outbound write and every
    /// inbound line verbatim.
    #[must_use]
    pub fn with_trace(mut self, trace: Box<dyn Trace + Send>) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Sends raw bytes exactly as given.
    ///
    /// # Errors
    ///
    /// Returns the latched error if the client has already failed, or an I/O
    /// error (which latches) if the write does not complete.
    pub async fn write(&mut self, raw: &[u8]) -> Result<()> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        self.record(Direction::Send, raw);
        tracing::trace!(len = raw.len(), "send");

        match self.stream.write_all(raw).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.latch(err)),
        }
    }

    /// Sends one command line terminated with CR LF.
    ///
    /// `line` is any displayable value; callers substitute arguments with
    /// `format_args!`. The line itself must not contain CR LF.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`write`](Self::write).
    pub async fn write_line(&mut self, line: impl fmt::Display) -> Result<()> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        self.write(format!("{line}\r\n").as_bytes()).await
    }

    /// Reads one status response and checks its code.
    ///
    /// Suspends the caller until a full line (or EOF) is available on the
    /// connection. The response is not retained: a matching code is
    /// `Ok(())`, anything else latches.
    ///
    /// # Errors
    ///
    /// Returns the latched error if the client has already failed,
    /// [`Error::MalformedResponse`] if no `<code> <token>` pair could be
    /// read (including premature EOF), or [`Error::UnexpectedStatus`] if the
    /// parsed code differs from `code`. All of these latch.
    pub async fn expect(&mut self, code: u16) -> Result<()> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let line = match self.stream.read_line().await {
            Ok(line) => line,
            Err(err) => return Err(self.latch(err)),
        };

        self.record(Direction::Recv, line.as_bytes());
        tracing::trace!(line = line.trim_end(), "recv");

        let reply = match parse_status_line(&line) {
            Ok(reply) => reply,
            Err(err) => return Err(self.latch(err)),
        };

        if reply.code.as_u16() != code {
            let err = Error::unexpected(code, reply.code.as_u16(), reply.text);
            return Err(self.latch(err));
        }

        Ok(())
    }

    /// Returns the latched error, if any operation has failed.
    #[must_use]
    pub const fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Unwraps the underlying connection.
    ///
    /// Any input buffered but not yet consumed is discarded.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.stream.into_inner()
    }

    /// Stores the first error; every later operation re-reports it.
    fn latch(&mut self, err: Error) -> Error {
        self.err = Some(err.clone());
        err
    }

    fn record(&mut self, dir: Direction, data: &[u8]) {
        if let Some(trace) = &mut self.trace {
            trace.record(dir, data);
        }
    }
}
