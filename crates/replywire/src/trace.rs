//! Wire-transcript tracing.
//!
//! Every outbound write and every inbound line can be mirrored to a caller
//! supplied sink for transcript visibility. The sink is a logging side
//! channel, not part of the protocol contract: sink failures never affect
//! protocol outcomes.

use std::io::Write;

/// Direction of traced traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Data sent to the server.
    Send,
    /// Data received from the server.
    Recv,
}

/// Observer for raw protocol traffic.
///
/// Implementations receive the bytes exactly as they crossed the wire, one
/// call per outbound write and per inbound line.
pub trait Trace {
    /// Records one unit of traffic.
    fn record(&mut self, dir: Direction, data: &[u8]);
}

/// Trace sink that mirrors traffic to standard error.
///
/// Sent data is prefixed with `"< "`, received data with `"> "`. Errors
/// writing to standard error are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrTrace;

impl Trace for StderrTrace {
    fn record(&mut self, dir: Direction, data: &[u8]) {
        let prefix: &[u8] = match dir {
            Direction::Send => b"< ",
            Direction::Recv => b"> ",
        };
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(prefix);
        let _ = stderr.write_all(data);
    }
}
