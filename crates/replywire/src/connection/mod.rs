//! TP connection layer: the client state machine and its line stream.

mod client;
mod stream;

pub use client::TpClient;
pub use stream::{LineStream, connect};
