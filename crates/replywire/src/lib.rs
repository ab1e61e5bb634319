//! # replywire
//!
//! Client-side transaction primitive for line-oriented command/response
//! protocols — the family exemplified by SMTP, FTP and POP3, where the
//! server answers every exchange with a numeric status code plus text, and
//! the client sends one command line at a time, validating each reply
//! before proceeding.
//!
//! ## Features
//!
//! - **Latched failure**: the first error of any kind (transport, parse,
//!   status mismatch) permanently fails the session; every later operation
//!   is a no-op that re-reports it
//! - **Strict response validation**: one line per exchange, `<code> <token>`
//!   shape, expected code checked before the caller proceeds
//! - **Protocol-agnostic**: no command vocabulary; higher-level protocol
//!   clients are built on top
//! - **Transcript tracing**: every line mirrored to an injectable sink,
//!   plus `tracing` events
//!
//! ## Quick Start
//!
//! ```ignore
//! use replywire::{TpClient, connect};
//!
//! #[tokio::main]
//! async fn main() -> replywire::Result<()> {
//!     // The caller owns the connection; the client never closes it.
//!     let stream = connect("mail.example.com", 25).await?;
//!     let mut client = TpClient::new(stream);
//!
//!     client.expect(220).await?;
//!     client.write_line("HELO client.example.com").await?;
//!     client.expect(250).await?;
//!     client.write_line("QUIT").await?;
//!     client.expect(221).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Session States
//!
//! A client is a two-state machine:
//!
//! ```text
//! ┌──────┐  any operation fails  ┌────────┐
//! │  OK  │ ────────────────────→ │ FAILED │ (permanent)
//! └──────┘                       └────────┘
//! ```
//!
//! No transition leaves FAILED; `err()` returns the latched error.
//!
//! ## Modules
//!
//! - [`connection`]: the client and the buffered line stream
//! - [`parser`]: status-line tokenizer
//! - [`trace`]: wire-transcript hooks
//! - [`types`]: reply and status-code types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod connection;
mod error;
pub mod parser;
pub mod trace;
pub mod types;

pub use connection::{LineStream, TpClient, connect};
pub use error::{Error, Result};
pub use trace::{Direction, StderrTrace, Trace};
pub use types::{Reply, ReplyCode};
