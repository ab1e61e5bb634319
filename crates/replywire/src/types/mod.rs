//! Core TP types (replies, status codes).

mod reply;

pub use reply::{Reply, ReplyCode};
