#![allow(clippy::expect_used, clippy::doc_markdown, clippy::uninlined_format_args)]
//! Example: deliver a message with the TP client
//!
//! Drives the classic SMTP transcript (HELO, MAIL FROM, RCPT TO, DATA,
//! QUIT) against a server, mirroring the wire transcript to stderr. The
//! connection is opened and closed here — the client never owns it.
//!
//! The latch makes per-call error checks unnecessary: after the first
//! failure every call is a no-op, so the transcript is written straight
//! through and the error is inspected once at the end.
//!
//! ## Running
//!
//! ```bash
//! cargo run --package replywire --example smtp_send -- mail.example.com 25
//! ```

use replywire::{StderrTrace, TpClient, connect};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_string());
    let port = args.next().map_or(Ok(25), |p| p.parse())?;

    let stream = connect(&host, port).await?;
    let mut w = TpClient::new(stream).with_trace(Box::new(StderrTrace));

    let _ = w.expect(220).await;

    let _ = w.write_line("HELO localhost").await;
    let _ = w.expect(250).await;

    let _ = w.write_line("MAIL FROM:<postmaster@localhost>").await;
    let _ = w.expect(250).await;

    let _ = w.write_line("RCPT TO:<postmaster@localhost>").await;
    let _ = w.expect(250).await;

    let _ = w.write_line("DATA").await;
    let _ = w.expect(354).await;

    let text = "Subject: replywire test\r\n\r\nHello from replywire.\r\n.this line starts with a dot\r\n";
    for line in text.split("\r\n") {
        // A body line starting with a dot gets one extra dot.
        if line.starts_with('.') {
            let _ = w.write(b".").await;
        }
        let _ = w.write_line(line).await;
    }

    let _ = w.write_line(".").await;
    let _ = w.expect(250).await;

    let _ = w.write_line("QUIT").await;
    let _ = w.expect(221).await;

    if let Some(err) = w.err() {
        return Err(err.clone().into());
    }

    // Closing the connection is our job, not the client's.
    drop(w.into_inner());

    Ok(())
}
