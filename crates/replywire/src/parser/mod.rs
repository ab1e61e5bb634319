//! TP status-line parser.

use crate::error::{Error, Result};
use crate::types::{Reply, ReplyCode};

/// Parses one server status line.
///
/// Reply lines have the shape `<digits> <token> ...`:
/// - the leading run of ASCII digits is the status code,
/// - the next whitespace-delimited token is the message head,
/// - anything after the first token is ignored.
///
/// This is a deliberately shallow parse, not a syntax validator. A trailing
/// CR LF is tolerated but not required.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the line has no numeric prefix,
/// the digit run does not fit a status code, or no message token follows.
pub fn parse_status_line(line: &str) -> Result<Reply> {
    let line = line.trim_end_matches(['\r', '\n']);

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(Error::malformed(line));
    }

    let code = line[..digits]
        .parse::<u16>()
        .map_err(|_| Error::malformed(line))?;

    let text = line[digits..]
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::malformed(line))?;

    Ok(Reply::new(ReplyCode::new(code), text.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_simple_reply() {
        let reply = parse_status_line("250 OK").unwrap();
        assert_eq!(reply.code.as_u16(), 250);
        assert_eq!(reply.text, "OK");
        assert!(reply.is_success());
    }

    #[test]
    fn test_parse_with_terminator() {
        let reply = parse_status_line("250 OK\r\n").unwrap();
        assert_eq!(reply.code.as_u16(), 250);
        assert_eq!(reply.text, "OK");
    }

    #[test]
    fn test_parse_greeting_keeps_first_token() {
        let reply = parse_status_line("220 smtp.example.com ESMTP ready\r\n").unwrap();
        assert_eq!(reply.code.as_u16(), 220);
        assert_eq!(reply.text, "smtp.example.com");
    }

    #[test]
    fn test_parse_trailing_whitespace_tolerated() {
        let reply = parse_status_line("550 Denied   \r\n").unwrap();
        assert_eq!(reply.code.as_u16(), 550);
        assert_eq!(reply.text, "Denied");
    }

    #[test]
    fn test_parse_missing_separator() {
        // A token glued to the code is still two fields.
        let reply = parse_status_line("250OK").unwrap();
        assert_eq!(reply.code.as_u16(), 250);
        assert_eq!(reply.text, "OK");
    }

    #[test]
    fn test_parse_error_empty() {
        assert!(parse_status_line("").is_err());
        assert!(parse_status_line("\r\n").is_err());
    }

    #[test]
    fn test_parse_error_no_numeric_prefix() {
        assert!(parse_status_line("ready 250\r\n").is_err());
        assert!(parse_status_line("-250 OK\r\n").is_err());
    }

    #[test]
    fn test_parse_error_code_without_token() {
        assert!(parse_status_line("250").is_err());
        assert!(parse_status_line("250   \r\n").is_err());
    }

    #[test]
    fn test_parse_error_code_overflow() {
        assert!(parse_status_line("99999 OK\r\n").is_err());
    }

    proptest! {
        #[test]
        fn never_panics(line in "\\PC*") {
            let _ = parse_status_line(&line);
        }

        #[test]
        fn accepts_well_formed_lines(
            code in 0u16..1000,
            token in "[!-~]+",
            trailer in "[ -~]*",
        ) {
            let line = format!("{code} {token} {trailer}\r\n");
            let reply = parse_status_line(&line).unwrap();
            prop_assert_eq!(reply.code.as_u16(), code);
            prop_assert_eq!(reply.text, token);
        }
    }
}
