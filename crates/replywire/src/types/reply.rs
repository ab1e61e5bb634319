//! TP reply types.

/// One parsed server reply line.
///
/// Replies are transient: [`expect`](crate::TpClient::expect) parses one per
/// call and does not retain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Status code (e.g., 250).
    pub code: ReplyCode,
    /// First whitespace-delimited token of the message.
    pub text: String,
}

impl Reply {
    /// Creates a new reply.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // String is not const-compatible
    pub fn new(code: ReplyCode, text: String) -> Self {
        Self { code, text }
    }

    /// Returns true if this is a success reply (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

/// TP status code.
///
/// The leading integer of a server reply line, indicating the outcome class
/// of the exchange (2xx success, 3xx intermediate, 4xx transient failure,
/// 5xx permanent failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReplyCode(u16);

impl ReplyCode {
    /// Creates a new reply code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if this is a success code (2xx).
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is an intermediate code (3xx).
    #[must_use]
    pub const fn is_intermediate(self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// Returns true if this is a transient error (4xx).
    #[must_use]
    pub const fn is_transient(self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns true if this is a permanent error (5xx).
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl std::fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    mod reply_code_tests {
        use super::*;

        #[test]
        fn outcome_classes() {
            assert!(ReplyCode::new(250).is_success());
            assert!(ReplyCode::new(354).is_intermediate());
            assert!(ReplyCode::new(450).is_transient());
            assert!(ReplyCode::new(550).is_permanent());
        }

        #[test]
        fn classes_are_exclusive() {
            let ok = ReplyCode::new(250);
            assert!(!ok.is_intermediate());
            assert!(!ok.is_transient());
            assert!(!ok.is_permanent());
        }

        #[test]
        fn as_u16() {
            assert_eq!(ReplyCode::new(221).as_u16(), 221);
        }

        #[test]
        fn display() {
            assert_eq!(format!("{}", ReplyCode::new(250)), "250");
        }

        #[test]
        fn ordering() {
            assert!(ReplyCode::new(250) < ReplyCode::new(550));
        }
    }

    mod reply_tests {
        use super::*;

        #[test]
        fn new() {
            let reply = Reply::new(ReplyCode::new(250), "OK".to_string());
            assert_eq!(reply.code.as_u16(), 250);
            assert_eq!(reply.text, "OK");
        }

        #[test]
        fn is_success() {
            assert!(Reply::new(ReplyCode::new(220), "ready".to_string()).is_success());
            assert!(!Reply::new(ReplyCode::new(550), "Denied".to_string()).is_success());
        }
    }
}
