//! Request tokens for discarding stale responses.
//!
//! Each flow issues a fresh token per load. When a response arrives, it is
//! applied only if its token is still the latest one issued, so the most
//! recent request wins regardless of completion order.

use std::cell::Cell;
use std::fmt;

/// Identifies one load issued by a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence number.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token source for a single flow.
///
/// Single-threaded: the browser event loop is the only executor.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: Cell<u64>,
}

impl RequestTokens {
    /// Create a token source with nothing issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one.
    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestToken(next)
    }

    /// Check whether `token` is the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }

    /// The most recently issued token, if any.
    pub fn latest(&self) -> Option<RequestToken> {
        match self.latest.get() {
            0 => None,
            n => Some(RequestToken(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let tokens = RequestTokens::new();
        assert_eq!(tokens.latest(), None);

        let first = tokens.issue();
        let second = tokens.issue();
        assert!(second > first);
        assert_eq!(tokens.latest(), Some(second));
    }

    #[test]
    fn test_only_latest_is_current() {
        let tokens = RequestTokens::new();
        let first = tokens.issue();
        assert!(tokens.is_current(first));

        let second = tokens.issue();
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
    }
}
