use serde::{Deserialize, Serialize};

/// Identifier stamped on one oracle request.
///
/// Tokens are issued in strictly increasing order; a completion carrying a
/// token other than the most recently issued one for its panel is stale and
/// must be discarded, so overlapping triggers cannot race the displayed
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

/// Monotonic token issuer owned by the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSource {
    next: u64,
}

impl TokenSource {
    pub fn issue(&mut self) -> RequestToken {
        self.next += 1;
        RequestToken(self.next)
    }
}
