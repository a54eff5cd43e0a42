//! Canonical order-independent key for a (merchant, terminal) pair.
//!
//! Terminal hardware is known to sometimes transmit `merchantId` and
//! `terminalId` reversed. All Sale lookups and upserts key on the canonical
//! pair so a swapped request still matches the same records.

use serde::{Deserialize, Serialize};

/// An unordered (merchant, terminal) identifier pair.
///
/// Construction sorts the two values, so `new("M1", "T1")` and
/// `new("T1", "M1")` compare equal and render the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalPair {
    lo: String,
    hi: String,
}

impl TerminalPair {
    pub fn new(merchant_id: &str, terminal_id: &str) -> Self {
        let a = merchant_id.trim();
        let b = terminal_id.trim();
        if a <= b {
            Self {
                lo: a.to_string(),
                hi: b.to_string(),
            }
        } else {
            Self {
                lo: b.to_string(),
                hi: a.to_string(),
            }
        }
    }

    /// Canonical storage key, `"<lo>|<hi>"`.
    ///
    /// `|` cannot appear in merchant or terminal identifiers, so the
    /// rendering is unambiguous.
    pub fn key(&self) -> String {
        format!("{}|{}", self.lo, self.hi)
    }
}

impl std::fmt::Display for TerminalPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.lo, self.hi)
    }
}
