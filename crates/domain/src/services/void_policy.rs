//! Void-check policy.

/// Reserved invoice number meaning "void not allowed".
pub const VOID_DENY_SENTINEL: &str = "0000";

/// Decides whether a transaction may be voided.
///
/// Pure and deterministic, no persistence: every invoice number is voidable
/// except the reserved sentinel. A missing invoice number allows the void.
pub fn allow_void(invoice_number: Option<&str>) -> bool {
    invoice_number != Some(VOID_DENY_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_void_regular_invoice() {
        assert!(allow_void(Some("1234")));
        assert!(allow_void(Some("INV-77")));
    }

    #[test]
    fn test_deny_void_sentinel() {
        assert!(!allow_void(Some("0000")));
    }

    #[test]
    fn test_allow_void_missing_invoice() {
        assert!(allow_void(None));
    }

    #[test]
    fn test_sentinel_requires_exact_match() {
        assert!(allow_void(Some("00000")));
        assert!(allow_void(Some("000")));
    }
}
