//! Sequential human-readable identifier generation.
//!
//! Quotation identifiers have the shape `PXL-YYYY-NNN`. The next identifier
//! is derived from the most recently created sibling's identifier alone;
//! uniqueness under concurrent writers is enforced one layer up by a unique
//! index and a bounded retry.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix for quotation identifiers.
pub const QUOTE_PREFIX: &str = "PXL";

/// Matches `PREFIX-YYYY-NNN` where NNN is at least three digits.
static SEQUENTIAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)-(\d{4})-(\d{3,})$").expect("pattern is valid"));

/// Produce the identifier that follows `prev` for the given `prefix`.
///
/// When `prev` is absent or does not match `PREFIX-YYYY-NNN`, numbering
/// resets to `001` under `current_year`. When it matches, the numeric suffix
/// is incremented and the year component of `prev` is kept as-is, so an
/// existing sequence is not restarted at a year boundary.
pub fn next_sequential_id(prefix: &str, prev: Option<&str>, current_year: i32) -> String {
    if let Some(caps) = prev.and_then(|p| SEQUENTIAL_ID.captures(p)) {
        if &caps[1] == prefix {
            // Overflowing suffixes fall through to a reset.
            if let Ok(seq) = caps[3].parse::<u64>() {
                let year = &caps[2];
                return format!("{prefix}-{year}-{:03}", seq + 1);
            }
        }
    }
    format!("{prefix}-{current_year}-001")
}

/// Next quotation identifier, e.g. `PXL-2025-003` -> `PXL-2025-004`.
pub fn next_quote_id(prev: Option<&str>, current_year: i32) -> String {
    next_sequential_id(QUOTE_PREFIX, prev, current_year)
}

/// Invoice number of the shape `PN-00001` (five digits, no year component).
pub fn invoice_number(seq: u32) -> String {
    format!("PN-{seq:05}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_preserves_padding() {
        assert_eq!(next_quote_id(Some("PXL-2025-009"), 2026), "PXL-2025-010");
        assert_eq!(next_quote_id(Some("PXL-2025-099"), 2026), "PXL-2025-100");
        assert_eq!(next_quote_id(Some("PXL-2025-001"), 2026), "PXL-2025-002");
    }

    #[test]
    fn test_no_previous_starts_at_one() {
        assert_eq!(next_quote_id(None, 2025), "PXL-2025-001");
    }

    #[test]
    fn test_year_of_previous_id_is_kept() {
        // Numbering continues under the old year even after a boundary.
        assert_eq!(next_quote_id(Some("PXL-2024-041"), 2025), "PXL-2024-042");
    }

    #[test]
    fn test_malformed_previous_resets() {
        assert_eq!(next_quote_id(Some("garbage"), 2025), "PXL-2025-001");
        assert_eq!(next_quote_id(Some("PXL-25-001"), 2025), "PXL-2025-001");
        assert_eq!(next_quote_id(Some("PXL-2025-1"), 2025), "PXL-2025-001");
        assert_eq!(next_quote_id(Some(""), 2025), "PXL-2025-001");
    }

    #[test]
    fn test_prefix_mismatch_resets() {
        assert_eq!(next_quote_id(Some("INV-2025-004"), 2025), "PXL-2025-001");
    }

    #[test]
    fn test_suffix_grows_past_three_digits() {
        assert_eq!(next_quote_id(Some("PXL-2025-999"), 2025), "PXL-2025-1000");
        assert_eq!(next_quote_id(Some("PXL-2025-1000"), 2025), "PXL-2025-1001");
    }

    #[test]
    fn test_invoice_number_padding() {
        assert_eq!(invoice_number(1), "PN-00001");
        assert_eq!(invoice_number(123), "PN-00123");
        assert_eq!(invoice_number(99999), "PN-99999");
    }
}
