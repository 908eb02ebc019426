//! Formatting utilities for display values.

use crate::config::address_display::{PREFIX_LEN, SUFFIX_LEN};

/// Format a wallet address for display (klv1...wxyz).
///
/// Addresses too short to gain anything from truncation are returned as-is.
/// Works on characters, so multi-byte input is never split.
pub fn truncate_address(address: &str) -> String {
    let len = address.chars().count();
    if len <= PREFIX_LEN + SUFFIX_LEN + 3 {
        return address.to_string();
    }

    let prefix: String = address.chars().take(PREFIX_LEN).collect();
    let suffix: String = address.chars().skip(len - SUFFIX_LEN).collect();
    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let addr = "klv1qqqqqqqqqqqqqpgqxwklx9kjsa0srdvq0zu7cw9f5uvg8kkw";
        assert_eq!(truncate_address(addr), "klv1...8kkw");
    }

    #[test]
    fn test_truncate_short_address() {
        assert_eq!(truncate_address("klv1abc"), "klv1abc");
        assert_eq!(truncate_address("klv1abcdxyz"), "klv1abcdxyz");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_address("ñññññññññññññ"), "ññññ...ññññ");
    }
}
