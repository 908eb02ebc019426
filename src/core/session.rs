//! Wallet session flag kept in localStorage.
//!
//! The flag only records that the user connected before, so boot knows
//! whether asking the provider for its current address is worthwhile.

use crate::config::WALLET_SESSION_KEY;
use crate::utils::dom;

/// Check if user has previously connected (localStorage flag).
pub fn has_session() -> bool {
    dom::local_storage()
        .and_then(|s| s.get_item(WALLET_SESSION_KEY).ok().flatten())
        .is_some()
}

/// Save connection session to localStorage.
pub fn save_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(WALLET_SESSION_KEY, "1");
    }
}

/// Clear connection session from localStorage.
pub fn clear_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(WALLET_SESSION_KEY);
    }
}
