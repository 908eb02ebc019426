//! Utility modules for browser access and display formatting.
//!
//! Provides:
//! - [`dom`] - Window and localStorage access
//! - [`truncate_address`] - Display-only address shortening

pub mod dom;
pub mod format;

pub use format::truncate_address;
