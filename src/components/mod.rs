//! UI components built with Leptos.
//!
//! - [`header`] - Brand and wallet connect button
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Wallet connection status card

pub mod header;
pub mod icons;
pub mod status;

pub use header::Header;
pub use status::StatusCard;
