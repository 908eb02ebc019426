//! Core wallet-connection logic.
//!
//! This module provides:
//! - [`WalletController`] driving the connection handshake
//! - `WalletProvider`, `Timer` and `ConnectNotifier` seams injected into it
//! - [`KleverProvider`], [`BrowserTimer`], [`HttpNotifier`] browser implementations
//! - [`session`] localStorage flag for restoring a connection on reload

mod controller;
pub mod error;
mod klever;
mod notify;
mod provider;
pub mod session;

pub use controller::WalletController;
pub use klever::KleverProvider;
pub use notify::HttpNotifier;
pub use provider::BrowserTimer;
