//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ConnectionStatus`], [`Phase`], [`Tone`] - Wallet connection state shown by the UI
//! - [`WalletAddress`], [`Account`] - Values returned by the wallet provider

mod wallet;

pub use wallet::{Account, ConnectionStatus, Phase, Tone, WalletAddress};
