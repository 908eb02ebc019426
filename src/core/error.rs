//! Custom error types for the application.
//!
//! - [`WalletError`] - outcome of a failed or interrupted connection handshake
//! - [`ProviderError`] - error raised by the injected wallet provider
//! - [`NotifyError`] - backend notification failures (logged only)
//! - [`ConfigError`] - invalid detection configuration

use thiserror::Error;

/// Error message surfaced by the wallet provider itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Ways a connection handshake can end without an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Provider handle never appeared within the retry budget.
    #[error(
        "Klever Wallet extension not detected. Make sure it is installed, enabled, and reload the page."
    )]
    ProviderNotDetected,
    /// Provider returned no account (declined or cancelled in the wallet).
    #[error("No account was selected or the request was cancelled by the user.")]
    UserRejected,
    /// Provider raised an error while initializing or listing accounts.
    #[error("An unexpected error occurred: {0}. Make sure the extension is unlocked.")]
    ProviderCall(#[from] ProviderError),
    /// The run was cancelled from the outside before detection finished.
    #[error("Connection attempt cancelled")]
    Cancelled,
}

/// Backend notification errors.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_retries must be at least 1")]
    ZeroRetries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_detected_message() {
        assert!(
            WalletError::ProviderNotDetected
                .to_string()
                .contains("not detected")
        );
    }

    #[test]
    fn test_provider_call_embeds_cause() {
        let err = WalletError::from(ProviderError::new("boom"));
        assert!(err.to_string().contains("boom"));
    }
}
