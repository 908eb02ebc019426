use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::WalletError;
use crate::utils::truncate_address;

/// On-chain account identifier, treated as an opaque token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for buttons and messages (`klv1...wxyz`).
    pub fn short(&self) -> String {
        truncate_address(&self.0)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account entry as returned by the provider's account listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub address: WalletAddress,
}

/// Connection handshake phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Detecting,
    Requesting,
    Connected,
    Rejected,
    Failed,
}

/// Visual tone the view layer picks icon and color from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Phase {
    /// Detection or account request under way.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Phase::Detecting | Phase::Requesting)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Connected | Phase::Rejected | Phase::Failed)
    }

    pub fn tone(self) -> Tone {
        match self {
            Phase::Idle | Phase::Detecting | Phase::Requesting => Tone::Info,
            Phase::Connected => Tone::Success,
            Phase::Rejected | Phase::Failed => Tone::Error,
        }
    }
}

/// Snapshot of the wallet connection shown by the UI.
///
/// Values are only built through the per-phase constructors, so `address`
/// is present exactly when the phase is [`Phase::Connected`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionStatus {
    phase: Phase,
    title: String,
    message: String,
    address: Option<WalletAddress>,
}

impl ConnectionStatus {
    fn without_address(phase: Phase, title: &str, message: impl Into<String>) -> Self {
        Self {
            phase,
            title: title.to_string(),
            message: message.into(),
            address: None,
        }
    }

    pub fn idle() -> Self {
        Self::without_address(
            Phase::Idle,
            "Ready to Connect",
            "Click \"Connect Wallet\" to look for the Klever extension.",
        )
    }

    pub fn detecting() -> Self {
        Self::without_address(
            Phase::Detecting,
            "Looking for Extension",
            "Searching for Klever Wallet. This may take a moment...",
        )
    }

    pub fn requesting() -> Self {
        Self::without_address(
            Phase::Requesting,
            "Requesting Connection",
            "Please approve the connection in the Klever Wallet popup.",
        )
    }

    pub fn connected(address: WalletAddress) -> Self {
        Self {
            phase: Phase::Connected,
            title: "Connection Successful!".to_string(),
            message: format!(
                "Wallet connected: {}. You can now interact with the projects!",
                address.short()
            ),
            address: Some(address),
        }
    }

    pub fn rejected() -> Self {
        Self::without_address(
            Phase::Rejected,
            "Connection Rejected",
            WalletError::UserRejected.to_string(),
        )
    }

    pub fn failed(error: &WalletError) -> Self {
        Self::without_address(Phase::Failed, "Connection Failed", error.to_string())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn address(&self) -> Option<&WalletAddress> {
        self.address.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.phase == Phase::Connected
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ProviderError;

    #[test]
    fn test_default_is_idle() {
        let status = ConnectionStatus::default();
        assert_eq!(status.phase(), Phase::Idle);
        assert!(status.address().is_none());
        assert!(!status.is_connected());
    }

    #[test]
    fn test_connected_keeps_full_address() {
        let address = WalletAddress::new("klv1qqqqqqqqqqqqqpgqxwklx9kjsa0srdvq0zu7cw9f5uvg8kkw");
        let status = ConnectionStatus::connected(address.clone());
        assert_eq!(status.phase(), Phase::Connected);
        assert_eq!(status.address(), Some(&address));
        assert!(status.message().contains("klv1...8kkw"));
    }

    #[test]
    fn test_rejected_has_no_address() {
        let status = ConnectionStatus::rejected();
        assert_eq!(status.phase(), Phase::Rejected);
        assert!(status.address().is_none());
    }

    #[test]
    fn test_failed_carries_error_message() {
        let status = ConnectionStatus::failed(&ProviderError::new("boom").into());
        assert_eq!(status.phase(), Phase::Failed);
        assert!(status.message().contains("boom"));
    }

    #[test]
    fn test_phase_classification() {
        assert!(Phase::Detecting.is_in_progress());
        assert!(Phase::Requesting.is_in_progress());
        assert!(!Phase::Idle.is_in_progress());
        assert!(Phase::Connected.is_terminal());
        assert!(Phase::Rejected.is_terminal());
        assert!(Phase::Failed.is_terminal());
        assert!(!Phase::Requesting.is_terminal());
    }

    #[test]
    fn test_tones() {
        assert_eq!(Phase::Idle.tone(), Tone::Info);
        assert_eq!(Phase::Requesting.tone(), Tone::Info);
        assert_eq!(Phase::Connected.tone(), Tone::Success);
        assert_eq!(Phase::Rejected.tone(), Tone::Error);
        assert_eq!(Phase::Failed.tone(), Tone::Error);
    }

    #[test]
    fn test_account_deserializes_from_provider_shape() {
        let accounts: Vec<Account> =
            serde_json::from_str(r#"[{"address":"klv1abc...xyz","balance":0}]"#).unwrap();
        assert_eq!(accounts[0].address.as_str(), "klv1abc...xyz");
    }
}
