//! Capabilities the controller needs from its environment.
//!
//! The controller never reaches into browser globals itself; the wallet
//! provider, the timer it polls with and the backend notifier are all
//! injected at construction so tests can swap them for fakes.

use std::time::Duration;

use crate::core::error::ProviderError;
use crate::models::{Account, WalletAddress};

/// Injected wallet provider (browser extension or a fake).
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Whether the provider handle exists and exposes account listing.
    fn is_present(&self) -> bool;

    /// Optional pre-step some provider versions need before accounts can be read.
    async fn initialize(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Ask the provider for the user's accounts.
    ///
    /// May wait indefinitely on the provider's own approval prompt.
    async fn list_accounts(&self) -> Result<Vec<Account>, ProviderError>;

    /// Address of an already-authorized session, if the provider exposes one.
    fn current_address(&self) -> Option<WalletAddress> {
        None
    }
}

/// Suspension point used between presence checks.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by the browser's `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Best-effort side channel fired after a successful connection.
///
/// Implementations must not block and must swallow their own failures.
pub trait ConnectNotifier {
    fn notify_connected(&self, address: &WalletAddress);
}
