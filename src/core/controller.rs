//! Wallet connection controller.
//!
//! Drives the connection handshake: wait for the provider to be injected,
//! ask it for accounts, and publish each step as a [`ConnectionStatus`].
//!
//! # Flow
//!
//! ```text
//! Idle -> Detecting -> Requesting -> Connected | Rejected | Failed
//!            |
//!            +-> Failed (provider never appeared)
//! ```
//!
//! Everything runs on the UI thread. The controller is the only writer of
//! the current status; the view layer reads it through [`subscribe`].
//!
//! [`subscribe`]: WalletController::subscribe

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::DetectionConfig;
use crate::core::error::WalletError;
use crate::core::provider::{ConnectNotifier, Timer, WalletProvider};
use crate::models::{ConnectionStatus, Phase, WalletAddress};

/// Cooperative cancellation flag, checked between presence checks.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

type Listener = Box<dyn Fn(&ConnectionStatus)>;

/// Orchestrates provider detection and account authorization.
pub struct WalletController<P, T, N> {
    provider: P,
    timer: T,
    notifier: N,
    config: DetectionConfig,
    status: RefCell<ConnectionStatus>,
    listeners: RefCell<Vec<Listener>>,
    active: RefCell<Option<CancelToken>>,
}

impl<P, T, N> WalletController<P, T, N>
where
    P: WalletProvider,
    T: Timer,
    N: ConnectNotifier,
{
    pub fn new(provider: P, timer: T, notifier: N, config: DetectionConfig) -> Self {
        Self {
            provider,
            timer,
            notifier,
            config,
            status: RefCell::new(ConnectionStatus::idle()),
            listeners: RefCell::new(Vec::new()),
            active: RefCell::new(None),
        }
    }

    /// Latest status. Never blocks.
    pub fn status(&self) -> ConnectionStatus {
        self.status.borrow().clone()
    }

    /// Register a listener for every subsequent status change.
    ///
    /// Listeners may read [`status`](Self::status) but must not subscribe
    /// from inside the callback.
    pub fn subscribe(&self, listener: impl Fn(&ConnectionStatus) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Run the connection handshake.
    ///
    /// No-op while a handshake is running or once connected. Otherwise ends
    /// in exactly one of `Connected`, `Rejected` or `Failed`, or back in
    /// `Idle` if [`cancel`](Self::cancel) interrupted detection.
    pub async fn connect(&self) {
        let phase = self.status.borrow().phase();
        if phase.is_in_progress() || phase == Phase::Connected {
            log::debug!("connect ignored while {:?}", phase);
            return;
        }

        let token = CancelToken::new();
        self.active.replace(Some(token.clone()));

        match self.handshake(&token).await {
            Ok(address) => {
                self.transition(ConnectionStatus::connected(address.clone()));
                self.notifier.notify_connected(&address);
            }
            Err(WalletError::Cancelled) => {
                log::info!("Wallet connection cancelled");
                self.transition(ConnectionStatus::idle());
            }
            Err(WalletError::UserRejected) => {
                self.transition(ConnectionStatus::rejected());
            }
            Err(e) => {
                log::error!("Wallet connection failed: {}", e);
                self.transition(ConnectionStatus::failed(&e));
            }
        }

        self.active.replace(None);
    }

    /// Interrupt the detection poll of the running handshake, if any.
    pub fn cancel(&self) {
        if let Some(token) = self.active.borrow().as_ref() {
            token.cancel();
        }
    }

    /// Pick up an already-authorized session without prompting the user.
    ///
    /// Only acts from `Idle`. Returns `true` if a session was restored.
    pub fn restore(&self) -> bool {
        if self.status.borrow().phase() != Phase::Idle || !self.provider.is_present() {
            return false;
        }

        match self.provider.current_address() {
            Some(address) => {
                log::info!("Restored wallet session for {}", address.short());
                self.transition(ConnectionStatus::connected(address));
                true
            }
            None => false,
        }
    }

    /// Forget a finished connection attempt and return to `Idle`.
    pub fn disconnect(&self) {
        if self.status.borrow().phase().is_terminal() {
            self.transition(ConnectionStatus::idle());
        }
    }

    async fn handshake(&self, token: &CancelToken) -> Result<WalletAddress, WalletError> {
        self.transition(ConnectionStatus::detecting());
        self.detect(token).await?;

        self.transition(ConnectionStatus::requesting());
        self.provider.initialize().await?;
        let accounts = self.provider.list_accounts().await?;

        accounts
            .into_iter()
            .next()
            .map(|account| account.address)
            .ok_or(WalletError::UserRejected)
    }

    /// Poll until the provider shows up or the retry budget runs out.
    async fn detect(&self, token: &CancelToken) -> Result<(), WalletError> {
        log::debug!(
            "Polling for Klever extension (budget {:?})",
            self.config.detection_budget()
        );

        let initial_delay = self.config.initial_delay();
        if !initial_delay.is_zero() {
            self.timer.sleep(initial_delay).await;
        }

        let max_retries = self.config.max_retries();
        for attempt in 1..=max_retries {
            if token.is_cancelled() {
                return Err(WalletError::Cancelled);
            }
            if self.provider.is_present() {
                log::info!("Klever extension detected on attempt {}", attempt);
                return Ok(());
            }
            if attempt < max_retries {
                self.timer.sleep(self.config.retry_delay()).await;
            }
        }

        log::warn!("Klever extension not detected after {} attempts", max_retries);
        Err(WalletError::ProviderNotDetected)
    }

    fn transition(&self, next: ConnectionStatus) {
        self.status.replace(next.clone());
        for listener in self.listeners.borrow().iter() {
            listener(&next);
        }
    }
}
