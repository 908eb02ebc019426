//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use std::time::Duration;

use crate::core::error::ConfigError;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "GlobalGive.io";

/// Tagline displayed under the status card.
pub const APP_TAGLINE: &str =
    "Explore and fund projects audited in real time on KleverChain.";

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Name of the global object injected by the Klever Wallet extension.
pub const KLEVER_GLOBAL: &str = "kleverWeb";

/// localStorage key for wallet session persistence.
pub const WALLET_SESSION_KEY: &str = "wallet_session";

/// Backend endpoint notified after a successful connection.
pub const CONNECT_ENDPOINT: &str = "/api/user/connect";

/// Provider detection defaults.
pub mod detection {
    /// Number of presence checks before giving up.
    pub const MAX_RETRIES: u32 = 15;
    /// Delay between two presence checks (milliseconds).
    pub const RETRY_DELAY_MS: u64 = 250;
    /// Delay before the first check, leaving time for the extension to inject itself.
    pub const INITIAL_DELAY_MS: u64 = 1000;
}

/// Address truncation for display.
pub mod address_display {
    /// Leading characters kept.
    pub const PREFIX_LEN: usize = 4;
    /// Trailing characters kept.
    pub const SUFFIX_LEN: usize = 4;
}

/// Timing of the provider detection poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionConfig {
    max_retries: u32,
    retry_delay: Duration,
    initial_delay: Duration,
}

impl DetectionConfig {
    /// Build a config, rejecting a zero retry budget.
    pub fn new(
        max_retries: u32,
        retry_delay: Duration,
        initial_delay: Duration,
    ) -> Result<Self, ConfigError> {
        if max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        Ok(Self {
            max_retries,
            retry_delay,
            initial_delay,
        })
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Upper bound on the time spent polling, excluding provider calls.
    pub fn detection_budget(&self) -> Duration {
        self.initial_delay + self.retry_delay * (self.max_retries - 1)
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_retries: detection::MAX_RETRIES,
            retry_delay: Duration::from_millis(detection::RETRY_DELAY_MS),
            initial_delay: Duration::from_millis(detection::INITIAL_DELAY_MS),
        }
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detection_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.max_retries(), 15);
        assert_eq!(config.retry_delay(), Duration::from_millis(250));
        assert_eq!(config.initial_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_zero_retries_rejected() {
        let result = DetectionConfig::new(0, Duration::from_millis(10), Duration::ZERO);
        assert_eq!(result, Err(ConfigError::ZeroRetries));
    }

    #[test]
    fn test_detection_budget() {
        let config =
            DetectionConfig::new(3, Duration::from_millis(10), Duration::ZERO).unwrap();
        assert_eq!(config.detection_budget(), Duration::from_millis(20));

        let single = DetectionConfig::new(1, Duration::from_millis(10), Duration::from_millis(5))
            .unwrap();
        assert_eq!(single.detection_budget(), Duration::from_millis(5));
    }
}
