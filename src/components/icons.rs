//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleCheck as Connected, LuHeartHandshake as Logo, LuInfo as Info,
        LuLoaderCircle as Spinner, LuLogOut as Disconnect, LuTriangleAlert as Warning,
        LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsBoxArrowRight as Disconnect, BsCheckCircleFill as Connected,
        BsExclamationTriangleFill as Warning, BsHeartFill as Logo, BsInfoCircleFill as Info,
        BsWallet2 as Wallet,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(LOGO, Logo);
themed_icon!(WALLET, Wallet);
themed_icon!(CONNECTED, Connected);
themed_icon!(SPINNER, Spinner);
themed_icon!(INFO, Info);
themed_icon!(WARNING, Warning);
themed_icon!(DISCONNECT, Disconnect);
