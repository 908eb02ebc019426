//! Root application module.
//!
//! Contains the main App component, AppContext definition and the
//! boot-time wallet session restore.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{Header, StatusCard};
use crate::config::{APP_TAGLINE, CONNECT_ENDPOINT, DetectionConfig};
use crate::core::{BrowserTimer, HttpNotifier, KleverProvider, WalletController, session};
use crate::models::ConnectionStatus;

stylance::import_crate_style!(css, "src/app.module.css");

/// Controller wired to the browser extension, timers and backend.
pub type AppWallet = WalletController<KleverProvider, BrowserTimer, HttpNotifier>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`. The controller itself lives in
/// local (non-`Send`) storage; components only see the status signal and
/// the trigger methods below.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current wallet connection status, mirrored from the controller.
    pub wallet: RwSignal<ConnectionStatus>,

    controller: StoredValue<Rc<AppWallet>, LocalStorage>,
}

impl AppContext {
    /// Creates the context and subscribes the status signal to the controller.
    pub fn new() -> Self {
        let controller = Rc::new(WalletController::new(
            KleverProvider,
            BrowserTimer,
            HttpNotifier::new(CONNECT_ENDPOINT),
            DetectionConfig::default(),
        ));

        let wallet = RwSignal::new(controller.status());
        controller.subscribe(move |status| {
            if status.is_connected() {
                session::save_session();
            }
            let _ = wallet.try_set(status.clone());
        });

        Self {
            wallet,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Start the connection handshake on a local task.
    pub fn connect(&self) {
        let Some(controller) = self.controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            controller.connect().await;
        });
    }

    /// Stop a running detection poll (used when the app is torn down).
    pub fn cancel(&self) {
        let _ = self.controller.try_with_value(|c| c.cancel());
    }

    /// Drop the current connection and the stored session flag.
    pub fn disconnect(&self) {
        session::clear_session();
        let _ = self.controller.try_with_value(|c| c.disconnect());
    }

    /// Reconnect silently if the provider still holds an authorized session.
    pub fn restore_session(&self) {
        let restored = self
            .controller
            .try_with_value(|c| c.restore())
            .unwrap_or(false);

        if !restored {
            log::info!("Wallet session expired");
            session::clear_session();
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Restore a previous session once the extension had time to inject itself.
fn boot(ctx: AppContext) {
    if !session::has_session() {
        return;
    }

    spawn_local(async move {
        gloo_timers::future::sleep(DetectionConfig::default().initial_delay()).await;
        ctx.restore_session();
    });
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Restores a previous wallet session
/// - Renders the header and the connection status card
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    boot(ctx);

    on_cleanup(move || ctx.cancel());

    view! {
        <div class=css::page>
            <Header />
            <main class=css::main>
                <StatusCard />
                <p class=css::tagline>{APP_TAGLINE}</p>
            </main>
        </div>
    }
}
