//! Header bar with the brand and the wallet connect button.
//!
//! The button is the only trigger for the connection handshake. It is
//! disabled while detection or the account request is running and once a
//! wallet is connected.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::{ConnectionStatus, Phase, Tone};

stylance::import_crate_style!(css, "src/components/header/header.module.css");

fn button_class(phase: Phase) -> &'static str {
    match phase.tone() {
        Tone::Success => css::buttonConnected,
        Tone::Error => css::buttonError,
        Tone::Info => css::button,
    }
}

fn button_content(status: &ConnectionStatus) -> AnyView {
    match status.phase() {
        Phase::Detecting | Phase::Requesting => view! {
            <span class=css::spinner><Icon icon=ic::SPINNER /></span>
        }
        .into_any(),
        Phase::Connected => {
            let short = status.address().map(|a| a.short()).unwrap_or_default();
            view! {
                <Icon icon=ic::CONNECTED />
                <span>{short}</span>
            }
            .into_any()
        }
        Phase::Idle | Phase::Rejected | Phase::Failed => view! {
            <Icon icon=ic::WALLET />
            <span>"Connect Wallet"</span>
        }
        .into_any(),
    }
}

/// Top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let phase = Memo::new(move |_| ctx.wallet.with(|w| w.phase()));
    let disabled = move || {
        let phase = phase.get();
        phase.is_in_progress() || phase == Phase::Connected
    };
    let on_connect = move |_: leptos::ev::MouseEvent| ctx.connect();

    view! {
        <header class=css::bar>
            <div class=css::brand>
                <span class=css::logo><Icon icon=ic::LOGO /></span>
                <span class=css::name>{APP_NAME}</span>
            </div>

            <button
                class=move || button_class(phase.get())
                on:click=on_connect
                disabled=disabled
            >
                {move || ctx.wallet.with(button_content)}
            </button>
        </header>
    }
}
