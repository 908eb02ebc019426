//! Connection status card.
//!
//! Renders the controller's current [`ConnectionStatus`](crate::models::ConnectionStatus):
//! the tone picks icon and accent color, and the full (untruncated) address
//! is shown once connected, together with a disconnect action.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Tone;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status card showing title, message and connected address.
#[component]
pub fn StatusCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let tone = Memo::new(move |_| ctx.wallet.with(|w| w.phase().tone()));
    let title = Signal::derive(move || ctx.wallet.with(|w| w.title().to_string()));
    let message = Signal::derive(move || ctx.wallet.with(|w| w.message().to_string()));
    let address = Signal::derive(move || ctx.wallet.with(|w| w.address().cloned()));

    let card_class = move || match tone.get() {
        Tone::Info => css::cardInfo,
        Tone::Success => css::cardSuccess,
        Tone::Error => css::cardError,
    };
    let on_disconnect = move |_: leptos::ev::MouseEvent| ctx.disconnect();

    view! {
        <section class=card_class>
            <span class=css::icon>
                {move || match tone.get() {
                    Tone::Info => view! { <Icon icon=ic::INFO /> }.into_any(),
                    Tone::Success => view! { <Icon icon=ic::CONNECTED /> }.into_any(),
                    Tone::Error => view! { <Icon icon=ic::WARNING /> }.into_any(),
                }}
            </span>

            <div class=css::body>
                <h2 class=css::title>{title}</h2>
                <p class=css::message>{message}</p>

                {move || address.get().map(|address| view! {
                    <p class=css::address>"Address: " {address.to_string()}</p>
                    <button class=css::disconnect on:click=on_disconnect>
                        <Icon icon=ic::DISCONNECT />
                        <span>"Disconnect"</span>
                    </button>
                })}
            </div>
        </section>
    }
}
