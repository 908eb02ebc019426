//! Klever Wallet provider binding using web-sys.
//!
//! Talks to the `window.kleverWeb` object injected by the Klever Wallet
//! extension through the Reflect API. The global is looked up on every
//! call, since the extension may inject it after the page has loaded.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::KLEVER_GLOBAL;
use crate::core::error::ProviderError;
use crate::core::provider::WalletProvider;
use crate::models::{Account, WalletAddress};
use crate::utils::dom;

/// Get the `window.kleverWeb` object, if injected.
fn klever_web() -> Option<Object> {
    let window = dom::window()?;
    Reflect::get(&window, &KLEVER_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
}

/// Look up a callable property on the provider object.
fn method(target: &Object, name: &str) -> Option<Function> {
    Reflect::get(target, &name.into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Turn a thrown JS value into a readable message.
fn js_error(value: JsValue) -> ProviderError {
    let message = Reflect::get(&value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ProviderError(message)
}

/// Call a provider method and await its result, promise or not.
async fn call_async(target: &Object, function: &Function) -> Result<JsValue, ProviderError> {
    let result = function.call0(target).map_err(js_error)?;
    JsFuture::from(Promise::resolve(&result))
        .await
        .map_err(js_error)
}

fn unavailable() -> ProviderError {
    ProviderError::new("Klever Wallet provider is no longer available")
}

/// Provider backed by the Klever Wallet browser extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct KleverProvider;

impl WalletProvider for KleverProvider {
    fn is_present(&self) -> bool {
        klever_web()
            .and_then(|provider| method(&provider, "getAccounts"))
            .is_some()
    }

    async fn initialize(&self) -> Result<(), ProviderError> {
        let provider = klever_web().ok_or_else(unavailable)?;
        if let Some(initialize) = method(&provider, "initialize") {
            call_async(&provider, &initialize).await?;
        }
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, ProviderError> {
        let provider = klever_web().ok_or_else(unavailable)?;
        let get_accounts = method(&provider, "getAccounts").ok_or_else(unavailable)?;

        let accounts = call_async(&provider, &get_accounts).await?;
        if accounts.is_null() || accounts.is_undefined() {
            return Ok(Vec::new());
        }

        serde_wasm_bindgen::from_value(accounts)
            .map_err(|e| ProviderError(format!("unexpected getAccounts response: {}", e)))
    }

    fn current_address(&self) -> Option<WalletAddress> {
        let provider = klever_web()?;
        let get_address = method(&provider, "getWalletAddress")?;
        get_address
            .call0(&provider)
            .ok()?
            .as_string()
            .filter(|address| !address.is_empty())
            .map(WalletAddress::new)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_error_message_from_js_error() {
        let err = js_error(js_sys::Error::new("boom").into());
        assert_eq!(err.0, "boom");
    }

    #[wasm_bindgen_test]
    fn test_error_message_from_string() {
        let err = js_error(JsValue::from_str("User denied"));
        assert_eq!(err.0, "User denied");
    }

    #[wasm_bindgen_test]
    fn test_absent_without_global() {
        assert!(!KleverProvider.is_present());
        assert!(KleverProvider.current_address().is_none());
    }
}
