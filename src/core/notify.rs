//! Backend notification after a successful wallet connection.
//!
//! Fire-and-forget: the request runs on its own local task and its outcome
//! is only logged, never fed back into the connection state.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::core::error::NotifyError;
use crate::core::provider::ConnectNotifier;
use crate::models::WalletAddress;

#[derive(Serialize)]
struct ConnectRequest<'a> {
    address: &'a WalletAddress,
}

#[derive(Deserialize)]
struct ConnectResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Notifier POSTing `{"address": ...}` to a backend endpoint.
#[derive(Clone, Debug)]
pub struct HttpNotifier {
    endpoint: String,
}

impl HttpNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn post(endpoint: &str, address: &WalletAddress) -> Result<Option<String>, NotifyError> {
        let response = Request::post(endpoint)
            .json(&ConnectRequest { address })
            .map_err(|e| NotifyError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(NotifyError::Http(response.status()));
        }

        // The body is informational only; an unreadable one is not a failure.
        Ok(response
            .json::<ConnectResponse>()
            .await
            .ok()
            .and_then(|body| body.message))
    }
}

impl ConnectNotifier for HttpNotifier {
    fn notify_connected(&self, address: &WalletAddress) {
        let endpoint = self.endpoint.clone();
        let address = address.clone();
        spawn_local(async move {
            match Self::post(&endpoint, &address).await {
                Ok(message) => log::info!(
                    "Wallet address sent to server{}",
                    message.map(|m| format!(": {}", m)).unwrap_or_default()
                ),
                Err(e) => log::error!("Failed to send wallet address to server: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let address = WalletAddress::new("klv1abc...xyz");
        let body = serde_json::to_string(&ConnectRequest { address: &address }).unwrap();
        assert_eq!(body, r#"{"address":"klv1abc...xyz"}"#);
    }

    #[test]
    fn test_response_message_optional() {
        let body: ConnectResponse = serde_json::from_str(
            r#"{"status":"success","message":"Address received.","address":"klv1"}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Address received."));

        let empty: ConnectResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }
}
