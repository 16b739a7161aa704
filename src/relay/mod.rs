// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relay dispatcher.
//!
//! Forwards a constructed unsigned transaction to the wallet signing
//! service and carries its response back verbatim. The dispatcher never
//! retries, never inspects the response body, and treats a non-2xx
//! downstream status as a successful relay; only transport-level failures
//! are errors here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Verbatim downstream response from the signing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResult {
    /// HTTP status returned by the signing service.
    pub status: u16,
    /// Raw response body, uninspected.
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The signing service could not be reached at the transport level.
    #[error("wallet endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Capability interface for relaying unsigned transactions.
#[async_trait]
pub trait RelayDispatcher: Send + Sync {
    async fn relay(&self, blob: &str) -> Result<RelayResult, RelayError>;
}

/// HTTP-backed relay dispatcher posting to the configured wallet endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelayDispatcher {
    endpoint: String,
    http: Client,
}

impl HttpRelayDispatcher {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RelayError::Unreachable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }
}

#[async_trait]
impl RelayDispatcher for HttpRelayDispatcher {
    async fn relay(&self, blob: &str) -> Result<RelayResult, RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "tx": blob }))
            .send()
            .await
            .map_err(|e| RelayError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Unreachable(e.to_string()))?
            .to_vec();

        Ok(RelayResult { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Bytes,
        http::StatusCode,
        routing::post,
        Router,
    };
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn spawn_stub(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn request_body_is_exactly_the_tx_wrapper() {
        let (captured_tx, mut captured_rx) = mpsc::unbounded_channel::<Vec<u8>>();
        let app = Router::new().route(
            "/",
            post(move |body: Bytes| {
                let captured_tx = captured_tx.clone();
                async move {
                    captured_tx.send(body.to_vec()).unwrap();
                    "ok"
                }
            }),
        );
        let endpoint = spawn_stub(app).await;

        let dispatcher = HttpRelayDispatcher::new(&endpoint).unwrap();
        let result = dispatcher.relay("0xf86c0a85").await.unwrap();
        assert_eq!(result.status, 200);

        let sent = captured_rx.recv().await.unwrap();
        assert_eq!(sent, br#"{"tx":"0xf86c0a85"}"#);
    }

    #[tokio::test]
    async fn non_2xx_downstream_status_is_a_successful_relay() {
        let app = Router::new().route(
            "/",
            post(|| async { (StatusCode::BAD_REQUEST, "insufficient funds") }),
        );
        let endpoint = spawn_stub(app).await;

        let dispatcher = HttpRelayDispatcher::new(&endpoint).unwrap();
        let result = dispatcher.relay("0xdead").await.unwrap();
        assert_eq!(result.status, 400);
        assert_eq!(result.body, b"insufficient funds");
    }

    #[tokio::test]
    async fn connection_failure_is_unreachable() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dispatcher = HttpRelayDispatcher::new(format!("http://{addr}/")).unwrap();
        let err = dispatcher.relay("0xdead").await.unwrap_err();
        assert!(matches!(err, RelayError::Unreachable(_)));
    }
}
