// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth service client.
//!
//! The auth service issues opaque bearer credentials and answers validity
//! checks. The gateway consumes it through the [`CredentialVerifier`]
//! capability; verification internals (token format, expiry, storage) stay
//! on the auth service side.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum IssuanceError {
    #[error("credential request failed: {0}")]
    Request(String),

    #[error("auth service returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("auth service response was invalid: {0}")]
    InvalidResponse(String),
}

/// Capability interface for credential issuance and verification.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Issue a fresh credential for a client identity.
    async fn issue(&self, client_id: &str) -> Result<String, IssuanceError>;

    /// Check whether a presented credential is currently valid.
    ///
    /// Side-effect free from the gateway's perspective. Anything other than
    /// a definite "valid" answer counts as invalid.
    async fn verify(&self, credential: &str) -> bool;
}

/// HTTP-backed auth service client.
#[derive(Debug, Clone)]
pub struct AuthServiceClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    valid: bool,
}

impl AuthServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, IssuanceError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IssuanceError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CredentialVerifier for AuthServiceClient {
    async fn issue(&self, client_id: &str) -> Result<String, IssuanceError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/token/{client_id}")))
            .send()
            .await
            .map_err(|e| IssuanceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IssuanceError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let credential: String = response
            .json()
            .await
            .map_err(|e| IssuanceError::InvalidResponse(e.to_string()))?;

        if credential.is_empty() {
            return Err(IssuanceError::InvalidResponse(
                "auth service issued an empty credential".to_string(),
            ));
        }

        Ok(credential)
    }

    async fn verify(&self, credential: &str) -> bool {
        let response = self
            .http
            .post(self.endpoint("/verify"))
            .json(&json!({ "token": credential }))
            .send()
            .await;

        // A credential is valid only on a definite yes; transport failures
        // and malformed answers deny access rather than letting an
        // unverified call through.
        match response {
            Ok(response) if response.status().is_success() => {
                match response.json::<VerifyResponse>().await {
                    Ok(body) => body.valid,
                    Err(e) => {
                        warn!("auth service verify response was invalid: {e}");
                        false
                    }
                }
            }
            Ok(response) => {
                warn!(status = %response.status(), "auth service rejected verify call");
                false
            }
            Err(e) => {
                warn!("auth service unreachable during verify: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = AuthServiceClient::new("http://auth.local/").unwrap();
        assert_eq!(
            client.endpoint("/token/client-1"),
            "http://auth.local/token/client-1"
        );
    }

    #[test]
    fn verify_response_parses_validity_flag() {
        let body: VerifyResponse = serde_json::from_str(r#"{"valid":true}"#).unwrap();
        assert!(body.valid);

        let body: VerifyResponse = serde_json::from_str(r#"{"valid":false}"#).unwrap();
        assert!(!body.valid);
    }
}
