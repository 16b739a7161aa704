// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Construction service client.
//!
//! The construction service encodes a transaction intent into an unsigned
//! transaction for the target chain (or answers balance reads). This module
//! consumes it through the narrow [`TxConstructor`] capability so the
//! pipeline can be tested against deterministic fakes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::intent::TransactionIntent;

/// Paths of the construction-service entrypoints, per operation.
const TRANSFER_PATH: &str = "/tx/transfer";
const APPROVE_PATH: &str = "/tx/approve";
const SWAP_PATH: &str = "/tx/swap";
const BALANCE_PATH: &str = "/tx/balance";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    #[error("construction request failed: {0}")]
    Request(String),

    #[error("construction service returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("construction response was invalid: {0}")]
    InvalidResponse(String),
}

/// Capability interface for unsigned-transaction construction.
///
/// One entrypoint per operation kind; `token_balance` is the read path that
/// bypasses the relay entirely.
#[async_trait]
pub trait TxConstructor: Send + Sync {
    async fn build_transfer_tx(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError>;

    async fn build_approve_tx(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError>;

    async fn build_swap_tx(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError>;

    async fn token_balance(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<Value, ConstructionError>;
}

/// HTTP-backed construction service client.
#[derive(Debug, Clone)]
pub struct ConstructionServiceClient {
    base_url: String,
    http: Client,
}

impl ConstructionServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConstructionError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConstructionError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    async fn post_construction(
        &self,
        path: &str,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<Value, ConstructionError> {
        let payload = json!({
            "txParams": intent,
            "chainId": chain_id,
        });

        let response = self
            .http
            .post(format!("{}{}", self.base_url.trim_end_matches('/'), path))
            .header("Authorization", format!("Bearer {credential}"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ConstructionError::Request(format!("POST {path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ConstructionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ConstructionError::InvalidResponse(format!("POST {path} invalid JSON: {e}")))
    }

    async fn unsigned_tx(
        &self,
        path: &str,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError> {
        let response = self
            .post_construction(path, credential, intent, chain_id)
            .await?;
        extract_blob(&response)
    }
}

#[async_trait]
impl TxConstructor for ConstructionServiceClient {
    async fn build_transfer_tx(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError> {
        self.unsigned_tx(TRANSFER_PATH, credential, intent, chain_id)
            .await
    }

    async fn build_approve_tx(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError> {
        self.unsigned_tx(APPROVE_PATH, credential, intent, chain_id)
            .await
    }

    async fn build_swap_tx(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<String, ConstructionError> {
        self.unsigned_tx(SWAP_PATH, credential, intent, chain_id)
            .await
    }

    async fn token_balance(
        &self,
        credential: &str,
        intent: &TransactionIntent,
        chain_id: u64,
    ) -> Result<Value, ConstructionError> {
        let response = self
            .post_construction(BALANCE_PATH, credential, intent, chain_id)
            .await?;
        extract_balance(response)
    }
}

/// The unsigned transaction arrives as a JSON string blob; it is passed
/// through to the relay unmodified.
fn extract_blob(response: &Value) -> Result<String, ConstructionError> {
    response
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ConstructionError::InvalidResponse(
                "expected a string transaction blob".to_string(),
            )
        })
}

fn extract_balance(response: Value) -> Result<Value, ConstructionError> {
    if response.is_number() {
        Ok(response)
    } else {
        Err(ConstructionError::InvalidResponse(
            "expected a numeric balance".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_must_be_a_json_string() {
        let blob = extract_blob(&json!("0xf86c0a85...")).unwrap();
        assert_eq!(blob, "0xf86c0a85...");

        let err = extract_blob(&json!({"tx": "0xf86c"})).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidResponse(_)));
    }

    #[test]
    fn balance_must_be_numeric() {
        let balance = extract_balance(json!(421000)).unwrap();
        assert_eq!(balance, json!(421000));

        let err = extract_balance(json!("421000")).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidResponse(_)));
    }

    #[test]
    fn rejected_error_carries_downstream_status_and_message() {
        let err = ConstructionError::Rejected {
            status: 422,
            message: "unknown token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "construction service returned 422: unknown token"
        );
    }
}
