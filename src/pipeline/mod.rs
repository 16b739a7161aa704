// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Pipeline orchestrator.
//!
//! One pipeline run services one request, stepping through
//! authenticate → build → construct → relay and stopping at the first
//! failure. Balance queries skip the relay step and finish with the value
//! from the construction service. No step is ever retried, and nothing is
//! sent to the signing service unless every prior step succeeded.

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::debug;

use crate::auth::{bearer_credential, AuthError, CredentialVerifier};
use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::relay::{RelayDispatcher, RelayError, RelayResult};
use crate::tx::{
    build_parameters, params::sender_address, BuildError, ConstructionError, OperationKind,
    TransactionIntent, TxConstructor,
};

/// Terminal result of a successful pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The signing service's verbatim response, any status.
    Relayed(RelayResult),
    /// Balance value for a query; the relay was never involved.
    Balance(Value),
}

/// Failure reasons, each carrying its externally-visible mapping.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No AuthToken Supplied!")]
    NoCredentialSupplied,

    #[error("Invalid AuthToken!")]
    InvalidCredential,

    #[error("Error Parsing Header")]
    HeaderParse(String),

    #[error(transparent)]
    MalformedRequest(#[from] BuildError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("Wallet endpoint unreachable")]
    RelayUnreachable(String),
}

impl From<AuthError> for PipelineError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NoCredentialSupplied => PipelineError::NoCredentialSupplied,
            AuthError::HeaderParse(details) => PipelineError::HeaderParse(details),
        }
    }
}

impl From<RelayError> for PipelineError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Unreachable(details) => PipelineError::RelayUnreachable(details),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::NoCredentialSupplied | PipelineError::InvalidCredential => {
                ApiError::forbidden(err.to_string())
            }
            PipelineError::HeaderParse(ref details) => {
                ApiError::bad_gateway("Error Parsing Header").with_details(details.clone())
            }
            PipelineError::MalformedRequest(_) | PipelineError::Construction(_) => {
                ApiError::internal(err.to_string())
            }
            PipelineError::RelayUnreachable(ref details) => {
                ApiError::internal("Wallet endpoint unreachable").with_details(details.clone())
            }
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

impl IntoResponse for PipelineOutcome {
    fn into_response(self) -> Response {
        match self {
            // The signing service's status and body are surfaced verbatim,
            // including failure statuses; the gateway does not reinterpret
            // them.
            PipelineOutcome::Relayed(result) => {
                let status = axum::http::StatusCode::from_u16(result.status)
                    .unwrap_or(axum::http::StatusCode::BAD_GATEWAY);
                (status, result.body).into_response()
            }
            PipelineOutcome::Balance(value) => axum::Json(value).into_response(),
        }
    }
}

/// The authenticated construction-and-relay pipeline.
///
/// Holds the immutable configuration and the three collaborator
/// capabilities; cheap to share across concurrent requests.
pub struct Pipeline {
    config: Arc<GatewayConfig>,
    verifier: Arc<dyn CredentialVerifier>,
    constructor: Arc<dyn TxConstructor>,
    relay: Arc<dyn RelayDispatcher>,
}

impl Pipeline {
    pub fn new(
        config: Arc<GatewayConfig>,
        verifier: Arc<dyn CredentialVerifier>,
        constructor: Arc<dyn TxConstructor>,
        relay: Arc<dyn RelayDispatcher>,
    ) -> Self {
        Self {
            config,
            verifier,
            constructor,
            relay,
        }
    }

    /// Run one operation through the pipeline.
    ///
    /// Steps, in order, stopping at the first failure:
    /// 1. extract the bearer credential from the headers
    /// 2. verify it against the auth service
    /// 3. build the parameter sequence and assemble the intent
    /// 4. obtain the unsigned transaction (or balance) from the
    ///    construction service
    /// 5. relay the transaction to the signing service
    pub async fn execute(
        &self,
        headers: &HeaderMap,
        kind: OperationKind,
        request: &crate::models::TokenRequest,
    ) -> Result<PipelineOutcome, PipelineError> {
        let credential = bearer_credential(headers)?;

        if !self.verifier.verify(credential).await {
            return Err(PipelineError::InvalidCredential);
        }

        let params = build_parameters(kind, request, &self.config.manager_contract_addr)?;
        let sender = sender_address(kind, request)?;
        let intent = TransactionIntent::assemble_default(sender, params)?;

        let chain_id = self.config.chain_id;
        debug!(operation = %kind, sender = %intent.from, "constructing transaction intent");

        let blob = match kind {
            OperationKind::BalanceQuery => {
                let balance = self
                    .constructor
                    .token_balance(credential, &intent, chain_id)
                    .await?;
                return Ok(PipelineOutcome::Balance(balance));
            }
            OperationKind::Transfer => {
                self.constructor
                    .build_transfer_tx(credential, &intent, chain_id)
                    .await?
            }
            OperationKind::Approve => {
                self.constructor
                    .build_approve_tx(credential, &intent, chain_id)
                    .await?
            }
            OperationKind::Swap => {
                self.constructor
                    .build_swap_tx(credential, &intent, chain_id)
                    .await?
            }
        };

        let result = self.relay.relay(&blob).await?;
        debug!(operation = %kind, status = result.status, "relay completed");
        Ok(PipelineOutcome::Relayed(result))
    }
}
