// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token-operation endpoints for transfer, approve and swap.
//!
//! Each handler runs one pipeline execution; the signing service's
//! response is passed back to the caller verbatim.

use axum::{extract::State, http::HeaderMap, Json};

use crate::{
    models::TokenRequest,
    pipeline::{PipelineError, PipelineOutcome},
    state::AppState,
    tx::OperationKind,
};

/// Construct and relay a token transfer.
#[utoipa::path(
    post,
    path = "/api/v0/transferToken",
    tag = "Tokens",
    request_body = TokenRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Transaction relayed; signing service response passed through"),
        (status = 403, description = "Missing or invalid credential"),
        (status = 500, description = "Malformed request, construction failure, or wallet endpoint unreachable"),
        (status = 502, description = "Authorization header could not be parsed")
    )
)]
pub async fn transfer_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TokenRequest>,
) -> Result<PipelineOutcome, PipelineError> {
    state
        .pipeline
        .execute(&headers, OperationKind::Transfer, &request)
        .await
}

/// Construct and relay an approval for the configured manager contract.
///
/// The spender is the process-wide manager address; it cannot be set by
/// the caller.
#[utoipa::path(
    post,
    path = "/api/v0/approve",
    tag = "Tokens",
    request_body = TokenRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Transaction relayed; signing service response passed through"),
        (status = 403, description = "Missing or invalid credential"),
        (status = 500, description = "Malformed request, construction failure, or wallet endpoint unreachable"),
        (status = 502, description = "Authorization header could not be parsed")
    )
)]
pub async fn approve(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TokenRequest>,
) -> Result<PipelineOutcome, PipelineError> {
    state
        .pipeline
        .execute(&headers, OperationKind::Approve, &request)
        .await
}

/// Construct and relay a token swap for wrapped ether.
#[utoipa::path(
    post,
    path = "/api/v0/swap",
    tag = "Tokens",
    request_body = TokenRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Transaction relayed; signing service response passed through"),
        (status = 403, description = "Missing or invalid credential"),
        (status = 500, description = "Malformed request, construction failure, or wallet endpoint unreachable"),
        (status = 502, description = "Authorization header could not be parsed")
    )
)]
pub async fn swap(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TokenRequest>,
) -> Result<PipelineOutcome, PipelineError> {
    state
        .pipeline
        .execute(&headers, OperationKind::Swap, &request)
        .await
}
