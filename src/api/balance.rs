// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token balance endpoint.

use axum::{extract::State, http::HeaderMap, Json};

use crate::{
    models::TokenRequest,
    pipeline::{PipelineError, PipelineOutcome},
    state::AppState,
    tx::OperationKind,
};

/// Get the token balance for a public address.
///
/// The balance comes straight from the construction service; the signing
/// service is never involved in a read.
#[utoipa::path(
    post,
    path = "/api/v0/getTokenBalance",
    tag = "Tokens",
    request_body = TokenRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Numeric token balance"),
        (status = 403, description = "Missing or invalid credential"),
        (status = 500, description = "Malformed request or construction failure"),
        (status = 502, description = "Authorization header could not be parsed")
    )
)]
pub async fn get_token_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TokenRequest>,
) -> Result<PipelineOutcome, PipelineError> {
    state
        .pipeline
        .execute(&headers, OperationKind::BalanceQuery, &request)
        .await
}
