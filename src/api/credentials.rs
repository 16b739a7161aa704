// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential issuance endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

/// Issue a fresh bearer credential for a client identity.
///
/// Delegates to the auth service; the gateway neither mints nor stores
/// credentials itself.
#[utoipa::path(
    get,
    path = "/api/v0/genToken/{clientID}",
    tag = "Credentials",
    params(
        ("clientID" = String, Path, description = "Client identity to issue a credential for")
    ),
    responses(
        (status = 200, description = "Fresh credential", body = String),
        (status = 500, description = "Credential issuance failed")
    )
)]
pub async fn gen_token(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<String>, ApiError> {
    let credential = state.verifier.issue(&client_id).await.map_err(|e| {
        warn!(client_id = %client_id, "credential issuance failed: {e}");
        ApiError::internal("Error Generating Token").with_details(e.to_string())
    })?;

    Ok(Json(credential))
}
