// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{models::TokenRequest, state::AppState};

pub mod balance;
pub mod credentials;
pub mod health;
pub mod tokens;

pub fn router(state: AppState) -> Router {
    let v0_routes = Router::new()
        .route("/genToken/{clientID}", get(credentials::gen_token))
        .route("/transferToken", post(tokens::transfer_token))
        .route("/approve", post(tokens::approve))
        .route("/swap", post(tokens::swap))
        .route("/getTokenBalance", post(balance::get_token_balance))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .nest("/api/v0", v0_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Layers run outermost-last: requests see set-request-id, then
        // tracing, then propagation on the way back out.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        credentials::gen_token,
        tokens::transfer_token,
        tokens::approve,
        tokens::swap,
        balance::get_token_balance,
        health::health,
        health::liveness
    ),
    components(schemas(TokenRequest, health::HealthResponse)),
    tags(
        (name = "Credentials", description = "Bearer credential issuance"),
        (name = "Tokens", description = "Token operations relayed to the wallet signing service"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
