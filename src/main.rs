// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use token_gateway::api::router;
use token_gateway::auth::AuthServiceClient;
use token_gateway::config::GatewayConfig;
use token_gateway::relay::HttpRelayDispatcher;
use token_gateway::state::AppState;
use token_gateway::tx::ConstructionServiceClient;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = GatewayConfig::from_env().expect("Failed to load configuration");

    let verifier = AuthServiceClient::new(&config.auth_service_url)
        .expect("Failed to build auth service client");
    let constructor = ConstructionServiceClient::new(&config.tx_service_url)
        .expect("Failed to build construction service client");
    let relay = HttpRelayDispatcher::new(&config.wallet_uri)
        .expect("Failed to build relay dispatcher");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    let state = AppState::new(config, Arc::new(verifier), Arc::new(constructor), Arc::new(relay));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    info!("Token gateway listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json_output = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_output {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
