// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::config::GatewayConfig;
use crate::pipeline::Pipeline;
use crate::relay::RelayDispatcher;
use crate::tx::TxConstructor;

/// Shared application state.
///
/// Everything here is immutable after startup and shared across request
/// handlers without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(
        config: GatewayConfig,
        verifier: Arc<dyn CredentialVerifier>,
        constructor: Arc<dyn TxConstructor>,
        relay: Arc<dyn RelayDispatcher>,
    ) -> Self {
        let config = Arc::new(config);
        let pipeline = Arc::new(Pipeline::new(
            config.clone(),
            verifier.clone(),
            constructor,
            relay,
        ));
        Self {
            config,
            verifier,
            pipeline,
        }
    }
}
