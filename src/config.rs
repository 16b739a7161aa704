// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and the immutable
//! [`GatewayConfig`] loaded from the environment at startup. The config is
//! read once in `main` and shared read-only with every request pipeline.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `WALLET_URI` | Wallet signing service endpoint for relayed transactions | Required |
//! | `MNGR_CONTRACT_ADDR` | Manager contract address used as the approve spender | Required |
//! | `AUTH_SERVICE_URL` | Auth service base URL for credential issue/verify | Required |
//! | `TX_SERVICE_URL` | Transaction construction service base URL | Required |
//! | `CHAIN_ID` | Chain identifier sent with every construction call | `5` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `4551` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use thiserror::Error;

/// Environment variable name for the wallet signing service endpoint.
pub const WALLET_URI_ENV: &str = "WALLET_URI";

/// Environment variable name for the manager contract address.
///
/// Approvals are always granted to this process-wide address. The spender
/// is never taken from the request body, so a caller cannot redirect an
/// approval to an arbitrary contract.
pub const MNGR_CONTRACT_ADDR_ENV: &str = "MNGR_CONTRACT_ADDR";

/// Environment variable name for the auth service base URL.
pub const AUTH_SERVICE_URL_ENV: &str = "AUTH_SERVICE_URL";

/// Environment variable name for the construction service base URL.
pub const TX_SERVICE_URL_ENV: &str = "TX_SERVICE_URL";

/// Environment variable name for the chain identifier.
pub const CHAIN_ID_ENV: &str = "CHAIN_ID";

/// Default chain identifier when `CHAIN_ID` is unset.
pub const DEFAULT_CHAIN_ID: u64 = 5;

/// Default bind port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4551;

/// Configuration error raised during startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingVar(&'static str),

    #[error("environment variable {0} has an invalid value: {1}")]
    InvalidVar(&'static str, String),
}

/// Process-wide gateway configuration.
///
/// Immutable after startup; shared by reference across concurrent request
/// pipelines without locking.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Wallet signing service endpoint that receives relayed transactions.
    pub wallet_uri: String,
    /// Manager contract address used as the approve spender.
    pub manager_contract_addr: String,
    /// Auth service base URL (credential issue/verify).
    pub auth_service_url: String,
    /// Construction service base URL (unsigned tx building, balance reads).
    pub tx_service_url: String,
    /// Chain identifier sent with every construction call.
    pub chain_id: u64,
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
}

impl GatewayConfig {
    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let wallet_uri = env_url(WALLET_URI_ENV)?;
        let manager_contract_addr = env_required(MNGR_CONTRACT_ADDR_ENV)?;
        let auth_service_url = env_url(AUTH_SERVICE_URL_ENV)?;
        let tx_service_url = env_url(TX_SERVICE_URL_ENV)?;

        let chain_id = match env_optional(CHAIN_ID_ENV) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidVar(CHAIN_ID_ENV, raw))?,
            None => DEFAULT_CHAIN_ID,
        };

        let host = env_or_default("HOST", "0.0.0.0");
        let port = match env_optional("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("PORT", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            wallet_uri,
            manager_contract_addr,
            auth_service_url,
            tx_service_url,
            chain_id,
            host,
            port,
        })
    }
}

fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env_optional(name).ok_or(ConfigError::MissingVar(name))
}

/// Read a required variable and check it parses as an absolute URL.
fn env_url(name: &'static str) -> Result<String, ConfigError> {
    let raw = env_required(name)?;
    url::Url::parse(&raw).map_err(|_| ConfigError::InvalidVar(name, raw.clone()))?;
    Ok(raw)
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_var_is_reported_by_name() {
        // Env-var access races with other tests, so exercise the error path
        // through the helper with a name that is never set.
        let err = env_required("TOKEN_GATEWAY_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar("TOKEN_GATEWAY_TEST_UNSET_VAR")
        ));
        assert!(err.to_string().contains("TOKEN_GATEWAY_TEST_UNSET_VAR"));
    }

    #[test]
    fn env_or_default_falls_back() {
        assert_eq!(
            env_or_default("TOKEN_GATEWAY_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
