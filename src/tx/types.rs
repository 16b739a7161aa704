// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction construction types.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// The token operations the gateway exposes.
///
/// The kind fixes the parameter mapping and the construction-service
/// entrypoint used for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Transfer,
    Approve,
    Swap,
    BalanceQuery,
}

impl OperationKind {
    /// Stable lowercase name, used in logs and construction-service paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Transfer => "transfer",
            OperationKind::Approve => "approve",
            OperationKind::Swap => "swap",
            OperationKind::BalanceQuery => "balance",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ABI-call argument.
///
/// `internal_type` and `declared_type` must match the contract method's
/// signature at the parameter's position; the position itself is fixed by
/// the operation kind and must not be reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Parameter {
    /// Solidity internal type (e.g. `address`, `uint256`).
    #[serde(rename = "internalType")]
    pub internal_type: String,
    /// Argument name in the method signature.
    pub name: String,
    /// Declared ABI type.
    #[serde(rename = "type")]
    pub declared_type: String,
    /// Argument value, stringly typed for the construction service.
    pub value: String,
}

impl Parameter {
    /// An `address`-typed parameter.
    pub fn address(name: &str, value: impl Into<String>) -> Self {
        Self {
            internal_type: "address".to_string(),
            name: name.to_string(),
            declared_type: "address".to_string(),
            value: value.into(),
        }
    }

    /// A `uint256`-typed parameter.
    pub fn uint256(name: &str, value: impl Into<String>) -> Self {
        Self {
            internal_type: "uint256".to_string(),
            name: name.to_string(),
            declared_type: "uint256".to_string(),
            value: value.into(),
        }
    }
}

/// Errors raised while building parameters or assembling an intent.
///
/// These are all detected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("sender address must not be empty")]
    InvalidSender,
}
