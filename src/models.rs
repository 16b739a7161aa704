// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request bodies for the token-operation endpoints. All operations share
//! one body shape with optional fields; which fields are required is decided
//! per operation by the parameter builder, so a missing field is rejected
//! before any network call is made.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token-operation request body.
///
/// Fields are a superset across the operations:
///
/// | Operation      | Required fields |
/// |----------------|-----------------|
/// | Transfer       | `toAddress`, `tokenAmount`, `from` |
/// | Approve        | `tokenAmount`, `pubkey` |
/// | Swap           | `tokenAmount`, `pubkey` |
/// | Balance query  | `pubkey` |
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenRequest {
    /// Recipient address for transfers.
    pub to_address: Option<String>,
    /// Token amount as a decimal string (uint256 range).
    pub token_amount: Option<String>,
    /// Sender address for transfers.
    pub from: Option<String>,
    /// Caller's public address (sender for approve/swap, account for balance).
    pub pubkey: Option<String>,
}
