// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use thiserror::Error;

/// Errors raised while extracting the bearer credential from a request.
///
/// Credential *verification* failures are not represented here; they are a
/// pipeline outcome, decided after extraction succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authorization header is absent or does not carry a `Bearer ` prefix.
    #[error("No AuthToken Supplied!")]
    NoCredentialSupplied,

    /// Authorization header value could not be parsed as visible ASCII.
    #[error("Error Parsing Header")]
    HeaderParse(String),
}
