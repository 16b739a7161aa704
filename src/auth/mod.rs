// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-credential handling for the gateway API.
//!
//! ## Auth Flow
//!
//! 1. Client obtains an opaque credential from `GET /genToken/{clientID}`
//! 2. Client sends `Authorization: Bearer <credential>` on every operation
//! 3. Gateway:
//!    - Extracts the credential from the Bearer-prefixed header value
//!    - Verifies it against the auth service before building any parameters
//!
//! ## Security
//!
//! - Every operation, including balance reads, requires a valid credential
//! - Verification happens before any downstream construction or relay call
//! - Credentials are never persisted by the gateway

pub mod bearer;
pub mod error;
pub mod verifier;

pub use bearer::bearer_credential;
pub use error::AuthError;
pub use verifier::{AuthServiceClient, CredentialVerifier, IssuanceError};
