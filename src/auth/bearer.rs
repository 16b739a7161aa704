// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer credential extraction.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use super::error::AuthError;

/// Extract the bearer credential from a request's headers.
///
/// The header must be present and carry the exact `Bearer ` prefix; the
/// remainder is the opaque credential. A header value that is not valid
/// visible ASCII is a parse failure, distinct from an absent credential.
pub fn bearer_credential(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::NoCredentialSupplied)?;

    let value = value
        .to_str()
        .map_err(|e| AuthError::HeaderParse(e.to_string()))?;

    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::NoCredentialSupplied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: HeaderValue) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        headers
    }

    #[test]
    fn extracts_credential_after_bearer_prefix() {
        let headers = headers_with(HeaderValue::from_static("Bearer tok-123"));
        assert_eq!(bearer_credential(&headers).unwrap(), "tok-123");
    }

    #[test]
    fn absent_header_is_no_credential() {
        let headers = HeaderMap::new();
        assert_eq!(
            bearer_credential(&headers).unwrap_err(),
            AuthError::NoCredentialSupplied
        );
    }

    #[test]
    fn missing_prefix_is_no_credential() {
        let headers = headers_with(HeaderValue::from_static("tok-123"));
        assert_eq!(
            bearer_credential(&headers).unwrap_err(),
            AuthError::NoCredentialSupplied
        );
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let headers = headers_with(HeaderValue::from_static("bearer tok-123"));
        assert_eq!(
            bearer_credential(&headers).unwrap_err(),
            AuthError::NoCredentialSupplied
        );
    }

    #[test]
    fn non_ascii_header_is_a_parse_failure() {
        let headers = headers_with(HeaderValue::from_bytes(b"Bearer \xff").unwrap());
        assert!(matches!(
            bearer_credential(&headers).unwrap_err(),
            AuthError::HeaderParse(_)
        ));
    }
}
