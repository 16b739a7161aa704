// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Parameter builder.
//!
//! Maps an operation kind plus request fields to the ordered parameter
//! sequence of the target contract method. Parameter count and order are a
//! pure function of the kind; the builder performs no I/O.

use crate::models::TokenRequest;

use super::types::{BuildError, OperationKind, Parameter};

/// Build the contract-call parameter sequence for an operation.
///
/// `manager_addr` is the process-wide configured approve spender; it is the
/// only value not taken from the request.
///
/// Mapping (order is fixed):
/// - Transfer: `(address recipient, uint256 amount)`
/// - Approve: `(address spender, uint256 amount)` with the configured spender
/// - Swap: `(uint256 amount)`
/// - Balance query: `(address account)`
pub fn build_parameters(
    kind: OperationKind,
    request: &TokenRequest,
    manager_addr: &str,
) -> Result<Vec<Parameter>, BuildError> {
    match kind {
        OperationKind::Transfer => Ok(vec![
            Parameter::address("recipient", require(&request.to_address, "toAddress")?),
            Parameter::uint256("amount", require(&request.token_amount, "tokenAmount")?),
        ]),
        OperationKind::Approve => Ok(vec![
            Parameter::address("spender", manager_addr),
            Parameter::uint256("amount", require(&request.token_amount, "tokenAmount")?),
        ]),
        OperationKind::Swap => Ok(vec![Parameter::uint256(
            "amount",
            require(&request.token_amount, "tokenAmount")?,
        )]),
        OperationKind::BalanceQuery => Ok(vec![Parameter::address(
            "account",
            require(&request.pubkey, "pubkey")?,
        )]),
    }
}

/// Select the sender address for an operation.
///
/// Transfers name their sender explicitly; the other operations act for the
/// caller's own public address.
pub fn sender_address<'a>(
    kind: OperationKind,
    request: &'a TokenRequest,
) -> Result<&'a str, BuildError> {
    match kind {
        OperationKind::Transfer => require(&request.from, "from"),
        OperationKind::Approve | OperationKind::Swap | OperationKind::BalanceQuery => {
            require(&request.pubkey, "pubkey")
        }
    }
}

fn require<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, BuildError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(BuildError::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANAGER: &str = "0xManager";

    fn full_request() -> TokenRequest {
        TokenRequest {
            to_address: Some("0xAA".to_string()),
            token_amount: Some("100".to_string()),
            from: Some("0xBB".to_string()),
            pubkey: Some("0xCC".to_string()),
        }
    }

    #[test]
    fn transfer_parameters_are_recipient_then_amount() {
        let params = build_parameters(OperationKind::Transfer, &full_request(), MANAGER).unwrap();
        assert_eq!(
            params,
            vec![
                Parameter::address("recipient", "0xAA"),
                Parameter::uint256("amount", "100"),
            ]
        );
    }

    #[test]
    fn approve_parameters_are_spender_then_amount() {
        let params = build_parameters(OperationKind::Approve, &full_request(), MANAGER).unwrap();
        assert_eq!(
            params,
            vec![
                Parameter::address("spender", MANAGER),
                Parameter::uint256("amount", "100"),
            ]
        );
    }

    #[test]
    fn approve_spender_ignores_caller_supplied_addresses() {
        // A caller filling every field still cannot steer the spender.
        let request = TokenRequest {
            to_address: Some("0xEvil".to_string()),
            pubkey: Some("0xEvil".to_string()),
            ..full_request()
        };
        let params = build_parameters(OperationKind::Approve, &request, MANAGER).unwrap();
        assert_eq!(params[0].value, MANAGER);
    }

    #[test]
    fn swap_has_a_single_amount_parameter() {
        let params = build_parameters(OperationKind::Swap, &full_request(), MANAGER).unwrap();
        assert_eq!(params, vec![Parameter::uint256("amount", "100")]);
    }

    #[test]
    fn balance_query_has_a_single_account_parameter() {
        let params =
            build_parameters(OperationKind::BalanceQuery, &full_request(), MANAGER).unwrap();
        assert_eq!(params, vec![Parameter::address("account", "0xCC")]);
    }

    #[test]
    fn missing_fields_are_reported_by_request_field_name() {
        let empty = TokenRequest::default();

        let err = build_parameters(OperationKind::Transfer, &empty, MANAGER).unwrap_err();
        assert_eq!(err, BuildError::MissingField("toAddress"));

        let err = build_parameters(OperationKind::Approve, &empty, MANAGER).unwrap_err();
        assert_eq!(err, BuildError::MissingField("tokenAmount"));

        let err = build_parameters(OperationKind::BalanceQuery, &empty, MANAGER).unwrap_err();
        assert_eq!(err, BuildError::MissingField("pubkey"));
    }

    #[test]
    fn empty_string_fields_count_as_missing() {
        let request = TokenRequest {
            to_address: Some(String::new()),
            ..full_request()
        };
        let err = build_parameters(OperationKind::Transfer, &request, MANAGER).unwrap_err();
        assert_eq!(err, BuildError::MissingField("toAddress"));
    }

    #[test]
    fn sender_is_from_for_transfer_and_pubkey_otherwise() {
        let request = full_request();
        assert_eq!(
            sender_address(OperationKind::Transfer, &request).unwrap(),
            "0xBB"
        );
        assert_eq!(
            sender_address(OperationKind::Approve, &request).unwrap(),
            "0xCC"
        );
        assert_eq!(
            sender_address(OperationKind::Swap, &request).unwrap(),
            "0xCC"
        );
        assert_eq!(
            sender_address(OperationKind::BalanceQuery, &request).unwrap(),
            "0xCC"
        );
    }
}
