// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction intent assembly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::types::{BuildError, Parameter};

/// A pending contract call before encoding and signing.
///
/// Owned by one pipeline run; never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransactionIntent {
    /// Sender address the transaction is built for.
    pub from: String,
    /// Ordered contract-call parameters.
    pub params: Vec<Parameter>,
    /// Native-currency value attached to the call. Always 0 for the token
    /// operations covered here.
    pub value: u64,
}

impl TransactionIntent {
    /// Assemble an intent with an explicit native value.
    pub fn assemble(
        sender: impl Into<String>,
        params: Vec<Parameter>,
        value: u64,
    ) -> Result<Self, BuildError> {
        let from = sender.into();
        if from.is_empty() {
            return Err(BuildError::InvalidSender);
        }
        Ok(Self {
            from,
            params,
            value,
        })
    }

    /// Assemble an intent with no native value attached.
    pub fn assemble_default(
        sender: impl Into<String>,
        params: Vec<Parameter>,
    ) -> Result<Self, BuildError> {
        Self::assemble(sender, params, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_default_sets_zero_value() {
        let intent = TransactionIntent::assemble_default(
            "0xBB",
            vec![Parameter::address("recipient", "0xAA")],
        )
        .unwrap();
        assert_eq!(intent.from, "0xBB");
        assert_eq!(intent.value, 0);
        assert_eq!(intent.params.len(), 1);
    }

    #[test]
    fn empty_sender_is_rejected() {
        let err = TransactionIntent::assemble_default("", vec![]).unwrap_err();
        assert_eq!(err, BuildError::InvalidSender);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let intent = TransactionIntent::assemble_default(
            "0xBB",
            vec![Parameter::uint256("amount", "100")],
        )
        .unwrap();
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "0xBB",
                "params": [{
                    "internalType": "uint256",
                    "name": "amount",
                    "type": "uint256",
                    "value": "100",
                }],
                "value": 0,
            })
        );
    }
}
