// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction construction module.
//!
//! This module provides functionality for:
//! - Mapping request fields to ordered, typed contract-call parameters
//! - Assembling parameter sequences into transaction intents
//! - Obtaining unsigned transactions and balances from the construction
//!   service

pub mod client;
pub mod intent;
pub mod params;
pub mod types;

pub use client::{ConstructionError, ConstructionServiceClient, TxConstructor};
pub use intent::TransactionIntent;
pub use params::build_parameters;
pub use types::*;
