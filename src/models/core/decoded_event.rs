use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named parameters extracted from a decoded event.
///
/// A `BTreeMap` keeps parameter order deterministic so repeated decodes of
/// the same input serialize identically.
pub type EventParams = BTreeMap<String, serde_json::Value>;

/// A decoded event produced by one of the pipeline's decoders.
///
/// `name` is either the canonical event signature
/// (e.g. `"Transfer(indexed address,indexed address,uint256)"`), a synthetic
/// tag such as the native transfer signature, or a business-event name after
/// fusion. Instances live only within a single pipeline run over one clause:
/// decoders append new events, and the business-event matcher may consume
/// several of them and replace them with one fused event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecodedEvent {
	/// Canonical signature or synthetic tag; always non-empty
	pub name: String,

	/// Decoded parameter values keyed by parameter name
	#[serde(default)]
	pub params: EventParams,

	/// Address of the contract that emitted the underlying log, if any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
}

impl DecodedEvent {
	pub fn new(name: impl Into<String>, params: EventParams, address: Option<String>) -> Self {
		DecodedEvent {
			name: name.into(),
			params,
			address,
		}
	}
}

/// One row of the public decode result.
///
/// Every clause yields at least one row when it produced any raw log or
/// transfer: either real decoded events or the "unknown" fallback marker.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReceiptOutput {
	/// Position of the originating clause within the transaction
	pub clause_index: usize,

	/// Decoded event name, or the unknown-event sentinel
	pub name: String,

	/// Decoded parameter values
	pub params: EventParams,

	/// Emitting contract address, when known
	pub address: Option<String>,
}
