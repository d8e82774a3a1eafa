//! Raw blockchain receipt shapes.
//!
//! This module contains the wire-level types produced by a VeChainThor node
//! when a transaction executes: per-clause event logs and native VET
//! transfer records. These types are immutable inputs to the decoder
//! pipeline; they are created by the transaction-fetching layer and
//! consumed exactly once per decode call.

use alloy::primitives::{Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A single event log emitted by a contract during clause execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventLog {
	/// Address of the contract that emitted the event
	pub address: String,

	/// Ordered topic hashes; `topics[0]` is the event signature hash
	/// for non-anonymous events
	pub topics: Vec<B256>,

	/// ABI-encoded non-indexed parameters
	pub data: Bytes,
}

/// A native VET movement recorded during clause execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransferLog {
	/// Address the value moved from
	pub sender: String,

	/// Address the value moved to
	pub recipient: String,

	/// Transferred amount in wei
	pub amount: U256,
}

/// The full raw result of one transaction clause.
///
/// A transaction is composed of one or more clauses, each executing
/// independently and producing its own logs and transfers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseOutput {
	/// Address of the contract created by this clause, if any
	#[serde(default)]
	pub contract_address: Option<String>,

	/// Event logs emitted during execution, in emission order
	#[serde(default)]
	pub events: Vec<EventLog>,

	/// Native transfers performed during execution, in order
	#[serde(default)]
	pub transfers: Vec<TransferLog>,
}
