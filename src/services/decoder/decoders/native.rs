//! Native VET transfer decoding.
//!
//! Native transfers are not logs: the node reports them as separate
//! transfer records per clause. This decoder synthesizes one canonical
//! pseudo-event per record so downstream matching and rendering treat
//! native movements like any other decoded event. Raw logs are not
//! consulted.

use serde_json::Value;

use crate::{
	models::{ClauseOutput, DecodedEvent, EventParams},
	utils::VET_TRANSFER_SIGNATURE,
};

/// Decoder synthesizing pseudo-events for native VET transfers.
#[derive(Debug, Clone, Default)]
pub struct NativeTransferDecoder;

impl NativeTransferDecoder {
	pub fn new() -> Self {
		NativeTransferDecoder
	}

	/// Appends one synthetic event per transfer record in the clause.
	pub fn decode_clause(
		&self,
		output: &ClauseOutput,
		accumulated: Vec<DecodedEvent>,
		_origin: &str,
	) -> Vec<DecodedEvent> {
		let mut events = accumulated;

		for transfer in &output.transfers {
			let mut params = EventParams::new();
			params.insert("from".to_string(), Value::String(transfer.sender.clone()));
			params.insert("to".to_string(), Value::String(transfer.recipient.clone()));
			params.insert(
				"amount".to_string(),
				Value::String(transfer.amount.to_string()),
			);

			events.push(DecodedEvent::new(VET_TRANSFER_SIGNATURE, params, None));
		}

		events
	}
}
