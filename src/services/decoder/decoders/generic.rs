//! Generic ABI log decoding.
//!
//! Decodes individual raw logs against the flat catalog of known event
//! signatures. Dispatch is topic-based: a catalog entry is a candidate when
//! its selector equals `topics[0]` and its expected topic count equals the
//! log's topic count. Logs no entry matches are skipped here; they surface
//! through the pipeline's "unknown" fallback if nothing else decodes the
//! clause.

use std::sync::Arc;

use alloy_dyn_abi::EventExt;
use tracing::debug;

use crate::{
	models::{ClauseOutput, DecodedEvent, EventLog, EventParams, EventSignature},
	repositories::{SignatureRepository, SignatureRepositoryTrait},
	services::decoder::{error::DecodeError, helpers::format_sol_value},
};

/// Decoder for single logs with known ABI signatures.
#[derive(Debug, Clone)]
pub struct GenericEventDecoder {
	repository: Arc<SignatureRepository>,
}

impl GenericEventDecoder {
	pub fn new(repository: Arc<SignatureRepository>) -> Self {
		GenericEventDecoder { repository }
	}

	/// Appends one decoded event per recognizable log in the clause.
	pub fn decode_clause(
		&self,
		output: &ClauseOutput,
		accumulated: Vec<DecodedEvent>,
		_origin: &str,
	) -> Vec<DecodedEvent> {
		let mut events = accumulated;

		for log in &output.events {
			if let Some(event) = self.decode_log(log) {
				events.push(event);
			}
		}

		events
	}

	/// Decodes one raw log, or None when no catalog entry matches or the
	/// matched entry fails to decode the data.
	fn decode_log(&self, log: &EventLog) -> Option<DecodedEvent> {
		let topic0 = log.topics.first()?;
		let candidates = self.repository.find_by_topic(topic0, log.topics.len());
		let signature = candidates.into_iter().next()?;

		match decode_with_signature(signature, log) {
			Ok(event) => Some(event),
			Err(error) => {
				// A topic match with undecodable data is fatal to this
				// attempt; the log stays undecoded
				debug!(signature = %signature.name, %error, "log decode failed");
				None
			}
		}
	}
}

/// ABI-decodes a log's topics and data against one catalog entry.
fn decode_with_signature(
	signature: &EventSignature,
	log: &EventLog,
) -> Result<DecodedEvent, DecodeError> {
	let decoded = signature
		.event
		.decode_log_parts(log.topics.iter().copied(), &log.data)
		.map_err(|error| DecodeError::log_data(&signature.name, error.to_string()))?;

	// Reassemble named parameters in declaration order; indexed and
	// non-indexed values arrive in two separate streams
	let mut indexed = decoded.indexed.into_iter();
	let mut body = decoded.body.into_iter();
	let mut params = EventParams::new();

	for (position, input) in signature.event.inputs.iter().enumerate() {
		let value = if input.indexed {
			indexed.next()
		} else {
			body.next()
		};
		let Some(value) = value else {
			return Err(DecodeError::log_data(
				&signature.name,
				"decoded parameter count mismatch",
			));
		};

		let name = if input.name.is_empty() {
			format!("arg{}", position)
		} else {
			input.name.clone()
		};
		params.insert(name, format_sol_value(&value));
	}

	Ok(DecodedEvent::new(
		signature.name.clone(),
		params,
		Some(log.address.clone()),
	))
}
