//! Decoder implementations.
//!
//! Provides the closed set of decoder variants the receipt pipeline
//! composes:
//! - Generic ABI decoder for single logs with known signatures
//! - Native transfer decoder synthesizing VET pseudo-events
//! - Business-event decoder fusing correlated events
//!
//! Each variant consumes one clause's raw output plus the accumulated
//! decoded-event list and returns the new accumulated list.

mod business;
mod generic;
mod native;

use serde::{Deserialize, Serialize};

pub use business::BusinessEventDecoder;
pub use generic::GenericEventDecoder;
pub use native::NativeTransferDecoder;

use crate::models::{ClauseOutput, DecodedEvent};

/// Identifies a decoder variant for pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DecoderKind {
	Generic,
	NativeTransfer,
	BusinessEvent,
}

/// The default pipeline order: plain log decoding, then native transfer
/// synthesis, then business-event fusion over both.
pub const DEFAULT_DECODER_ORDER: [DecoderKind; 3] = [
	DecoderKind::Generic,
	DecoderKind::NativeTransfer,
	DecoderKind::BusinessEvent,
];

/// One configured decoder in the pipeline.
#[derive(Debug, Clone)]
pub enum EventDecoder {
	Generic(GenericEventDecoder),
	NativeTransfer(NativeTransferDecoder),
	BusinessEvent(BusinessEventDecoder),
}

impl EventDecoder {
	/// The configuration kind of this decoder.
	pub fn kind(&self) -> DecoderKind {
		match self {
			EventDecoder::Generic(_) => DecoderKind::Generic,
			EventDecoder::NativeTransfer(_) => DecoderKind::NativeTransfer,
			EventDecoder::BusinessEvent(_) => DecoderKind::BusinessEvent,
		}
	}

	/// Runs this decoder over one clause, producing the new accumulated
	/// decoded-event list.
	pub fn decode_clause(
		&self,
		output: &ClauseOutput,
		accumulated: Vec<DecodedEvent>,
		origin: &str,
	) -> Vec<DecodedEvent> {
		match self {
			EventDecoder::Generic(decoder) => decoder.decode_clause(output, accumulated, origin),
			EventDecoder::NativeTransfer(decoder) => {
				decoder.decode_clause(output, accumulated, origin)
			}
			EventDecoder::BusinessEvent(decoder) => {
				decoder.decode_clause(output, accumulated, origin)
			}
		}
	}
}
