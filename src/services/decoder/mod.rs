//! Receipt decoding functionality.
//!
//! Implements the core decode-and-correlate pipeline for transaction
//! receipts:
//! - Ordered decoder chain over each clause's raw output
//! - Per-clause accumulation and fusion of decoded events
//! - "Unknown event" fallback rows preserving log addresses
//! - Decoder-specific helper functions
//!
//! The pipeline itself is a pure, synchronous computation: the only
//! asynchronous boundary is the one-time catalog load in [`DecoderService::load`],
//! which must complete before any decode call. A loaded service is
//! immutable and can be shared freely across concurrent decode calls.

mod decoders;
mod error;

pub mod helpers;

use std::{path::Path, sync::Arc};

use tracing::instrument;

use crate::{
	models::{ClauseOutput, DecodedEvent, NetworkType, ReceiptOutput},
	repositories::{BusinessEventRepository, RepositoryError, SignatureRepository, TokenMap},
	utils::UNKNOWN_EVENT_NAME,
};

pub use decoders::{
	BusinessEventDecoder, DecoderKind, EventDecoder, GenericEventDecoder, NativeTransferDecoder,
	DEFAULT_DECODER_ORDER,
};
pub use error::{DecodeError, MatchError};

/// The receipt decoding pipeline.
///
/// Holds an ordered chain of decoders; each decode call runs the chain over
/// every clause of a transaction receipt and flattens the accumulated
/// decoded events into public result rows.
#[derive(Debug, Clone)]
pub struct DecoderService {
	decoders: Vec<EventDecoder>,
}

impl DecoderService {
	/// Create a service with the default decoder order.
	pub fn new(
		signatures: Arc<SignatureRepository>,
		business_events: Arc<BusinessEventRepository>,
	) -> Self {
		Self::with_kinds(&DEFAULT_DECODER_ORDER, signatures, business_events)
	}

	/// Create a service running only the given decoders, in the given
	/// order.
	pub fn with_kinds(
		kinds: &[DecoderKind],
		signatures: Arc<SignatureRepository>,
		business_events: Arc<BusinessEventRepository>,
	) -> Self {
		let decoders = kinds
			.iter()
			.map(|kind| match kind {
				DecoderKind::Generic => {
					EventDecoder::Generic(GenericEventDecoder::new(signatures.clone()))
				}
				DecoderKind::NativeTransfer => {
					EventDecoder::NativeTransfer(NativeTransferDecoder::new())
				}
				DecoderKind::BusinessEvent => {
					EventDecoder::BusinessEvent(BusinessEventDecoder::new(business_events.clone()))
				}
			})
			.collect();

		Self::with_decoders(decoders)
	}

	/// Create a service from already-built decoders.
	pub fn with_decoders(decoders: Vec<EventDecoder>) -> Self {
		DecoderService { decoders }
	}

	/// Load both catalogs for a network and build the service.
	///
	/// This is the one-time initialization barrier: the returned service
	/// owns fully loaded, frozen catalogs, so every subsequent decode call
	/// is pure and synchronous.
	pub async fn load(
		network: NetworkType,
		tokens: &TokenMap,
		kinds: &[DecoderKind],
		signatures_path: Option<&Path>,
		business_events_path: Option<&Path>,
	) -> Result<Self, RepositoryError> {
		let (signatures, business_events) = futures::try_join!(
			SignatureRepository::new(signatures_path),
			BusinessEventRepository::new(network, tokens, business_events_path),
		)?;

		Ok(Self::with_kinds(
			kinds,
			Arc::new(signatures),
			Arc::new(business_events),
		))
	}

	/// The configured decoder kinds, in execution order.
	pub fn kinds(&self) -> Vec<DecoderKind> {
		self.decoders.iter().map(EventDecoder::kind).collect()
	}

	/// Decodes a full transaction receipt into result rows.
	///
	/// Every clause with at least one raw log or transfer yields at least
	/// one row; clauses nothing recognizes fall back to one "unknown" row
	/// per raw log, preserving the emitting address.
	#[instrument(skip_all, fields(clauses = outputs.len()))]
	pub fn analyze_receipt(&self, outputs: &[ClauseOutput], origin: &str) -> Vec<ReceiptOutput> {
		outputs
			.iter()
			.enumerate()
			.flat_map(|(clause_index, output)| self.analyze_clause(clause_index, output, origin))
			.collect()
	}

	fn analyze_clause(
		&self,
		clause_index: usize,
		output: &ClauseOutput,
		origin: &str,
	) -> Vec<ReceiptOutput> {
		let mut events: Vec<DecodedEvent> = Vec::new();
		for decoder in &self.decoders {
			events = decoder.decode_clause(output, events, origin);
		}

		if events.is_empty() {
			return output
				.events
				.iter()
				.map(|log| ReceiptOutput {
					clause_index,
					name: UNKNOWN_EVENT_NAME.to_string(),
					params: Default::default(),
					address: Some(log.address.clone()),
				})
				.collect();
		}

		events
			.into_iter()
			.map(|event| ReceiptOutput {
				clause_index,
				name: event.name,
				params: event.params,
				address: event.address,
			})
			.collect()
	}
}
