use alloy::{json_abi::Event, primitives::B256};

/// One entry of the known-event signature catalog.
///
/// `name` is the display signature used throughout the decoder output and
/// the business-event catalogs: the event name followed by its parameter
/// types with `indexed` markers, e.g.
/// `"NodeDelegated(indexed uint256,indexed address,bool)"`.
#[derive(Debug, Clone)]
pub struct EventSignature {
	/// Display signature with indexed markers
	pub name: String,

	/// The JSON ABI event definition used for decoding
	pub event: Event,

	/// keccak-256 hash of the canonical signature (`topics[0]`)
	pub topic: B256,

	/// Number of topics a log of this event carries, selector included
	pub topic_count: usize,
}

impl EventSignature {
	/// Build a catalog entry from a JSON ABI event definition.
	pub fn new(event: Event) -> Self {
		let indexed = event.inputs.iter().filter(|input| input.indexed).count();
		let topic_count = if event.anonymous {
			indexed
		} else {
			indexed + 1
		};

		EventSignature {
			name: display_signature(&event),
			topic: event.selector(),
			topic_count,
			event,
		}
	}
}

/// Formats an event's display signature with `indexed` markers.
pub fn display_signature(event: &Event) -> String {
	let params = event
		.inputs
		.iter()
		.map(|input| {
			if input.indexed {
				format!("indexed {}", input.ty)
			} else {
				input.ty.clone()
			}
		})
		.collect::<Vec<String>>()
		.join(",");

	format!("{}({})", event.name, params)
}

/// The parsed content of one signature catalog file.
#[derive(Debug, Clone, Default)]
pub struct SignatureCatalog {
	pub events: Vec<EventSignature>,
}
