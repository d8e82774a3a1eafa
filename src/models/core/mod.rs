//! Core domain models.
//!
//! This module contains the chain-agnostic domain types used throughout the
//! decoder: decoded events and result rows, business-event definitions, the
//! signature catalog entries, and the network discriminator.

mod business_event;
mod decoded_event;
mod network;
mod signature;

pub use business_event::{
	BusinessEventDefinition, ComparisonOperator, Condition, CrossEventRule, EventRequirement,
	MatchStrategy, ParamDefinition,
};
pub use decoded_event::{DecodedEvent, EventParams, ReceiptOutput};
pub use network::NetworkType;
pub use signature::{display_signature, EventSignature, SignatureCatalog};
