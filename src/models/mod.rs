//! Domain models and data structures for receipt decoding.
//!
//! This module contains all the core data structures used throughout the
//! crate:
//!
//! - `blockchain`: Raw VeChainThor receipt shapes (clause outputs, logs,
//!   transfers)
//! - `config`: Catalog loading and validation
//! - `core`: Core domain models (decoded events, business-event
//!   definitions, signature catalog entries)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::{ClauseOutput, EventLog, TransferLog};

// Re-export core types
pub use core::{
	display_signature, BusinessEventDefinition, ComparisonOperator, Condition, CrossEventRule,
	DecodedEvent, EventParams, EventRequirement, EventSignature, MatchStrategy, NetworkType,
	ParamDefinition, ReceiptOutput, SignatureCatalog,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
