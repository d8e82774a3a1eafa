//! Transaction receipt decoding for wallet activity feeds.
//!
//! This crate ingests the raw execution results of VeChainThor
//! transactions (per-clause event logs and native transfer records) and
//! produces a normalized sequence of semantically named, parameterized
//! events suitable for rendering a wallet's activity feed.
//!
//! # Architecture
//! The crate is built around several key components:
//! - Models: Raw receipt shapes, decoded events and business-event
//!   definitions
//! - Repositories: Signature and business-event catalogs, loaded once per
//!   network and frozen
//! - Services: The decoder pipeline composing the generic ABI decoder, the
//!   native transfer decoder and the business-event matcher
//!
//! # Flow
//! 1. Load the signature and business-event catalogs for a network
//! 2. Build a [`services::decoder::DecoderService`] with the desired
//!    decoder order
//! 3. Call `analyze_receipt` with a transaction's clause outputs and origin
//! 4. Render the returned rows; unrecognized logs surface as explicit
//!    "unknown" rows rather than being dropped
//!
//! Decoding is pure and synchronous; only the one-time catalog load is
//! asynchronous. A loaded service can be shared freely across threads.

pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::{ClauseOutput, DecodedEvent, NetworkType, ReceiptOutput};
pub use repositories::{BusinessEventRepository, SignatureRepository, TokenMap};
pub use services::decoder::{DecoderKind, DecoderService, DEFAULT_DECODER_ORDER};
