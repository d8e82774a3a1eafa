//! Catalog repositories.
//!
//! Provides loading, validation and access for the static data tables the
//! decoder depends on:
//! - Signature catalogs (JSON ABI event definitions, topic-indexed)
//! - Business-event definitions (network-specialized at load time)
//!
//! Repositories are loaded once at startup and frozen; loading must
//! complete before any decode call is issued.

mod business_event;
mod error;
mod signature;

pub use business_event::{
	BusinessEventRepository, BusinessEventRepositoryTrait, BusinessEventService, TokenMap,
};
pub use error::RepositoryError;
pub use signature::{SignatureRepository, SignatureRepositoryTrait, SignatureService};
