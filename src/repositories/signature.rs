//! Signature catalog repository implementation.
//!
//! This module provides storage and retrieval of known-event signatures,
//! indexed by their selector topic so the generic decoder can dispatch on
//! `topics[0]` in constant time. The repository loads JSON ABI files once
//! at startup and is immutable afterwards, so it can be shared freely
//! across concurrent decode calls.

use std::{collections::HashMap, path::Path, sync::Arc};

use alloy::primitives::B256;
use async_trait::async_trait;

use crate::{
	models::{ConfigLoader, EventSignature, SignatureCatalog},
	repositories::error::RepositoryError,
};

/// Repository for storing and retrieving known-event signatures
#[derive(Debug, Clone, Default)]
pub struct SignatureRepository {
	/// All catalog entries in load order
	pub signatures: Vec<EventSignature>,

	/// Entry positions indexed by selector topic
	by_topic: HashMap<B256, Vec<usize>>,
}

impl SignatureRepository {
	/// Create a new signature repository from the given path
	///
	/// Loads all JSON ABI files in the specified directory (or the default
	/// signatures directory if None is provided).
	pub async fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let signatures = Self::load_all(path).await?;
		Ok(Self::new_with_signatures(signatures))
	}

	/// Create a repository from already-built catalog entries
	pub fn new_with_signatures(signatures: Vec<EventSignature>) -> Self {
		let mut by_topic: HashMap<B256, Vec<usize>> = HashMap::new();
		for (position, signature) in signatures.iter().enumerate() {
			by_topic.entry(signature.topic).or_default().push(position);
		}

		SignatureRepository {
			signatures,
			by_topic,
		}
	}

	/// Load all signature catalog entries from the given path
	pub async fn load_all(path: Option<&Path>) -> Result<Vec<EventSignature>, RepositoryError> {
		let catalogs = SignatureCatalog::load_all(path).await?;
		Ok(catalogs
			.into_iter()
			.flat_map(|(_, catalog)| catalog.events)
			.collect())
	}
}

/// Interface for signature repository implementations
///
/// This trait defines the standard operations that any signature repository
/// must support, allowing for different storage backends while maintaining
/// a consistent interface.
#[async_trait]
pub trait SignatureRepositoryTrait: Clone {
	/// Create a new signature repository from the given path
	async fn new(path: Option<&Path>) -> Result<Self, RepositoryError>
	where
		Self: Sized;

	/// Find catalog entries matching a log's selector topic and topic count
	fn find_by_topic(&self, topic: &B256, topic_count: usize) -> Vec<&EventSignature>;

	/// Get all catalog entries
	fn get_all(&self) -> Vec<EventSignature>;
}

#[async_trait]
impl SignatureRepositoryTrait for SignatureRepository {
	async fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		SignatureRepository::new(path).await
	}

	fn find_by_topic(&self, topic: &B256, topic_count: usize) -> Vec<&EventSignature> {
		self.by_topic
			.get(topic)
			.map(|positions| {
				positions
					.iter()
					.map(|&position| &self.signatures[position])
					.filter(|signature| signature.topic_count == topic_count)
					.collect()
			})
			.unwrap_or_default()
	}

	fn get_all(&self) -> Vec<EventSignature> {
		self.signatures.clone()
	}
}

/// Service layer for signature repository operations
///
/// This type provides a higher-level interface for working with the
/// signature catalog, handling repository initialization and access through
/// a trait-based interface.
#[derive(Debug, Clone)]
pub struct SignatureService<T: SignatureRepositoryTrait> {
	repository: Arc<T>,
}

impl<T: SignatureRepositoryTrait> SignatureService<T> {
	/// Create a new signature service with the default repository
	/// implementation
	pub async fn new(
		path: Option<&Path>,
	) -> Result<SignatureService<SignatureRepository>, RepositoryError> {
		let repository = SignatureRepository::new(path).await?;
		Ok(SignatureService {
			repository: Arc::new(repository),
		})
	}

	/// Create a new signature service with a custom repository
	/// implementation
	pub fn new_with_repository(repository: T) -> Self {
		SignatureService {
			repository: Arc::new(repository),
		}
	}

	/// Find catalog entries matching a selector topic and topic count
	pub fn find_by_topic(&self, topic: &B256, topic_count: usize) -> Vec<&EventSignature> {
		self.repository.find_by_topic(topic, topic_count)
	}

	/// Get all catalog entries
	pub fn get_all(&self) -> Vec<EventSignature> {
		self.repository.get_all()
	}

	/// Shared handle to the underlying repository
	pub fn repository(&self) -> Arc<T> {
		self.repository.clone()
	}
}
