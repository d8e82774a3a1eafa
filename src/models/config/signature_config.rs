//! Signature catalog loading and validation.
//!
//! This module implements the ConfigLoader trait for the known-event
//! signature catalog. Each catalog file is a standard JSON ABI array; only
//! `"type": "event"` items are used, everything else is ignored.

use std::path::Path;

use alloy::json_abi::JsonAbi;
use async_trait::async_trait;
use tracing::debug;

use crate::models::{
	config::{ConfigError, ConfigLoader},
	EventSignature, SignatureCatalog,
};

#[async_trait]
impl ConfigLoader for SignatureCatalog {
	/// Load all signature catalogs from a directory.
	///
	/// Reads and parses every JSON ABI file in the specified directory,
	/// keyed by file stem. Files are visited in name order so the combined
	/// catalog is deterministic across runs.
	async fn load_all(path: Option<&Path>) -> Result<Vec<(String, Self)>, ConfigError> {
		let catalog_dir = path.unwrap_or(Path::new(crate::utils::DEFAULT_SIGNATURES_DIR));

		if !catalog_dir.exists() {
			return Err(ConfigError::file_error("signatures directory not found"));
		}

		let mut files = Vec::new();
		let mut entries = tokio::fs::read_dir(catalog_dir).await?;
		while let Some(entry) = entries.next_entry().await? {
			let path = entry.path();
			if Self::is_json_file(&path) {
				files.push(path);
			}
		}
		files.sort();

		let mut pairs = Vec::new();
		for path in files {
			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			let catalog = Self::load_from_path(&path).await?;
			pairs.push((name, catalog));
		}

		Ok(pairs)
	}

	/// Load a signature catalog from a single JSON ABI file.
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let contents = tokio::fs::read_to_string(path).await?;
		let abi: JsonAbi = serde_json::from_str(&contents)?;

		let mut events = Vec::new();
		for event in abi.events() {
			if event.anonymous {
				// Anonymous events carry no selector topic to dispatch on
				debug!("skipping anonymous event '{}'", event.name);
				continue;
			}

			events.push(EventSignature::new(event.clone()));
		}

		let catalog = SignatureCatalog { events };
		catalog.validate()?;

		Ok(catalog)
	}

	/// Validate the signature catalog
	fn validate(&self) -> Result<(), ConfigError> {
		if self.events.is_empty() {
			return Err(ConfigError::validation_error(
				"signature catalog contains no event definitions",
			));
		}

		for signature in &self.events {
			if signature.event.name.is_empty() {
				return Err(ConfigError::validation_error("event name is required"));
			}
		}

		Ok(())
	}
}
