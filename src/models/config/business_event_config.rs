//! Business-event definition loading and validation.
//!
//! This module implements the ConfigLoader trait for business-event
//! definitions, one definition per JSON file. Definitions are loaded as
//! templates: `${TOKEN}` placeholders in condition operands are resolved
//! later, when the catalog is specialized for a network.

use std::{collections::HashSet, path::Path};

use async_trait::async_trait;

use crate::models::{
	config::{ConfigError, ConfigLoader},
	BusinessEventDefinition,
};

#[async_trait]
impl ConfigLoader for BusinessEventDefinition {
	/// Load all business-event definitions from a directory.
	///
	/// Reads and parses every JSON file in the specified directory, keyed by
	/// file stem and visited in name order.
	async fn load_all(path: Option<&Path>) -> Result<Vec<(String, Self)>, ConfigError> {
		let definition_dir = path.unwrap_or(Path::new(crate::utils::DEFAULT_BUSINESS_EVENTS_DIR));

		if !definition_dir.exists() {
			return Err(ConfigError::file_error(
				"business events directory not found",
			));
		}

		let mut files = Vec::new();
		let mut entries = tokio::fs::read_dir(definition_dir).await?;
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

			let definition = Self::load_from_path(&path).await?;
			pairs.push((name, definition));
		}

		Ok(pairs)
	}

	/// Load a business-event definition from a single file.
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let contents = tokio::fs::read_to_string(path).await?;
		let definition: BusinessEventDefinition = serde_json::from_str(&contents)?;

		definition.validate()?;

		Ok(definition)
	}

	/// Validate the definition
	fn validate(&self) -> Result<(), ConfigError> {
		if self.name.is_empty() {
			return Err(ConfigError::validation_error(
				"business event name is required",
			));
		}

		if self.requirements.is_empty() {
			return Err(ConfigError::validation_error(format!(
				"business event '{}' declares no event requirements",
				self.name
			)));
		}

		let mut aliases = HashSet::new();
		for requirement in &self.requirements {
			if requirement.event_name.is_empty() {
				return Err(ConfigError::validation_error(format!(
					"business event '{}' has a requirement without an event name",
					self.name
				)));
			}
			if requirement.alias.is_empty() {
				return Err(ConfigError::validation_error(format!(
					"business event '{}' has a requirement without an alias",
					self.name
				)));
			}
			if !aliases.insert(requirement.alias.as_str()) {
				return Err(ConfigError::validation_error(format!(
					"business event '{}' binds alias '{}' more than once",
					self.name, requirement.alias
				)));
			}
		}

		for rule in &self.rules {
			for alias in [&rule.first_alias, &rule.second_alias] {
				if !aliases.contains(alias.as_str()) {
					return Err(ConfigError::validation_error(format!(
						"business event '{}' rule references unbound alias '{}'",
						self.name, alias
					)));
				}
			}
		}

		for param in &self.param_defs {
			if param.output_name.is_empty() {
				return Err(ConfigError::validation_error(format!(
					"business event '{}' has a parameter without an output name",
					self.name
				)));
			}
			if !aliases.contains(param.source_alias.as_str()) {
				return Err(ConfigError::validation_error(format!(
					"business event '{}' parameter references unbound alias '{}'",
					self.name, param.source_alias
				)));
			}
		}

		Ok(())
	}
}
