use std::path::Path;

use async_trait::async_trait;

mod business_event_config;
mod error;
mod signature_config;

pub use error::ConfigError;

/// Common interface for loading catalog files.
///
/// Catalogs are JSON files loaded once at startup; loading is asynchronous
/// but completes before any decode call is issued against the loaded data.
#[async_trait]
pub trait ConfigLoader: Sized {
	/// Load every catalog file in the directory, keyed by file stem.
	async fn load_all(path: Option<&Path>) -> Result<Vec<(String, Self)>, ConfigError>;

	/// Load a single catalog file.
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Validate the loaded catalog entry.
	fn validate(&self) -> Result<(), ConfigError>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
