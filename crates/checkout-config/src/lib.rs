//! Configuration module for the checkout workflow.
//!
//! Configuration is loaded from a TOML file and validated before any
//! component is built. It covers the three external facts the workflow
//! cannot derive on its own: where the backend lives, how to reach the
//! shipping-rate provider, and which city every shipment originates from.

use checkout_types::{City, SecretString};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Keep the message, drop the input dump.
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure for the checkout workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	/// Backend that serves the product list and accepts orders.
	pub backend: BackendConfig,
	/// External shipping-rate provider that serves the city list.
	pub provider: ProviderConfig,
	/// Fixed origin city for the session. Not user-editable.
	pub origin: OriginConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
	/// Base URL, e.g. `http://localhost:5000`.
	pub url: String,
	/// Request timeout in seconds.
	#[serde(default = "default_timeout_seconds")]
	pub timeout_seconds: u64,
}

/// Shipping-rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
	/// Base URL, e.g. `https://api.rajaongkir.com/starter`.
	pub url: String,
	/// Provider-issued key sent as the `key` request header.
	pub api_key: SecretString,
}

/// Fixed origin city.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginConfig {
	pub city_id: String,
	pub city_name: String,
}

impl OriginConfig {
	/// The origin as a catalog city value.
	pub fn city(&self) -> City {
		City::new(self.city_id.clone(), self.city_name.clone())
	}
}

/// Returns the default request timeout in seconds.
fn default_timeout_seconds() -> u64 {
	30
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		Self::from_toml_str(&content)
	}

	/// Parses and validates configuration from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Config = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		validate_url("backend.url", &self.backend.url)?;
		validate_url("provider.url", &self.provider.url)?;
		if self.backend.timeout_seconds == 0 {
			return Err(ConfigError::Validation(
				"backend.timeout_seconds must be positive".to_string(),
			));
		}
		if self.provider.api_key.is_empty() {
			return Err(ConfigError::Validation(
				"provider.api_key must not be empty".to_string(),
			));
		}
		if self.origin.city_id.is_empty() {
			return Err(ConfigError::Validation(
				"origin.city_id must not be empty".to_string(),
			));
		}
		if self.origin.city_name.is_empty() {
			return Err(ConfigError::Validation(
				"origin.city_name must not be empty".to_string(),
			));
		}
		Ok(())
	}
}

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
	if url.starts_with("http://") || url.starts_with("https://") {
		Ok(())
	} else {
		Err(ConfigError::Validation(format!(
			"{} must start with http:// or https://, got '{}'",
			field, url
		)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	const VALID_CONFIG: &str = r#"
[backend]
url = "http://localhost:5000"

[provider]
url = "https://api.rajaongkir.com/starter"
api_key = "test-key"

[origin]
city_id = "1"
city_name = "Bandung"
"#;

	#[tokio::test]
	async fn loads_valid_config_from_file() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("config.toml");
		fs::write(&config_path, VALID_CONFIG).unwrap();

		let config = Config::from_file(&config_path).await.unwrap();
		assert_eq!(config.backend.url, "http://localhost:5000");
		assert_eq!(config.backend.timeout_seconds, 30);
		assert_eq!(config.provider.api_key.expose_secret(), "test-key");
		assert_eq!(config.origin.city(), City::new("1", "Bandung"));
	}

	#[test]
	fn rejects_missing_section() {
		let result = Config::from_toml_str("[backend]\nurl = \"http://localhost:5000\"\n");
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}

	#[test]
	fn rejects_non_http_url() {
		let content = VALID_CONFIG.replace("http://localhost:5000", "localhost:5000");
		let result = Config::from_toml_str(&content);
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn rejects_empty_api_key() {
		let content = VALID_CONFIG.replace("test-key", "");
		let result = Config::from_toml_str(&content);
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn rejects_zero_timeout() {
		let content = VALID_CONFIG.replace(
			"url = \"http://localhost:5000\"",
			"url = \"http://localhost:5000\"\ntimeout_seconds = 0",
		);
		let result = Config::from_toml_str(&content);
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}
}
