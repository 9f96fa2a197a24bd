//! Configuration for the Pancake Lab order service.
//!
//! Configuration is loaded from a TOML file and validated before use. It
//! covers the service identity, the audit sink implementation to wire in,
//! and optional menu price overrides keyed by the catalog spelling of each
//! ingredient:
//!
//! ```toml
//! [service]
//! name = "pancake-lab"
//! audit_sink = "log"
//!
//! [menu.prices]
//! HAZELNUT = "2.50"
//! ```

use lab_types::Ingredient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Audit sink implementations selectable from configuration.
pub const KNOWN_AUDIT_SINKS: [&str; 2] = ["log", "memory"];

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
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the order service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
	/// Configuration specific to the service instance.
	#[serde(default)]
	pub service: ServiceConfig,
	/// Optional menu adjustments.
	#[serde(default)]
	pub menu: MenuConfig,
}

/// Configuration specific to the service instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
	/// Human-readable name for this instance, used in logs.
	#[serde(default = "default_service_name")]
	pub name: String,
	/// Which audit sink implementation to use (`log` or `memory`).
	#[serde(default = "default_audit_sink")]
	pub audit_sink: String,
}

impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			name: default_service_name(),
			audit_sink: default_audit_sink(),
		}
	}
}

fn default_service_name() -> String {
	"pancake-lab".to_string()
}

fn default_audit_sink() -> String {
	"log".to_string()
}

/// Menu adjustments applied on top of the default catalog.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MenuConfig {
	/// Price overrides keyed by ingredient, decimal amounts as strings.
	#[serde(default)]
	pub prices: HashMap<Ingredient, Decimal>,
}

impl Config {
	/// Loads and validates a configuration file.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		let config: Config = toml::from_str(&content)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks invariants that the TOML schema cannot express.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !KNOWN_AUDIT_SINKS.contains(&self.service.audit_sink.as_str()) {
			return Err(ConfigError::Validation(format!(
				"unknown audit sink implementation: {}",
				self.service.audit_sink
			)));
		}
		for (ingredient, price) in &self.menu.prices {
			if price.is_sign_negative() {
				return Err(ConfigError::Validation(format!(
					"price override for {ingredient} must not be negative, got {price}"
				)));
			}
		}
		Ok(())
	}
}
