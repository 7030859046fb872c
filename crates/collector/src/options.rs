// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Options read from a `doctrine.sql_logger_collector.<name>` block
pub trait CollectorOptions: DeserializeOwned {
	/// Service id of a logger to resolve instead of creating a fresh one
	fn sql_logger(&self) -> Option<&str>;

	/// Service id of the ORM configuration to install the logger on
	fn configuration(&self) -> &str;

	fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlLoggerCollectorOptions {
	pub sql_logger: Option<String>,
	pub configuration: String,
	pub name: String,
}

impl Default for SqlLoggerCollectorOptions {
	fn default() -> Self {
		Self {
			sql_logger: None,
			configuration: "doctrine.configuration.orm_default".to_string(),
			name: "orm_default".to_string(),
		}
	}
}

impl CollectorOptions for SqlLoggerCollectorOptions {
	fn sql_logger(&self) -> Option<&str> {
		self.sql_logger.as_deref()
	}

	fn configuration(&self) -> &str {
		&self.configuration
	}

	fn name(&self) -> &str {
		&self.name
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{CollectorOptions, SqlLoggerCollectorOptions};

	#[test]
	fn test_defaults_for_empty_block() {
		let options: SqlLoggerCollectorOptions = serde_json::from_value(json!({})).unwrap();
		assert_eq!(options, SqlLoggerCollectorOptions::default());
		assert_eq!(options.configuration(), "doctrine.configuration.orm_default");
		assert_eq!(options.name(), "orm_default");
		assert_eq!(options.sql_logger(), None);
	}

	#[test]
	fn test_null_sql_logger() {
		let options: SqlLoggerCollectorOptions = serde_json::from_value(json!({
			"sql_logger": null,
			"configuration": "orm_config",
			"name": "reporting"
		}))
		.unwrap();
		assert_eq!(options.sql_logger(), None);
		assert_eq!(options.configuration(), "orm_config");
		assert_eq!(options.name(), "reporting");
	}

	#[test]
	fn test_rejects_wrong_types() {
		let result = serde_json::from_value::<SqlLoggerCollectorOptions>(json!({ "configuration": 42 }));
		assert!(result.is_err());
	}
}
