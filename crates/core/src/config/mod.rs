// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Application-wide configuration store.
//!
//! The configuration is an immutable JSON tree. Services look up their own
//! block by path, e.g. `["doctrine", "sql_logger_collector", "orm_default"]`.

use std::{fs, path::Path, sync::Arc};

use serde_json::{Map, Value};
use sqlwatch_type::{
	Result,
	diagnostic::config::{configuration_io_error, configuration_parse_error},
	error,
};
use tracing::instrument;

/// Id under which the application configuration is registered in the IoC container
pub const CONFIG_SERVICE: &str = "config";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	root: Arc<Value>,
}

impl Config {
	pub fn new() -> Self {
		Self::from_value(Value::Object(Map::new()))
	}

	pub fn from_value(value: Value) -> Self {
		Self {
			root: Arc::new(value),
		}
	}

	pub fn from_json_str(text: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(text).map_err(|e| error!(configuration_parse_error(e)))?;
		Ok(Self::from_value(value))
	}

	#[instrument(name = "config::from_path", level = "debug", skip(path), fields(config_path = %path.as_ref().display()))]
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|e| error!(configuration_io_error(path.display(), e)))?;
		Self::from_json_str(&text)
	}

	/// Nested lookup. `null` entries are treated as absent.
	pub fn get(&self, path: &[&str]) -> Option<&Value> {
		let mut current = self.root.as_ref();
		for segment in path {
			current = current.as_object()?.get(*segment)?;
		}
		if current.is_null() {
			None
		} else {
			Some(current)
		}
	}

	/// Deep-merge `other` over `self`; objects merge key by key, anything else in `other` wins
	pub fn merge(&self, other: &Config) -> Config {
		let mut merged = self.root.as_ref().clone();
		merge_values(&mut merged, other.root.as_ref());
		Config::from_value(merged)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

impl From<Value> for Config {
	fn from(value: Value) -> Self {
		Self::from_value(value)
	}
}

fn merge_values(base: &mut Value, overlay: &Value) {
	match (base, overlay) {
		(Value::Object(base), Value::Object(overlay)) => {
			for (key, value) in overlay {
				match base.get_mut(key) {
					Some(existing) => merge_values(existing, value),
					None => {
						base.insert(key.clone(), value.clone());
					}
				}
			}
		}
		(base, overlay) => *base = overlay.clone(),
	}
}
