// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, Formatter},
	sync::Arc,
};

use parking_lot::RwLock;

use crate::logger::SqlLogger;

/// ORM-level settings shared by every connection created from it.
///
/// Registered in the IoC container as `Arc<OrmConfiguration>`; the installed
/// SQL logger can be swapped at any time and is picked up by the next statement.
#[derive(Default)]
pub struct OrmConfiguration {
	sql_logger: RwLock<Option<Arc<dyn SqlLogger>>>,
}

impl OrmConfiguration {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn sql_logger(&self) -> Option<Arc<dyn SqlLogger>> {
		self.sql_logger.read().clone()
	}

	pub fn set_sql_logger(&self, logger: Option<Arc<dyn SqlLogger>>) {
		*self.sql_logger.write() = logger;
	}

	pub fn has_sql_logger(&self) -> bool {
		self.sql_logger.read().is_some()
	}
}

impl Debug for OrmConfiguration {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OrmConfiguration").field("has_sql_logger", &self.has_sql_logger()).finish()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::OrmConfiguration;
	use crate::logger::{DebugStack, SqlLogger};

	#[test]
	fn test_set_and_replace_logger() {
		let configuration = OrmConfiguration::new();
		assert!(configuration.sql_logger().is_none());

		let first: Arc<dyn SqlLogger> = Arc::new(DebugStack::new());
		configuration.set_sql_logger(Some(first.clone()));
		assert!(Arc::ptr_eq(&configuration.sql_logger().unwrap(), &first));

		configuration.set_sql_logger(None);
		assert!(!configuration.has_sql_logger());
	}

	#[test]
	fn test_debug_output() {
		let configuration = OrmConfiguration::new();
		assert_eq!(format!("{:?}", configuration), "OrmConfiguration { has_sql_logger: false }");
	}
}
