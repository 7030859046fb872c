// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{marker::PhantomData, sync::Arc};

use sqlwatch_core::{
	CONFIG_SERVICE, Config, DebugStack, LoggerChain, OrmConfiguration, SqlLogger,
	ioc::{IocContainer, ServiceFactory},
};
use sqlwatch_type::{
	Result,
	diagnostic::config::{configuration_not_found, invalid_options},
	error, return_error,
};
use tracing::{debug, instrument};

use crate::{SqlLoggerCollector, SqlLoggerCollectorOptions, options::CollectorOptions};

/// Configuration path holding one options block per collector name
pub const COLLECTOR_SECTION: [&str; 2] = ["doctrine", "sql_logger_collector"];

/// Prefix of the identifier carried by created collectors
pub const COLLECTOR_ID_PREFIX: &str = "sql_logger_collector.";

/// Prefix of the IoC id created collectors are registered under
pub const SERVICE_NAME_PREFIX: &str = "doctrine.sql_logger_collector.";

/// Factory for [`SqlLoggerCollector`] instances bound to one configuration block
pub struct SqlLoggerCollectorFactory<O = SqlLoggerCollectorOptions> {
	name: String,
	_options: PhantomData<fn() -> O>,
}

impl SqlLoggerCollectorFactory {
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_options(name)
	}
}

impl<O: CollectorOptions> SqlLoggerCollectorFactory<O> {
	/// Create a factory reading its block into a custom options type
	pub fn with_options(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			_options: PhantomData,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	fn options(&self, ioc: &IocContainer) -> Result<O> {
		let config: Config = ioc.resolve(CONFIG_SERVICE)?;
		let [doctrine, section] = COLLECTOR_SECTION;

		let Some(block) = config.get(&[doctrine, section, self.name.as_str()]) else {
			return_error!(configuration_not_found(&COLLECTOR_SECTION.join("."), &self.name));
		};

		serde_json::from_value(block.clone()).map_err(|e| error!(invalid_options(&self.name, e)))
	}
}

impl<O: CollectorOptions> ServiceFactory for SqlLoggerCollectorFactory<O> {
	type Service = SqlLoggerCollector;

	fn service_name(&self) -> String {
		format!("{}{}", SERVICE_NAME_PREFIX, self.name)
	}

	#[instrument(name = "collector::factory::create", level = "debug", skip(self, ioc), fields(name = %self.name))]
	fn create(&self, ioc: &IocContainer) -> Result<SqlLoggerCollector> {
		let options = self.options(ioc)?;

		let logger: Arc<DebugStack> = match options.sql_logger().filter(|id| !id.is_empty()) {
			Some(id) => ioc.resolve(id)?,
			None => Arc::new(DebugStack::new()),
		};

		let configuration: Arc<OrmConfiguration> = ioc.resolve(options.configuration())?;

		let installed: Arc<dyn SqlLogger> = logger.clone();
		match configuration.sql_logger() {
			Some(existing) => {
				debug!(configuration = options.configuration(), "chaining behind existing sql logger");
				let chain = LoggerChain::with_loggers(vec![existing, installed]);
				configuration.set_sql_logger(Some(Arc::new(chain)));
			}
			None => {
				debug!(configuration = options.configuration(), "installing sql logger");
				configuration.set_sql_logger(Some(installed));
			}
		}

		Ok(SqlLoggerCollector::new(logger, format!("{}{}", COLLECTOR_ID_PREFIX, options.name())))
	}
}
