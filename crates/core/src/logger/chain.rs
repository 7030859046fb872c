// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, sync::Arc};

use parking_lot::RwLock;

use super::{Param, SqlLogger};

/// Forwards every notification to its loggers, in the order they were added
#[derive(Default)]
pub struct LoggerChain {
	loggers: RwLock<Vec<Arc<dyn SqlLogger>>>,
}

impl LoggerChain {
	pub fn new() -> Self {
		Self {
			loggers: RwLock::new(Vec::new()),
		}
	}

	pub fn with_loggers(loggers: Vec<Arc<dyn SqlLogger>>) -> Self {
		Self {
			loggers: RwLock::new(loggers),
		}
	}

	pub fn add_logger(&self, logger: Arc<dyn SqlLogger>) {
		self.loggers.write().push(logger);
	}

	pub fn loggers(&self) -> Vec<Arc<dyn SqlLogger>> {
		self.loggers.read().clone()
	}

	pub fn is_empty(&self) -> bool {
		self.loggers.read().is_empty()
	}

	pub fn len(&self) -> usize {
		self.loggers.read().len()
	}
}

impl SqlLogger for LoggerChain {
	fn start_query(&self, sql: &str, params: &[Param]) {
		for logger in self.loggers.read().iter() {
			logger.start_query(sql, params);
		}
	}

	fn stop_query(&self) {
		for logger in self.loggers.read().iter() {
			logger.stop_query();
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
