// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, Formatter},
	sync::Arc,
};

use serde::Serialize;
use sqlwatch_core::{DebugStack, LoggedQuery};

pub const COLLECTOR_PRIORITY: i32 = 10;

/// Source of diagnostics shown by inspection tooling
pub trait Collector {
	fn name(&self) -> &str;

	/// Higher priorities are displayed first
	fn priority(&self) -> i32;

	fn collect(&self) -> CollectorReport;
}

/// Collectors that may be left out of a display when they have nothing to show
pub trait AutoHide {
	fn can_hide(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectorReport {
	pub name: String,
	pub query_count: usize,
	pub query_time_ms: f64,
	pub queries: Vec<LoggedQuery>,
}

/// Exposes the statements recorded by a [`DebugStack`] under a fixed identifier
#[derive(Clone)]
pub struct SqlLoggerCollector {
	logger: Arc<DebugStack>,
	name: String,
}

impl SqlLoggerCollector {
	pub fn new(logger: Arc<DebugStack>, name: impl Into<String>) -> Self {
		Self {
			logger,
			name: name.into(),
		}
	}

	pub fn logger(&self) -> &Arc<DebugStack> {
		&self.logger
	}

	pub fn queries(&self) -> Vec<LoggedQuery> {
		self.logger.queries()
	}

	pub fn query_count(&self) -> usize {
		self.logger.len()
	}

	/// Total execution time of all finished statements, in milliseconds
	pub fn query_time(&self) -> f64 {
		self.logger.queries().iter().filter_map(|q| q.execution_ms).sum()
	}
}

impl Collector for SqlLoggerCollector {
	fn name(&self) -> &str {
		&self.name
	}

	fn priority(&self) -> i32 {
		COLLECTOR_PRIORITY
	}

	fn collect(&self) -> CollectorReport {
		let queries = self.logger.queries();
		CollectorReport {
			name: self.name.clone(),
			query_count: queries.len(),
			query_time_ms: queries.iter().filter_map(|q| q.execution_ms).sum(),
			queries,
		}
	}
}

impl AutoHide for SqlLoggerCollector {
	fn can_hide(&self) -> bool {
		self.logger.is_empty()
	}
}

impl Debug for SqlLoggerCollector {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SqlLoggerCollector")
			.field("name", &self.name)
			.field("query_count", &self.query_count())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use sqlwatch_core::{DebugStack, Param, SqlLogger};

	use super::{AutoHide, COLLECTOR_PRIORITY, Collector, SqlLoggerCollector};

	#[test]
	fn test_empty_collector_can_hide() {
		let collector = SqlLoggerCollector::new(Arc::new(DebugStack::new()), "sql_logger_collector.orm_default");
		assert!(collector.can_hide());
		assert_eq!(collector.query_count(), 0);
		assert_eq!(collector.query_time(), 0.0);
		assert_eq!(collector.priority(), COLLECTOR_PRIORITY);
	}

	#[test]
	fn test_collect_reports_recorded_queries() {
		let stack = Arc::new(DebugStack::new());
		let collector = SqlLoggerCollector::new(stack.clone(), "sql_logger_collector.orm_default");

		stack.start_query("SELECT * FROM users WHERE id = ?1", &[Param::from(3)]);
		stack.stop_query();
		stack.start_query("SELECT 1", &[]);

		let report = collector.collect();
		assert_eq!(report.name, "sql_logger_collector.orm_default");
		assert_eq!(report.query_count, 2);
		assert_eq!(report.queries[0].params, vec![Param::Integer(3)]);
		assert_eq!(report.queries[1].execution_ms, None);
		assert_eq!(report.query_time_ms, report.queries[0].execution_ms.unwrap());
		assert!(!collector.can_hide());
	}

	#[test]
	fn test_report_serializes() {
		let stack = Arc::new(DebugStack::new());
		stack.start_query("SELECT ?1", &[Param::from("x")]);
		let collector = SqlLoggerCollector::new(stack, "sql_logger_collector.a");

		let json = serde_json::to_value(collector.collect()).unwrap();
		assert_eq!(json["name"], "sql_logger_collector.a");
		assert_eq!(json["query_count"], 1);
		assert_eq!(json["queries"][0]["sql"], "SELECT ?1");
		assert_eq!(json["queries"][0]["params"][0], "x");
		assert!(json["queries"][0]["execution_ms"].is_null());
	}
}
