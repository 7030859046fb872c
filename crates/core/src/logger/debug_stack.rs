// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	sync::atomic::{AtomicBool, Ordering},
	time::Instant,
};

use parking_lot::Mutex;
use serde::Serialize;

use super::{Param, SqlLogger};

/// A statement recorded by [`DebugStack`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedQuery {
	pub sql: String,
	pub params: Vec<Param>,
	/// `None` while the statement is still running
	pub execution_ms: Option<f64>,
}

/// In-memory logger keeping every statement with its execution time
///
/// Only one statement is tracked as running at a time. When several
/// connections share the stack and run statements concurrently, a `stop_query`
/// times whichever statement was started last.
pub struct DebugStack {
	enabled: AtomicBool,
	state: Mutex<DebugStackState>,
}

#[derive(Default)]
struct DebugStackState {
	queries: Vec<LoggedQuery>,
	current: Option<(usize, Instant)>,
}

impl DebugStack {
	pub fn new() -> Self {
		Self {
			enabled: AtomicBool::new(true),
			state: Mutex::new(DebugStackState::default()),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled.load(Ordering::Acquire)
	}

	/// A disabled stack ignores start/stop notifications but keeps what it recorded so far
	pub fn set_enabled(&self, enabled: bool) {
		self.enabled.store(enabled, Ordering::Release);
	}

	pub fn queries(&self) -> Vec<LoggedQuery> {
		self.state.lock().queries.clone()
	}

	/// Index of the statement currently running, if any
	pub fn current_query(&self) -> Option<usize> {
		self.state.lock().current.map(|(index, _)| index)
	}

	pub fn len(&self) -> usize {
		self.state.lock().queries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn clear(&self) {
		let mut state = self.state.lock();
		state.queries.clear();
		state.current = None;
	}
}

impl Default for DebugStack {
	fn default() -> Self {
		Self::new()
	}
}

impl SqlLogger for DebugStack {
	fn start_query(&self, sql: &str, params: &[Param]) {
		if !self.is_enabled() {
			return;
		}
		let mut state = self.state.lock();
		state.queries.push(LoggedQuery {
			sql: sql.to_string(),
			params: params.to_vec(),
			execution_ms: None,
		});
		let index = state.queries.len() - 1;
		state.current = Some((index, Instant::now()));
	}

	fn stop_query(&self) {
		if !self.is_enabled() {
			return;
		}
		let mut state = self.state.lock();
		if let Some((index, started)) = state.current.take() {
			if let Some(query) = state.queries.get_mut(index) {
				query.execution_ms = Some(started.elapsed().as_secs_f64() * 1000.0);
			}
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::{DebugStack, SqlLogger};
	use crate::logger::Param;

	#[test]
	fn test_records_query_with_time() {
		let stack = DebugStack::new();
		stack.start_query("SELECT * FROM users WHERE id = ?", &[Param::from(1)]);
		assert_eq!(stack.current_query(), Some(0));
		assert_eq!(stack.queries()[0].execution_ms, None);

		stack.stop_query();

		let queries = stack.queries();
		assert_eq!(queries.len(), 1);
		assert_eq!(queries[0].sql, "SELECT * FROM users WHERE id = ?");
		assert_eq!(queries[0].params, vec![Param::Integer(1)]);
		assert!(queries[0].execution_ms.unwrap() >= 0.0);
		assert_eq!(stack.current_query(), None);
	}

	#[test]
	fn test_keeps_order() {
		let stack = DebugStack::new();
		for sql in ["BEGIN", "INSERT INTO t VALUES (1)", "COMMIT"] {
			stack.start_query(sql, &[]);
			stack.stop_query();
		}
		let sqls: Vec<String> = stack.queries().into_iter().map(|q| q.sql).collect();
		assert_eq!(sqls, vec!["BEGIN", "INSERT INTO t VALUES (1)", "COMMIT"]);
	}

	#[test]
	fn test_disabled_ignores_queries() {
		let stack = DebugStack::new();
		stack.set_enabled(false);
		stack.start_query("SELECT 1", &[]);
		stack.stop_query();
		assert!(stack.is_empty());

		stack.set_enabled(true);
		stack.start_query("SELECT 2", &[]);
		stack.stop_query();
		assert_eq!(stack.len(), 1);
	}

	#[test]
	fn test_stop_without_start_is_noop() {
		let stack = DebugStack::new();
		stack.stop_query();
		assert!(stack.is_empty());
	}

	#[test]
	fn test_clear() {
		let stack = DebugStack::new();
		stack.start_query("SELECT 1", &[]);
		stack.clear();
		assert!(stack.is_empty());
		assert_eq!(stack.current_query(), None);
	}
}
