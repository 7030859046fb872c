// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, time::Instant};

use parking_lot::Mutex;
use tracing::debug;

use super::{Param, SqlLogger};

/// Emits every statement as a `tracing` event on the `sqlwatch::sql` target
///
/// Like [`DebugStack`](super::DebugStack), it tracks a single running statement,
/// so elapsed times are only exact for sequential use.
#[derive(Default)]
pub struct TracingSqlLogger {
	current: Mutex<Option<(String, Instant)>>,
}

impl TracingSqlLogger {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SqlLogger for TracingSqlLogger {
	fn start_query(&self, sql: &str, params: &[Param]) {
		debug!(target: "sqlwatch::sql", sql, params = ?params, "query started");
		*self.current.lock() = Some((sql.to_string(), Instant::now()));
	}

	fn stop_query(&self) {
		if let Some((sql, started)) = self.current.lock().take() {
			let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
			debug!(target: "sqlwatch::sql", sql = %sql, elapsed_ms, "query finished");
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
