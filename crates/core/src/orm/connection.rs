// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite connection reporting every statement to the SQL logger installed on
//! its [`OrmConfiguration`].

use std::{path::Path, sync::Arc};

use rusqlite::params_from_iter;
use sqlwatch_type::{
	Result,
	diagnostic::sql::{connection_open_failed, sql_execution_failed},
	error,
};
use tracing::instrument;

use super::OrmConfiguration;
use crate::logger::Param;

pub struct Connection {
	inner: rusqlite::Connection,
	configuration: Arc<OrmConfiguration>,
}

impl Connection {
	#[instrument(name = "orm::connection::open_in_memory", level = "debug", skip(configuration))]
	pub fn open_in_memory(configuration: Arc<OrmConfiguration>) -> Result<Self> {
		let inner = rusqlite::Connection::open_in_memory()
			.map_err(|e| error!(connection_open_failed(":memory:", e)))?;
		Ok(Self {
			inner,
			configuration,
		})
	}

	#[instrument(name = "orm::connection::open", level = "debug", skip(path, configuration), fields(db_path = %path.as_ref().display()))]
	pub fn open(path: impl AsRef<Path>, configuration: Arc<OrmConfiguration>) -> Result<Self> {
		let path = path.as_ref();
		let inner = rusqlite::Connection::open(path)
			.map_err(|e| error!(connection_open_failed(&path.display().to_string(), e)))?;
		Ok(Self {
			inner,
			configuration,
		})
	}

	pub fn configuration(&self) -> &Arc<OrmConfiguration> {
		&self.configuration
	}

	/// Execute a single statement, returning the number of changed rows
	#[instrument(name = "orm::connection::execute", level = "trace", skip(self, params))]
	pub fn execute(&self, sql: &str, params: &[Param]) -> Result<usize> {
		self.logged(sql, params, |conn| conn.execute(sql, params_from_iter(params.iter())))
	}

	#[instrument(name = "orm::connection::query", level = "trace", skip(self, params))]
	pub fn query(&self, sql: &str, params: &[Param]) -> Result<Vec<Vec<Param>>> {
		self.logged(sql, params, |conn| {
			let mut stmt = conn.prepare(sql)?;
			let columns = stmt.column_count();
			let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
				(0..columns).map(|idx| row.get::<_, Param>(idx)).collect::<rusqlite::Result<Vec<_>>>()
			})?;
			rows.collect::<rusqlite::Result<Vec<_>>>()
		})
	}

	#[instrument(name = "orm::connection::execute_batch", level = "trace", skip(self))]
	pub fn execute_batch(&self, sql: &str) -> Result<()> {
		self.logged(sql, &[], |conn| conn.execute_batch(sql))
	}

	fn logged<R>(
		&self,
		sql: &str,
		params: &[Param],
		f: impl FnOnce(&rusqlite::Connection) -> rusqlite::Result<R>,
	) -> Result<R> {
		let logger = self.configuration.sql_logger();
		if let Some(logger) = &logger {
			logger.start_query(sql, params);
		}

		let result = f(&self.inner);

		if let Some(logger) = &logger {
			logger.stop_query();
		}

		result.map_err(|e| error!(sql_execution_failed(sql, e)))
	}
}
