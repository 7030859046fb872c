// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::sync::Arc;

use sqlwatch_collector::{Collector, SqlLoggerCollectorFactory};
use sqlwatch_core::{
	CONFIG_SERVICE, Config, Connection, OrmConfiguration, Param, Result, SqlLogger, TracingSqlLogger,
	ioc::{IocContainer, ServiceFactory},
};
use tracing::info;

const DEFAULTS: &str = r#"{
	"doctrine": {
		"sql_logger_collector": {
			"orm_default": {
				"name": "orm_default",
				"configuration": "doctrine.configuration.orm_default"
			}
		}
	}
}"#;

fn setup_logging() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.try_init();
}

fn main() -> Result<()> {
	setup_logging();

	let mut config = Config::from_json_str(DEFAULTS)?;
	if let Some(path) = std::env::args().nth(1) {
		config = config.merge(&Config::from_path(path)?);
	}

	let configuration = Arc::new(OrmConfiguration::new());
	let tracing_logger: Arc<dyn SqlLogger> = Arc::new(TracingSqlLogger::new());
	configuration.set_sql_logger(Some(tracing_logger));

	let ioc = IocContainer::new()
		.register(CONFIG_SERVICE, config)
		.register("doctrine.configuration.orm_default", configuration.clone());

	let collector = SqlLoggerCollectorFactory::new("orm_default").register(&ioc)?;
	info!(collector = collector.name(), services = ?ioc.service_ids(), "collector registered");

	let conn = Connection::open_in_memory(configuration)?;
	conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, score REAL)")?;
	for (name, score) in [("alice", Some(9.5)), ("bob", None), ("carol", Some(7.25))] {
		conn.execute("INSERT INTO users (name, score) VALUES (?1, ?2)", &[Param::from(name), Param::from(score)])?;
	}
	let rows = conn.query("SELECT id, name FROM users WHERE score IS NOT NULL ORDER BY id", &[])?;
	info!(rows = rows.len(), "scored users loaded");

	let report = collector.collect();
	println!("{}", serde_json::to_string_pretty(&report)?);

	Ok(())
}
