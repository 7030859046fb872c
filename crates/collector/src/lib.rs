// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

//! SQL logger collector.
//!
//! [`SqlLoggerCollectorFactory`] reads a named block from the application
//! configuration, installs a [`DebugStack`](sqlwatch_core::DebugStack) (or a
//! logger resolved from the IoC container) on the target ORM configuration,
//! chaining it behind any logger already installed there, and hands back a
//! [`SqlLoggerCollector`] exposing what that logger recorded.
//!
//! ```ignore
//! let ioc = IocContainer::new()
//!     .register(CONFIG_SERVICE, config)
//!     .register("doctrine.configuration.orm_default", Arc::new(OrmConfiguration::new()));
//!
//! let collector = SqlLoggerCollectorFactory::new("orm_default").register(&ioc)?;
//! assert_eq!(collector.name(), "sql_logger_collector.orm_default");
//! ```

mod collector;
mod factory;
mod options;

pub use collector::{AutoHide, COLLECTOR_PRIORITY, Collector, CollectorReport, SqlLoggerCollector};
pub use factory::{COLLECTOR_ID_PREFIX, COLLECTOR_SECTION, SERVICE_NAME_PREFIX, SqlLoggerCollectorFactory};
pub use options::{CollectorOptions, SqlLoggerCollectorOptions};
