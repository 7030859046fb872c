// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub mod config;
pub mod logger;
pub mod orm;
pub mod util;

pub use config::{CONFIG_SERVICE, Config};
pub use logger::{DebugStack, LoggedQuery, LoggerChain, Param, SqlLogger, TracingSqlLogger};
pub use orm::{Connection, OrmConfiguration};
pub use sqlwatch_type::{Error, Result, diagnostic, err, error, return_error};
pub use util::ioc;
