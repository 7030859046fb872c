// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQL loggers.
//!
//! A [`SqlLogger`] is notified before and after every statement a
//! [`Connection`](crate::orm::Connection) executes. Loggers are shared as
//! `Arc<dyn SqlLogger>` and synchronize internally.

mod chain;
mod debug_stack;
mod param;
mod trace;

use std::any::Any;

pub use chain::LoggerChain;
pub use debug_stack::{DebugStack, LoggedQuery};
pub use param::Param;
pub use trace::TracingSqlLogger;

pub trait SqlLogger: Send + Sync + 'static {
	/// Called right before a statement is executed
	fn start_query(&self, sql: &str, params: &[Param]);

	/// Called once the statement started last has finished, successfully or not
	fn stop_query(&self);

	fn as_any(&self) -> &dyn Any;
}
