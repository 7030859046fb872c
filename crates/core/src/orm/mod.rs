// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod configuration;
mod connection;

pub use configuration::OrmConfiguration;
pub use connection::Connection;
