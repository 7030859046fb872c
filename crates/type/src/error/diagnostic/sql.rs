// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use super::Diagnostic;

pub fn sql_execution_failed(sql: &str, reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "SQL_001".to_string(),
		message: format!("failed to execute statement: {}", reason),
		label: Some(sql.to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn connection_open_failed(path: &str, reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "SQL_002".to_string(),
		message: format!("failed to open database `{}`: {}", path, reason),
		label: Some(path.to_string()),
		help: Some("check that the parent directory exists and is writable".to_string()),
		notes: vec![],
		cause: None,
	}
}
