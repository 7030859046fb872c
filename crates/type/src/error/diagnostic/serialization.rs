// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use super::Diagnostic;

pub fn json_error(reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "SERDE_001".to_string(),
		message: format!("JSON serialization error: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
