// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use super::Diagnostic;

pub fn configuration_not_found(section: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("configuration `{}` not found in `{}`", name, section),
		label: Some(format!("no entry named `{}`", name)),
		help: Some(format!("add a `{}.{}` block to the application configuration", section, name)),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_options(name: &str, reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_002".to_string(),
		message: format!("configuration `{}` has invalid options: {}", name, reason),
		label: Some("options could not be deserialized".to_string()),
		help: Some("expected string values for `configuration` and `name`, and a string or null for `sql_logger`"
			.to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn configuration_parse_error(reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_003".to_string(),
		message: format!("failed to parse configuration: {}", reason),
		label: None,
		help: Some("configuration must be a valid JSON document".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn configuration_io_error(path: impl Display, reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_004".to_string(),
		message: format!("failed to read configuration file `{}`: {}", path, reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
