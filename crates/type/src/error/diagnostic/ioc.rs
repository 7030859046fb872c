// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn service_not_registered(id: &str) -> Diagnostic {
	Diagnostic {
		code: "IOC_001".to_string(),
		message: format!("service `{}` not registered in IoC container", id),
		label: None,
		help: Some(format!("register a service under `{}` before resolving it", id)),
		notes: vec![],
		cause: None,
	}
}

pub fn service_type_mismatch(id: &str, expected: &str, registered: &str) -> Diagnostic {
	Diagnostic {
		code: "IOC_002".to_string(),
		message: format!("service `{}` is not of type `{}`", id, expected),
		label: Some(format!("registered as `{}`", registered)),
		help: None,
		notes: vec![],
		cause: None,
	}
}
