// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer, serialization::json_error};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		crate::error!(json_error(err))
	}
}

#[cfg(test)]
mod tests {
	use super::{Error, diagnostic::ioc::service_not_registered};

	#[test]
	fn test_display_renders_code_and_message() {
		let err = crate::error!(service_not_registered("orm_config"));
		let rendered = err.to_string();
		assert!(rendered.starts_with("error[IOC_001]: "), "unexpected rendering: {rendered}");
		assert!(rendered.contains("`orm_config`"));
	}

	#[test]
	fn test_deref_exposes_diagnostic() {
		let err = crate::error!(service_not_registered("logger"));
		assert_eq!(err.code, "IOC_001");
		assert_eq!(err.clone().diagnostic().code, "IOC_001");
	}

	#[test]
	fn test_from_serde_json_error() {
		let parse = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
		let err: Error = parse.into();
		assert_eq!(err.code, "SERDE_001");
	}
}
