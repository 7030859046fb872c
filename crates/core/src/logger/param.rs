// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};

/// Owned SQL parameter or column value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
	Null,
	Integer(i64),
	Real(f64),
	Text(String),
	Blob(Vec<u8>),
}

impl Display for Param {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Param::Null => f.write_str("NULL"),
			Param::Integer(value) => Display::fmt(value, f),
			Param::Real(value) => Display::fmt(value, f),
			Param::Text(value) => write!(f, "'{}'", value),
			Param::Blob(value) => write!(f, "<{} bytes>", value.len()),
		}
	}
}

impl From<i64> for Param {
	fn from(value: i64) -> Self {
		Param::Integer(value)
	}
}

impl From<i32> for Param {
	fn from(value: i32) -> Self {
		Param::Integer(value as i64)
	}
}

impl From<f64> for Param {
	fn from(value: f64) -> Self {
		Param::Real(value)
	}
}

impl From<bool> for Param {
	fn from(value: bool) -> Self {
		Param::Integer(value as i64)
	}
}

impl From<&str> for Param {
	fn from(value: &str) -> Self {
		Param::Text(value.to_string())
	}
}

impl From<String> for Param {
	fn from(value: String) -> Self {
		Param::Text(value)
	}
}

impl From<Vec<u8>> for Param {
	fn from(value: Vec<u8>) -> Self {
		Param::Blob(value)
	}
}

impl<T: Into<Param>> From<Option<T>> for Param {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => Param::Null,
		}
	}
}

impl ToSql for Param {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(match self {
			Param::Null => ToSqlOutput::Owned(Value::Null),
			Param::Integer(value) => ToSqlOutput::Owned(Value::Integer(*value)),
			Param::Real(value) => ToSqlOutput::Owned(Value::Real(*value)),
			Param::Text(value) => ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes())),
			Param::Blob(value) => ToSqlOutput::Borrowed(ValueRef::Blob(value)),
		})
	}
}

impl FromSql for Param {
	fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
		Ok(match value {
			ValueRef::Null => Param::Null,
			ValueRef::Integer(value) => Param::Integer(value),
			ValueRef::Real(value) => Param::Real(value),
			ValueRef::Text(value) => Param::Text(String::from_utf8_lossy(value).into_owned()),
			ValueRef::Blob(value) => Param::Blob(value.to_vec()),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::Param;

	#[test]
	fn test_display() {
		assert_eq!(Param::Null.to_string(), "NULL");
		assert_eq!(Param::from(7).to_string(), "7");
		assert_eq!(Param::from("bob").to_string(), "'bob'");
		assert_eq!(Param::from(vec![1u8, 2, 3]).to_string(), "<3 bytes>");
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Param::from(None::<i64>), Param::Null);
		assert_eq!(Param::from(Some("x")), Param::Text("x".to_string()));
	}

	#[test]
	fn test_serializes_untagged() {
		let params = vec![Param::Null, Param::from(1), Param::from("a")];
		assert_eq!(serde_json::to_string(&params).unwrap(), r#"[null,1,"a"]"#);
	}
}
