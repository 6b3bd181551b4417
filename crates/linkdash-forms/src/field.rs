//! Signup field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::form::FormError;

/// One of the four inputs of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
	/// Display name
	Name,
	/// Email address
	Email,
	/// Account password
	Password,
	/// Avatar image
	ProfilePic,
}

impl FieldName {
	/// All fields in form order.
	pub const ALL: [FieldName; 4] = [
		FieldName::Name,
		FieldName::Email,
		FieldName::Password,
		FieldName::ProfilePic,
	];

	/// Wire name used by inputs and error payloads.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Password => "password",
			Self::ProfilePic => "profile_pic",
		}
	}

	/// Returns `true` for the file-backed field.
	pub fn is_file(&self) -> bool {
		matches!(self, Self::ProfilePic)
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"name" => Ok(Self::Name),
			"email" => Ok(Self::Email),
			"password" => Ok(Self::Password),
			"profile_pic" => Ok(Self::ProfilePic),
			other => Err(FormError::UnknownField(other.to_string())),
		}
	}
}
