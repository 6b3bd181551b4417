//! Field validators used by [`ValidationSchema`](crate::ValidationSchema).
//!
//! Each validator checks one [`FieldValue`] and returns its message on
//! failure. Validators that only make sense for text pass file values through
//! untouched, and the other way around.

use regex::Regex;
use std::sync::LazyLock;

use crate::form::FieldValue;

// WHATWG HTML `input[type=email]` pattern.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// A check applied to one field value.
pub trait FieldValidator: Send + Sync {
	/// Returns `Err(message)` when `value` fails the check.
	fn validate(&self, value: FieldValue<'_>) -> Result<(), String>;
}

/// Fails on empty text and on a missing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredValidator {
	message: String,
}

impl RequiredValidator {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl FieldValidator for RequiredValidator {
	fn validate(&self, value: FieldValue<'_>) -> Result<(), String> {
		let missing = match value {
			FieldValue::Text(text) => text.is_empty(),
			FieldValue::File(file) => file.is_none(),
		};
		if missing {
			Err(self.message.clone())
		} else {
			Ok(())
		}
	}
}

/// Fails on non-empty text that is not shaped like an email address.
///
/// Empty text passes; pair it with [`RequiredValidator`] to reject it.
///
/// # Examples
///
/// ```
/// use linkdash_forms::form::FieldValue;
/// use linkdash_forms::validators::{EmailValidator, FieldValidator};
///
/// let validator = EmailValidator::new("Invalid Email");
/// assert!(validator.validate(FieldValue::Text("ada@example.com")).is_ok());
/// assert!(validator.validate(FieldValue::Text("")).is_ok());
/// assert_eq!(
///     validator.validate(FieldValue::Text("ada@")),
///     Err("Invalid Email".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailValidator {
	message: String,
}

impl EmailValidator {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl FieldValidator for EmailValidator {
	fn validate(&self, value: FieldValue<'_>) -> Result<(), String> {
		match value {
			FieldValue::Text(text) if !text.is_empty() && !EMAIL_REGEX.is_match(text) => {
				Err(self.message.clone())
			}
			_ => Ok(()),
		}
	}
}

/// Fails on text shorter than `min` characters, including empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLengthValidator {
	min: usize,
	message: String,
}

impl MinLengthValidator {
	pub fn new(min: usize, message: impl Into<String>) -> Self {
		Self {
			min,
			message: message.into(),
		}
	}

	/// Minimum number of characters.
	pub fn min(&self) -> usize {
		self.min
	}
}

impl FieldValidator for MinLengthValidator {
	fn validate(&self, value: FieldValue<'_>) -> Result<(), String> {
		match value {
			FieldValue::Text(text) if text.chars().count() < self.min => Err(self.message.clone()),
			_ => Ok(()),
		}
	}
}

/// Fails when a file value is missing. Text values are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceValidator {
	message: String,
}

impl PresenceValidator {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl FieldValidator for PresenceValidator {
	fn validate(&self, value: FieldValue<'_>) -> Result<(), String> {
		match value {
			FieldValue::File(None) => Err(self.message.clone()),
			_ => Ok(()),
		}
	}
}
