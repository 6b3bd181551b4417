//! Declarative validation schema for [`FormState`].

use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorMap;
use crate::field::FieldName;
use crate::form::{FieldValue, FormState};
use crate::validators::{
	EmailValidator, FieldValidator, MinLengthValidator, PresenceValidator, RequiredValidator,
};

/// Default minimum password length of the signup schema.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// A single rule attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
	Required(RequiredValidator),
	Email(EmailValidator),
	MinLength(MinLengthValidator),
	Present(PresenceValidator),
}

impl Rule {
	pub fn required(message: impl Into<String>) -> Self {
		Self::Required(RequiredValidator::new(message))
	}

	pub fn email(message: impl Into<String>) -> Self {
		Self::Email(EmailValidator::new(message))
	}

	pub fn min_length(min: usize, message: impl Into<String>) -> Self {
		Self::MinLength(MinLengthValidator::new(min, message))
	}

	pub fn present(message: impl Into<String>) -> Self {
		Self::Present(PresenceValidator::new(message))
	}
}

impl FieldValidator for Rule {
	fn validate(&self, value: FieldValue<'_>) -> Result<(), String> {
		match self {
			Self::Required(v) => v.validate(value),
			Self::Email(v) => v.validate(value),
			Self::MinLength(v) => v.validate(value),
			Self::Present(v) => v.validate(value),
		}
	}
}

/// The rules of one field, evaluated in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
	pub field: FieldName,
	pub rules: Vec<Rule>,
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
	pub field: FieldName,
	pub message: String,
}

/// Every rule failure of one validation pass, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s): {}", .violations.len(), join_messages(.violations))]
pub struct ValidationErrors {
	violations: Vec<FieldViolation>,
}

fn join_messages(violations: &[FieldViolation]) -> String {
	violations
		.iter()
		.map(|v| format!("{}: {}", v.field, v.message))
		.collect::<Vec<_>>()
		.join("; ")
}

impl ValidationErrors {
	/// Failures in evaluation order.
	pub fn violations(&self) -> &[FieldViolation] {
		&self.violations
	}

	/// Fields with at least one failure, deduplicated, in first-failure order.
	pub fn fields(&self) -> Vec<FieldName> {
		let mut fields = Vec::new();
		for violation in &self.violations {
			if !fields.contains(&violation.field) {
				fields.push(violation.field);
			}
		}
		fields
	}

	/// Collapses the failures into one message per field.
	///
	/// When a field failed several rules, the message of the last failure
	/// is kept.
	pub fn to_error_map(&self) -> ErrorMap {
		ErrorMap::from_violations(&self.violations)
	}
}

/// Ordered per-field rules evaluated against a [`FormState`].
///
/// Validation never stops at the first failure: every rule of every field
/// runs and all failures are reported.
///
/// # Examples
///
/// ```
/// use linkdash_forms::{FieldName, FormState, ValidationSchema};
///
/// let schema = ValidationSchema::signup(6);
/// let form = FormState {
///     email: "not-an-email".to_string(),
///     password: "abc".to_string(),
///     ..Default::default()
/// };
///
/// let errors = schema.validate(&form).unwrap_err().to_error_map();
/// assert_eq!(errors.get(FieldName::Name), Some("Name is required"));
/// assert_eq!(errors.get(FieldName::Email), Some("Invalid Email"));
/// assert_eq!(
///     errors.get(FieldName::Password),
///     Some("Password must be atleast 6 characters")
/// );
/// assert_eq!(errors.get(FieldName::ProfilePic), Some("Profile picture is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSchema {
	fields: Vec<FieldRules>,
}

impl ValidationSchema {
	/// Creates a schema without rules.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends rules for `field`. Rules for the same field accumulate.
	pub fn field(mut self, field: FieldName, rules: impl IntoIterator<Item = Rule>) -> Self {
		let rules: Vec<Rule> = rules.into_iter().collect();
		match self.fields.iter_mut().find(|entry| entry.field == field) {
			Some(entry) => entry.rules.extend(rules),
			None => self.fields.push(FieldRules { field, rules }),
		}
		self
	}

	/// The signup schema: required name, required well-formed email, required
	/// password of at least `min_password_length` characters, and a profile
	/// picture.
	pub fn signup(min_password_length: usize) -> Self {
		Self::new()
			.field(FieldName::Name, [Rule::required("Name is required")])
			.field(
				FieldName::Email,
				[
					Rule::email("Invalid Email"),
					Rule::required("Email is required"),
				],
			)
			.field(
				FieldName::Password,
				[
					Rule::min_length(
						min_password_length,
						format!("Password must be atleast {min_password_length} characters"),
					),
					Rule::required("Password is required"),
				],
			)
			.field(
				FieldName::ProfilePic,
				[Rule::present("Profile picture is required")],
			)
	}

	/// Rules in evaluation order.
	pub fn rules(&self) -> &[FieldRules] {
		&self.fields
	}

	/// Evaluates every rule against `form`.
	///
	/// # Errors
	///
	/// Returns all failures when at least one rule fails.
	pub fn validate(&self, form: &FormState) -> Result<(), ValidationErrors> {
		let violations: Vec<FieldViolation> = self
			.fields
			.iter()
			.flat_map(|entry| {
				let value = form.value(entry.field);
				entry.rules.iter().filter_map(move |rule| {
					rule.validate(value).err().map(|message| FieldViolation {
						field: entry.field,
						message,
					})
				})
			})
			.collect();

		if violations.is_empty() {
			Ok(())
		} else {
			tracing::debug!(count = violations.len(), "form validation failed");
			Err(ValidationErrors { violations })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::ProfilePicture;
	use rstest::{fixture, rstest};

	#[fixture]
	fn valid_form() -> FormState {
		FormState {
			name: "Ada Lovelace".to_string(),
			email: "ada@example.com".to_string(),
			password: "analytical".to_string(),
			profile_pic: Some(ProfilePicture::new("ada.png", "image/png", vec![1, 2, 3])),
		}
	}

	#[rstest]
	fn test_valid_form_passes(valid_form: FormState) {
		let schema = ValidationSchema::signup(DEFAULT_MIN_PASSWORD_LENGTH);
		assert!(schema.validate(&valid_form).is_ok());
	}

	#[rstest]
	fn test_empty_form_reports_every_rule_in_order() {
		let schema = ValidationSchema::signup(DEFAULT_MIN_PASSWORD_LENGTH);

		let errors = schema.validate(&FormState::new()).unwrap_err();

		let messages: Vec<_> = errors
			.violations()
			.iter()
			.map(|v| (v.field, v.message.as_str()))
			.collect();
		assert_eq!(
			messages,
			vec![
				(FieldName::Name, "Name is required"),
				(FieldName::Email, "Email is required"),
				(FieldName::Password, "Password must be atleast 6 characters"),
				(FieldName::Password, "Password is required"),
				(FieldName::ProfilePic, "Profile picture is required"),
			]
		);
	}

	#[rstest]
	fn test_empty_password_keeps_last_message() {
		let schema = ValidationSchema::signup(DEFAULT_MIN_PASSWORD_LENGTH);

		let map = schema.validate(&FormState::new()).unwrap_err().to_error_map();

		assert_eq!(map.get(FieldName::Password), Some("Password is required"));
	}

	#[rstest]
	fn test_fields_are_deduplicated() {
		let schema = ValidationSchema::signup(DEFAULT_MIN_PASSWORD_LENGTH);

		let errors = schema.validate(&FormState::new()).unwrap_err();

		assert_eq!(errors.fields(), FieldName::ALL.to_vec());
	}

	#[rstest]
	#[case(1)]
	#[case(8)]
	fn test_configurable_password_length(mut valid_form: FormState, #[case] min: usize) {
		let schema = ValidationSchema::signup(min);
		valid_form.password = "x".repeat(min);
		assert!(schema.validate(&valid_form).is_ok());

		valid_form.password = "x".repeat(min - 1);
		let result = schema.validate(&valid_form);
		if min == 1 {
			// the required rule fails after the length rule and wins
			let map = result.unwrap_err().to_error_map();
			assert_eq!(map.get(FieldName::Password), Some("Password is required"));
		} else {
			let map = result.unwrap_err().to_error_map();
			assert_eq!(
				map.get(FieldName::Password),
				Some(format!("Password must be atleast {min} characters").as_str())
			);
		}
	}

	#[rstest]
	fn test_rules_accumulate_per_field() {
		let schema = ValidationSchema::new()
			.field(FieldName::Name, [Rule::required("a")])
			.field(FieldName::Name, [Rule::min_length(3, "b")]);

		assert_eq!(schema.rules().len(), 1);
		assert_eq!(schema.rules()[0].rules.len(), 2);
	}

	#[rstest]
	fn test_display_lists_messages() {
		let schema = ValidationSchema::new().field(FieldName::Name, [Rule::required("Name is required")]);

		let errors = schema.validate(&FormState::new()).unwrap_err();

		assert_eq!(
			errors.to_string(),
			"1 validation error(s): name: Name is required"
		);
	}
}
