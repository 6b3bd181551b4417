//! Per-field validation messages shown next to the inputs.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::FieldName;
use crate::schema::FieldViolation;

/// One optional message per signup field.
///
/// The struct has a slot for every [`FieldName`], so adding a field to the
/// form forces every match over it to be updated.
///
/// # Examples
///
/// ```
/// use linkdash_forms::{ErrorMap, FieldName};
///
/// let mut errors = ErrorMap::default();
/// assert!(errors.is_empty());
///
/// errors.set(FieldName::Email, "Invalid Email");
/// assert_eq!(errors.get(FieldName::Email), Some("Invalid Email"));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
	pub name: Option<String>,
	pub email: Option<String>,
	pub password: Option<String>,
	pub profile_pic: Option<String>,
}

impl ErrorMap {
	/// Builds a map from violations in order; a later message for the same
	/// field replaces an earlier one.
	pub fn from_violations(violations: &[FieldViolation]) -> Self {
		let mut map = Self::default();
		for violation in violations {
			map.set(violation.field, violation.message.clone());
		}
		map
	}

	fn slot(&self, field: FieldName) -> &Option<String> {
		match field {
			FieldName::Name => &self.name,
			FieldName::Email => &self.email,
			FieldName::Password => &self.password,
			FieldName::ProfilePic => &self.profile_pic,
		}
	}

	fn slot_mut(&mut self, field: FieldName) -> &mut Option<String> {
		match field {
			FieldName::Name => &mut self.name,
			FieldName::Email => &mut self.email,
			FieldName::Password => &mut self.password,
			FieldName::ProfilePic => &mut self.profile_pic,
		}
	}

	/// Message of `field`, if any.
	pub fn get(&self, field: FieldName) -> Option<&str> {
		self.slot(field).as_deref()
	}

	/// Sets the message of `field`, replacing any previous one.
	pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
		*self.slot_mut(field) = Some(message.into());
	}

	/// Removes the message of `field`.
	pub fn clear(&mut self, field: FieldName) {
		*self.slot_mut(field) = None;
	}

	pub fn contains(&self, field: FieldName) -> bool {
		self.slot(field).is_some()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn len(&self) -> usize {
		FieldName::ALL.iter().filter(|f| self.contains(**f)).count()
	}

	/// Fields with a message, in form order.
	pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
		FieldName::ALL
			.into_iter()
			.filter_map(move |field| self.get(field).map(|message| (field, message)))
	}
}

impl Serialize for ErrorMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (field, message) in self.iter() {
			map.serialize_entry(field.as_str(), message)?;
		}
		map.end()
	}
}
