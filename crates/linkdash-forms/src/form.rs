//! Signup form state and the validated request built from it.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::field::FieldName;

/// Errors raised while editing or converting a [`FormState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
	/// The input change named a field the form does not have
	#[error("unknown form field '{0}'")]
	UnknownField(String),

	/// Text was sent to the file input, or files to a text input
	#[error("field '{field}' expects a {expected} value")]
	WidgetMismatch {
		field: FieldName,
		expected: &'static str,
	},

	/// A field required to build the request has no value
	#[error("field '{0}' has no value")]
	MissingField(FieldName),
}

/// A file picked in the profile picture input.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePicture {
	/// Original file name
	pub file_name: String,
	/// MIME type reported by the browser
	pub content_type: String,
	/// Raw file contents
	#[serde(skip)]
	pub bytes: Bytes,
}

impl ProfilePicture {
	/// Creates a picture from its name, MIME type and contents.
	pub fn new(
		file_name: impl Into<String>,
		content_type: impl Into<String>,
		bytes: impl Into<Bytes>,
	) -> Self {
		Self {
			file_name: file_name.into(),
			content_type: content_type.into(),
			bytes: bytes.into(),
		}
	}

	/// Returns `true` when the MIME type is an `image/*` type.
	pub fn is_image(&self) -> bool {
		self.content_type.starts_with("image/")
	}

	/// Size of the file in bytes.
	pub fn size(&self) -> usize {
		self.bytes.len()
	}
}

impl fmt::Debug for ProfilePicture {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProfilePicture")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("size", &self.bytes.len())
			.finish()
	}
}

/// Borrowed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
	/// Value of a text, email or password input
	Text(&'a str),
	/// Selected file of the file input
	File(Option<&'a ProfilePicture>),
}

/// A change event coming from one of the form inputs.
///
/// File inputs report the selected files; every other input reports its text
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct InputChange {
	/// `name` attribute of the input
	pub name: String,
	/// Text value of the input
	pub value: String,
	/// Selected files, present only for file inputs
	pub files: Option<Vec<ProfilePicture>>,
}

impl InputChange {
	/// A change of a text-like input.
	pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			files: None,
		}
	}

	/// A change of a file input.
	pub fn files(name: impl Into<String>, files: Vec<ProfilePicture>) -> Self {
		Self {
			name: name.into(),
			value: String::new(),
			files: Some(files),
		}
	}
}

/// Current values of the signup inputs.
///
/// Starts with empty text fields and no picture.
///
/// # Examples
///
/// ```
/// use linkdash_forms::{FieldName, FormState, InputChange};
///
/// let mut form = FormState::default();
/// let field = form.apply(InputChange::text("email", "ada@example.com")).unwrap();
///
/// assert_eq!(field, FieldName::Email);
/// assert_eq!(form.email, "ada@example.com");
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct FormState {
	pub name: String,
	pub email: String,
	pub password: String,
	pub profile_pic: Option<ProfilePicture>,
}

impl FormState {
	/// Creates an empty form.
	pub fn new() -> Self {
		Self::default()
	}

	/// Applies an input change and returns the field it updated.
	///
	/// For the file input the first selected file is stored; an empty
	/// selection clears the picture.
	///
	/// # Errors
	///
	/// Returns [`FormError::UnknownField`] for names outside the form and
	/// [`FormError::WidgetMismatch`] when the change kind does not match the
	/// field.
	pub fn apply(&mut self, change: InputChange) -> Result<FieldName, FormError> {
		let field: FieldName = change.name.parse()?;

		match (field.is_file(), change.files) {
			(true, Some(files)) => {
				self.profile_pic = files.into_iter().next();
			}
			(true, None) => {
				return Err(FormError::WidgetMismatch {
					field,
					expected: "file",
				});
			}
			(false, Some(_)) => {
				return Err(FormError::WidgetMismatch {
					field,
					expected: "text",
				});
			}
			(false, None) => self.set_text(field, change.value)?,
		}

		tracing::trace!(field = %field, "form field updated");
		Ok(field)
	}

	/// Sets the value of a text field.
	///
	/// # Errors
	///
	/// Returns [`FormError::WidgetMismatch`] for the file field.
	pub fn set_text(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
		let slot = match field {
			FieldName::Name => &mut self.name,
			FieldName::Email => &mut self.email,
			FieldName::Password => &mut self.password,
			FieldName::ProfilePic => {
				return Err(FormError::WidgetMismatch {
					field,
					expected: "file",
				});
			}
		};
		*slot = value.into();
		Ok(())
	}

	/// Returns the current value of `field`.
	pub fn value(&self, field: FieldName) -> FieldValue<'_> {
		match field {
			FieldName::Name => FieldValue::Text(&self.name),
			FieldName::Email => FieldValue::Text(&self.email),
			FieldName::Password => FieldValue::Text(&self.password),
			FieldName::ProfilePic => FieldValue::File(self.profile_pic.as_ref()),
		}
	}
}

impl fmt::Debug for FormState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormState")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.field("profile_pic", &self.profile_pic)
			.finish()
	}
}

/// Signup payload sent to the authentication service.
///
/// Only built from a form that passed validation.
#[derive(Clone, PartialEq, Serialize)]
pub struct SignupRequest {
	pub name: String,
	pub email: String,
	pub password: String,
	pub profile_pic: ProfilePicture,
}

impl TryFrom<FormState> for SignupRequest {
	type Error = FormError;

	fn try_from(form: FormState) -> Result<Self, Self::Error> {
		let profile_pic = form
			.profile_pic
			.ok_or(FormError::MissingField(FieldName::ProfilePic))?;

		Ok(Self {
			name: form.name,
			email: form.email,
			password: form.password,
			profile_pic,
		})
	}
}

impl fmt::Debug for SignupRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SignupRequest")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.field("profile_pic", &self.profile_pic)
			.finish()
	}
}
