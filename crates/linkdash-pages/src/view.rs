//! Presentation snapshot of the signup form.
//!
//! The page renderer is not part of this crate; it reads a [`SignupView`]
//! and draws the four inputs, their inline errors, the top-level error and
//! the submit control.

use linkdash_action::ActionState;
use linkdash_forms::{ErrorMap, FieldName};
use serde::Serialize;

use crate::error::AuthError;
use crate::services::SignedUpUser;

pub const TITLE: &str = "Signup";
pub const DESCRIPTION: &str = "Create a new account if you haven't already";
pub const SUBMIT_LABEL: &str = "Create account";

/// HTML input type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
	Text,
	Email,
	Password,
	File,
}

/// One input with its inline error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
	pub field: FieldName,
	pub kind: InputKind,
	pub placeholder: Option<&'static str>,
	/// `accept` attribute of file inputs
	pub accept: Option<&'static str>,
	pub error: Option<String>,
}

impl FieldView {
	fn new(field: FieldName, error: Option<&str>) -> Self {
		let (kind, placeholder, accept) = match field {
			FieldName::Name => (InputKind::Text, Some("Enter Name"), None),
			FieldName::Email => (InputKind::Email, Some("Enter email"), None),
			FieldName::Password => (InputKind::Password, Some("Enter Password"), None),
			FieldName::ProfilePic => (InputKind::File, None, Some("image/*")),
		};

		Self {
			field,
			kind,
			placeholder,
			accept,
			error: error.map(str::to_string),
		}
	}
}

/// Everything the renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupView {
	pub title: &'static str,
	pub description: &'static str,
	pub fields: Vec<FieldView>,
	/// Message of the last remote failure
	pub top_error: Option<String>,
	/// Whether the submit control shows its busy indicator
	pub busy: bool,
	pub submit_label: &'static str,
}

impl SignupView {
	/// Builds the view from the field errors and the signup action state.
	pub fn build(errors: &ErrorMap, action: &ActionState<SignedUpUser, AuthError>) -> Self {
		let fields = FieldName::ALL
			.into_iter()
			.map(|field| FieldView::new(field, errors.get(field)))
			.collect();

		Self {
			title: TITLE,
			description: DESCRIPTION,
			fields,
			top_error: action.error.as_ref().map(|e| e.message.clone()),
			busy: action.in_flight,
			submit_label: SUBMIT_LABEL,
		}
	}

	/// The view of `field`.
	pub fn field(&self, field: FieldName) -> Option<&FieldView> {
		self.fields.iter().find(|view| view.field == field)
	}
}
