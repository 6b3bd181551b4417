//! Error types of the signup page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the authentication service.
///
/// Only `message` is shown to the user, as the single top-level error of the
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AuthError {
	/// Human-readable message
	pub message: String,
	/// Machine-readable code from the service, if any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
}

impl AuthError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			code: None,
		}
	}

	pub fn with_code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());
		self
	}
}

/// Errors raised while loading [`SignupSettings`](crate::SignupSettings).
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("failed to read settings: {0}")]
	Io(#[from] std::io::Error),

	/// The settings file is not valid TOML for the settings schema
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// A setting has an unusable value
	#[error("invalid setting: {0}")]
	Invalid(String),
}
