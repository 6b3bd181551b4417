//! Signup page settings.

use linkdash_action::{DEFAULT_EVENT_CAPACITY, ReentryPolicy};
use linkdash_forms::{DEFAULT_MIN_PASSWORD_LENGTH, ValidationSchema};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SettingsError;
use crate::params::CARRY_PARAM;

/// Settings of the signup page, loadable from TOML.
///
/// Every key is optional; missing keys take their defaults.
///
/// ```toml
/// dashboard_path = "/dashboard"
/// carry_param = "createNew"
/// min_password_length = 6
/// reentry = "allow"            # or "reject_while_in_flight"
/// event_capacity = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupSettings {
	/// Path navigated to after a successful signup
	pub dashboard_path: String,
	/// Query parameter forwarded from the signup URL to the dashboard
	pub carry_param: String,
	/// Minimum password length enforced by the schema
	pub min_password_length: usize,
	/// Behavior of a submit while the previous one is pending
	pub reentry: ReentryPolicy,
	/// Buffer size of the action's transition events
	pub event_capacity: usize,
}

impl Default for SignupSettings {
	fn default() -> Self {
		Self {
			dashboard_path: "/dashboard".to_string(),
			carry_param: CARRY_PARAM.to_string(),
			min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
			reentry: ReentryPolicy::Allow,
			event_capacity: DEFAULT_EVENT_CAPACITY,
		}
	}
}

impl SignupSettings {
	/// Parses and validates settings from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path.as_ref())?;
		tracing::debug!(path = %path.as_ref().display(), "loading signup settings");
		Self::from_toml_str(&source)
	}

	/// Checks that every value is usable.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.dashboard_path.starts_with('/') {
			return Err(SettingsError::Invalid(format!(
				"dashboard_path must be an absolute path, got '{}'",
				self.dashboard_path
			)));
		}
		if self.carry_param.is_empty() {
			return Err(SettingsError::Invalid(
				"carry_param must not be empty".to_string(),
			));
		}
		if self.min_password_length == 0 {
			return Err(SettingsError::Invalid(
				"min_password_length must be at least 1".to_string(),
			));
		}
		if self.event_capacity == 0 {
			return Err(SettingsError::Invalid(
				"event_capacity must be at least 1".to_string(),
			));
		}
		Ok(())
	}

	/// The signup schema configured by these settings.
	pub fn schema(&self) -> ValidationSchema {
		ValidationSchema::signup(self.min_password_length)
	}
}
