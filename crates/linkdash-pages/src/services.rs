//! Collaborators the signup workflow depends on.
//!
//! The host application implements these traits and hands them to
//! [`SignupWorkflow`](crate::SignupWorkflow) through [`SignupDeps`].

use async_trait::async_trait;
use linkdash_forms::SignupRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AuthError;

/// Account returned by a successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedUpUser {
	pub id: String,
	pub name: String,
	pub email: String,
	/// Public URL of the uploaded profile picture
	#[serde(default)]
	pub profile_pic_url: Option<String>,
}

/// Remote account creation.
#[async_trait]
pub trait AuthService: Send + Sync {
	/// Creates the account described by `request`.
	async fn signup(&self, request: SignupRequest) -> Result<SignedUpUser, AuthError>;
}

/// Refresh of the application's current-user state after signup.
#[async_trait]
pub trait SessionRefresher: Send + Sync {
	async fn refresh_user(&self);
}

/// Client-side navigation.
pub trait Navigator: Send + Sync {
	/// Moves the application to `location` (path plus query string).
	fn navigate(&self, location: &str);
}

/// Collaborators injected into the signup workflow.
#[derive(Clone)]
pub struct SignupDeps {
	pub auth: Arc<dyn AuthService>,
	pub session: Arc<dyn SessionRefresher>,
	pub navigator: Arc<dyn Navigator>,
}

impl SignupDeps {
	pub fn new(
		auth: Arc<dyn AuthService>,
		session: Arc<dyn SessionRefresher>,
		navigator: Arc<dyn Navigator>,
	) -> Self {
		Self {
			auth,
			session,
			navigator,
		}
	}
}

impl std::fmt::Debug for SignupDeps {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SignupDeps")
			.field("auth", &"<service>")
			.field("session", &"<service>")
			.field("navigator", &"<service>")
			.finish()
	}
}
