//! # Linkdash
//!
//! The signup flow of the linkdash link dashboard.
//!
//! A visitor fills in a name, an email, a password and a profile picture.
//! The form is validated on the client, the account is created through an
//! injected authentication service, and the visitor is sent to the dashboard
//! with the `createNew` query parameter they arrived with.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `action` - [`AsyncAction`], an async operation with observable loading state
//! - `forms` - Form state, validation schema and per-field error map
//! - `pages` - The mounted signup form and its workflow
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use linkdash::prelude::*;
//!
//! let deps = SignupDeps::new(auth, session, navigator);
//! let form = SignupForm::mount(deps, &SignupSettings::default(), "?createNew=abc");
//!
//! form.handle_input_change(InputChange::text("name", "Ada Lovelace"))?;
//! form.handle_input_change(InputChange::text("email", "ada@example.com"))?;
//! form.handle_input_change(InputChange::text("password", "analytical"))?;
//! form.handle_input_change(InputChange::files("profile_pic", vec![picture]))?;
//!
//! match form.submit().await {
//!     SubmitOutcome::Succeeded(user) => println!("welcome {}", user.name),
//!     SubmitOutcome::Invalid(errors) => println!("{errors:?}"),
//!     other => println!("{other:?}"),
//! }
//! ```

#[cfg(feature = "action")]
pub mod action;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "action")]
pub use linkdash_action::{ActionError, ActionState, AsyncAction, ReentryPolicy};

#[cfg(feature = "forms")]
pub use linkdash_forms::{ErrorMap, FieldName, FormState, InputChange, ValidationSchema};

#[cfg(feature = "pages")]
pub use linkdash_pages::{SignupDeps, SignupForm, SignupSettings, SubmitOutcome};

/// Common imports for applications mounting the signup form.
pub mod prelude {
	#[cfg(feature = "action")]
	pub use crate::{ActionState, AsyncAction, ReentryPolicy};

	#[cfg(feature = "forms")]
	pub use crate::{ErrorMap, FieldName, InputChange};
	#[cfg(feature = "forms")]
	pub use linkdash_forms::ProfilePicture;

	#[cfg(feature = "pages")]
	pub use crate::{SignupDeps, SignupForm, SignupSettings, SubmitOutcome};
	#[cfg(feature = "pages")]
	pub use linkdash_pages::{AuthError, AuthService, Navigator, SessionRefresher, SignedUpUser};
}
