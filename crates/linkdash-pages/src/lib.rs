//! Signup page for linkdash
//!
//! The page collects a name, an email, a password and a profile picture,
//! validates them and creates the account through an injected
//! [`AuthService`]. After a successful signup it navigates to the dashboard,
//! carrying the `createNew` query parameter the visitor arrived with, and
//! refreshes the current-user state through a [`SessionRefresher`].
//!
//! ## Architecture
//!
//! ```text
//! input change ──▶ FormState
//!                     │ submit()
//!                     ▼
//!              ValidationSchema ──fail──▶ ErrorMap (inline errors)
//!                     │ ok
//!                     ▼
//!        AsyncAction<SignupRequest, SignedUpUser, AuthError>
//!                     │ Succeeded event
//!                     ▼
//!        success effect: Navigator::navigate ──▶ SessionRefresher::refresh_user
//! ```
//!
//! Navigation is driven by the action's resolution event rather than chained
//! after `submit`, so it always runs after the action state shows the
//! success.

pub mod component;
pub mod error;
pub mod params;
pub mod services;
pub mod settings;
pub mod view;
pub mod workflow;

pub use component::SignupForm;
pub use error::{AuthError, SettingsError};
pub use params::{CARRY_PARAM, LaunchParams};
pub use services::{AuthService, Navigator, SessionRefresher, SignedUpUser, SignupDeps};
pub use settings::SignupSettings;
pub use view::{FieldView, InputKind, SignupView};
pub use workflow::{SignupAction, SignupWorkflow, SubmissionPhase, SubmitOutcome};
