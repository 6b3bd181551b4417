//! Validate-then-submit workflow of the signup form.

use linkdash_action::{ActionError, ActionEvent, ActionOutcome, AsyncAction};
use linkdash_forms::{
	ErrorMap, FieldName, FormError, FormState, InputChange, SignupRequest, ValidationSchema,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;

use crate::error::AuthError;
use crate::params::LaunchParams;
use crate::services::{Navigator, SessionRefresher, SignedUpUser, SignupDeps};
use crate::settings::SignupSettings;
use crate::view::SignupView;

/// The signup call wrapped with its loading state.
pub type SignupAction = AsyncAction<SignupRequest, SignedUpUser, AuthError>;

/// Where a submission currently is.
///
/// There is one phase per workflow and it follows the most recent
/// [`SignupWorkflow::submit`]. Overlapping submits overwrite each other's
/// phase; the action state is the per-call record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
	#[default]
	Idle,
	Validating,
	Invalid,
	Submitting,
	Success,
	Failed,
}

/// Result of one [`SignupWorkflow::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Validation failed; no remote call was made
	Invalid(ErrorMap),
	/// The account was created
	Succeeded(SignedUpUser),
	/// The service rejected the signup with this message
	Failed(String),
	/// Another submission is pending and overlap is not allowed
	Busy,
	/// The form was unmounted while the call was pending
	Cancelled,
}

/// Puts the phase back to `Idle` when a `submit` future is dropped while its
/// call is pending.
struct SubmittingGuard<'a> {
	phase: &'a watch::Sender<SubmissionPhase>,
	armed: bool,
}

impl SubmittingGuard<'_> {
	fn disarm(&mut self) {
		self.armed = false;
	}
}

impl Drop for SubmittingGuard<'_> {
	fn drop(&mut self) {
		if self.armed {
			self.phase.send_if_modified(|phase| {
				let submitting = *phase == SubmissionPhase::Submitting;
				if submitting {
					*phase = SubmissionPhase::Idle;
				}
				submitting
			});
		}
	}
}

/// Form state, field errors and the signup action of one mounted form.
///
/// [`submit`](Self::submit) clears the field errors, validates the form and,
/// only when every rule passes, triggers the signup action. The navigation
/// and session refresh that follow a successful signup are not chained to
/// `submit`: they run in [`success_effect`](Self::success_effect), which
/// reacts to the action's resolution events.
pub struct SignupWorkflow {
	form: Mutex<FormState>,
	errors: watch::Sender<ErrorMap>,
	phase: watch::Sender<SubmissionPhase>,
	schema: ValidationSchema,
	action: SignupAction,
	session: Arc<dyn SessionRefresher>,
	navigator: Arc<dyn Navigator>,
	destination: String,
}

impl std::fmt::Debug for SignupWorkflow {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SignupWorkflow")
			.field("form", &*self.form.lock())
			.field("errors", &*self.errors.borrow())
			.field("phase", &*self.phase.borrow())
			.field("destination", &self.destination)
			.finish()
	}
}

impl SignupWorkflow {
	/// Creates the workflow. The post-signup destination is fixed here from
	/// `launch`.
	pub fn new(deps: SignupDeps, settings: &SignupSettings, launch: &LaunchParams) -> Self {
		let auth = deps.auth;
		let action = AsyncAction::with_options(
			move |request: SignupRequest| {
				let auth = Arc::clone(&auth);
				async move { auth.signup(request).await }
			},
			settings.reentry,
			settings.event_capacity,
		);

		Self {
			form: Mutex::new(FormState::default()),
			errors: watch::channel(ErrorMap::default()).0,
			phase: watch::channel(SubmissionPhase::Idle).0,
			schema: settings.schema(),
			action,
			session: deps.session,
			navigator: deps.navigator,
			destination: launch.destination(&settings.dashboard_path),
		}
	}

	/// Applies an input change to the form.
	pub fn handle_input_change(&self, change: InputChange) -> Result<FieldName, FormError> {
		self.form.lock().apply(change)
	}

	/// Snapshot of the form values.
	pub fn form(&self) -> FormState {
		self.form.lock().clone()
	}

	/// Current field errors.
	pub fn errors(&self) -> ErrorMap {
		self.errors.borrow().clone()
	}

	pub fn subscribe_errors(&self) -> watch::Receiver<ErrorMap> {
		self.errors.subscribe()
	}

	pub fn phase(&self) -> SubmissionPhase {
		*self.phase.borrow()
	}

	pub fn subscribe_phase(&self) -> watch::Receiver<SubmissionPhase> {
		self.phase.subscribe()
	}

	/// The wrapped signup call.
	pub fn action(&self) -> &SignupAction {
		&self.action
	}

	/// Message of the last remote failure.
	pub fn top_level_error(&self) -> Option<String> {
		self.action.state().error.map(|error| error.message)
	}

	/// Location navigated to after a successful signup.
	pub fn destination(&self) -> &str {
		&self.destination
	}

	pub fn view(&self) -> SignupView {
		SignupView::build(&self.errors.borrow(), &self.action.state())
	}

	fn set_phase(&self, phase: SubmissionPhase) {
		tracing::debug!(?phase, "signup phase changed");
		self.phase.send_replace(phase);
	}

	/// Runs one submission attempt.
	pub async fn submit(&self) -> SubmitOutcome {
		self.set_phase(SubmissionPhase::Validating);
		self.errors.send_replace(ErrorMap::default());

		let form = self.form.lock().clone();
		if let Err(errors) = self.schema.validate(&form) {
			return self.reject(errors.to_error_map());
		}

		let request = match SignupRequest::try_from(form) {
			Ok(request) => request,
			Err(error) => {
				let mut map = ErrorMap::default();
				if let FormError::MissingField(field) = &error {
					map.set(*field, error.to_string());
				}
				return self.reject(map);
			}
		};

		self.set_phase(SubmissionPhase::Submitting);
		let mut guard = SubmittingGuard {
			phase: &self.phase,
			armed: true,
		};
		let result = self.action.trigger(request).await;
		guard.disarm();

		match result {
			Ok(ActionOutcome::Succeeded(user)) => {
				tracing::info!(user_id = %user.id, "signup succeeded");
				self.set_phase(SubmissionPhase::Success);
				SubmitOutcome::Succeeded(user)
			}
			Ok(ActionOutcome::Failed(error)) => {
				tracing::warn!(reason = %error.message, "signup rejected by auth service");
				self.set_phase(SubmissionPhase::Failed);
				self.set_phase(SubmissionPhase::Idle);
				SubmitOutcome::Failed(error.message)
			}
			Ok(ActionOutcome::Cancelled) => {
				self.set_phase(SubmissionPhase::Idle);
				SubmitOutcome::Cancelled
			}
			Err(ActionError::AlreadyInFlight) => SubmitOutcome::Busy,
		}
	}

	fn reject(&self, errors: ErrorMap) -> SubmitOutcome {
		for (field, message) in errors.iter() {
			tracing::debug!(field = %field, reason = message, "field rejected");
		}
		self.errors.send_replace(errors.clone());
		self.set_phase(SubmissionPhase::Invalid);
		self.set_phase(SubmissionPhase::Idle);
		SubmitOutcome::Invalid(errors)
	}

	/// Reaction to successful signups.
	///
	/// Subscribes to the action's events immediately and returns a future
	/// that, for every successful resolution, navigates to
	/// [`destination`](Self::destination) and then refreshes the session.
	/// The future holds the workflow and runs until it is aborted.
	///
	/// Events that overflow the action's event buffer before the effect reads
	/// them are skipped with a warning, and the successes among them do not
	/// navigate. The newest events are kept, so a burst ending in a success
	/// still navigates once.
	pub fn success_effect(self: &Arc<Self>) -> impl Future<Output = ()> + Send + 'static {
		let workflow = Arc::clone(self);
		let mut events = self.action.events();

		async move {
			loop {
				match events.recv().await {
					Ok(ActionEvent::Succeeded(user)) => workflow.on_signed_up(&user).await,
					Ok(_) => {}
					Err(RecvError::Lagged(skipped)) => {
						tracing::warn!(skipped, "signup effect lagged behind action events");
					}
					Err(RecvError::Closed) => break,
				}
			}
		}
	}

	async fn on_signed_up(&self, user: &SignedUpUser) {
		tracing::info!(user_id = %user.id, destination = %self.destination, "navigating after signup");
		self.navigator.navigate(&self.destination);
		self.session.refresh_user().await;
	}
}
