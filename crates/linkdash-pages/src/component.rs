//! The mounted signup form.

use linkdash_forms::{ErrorMap, FieldName, FormError, InputChange};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::params::LaunchParams;
use crate::services::SignupDeps;
use crate::settings::SignupSettings;
use crate::view::SignupView;
use crate::workflow::{SignupWorkflow, SubmitOutcome};

/// A signup form bound to its page.
///
/// Mounting captures the carried query parameter, builds the workflow and
/// starts its success effect on the current tokio runtime. Dropping the form
/// unmounts it: the effect stops and a pending signup call is cancelled, so
/// its late result neither updates the state nor navigates.
///
/// # Examples
///
/// ```ignore
/// let form = SignupForm::mount(deps, &SignupSettings::default(), "?createNew=abc");
///
/// form.handle_input_change(InputChange::text("name", "Ada"))?;
/// // ...
/// match form.submit().await {
///     SubmitOutcome::Invalid(errors) => render_errors(&errors),
///     SubmitOutcome::Failed(message) => render_banner(&message),
///     _ => {}
/// }
/// ```
#[derive(Debug)]
pub struct SignupForm {
	workflow: Arc<SignupWorkflow>,
	effect: JoinHandle<()>,
}

impl SignupForm {
	/// Mounts the form on the page whose query string is `current_query`.
	///
	/// # Panics
	///
	/// Panics when called outside a tokio runtime.
	pub fn mount(deps: SignupDeps, settings: &SignupSettings, current_query: &str) -> Self {
		let launch = LaunchParams::from_query(current_query, &settings.carry_param);
		let workflow = Arc::new(SignupWorkflow::new(deps, settings, &launch));
		let effect = tokio::spawn(workflow.success_effect());

		tracing::debug!(destination = %workflow.destination(), "signup form mounted");
		Self { workflow, effect }
	}

	pub fn workflow(&self) -> &Arc<SignupWorkflow> {
		&self.workflow
	}

	pub fn handle_input_change(&self, change: InputChange) -> Result<FieldName, FormError> {
		self.workflow.handle_input_change(change)
	}

	pub async fn submit(&self) -> SubmitOutcome {
		self.workflow.submit().await
	}

	pub fn errors(&self) -> ErrorMap {
		self.workflow.errors()
	}

	pub fn view(&self) -> SignupView {
		self.workflow.view()
	}
}

impl Drop for SignupForm {
	fn drop(&mut self) {
		self.effect.abort();
		self.workflow.action().cancel();
		tracing::debug!("signup form unmounted");
	}
}
