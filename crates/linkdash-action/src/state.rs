//! Observable state of an [`AsyncAction`](crate::AsyncAction).

/// Snapshot of the most recent invocation of a wrapped operation.
///
/// `data` and `error` are mutually exclusive once an invocation has resolved:
/// a success clears `error`, a failure clears `data`. `in_flight` is `true`
/// while at least one invocation of the current epoch is pending.
///
/// # Examples
///
/// ```
/// use linkdash_action::ActionState;
///
/// let state = ActionState::<u32, String>::default();
/// assert!(!state.in_flight);
/// assert!(state.data.is_none());
/// assert!(state.error.is_none());
/// assert_eq!(state.resolutions, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState<T, E> {
	/// Payload of the last successful resolution
	pub data: Option<T>,
	/// Error of the last failed resolution
	pub error: Option<E>,
	/// Whether an invocation is currently pending
	pub in_flight: bool,
	/// Number of invocations that resolved and updated this state
	pub resolutions: u64,
	pending: usize,
	epoch: u64,
}

impl<T, E> Default for ActionState<T, E> {
	fn default() -> Self {
		Self {
			data: None,
			error: None,
			in_flight: false,
			resolutions: 0,
			pending: 0,
			epoch: 0,
		}
	}
}

impl<T, E> ActionState<T, E> {
	/// Returns `true` when the last resolution succeeded and no error is recorded.
	pub fn is_success(&self) -> bool {
		self.error.is_none() && self.data.is_some()
	}

	/// Returns `true` when the last resolution failed.
	pub fn is_failure(&self) -> bool {
		self.error.is_some()
	}

	/// Number of invocations of the current epoch that have not resolved yet.
	pub fn pending(&self) -> usize {
		self.pending
	}

	/// Current cancellation epoch.
	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	/// Marks the start of an invocation and returns the epoch it belongs to.
	pub(crate) fn begin(&mut self) -> u64 {
		self.error = None;
		self.pending += 1;
		self.in_flight = true;
		self.epoch
	}

	/// Records a resolution of the current epoch.
	pub(crate) fn resolve(&mut self, result: &Result<T, E>)
	where
		T: Clone,
		E: Clone,
	{
		match result {
			Ok(data) => {
				self.data = Some(data.clone());
				self.error = None;
			}
			Err(error) => {
				self.data = None;
				self.error = Some(error.clone());
			}
		}
		self.resolutions += 1;
		self.pending = self.pending.saturating_sub(1);
		self.in_flight = self.pending > 0;
	}

	/// Releases an invocation of `epoch` that ended without resolving.
	///
	/// Returns `false` when `epoch` is stale; [`cancel`](Self::cancel) has
	/// already released it in that case.
	pub(crate) fn abandon(&mut self, epoch: u64) -> bool {
		if self.epoch != epoch || self.pending == 0 {
			return false;
		}
		self.pending -= 1;
		self.in_flight = self.pending > 0;
		true
	}

	/// Starts a new epoch. Returns `true` if pending invocations were dropped.
	pub(crate) fn cancel(&mut self) -> bool {
		self.epoch += 1;
		let had_pending = self.pending > 0;
		self.pending = 0;
		self.in_flight = false;
		had_pending
	}
}

/// Transition notification emitted by an [`AsyncAction`](crate::AsyncAction).
///
/// Unlike the watch channel carrying [`ActionState`], every event is
/// delivered to each subscriber in order, so observers that must react
/// exactly once per resolution listen here.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionEvent<T, E> {
	/// An invocation started
	Started,
	/// An invocation resolved successfully
	Succeeded(T),
	/// An invocation resolved with an error
	Failed(E),
	/// Pending invocations were cancelled
	Cancelled,
}

/// Result of a single [`AsyncAction::trigger`](crate::AsyncAction::trigger) call.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T, E> {
	/// The operation succeeded and the state was updated
	Succeeded(T),
	/// The operation failed and the state was updated
	Failed(E),
	/// The action was cancelled while this invocation was pending; its
	/// result was discarded
	Cancelled,
}

impl<T, E> ActionOutcome<T, E> {
	/// Converts the outcome into a `Result`, mapping cancellation to `None`.
	pub fn into_result(self) -> Option<Result<T, E>> {
		match self {
			Self::Succeeded(data) => Some(Ok(data)),
			Self::Failed(error) => Some(Err(error)),
			Self::Cancelled => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_begin_clears_error_and_keeps_data() {
		let mut state = ActionState::<u32, String> {
			data: Some(1),
			error: Some("boom".to_string()),
			..Default::default()
		};

		let epoch = state.begin();

		assert_eq!(epoch, 0);
		assert!(state.in_flight);
		assert_eq!(state.data, Some(1));
		assert!(state.error.is_none());
		assert_eq!(state.pending(), 1);
	}

	#[rstest]
	fn test_resolve_success_and_failure_are_exclusive() {
		let mut state = ActionState::<u32, String>::default();

		state.begin();
		state.resolve(&Ok(7));
		assert!(state.is_success());
		assert!(!state.in_flight);

		state.begin();
		state.resolve(&Err("nope".to_string()));
		assert!(state.is_failure());
		assert!(state.data.is_none());
		assert_eq!(state.resolutions, 2);
	}

	#[rstest]
	fn test_in_flight_stays_true_until_last_pending_resolves() {
		let mut state = ActionState::<u32, String>::default();

		state.begin();
		state.begin();
		state.resolve(&Ok(1));
		assert!(state.in_flight);

		state.resolve(&Ok(2));
		assert!(!state.in_flight);
		assert_eq!(state.data, Some(2));
	}

	#[rstest]
	fn test_cancel_advances_epoch() {
		let mut state = ActionState::<u32, String>::default();

		assert!(!state.cancel());
		state.begin();
		assert!(state.cancel());
		assert_eq!(state.epoch(), 2);
		assert!(!state.in_flight);
		assert_eq!(state.pending(), 0);
	}

	#[rstest]
	fn test_abandon_releases_only_current_epoch() {
		let mut state = ActionState::<u32, String>::default();
		let stale = state.begin();
		state.cancel();
		let current = state.begin();
		state.begin();

		assert!(!state.abandon(stale));
		assert_eq!(state.pending(), 2);
		assert!(state.abandon(current));
		assert!(state.in_flight);
		assert!(state.abandon(current));
		assert!(!state.in_flight);
		assert!(!state.abandon(current));
		assert_eq!(state.resolutions, 0);
	}

	#[rstest]
	#[case(ActionOutcome::Succeeded(3), Some(Ok(3)))]
	#[case(ActionOutcome::Failed("x".to_string()), Some(Err("x".to_string())))]
	#[case(ActionOutcome::Cancelled, None)]
	fn test_outcome_into_result(
		#[case] outcome: ActionOutcome<u32, String>,
		#[case] expected: Option<Result<u32, String>>,
	) {
		assert_eq!(outcome.into_result(), expected);
	}
}
