//! The generic async action wrapper.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

use crate::error::ActionError;
use crate::state::{ActionEvent, ActionOutcome, ActionState};

/// Default capacity of the transition event buffer.
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

type Operation<Args, T, E> = Arc<dyn Fn(Args) -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

/// Releases a started invocation whose `trigger` future is dropped before the
/// operation resolves.
struct PendingGuard<'a, T, E> {
	state: &'a watch::Sender<ActionState<T, E>>,
	epoch: u64,
	armed: bool,
}

impl<T, E> PendingGuard<'_, T, E> {
	fn disarm(&mut self) {
		self.armed = false;
	}
}

impl<T, E> Drop for PendingGuard<'_, T, E> {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		let epoch = self.epoch;
		let released = self.state.send_if_modified(|state| state.abandon(epoch));
		if released {
			tracing::debug!(epoch, "action invocation dropped before resolving");
		}
	}
}

/// How [`AsyncAction::trigger`] behaves when an invocation is already pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReentryPolicy {
	/// Every trigger starts a new invocation; the last one to resolve wins.
	#[default]
	Allow,
	/// Triggers are refused with [`ActionError::AlreadyInFlight`] while
	/// another invocation is pending.
	RejectWhileInFlight,
}

/// An asynchronous operation together with its observable result, error and
/// in-flight status.
///
/// The action is cheaply cloneable; clones share the same state, so one
/// clone can be moved into a spawned task while another is observed.
///
/// # Examples
///
/// ```
/// use linkdash_action::{ActionOutcome, AsyncAction};
///
/// # tokio_test::block_on(async {
/// let double = AsyncAction::new(|n: u32| async move { Ok::<_, String>(n * 2) });
///
/// let outcome = double.trigger(21).await.unwrap();
/// assert_eq!(outcome, ActionOutcome::Succeeded(42));
///
/// let state = double.state();
/// assert_eq!(state.data, Some(42));
/// assert!(!state.in_flight);
/// # })
/// ```
pub struct AsyncAction<Args, T, E> {
	inner: Arc<Inner<Args, T, E>>,
}

struct Inner<Args, T, E> {
	operation: Operation<Args, T, E>,
	state: watch::Sender<ActionState<T, E>>,
	events: broadcast::Sender<ActionEvent<T, E>>,
	policy: ReentryPolicy,
}

impl<Args, T, E> Clone for AsyncAction<Args, T, E> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, T, E> std::fmt::Debug for AsyncAction<Args, T, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AsyncAction")
			.field("operation", &"<function>")
			.field("policy", &self.inner.policy)
			.finish()
	}
}

impl<Args, T, E> AsyncAction<Args, T, E>
where
	Args: Send + 'static,
	T: Clone + Send + Sync + 'static,
	E: Clone + Send + Sync + 'static,
{
	/// Wraps `operation` with the default [`ReentryPolicy::Allow`].
	pub fn new<F, Fut>(operation: F) -> Self
	where
		F: Fn(Args) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<T, E>> + Send + 'static,
	{
		Self::with_options(operation, ReentryPolicy::default(), DEFAULT_EVENT_CAPACITY)
	}

	/// Wraps `operation` with an explicit reentry policy and event buffer size.
	///
	/// A zero `event_capacity` is raised to one.
	pub fn with_options<F, Fut>(operation: F, policy: ReentryPolicy, event_capacity: usize) -> Self
	where
		F: Fn(Args) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<T, E>> + Send + 'static,
	{
		let operation: Operation<Args, T, E> =
			Arc::new(move |args: Args| -> BoxFuture<'static, Result<T, E>> { Box::pin(operation(args)) });
		let (state, _) = watch::channel(ActionState::default());
		let (events, _) = broadcast::channel(event_capacity.max(1));

		Self {
			inner: Arc::new(Inner {
				operation,
				state,
				events,
				policy,
			}),
		}
	}

	/// Returns the configured reentry policy.
	pub fn policy(&self) -> ReentryPolicy {
		self.inner.policy
	}

	/// Returns a snapshot of the current state.
	pub fn state(&self) -> ActionState<T, E> {
		self.inner.state.borrow().clone()
	}

	/// Returns `true` while an invocation is pending.
	pub fn is_in_flight(&self) -> bool {
		self.inner.state.borrow().in_flight
	}

	/// Subscribes to state snapshots.
	///
	/// The receiver always holds the latest state; intermediate states may be
	/// coalesced. Use [`events`](Self::events) to see every transition.
	pub fn subscribe(&self) -> watch::Receiver<ActionState<T, E>> {
		self.inner.state.subscribe()
	}

	/// Subscribes to transition events emitted after this call.
	pub fn events(&self) -> broadcast::Receiver<ActionEvent<T, E>> {
		self.inner.events.subscribe()
	}

	/// Invokes the wrapped operation with `args` and records its resolution.
	///
	/// Observers are notified when the invocation starts and when it
	/// resolves. If [`cancel`](Self::cancel) is called while the invocation is
	/// pending, its result is discarded and [`ActionOutcome::Cancelled`] is
	/// returned. Dropping the returned future before it completes releases
	/// the invocation: it no longer counts towards `in_flight` and leaves
	/// `data` and `error` untouched.
	///
	/// # Errors
	///
	/// Returns [`ActionError::AlreadyInFlight`] when the policy is
	/// [`ReentryPolicy::RejectWhileInFlight`] and another invocation is pending.
	/// The operation is not invoked in that case.
	pub async fn trigger(&self, args: Args) -> Result<ActionOutcome<T, E>, ActionError> {
		let policy = self.inner.policy;
		let mut epoch = None;
		self.inner.state.send_if_modified(|state| {
			if state.in_flight && policy == ReentryPolicy::RejectWhileInFlight {
				return false;
			}
			epoch = Some(state.begin());
			true
		});

		let Some(epoch) = epoch else {
			tracing::warn!("action trigger rejected: invocation already in flight");
			return Err(ActionError::AlreadyInFlight);
		};

		let mut guard = PendingGuard {
			state: &self.inner.state,
			epoch,
			armed: true,
		};
		tracing::debug!(epoch, "action started");
		let _ = self.inner.events.send(ActionEvent::Started);

		let result = (self.inner.operation)(args).await;
		guard.disarm();

		let mut applied = false;
		self.inner.state.send_if_modified(|state| {
			if state.epoch() != epoch {
				return false;
			}
			state.resolve(&result);
			applied = true;
			true
		});

		if !applied {
			tracing::warn!(epoch, "discarding completion of a cancelled action");
			return Ok(ActionOutcome::Cancelled);
		}

		let (event, outcome) = match result {
			Ok(data) => {
				tracing::debug!(epoch, "action succeeded");
				(ActionEvent::Succeeded(data.clone()), ActionOutcome::Succeeded(data))
			}
			Err(error) => {
				tracing::debug!(epoch, "action failed");
				(ActionEvent::Failed(error.clone()), ActionOutcome::Failed(error))
			}
		};
		let _ = self.inner.events.send(event);

		Ok(outcome)
	}

	/// Cancels pending invocations.
	///
	/// `in_flight` becomes `false` immediately and completions of the
	/// cancelled invocations no longer update the state. `data` and `error`
	/// keep their last values.
	pub fn cancel(&self) {
		let mut dropped = false;
		self.inner.state.send_if_modified(|state| {
			dropped = state.cancel();
			dropped
		});

		if dropped {
			tracing::debug!("pending action invocations cancelled");
			let _ = self.inner.events.send(ActionEvent::Cancelled);
		}
	}

	/// Cancels pending invocations and clears `data` and `error`.
	pub fn reset(&self) {
		let mut dropped = false;
		self.inner.state.send_modify(|state| {
			dropped = state.cancel();
			state.data = None;
			state.error = None;
		});

		if dropped {
			let _ = self.inner.events.send(ActionEvent::Cancelled);
		}
	}
}
