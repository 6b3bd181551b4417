//! Errors raised by [`AsyncAction`](crate::AsyncAction).

use thiserror::Error;

/// Error returned when an action refuses to start an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
	/// Another invocation is pending and the reentry policy forbids overlap
	#[error("an invocation of this action is already in flight")]
	AlreadyInFlight,
}
