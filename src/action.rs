//! Async operations with observable loading state
//!
//! This module provides access to linkdash-action. See [`AsyncAction`] for
//! the state machine and [`ReentryPolicy`] for overlapping invocations.

pub use linkdash_action::*;
