//! Async actions with observable loading state.
//!
//! An [`AsyncAction`] wraps an asynchronous operation and exposes the outcome
//! of its most recent invocation as an [`ActionState`]: the returned data, the
//! error, and whether an invocation is in flight. Callers start invocations
//! explicitly with [`AsyncAction::trigger`], and observers follow the state
//! through a watch channel or through the ordered [`ActionEvent`] stream.
//!
//! ## Example
//!
//! ```
//! use linkdash_action::{ActionEvent, AsyncAction};
//!
//! # tokio_test::block_on(async {
//! let fetch = AsyncAction::new(|id: u32| async move {
//!     if id == 0 {
//!         Err("not found".to_string())
//!     } else {
//!         Ok(format!("item-{id}"))
//!     }
//! });
//! let mut events = fetch.events();
//!
//! fetch.trigger(0).await.unwrap();
//! assert_eq!(fetch.state().error.as_deref(), Some("not found"));
//!
//! assert_eq!(events.recv().await.unwrap(), ActionEvent::Started);
//! assert_eq!(
//!     events.recv().await.unwrap(),
//!     ActionEvent::Failed("not found".to_string())
//! );
//! # })
//! ```

pub mod action;
pub mod error;
pub mod state;

pub use action::{AsyncAction, DEFAULT_EVENT_CAPACITY, ReentryPolicy};
pub use error::ActionError;
pub use state::{ActionEvent, ActionOutcome, ActionState};
