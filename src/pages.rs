//! The signup page
//!
//! This module provides access to linkdash-pages: the mounted
//! [`SignupForm`](linkdash_pages::SignupForm), its workflow, the injected
//! services and the page settings.
//!
//! ## Example
//!
//! ```rust,ignore
//! use linkdash::pages::{SignupDeps, SignupForm, SignupSettings};
//!
//! let settings = SignupSettings::from_file("signup.toml")?;
//! let form = SignupForm::mount(deps, &settings, current_query);
//! ```

pub use linkdash_pages::*;
