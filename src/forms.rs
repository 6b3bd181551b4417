//! Signup form values, validation and field errors
//!
//! This module provides access to linkdash-forms.

pub use linkdash_forms::*;
