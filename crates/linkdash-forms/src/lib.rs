//! Signup form processing for linkdash
//!
//! This crate provides:
//! - [`FormState`]: the current values of the signup inputs and the input
//!   change handling that mutates them
//! - [`ValidationSchema`]: declarative per-field rules evaluated exhaustively
//! - [`ErrorMap`]: one display message per field, built from the schema's
//!   violations with the last message per field kept
//! - [`SignupRequest`]: the typed payload built from a validated form

pub mod errors;
pub mod field;
pub mod form;
pub mod schema;
pub mod validators;

pub use errors::ErrorMap;
pub use field::FieldName;
pub use form::{FieldValue, FormError, FormState, InputChange, ProfilePicture, SignupRequest};
pub use schema::{
	DEFAULT_MIN_PASSWORD_LENGTH, FieldRules, FieldViolation, Rule, ValidationErrors,
	ValidationSchema,
};
pub use validators::FieldValidator;
