//! # signup-forms
//!
//! Client-side style validation for a signup form (email, zipcode,
//! password, confirm-password), split the same way on every target:
//!
//! - **`signup-validation`** - the pure engine: verdicts, the password
//!   checklist, and whole-form validation. Always available, re-exported
//!   as [`validation`].
//! - **`signup-surface`** - the engine-to-UI contract and the event
//!   controller that sequences live and submit-time validation
//!   (`surface` feature, on by default).
//! - **`signup-form-types`** - validated newtypes for fields whose
//!   invariants should travel with the value (`types` feature).
//!
//! ## Quick start
//!
//! ```rust
//! use signup_forms::validation::{validate_form, FormState, ValidationConfig};
//!
//! let state = FormState {
//!     email: "foo@bar.com".to_string(),
//!     zipcode: "12345".to_string(),
//!     password: "Abcdefg1".to_string(),
//!     confirm_password: "Abcdefg1".to_string(),
//! };
//!
//! let report = validate_form(&state, &ValidationConfig::default());
//! assert!(report.overall_valid);
//! ```

pub use signup_validation as validation;

#[cfg(feature = "surface")]
pub use signup_surface as surface;

#[cfg(feature = "types")]
pub use signup_form_types as types;

// Flat re-exports of the types nearly every consumer touches
pub use signup_validation::{
    FailureKind, FormReport, FormState, PasswordChecklist, ValidationConfig, Verdict,
};

#[cfg(feature = "surface")]
pub use signup_surface::{FieldEvent, FieldId, FormController, SignupSurface};
