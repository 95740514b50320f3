//! Signup Validation Engine
//!
//! Pure validation functions for a signup-style form: email, zipcode,
//! password (live checklist) and confirm-password.
//!
//! Every function here is a stateless transformation from field value(s)
//! to a [`Verdict`] or checklist result. No DOM, no I/O, no global state;
//! a UI layer consumes the verdicts and decides how to present them.

pub mod config;
pub mod confirm;
pub mod email;
pub mod form;
pub mod password;
pub mod verdict;
pub mod zipcode;

// Re-export all validators
pub use config::*;
pub use confirm::*;
pub use email::*;
pub use form::*;
pub use password::*;
pub use verdict::*;
pub use zipcode::*;
