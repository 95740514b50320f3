//! Confirm-password validation

use crate::verdict::{FailureKind, Verdict};

/// Message for an empty confirm-password field
pub const CONFIRM_EMPTY_MESSAGE: &str = "Confirm password cannot be empty";
/// Message when the two password fields differ
pub const CONFIRM_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Validate the confirm-password field against the current password value
pub fn validate_confirm_password(confirm: &str, password: &str) -> Verdict {
    if confirm.is_empty() {
        return Verdict::invalid(FailureKind::EmptyValue, CONFIRM_EMPTY_MESSAGE);
    }
    if confirm != password {
        return Verdict::invalid(FailureKind::Mismatch, CONFIRM_MISMATCH_MESSAGE);
    }
    Verdict::valid()
}
