//! Whole-form validation

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::confirm::validate_confirm_password;
use crate::email::validate_email;
use crate::password::{check_password_checklist, PasswordChecklist};
use crate::verdict::{FailureKind, Verdict};
use crate::zipcode::validate_zipcode;

/// Current values of every signup field, owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub email: String,
    pub zipcode: String,
    pub password: String,
    pub confirm_password: String,
}

/// Everything one full validation pass produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    pub email: Verdict,
    pub zipcode: Verdict,
    pub password: Verdict,
    /// Row-by-row password results backing the password verdict
    pub password_checklist: PasswordChecklist,
    pub confirm_password: Verdict,
    /// Logical AND of all four field verdicts
    pub overall_valid: bool,
}

/// Validate every field independently
///
/// No short-circuit: every verdict is produced even when an earlier field
/// fails, so the surface can show all errors simultaneously on a submit
/// attempt.
pub fn validate_form(state: &FormState, config: &ValidationConfig) -> FormReport {
    let email = validate_email(&state.email);
    let zipcode = validate_zipcode(&state.zipcode, config);
    let password_checklist = check_password_checklist(&state.password, config);
    let password = if password_checklist.all_satisfied() {
        Verdict::valid()
    } else {
        Verdict::invalid_unmessaged(FailureKind::ChecklistUnsatisfied)
    };
    let confirm_password = validate_confirm_password(&state.confirm_password, &state.password);

    let overall_valid = email.is_valid()
        && zipcode.is_valid()
        && password.is_valid()
        && confirm_password.is_valid();

    FormReport {
        email,
        zipcode,
        password,
        password_checklist,
        confirm_password,
        overall_valid,
    }
}
