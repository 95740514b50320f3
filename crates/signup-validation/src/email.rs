//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::verdict::{FailureKind, Verdict};

/// Message for an empty email field
pub const EMAIL_EMPTY_MESSAGE: &str = "Email cannot be empty";
/// Message for a malformed email address
pub const EMAIL_FORMAT_MESSAGE: &str = "Must be a valid email address";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Checks email shape: local part, '@', domain with a dot-separated suffix
/// and a 2+ character TLD
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate an email field value
///
/// Empty (or whitespace-only) input is reported as [`FailureKind::EmptyValue`]
/// rather than a format failure so the surface can word the two differently.
pub fn validate_email(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::invalid(FailureKind::EmptyValue, EMAIL_EMPTY_MESSAGE);
    }
    if !is_valid_email(value) {
        return Verdict::invalid(FailureKind::FormatMismatch, EMAIL_FORMAT_MESSAGE);
    }
    Verdict::valid()
}
