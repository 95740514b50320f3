//! Zipcode validation

use crate::config::ValidationConfig;
use crate::verdict::{FailureKind, Verdict};

/// Single message for every invalid zipcode state
pub const ZIPCODE_MESSAGE: &str = "Must be a valid zipcode";

/// Checks for exactly `zipcode_length` ASCII digits
pub fn is_valid_zipcode(value: &str, config: &ValidationConfig) -> bool {
    value.len() == config.zipcode_length && value.chars().all(|c| c.is_ascii_digit())
}

/// Validate a zipcode field value
///
/// Exactly `zipcode_length` digits is the sole valid boundary: shorter,
/// longer, empty, and non-digit input are all rejected with the same
/// message. The failure kind distinguishes non-digit content
/// ([`FailureKind::FormatMismatch`]) from a bad length
/// ([`FailureKind::LengthMismatch`]).
pub fn validate_zipcode(value: &str, config: &ValidationConfig) -> Verdict {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Verdict::invalid(FailureKind::FormatMismatch, ZIPCODE_MESSAGE);
    }
    if value.len() != config.zipcode_length {
        return Verdict::invalid(FailureKind::LengthMismatch, ZIPCODE_MESSAGE);
    }
    Verdict::valid()
}
