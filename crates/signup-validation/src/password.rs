//! Password checklist validation

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::verdict::{FailureKind, Verdict};

/// Result of the three independent password rules
///
/// Each boolean drives one checklist row in the surface. All three are
/// always evaluated (no early return) so every row can update on each
/// keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChecklist {
    /// Length meets the configured minimum
    pub min_length: bool,
    /// First character is an ASCII uppercase letter
    pub capital_first: bool,
    /// Contains at least one digit
    pub has_digit: bool,
}

impl PasswordChecklist {
    /// True when every row is satisfied
    pub fn all_satisfied(&self) -> bool {
        self.min_length && self.capital_first && self.has_digit
    }
}

/// Evaluate the three checklist rules for a password
pub fn check_password_checklist(value: &str, config: &ValidationConfig) -> PasswordChecklist {
    PasswordChecklist {
        min_length: value.chars().count() >= config.password_min_length,
        capital_first: value
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_uppercase()),
        has_digit: value.chars().any(|c| c.is_ascii_digit()),
    }
}

/// Predicate form at the default policy, for validated newtypes and quick
/// checks
pub fn is_valid_signup_password(value: &str) -> bool {
    check_password_checklist(value, &ValidationConfig::default()).all_satisfied()
}

/// Overall password verdict: valid iff every checklist row is satisfied
///
/// The invalid verdict carries no message; the checklist rows are the
/// message surface and the caller decides how to present them.
pub fn validate_password_overall(value: &str, config: &ValidationConfig) -> Verdict {
    if check_password_checklist(value, config).all_satisfied() {
        Verdict::valid()
    } else {
        Verdict::invalid_unmessaged(FailureKind::ChecklistUnsatisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[test]
    fn satisfied_checklist() {
        let checklist = check_password_checklist("Abcdefg1", &config());
        assert!(checklist.min_length);
        assert!(checklist.capital_first);
        assert!(checklist.has_digit);
        assert!(checklist.all_satisfied());
    }

    #[test]
    fn lowercase_first_letter_fails_only_that_row() {
        let checklist = check_password_checklist("abcdefg1", &config());
        assert!(checklist.min_length);
        assert!(!checklist.capital_first);
        assert!(checklist.has_digit);
        assert!(!checklist.all_satisfied());
    }

    #[test]
    fn short_password_fails_only_the_length_row() {
        let checklist = check_password_checklist("Abc1", &config());
        assert_eq!(
            checklist,
            PasswordChecklist {
                min_length: false,
                capital_first: true,
                has_digit: true,
            }
        );
    }

    #[test]
    fn empty_password_fails_every_row() {
        let checklist = check_password_checklist("", &config());
        assert!(!checklist.min_length);
        assert!(!checklist.capital_first);
        assert!(!checklist.has_digit);
    }

    #[rstest]
    #[case("Abcdefgh", false)]
    #[case("Abcdefg1", true)]
    #[case("A1234567", true)]
    #[case("NoDigitsHere", false)]
    fn has_digit_row(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check_password_checklist(value, &config()).has_digit, expected);
    }

    #[test]
    fn minimum_length_is_configurable() {
        let config = ValidationConfig {
            password_min_length: 7,
            ..ValidationConfig::default()
        };
        assert!(check_password_checklist("Abcdef1", &config).min_length);
        assert!(!check_password_checklist("Abcde1", &config).min_length);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 8 characters, more than 8 bytes
        let checklist = check_password_checklist("Pässwör1", &config());
        assert!(checklist.min_length);
    }

    #[test]
    fn default_policy_predicate() {
        assert!(is_valid_signup_password("Abcdefg1"));
        assert!(!is_valid_signup_password("abcdefg1"));
        assert!(!is_valid_signup_password("Abcdefgh"));
        assert!(!is_valid_signup_password("Abcdef1"));
    }

    #[test]
    fn overall_verdict_requires_all_rows() {
        assert!(validate_password_overall("Abcdefg1", &config()).is_valid());

        let verdict = validate_password_overall("abcdefg1", &config());
        assert_eq!(verdict.failure(), Some(FailureKind::ChecklistUnsatisfied));
        assert_eq!(verdict.message(), None);
    }
}
