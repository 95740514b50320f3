//! Validated newtypes for signup form fields
//!
//! Newtype wrappers using the `nutype` crate, validated at construction
//! time with the same predicates the live form validation uses. A value of
//! one of these types is proof the field content passed validation, so
//! downstream code never re-checks strings.
//!
//! All types serialize/deserialize with serde, so they can cross a
//! client/server boundary without losing their guarantee (deserialization
//! re-runs the predicate).

use nutype::nutype;
use signup_validation::{
    is_valid_email as email_shape, is_valid_signup_password as password_rules,
    is_valid_zipcode as zipcode_shape, ValidationConfig,
};

/// A well-formed email address (local part, '@', dot-separated domain)
#[nutype(
    validate(predicate = is_signup_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Exactly five ASCII digits
#[nutype(
    validate(predicate = is_signup_zipcode),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Zipcode(String);

/// A password satisfying the full signup checklist at the default policy:
/// 8+ characters, uppercase first letter, at least one digit
#[nutype(
    validate(predicate = is_signup_password),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Serialize,
        Deserialize,
    )
)]
pub struct SignupPassword(String);

// -----------------------------------------------------------------------------
// Predicates (default policy thresholds)
// -----------------------------------------------------------------------------

fn is_signup_email(value: &str) -> bool {
    email_shape(value)
}

fn is_signup_zipcode(value: &str) -> bool {
    zipcode_shape(value, &ValidationConfig::default())
}

fn is_signup_password(value: &str) -> bool {
    password_rules(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_address_construction() {
        assert!(EmailAddress::try_new("user@example.com".to_string()).is_ok());
        assert!(EmailAddress::try_new("foo@bar.com".to_string()).is_ok());

        assert!(EmailAddress::try_new("".to_string()).is_err());
        assert!(EmailAddress::try_new("foo@bar".to_string()).is_err());
        assert!(EmailAddress::try_new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn zipcode_construction() {
        assert!(Zipcode::try_new("12345".to_string()).is_ok());

        assert!(Zipcode::try_new("1234".to_string()).is_err());
        assert!(Zipcode::try_new("123456".to_string()).is_err());
        assert!(Zipcode::try_new("1234a".to_string()).is_err());
    }

    #[test]
    fn signup_password_construction() {
        assert!(SignupPassword::try_new("Abcdefg1".to_string()).is_ok());

        // one missing checklist row each
        assert!(SignupPassword::try_new("abcdefg1".to_string()).is_err());
        assert!(SignupPassword::try_new("Abcdefgh".to_string()).is_err());
        assert!(SignupPassword::try_new("Abcdef1".to_string()).is_err());
    }

    #[test]
    fn zipcode_serde_round_trip() {
        let zipcode = Zipcode::try_new("12345".to_string()).unwrap();
        let json = serde_json::to_string(&zipcode).unwrap();
        assert_eq!(json, r#""12345""#);
        let restored: Zipcode = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, zipcode);
    }

    #[test]
    fn deserialization_re_runs_validation() {
        assert!(serde_json::from_str::<Zipcode>(r#""1234""#).is_err());
        assert!(serde_json::from_str::<EmailAddress>(r#""foo@bar""#).is_err());
    }

    #[test]
    fn email_display_and_as_ref() {
        let email = EmailAddress::try_new("user@example.com".to_string()).unwrap();
        assert_eq!(email.to_string(), "user@example.com");
        assert_eq!(email.as_ref(), "user@example.com");
    }
}
