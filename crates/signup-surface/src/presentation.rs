//! Presentation states that verdicts map onto

use serde::{Deserialize, Serialize};
use signup_validation::{PasswordChecklist, Verdict};

/// Which signup field an event or presentation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Email,
    Zipcode,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in form order
    pub const ALL: [FieldId; 4] = [
        FieldId::Email,
        FieldId::Zipcode,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];
}

/// Error-visible vs cleared state for one field
///
/// The surface decides what "error visible" looks like; the message is the
/// text to show when there is one (the password field's overall verdict
/// has none, its checklist carries the detail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldPresentation {
    ErrorVisible {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Clear,
}

impl From<&Verdict> for FieldPresentation {
    fn from(verdict: &Verdict) -> Self {
        if verdict.is_valid() {
            FieldPresentation::Clear
        } else {
            FieldPresentation::ErrorVisible {
                message: verdict.message().map(str::to_owned),
            }
        }
    }
}

/// Satisfied/unsatisfied state of one checklist row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItemState {
    Satisfied,
    Unsatisfied,
}

impl From<bool> for ChecklistItemState {
    fn from(satisfied: bool) -> Self {
        if satisfied {
            ChecklistItemState::Satisfied
        } else {
            ChecklistItemState::Unsatisfied
        }
    }
}

/// Presentation of the three password checklist rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistPresentation {
    pub min_length: ChecklistItemState,
    pub capital_first: ChecklistItemState,
    pub has_digit: ChecklistItemState,
}

impl From<PasswordChecklist> for ChecklistPresentation {
    fn from(checklist: PasswordChecklist) -> Self {
        Self {
            min_length: checklist.min_length.into(),
            capital_first: checklist.capital_first.into(),
            has_digit: checklist.has_digit.into(),
        }
    }
}
