//! Field verdict types shared by every validator

use serde::{Deserialize, Serialize};

/// Why a field value failed validation
///
/// Each kind maps to a fixed user-facing message chosen by the validator
/// that produced it. There are no fatal errors: verdicts are returned,
/// never thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Required value is empty (or whitespace-only where trimming applies)
    EmptyValue,
    /// Value does not match the expected shape
    FormatMismatch,
    /// Value has the wrong length
    LengthMismatch,
    /// Value does not equal the field it must match
    Mismatch,
    /// One or more password checklist rows are unsatisfied
    ChecklistUnsatisfied,
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid {
        kind: FailureKind,
        /// Absent only for the overall password verdict, where the
        /// checklist rows are the message surface.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl Verdict {
    /// A valid verdict (never carries a message)
    pub fn valid() -> Self {
        Verdict::Valid
    }

    /// An invalid verdict with its user-facing message
    pub fn invalid(kind: FailureKind, message: impl Into<String>) -> Self {
        Verdict::Invalid {
            kind,
            message: Some(message.into()),
        }
    }

    /// An invalid verdict without a message
    pub fn invalid_unmessaged(kind: FailureKind) -> Self {
        Verdict::Invalid {
            kind,
            message: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// User-facing message, `None` when valid or unmessaged
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { message, .. } => message.as_deref(),
        }
    }

    /// Failure kind, `None` when valid
    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { kind, .. } => Some(*kind),
        }
    }
}
