// Validation outcomes

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The four checks offered by the validator set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Integer,
    StringSequence,
    StringLengthSequence,
    Email,
}

impl CheckKind {
    /// Every check, in declaration order
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Integer,
        CheckKind::StringSequence,
        CheckKind::StringLengthSequence,
        CheckKind::Email,
    ];

    /// Constraint name reported alongside a verdict
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Integer => "isInteger",
            CheckKind::StringSequence => "isString",
            CheckKind::StringLengthSequence => "isStringInRange",
            CheckKind::Email => "isEmail",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            CheckKind::Integer => "Good data - is an integer",
            CheckKind::StringSequence => "Good data - is a string",
            CheckKind::StringLengthSequence => "Good data - string is in range",
            CheckKind::Email => "Good data - is an email",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            CheckKind::Integer => "Bad data - not an integer",
            CheckKind::StringSequence => "Bad data - not a valid string",
            CheckKind::StringLengthSequence => "Bad data - string is not in range",
            CheckKind::Email => "Bad data - not an email",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful verdict of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Valid {
    kind: CheckKind,
}

impl Valid {
    pub(crate) fn new(kind: CheckKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.kind.success_message()
    }
}

impl fmt::Display for Valid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Failed verdict of a check.
///
/// The message is fixed per check. Sequence checks also record the index
/// of the first element that failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bad data - not an integer")]
    NotAnInteger,

    #[error("Bad data - not a valid string")]
    InvalidString { index: usize },

    #[error("Bad data - string is not in range")]
    StringOutOfRange { index: usize },

    #[error("Bad data - not an email")]
    NotAnEmail,
}

impl ValidationError {
    pub fn kind(&self) -> CheckKind {
        match self {
            ValidationError::NotAnInteger => CheckKind::Integer,
            ValidationError::InvalidString { .. } => CheckKind::StringSequence,
            ValidationError::StringOutOfRange { .. } => CheckKind::StringLengthSequence,
            ValidationError::NotAnEmail => CheckKind::Email,
        }
    }

    /// Position of the offending element, for sequence checks
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::InvalidString { index }
            | ValidationError::StringOutOfRange { index } => Some(*index),
            _ => None,
        }
    }

    /// Fixed failure message, without allocating
    pub fn message(&self) -> &'static str {
        self.kind().failure_message()
    }
}

/// Result of a single check
pub type ValidationResult = Result<Valid, ValidationError>;

/// Serializable summary of a verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub constraint: &'static str,
    pub valid: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Report {
    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&ValidationResult> for Report {
    fn from(result: &ValidationResult) -> Self {
        match result {
            Ok(valid) => Self {
                constraint: valid.kind().name(),
                valid: true,
                message: valid.message(),
                index: None,
            },
            Err(error) => Self {
                constraint: error.kind().name(),
                valid: false,
                message: error.message(),
                index: error.index(),
            },
        }
    }
}
