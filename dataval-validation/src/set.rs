// The validator set

use crate::{
    AsyncValidator, CheckKind, IsEmail, IsInteger, NotEmptyStrings, StringsInRange,
    ValidationResult, Validator,
};
use serde_json::Value;

impl CheckKind {
    /// The validator implementing this check
    pub fn validator(&self) -> &'static dyn Validator {
        match self {
            CheckKind::Integer => &IsInteger,
            CheckKind::StringSequence => &NotEmptyStrings,
            CheckKind::StringLengthSequence => &StringsInRange,
            CheckKind::Email => &IsEmail,
        }
    }
}

/// Namespace grouping the four checks.
///
/// Every operation is stateless: the same input always yields the same
/// verdict, and calls may run concurrently.
pub struct Validation;

impl Validation {
    /// Succeeds for whole numbers of at least 1
    pub fn validate_integer(value: &Value) -> ValidationResult {
        IsInteger::validate(value)
    }

    /// Succeeds when every element is a non-empty string, including for an
    /// empty sequence
    pub fn validate_string_sequence(sequence: &Value) -> ValidationResult {
        NotEmptyStrings::validate(sequence)
    }

    /// Succeeds when every `[candidate, bound]` pair holds a string shorter
    /// than its bound
    pub fn validate_string_length_sequence(pairs: &Value) -> ValidationResult {
        StringsInRange::validate(pairs)
    }

    /// Succeeds when the lower-cased candidate is shaped like an email address
    pub fn validate_email(candidate: &Value) -> ValidationResult {
        IsEmail::validate(candidate)
    }

    /// Run the check named by `kind`
    pub fn check(kind: CheckKind, value: &Value) -> ValidationResult {
        kind.validator().check(value)
    }

    /// Deferred form of [`Validation::check`]
    pub async fn check_async(kind: CheckKind, value: &Value) -> ValidationResult {
        kind.validator().check_async(value).await
    }
}
