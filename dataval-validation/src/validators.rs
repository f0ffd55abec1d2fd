// Built-in validators

use crate::{CheckKind, Valid, ValidationError, ValidationResult, Validator};
use dataval_log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const LOG_TARGET: &str = "dataval::validation";

// ECMAScript whitespace. Differs from the regex crate's Unicode `\s`: it
// includes U+FEFF and excludes U+0085.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Local part: dot-separated atoms or a quoted string. Domain: bracketed
// IPv4 literal or dot-separated labels ending in 2+ letters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:@"{WHITESPACE}]+"#);
    let pattern = format!(
        r#"^(({atom}(\.{atom})*)|("[^\n\r\x{{2028}}\x{{2029}}]+"))@((\[[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{{2,}}))$"#
    );
    Regex::new(&pattern).expect("email pattern is a valid regex")
});

fn accept(kind: CheckKind) -> ValidationResult {
    trace!(target: LOG_TARGET, "{} accepted input", kind);
    Ok(Valid::new(kind))
}

fn reject(error: ValidationError) -> ValidationResult {
    match error.index() {
        Some(index) => debug!(target: LOG_TARGET, "{} rejected element {}: {}", error.kind(), index, error),
        None => debug!(target: LOG_TARGET, "{} rejected input: {}", error.kind(), error),
    }
    Err(error)
}

/// Truthiness of a dynamic value: null, false, 0, and "" are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Length of a string in UTF-16 code units
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

// Integer validator

/// Validates that a value is a whole number of at least 1
pub struct IsInteger;

impl IsInteger {
    pub fn validate(value: &Value) -> ValidationResult {
        match value {
            Value::Number(n) if is_truthy(value) => match n.as_f64() {
                Some(n) => Self::validate_f64(n),
                None => reject(ValidationError::NotAnInteger),
            },
            _ => reject(ValidationError::NotAnInteger),
        }
    }

    pub fn validate_i64(value: i64) -> ValidationResult {
        if value >= 1 {
            accept(CheckKind::Integer)
        } else {
            reject(ValidationError::NotAnInteger)
        }
    }

    /// NaN, infinities and fractional values are rejected.
    pub fn validate_f64(value: f64) -> ValidationResult {
        if value.is_finite() && value.fract() == 0.0 && value >= 1.0 {
            accept(CheckKind::Integer)
        } else {
            reject(ValidationError::NotAnInteger)
        }
    }
}

impl Validator for IsInteger {
    fn check(&self, value: &Value) -> ValidationResult {
        Self::validate(value)
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Integer
    }
}

// String sequence validator

/// Validates that every element of a sequence is a non-empty string.
/// An empty sequence passes.
pub struct NotEmptyStrings;

impl NotEmptyStrings {
    pub fn validate(value: &Value) -> ValidationResult {
        let Some(items) = value.as_array() else {
            return reject(ValidationError::InvalidString { index: 0 });
        };

        let offending = items
            .iter()
            .position(|item| !(item.is_string() && is_truthy(item)));

        match offending {
            Some(index) => reject(ValidationError::InvalidString { index }),
            None => accept(CheckKind::StringSequence),
        }
    }

    pub fn validate_strs<S: AsRef<str>>(items: &[S]) -> ValidationResult {
        match items.iter().position(|item| item.as_ref().is_empty()) {
            Some(index) => reject(ValidationError::InvalidString { index }),
            None => accept(CheckKind::StringSequence),
        }
    }
}

impl Validator for NotEmptyStrings {
    fn check(&self, value: &Value) -> ValidationResult {
        Self::validate(value)
    }

    fn kind(&self) -> CheckKind {
        CheckKind::StringSequence
    }
}

// String length validator

/// Validates a sequence of `[candidate, bound]` pairs: each candidate must be
/// a string shorter than its bound. The bound is exclusive.
pub struct StringsInRange;

impl StringsInRange {
    pub fn validate(value: &Value) -> ValidationResult {
        let Some(pairs) = value.as_array() else {
            return reject(ValidationError::StringOutOfRange { index: 0 });
        };

        match pairs.iter().position(|pair| !Self::pair_in_range(pair)) {
            Some(index) => reject(ValidationError::StringOutOfRange { index }),
            None => accept(CheckKind::StringLengthSequence),
        }
    }

    pub fn validate_pairs<S: AsRef<str>>(pairs: &[(S, usize)]) -> ValidationResult {
        let offending = pairs
            .iter()
            .position(|(candidate, bound)| utf16_len(candidate.as_ref()) >= *bound);

        match offending {
            Some(index) => reject(ValidationError::StringOutOfRange { index }),
            None => accept(CheckKind::StringLengthSequence),
        }
    }

    fn pair_in_range(pair: &Value) -> bool {
        match pair.as_array().map(Vec::as_slice) {
            Some([Value::String(candidate), bound, ..]) => bound
                .as_f64()
                .is_some_and(|bound| (utf16_len(candidate) as f64) < bound),
            _ => false,
        }
    }
}

impl Validator for StringsInRange {
    fn check(&self, value: &Value) -> ValidationResult {
        Self::validate(value)
    }

    fn kind(&self) -> CheckKind {
        CheckKind::StringLengthSequence
    }
}

// Email validator

/// Validates email format. The candidate is lower-cased before matching.
pub struct IsEmail;

impl IsEmail {
    /// Non-string candidates are rejected.
    pub fn validate(value: &Value) -> ValidationResult {
        match value.as_str() {
            Some(candidate) => Self::validate_str(candidate),
            None => reject(ValidationError::NotAnEmail),
        }
    }

    pub fn validate_str(candidate: &str) -> ValidationResult {
        if EMAIL_REGEX.is_match(&candidate.to_lowercase()) {
            accept(CheckKind::Email)
        } else {
            reject(ValidationError::NotAnEmail)
        }
    }
}

impl Validator for IsEmail {
    fn check(&self, value: &Value) -> ValidationResult {
        Self::validate(value)
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Email
    }
}
