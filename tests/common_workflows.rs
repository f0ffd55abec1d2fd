//! Integration tests for common dataval workflows.
//!
//! These go through the facade crate the way an application would.

#![cfg(feature = "validation")]

use dataval::validation::{IsEmail, NotEmptyStrings, StringsInRange};
use dataval::{AsyncValidator, CheckKind, Report, Validation, ValidationError};
use serde_json::{Value, json};

// =============================================================================
// Form-style input
// =============================================================================

struct SignupForm {
    age: Value,
    tags: Value,
    names: Value,
    email: Value,
}

fn check_form(form: &SignupForm) -> Result<(), ValidationError> {
    Validation::validate_integer(&form.age)?;
    Validation::validate_string_sequence(&form.tags)?;
    Validation::validate_string_length_sequence(&form.names)?;
    Validation::validate_email(&form.email)?;
    Ok(())
}

#[test]
fn test_valid_form_passes_every_check() {
    let form = SignupForm {
        age: json!(34),
        tags: json!(["rust", "validation"]),
        names: json!([["first string", 255], ["next string", 50]]),
        email: json!("youremail@domain.com"),
    };
    assert!(check_form(&form).is_ok());
}

#[test]
fn test_first_failure_short_circuits_with_its_message() {
    let form = SignupForm {
        age: json!(34),
        tags: json!(["rust", ""]),
        names: json!([["x", 0]]),
        email: json!(12),
    };
    let error = check_form(&form).unwrap_err();
    assert_eq!(error.kind(), CheckKind::StringSequence);
    assert_eq!(error.to_string(), "Bad data - not a valid string");
}

// =============================================================================
// Fixed messages
// =============================================================================

#[test]
fn test_message_table() {
    let expected = [
        (CheckKind::Integer, "Good data - is an integer", "Bad data - not an integer"),
        (CheckKind::StringSequence, "Good data - is a string", "Bad data - not a valid string"),
        (
            CheckKind::StringLengthSequence,
            "Good data - string is in range",
            "Bad data - string is not in range",
        ),
        (CheckKind::Email, "Good data - is an email", "Bad data - not an email"),
    ];
    for (kind, success, failure) in expected {
        assert_eq!(kind.success_message(), success);
        assert_eq!(kind.failure_message(), failure);
    }
}

#[test]
fn test_failure_message_per_check() {
    let failing: [(CheckKind, Value); 4] = [
        (CheckKind::Integer, json!(-4)),
        (CheckKind::StringSequence, json!([false])),
        (CheckKind::StringLengthSequence, json!([[true, 5]])),
        (CheckKind::Email, json!("not-an-email")),
    ];
    for (kind, value) in &failing {
        let error = Validation::check(*kind, value).unwrap_err();
        assert_eq!(error.kind(), *kind);
        assert_eq!(error.to_string(), kind.failure_message());
    }
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_report_for_api_response() {
    let result = Validation::validate_string_length_sequence(&json!([
        ["myString", 20],
        ["mySecondString", 5]
    ]));
    let json = Report::from(&result).to_json();
    assert_eq!(json["valid"], false);
    assert_eq!(json["constraint"], "isStringInRange");
    assert_eq!(json["index"], 1);
}

// =============================================================================
// Typed helpers
// =============================================================================

#[test]
fn test_typed_helpers_through_facade() {
    let tags = vec!["alpha".to_string(), "beta".to_string()];
    assert!(NotEmptyStrings::validate_strs(&tags[..]).is_ok());
    assert!(StringsInRange::validate_pairs(&[("myString", 20usize), ("mySecondString", 35)]).is_ok());
    assert!(IsEmail::validate_str("USER@DOMAIN.COM").is_ok());
}

// =============================================================================
// Async composition
// =============================================================================

#[test]
fn test_deferred_check_blocking() {
    let verdict = tokio_test::block_on(Validation::check_async(
        CheckKind::Email,
        &json!("user@[192.168.0.1]"),
    ));
    assert_eq!(verdict.unwrap().message(), "Good data - is an email");
}

#[tokio::test]
async fn test_validators_as_trait_objects() {
    let inputs: [(CheckKind, Value); 4] = [
        (CheckKind::Integer, json!(12)),
        (CheckKind::StringSequence, json!([])),
        (CheckKind::StringLengthSequence, json!([["ok", 3]])),
        (CheckKind::Email, json!("youremail@domain.com")),
    ];
    for (kind, value) in &inputs {
        let validator = kind.validator();
        assert!(validator.check_async(value).await.is_ok(), "{} failed", kind);
    }
}

#[cfg(feature = "log")]
#[test]
fn test_logging_does_not_affect_verdicts() {
    dataval::log::set_debug(true);
    let noisy = Validation::validate_email(&json!("nope"));
    dataval::log::set_level(dataval::log::Level::Off);
    let quiet = Validation::validate_email(&json!("nope"));
    assert_eq!(noisy, quiet);
}
