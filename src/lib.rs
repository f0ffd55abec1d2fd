// dataval - small, stateless input validators
//
// The facade re-exports the member crates so callers depend on one package
// and pick what they need through features.

#[cfg(feature = "validation")]
pub use dataval_validation as validation;

#[cfg(feature = "validation")]
pub use dataval_validation::{
    AsyncValidator, CheckKind, Report, Valid, Validation, ValidationError, ValidationResult,
    Validator,
};

#[cfg(feature = "log")]
pub use dataval_log as log;
