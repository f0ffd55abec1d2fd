//! Input validators for dataval
//!
//! Four independent checks over dynamic (`serde_json::Value`) inputs, each
//! settling into a [`Valid`] verdict or a [`ValidationError`] with a fixed
//! message:
//!
//! | Check | Success | Failure |
//! |---|---|---|
//! | [`IsInteger`] | Good data - is an integer | Bad data - not an integer |
//! | [`NotEmptyStrings`] | Good data - is a string | Bad data - not a valid string |
//! | [`StringsInRange`] | Good data - string is in range | Bad data - string is not in range |
//! | [`IsEmail`] | Good data - is an email | Bad data - not an email |
//!
//! # Examples
//!
//! ```
//! use dataval_validation::{Validation, ValidationError};
//! use serde_json::json;
//!
//! assert!(Validation::validate_integer(&json!(12)).is_ok());
//! assert!(Validation::validate_string_sequence(&json!(["a", "b"])).is_ok());
//! assert!(Validation::validate_email(&json!("youremail@domain.com")).is_ok());
//!
//! let result = Validation::validate_string_length_sequence(&json!([
//!     ["myString", 5],
//!     ["mySecondString", 35]
//! ]));
//! assert_eq!(result, Err(ValidationError::StringOutOfRange { index: 0 }));
//! ```
//!
//! ## Typed inputs
//!
//! ```
//! use dataval_validation::{IsEmail, IsInteger, NotEmptyStrings, StringsInRange};
//!
//! assert!(IsInteger::validate_i64(42).is_ok());
//! assert!(IsInteger::validate_f64(1.5).is_err());
//! assert!(NotEmptyStrings::validate_strs(&["first", "second"]).is_ok());
//! assert!(StringsInRange::validate_pairs(&[("first string", 255), ("next string", 50)]).is_ok());
//! assert!(IsEmail::validate_str("user@[192.168.0.1]").is_ok());
//! ```
//!
//! ## Async callers
//!
//! ```
//! use dataval_validation::{AsyncValidator, IsEmail};
//! use serde_json::json;
//!
//! # async fn example() {
//! let verdict = IsEmail.check_async(&json!("youremail@domain.com")).await;
//! assert!(verdict.is_ok());
//! # }
//! ```

mod errors;
mod set;
mod traits;
mod validators;

pub use errors::*;
pub use set::*;
pub use traits::*;
pub use validators::*;
