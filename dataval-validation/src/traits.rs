// Validation traits

use crate::{CheckKind, ValidationResult};
use async_trait::async_trait;
use serde_json::Value;

/// A single check over a dynamic value
pub trait Validator: Send + Sync {
    /// Validate the value
    fn check(&self, value: &Value) -> ValidationResult;

    /// Which check this is
    fn kind(&self) -> CheckKind;

    /// Constraint name
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Deferred form of [`Validator`], for callers composing with other async
/// operations.
///
/// Every [`Validator`] is an `AsyncValidator`; the check itself runs to
/// completion before the future resolves.
#[async_trait]
pub trait AsyncValidator: Send + Sync {
    async fn check_async(&self, value: &Value) -> ValidationResult;
}

#[async_trait]
impl<T> AsyncValidator for T
where
    T: Validator + ?Sized,
{
    async fn check_async(&self, value: &Value) -> ValidationResult {
        self.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IsEmail, IsInteger};
    use serde_json::json;

    #[tokio::test]
    async fn test_async_matches_sync() {
        let inputs = [json!(7), json!(0), json!("7"), json!(2.5)];
        for input in &inputs {
            assert_eq!(IsInteger.check_async(input).await, IsInteger.check(input));
        }
    }

    #[tokio::test]
    async fn test_trait_object() {
        let validator: Box<dyn Validator> = Box::new(IsEmail);
        assert!(validator.check_async(&json!("a@b.co")).await.is_ok());
        assert_eq!(validator.name(), "isEmail");
    }
}
