use crate::domain::error::AppResult;

/// Email syntax check used by the sign-up validator.
///
/// Implementations hold no shared mutable state. An `Err` means the check
/// itself broke, not that the address is invalid.
pub trait EmailValidator: 'static + Sync + Send {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}
