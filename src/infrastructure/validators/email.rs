use validator::ValidateEmail;

use crate::api::protocols::email_validator::EmailValidator;
use crate::domain::error::AppResult;

/// Email syntax check backed by the `validator` crate (HTML5 rules).
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
