use std::sync::Arc;

use crate::api::dto::account::SignUpRequest;
use crate::api::error::{SignUpError, ValidationError};
use crate::api::protocols::email_validator::EmailValidator;
use crate::domain::models::account::AddAccountModel;

/// Checks a sign-up payload and yields the account candidate.
///
/// Checks run in a fixed order and stop at the first failure: required
/// fields (`name`, `email`, `password`, `passwordConfirmation`), then the
/// password confirmation, then email syntax. The email validator is called
/// at most once, and only when every earlier check passed.
pub struct SignUpValidator {
    email_validator: Arc<dyn EmailValidator>,
}

impl SignUpValidator {
    pub fn new(email_validator: Arc<dyn EmailValidator>) -> Self {
        Self { email_validator }
    }

    pub fn validate(&self, request: SignUpRequest) -> Result<AddAccountModel, SignUpError> {
        let name = required(request.name, "name")?;
        let email = required(request.email, "email")?;
        let password = required(request.password, "password")?;
        let password_confirmation =
            required(request.password_confirmation, "passwordConfirmation")?;

        if password != password_confirmation {
            return Err(ValidationError::InvalidParam("passwordConfirmation").into());
        }

        if !self.email_validator.is_valid(&email)? {
            return Err(ValidationError::InvalidParam("email").into());
        }

        Ok(AddAccountModel {
            name,
            email,
            password,
        })
    }
}

// Empty strings count as absent.
fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingParam(field))
}
