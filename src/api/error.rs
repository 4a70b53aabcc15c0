use thiserror::Error;

use crate::domain::error::AppError;

/// Reason a sign-up request was rejected before any account was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
}

impl ValidationError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingParam(field) | Self::InvalidParam(field) => field,
        }
    }
}

/// Opaque marker for an unexpected failure. Carries no cause on purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("Internal server error")]
pub struct ServerError;

impl ServerError {
    pub fn name(&self) -> &'static str {
        "ServerError"
    }
}

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Unexpected(#[from] AppError),
}
