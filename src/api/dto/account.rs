use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::{ServerError, ValidationError};
use crate::domain::models::account::Account;

/// Raw sign-up payload. Every field may be absent.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password_confirmation: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDTO {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl ErrorDTO {
    pub fn new(status: StatusCode, error: &str, message: String) -> Self {
        ErrorDTO {
            code: status.as_u16(),
            error: error.to_owned(),
            message,
        }
    }

    pub fn example_400() -> ErrorDTO {
        let error = ValidationError::MissingParam("name");
        ErrorDTO::new(StatusCode::BAD_REQUEST, error.name(), error.to_string())
    }

    pub fn example_500() -> ErrorDTO {
        ErrorDTO::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ServerError.name(),
            ServerError.to_string(),
        )
    }
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
        }
    }
}
