use actix_web::{Responder, body::BoxBody, http::StatusCode};

use crate::api::dto::account::{AccountDTO, ErrorDTO};
use crate::api::error::{ServerError, ValidationError};
use crate::domain::models::account::Account;

#[derive(Debug)]
pub struct HttpRequest<T> {
    pub body: T,
}

/// Response envelope produced for every sign-up outcome.
#[derive(Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResponseBody {
    Account(Account),
    Invalid(ValidationError),
    Server(ServerError),
}

pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Invalid(error),
    }
}

pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Server(ServerError),
    }
}

pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: ResponseBody::Account(account),
    }
}

impl Responder for HttpResponse {
    type Body = BoxBody;

    fn respond_to(self, _: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
        let mut response = actix_web::HttpResponse::build(self.status_code);

        match self.body {
            ResponseBody::Account(account) => response.json(AccountDTO::from(account)),
            ResponseBody::Invalid(error) => response.json(ErrorDTO::new(
                self.status_code,
                error.name(),
                error.to_string(),
            )),
            ResponseBody::Server(error) => response.json(ErrorDTO::new(
                self.status_code,
                error.name(),
                error.to_string(),
            )),
        }
    }
}
