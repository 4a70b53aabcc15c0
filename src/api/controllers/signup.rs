use std::sync::Arc;

use crate::api::dto::account::{AccountDTO, ErrorDTO, SignUpRequest};
use crate::api::error::SignUpError;
use crate::api::middlewares::json::Json;
use crate::api::protocols::email_validator::EmailValidator;
use crate::api::protocols::http::{HttpRequest, HttpResponse, bad_request, ok, server_error};
use crate::api::validators::signup::SignUpValidator;
use crate::domain::models::account::Account;
use crate::domain::services::add_account::AddAccount;

use actix_web::{post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup);
}

/// Sign-up entry point: validation, then account creation.
///
/// Every outcome ends in an [`HttpResponse`]: 400 with the first validation
/// error, 200 with the created account, or 500 with an opaque server error
/// when a collaborator fails. The failure cause is logged, never returned.
pub struct SignUpController {
    validator: SignUpValidator,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            validator: SignUpValidator::new(email_validator),
            add_account,
        }
    }

    #[tracing::instrument(name = "signup", skip_all)]
    pub async fn handle(&self, request: HttpRequest<SignUpRequest>) -> HttpResponse {
        match self.create_account(request.body).await {
            Ok(account) => {
                tracing::info!(account.id = %account.id, "account created");
                ok(account)
            }
            Err(SignUpError::Validation(error)) => {
                tracing::debug!(field = error.field(), %error, "sign-up request rejected");
                bad_request(error)
            }
            Err(SignUpError::Unexpected(error)) => {
                tracing::error!(
                    code = error.code,
                    trace = error.trace.as_deref().unwrap_or_default(),
                    "sign-up failed"
                );
                server_error()
            }
        }
    }

    async fn create_account(&self, body: SignUpRequest) -> Result<Account, SignUpError> {
        let candidate = self.validator.validate(body)?;

        Ok(self.add_account.add(candidate).await?)
    }
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = ErrorDTO, example = json!(ErrorDTO::example_400())),
        (status = 500, body = ErrorDTO, example = json!(ErrorDTO::example_500()))
    ),
    request_body = SignUpRequest,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Json<SignUpRequest>,
    controller: State<Arc<SignUpController>>,
) -> HttpResponse {
    controller
        .handle(HttpRequest {
            body: payload.into_inner(),
        })
        .await
}
