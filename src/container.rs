use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::api::controllers::signup::SignUpController;
use crate::api::protocols::email_validator::EmailValidator;
use crate::domain::repositories::account::AccountRepository;

use crate::services::add_account::DbAddAccount;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::validators::email::EmailValidatorAdapter;

pub struct Container {
    pub signup_controller: Arc<SignUpController>,
}

impl Container {
    pub fn new(conn: Surreal<Client>) -> Self {
        let db = Arc::new(conn);

        Container::with(
            Arc::new(AccountRepositoryImpl::new(db)),
            Arc::new(EmailValidatorAdapter),
        )
    }

    pub fn with(
        account_repository: Arc<dyn AccountRepository>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        let add_account = Arc::new(DbAddAccount::new(account_repository));

        Container {
            signup_controller: Arc::new(SignUpController::new(email_validator, add_account)),
        }
    }
}
