mod signup;

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::container::Container;
use crate::domain::models::account::Account;
use crate::infrastructure::repositories::account::mock::AccountRepositoryImpl;
use crate::infrastructure::validators::email::EmailValidatorAdapter;

use rstest::*;

pub struct TestContext {
    pub repository: Arc<AccountRepositoryImpl>,
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    let repository = Arc::new(AccountRepositoryImpl {
        accounts: Mutex::new(vec![Account {
            id: "account_0".to_string(),
            name: "Test Account".to_string(),
            email: "test_account@email.com".to_string(),
            password: "stR0ngP4ssw0rd!".to_string(),
        }]),
        fail: false,
    });

    let container = Arc::new(Container::with(
        repository.clone(),
        Arc::new(EmailValidatorAdapter),
    ));

    TestContext {
        repository,
        container,
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    error: String,
    message: String,
}
