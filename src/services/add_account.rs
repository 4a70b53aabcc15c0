use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, AddAccountModel},
    repositories::account::AccountRepository,
    services::add_account::AddAccount,
};

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, Result, SaltString, rand_core::OsRng},
};

use async_trait::async_trait;

pub struct DbAddAccount {
    repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[tracing::instrument(skip_all)]
    async fn add(&self, mut account: AddAccountModel) -> AppResult<Account> {
        account.password = encrypt_password(&account.password)?;

        Ok(self.repository.add(account).await?)
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}
