use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, AddAccountModel};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    // Duplicate emails are rejected by the unique index on `account.email`.
    async fn add(&self, new_account: AddAccountModel) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(new_account))
            .await?;

        account.map(Into::into).ok_or(RepositoryError::NotCreated)
    }
}
