use async_trait::async_trait;

use crate::domain::models::account::{Account, AddAccountModel};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn add(&self, new_account: AddAccountModel) -> RepositoryResult<Account>;
}
