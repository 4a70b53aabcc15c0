use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AddAccountModel};

/// Persists a new account and returns its stored representation.
///
/// Any failure, duplicate accounts included, is reported as an [`AppError`].
///
/// [`AppError`]: crate::domain::error::AppError
#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account>;
}
