use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("the database did not return the created record")]
    NotCreated,
}
