use crate::errors::{client::HttpClientError, repository::RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Restaurant client error: {0}")]
    Client(#[from] HttpClientError),

    #[error("restaurant with ID {0} not found")]
    RestaurantNotFound(i32),
}
