use thiserror::Error;

use crate::model::MovieId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Movie not found")]
    NotFound(MovieId),
    #[error("Movie with this ID already exists")]
    AlreadyExists(MovieId),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
