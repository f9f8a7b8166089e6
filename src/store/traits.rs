use crate::logic::MovieFilter;
use crate::model::{Movie, MovieId};
use crate::store::StoreResult;

/// Read operations over the movie collection.
#[async_trait::async_trait]
pub trait MovieReader: Send + Sync {
    /// Every movie, in insertion order
    async fn list_movies(&self) -> StoreResult<Vec<Movie>>;
    async fn get_movie(&self, id: MovieId) -> StoreResult<Movie>;
    /// Movies matching the filter, in insertion order. Never fails on zero matches.
    async fn filter_movies(&self, filter: &MovieFilter) -> StoreResult<Vec<Movie>>;
    async fn count(&self) -> StoreResult<usize>;
}

/// Mutations over the movie collection.
#[async_trait::async_trait]
pub trait MovieWriter: Send + Sync {
    /// Append a movie. Fails with `AlreadyExists` if the ID is taken.
    async fn create_movie(&self, movie: Movie) -> StoreResult<Movie>;
    /// Replace the whole record stored under `id`.
    async fn update_movie(&self, id: MovieId, movie: Movie) -> StoreResult<Movie>;
    async fn delete_movie(&self, id: MovieId) -> StoreResult<()>;
}

// Combined trait for handler state
pub trait MovieStore: MovieReader + MovieWriter {}
impl<T: MovieReader + MovieWriter> MovieStore for T {}
