use parking_lot::RwLock;

use crate::logic::{self, MovieFilter};
use crate::model::{Movie, MovieId};
use crate::store::traits::{MovieReader, MovieWriter};
use crate::store::{StoreError, StoreResult};

/// Process-local movie collection.
///
/// Lookups are linear scans over an ordered `Vec`. Each call holds the lock
/// only for its own scan or mutation; nothing spans requests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    fn position(movies: &[Movie], id: MovieId) -> Option<usize> {
        movies.iter().position(|movie| movie.id == id)
    }
}

#[async_trait::async_trait]
impl MovieReader for InMemoryStore {
    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.movies.read().clone())
    }

    async fn get_movie(&self, id: MovieId) -> StoreResult<Movie> {
        self.movies
            .read()
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn filter_movies(&self, filter: &MovieFilter) -> StoreResult<Vec<Movie>> {
        Ok(logic::filter_movies(&self.movies.read(), filter))
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.movies.read().len())
    }
}

#[async_trait::async_trait]
impl MovieWriter for InMemoryStore {
    async fn create_movie(&self, movie: Movie) -> StoreResult<Movie> {
        let mut movies = self.movies.write();
        if Self::position(&movies, movie.id).is_some() {
            return Err(StoreError::AlreadyExists(movie.id));
        }
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, id: MovieId, movie: Movie) -> StoreResult<Movie> {
        let mut movies = self.movies.write();
        let index = Self::position(&movies, id).ok_or(StoreError::NotFound(id))?;
        movies[index] = movie.clone();
        Ok(movie)
    }

    async fn delete_movie(&self, id: MovieId) -> StoreResult<()> {
        let mut movies = self.movies.write();
        let index = Self::position(&movies, id).ok_or(StoreError::NotFound(id))?;
        movies.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, name: &str) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            genre: "Drama".to_string(),
            year_of_release: 1994,
            budget: 25_000_000.0,
            revenue: 58_300_000.0,
            director_name: "Frank Darabont".to_string(),
            duration: 142,
            rating: "R".to_string(),
            primary_language: "English".to_string(),
            poster: String::new(),
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore::new(vec![movie(1, "First"), movie(2, "Second"), movie(3, "Third")])
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = store();
        store.create_movie(movie(10, "Tenth")).await.unwrap();

        let ids: Vec<_> = store.list_movies().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 10]);
    }

    #[tokio::test]
    async fn test_get_movie() {
        let store = store();
        assert_eq!(store.get_movie(2).await.unwrap().name, "Second");
        assert_eq!(store.get_movie(99).await, Err(StoreError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let store = store();

        let created = store.create_movie(movie(4, "Fourth")).await.unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(store.count().await.unwrap(), 4);

        let result = store.create_movie(movie(4, "Impostor")).await;
        assert_eq!(result, Err(StoreError::AlreadyExists(4)));
        assert_eq!(store.count().await.unwrap(), 4);
        assert_eq!(store.get_movie(4).await.unwrap().name, "Fourth");
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record_in_place() {
        let store = store();

        let mut replacement = movie(2, "Second, Remastered");
        replacement.genre = "Thriller".to_string();
        replacement.duration = 150;
        store.update_movie(2, replacement.clone()).await.unwrap();

        assert_eq!(store.get_movie(2).await.unwrap(), replacement);
        let ids: Vec<_> = store.list_movies().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let result = store.update_movie(42, movie(42, "Nope")).await;
        assert_eq!(result, Err(StoreError::NotFound(42)));
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_movie() {
        let store = store();

        store.delete_movie(1).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.get_movie(1).await, Err(StoreError::NotFound(1)));

        assert_eq!(store.delete_movie(1).await, Err(StoreError::NotFound(1)));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_filter_through_store() {
        let store = store();
        let result = store
            .filter_movies(&MovieFilter::Name("ir".to_string()))
            .await
            .unwrap();
        let ids: Vec<_> = result.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let result = store
            .filter_movies(&MovieFilter::Genre("comedy".to_string()))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_from_load_are_kept() {
        // Uniqueness is only enforced on create
        let store = InMemoryStore::new(vec![movie(5, "A"), movie(5, "B")]);
        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.get_movie(5).await.unwrap().name, "A");
    }
}
