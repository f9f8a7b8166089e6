use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::Serialize;
use std::sync::Arc;

use crate::logic::MovieFilter;
use crate::model::{Movie, MovieId};
use crate::store::{MovieStore, StoreError};

pub type AppState<S> = Arc<S>;

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub movies: usize,
}

fn store_error(e: StoreError) -> ApiError {
    let status = match e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
    };
    (status, Json(ErrorResponse::new(&e.to_string())))
}

// Keep rejections in the same JSON error shape as everything else
fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    match param {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err((
            rejection.status(),
            Json(ErrorResponse::new(&rejection.body_text())),
        )),
    }
}

fn movie_payload(payload: Result<RequestJson<Movie>, JsonRejection>) -> Result<Movie, ApiError> {
    let movie = match payload {
        Ok(RequestJson(movie)) => movie,
        Err(rejection) => {
            return Err((
                rejection.status(),
                Json(ErrorResponse::new(&rejection.body_text())),
            ))
        }
    };

    if let Err(e) = movie.validate() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(&e.to_string())),
        ));
    }
    Ok(movie)
}

async fn run_filter<S: MovieStore>(store: &S, filter: MovieFilter) -> ApiResult<Vec<Movie>> {
    log::debug!("Filtering movies by {}", filter.describe());
    store.filter_movies(&filter).await.map(Json).map_err(store_error)
}

pub async fn health_check<S: MovieStore>(
    State(store): State<AppState<S>>,
) -> ApiResult<HealthResponse> {
    let movies = store.count().await.map_err(store_error)?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        movies,
    }))
}

pub async fn list_movies<S: MovieStore>(State(store): State<AppState<S>>) -> ApiResult<Vec<Movie>> {
    store.list_movies().await.map(Json).map_err(store_error)
}

pub async fn get_movie<S: MovieStore>(
    State(store): State<AppState<S>>,
    id: Result<Path<MovieId>, PathRejection>,
) -> ApiResult<Movie> {
    let id = path_param(id)?;
    match store.get_movie(id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(e) => {
            log::debug!("Lookup of movie {} failed: {}", id, e);
            Err(store_error(e))
        }
    }
}

pub async fn get_movies_by_genre<S: MovieStore>(
    State(store): State<AppState<S>>,
    genre: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    run_filter(&*store, MovieFilter::Genre(path_param(genre)?)).await
}

pub async fn get_movies_by_director<S: MovieStore>(
    State(store): State<AppState<S>>,
    director: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    run_filter(&*store, MovieFilter::Director(path_param(director)?)).await
}

pub async fn get_movies_by_year<S: MovieStore>(
    State(store): State<AppState<S>>,
    year: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    run_filter(&*store, MovieFilter::Year(path_param(year)?)).await
}

pub async fn get_movies_by_rating<S: MovieStore>(
    State(store): State<AppState<S>>,
    rating: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    run_filter(&*store, MovieFilter::Rating(path_param(rating)?)).await
}

pub async fn get_movies_by_language<S: MovieStore>(
    State(store): State<AppState<S>>,
    language: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    run_filter(&*store, MovieFilter::Language(path_param(language)?)).await
}

pub async fn get_movies_by_budget<S: MovieStore>(
    State(store): State<AppState<S>>,
    range: Result<Path<(f64, f64)>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    let (min, max) = path_param(range)?;
    run_filter(&*store, MovieFilter::Budget { min, max }).await
}

pub async fn get_movies_by_revenue<S: MovieStore>(
    State(store): State<AppState<S>>,
    range: Result<Path<(f64, f64)>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    let (min, max) = path_param(range)?;
    run_filter(&*store, MovieFilter::Revenue { min, max }).await
}

pub async fn get_movies_by_duration<S: MovieStore>(
    State(store): State<AppState<S>>,
    range: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    let (min, max) = path_param(range)?;
    run_filter(&*store, MovieFilter::Duration { min, max }).await
}

pub async fn get_movies_by_name<S: MovieStore>(
    State(store): State<AppState<S>>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<Movie>> {
    run_filter(&*store, MovieFilter::Name(path_param(name)?)).await
}

pub async fn create_movie<S: MovieStore>(
    State(store): State<AppState<S>>,
    payload: Result<RequestJson<Movie>, JsonRejection>,
) -> ApiResult<Movie> {
    let movie = movie_payload(payload)?;
    let id = movie.id;

    match store.create_movie(movie).await {
        Ok(created) => {
            log::info!("Created movie {} ({})", created.id, created.name);
            Ok(Json(created))
        }
        Err(e) => {
            log::warn!("Rejected create of movie {}: {}", id, e);
            Err(store_error(e))
        }
    }
}

/// Full replacement: the stored record becomes exactly the payload,
/// including its `ID`.
pub async fn update_movie<S: MovieStore>(
    State(store): State<AppState<S>>,
    id: Result<Path<MovieId>, PathRejection>,
    payload: Result<RequestJson<Movie>, JsonRejection>,
) -> ApiResult<Movie> {
    let id = path_param(id)?;
    let movie = movie_payload(payload)?;

    match store.update_movie(id, movie).await {
        Ok(updated) => {
            log::info!("Replaced movie {} with {} ({})", id, updated.id, updated.name);
            Ok(Json(updated))
        }
        Err(e) => {
            log::warn!("Rejected update of movie {}: {}", id, e);
            Err(store_error(e))
        }
    }
}

pub async fn delete_movie<S: MovieStore>(
    State(store): State<AppState<S>>,
    id: Result<Path<MovieId>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let id = path_param(id)?;

    match store.delete_movie(id).await {
        Ok(()) => {
            log::info!("Deleted movie {}", id);
            Ok(Json(MessageResponse {
                message: "Movie deleted successfully".to_string(),
            }))
        }
        Err(e) => {
            log::warn!("Rejected delete of movie {}: {}", id, e);
            Err(store_error(e))
        }
    }
}
