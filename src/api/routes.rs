use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::{docs, handlers};
use crate::store::MovieStore;

pub fn create_router<S: MovieStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check::<S>))
        // API Documentation
        .route("/docs", get(docs::get_api_docs))
        .route("/openapi.json", get(docs::get_openapi_spec))
        // Collection
        .route("/movies", get(handlers::list_movies::<S>))
        .route("/movies", post(handlers::create_movie::<S>))
        .route("/movies/:id", get(handlers::get_movie::<S>))
        .route("/movies/:id", put(handlers::update_movie::<S>))
        .route("/movies/:id", delete(handlers::delete_movie::<S>))
        // Filters
        .route("/movies/genre/:genre", get(handlers::get_movies_by_genre::<S>))
        .route(
            "/movies/director/:name",
            get(handlers::get_movies_by_director::<S>),
        )
        .route("/movies/year/:year", get(handlers::get_movies_by_year::<S>))
        .route(
            "/movies/rating/:rating",
            get(handlers::get_movies_by_rating::<S>),
        )
        .route(
            "/movies/language/:lang",
            get(handlers::get_movies_by_language::<S>),
        )
        .route(
            "/movies/budget/:min/:max",
            get(handlers::get_movies_by_budget::<S>),
        )
        .route(
            "/movies/revenue/:min/:max",
            get(handlers::get_movies_by_revenue::<S>),
        )
        .route(
            "/movies/duration/:min/:max",
            get(handlers::get_movies_by_duration::<S>),
        )
        .route("/movies/name/:substr", get(handlers::get_movies_by_name::<S>))
}
