use crate::model::Movie;

/// Predicate over movie records.
///
/// Text matches are case-insensitive. Range variants are inclusive at both
/// bounds; a `min` greater than `max` is accepted and matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    Genre(String),
    Director(String),
    Rating(String),
    Language(String),
    Year(i64),
    /// Substring of the movie name
    Name(String),
    Budget { min: f64, max: f64 },
    Revenue { min: f64, max: f64 },
    Duration { min: i64, max: i64 },
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            MovieFilter::Genre(genre) => eq_ignore_case(&movie.genre, genre),
            MovieFilter::Director(name) => eq_ignore_case(&movie.director_name, name),
            MovieFilter::Rating(rating) => eq_ignore_case(&movie.rating, rating),
            MovieFilter::Language(language) => eq_ignore_case(&movie.primary_language, language),
            MovieFilter::Year(year) => movie.year_of_release == *year,
            MovieFilter::Name(needle) => movie
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            MovieFilter::Budget { min, max } => in_range(movie.budget, *min, *max),
            MovieFilter::Revenue { min, max } => in_range(movie.revenue, *min, *max),
            MovieFilter::Duration { min, max } => in_range(movie.duration, *min, *max),
        }
    }

    /// Short human-readable form used in log lines.
    pub fn describe(&self) -> String {
        match self {
            MovieFilter::Genre(v) => format!("genre={}", v),
            MovieFilter::Director(v) => format!("director={}", v),
            MovieFilter::Rating(v) => format!("rating={}", v),
            MovieFilter::Language(v) => format!("language={}", v),
            MovieFilter::Year(v) => format!("year={}", v),
            MovieFilter::Name(v) => format!("name~{}", v),
            MovieFilter::Budget { min, max } => format!("budget in [{}, {}]", min, max),
            MovieFilter::Revenue { min, max } => format!("revenue in [{}, {}]", min, max),
            MovieFilter::Duration { min, max } => format!("duration in [{}, {}]", min, max),
        }
    }
}

/// Apply a filter to a slice of movies, keeping collection order.
pub fn filter_movies(movies: &[Movie], filter: &MovieFilter) -> Vec<Movie> {
    movies
        .iter()
        .filter(|movie| filter.matches(movie))
        .cloned()
        .collect()
}

// Full Unicode lowercasing, so "ÉTÉ" and "été" compare equal.
fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, name: &str, genre: &str, budget: f64, revenue: f64, duration: i64) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            genre: genre.to_string(),
            year_of_release: 2000 + id,
            budget,
            revenue,
            director_name: "Greta Gerwig".to_string(),
            duration,
            rating: "PG-13".to_string(),
            primary_language: "English".to_string(),
            poster: format!("https://example.com/{}.jpg", id),
        }
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie(1, "X", "Action", 100.0, 200.0, 90),
            movie(2, "The Matrix", "Sci-Fi", 63.0, 467.0, 136),
            movie(3, "Matrix Reloaded", "sci-fi", 150.0, 741.0, 138),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_text_filters_ignore_case() {
        let movies = catalog();

        let upper = filter_movies(&movies, &MovieFilter::Genre("SCI-FI".to_string()));
        let lower = filter_movies(&movies, &MovieFilter::Genre("sci-fi".to_string()));
        assert_eq!(ids(&upper), vec![2, 3]);
        assert_eq!(upper, lower);

        let directed = filter_movies(&movies, &MovieFilter::Director("greta GERWIG".to_string()));
        assert_eq!(directed.len(), 3);

        let rated = filter_movies(&movies, &MovieFilter::Rating("pg-13".to_string()));
        assert_eq!(rated.len(), 3);

        let language = filter_movies(&movies, &MovieFilter::Language("ENGLISH".to_string()));
        assert_eq!(language.len(), 3);
    }

    #[test]
    fn test_genre_is_exact_not_substring() {
        let movies = catalog();
        let result = filter_movies(&movies, &MovieFilter::Genre("Sci".to_string()));
        assert!(result.is_empty());
    }

    #[test]
    fn test_name_substring() {
        let movies = catalog();
        let result = filter_movies(&movies, &MovieFilter::Name("matrix".to_string()));
        assert_eq!(ids(&result), vec![2, 3]);

        let result = filter_movies(&movies, &MovieFilter::Name("RELOAD".to_string()));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_year_exact() {
        let movies = catalog();
        assert_eq!(ids(&filter_movies(&movies, &MovieFilter::Year(2002))), vec![2]);
        assert!(filter_movies(&movies, &MovieFilter::Year(1999)).is_empty());
        assert!(filter_movies(&movies, &MovieFilter::Year(3_000_000_000)).is_empty());
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let movies = catalog();

        let result = filter_movies(&movies, &MovieFilter::Budget { min: 50.0, max: 150.0 });
        assert_eq!(ids(&result), vec![1, 2, 3]);

        // Exactly on the lower bound
        let result = filter_movies(&movies, &MovieFilter::Budget { min: 100.0, max: 120.0 });
        assert_eq!(ids(&result), vec![1]);

        // Exactly on the upper bound
        let result = filter_movies(&movies, &MovieFilter::Revenue { min: 0.0, max: 200.0 });
        assert_eq!(ids(&result), vec![1]);

        let result = filter_movies(&movies, &MovieFilter::Duration { min: 136, max: 138 });
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn test_single_record_budget_example() {
        let movies = vec![movie(1, "X", "Action", 100.0, 200.0, 90)];

        let hit = filter_movies(&movies, &MovieFilter::Budget { min: 50.0, max: 150.0 });
        assert_eq!(hit.len(), 1);

        let miss = filter_movies(&movies, &MovieFilter::Budget { min: 150.0, max: 200.0 });
        assert!(miss.is_empty());
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let movies = catalog();
        let result = filter_movies(&movies, &MovieFilter::Duration { min: 200, max: 10 });
        assert!(result.is_empty());
    }

    #[test]
    fn test_describe() {
        assert_eq!(MovieFilter::Year(1999).describe(), "year=1999");
        assert_eq!(
            MovieFilter::Duration { min: 90, max: 120 }.describe(),
            "duration in [90, 120]"
        );
    }
}
