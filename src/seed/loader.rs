use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::model::Movie;

/// Reasons the startup data file could not be turned into movies.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no '[' found in file content")]
    NoArrayStart,
    #[error("no matching closing ']' found for the JSON array")]
    UnbalancedBrackets,
    #[error("failed to decode JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("movie records do not match the expected schema: {0}")]
    InvalidRecords(#[source] serde_json::Error),
}

/// Return the first top-level `[...]` literal embedded in `text`.
///
/// Scanning starts at the first `[` and tracks nesting depth until the
/// matching `]`. Brackets inside JSON string literals do not count.
pub fn extract_json_array(text: &str) -> Result<&str, LoadError> {
    let start = text.find('[').ok_or(LoadError::NoArrayStart)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Ok(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    Err(LoadError::UnbalancedBrackets)
}

/// Extract and decode the movie array embedded in `text`.
pub fn parse_movies(text: &str) -> Result<Vec<Movie>, LoadError> {
    let array_text = extract_json_array(text)?;
    // Always an array: the extracted text starts with '['
    let value: Value = serde_json::from_str(array_text).map_err(LoadError::InvalidJson)?;
    serde_json::from_value(value).map_err(LoadError::InvalidRecords)
}

/// Read the data file at `path` and decode its movie array.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<Movie>, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let movies = parse_movies(&content)?;
    log::info!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}
