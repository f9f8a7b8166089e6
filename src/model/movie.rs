use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type MovieId = i64;

/// A single movie record.
///
/// Field names on the wire are the upper-case keys used by the source data
/// file (`ID`, `MOVIENAME`, ...). Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "ID")]
    pub id: MovieId,
    #[serde(rename = "MOVIENAME")]
    pub name: String,
    #[serde(rename = "GENRE")]
    pub genre: String,
    #[serde(rename = "YEAROFRELEASE")]
    pub year_of_release: i64,
    #[serde(rename = "BUDGET")]
    pub budget: f64,
    #[serde(rename = "REVENUE")]
    pub revenue: f64,
    #[serde(rename = "DIRECTORNAME")]
    pub director_name: String,
    /// Running time in minutes
    #[serde(rename = "DURATION")]
    pub duration: i64,
    #[serde(rename = "RATING")]
    pub rating: String,
    #[serde(rename = "PRIMARYLANGUAGE")]
    pub primary_language: String,
    #[serde(rename = "POSTER")]
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MovieValidationError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("DURATION must not be negative (got {0})")]
    NegativeDuration(i64),
}

impl Movie {
    /// Field constraints checked on create/update payloads.
    ///
    /// Records loaded from the data file are taken as-is and never pass
    /// through here.
    pub fn validate(&self) -> Result<(), MovieValidationError> {
        check_amount("BUDGET", self.budget)?;
        check_amount("REVENUE", self.revenue)?;
        if self.duration < 0 {
            return Err(MovieValidationError::NegativeDuration(self.duration));
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), MovieValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MovieValidationError::InvalidAmount { field, value })
    }
}
