//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures filtered by the
//! criteria in [`crate::filters`]:
//! - `Movie`, whose identity is its title
//! - `Genre` and `ProductionStudio`, closed sets of values

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Rating on the catalog's integer scale.
pub type Score = u8;

// =============================================================================
// Movie
// =============================================================================

/// A movie record.
///
/// Equality and hashing look at `title` only: two records with the same
/// title are the same movie whatever their other fields say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub production_studio: ProductionStudio,
    pub genre: Genre,
    pub rating: Score,
    pub date_published: NaiveDate,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        production_studio: ProductionStudio,
        genre: Genre,
        rating: Score,
        date_published: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            production_studio,
            genre,
            rating,
            date_published,
        }
    }

    /// Calendar year of `date_published`.
    pub fn year_published(&self) -> i32 {
        self.date_published.year()
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

// =============================================================================
// Enumerated values
// =============================================================================

/// Movie genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Children,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

/// Studios a movie can be published by.
///
/// Compared by value; two `Pixar`s are always the same studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStudio {
    Disney,
    Dreamworks,
    Lionsgate,
    Mgm,
    Miramax,
    Paramount,
    Pixar,
    Universal,
    WarnerBrothers,
}
