//! Query configuration: criteria described as data.
//!
//! A `MovieQuery` is a serde-friendly tree that mirrors the movie criteria
//! and the generic combinators. It is the configuration surface of the
//! crate: load one from JSON, validate it with [`MovieQuery::build`], and
//! filter with the resulting criteria.
//!
//! ```json
//! {
//!   "kind": "all",
//!   "of": [
//!     { "kind": "published_between", "start_year": 1990, "end_year": 1999 },
//!     { "kind": "of_genre", "genres": ["comedy", "horror"] }
//!   ]
//! }
//! ```

use crate::error::{CatalogError, Result};
use crate::types::{Genre, Movie, ProductionStudio};
use criteria::{AllOf, AnyOf, BoxedCriteria, Criteria};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovieQuery {
    PublishedAfter { year: i32 },
    PublishedBetween { start_year: i32, end_year: i32 },
    OfGenre { genres: Vec<Genre> },
    PublishedBy { studio: ProductionStudio },
    All { of: Vec<MovieQuery> },
    Any { of: Vec<MovieQuery> },
    Not { query: Box<MovieQuery> },
}

impl MovieQuery {
    /// Parse a query from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the query and turn it into a criteria over movies.
    ///
    /// # Errors
    /// * `InvalidQuery` - a year span starts after it ends, or a genre
    ///   list is empty (anywhere in the tree)
    pub fn build(&self) -> Result<BoxedCriteria<Movie>> {
        let criteria = match self {
            MovieQuery::PublishedAfter { year } => Movie::is_published_after(*year).boxed(),
            MovieQuery::PublishedBetween {
                start_year,
                end_year,
            } => {
                if start_year > end_year {
                    return Err(CatalogError::InvalidQuery(format!(
                        "published_between starts after it ends ({} > {})",
                        start_year, end_year
                    )));
                }
                Movie::is_published_between(*start_year, *end_year).boxed()
            }
            MovieQuery::OfGenre { genres } => {
                if genres.is_empty() {
                    return Err(CatalogError::InvalidQuery(
                        "of_genre needs at least one genre".to_string(),
                    ));
                }
                Movie::is_of_genre(genres.iter().copied()).boxed()
            }
            MovieQuery::PublishedBy { studio } => Movie::is_published_by(*studio).boxed(),
            MovieQuery::All { of } => of
                .iter()
                .map(MovieQuery::build)
                .collect::<Result<AllOf<Movie>>>()?
                .boxed(),
            MovieQuery::Any { of } => of
                .iter()
                .map(MovieQuery::build)
                .collect::<Result<AnyOf<Movie>>>()?
                .boxed(),
            MovieQuery::Not { query } => query.build()?.not().boxed(),
        };
        Ok(criteria)
    }
}
