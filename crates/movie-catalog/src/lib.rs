//! # Movie Catalog Crate
//!
//! This crate holds movie records and the criteria used to filter them.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, ProductionStudio)
//! - **filters**: Movie criteria and the `Movie::is_*` factories
//! - **library**: MovieLibrary, an ordered collection keyed on title
//! - **parser**: Parse catalog files into Rust structs
//! - **query**: Build criteria from JSON configuration
//! - **error**: Error types for loading and query building
//!
//! ## Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use criteria::SequenceExt;
//! use movie_catalog::{Genre, Movie, ProductionStudio};
//!
//! let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
//! let movies = vec![
//!     Movie::new("A", ProductionStudio::Disney, Genre::Comedy, 3, date(1995)),
//!     Movie::new("B", ProductionStudio::Disney, Genre::Drama, 3, date(2005)),
//!     Movie::new("C", ProductionStudio::Disney, Genre::Horror, 3, date(1998)),
//! ];
//!
//! let nineties: Vec<&str> = movies
//!     .iter()
//!     .that_satisfy(Movie::is_published_between(1990, 2000))
//!     .map(|m| m.title.as_str())
//!     .collect();
//! assert_eq!(nineties, vec!["A", "C"]);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod filters;
pub mod library;
pub mod parser;
pub mod query;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Genre, Movie, ProductionStudio, Score};
pub use filters::{AnyGenre, PublishedAfter, PublishedBetween, PublishedBy};
pub use library::MovieLibrary;
pub use query::MovieQuery;
