//! Movie criteria and the factory functions on [`Movie`] that build them.
//!
//! Each criteria here implements [`criteria::Criteria`] over `Movie` and
//! can be combined with any other criteria over the same type.

pub mod any_genre;
pub mod published_after;
pub mod published_between;
pub mod published_by;

// Re-export for convenience
pub use any_genre::AnyGenre;
pub use published_after::PublishedAfter;
pub use published_between::PublishedBetween;
pub use published_by::PublishedBy;

use crate::types::{Genre, Movie, ProductionStudio};

impl Movie {
    /// Movies released strictly after `year`.
    pub fn is_published_after(year: i32) -> PublishedAfter {
        PublishedAfter::new(year)
    }

    /// Movies released from `start_year` through `end_year`, inclusive.
    pub fn is_published_between(start_year: i32, end_year: i32) -> PublishedBetween {
        PublishedBetween::new(start_year, end_year)
    }

    /// Movies of any of the given genres.
    ///
    /// ```
    /// use movie_catalog::{Genre, Movie};
    ///
    /// let scary_or_funny = Movie::is_of_genre([Genre::Comedy, Genre::Horror]);
    /// assert_eq!(scary_or_funny.genres().len(), 2);
    /// ```
    pub fn is_of_genre(genres: impl IntoIterator<Item = Genre>) -> AnyGenre {
        AnyGenre::new(genres)
    }

    /// Movies published by `studio`.
    pub fn is_published_by(studio: ProductionStudio) -> PublishedBy {
        PublishedBy::new(studio)
    }
}
