//! Criteria for movies belonging to any of a set of genres.

use crate::types::{Genre, Movie};
use criteria::Criteria;
use std::collections::HashSet;

/// Satisfied when the movie's genre is one of the accepted genres.
///
/// ## Algorithm
/// Plain set membership through a HashSet, so the order the genres were
/// given in never matters. An empty set accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyGenre {
    genres: HashSet<Genre>,
}

impl AnyGenre {
    pub fn new(genres: impl IntoIterator<Item = Genre>) -> Self {
        Self {
            genres: genres.into_iter().collect(),
        }
    }

    pub fn genres(&self) -> &HashSet<Genre> {
        &self.genres
    }
}

impl Criteria for AnyGenre {
    type Item = Movie;

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        self.genres.contains(&movie.genre)
    }

    fn name(&self) -> &str {
        "AnyGenre"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductionStudio;
    use chrono::NaiveDate;

    fn movie_of(genre: Genre) -> Movie {
        Movie::new(
            format!("{:?} Movie", genre),
            ProductionStudio::Miramax,
            genre,
            3,
            NaiveDate::from_ymd_opt(1999, 10, 31).unwrap(),
        )
    }

    #[test]
    fn test_any_genre_membership() {
        let criteria = AnyGenre::new([Genre::Comedy, Genre::Horror]);

        assert!(criteria.is_satisfied_by(&movie_of(Genre::Comedy)));
        assert!(criteria.is_satisfied_by(&movie_of(Genre::Horror)));
        assert!(!criteria.is_satisfied_by(&movie_of(Genre::Drama)));
        assert!(!criteria.is_satisfied_by(&movie_of(Genre::Western)));
    }

    #[test]
    fn test_order_and_duplicates_do_not_matter() {
        let forward = AnyGenre::new([Genre::Comedy, Genre::Horror]);
        let backward = AnyGenre::new([Genre::Horror, Genre::Comedy, Genre::Horror]);

        assert_eq!(forward, backward);
        assert_eq!(backward.genres().len(), 2);
    }

    #[test]
    fn test_empty_set_accepts_nothing() {
        let criteria = AnyGenre::new([]);
        assert!(!criteria.is_satisfied_by(&movie_of(Genre::Comedy)));
    }
}
