//! Criteria for movies released within a span of years.

use crate::types::Movie;
use criteria::Criteria;

/// Satisfied when the movie's publication year lies in
/// `[start_year, end_year]`, both ends inclusive.
///
/// A span whose start is after its end matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedBetween {
    start_year: i32,
    end_year: i32,
}

impl PublishedBetween {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }
}

impl Criteria for PublishedBetween {
    type Item = Movie;

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        let year = movie.year_published();
        year >= self.start_year && year <= self.end_year
    }

    fn name(&self) -> &str {
        "PublishedBetween"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Genre, ProductionStudio};
    use chrono::NaiveDate;

    fn movie_from(year: i32) -> Movie {
        Movie::new(
            format!("Movie ({})", year),
            ProductionStudio::Paramount,
            Genre::Action,
            3,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let criteria = PublishedBetween::new(1990, 2000);

        assert!(!criteria.is_satisfied_by(&movie_from(1989)));
        assert!(criteria.is_satisfied_by(&movie_from(1990)));
        assert!(criteria.is_satisfied_by(&movie_from(1995)));
        assert!(criteria.is_satisfied_by(&movie_from(2000)));
        assert!(!criteria.is_satisfied_by(&movie_from(2001)));
    }

    #[test]
    fn test_single_year_span() {
        let criteria = PublishedBetween::new(1994, 1994);

        assert!(criteria.is_satisfied_by(&movie_from(1994)));
        assert!(!criteria.is_satisfied_by(&movie_from(1995)));
    }

    #[test]
    fn test_inverted_span_matches_nothing() {
        let criteria = PublishedBetween::new(2000, 1990);

        for year in 1985..2005 {
            assert!(!criteria.is_satisfied_by(&movie_from(year)));
        }
    }
}
