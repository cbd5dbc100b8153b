//! Criteria for movies released after a given year.

use crate::types::Movie;
use criteria::Criteria;

/// Satisfied when the movie's publication year is strictly greater than
/// the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedAfter {
    year: i32,
}

impl PublishedAfter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Criteria for PublishedAfter {
    type Item = Movie;

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        movie.year_published() > self.year
    }

    fn name(&self) -> &str {
        "PublishedAfter"
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
            ProductionStudio::Universal,
            Genre::Drama,
            3,
            NaiveDate::from_ymd_opt(year, 7, 1).unwrap(),
        )
    }

    #[test]
    fn test_published_after_is_strict() {
        let criteria = PublishedAfter::new(2000);

        assert!(!criteria.is_satisfied_by(&movie_from(1999)));
        assert!(!criteria.is_satisfied_by(&movie_from(2000)));
        assert!(criteria.is_satisfied_by(&movie_from(2001)));
    }

    #[test]
    fn test_last_day_of_threshold_year() {
        let criteria = PublishedAfter::new(2000);
        let mut movie = movie_from(2000);
        movie.date_published = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();

        assert!(!criteria.is_satisfied_by(&movie));
    }
}
