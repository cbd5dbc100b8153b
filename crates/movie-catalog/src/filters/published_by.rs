//! Criteria for movies from one studio.

use crate::types::{Movie, ProductionStudio};
use criteria::Criteria;

/// Satisfied when the movie's studio equals the target studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedBy {
    studio: ProductionStudio,
}

impl PublishedBy {
    pub fn new(studio: ProductionStudio) -> Self {
        Self { studio }
    }

    pub fn studio(&self) -> ProductionStudio {
        self.studio
    }
}

impl Criteria for PublishedBy {
    type Item = Movie;

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        movie.production_studio == self.studio
    }

    fn name(&self) -> &str {
        "PublishedBy"
    }
}
