//! In-memory movie collection.
//!
//! `MovieLibrary` keeps movies in insertion order and refuses a second
//! movie with a title it already holds. Querying goes through criteria:
//! the library never grows its own ad-hoc search methods.

use crate::error::Result;
use crate::parser;
use crate::types::Movie;
use criteria::{Criteria, OneAtATime, SequenceExt, ThatSatisfy};
use std::collections::HashSet;
use std::path::Path;
use std::slice;
use tracing::{debug, info};

/// Main container for movies.
///
/// Rust concepts demonstrated:
/// - Vec<T> for ordered storage, HashSet<T> for O(1) duplicate checks
/// - Borrowing: queries return iterators over `&Movie`, never clones
#[derive(Debug, Default, Clone)]
pub struct MovieLibrary {
    movies: Vec<Movie>,
    titles: HashSet<String>,
}

impl MovieLibrary {
    /// Creates a new, empty MovieLibrary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from movies, dropping repeated titles
    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let mut library = Self::new();
        library.extend(movies);
        library
    }

    /// Load a catalog file (see [`crate::parser`] for the format)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let movies = parser::parse_movies(path)?;
        let parsed = movies.len();
        let library = Self::from_movies(movies);

        info!(
            "Loaded {} movies ({} duplicate titles skipped)",
            library.len(),
            parsed - library.len()
        );
        Ok(library)
    }

    /// Add a movie.
    ///
    /// Returns false, leaving the library unchanged, when a movie with the
    /// same title is already present.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.titles.contains(&movie.title) {
            debug!("Skipping duplicate title: {}", movie.title);
            return false;
        }
        self.titles.insert(movie.title.clone());
        self.movies.push(movie);
        true
    }

    /// True when a movie with this movie's title is present
    pub fn contains(&self, movie: &Movie) -> bool {
        self.titles.contains(&movie.title)
    }

    /// Look a movie up by title
    pub fn get(&self, title: &str) -> Option<&Movie> {
        if !self.titles.contains(title) {
            return None;
        }
        self.movies.iter().find(|m| m.title == title)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every movie, one at a time, in insertion order
    pub fn all_movies(&self) -> OneAtATime<slice::Iter<'_, Movie>> {
        self.movies.iter().one_at_a_time()
    }

    /// Lazily yield the movies satisfying `criteria`, in insertion order
    pub fn find_all<C>(&self, criteria: C) -> ThatSatisfy<slice::Iter<'_, Movie>, C>
    where
        C: Criteria<Item = Movie>,
    {
        self.movies.iter().that_satisfy(criteria)
    }

    /// The movies as a slice, for use with
    /// [`ParallelCriteriaExt`](criteria::ParallelCriteriaExt)
    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }
}

impl Extend<Movie> for MovieLibrary {
    fn extend<I: IntoIterator<Item = Movie>>(&mut self, iter: I) {
        for movie in iter {
            self.add(movie);
        }
    }
}

impl FromIterator<Movie> for MovieLibrary {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self::from_movies(iter)
    }
}

impl<'a> IntoIterator for &'a MovieLibrary {
    type Item = &'a Movie;
    type IntoIter = slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
