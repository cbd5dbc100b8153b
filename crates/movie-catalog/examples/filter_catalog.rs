//! Load the bundled catalog and run a few criteria over it.
//!
//! Run with: cargo run --package movie-catalog --example filter_catalog [QUERY_JSON]
//!
//! Set RUST_LOG=trace to see individual criteria decisions.

use anyhow::{Context, Result};
use criteria::{Criteria, ParallelCriteriaExt};
use movie_catalog::{Genre, Movie, MovieLibrary, MovieQuery, ProductionStudio};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/movies.dat");
    let library = MovieLibrary::load_from_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    print_section(
        "Published after 2000",
        library.find_all(Movie::is_published_after(2000)),
    );
    print_section(
        "Published in the nineties",
        library.find_all(Movie::is_published_between(1990, 1999)),
    );
    print_section(
        "Pixar or Disney animation",
        library.find_all(
            Movie::is_of_genre([Genre::Animation]).and(
                Movie::is_published_by(ProductionStudio::Pixar)
                    .or(Movie::is_published_by(ProductionStudio::Disney)),
            ),
        ),
    );

    if let Some(json) = std::env::args().nth(1) {
        let query = MovieQuery::from_json(&json).context("parsing query argument")?;
        let criteria = query.build()?;
        let matches = library.as_slice().par_that_satisfy(&criteria);
        info!("Query matched {} of {} movies", matches.len(), library.len());
        print_section("Query", matches.into_iter());
    }

    Ok(())
}

fn print_section<'a>(heading: &str, movies: impl Iterator<Item = &'a Movie>) {
    println!("\n=== {} ===", heading);
    for movie in movies {
        println!(
            "{} ({}) - {:?}, {:?}, rated {}",
            movie.title,
            movie.year_published(),
            movie.genre,
            movie.production_studio,
            movie.rating
        );
    }
}
