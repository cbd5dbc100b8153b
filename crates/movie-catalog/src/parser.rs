//! Parser for flat catalog files.
//!
//! Each non-empty line describes one movie:
//! `title::studio::genre::rating::YYYY-MM-DD`
//!
//! Lines starting with `#` are comments. Studio and genre names are
//! matched case-insensitively, ignoring spaces, dashes and apostrophes,
//! so `"Sci-Fi"`, `"scifi"` and `"SciFi"` are the same genre.

use crate::error::{CatalogError, Result};
use crate::types::*;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

const FIELD_COUNT: usize = 5;

/// Lowercase and drop separators so spelling variants compare equal
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(*c, ' ' | '-' | '_' | '\''))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a genre name into Genre enum
///
/// Example: "Action" -> Ok(Genre::Action)
///          "Sci-Fi" -> Ok(Genre::SciFi)
pub fn parse_genre(s: &str) -> Result<Genre> {
    match normalize(s).as_str() {
        "action" => Ok(Genre::Action),
        "adventure" => Ok(Genre::Adventure),
        "animation" => Ok(Genre::Animation),
        "children" | "childrens" | "kids" => Ok(Genre::Children),
        "comedy" => Ok(Genre::Comedy),
        "crime" => Ok(Genre::Crime),
        "documentary" => Ok(Genre::Documentary),
        "drama" => Ok(Genre::Drama),
        "fantasy" => Ok(Genre::Fantasy),
        "filmnoir" => Ok(Genre::FilmNoir),
        "horror" => Ok(Genre::Horror),
        "musical" => Ok(Genre::Musical),
        "mystery" => Ok(Genre::Mystery),
        "romance" => Ok(Genre::Romance),
        "scifi" => Ok(Genre::SciFi),
        "thriller" => Ok(Genre::Thriller),
        "war" => Ok(Genre::War),
        "western" => Ok(Genre::Western),
        _ => Err(CatalogError::InvalidValue {
            field: "genre".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse a studio name into ProductionStudio enum
///
/// Example: "Warner Brothers" -> Ok(ProductionStudio::WarnerBrothers)
pub fn parse_studio(s: &str) -> Result<ProductionStudio> {
    match normalize(s).as_str() {
        "disney" => Ok(ProductionStudio::Disney),
        "dreamworks" => Ok(ProductionStudio::Dreamworks),
        "lionsgate" => Ok(ProductionStudio::Lionsgate),
        "mgm" => Ok(ProductionStudio::Mgm),
        "miramax" => Ok(ProductionStudio::Miramax),
        "paramount" => Ok(ProductionStudio::Paramount),
        "pixar" => Ok(ProductionStudio::Pixar),
        "universal" => Ok(ProductionStudio::Universal),
        "warnerbrothers" | "warnerbros" | "warner" => Ok(ProductionStudio::WarnerBrothers),
        _ => Err(CatalogError::InvalidValue {
            field: "studio".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse one catalog line.
///
/// `line_no` is only used for error context.
pub fn parse_movie_line(line: &str, line_no: usize) -> Result<Movie> {
    let parts: Vec<&str> = line.split("::").map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::ParseError {
            line: line_no,
            reason: format!("Expected {} fields but found {}", FIELD_COUNT, parts.len()),
        });
    }

    let title = parts[0];
    if title.is_empty() {
        return Err(CatalogError::ParseError {
            line: line_no,
            reason: "Missing title".to_string(),
        });
    }

    let with_line = |e: CatalogError| CatalogError::ParseError {
        line: line_no,
        reason: e.to_string(),
    };
    let production_studio = parse_studio(parts[1]).map_err(with_line)?;
    let genre = parse_genre(parts[2]).map_err(with_line)?;

    let rating = parts[3].parse::<Score>().map_err(|e| CatalogError::ParseError {
        line: line_no,
        reason: format!("Invalid rating: {}", e),
    })?;
    let date_published =
        NaiveDate::parse_from_str(parts[4], "%Y-%m-%d").map_err(|e| CatalogError::ParseError {
            line: line_no,
            reason: format!("Invalid date_published: {}", e),
        })?;

    Ok(Movie {
        title: title.to_string(),
        production_studio,
        genre,
        rating,
        date_published,
    })
}

/// Parse catalog text, skipping blank lines and comments
pub fn parse_movies_str(content: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }
        movies.push(parse_movie_line(line_trimmed, line_no)?);
    }
    Ok(movies)
}

/// Parse a catalog file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path)?;
    parse_movies_str(&content)
}
