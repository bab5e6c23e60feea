use anyhow::{ensure, Context, Result};

use crate::crossword::DEFAULT_GRID_SIZE;

const MAX_GRID_SIZE: usize = 50;
const DEFAULT_WORD_LIMIT: usize = 10;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Edge length of generated puzzle grids.
    pub crossword_grid_size: usize,
    /// Words laid out per puzzle when the request gives no `limit`.
    pub crossword_word_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let crossword_grid_size = parse_or("CROSSWORD_GRID_SIZE", DEFAULT_GRID_SIZE)?;
        ensure!(
            (1..=MAX_GRID_SIZE).contains(&crossword_grid_size),
            "CROSSWORD_GRID_SIZE must be between 1 and {MAX_GRID_SIZE}"
        );

        let crossword_word_limit = parse_or("CROSSWORD_WORD_LIMIT", DEFAULT_WORD_LIMIT)?;
        ensure!(
            crossword_word_limit >= 1,
            "CROSSWORD_WORD_LIMIT must be at least 1"
        );

        Ok(Config {
            port: parse_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            crossword_grid_size,
            crossword_word_limit,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, std::env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}
