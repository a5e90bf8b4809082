use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::puzzle::{
    generator::{DEFAULT_GRID_SIZE, DEFAULT_NUM_WORDS},
    PuzzleGenerator,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub puzzle: PuzzleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    pub num_words: usize,
    /// Seeds the process-wide generator; random when unset
    pub seed: Option<u64>,
    /// How many generated puzzles are kept for answer-key lookups
    pub archive_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            puzzle: PuzzleConfig {
                grid_size: DEFAULT_GRID_SIZE,
                num_words: DEFAULT_NUM_WORDS,
                seed: None,
                archive_limit: 256,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source, e.g. the process environment
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerConfig {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let puzzle = PuzzleConfig {
            grid_size: var("PUZZLE_GRID_SIZE")
                .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
                .parse()
                .context("PUZZLE_GRID_SIZE must be a number")?,
            num_words: var("PUZZLE_NUM_WORDS")
                .unwrap_or_else(|| DEFAULT_NUM_WORDS.to_string())
                .parse()
                .context("PUZZLE_NUM_WORDS must be a number")?,
            seed: var("PUZZLE_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("PUZZLE_SEED must be an unsigned 64-bit number")?,
            archive_limit: var("PUZZLE_ARCHIVE_LIMIT")
                .unwrap_or_else(|| "256".to_string())
                .parse()
                .context("PUZZLE_ARCHIVE_LIMIT must be a number")?,
        };

        let config = Config { server, puzzle };
        config.validate()?;
        Ok(config)
    }

    /// Zero or oversized puzzle dimensions are fatal at startup
    pub fn validate(&self) -> Result<()> {
        self.generator().context("Invalid puzzle configuration")?;
        if self.puzzle.archive_limit == 0 {
            anyhow::bail!("PUZZLE_ARCHIVE_LIMIT must be at least 1");
        }
        Ok(())
    }

    /// Generator for the configured default dimensions
    pub fn generator(&self) -> Result<PuzzleGenerator, crate::puzzle::PuzzleError> {
        PuzzleGenerator::new(self.puzzle.grid_size, self.puzzle.num_words)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_lookup_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.puzzle.grid_size, 15);
        assert_eq!(config.puzzle.num_words, 10);
        assert_eq!(config.puzzle.seed, None);
        assert_eq!(config.puzzle.archive_limit, 256);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PUZZLE_GRID_SIZE", "11"),
            ("PUZZLE_SEED", "42"),
            ("PUZZLE_ARCHIVE_LIMIT", "8"),
        ]))
        .unwrap();
        assert_eq!(config.puzzle.grid_size, 11);
        assert_eq!(config.puzzle.seed, Some(42));
        assert_eq!(config.puzzle.archive_limit, 8);
    }

    #[test]
    fn test_unparseable_archive_limit_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PUZZLE_ARCHIVE_LIMIT", "lots")])).unwrap_err();
        assert!(err.to_string().contains("PUZZLE_ARCHIVE_LIMIT"));
    }

    #[test]
    fn test_unparseable_seed_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("PUZZLE_SEED", "-1")])).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_zero_grid_size_is_rejected() {
        let mut config = Config::default();
        config.puzzle.grid_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_word_count_is_rejected() {
        let mut config = Config::default();
        config.puzzle.num_words = 0;
        assert!(config.validate().is_err());
    }
}
