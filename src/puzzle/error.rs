use thiserror::Error;

/// Precondition violations. Failing to place an individual word is never
/// one of these; such words are just left out of the result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("no themes available")]
    NoThemes,

    #[error("grid size must be between 1 and {max}, got {got}")]
    InvalidGridSize { got: usize, max: usize },

    #[error("word count must be at least 1, got {0}")]
    InvalidWordCount(usize),

    #[error("word {word} has {len} letters but the grid is only {grid_size} wide")]
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },
}
