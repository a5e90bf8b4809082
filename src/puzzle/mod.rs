// Puzzle grid engine

pub mod clues;
pub mod crossword;
pub mod error;
pub mod generator;
pub mod grid;
pub mod word_search;

pub use clues::build_clue_sheet;
pub use crossword::CrosswordPlacer;
pub use error::PuzzleError;
pub use generator::PuzzleGenerator;
pub use grid::Grid;
pub use word_search::WordSearchPlacer;
