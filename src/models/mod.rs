pub mod puzzle;

pub use puzzle::{
    // Placement geometry
    Direction, Orientation, Placement, Position,
    // Catalog input
    PuzzleKind, WordEntry,
    // Generated output
    AnswerKey, ClueEntry, ClueSheet, Numbering, PuzzleResult,
};
