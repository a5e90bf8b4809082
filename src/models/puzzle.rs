use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{ser::SerializeSeq, Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::puzzle::Grid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the eight unit steps a word can be written along
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    /// Row and column step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
        }
    }
}

/// Crossword entries only ever run across or down
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    pub fn direction(self) -> Direction {
        match self {
            Orientation::Across => Direction::Right,
            Orientation::Down => Direction::Down,
        }
    }

    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    WordSearch,
    Crossword,
}

/// A catalog word with its optional crossword clue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub clue: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, clue: Option<String>) -> Self {
        Self {
            word: word.into(),
            clue,
        }
    }

    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}

/// Where a word landed. Pure coordinates: it can be replayed onto any grid
/// of the same size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }

    /// Cells covered by the word, first letter first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = self.direction.delta();
        let (row, col) = (self.start.row as isize, self.start.col as isize);
        (0..self.letter_count() as isize)
            .map(move |i| Position::new((row + dr * i) as usize, (col + dc * i) as usize))
    }

    /// Each covered cell paired with the letter written there
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells().zip(self.word.chars())
    }

    pub fn end(&self) -> Position {
        let (dr, dc) = self.direction.delta();
        let steps = self.letter_count().saturating_sub(1) as isize;
        Position::new(
            (self.start.row as isize + dr * steps) as usize,
            (self.start.col as isize + dc * steps) as usize,
        )
    }

    /// Across/down label; None for the diagonal and backward word-search runs
    pub fn orientation(&self) -> Option<Orientation> {
        match self.direction {
            Direction::Right => Some(Orientation::Across),
            Direction::Down => Some(Orientation::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberedCell {
    pub row: usize,
    pub col: usize,
    pub number: u32,
}

/// Crossword start-cell numbers. A cell starting both an across and a down
/// entry holds a single number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering(BTreeMap<Position, u32>);

impl Numbering {
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.0.get(&pos).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains_key(&pos)
    }

    pub(crate) fn insert(&mut self, pos: Position, number: u32) {
        self.0.insert(pos, number);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NumberedCell> + '_ {
        self.0.iter().map(|(pos, number)| NumberedCell {
            row: pos.row,
            col: pos.col,
            number: *number,
        })
    }
}

impl Serialize for Numbering {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for cell in self.iter() {
            seq.serialize_element(&cell)?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
    pub length: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClueSheet {
    pub numbering: Numbering,
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

/// A finished puzzle, handed to whatever renders it
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleResult {
    pub id: Uuid,
    pub kind: PuzzleKind,
    pub theme: String,
    /// Seed that reproduces this exact grid
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub grid: Grid,
    pub placements: Vec<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clues: Option<ClueSheet>,
}

impl PuzzleResult {
    pub fn new(
        kind: PuzzleKind,
        theme: impl Into<String>,
        seed: u64,
        grid: Grid,
        placements: Vec<Placement>,
        clues: Option<ClueSheet>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            theme: theme.into(),
            seed,
            generated_at: Utc::now(),
            grid,
            placements,
            clues,
        }
    }

    /// Solution listing for printing in a later issue
    pub fn answer_key(&self) -> AnswerKey {
        let entries = self
            .placements
            .iter()
            .map(|p| AnswerEntry {
                word: p.word.clone(),
                number: self
                    .clues
                    .as_ref()
                    .and_then(|clues| clues.numbering.get(p.start)),
                start: p.start,
                end: p.end(),
                direction: p.direction,
            })
            .collect();

        AnswerKey {
            puzzle_id: self.id,
            kind: self.kind,
            theme: self.theme.clone(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnswerEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerKey {
    pub puzzle_id: Uuid,
    pub kind: PuzzleKind,
    pub theme: String,
    pub entries: Vec<AnswerEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(word: &str, row: usize, col: usize, direction: Direction) -> Placement {
        Placement {
            word: word.to_string(),
            clue: None,
            start: Position::new(row, col),
            direction,
        }
    }

    #[test]
    fn test_cells_follow_direction() {
        let p = placement("CAT", 4, 4, Direction::UpLeft);
        let cells: Vec<Position> = p.cells().collect();
        assert_eq!(
            cells,
            vec![Position::new(4, 4), Position::new(3, 3), Position::new(2, 2)]
        );
        assert_eq!(p.end(), Position::new(2, 2));
    }

    #[test]
    fn test_orientation_labels() {
        assert_eq!(
            placement("A", 0, 0, Direction::Right).orientation(),
            Some(Orientation::Across)
        );
        assert_eq!(
            placement("A", 0, 0, Direction::Down).orientation(),
            Some(Orientation::Down)
        );
        assert_eq!(placement("A", 0, 0, Direction::Left).orientation(), None);
        assert_eq!(Orientation::Across.perpendicular(), Orientation::Down);
    }

    #[test]
    fn test_position_orders_row_then_col() {
        let mut positions = vec![
            Position::new(2, 0),
            Position::new(0, 9),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new(0, 1), Position::new(0, 9), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_numbering_serializes_as_list() {
        let mut numbering = Numbering::default();
        numbering.insert(Position::new(7, 3), 2);
        numbering.insert(Position::new(6, 9), 1);

        let json = serde_json::to_value(&numbering).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"row": 6, "col": 9, "number": 1},
                {"row": 7, "col": 3, "number": 2}
            ])
        );
    }

    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&Direction::DownRight).unwrap();
        assert_eq!(json, "\"down_right\"");
        let kind: PuzzleKind = serde_json::from_str("\"word_search\"").unwrap();
        assert_eq!(kind, PuzzleKind::WordSearch);
    }
}
