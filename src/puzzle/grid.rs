use std::fmt;

use serde::{ser::SerializeSeq, Serialize, Serializer};

use crate::models::{Direction, Placement, Position};

/// Square letter matrix owned by a single generation run.
///
/// Cells are stored row-major; `None` marks an empty cell, which the
/// renderer shows as a blocked square in crosswords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size x size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells[pos.row * self.size + pos.col]
    }

    /// Letter at signed coordinates; off-grid reads as empty
    fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.get(Position::new(row as usize, col as usize))
    }

    /// True when the cell is empty or lies outside the grid
    pub fn is_open(&self, row: isize, col: isize) -> bool {
        self.get_signed(row, col).is_none()
    }

    pub fn set(&mut self, pos: Position, letter: char) {
        if pos.row < self.size && pos.col < self.size {
            self.cells[pos.row * self.size + pos.col] = Some(letter);
        }
    }

    /// Whether `letters` can be written from (row, col) along `direction`:
    /// both ends stay on the grid and every target cell is empty or already
    /// holds the same letter.
    pub fn accepts(&self, letters: &[char], row: isize, col: isize, direction: Direction) -> bool {
        if letters.is_empty() {
            return false;
        }
        let (dr, dc) = direction.delta();
        let last = letters.len() as isize - 1;
        if !self.in_bounds(row, col) || !self.in_bounds(row + dr * last, col + dc * last) {
            return false;
        }

        letters.iter().enumerate().all(|(i, letter)| {
            let i = i as isize;
            match self.get_signed(row + dr * i, col + dc * i) {
                Some(existing) => existing == *letter,
                None => true,
            }
        })
    }

    /// Write a validated placement's letters
    pub fn write(&mut self, placement: &Placement) {
        for (pos, letter) in placement.letters() {
            self.set(pos, letter);
        }
    }

    /// Read `len` letters starting at `start` along `direction`
    pub fn read(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        let (dr, dc) = direction.delta();
        (0..len as isize)
            .map(|i| self.get_signed(start.row as isize + dr * i, start.col as isize + dc * i))
            .collect()
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Give every empty cell a letter from `next`, in row-major order
    pub fn fill_empty(&mut self, mut next: impl FnMut() -> char) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(next());
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.unwrap_or('.')).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(15);
        assert_eq!(grid.size(), 15);
        assert_eq!(grid.empty_cells(), 225);
        assert_eq!(grid.rows().count(), 15);
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(5);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 4));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, 5));
        assert!(grid.is_open(-1, 2));
        assert_eq!(grid.get(Position::new(5, 0)), None);
    }

    #[test]
    fn test_accepts_rejects_off_grid_ends() {
        let grid = Grid::new(5);
        assert!(grid.accepts(&letters("HELLO"), 0, 0, Direction::Right));
        assert!(!grid.accepts(&letters("HELLO"), 0, 1, Direction::Right));
        assert!(!grid.accepts(&letters("HELLO"), 3, 0, Direction::Up));
        assert!(!grid.accepts(&letters("HI"), -1, 0, Direction::Down));
        assert!(!grid.accepts(&[], 0, 0, Direction::Down));
    }

    #[test]
    fn test_accepts_matching_overlap_only() {
        let mut grid = Grid::new(5);
        grid.set(Position::new(2, 2), 'A');
        assert!(grid.accepts(&letters("CAT"), 2, 1, Direction::Right));
        assert!(!grid.accepts(&letters("COT"), 2, 1, Direction::Right));
    }

    #[test]
    fn test_write_and_read() {
        let mut grid = Grid::new(6);
        let placement = Placement {
            word: "OCEAN".to_string(),
            clue: None,
            start: Position::new(5, 0),
            direction: Direction::UpRight,
        };
        grid.write(&placement);
        assert_eq!(
            grid.read(Position::new(5, 0), Direction::UpRight, 5),
            Some("OCEAN".to_string())
        );
        assert_eq!(grid.read(Position::new(0, 0), Direction::Right, 3), None);
        assert_eq!(grid.empty_cells(), 31);
    }

    #[test]
    fn test_fill_empty_keeps_letters() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(1, 1), 'Q');
        grid.fill_empty(|| 'Z');
        assert_eq!(grid.empty_cells(), 0);
        assert_eq!(grid.get(Position::new(1, 1)), Some('Q'));
        assert_eq!(grid.get(Position::new(0, 0)), Some('Z'));
    }

    #[test]
    fn test_display_and_serialize() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 1), 'A');
        assert_eq!(grid.to_string(), ".A\n..\n");

        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json, serde_json::json!([[null, "A"], [null, null]]));
    }
}
