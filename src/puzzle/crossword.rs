use crate::{
    models::{Direction, Orientation, Placement, Position, WordEntry},
    puzzle::{Grid, PuzzleError},
};

/// Intersection-seeking crossword placer.
///
/// The longest word is laid across the middle of the grid. Every later word
/// must cross something already placed, perpendicular to it. The search is a
/// fixed nested scan (placed words in placement order, then their letters,
/// then the candidate's letters) and the first valid crossing wins.
pub struct CrosswordPlacer;

impl CrosswordPlacer {
    /// Place `entries` longest first and return what fit, in placement order.
    ///
    /// Fails only when the seed word is longer than the grid; callers are
    /// expected to filter such words out beforehand.
    pub fn place_words(grid: &mut Grid, entries: &[WordEntry]) -> Result<Vec<Placement>, PuzzleError> {
        let mut ordered: Vec<&WordEntry> = entries.iter().collect();
        // Stable: equal lengths keep their shuffled order
        ordered.sort_by(|a, b| b.letter_count().cmp(&a.letter_count()));

        let Some((first, rest)) = ordered.split_first() else {
            return Ok(Vec::new());
        };

        let seed = Self::seed_placement(grid.size(), first)?;
        grid.write(&seed);
        let mut placed = vec![seed];

        for entry in rest {
            match Self::find_crossing(grid, &placed, entry) {
                Some(placement) => {
                    grid.write(&placement);
                    placed.push(placement);
                }
                None => tracing::debug!("No valid crossing for {}, dropping it", entry.word),
            }
        }

        Ok(placed)
    }

    /// The first word sits across, centered on the middle row
    fn seed_placement(size: usize, entry: &WordEntry) -> Result<Placement, PuzzleError> {
        let len = entry.letter_count();
        if len > size {
            return Err(PuzzleError::WordTooLong {
                word: entry.word.clone(),
                len,
                grid_size: size,
            });
        }

        Ok(Placement {
            word: entry.word.clone(),
            clue: entry.clue.clone(),
            start: Position::new(size / 2, (size - len) / 2),
            direction: Orientation::Across.direction(),
        })
    }

    fn find_crossing(grid: &Grid, placed: &[Placement], entry: &WordEntry) -> Option<Placement> {
        let letters: Vec<char> = entry.word.chars().collect();

        for anchor in placed {
            let Some(orientation) = anchor.orientation() else {
                continue;
            };
            let direction = orientation.perpendicular().direction();
            let (dr, dc) = direction.delta();

            for (cell, anchor_letter) in anchor.letters() {
                for (j, letter) in letters.iter().enumerate() {
                    if *letter != anchor_letter {
                        continue;
                    }
                    // letters[j] lands on the anchor's cell
                    let row = cell.row as isize - dr * j as isize;
                    let col = cell.col as isize - dc * j as isize;
                    if Self::is_valid(grid, placed, &letters, row, col, direction) {
                        return Some(Placement {
                            word: entry.word.clone(),
                            clue: entry.clue.clone(),
                            start: Position::new(row as usize, col as usize),
                            direction,
                        });
                    }
                }
            }
        }

        None
    }

    /// On-grid, collision-free, and with an open cell (or the edge) directly
    /// before the first letter and after the last so runs never fuse. New
    /// letters may not land on the cells capping an already placed word
    /// either, so every word stays isolated in the finished grid.
    ///
    /// Parallel words touching side by side are allowed.
    fn is_valid(
        grid: &Grid,
        placed: &[Placement],
        letters: &[char],
        row: isize,
        col: isize,
        direction: Direction,
    ) -> bool {
        if !grid.accepts(letters, row, col, direction) {
            return false;
        }

        let (dr, dc) = direction.delta();
        let len = letters.len() as isize;
        if !grid.is_open(row - dr, col - dc) || !grid.is_open(row + dr * len, col + dc * len) {
            return false;
        }

        (0..len)
            .map(|i| (row + dr * i, col + dc * i))
            .filter(|(r, c)| grid.is_open(*r, *c))
            .all(|cell| placed.iter().all(|p| !end_caps(p).contains(&cell)))
    }
}

/// Signed coordinates of the cells just before and just after a word
fn end_caps(placement: &Placement) -> [(isize, isize); 2] {
    let (dr, dc) = placement.direction.delta();
    let start = placement.start;
    let end = placement.end();
    [
        (start.row as isize - dr, start.col as isize - dc),
        (end.row as isize + dr, end.col as isize + dc),
    ]
}
