use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{Direction, Placement, Position},
    puzzle::Grid,
    utils::letters::random_letter,
};

/// Random origins tried per direction before moving on
pub const ATTEMPTS_PER_DIRECTION: usize = 50;

/// Greedy first-fit placer for word searches.
///
/// Words go in one at a time in any of the eight directions. A word that
/// finds no spot within the attempt budget is dropped; nothing already
/// placed is ever moved to make room.
#[derive(Debug, Clone)]
pub struct WordSearchPlacer {
    attempts_per_direction: usize,
}

impl Default for WordSearchPlacer {
    fn default() -> Self {
        Self {
            attempts_per_direction: ATTEMPTS_PER_DIRECTION,
        }
    }
}

impl WordSearchPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_attempts(attempts_per_direction: usize) -> Self {
        Self {
            attempts_per_direction,
        }
    }

    /// Place as many words as fit, then fill the rest of the grid with noise.
    /// Returns the placed words in the order they were attempted.
    pub fn build<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        words: &[String],
        rng: &mut R,
    ) -> Vec<Placement> {
        let placements = self.place_words(grid, words, rng);
        Self::fill_noise(grid, rng);
        placements
    }

    pub fn place_words<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        words: &[String],
        rng: &mut R,
    ) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(words.len());
        for word in words {
            match self.place_word(grid, word, rng) {
                Some(placement) => placements.push(placement),
                None => tracing::debug!("No room for {} in word search, dropping it", word),
            }
        }
        placements
    }

    /// Try to put one word on the grid, writing it on success
    pub fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Option<Placement> {
        let size = grid.size();
        let letters: Vec<char> = word.chars().collect();
        if size == 0 || letters.is_empty() {
            return None;
        }

        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        for direction in directions {
            for _ in 0..self.attempts_per_direction {
                let row = rng.random_range(0..size);
                let col = rng.random_range(0..size);
                if grid.accepts(&letters, row as isize, col as isize, direction) {
                    let placement = Placement {
                        word: word.to_string(),
                        clue: None,
                        start: Position::new(row, col),
                        direction,
                    };
                    grid.write(&placement);
                    return Some(placement);
                }
            }
        }

        None
    }

    /// Give every empty cell a uniformly random letter. Terminal step: the
    /// grid has no empty cells afterwards.
    pub fn fill_noise<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
        grid.fill_empty(|| random_letter(&mut *rng));
    }
}
