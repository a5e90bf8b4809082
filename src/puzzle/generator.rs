use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    catalog::{self, Theme},
    models::{Placement, PuzzleKind, PuzzleResult, WordEntry},
    puzzle::{build_clue_sheet, CrosswordPlacer, Grid, PuzzleError, WordSearchPlacer},
};

pub const DEFAULT_GRID_SIZE: usize = 15;
pub const DEFAULT_NUM_WORDS: usize = 10;
/// Largest grid a printed page can hold
pub const MAX_GRID_SIZE: usize = 64;

/// Selects words from a theme, sizes the grid and runs one placer.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    grid_size: usize,
    num_words: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            num_words: DEFAULT_NUM_WORDS,
        }
    }
}

impl PuzzleGenerator {
    pub fn new(grid_size: usize, num_words: usize) -> Result<Self, PuzzleError> {
        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(PuzzleError::InvalidGridSize {
                got: grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if num_words == 0 {
            return Err(PuzzleError::InvalidWordCount(num_words));
        }
        Ok(Self {
            grid_size,
            num_words,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Generate one puzzle. With no theme name one is picked at random.
    /// The same seed, theme and sizes always yield the same grid.
    pub fn generate(
        &self,
        kind: PuzzleKind,
        theme: Option<&str>,
        seed: u64,
    ) -> Result<PuzzleResult, PuzzleError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let theme = match theme {
            Some(name) => catalog::find(kind, name)?,
            None => catalog::choose(kind, &mut rng)?,
        };

        let result = match kind {
            PuzzleKind::WordSearch => {
                let (grid, placements) = self.word_search(theme, &mut rng);
                PuzzleResult::new(kind, theme.name, seed, grid, placements, None)
            }
            PuzzleKind::Crossword => {
                let (grid, placements) = self.crossword(theme, &mut rng)?;
                let clues = build_clue_sheet(&placements);
                PuzzleResult::new(kind, theme.name, seed, grid, placements, Some(clues))
            }
        };

        tracing::info!(
            "Generated {:?} puzzle {} (theme: {}, seed: {}, placed {} of {} words)",
            kind,
            result.id,
            result.theme,
            seed,
            result.placements.len(),
            self.num_words.min(theme.entries.len())
        );

        Ok(result)
    }

    /// Word search over a fully noise-filled grid
    pub fn word_search<R: Rng + ?Sized>(&self, theme: &Theme, rng: &mut R) -> (Grid, Vec<Placement>) {
        let words: Vec<String> = self
            .select(theme, rng)
            .into_iter()
            .map(|entry| entry.word)
            .collect();

        let mut grid = Grid::new(self.grid_size);
        let placements = WordSearchPlacer::new().build(&mut grid, &words, rng);
        (grid, placements)
    }

    /// Crossword grid; unused cells stay empty
    pub fn crossword<R: Rng + ?Sized>(
        &self,
        theme: &Theme,
        rng: &mut R,
    ) -> Result<(Grid, Vec<Placement>), PuzzleError> {
        let entries = self.select(theme, rng);
        let mut grid = Grid::new(self.grid_size);
        let placements = CrosswordPlacer::place_words(&mut grid, &entries)?;
        Ok((grid, placements))
    }

    /// Shuffle the theme, keep the first `num_words`, then drop anything
    /// that cannot fit on the grid at all.
    fn select<R: Rng + ?Sized>(&self, theme: &Theme, rng: &mut R) -> Vec<WordEntry> {
        let mut entries = theme.entries.clone();
        entries.shuffle(rng);
        entries.truncate(self.num_words);
        entries.retain(|entry| {
            let fits = entry.letter_count() <= self.grid_size;
            if !fits {
                tracing::warn!(
                    "Excluding {} from {}: longer than the {}x{} grid",
                    entry.word,
                    theme.name,
                    self.grid_size,
                    self.grid_size
                );
            }
            fits
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Orientation, Position};
    use std::collections::HashMap;

    fn theme(name: &'static str, entries: &[(&str, &str)]) -> Theme {
        Theme {
            name,
            entries: entries
                .iter()
                .map(|(w, c)| WordEntry::new(*w, Some(c.to_string())))
                .collect(),
        }
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(matches!(
            PuzzleGenerator::new(0, 10),
            Err(PuzzleError::InvalidGridSize { got: 0, .. })
        ));
        assert!(matches!(
            PuzzleGenerator::new(MAX_GRID_SIZE + 1, 10),
            Err(PuzzleError::InvalidGridSize { .. })
        ));
        assert_eq!(
            PuzzleGenerator::new(15, 0).unwrap_err(),
            PuzzleError::InvalidWordCount(0)
        );
        let generator = PuzzleGenerator::default();
        assert_eq!((generator.grid_size(), generator.num_words()), (15, 10));
    }

    #[test]
    fn test_river_mountain_crossword() {
        let generator = PuzzleGenerator::default();
        let geo = theme(
            "Geography",
            &[("RIVER", "A flowing body of water"), ("MOUNTAIN", "A large natural elevation")],
        );
        let mut rng = StdRng::seed_from_u64(2024);
        let (grid, placements) = generator.crossword(&geo, &mut rng).unwrap();

        assert_eq!(placements[0].word, "MOUNTAIN");
        assert_eq!(placements[0].start, Position::new(7, 3));
        assert_eq!(placements[0].orientation(), Some(Orientation::Across));
        assert_eq!(placements[1].word, "RIVER");
        assert_eq!(placements[1].start, Position::new(6, 9));
        assert_eq!(placements[1].orientation(), Some(Orientation::Down));
        assert_eq!(grid.get(Position::new(7, 9)), Some('I'));

        let clues = build_clue_sheet(&placements);
        assert_eq!(clues.numbering.get(Position::new(6, 9)), Some(1));
        assert_eq!(clues.numbering.get(Position::new(7, 3)), Some(2));
    }

    #[test]
    fn test_oversized_word_excluded_from_crossword() {
        let generator = PuzzleGenerator::new(5, 10).unwrap();
        let geo = theme("Geography", &[("MOUNTAIN", "A large natural elevation")]);
        let (grid, placements) = generator
            .crossword(&geo, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert!(placements.is_empty());
        assert_eq!(grid.empty_cells(), 25);
    }

    #[test]
    fn test_oversized_word_excluded_from_word_search() {
        let generator = PuzzleGenerator::new(5, 10).unwrap();
        let geo = theme("Geography", &[("MOUNTAIN", "")]);
        let (grid, placements) = generator.word_search(&geo, &mut StdRng::seed_from_u64(1));
        assert!(placements.is_empty());
        assert_eq!(grid.empty_cells(), 0);
    }

    #[test]
    fn test_empty_theme_gives_valid_output() {
        let generator = PuzzleGenerator::default();
        let empty = theme("empty", &[]);
        let (grid, placements) = generator.word_search(&empty, &mut StdRng::seed_from_u64(4));
        assert!(placements.is_empty());
        assert_eq!(grid.empty_cells(), 0);

        let (grid, placements) = generator
            .crossword(&empty, &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert!(placements.is_empty());
        assert_eq!(grid.empty_cells(), 225);
    }

    #[test]
    fn test_word_count_is_capped() {
        let generator = PuzzleGenerator::new(15, 3).unwrap();
        for seed in 0..20 {
            let puzzle = generator
                .generate(PuzzleKind::WordSearch, Some("animals"), seed)
                .unwrap();
            assert!(puzzle.placements.len() <= 3);
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::default();
        for kind in [PuzzleKind::WordSearch, PuzzleKind::Crossword] {
            let a = generator.generate(kind, None, 77).unwrap();
            let b = generator.generate(kind, None, 77).unwrap();
            assert_eq!(a.theme, b.theme);
            assert_eq!(a.grid, b.grid);
            assert_eq!(a.placements, b.placements);
            assert_eq!(a.clues, b.clues);
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn test_word_search_properties_hold_across_seeds() {
        let generator = PuzzleGenerator::default();
        for seed in 0..50 {
            let puzzle = generator.generate(PuzzleKind::WordSearch, None, seed).unwrap();
            assert_eq!(puzzle.grid.empty_cells(), 0);
            assert!(puzzle.clues.is_none());

            let mut letters = HashMap::new();
            for p in &puzzle.placements {
                assert_eq!(
                    puzzle.grid.read(p.start, p.direction, p.letter_count()),
                    Some(p.word.clone())
                );
                for (pos, letter) in p.letters() {
                    assert!(pos.row < 15 && pos.col < 15);
                    assert_eq!(*letters.entry(pos).or_insert(letter), letter);
                }
            }
        }
    }

    #[test]
    fn test_crossword_properties_hold_across_seeds() {
        let generator = PuzzleGenerator::default();
        for seed in 0..50 {
            let puzzle = generator.generate(PuzzleKind::Crossword, None, seed).unwrap();
            let clues = puzzle.clues.as_ref().unwrap();

            for p in &puzzle.placements {
                let orientation = p.orientation().unwrap();
                let (dr, dc) = orientation.direction().delta();
                let (end_r, end_c) = (p.end().row as isize, p.end().col as isize);
                assert!(puzzle
                    .grid
                    .is_open(p.start.row as isize - dr, p.start.col as isize - dc));
                assert!(puzzle.grid.is_open(end_r + dr, end_c + dc));
                for (pos, letter) in p.letters() {
                    assert_eq!(puzzle.grid.get(pos), Some(letter));
                }
                assert!(clues.numbering.get(p.start).is_some());
            }

            assert_eq!(
                clues.across.len() + clues.down.len(),
                puzzle.placements.len()
            );
        }
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let err = PuzzleGenerator::default()
            .generate(PuzzleKind::Crossword, Some("Cooking"), 1)
            .unwrap_err();
        assert_eq!(err, PuzzleError::UnknownTheme("Cooking".to_string()));
    }
}
