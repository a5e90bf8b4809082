use once_cell::sync::Lazy;
use rand::{seq::IndexedRandom, Rng};

use crate::{
    models::{PuzzleKind, WordEntry},
    puzzle::PuzzleError,
    utils::letters::normalize_word,
};

/// A named word list
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub entries: Vec<WordEntry>,
}

impl Theme {
    fn words(name: &'static str, words: &[&str]) -> Self {
        Self {
            name,
            entries: words
                .iter()
                .filter_map(|w| normalize_word(w))
                .map(|w| WordEntry::new(w, None))
                .collect(),
        }
    }

    fn clued(name: &'static str, pairs: &[(&str, &str)]) -> Self {
        Self {
            name,
            entries: pairs
                .iter()
                .filter_map(|(w, clue)| normalize_word(w).map(|w| WordEntry::new(w, Some(clue.to_string()))))
                .collect(),
        }
    }
}

pub static WORD_SEARCH_THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme::words(
            "animals",
            &[
                "ELEPHANT", "GIRAFFE", "PENGUIN", "DOLPHIN", "TIGER", "OCTOPUS", "FALCON", "TURTLE",
                "JAGUAR", "COBRA",
            ],
        ),
        Theme::words(
            "space",
            &[
                "GALAXY", "NEBULA", "PLANET", "COMET", "ORBIT", "QUASAR", "PULSAR", "METEOR", "SATURN",
                "VENUS",
            ],
        ),
        Theme::words(
            "food",
            &[
                "BANANA", "MANGO", "PIZZA", "SUSHI", "BREAD", "CHEESE", "SALMON", "GARLIC", "PEPPER",
                "WAFFLE",
            ],
        ),
        Theme::words(
            "weather",
            &[
                "THUNDER", "BREEZE", "STORM", "FROST", "CLOUD", "TORNADO", "HAIL", "FOGGY", "SLEET",
                "DRIZZLE",
            ],
        ),
        Theme::words(
            "ocean",
            &[
                "CORAL", "WHALE", "SHARK", "TIDE", "REEF", "ANCHOR", "TRENCH", "KELP", "HARBOR", "LAGOON",
            ],
        ),
        Theme::words(
            "music",
            &[
                "GUITAR", "PIANO", "DRUMS", "VIOLIN", "FLUTE", "TEMPO", "CHORD", "MELODY", "RHYTHM", "BASS",
            ],
        ),
    ]
});

pub static CROSSWORD_THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme::clued(
            "Geography",
            &[
                ("RIVER", "A flowing body of water"),
                ("MOUNTAIN", "A large natural elevation"),
                ("ISLAND", "Land surrounded by water"),
                ("DESERT", "An arid, sandy region"),
                ("CANYON", "A deep gorge in the earth"),
                ("GLACIER", "A slow-moving mass of ice"),
                ("PLATEAU", "A flat elevated landform"),
                ("VOLCANO", "An opening that erupts lava"),
                ("VALLEY", "Low area between hills"),
                ("OCEAN", "A vast body of salt water"),
                ("DELTA", "Sediment deposit at river mouth"),
                ("TUNDRA", "Cold treeless biome"),
            ],
        ),
        Theme::clued(
            "Science",
            &[
                ("ATOM", "Smallest unit of an element"),
                ("CELL", "Basic unit of life"),
                ("GRAVITY", "Force that pulls objects together"),
                ("PHOTON", "A particle of light"),
                ("ENZYME", "A biological catalyst"),
                ("QUARK", "Subatomic particle in protons"),
                ("PLASMA", "Fourth state of matter"),
                ("NEURON", "A nerve cell"),
                ("PRISM", "Splits white light into colors"),
                ("ORBIT", "Path around a celestial body"),
                ("GENE", "Unit of heredity"),
                ("LENS", "Focuses light rays"),
            ],
        ),
        Theme::clued(
            "Literature",
            &[
                ("NOVEL", "A long fictional narrative"),
                ("PROSE", "Ordinary written language"),
                ("FABLE", "A short moral story"),
                ("VERSE", "A line of poetry"),
                ("GENRE", "A category of literature"),
                ("PLOT", "Sequence of story events"),
                ("THEME", "Central idea of a work"),
                ("STANZA", "A grouped set of poem lines"),
                ("IRONY", "Opposite of what is expected"),
                ("SATIRE", "Using humor to criticize"),
                ("EPIC", "A long heroic narrative poem"),
                ("MYTH", "A traditional symbolic story"),
            ],
        ),
        Theme::clued(
            "Nature",
            &[
                ("FOREST", "A dense area of trees"),
                ("CORAL", "Marine organism forming reefs"),
                ("POLLEN", "Powder from flowering plants"),
                ("FALCON", "A fast bird of prey"),
                ("MAPLE", "Tree with lobed leaves"),
                ("LICHEN", "Fungus-algae symbiosis"),
                ("MOSS", "Small green flowerless plant"),
                ("HERON", "A long-legged wading bird"),
                ("FERN", "A feathery leafed plant"),
                ("BIRCH", "A white-barked tree"),
                ("ACORN", "Seed of an oak tree"),
                ("BROOK", "A small stream"),
            ],
        ),
    ]
});

/// Every theme available for a puzzle kind
pub fn themes(kind: PuzzleKind) -> &'static [Theme] {
    match kind {
        PuzzleKind::WordSearch => &WORD_SEARCH_THEMES,
        PuzzleKind::Crossword => &CROSSWORD_THEMES,
    }
}

pub fn theme_names(kind: PuzzleKind) -> Vec<&'static str> {
    themes(kind).iter().map(|t| t.name).collect()
}

/// Look a theme up by name, ignoring case
pub fn find(kind: PuzzleKind, name: &str) -> Result<&'static Theme, PuzzleError> {
    themes(kind)
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PuzzleError::UnknownTheme(name.to_string()))
}

pub fn choose<R: Rng + ?Sized>(kind: PuzzleKind, rng: &mut R) -> Result<&'static Theme, PuzzleError> {
    themes(kind).choose(rng).ok_or(PuzzleError::NoThemes)
}
