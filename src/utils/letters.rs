use rand::Rng;

/// Letters a puzzle cell may hold
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw one uppercase letter uniformly at random
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

/// A word is placeable only if it is non-empty and made of A-Z
pub fn is_puzzle_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase())
}

/// Trim and uppercase a raw word, returning None when it still isn't placeable
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_uppercase();
    is_puzzle_word(&word).then_some(word)
}
