//! Letter value tables for Greek isopsephy.
//!
//! Final sigma is tabulated as its own entry with the same values as medial
//! sigma, so lookups stay context free.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    pub letter: char,
    /// Classical numeric value.
    pub standard: u32,
    /// 1-based position in the 24-letter alphabet.
    pub ordinal: u32,
}

const fn entry(letter: char, standard: u32, ordinal: u32) -> LetterEntry {
    LetterEntry { letter, standard, ordinal }
}

/// Lowercase letters only, callers case-fold first.
pub static LETTERS: [LetterEntry; 25] = [
    entry('α', 1, 1),
    entry('β', 2, 2),
    entry('γ', 3, 3),
    entry('δ', 4, 4),
    entry('ε', 5, 5),
    entry('ζ', 7, 6),
    entry('η', 8, 7),
    entry('θ', 9, 8),
    entry('ι', 10, 9),
    entry('κ', 20, 10),
    entry('λ', 30, 11),
    entry('μ', 40, 12),
    entry('ν', 50, 13),
    entry('ξ', 60, 14),
    entry('ο', 70, 15),
    entry('π', 80, 16),
    entry('ρ', 100, 17),
    entry('σ', 200, 18),
    entry('ς', 200, 18),
    entry('τ', 300, 19),
    entry('υ', 400, 20),
    entry('φ', 500, 21),
    entry('χ', 600, 22),
    entry('ψ', 700, 23),
    entry('ω', 800, 24),
];

pub fn lookup(letter: char) -> Option<&'static LetterEntry> {
    LETTERS.iter().find(|e| e.letter == letter)
}

/// Repeatedly sums decimal digits until a single digit remains.
pub const fn digital_root(mut value: u32) -> u32 {
    while value > 9 {
        let mut sum = 0;
        while value > 0 {
            sum += value % 10;
            value /= 10;
        }
        value = sum;
    }
    value
}
