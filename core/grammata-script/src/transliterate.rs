//! Latin-letter encoding of the corpus to Greek script.

use alloc::string::String;

/// Maps one character. `v`/`V` stand for final sigma, everything
/// without an entry passes through unchanged.
pub const fn greek_letter(c: char) -> char {
    match c {
        'a' => 'α',
        'b' => 'β',
        'g' => 'γ',
        'd' => 'δ',
        'e' => 'ε',
        'z' => 'ζ',
        'h' => 'η',
        'y' => 'θ',
        'i' => 'ι',
        'k' => 'κ',
        'l' => 'λ',
        'm' => 'μ',
        'n' => 'ν',
        'x' => 'ξ',
        'o' => 'ο',
        'p' => 'π',
        'r' => 'ρ',
        's' => 'σ',
        't' => 'τ',
        'u' => 'υ',
        'f' => 'φ',
        'c' => 'χ',
        'q' => 'ψ',
        'w' => 'ω',
        'v' | 'V' => 'ς',
        'A' => 'Α',
        'B' => 'Β',
        'G' => 'Γ',
        'D' => 'Δ',
        'E' => 'Ε',
        'Z' => 'Ζ',
        'H' => 'Η',
        'Y' => 'Θ',
        'I' => 'Ι',
        'K' => 'Κ',
        'L' => 'Λ',
        'M' => 'Μ',
        'N' => 'Ν',
        'X' => 'Ξ',
        'O' => 'Ο',
        'P' => 'Π',
        'R' => 'Ρ',
        'S' => 'Σ',
        'T' => 'Τ',
        'U' => 'Υ',
        'F' => 'Φ',
        'C' => 'Χ',
        'Q' => 'Ψ',
        'W' => 'Ω',
        other => other,
    }
}

pub fn transliterate(input: &str) -> String {
    input.chars().map(greek_letter).collect()
}
