use alloc::vec::Vec;

use grammata_protocol::{Gematria, LetterValue};

use crate::tables::{digital_root, lookup};

/// Case-folds `text` and keeps the letters that have a tabulated value.
fn valued_letters(text: &str) -> impl Iterator<Item = LetterValue> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            lookup(c).map(|e| LetterValue {
                letter: c,
                standard: e.standard,
                ordinal: e.ordinal,
                reduced: digital_root(e.standard),
            })
        })
}

/// Standard, ordinal and reduced totals of `text`.
///
/// Characters without a table entry (punctuation, spaces, Latin letters,
/// accented vowels) contribute nothing.
pub fn compute(text: &str) -> Gematria {
    valued_letters(text).map(Gematria::from).sum()
}

/// Per-letter breakdown in reading order.
pub fn letter_values(text: &str) -> Vec<LetterValue> {
    valued_letters(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logos() {
        // λ=11 ο=15 γ=3 ο=15 ς=18 by alphabet position
        let g = compute("λογος");
        assert_eq!(g.ordinal, 62);
        assert_eq!(g.standard, 30 + 70 + 3 + 70 + 200);
        assert_eq!(g.reduced, 3 + 7 + 3 + 7 + 2);
    }

    #[test]
    fn iesous_is_888() {
        assert_eq!(compute("ιησους").standard, 888);
    }

    #[test]
    fn empty_and_unknown_are_zero() {
        assert!(compute("").is_zero());
        assert!(compute("abc 123 .;[]|").is_zero());
    }

    #[test]
    fn capitals_fold() {
        assert_eq!(compute("ΛΟΓΟΣ"), compute("λογος"));
    }

    #[test]
    fn breakdown_follows_reading_order() {
        let letters = letter_values("θ-ε.ος");
        let order: Vec<char> = letters.iter().map(|l| l.letter).collect();
        assert_eq!(order, ['θ', 'ε', 'ο', 'ς']);
        assert_eq!(letters[0].standard, 9);
        assert_eq!(letters[3].reduced, 2);

        let total: Gematria = letters.into_iter().map(Gematria::from).sum();
        assert_eq!(total, compute("θεος"));
    }
}
