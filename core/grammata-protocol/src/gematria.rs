use core::iter::Sum;
use core::ops::{Add, AddAssign};
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// The three numeric readings of a piece of text.
///
/// `standard` sums the classical letter values, `ordinal` sums alphabet
/// positions and `reduced` sums the digital roots of the standard values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Gematria {
    pub standard: u64,
    pub ordinal: u64,
    pub reduced: u64,
}

impl Gematria {
    pub const ZERO: Gematria = Gematria::new(0, 0, 0);

    pub const fn new(standard: u64, ordinal: u64, reduced: u64) -> Self {
        Self { standard, ordinal, reduced }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for Gematria {
    type Output = Gematria;

    fn add(self, rhs: Gematria) -> Gematria {
        Gematria {
            standard: self.standard + rhs.standard,
            ordinal: self.ordinal + rhs.ordinal,
            reduced: self.reduced + rhs.reduced,
        }
    }
}

impl AddAssign for Gematria {
    fn add_assign(&mut self, rhs: Gematria) {
        *self = *self + rhs;
    }
}

impl Sum for Gematria {
    fn sum<I: Iterator<Item = Gematria>>(iter: I) -> Gematria {
        iter.fold(Gematria::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Gematria> for Gematria {
    fn sum<I: Iterator<Item = &'a Gematria>>(iter: I) -> Gematria {
        iter.copied().sum()
    }
}

/// Contribution of a single letter, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LetterValue {
    pub letter: char,
    pub standard: u32,
    pub ordinal: u32,
    pub reduced: u32,
}

impl From<LetterValue> for Gematria {
    fn from(letter: LetterValue) -> Self {
        Gematria::new(
            u64::from(letter.standard),
            u64::from(letter.ordinal),
            u64::from(letter.reduced),
        )
    }
}
