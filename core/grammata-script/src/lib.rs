#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod gematria;
pub mod tables;
pub mod transliterate;

pub use gematria::{compute, letter_values};
pub use transliterate::{greek_letter, transliterate};
