use rkyv::{Archive, Deserialize, Serialize};
use crate::gematria::{Gematria, LetterValue};
use crate::morphology::Morphology;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Kind of scribal note appended after the main text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ColophonKind {
    Subscription = 0,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Annotations {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "core::ops::Not::not"))]
    pub colophon: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub colophon_type: Option<ColophonKind>,
}

impl Annotations {
    pub const fn colophon(kind: ColophonKind) -> Self {
        Self { colophon: true, colophon_type: Some(kind) }
    }

    pub fn is_colophon(&self) -> bool {
        self.colophon
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordRecord {
    /// 1-based, contiguous within the verse once colophons are segmented.
    pub position: u32,
    /// Greek script.
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lemma: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reference_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tag: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub morphology: Option<Morphology>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub annotation_flags: Annotations,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gematria: Gematria,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub letters: Vec<LetterValue>,
}

impl WordRecord {
    pub fn new(position: u32, text: String) -> Self {
        Self {
            position,
            text,
            lemma: Vec::new(),
            reference_id: None,
            tag: None,
            morphology: None,
            annotation_flags: Annotations::default(),
            gematria: Gematria::ZERO,
            letters: Vec::new(),
        }
    }

    pub fn is_colophon(&self) -> bool {
        self.annotation_flags.is_colophon()
    }
}

/// Inclusive range of word positions flagged as colophon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ColophonRange {
    pub start: u32,
    pub end: u32,
}

impl ColophonRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, position: u32) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Verse {
    pub chapter: u32,
    pub verse: u32,
    pub words: Vec<WordRecord>,
    pub colophon_range: Option<ColophonRange>,
    /// Aggregate over the primary (non-colophon) words.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gematria: Gematria,
}

impl Verse {
    pub fn new(chapter: u32, verse: u32, words: Vec<WordRecord>) -> Self {
        Self {
            chapter,
            verse,
            words,
            colophon_range: None,
            gematria: Gematria::ZERO,
        }
    }

    pub fn has_colophon(&self) -> bool {
        self.colophon_range.is_some()
    }

    pub fn primary_words(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.iter().filter(|w| !w.is_colophon())
    }

    pub fn colophon_words(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.iter().filter(|w| w.is_colophon())
    }
}

/// One source unit: verse numbering is local to it.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Corpus {
    pub version: u32,
    pub books: Vec<Book>,
}

impl Corpus {
    pub const VERSION: u32 = 1;

    pub fn new(books: Vec<Book>) -> Self {
        Self { version: Self::VERSION, books }
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(|b| b.verses.len()).sum()
    }
}
