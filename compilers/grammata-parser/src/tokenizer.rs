//! Whitespace-token scanner turning an annotated book into verses.
//!
//! A word may be followed by a Strong's number, a parsing number (only after
//! a Strong's number) and a `{tag}`, in that order. A Strong's number with no
//! word in front of it is a known artifact of the source files; it is dropped
//! together with the tag that follows it.

use grammata_protocol::{lexicon, Verse, WordRecord};
use grammata_script::transliterate;
use log::{debug, warn};

use crate::token::{is_reference, tag_body, TokenKind};

struct Cursor<'t> {
    tokens: Vec<&'t str>,
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn new(input: &'t str) -> Self {
        Self { tokens: input.split_whitespace().collect(), pos: 0 }
    }

    fn next(&mut self) -> Option<&'t str> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the next token only if `accept` maps it.
    fn next_map<T>(&mut self, accept: impl Fn(&'t str) -> Option<T>) -> Option<T> {
        let value = self.tokens.get(self.pos).copied().and_then(accept)?;
        self.pos += 1;
        Some(value)
    }

    fn next_reference(&mut self) -> Option<&'t str> {
        self.next_map(|t| is_reference(t).then_some(t))
    }

    fn next_tag(&mut self) -> Option<&'t str> {
        self.next_map(tag_body)
    }
}

/// Verse being accumulated between two markers.
struct Pending {
    chapter: u32,
    verse: u32,
    words: Vec<WordRecord>,
}

impl Pending {
    fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse, words: Vec::new() }
    }

    fn next_position(&self) -> u32 {
        self.words.len() as u32 + 1
    }

    fn flush_into(self, verses: &mut Vec<Verse>) {
        if !self.words.is_empty() {
            if (self.chapter, self.verse) == (0, 0) {
                warn!("{} word(s) before the first verse marker kept as 0:0", self.words.len());
            }
            verses.push(Verse::new(self.chapter, self.verse, self.words));
        }
    }
}

/// Splits one book into verses. Words before the first marker land in 0:0.
pub fn tokenize(input: &str) -> Vec<Verse> {
    let mut cursor = Cursor::new(input);
    let mut verses = Vec::new();
    let mut pending = Pending::new(0, 0);

    while let Some(token) = cursor.next() {
        match TokenKind::classify(token) {
            TokenKind::VerseMarker { chapter, verse } => {
                std::mem::replace(&mut pending, Pending::new(chapter, verse)).flush_into(&mut verses);
            }
            TokenKind::Reference(number) => {
                let tag = cursor.next_tag();
                debug!(
                    "{}:{}: dropped stray reference {} (tag {:?})",
                    pending.chapter, pending.verse, number, tag
                );
            }
            TokenKind::Tag(_) | TokenKind::Word(_) => {
                let word = read_word(token, pending.next_position(), &mut cursor);
                pending.words.push(word);
            }
        }
    }
    pending.flush_into(&mut verses);

    verses
}

fn read_word(raw: &str, position: u32, cursor: &mut Cursor<'_>) -> WordRecord {
    let mut word = WordRecord::new(position, transliterate(raw));

    if let Some(number) = cursor.next_reference() {
        let reference = lexicon::strongs_ref(number);
        word.lemma = vec![reference.clone()];
        word.reference_id = Some(reference);
        // Parsing number, not kept.
        cursor.next_reference();
    }
    if let Some(code) = cursor.next_tag() {
        word.tag = Some(lexicon::robinson_tag(code));
    }

    word
}
