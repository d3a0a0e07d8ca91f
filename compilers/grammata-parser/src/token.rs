use nom::{
    character::complete::digit1,
    combinator::all_consuming,
};

use crate::parser::verse_marker;

pub const TAG_OPEN: char = '{';
pub const TAG_CLOSE: char = '}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `<chapter>:<verse>`
    VerseMarker { chapter: u32, verse: u32 },
    /// All-digit token: a Strong's number or a parsing number.
    Reference(&'a str),
    /// `{...}` with the braces removed.
    Tag(&'a str),
    /// Anything else, including near-miss markers such as `1:1a`.
    Word(&'a str),
}

impl<'a> TokenKind<'a> {
    pub fn classify(token: &'a str) -> Self {
        if let Ok((_, (chapter, verse))) = verse_marker(token) {
            return TokenKind::VerseMarker { chapter, verse };
        }
        if is_reference(token) {
            return TokenKind::Reference(token);
        }
        if let Some(body) = tag_body(token) {
            return TokenKind::Tag(body);
        }
        TokenKind::Word(token)
    }
}

pub fn is_reference(token: &str) -> bool {
    all_consuming(digit1::<&str, nom::error::Error<&str>>)(token).is_ok()
}

pub fn tag_body(token: &str) -> Option<&str> {
    if token.starts_with(TAG_OPEN) {
        Some(token.trim_start_matches(TAG_OPEN).trim_end_matches(TAG_CLOSE))
    } else {
        None
    }
}
