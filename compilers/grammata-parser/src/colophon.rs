//! Separates scribal subscriptions from the verse text.
//!
//! In the source a subscription follows a `|` word and is wrapped in square
//! brackets, e.g. `... amhn | [prov rwmaiouv egrafh ...]`. Words inside the
//! brackets stay in the verse but are flagged, so verse totals can skip them.

use grammata_protocol::{Annotations, ColophonKind, ColophonRange, Verse, WordRecord};
use log::debug;

pub const DELIMITER: &str = "|";
pub const BRACKET_OPEN: char = '[';
pub const BRACKET_CLOSE: char = ']';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub words: Vec<WordRecord>,
    pub colophon_range: Option<ColophonRange>,
}

fn is_delimiter(word: &WordRecord) -> bool {
    word.text == DELIMITER
}

/// Index range (inclusive) of the bracketed span after the delimiter at `delimiter`.
fn bracket_span(words: &[WordRecord], delimiter: usize) -> Option<(usize, usize)> {
    let start = delimiter
        + 1
        + words[delimiter + 1..]
            .iter()
            .position(|w| w.text.starts_with(BRACKET_OPEN))?;
    let end = start
        + words[start..]
            .iter()
            .position(|w| w.text.contains(BRACKET_CLOSE))?;
    Some((start, end))
}

pub fn segment(words: Vec<WordRecord>) -> Segmentation {
    let Some(delimiter) = words.iter().position(is_delimiter) else {
        return Segmentation { words, colophon_range: None };
    };

    let Some((start, end)) = bracket_span(&words, delimiter) else {
        // A delimiter without a closed bracket span is not a colophon.
        let words = words.into_iter().filter(|w| !is_delimiter(w)).collect();
        return Segmentation { words: renumber(words), colophon_range: None };
    };

    let mut out: Vec<WordRecord> = Vec::with_capacity(words.len());
    let mut range: Option<ColophonRange> = None;

    for (idx, mut word) in words.into_iter().enumerate() {
        if is_delimiter(&word) {
            continue;
        }
        if word.text.contains(&[BRACKET_OPEN, BRACKET_CLOSE][..]) {
            word.text = word.text.replace(&[BRACKET_OPEN, BRACKET_CLOSE][..], "");
        }

        let position = out.len() as u32 + 1;
        word.position = position;
        if (start..=end).contains(&idx) {
            word.annotation_flags = Annotations::colophon(ColophonKind::Subscription);
            range = Some(match range {
                Some(r) => ColophonRange::new(r.start, position),
                None => ColophonRange::new(position, position),
            });
        }
        out.push(word);
    }

    Segmentation { words: out, colophon_range: range }
}

/// Applies [`segment`] to a verse in place of its word list.
pub fn segment_verse(mut verse: Verse) -> Verse {
    let Segmentation { words, colophon_range } = segment(std::mem::take(&mut verse.words));
    if let Some(range) = colophon_range {
        debug!(
            "{}:{}: colophon at positions {}..={}",
            verse.chapter, verse.verse, range.start, range.end
        );
    }
    verse.words = words;
    verse.colophon_range = colophon_range;
    verse
}

fn renumber(mut words: Vec<WordRecord>) -> Vec<WordRecord> {
    for (idx, word) in words.iter_mut().enumerate() {
        word.position = idx as u32 + 1;
    }
    words
}
