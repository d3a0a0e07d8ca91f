//! File stems of the Byzantine-text source files and their book names.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    pub code: &'static str,
    pub name: &'static str,
    aliases: &'static [&'static str],
}

const fn book(code: &'static str, name: &'static str, aliases: &'static [&'static str]) -> BookInfo {
    BookInfo { code, name, aliases }
}

/// Canonical New Testament order.
pub static BOOKS: [BookInfo; 27] = [
    book("MAT", "Matthew", &["MT", "MATT"]),
    book("MAR", "Mark", &["MR", "MK", "MARK"]),
    book("LUK", "Luke", &["LU", "LK", "LUKE"]),
    book("JOH", "John", &["JN", "JOHN"]),
    book("ACT", "Acts", &["AC", "ACTS"]),
    book("ROM", "Romans", &["RO"]),
    book("1CO", "1 Corinthians", &[]),
    book("2CO", "2 Corinthians", &[]),
    book("GAL", "Galatians", &["GA"]),
    book("EPH", "Ephesians", &[]),
    book("PHP", "Philippians", &["PHIL", "PHI"]),
    book("COL", "Colossians", &[]),
    book("1TH", "1 Thessalonians", &[]),
    book("2TH", "2 Thessalonians", &[]),
    book("1TI", "1 Timothy", &[]),
    book("2TI", "2 Timothy", &[]),
    book("TIT", "Titus", &[]),
    book("PHM", "Philemon", &["PHLM"]),
    book("HEB", "Hebrews", &[]),
    book("JAS", "James", &["JAM", "JA"]),
    book("1PE", "1 Peter", &[]),
    book("2PE", "2 Peter", &[]),
    book("1JO", "1 John", &["1JN"]),
    book("2JO", "2 John", &["2JN"]),
    book("3JO", "3 John", &["3JN"]),
    book("JUD", "Jude", &["JUDE"]),
    book("REV", "Revelation", &["RE"]),
];

/// Lookup key of a file stem: `mat_byz` -> `MAT`.
fn key(stem: &str) -> String {
    stem.split('_').next().unwrap_or(stem).to_ascii_uppercase()
}

/// Canonical index and entry for a file stem, case-insensitive.
pub fn lookup(stem: &str) -> Option<(usize, &'static BookInfo)> {
    let key = key(stem);
    BOOKS
        .iter()
        .enumerate()
        .find(|(_, b)| b.code == key || b.aliases.iter().any(|a| *a == key))
}

/// Display name for a stem; unknown stems keep the stem.
pub fn name_for(stem: &str) -> String {
    lookup(stem).map_or_else(|| stem.to_string(), |(_, b)| b.name.to_string())
}

/// Known books in canonical order, then unknown stems alphabetically.
pub fn canonical_cmp(a: &str, b: &str) -> Ordering {
    let rank = |stem: &str| lookup(stem).map_or(usize::MAX, |(idx, _)| idx);
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}
