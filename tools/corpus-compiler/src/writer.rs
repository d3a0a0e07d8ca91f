use std::fs;
use std::path::{Path, PathBuf};

use grammata_protocol::{Book, ColophonRange, Corpus, Gematria, Verse, WordRecord};
use serde::Serialize;

use crate::corpus::CorpusError;

/// On-disk shape of one verse.
#[derive(Debug, Serialize)]
pub struct VerseRecord<'a> {
    pub book: &'a str,
    pub chapter: u32,
    pub verse: u32,
    pub words: &'a [WordRecord],
    pub colophon_range: Option<ColophonRange>,
    pub gematria: Gematria,
}

impl<'a> VerseRecord<'a> {
    pub fn new(book: &'a Book, verse: &'a Verse) -> Self {
        Self {
            book: &book.name,
            chapter: verse.chapter,
            verse: verse.verse,
            words: &verse.words,
            colophon_range: verse.colophon_range,
            gematria: verse.gematria,
        }
    }
}

/// Writes `<root>/<book>/<chapter>/<verse>.json`.
pub struct JsonWriter {
    root: PathBuf,
    pretty: bool,
}

impl JsonWriter {
    pub fn new(root: impl Into<PathBuf>, pretty: bool) -> Self {
        Self { root: root.into(), pretty }
    }

    pub fn verse_path(&self, book: &Book, verse: &Verse) -> PathBuf {
        self.root
            .join(&book.name)
            .join(verse.chapter.to_string())
            .join(format!("{}.json", verse.verse))
    }

    /// Returns the number of verse files written.
    pub fn write_book(&self, book: &Book) -> Result<usize, CorpusError> {
        for verse in &book.verses {
            let path = self.verse_path(book, verse);
            let record = VerseRecord::new(book, verse);
            let bytes = if self.pretty {
                serde_json::to_vec_pretty(&record)?
            } else {
                serde_json::to_vec(&record)?
            };
            write_file(&path, &bytes)?;
        }
        Ok(book.verses.len())
    }
}

pub fn write_archive(path: &Path, corpus: &Corpus) -> Result<usize, CorpusError> {
    let bytes = corpus.to_bytes()?;
    write_file(path, &bytes)?;
    Ok(bytes.len())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CorpusError> {
    let write_err = |source| CorpusError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, bytes).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammata_parser::{assemble_book, AssemblyOptions};
    use serde_json::Value;

    const ROMANS: &str = "1:1 paulov 3972 {N-NSM}\n\
        16:27 amhn 281 {HEB} | [prov 4314 {PREP} rwmaiouv] 4514 {A-APM}";

    fn romans() -> Book {
        let mut book = assemble_book("ROM", ROMANS, AssemblyOptions::default());
        book.name = "Romans".to_string();
        book
    }

    #[test]
    fn writes_one_file_per_verse() {
        let dir = tempfile::tempdir().unwrap();
        let writer = JsonWriter::new(dir.path(), false);

        let written = writer.write_book(&romans()).unwrap();
        assert_eq!(written, 2);
        assert!(dir.path().join("Romans/1/1.json").is_file());
        assert!(dir.path().join("Romans/16/27.json").is_file());
    }

    #[test]
    fn record_layout() {
        let dir = tempfile::tempdir().unwrap();
        let writer = JsonWriter::new(dir.path(), true);
        writer.write_book(&romans()).unwrap();

        let raw = fs::read_to_string(dir.path().join("Romans/16/27.json")).unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["book"], "Romans");
        assert_eq!(json["chapter"], 16);
        assert_eq!(json["verse"], 27);
        assert_eq!(json["colophon_range"]["start"], 2);
        assert_eq!(json["colophon_range"]["end"], 3);
        assert_eq!(json["gematria"]["standard"], 99);

        let first = &json["words"][0];
        assert_eq!(first["position"], 1);
        assert_eq!(first["text"], "αμην");
        assert_eq!(first["lemma"][0], "strongs:G281");
        assert_eq!(first["reference_id"], "strongs:G281");
        assert_eq!(first["tag"], "robinson:HEB");
        assert!(first["annotation_flags"].get("colophon").is_none());
        assert!(first.get("letters").is_none());

        let closing = &json["words"][1];
        assert_eq!(closing["annotation_flags"]["colophon"], true);
        assert_eq!(closing["annotation_flags"]["colophon_type"], "subscription");
    }

    #[test]
    fn plain_verse_has_null_colophon_range() {
        let book = romans();
        let record = VerseRecord::new(&book, &book.verses[0]);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json["colophon_range"].is_null());
        assert_eq!(json["words"][0]["gematria"]["ordinal"], json["gematria"]["ordinal"]);
    }

    #[test]
    fn archive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/corpus.rkyv");
        let corpus = Corpus::new(vec![romans()]);

        let size = write_archive(&path, &corpus).unwrap();
        assert!(size > 0);

        let restored = Corpus::from_bytes(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(restored, corpus);
    }
}
