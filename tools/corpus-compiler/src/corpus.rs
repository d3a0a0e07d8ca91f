use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use grammata_parser::{assemble_book, AssemblyOptions};
use grammata_protocol::{ArchiveError, Book};
use log::{debug, warn};

use crate::books;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("input path {0} does not exist")]
    NotFound(PathBuf),

    #[error("no .{extension} files found in {dir}")]
    Empty { dir: PathBuf, extension: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not valid UTF-8")]
    Encoding(PathBuf),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// One book's source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// File stem, used as the book id.
    pub id: String,
    pub path: PathBuf,
}

impl SourceUnit {
    fn from_path(path: PathBuf) -> Self {
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { id, path }
    }
}

/// Collects the source files under `input` (or `input` itself when it is a
/// file), ordered canonically so output is reproducible.
pub fn discover(input: &Path, extension: &str) -> Result<Vec<SourceUnit>, CorpusError> {
    if !input.exists() {
        return Err(CorpusError::NotFound(input.to_path_buf()));
    }
    if input.is_file() {
        return Ok(vec![SourceUnit::from_path(input.to_path_buf())]);
    }

    let read_err = |source| CorpusError::Read { path: input.to_path_buf(), source };
    let mut units = Vec::new();
    for entry in fs::read_dir(input).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let matches = path
            .extension()
            .map_or(false, |ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
        if path.is_file() && matches {
            units.push(SourceUnit::from_path(path));
        } else {
            debug!("skipping {}", path.display());
        }
    }

    if units.is_empty() {
        return Err(CorpusError::Empty {
            dir: input.to_path_buf(),
            extension: extension.to_string(),
        });
    }
    units.sort_by(|a, b| books::canonical_cmp(&a.id, &b.id));
    Ok(units)
}

/// Reads and parses one source unit.
pub fn load(unit: &SourceUnit, options: AssemblyOptions) -> Result<Book, CorpusError> {
    let bytes = fs::read(&unit.path).map_err(|source| CorpusError::Read {
        path: unit.path.clone(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| CorpusError::Encoding(unit.path.clone()))?;

    let mut book = assemble_book(&unit.id, &text, options);
    book.name = books::name_for(&unit.id);
    if book.verses.is_empty() {
        warn!("{} ({}) produced no verses", book.name, unit.path.display());
    }
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_in_canonical_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["REV.txt", "MAT.TXT", "ROM.txt", "readme.md"] {
            fs::write(dir.path().join(name), "1:1 kai 2532 {CONJ}").unwrap();
        }

        let units = discover(dir.path(), "txt").unwrap();
        let ids: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["MAT", "ROM", "REV"]);
    }

    #[test]
    fn single_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("JOH.txt");
        fs::write(&path, "1:1 en 1722 {PREP} arch 746 {N-DSF}").unwrap();

        let units = discover(&path, "txt").unwrap();
        assert_eq!(units.len(), 1);

        let book = load(&units[0], AssemblyOptions::default()).unwrap();
        assert_eq!(book.id, "JOH");
        assert_eq!(book.name, "John");
        assert_eq!(book.verses[0].words[1].text, "αρχη");
    }

    #[test]
    fn missing_and_empty_inputs() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            discover(&dir.path().join("nope"), "txt"),
            Err(CorpusError::NotFound(_))
        ));
        assert!(matches!(discover(dir.path(), "txt"), Err(CorpusError::Empty { .. })));
    }

    #[test]
    fn rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ROM.txt");
        fs::write(&path, [0x31, 0x3a, 0x31, 0x20, 0xff, 0xfe]).unwrap();

        let unit = SourceUnit::from_path(path);
        assert!(matches!(
            load(&unit, AssemblyOptions::default()),
            Err(CorpusError::Encoding(_))
        ));
    }
}
