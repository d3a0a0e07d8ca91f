//! Zero-copy corpus archives.

use std::string::{String, ToString};
use std::vec::Vec;

use rkyv::{AlignedVec, Deserialize, Infallible};

use crate::model::{ArchivedCorpus, Corpus};

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to serialize corpus: {0}")]
    Serialize(String),

    #[error("corpus archive failed validation: {0}")]
    Invalid(String),

    #[error("unsupported corpus archive version {found}, expected {expected}")]
    Version { found: u32, expected: u32 },
}

impl Corpus {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        let bytes = rkyv::to_bytes::<_, 4096>(self)
            .map_err(|e| ArchiveError::Serialize(e.to_string()))?;
        Ok(bytes.into_vec())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Corpus, ArchiveError> {
        let aligned = align(bytes);
        let archived = check(&aligned)?;
        // Validated above, deserializing into owned types cannot fail.
        let corpus: Corpus = archived
            .deserialize(&mut Infallible)
            .unwrap_or_else(|never| match never {});
        Ok(corpus)
    }
}

/// Validates `bytes` and returns the archived corpus without copying.
///
/// `bytes` must be 16-byte aligned (an [`AlignedVec`] always is).
pub fn check(bytes: &[u8]) -> Result<&ArchivedCorpus, ArchiveError> {
    let archived = rkyv::check_archived_root::<Corpus>(bytes)
        .map_err(|e| ArchiveError::Invalid(e.to_string()))?;
    if archived.version != Corpus::VERSION {
        return Err(ArchiveError::Version {
            found: archived.version,
            expected: Corpus::VERSION,
        });
    }
    Ok(archived)
}

pub fn align(bytes: &[u8]) -> AlignedVec {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);
    aligned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Book, Verse, WordRecord};
    use std::vec;

    fn corpus() -> Corpus {
        let verse = Verse::new(1, 1, vec![WordRecord::new(1, "αρχη".to_string())]);
        Corpus::new(vec![Book {
            id: "JOH".to_string(),
            name: "John".to_string(),
            verses: vec![verse],
        }])
    }

    #[test]
    fn test_corpus_round_trip() {
        let original = corpus();
        let bytes = original.to_bytes().expect("serialize");

        let restored = Corpus::from_bytes(&bytes).expect("deserialize");
        assert_eq!(original, restored);

        let aligned = align(&bytes);
        let archived = check(&aligned).expect("zero-copy view");
        assert_eq!(archived.books[0].verses[0].words[0].text.as_str(), "αρχη");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = Corpus::from_bytes(&[0xFF; 7]).unwrap_err();
        assert!(matches!(err, ArchiveError::Invalid(_)));
    }
}
