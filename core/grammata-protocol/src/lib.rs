#![no_std] // Shared by the wasm binding, keep it alloc-only

extern crate alloc;

// Enable std if the feature is active (archive helpers, tests, tools)
#[cfg(feature = "std")]
extern crate std;

pub mod gematria;
pub mod lexicon;
pub mod morphology;

// Re-export core types for convenience
pub use gematria::{Gematria, LetterValue};
pub use morphology::*;

pub mod model;
pub use model::*;

#[cfg(feature = "std")]
pub mod archive;
#[cfg(feature = "std")]
pub use archive::ArchiveError;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    fn sample_verse() -> Verse {
        let mut word = WordRecord::new(1, "λογος".to_string());
        word.lemma = vec![lexicon::strongs_ref("3056")];
        word.reference_id = Some(lexicon::strongs_ref("3056"));
        word.tag = Some(lexicon::robinson_tag("N-NSM"));
        word.morphology = Some(Morphology::new(
            PartOfSpeech::Noun,
            MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::MASCULINE,
        ));
        word.gematria = Gematria::new(373, 62, 13);

        let mut closing = WordRecord::new(2, "αμην".to_string());
        closing.annotation_flags = Annotations::colophon(ColophonKind::Subscription);

        let mut verse = Verse::new(1, 1, vec![word, closing]);
        verse.colophon_range = Some(ColophonRange::new(2, 2));
        verse.gematria = Gematria::new(373, 62, 13);
        verse
    }

    #[test]
    fn test_enum_serialization() {
        let original = ColophonKind::Subscription;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize ColophonKind");
        let deserialized: ColophonKind = from_bytes(&bytes).expect("Failed to deserialize ColophonKind");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_verse_serialization() {
        let original = sample_verse();

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize Verse");
        let deserialized: Verse = from_bytes(&bytes).expect("Failed to deserialize Verse");

        assert_eq!(original, deserialized);
        assert_eq!(
            deserialized.words[0].morphology.map(|m| m.flags),
            Some(MorphFlags::NOMINATIVE | MorphFlags::SINGULAR | MorphFlags::MASCULINE)
        );
    }

    #[test]
    fn test_colophon_word_partition() {
        let verse = sample_verse();

        let primary: alloc::vec::Vec<_> = verse.primary_words().map(|w| w.text.as_str()).collect();
        let colophon: alloc::vec::Vec<_> = verse.colophon_words().map(|w| w.text.as_str()).collect();

        assert_eq!(primary, ["λογος"]);
        assert_eq!(colophon, ["αμην"]);
        assert!(verse.has_colophon());
    }
}
