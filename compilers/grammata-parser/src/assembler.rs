use grammata_protocol::{lexicon, Book, Gematria, Verse, WordRecord};
use grammata_script::{compute, letter_values};

use crate::colophon::segment_verse;
use crate::morphology;
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Attach the per-letter values to every word.
    pub letter_breakdown: bool,
}

fn score_word(word: &mut WordRecord, options: AssemblyOptions) {
    word.gematria = compute(&word.text);
    if options.letter_breakdown {
        word.letters = letter_values(&word.text);
    }
    word.morphology = word
        .tag
        .as_deref()
        .and_then(lexicon::split_namespace)
        .and_then(|(_, code)| morphology::decode(code));
}

/// Segments the colophon, scores every word and totals the primary words.
pub fn assemble_verse(verse: Verse, options: AssemblyOptions) -> Verse {
    let mut verse = segment_verse(verse);
    for word in &mut verse.words {
        score_word(word, options);
    }
    verse.gematria = verse.primary_words().map(|w| &w.gematria).sum::<Gematria>();
    verse
}

/// Full pipeline for one source unit. `id` labels the book and is not parsed.
pub fn assemble_book(id: &str, text: &str, options: AssemblyOptions) -> Book {
    let verses = tokenize(text)
        .into_iter()
        .map(|verse| assemble_verse(verse, options))
        .collect();

    Book {
        id: id.to_string(),
        name: id.to_string(),
        verses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammata_protocol::{ColophonRange, MorphFlags, PartOfSpeech};

    const ROMANS_END: &str = "16:27 monw 3441 {A-DSM} sofw 4680 {A-DSM} yew 2316 {N-DSM} \
        amhn 281 {HEB} | [prov 4314 {PREP} rwmaiouv 4514 {A-APM} egrafh] 1125 {V-2API-3S}";

    #[test]
    fn colophon_words_do_not_count_toward_the_verse() {
        let book = assemble_book("ROM", ROMANS_END, AssemblyOptions::default());
        let verse = &book.verses[0];

        assert_eq!(verse.colophon_range, Some(ColophonRange::new(5, 7)));
        let all: Gematria = verse.words.iter().map(|w| &w.gematria).sum();
        let primary: Gematria = verse.words[..4].iter().map(|w| &w.gematria).sum();
        assert_eq!(verse.gematria, primary);
        assert!(verse.gematria.standard < all.standard);
        assert!(verse.gematria.ordinal < all.ordinal);
        assert!(verse.gematria.reduced <= all.reduced);
    }

    #[test]
    fn without_colophon_the_verse_total_is_every_word() {
        let book = assemble_book("JOH", "1:1 en 1722 {PREP} arch 746 {N-DSF} hn 2258 {V-IXI-3S}", AssemblyOptions::default());
        let verse = &book.verses[0];

        let all: Gematria = verse.words.iter().map(|w| &w.gematria).sum();
        assert_eq!(verse.colophon_range, None);
        assert_eq!(verse.gematria, all);
        assert_eq!(verse.gematria, compute("εναρχηην"));
    }

    #[test]
    fn words_are_scored_after_brackets_are_stripped() {
        let book = assemble_book("ROM", ROMANS_END, AssemblyOptions::default());
        let prov = &book.verses[0].words[4];

        assert_eq!(prov.text, "προς");
        assert_eq!(prov.gematria, compute("προς"));
        assert!(prov.is_colophon());
        assert_eq!(prov.reference_id.as_deref(), Some("strongs:G4314"));
    }

    #[test]
    fn tags_are_decoded() {
        let book = assemble_book("1CO", "2:13 pneumatikoiv 4152 {A-DPN} 4152 {A-DPM} pneumatika 4152 {A-APN}", AssemblyOptions::default());
        let words = &book.verses[0].words;

        let first = words[0].morphology.expect("decoded");
        assert_eq!(first.pos, PartOfSpeech::Adjective);
        assert_eq!(first.flags, MorphFlags::DATIVE | MorphFlags::PLURAL | MorphFlags::NEUTER);
        assert_eq!(words[0].tag.as_deref(), Some("robinson:A-DPN"));
    }

    #[test]
    fn letter_breakdown_is_optional() {
        let text = "1:1 logov 3056 {N-NSM}";

        let plain = assemble_book("JOH", text, AssemblyOptions::default());
        assert!(plain.verses[0].words[0].letters.is_empty());

        let detailed = assemble_book("JOH", text, AssemblyOptions { letter_breakdown: true });
        let word = &detailed.verses[0].words[0];
        let ordinals: Vec<u32> = word.letters.iter().map(|l| l.ordinal).collect();
        assert_eq!(ordinals, [11, 15, 3, 15, 18]);
        assert_eq!(word.gematria.ordinal, 62);
    }
}
