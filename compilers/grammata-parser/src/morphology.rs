//! Robinson morphological codes (`N-NSM`, `V-2AAP-NPM`, `P-1GS`, `ADV-I`, ...).
//!
//! Decoding is best effort: a code the grammar does not cover yields `None`
//! and the raw tag on the word record stays the source of truth.

use grammata_protocol::{MorphFlags, Morphology, PartOfSpeech};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alphanumeric1, char},
    combinator::{all_consuming, map, opt, value},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

type Res<'a, T> = IResult<&'a str, T>;

pub fn decode(code: &str) -> Option<Morphology> {
    all_consuming(terminated(morphology, qualifiers))(code)
        .ok()
        .map(|(_, m)| m)
}

fn morphology(input: &str) -> Res<'_, Morphology> {
    alt((indeclinable, verb, personal_pronoun, person_pronoun, nominal))(input)
}

/// Trailing `-C`, `-S`, `-ATT`, ... carry no inflection.
fn qualifiers(input: &str) -> Res<'_, ()> {
    value((), many0(preceded(char('-'), alphanumeric1)))(input)
}

fn indeclinable(input: &str) -> Res<'_, Morphology> {
    let word_class = alt((
        value(PartOfSpeech::ProperNoun, tag("N-PRI")),
        value(PartOfSpeech::Letter, tag("N-LI")),
        value(PartOfSpeech::OtherNoun, tag("N-OI")),
        value(PartOfSpeech::Numeral, tag("A-NUI")),
        value(PartOfSpeech::Adverb, tag("ADV")),
        value(PartOfSpeech::Conjunction, tag("CONJ")),
        value(PartOfSpeech::ConditionalParticle, tag("COND")),
        value(PartOfSpeech::Particle, tag("PRT")),
        value(PartOfSpeech::Preposition, tag("PREP")),
        value(PartOfSpeech::Interjection, tag("INJ")),
        value(PartOfSpeech::Aramaic, tag("ARAM")),
        value(PartOfSpeech::Hebrew, tag("HEB")),
    ));
    map(word_class, |pos| Morphology::new(pos, MorphFlags::empty()))(input)
}

fn case(input: &str) -> Res<'_, MorphFlags> {
    alt((
        value(MorphFlags::NOMINATIVE, char('N')),
        value(MorphFlags::GENITIVE, char('G')),
        value(MorphFlags::DATIVE, char('D')),
        value(MorphFlags::ACCUSATIVE, char('A')),
        value(MorphFlags::VOCATIVE, char('V')),
    ))(input)
}

fn number(input: &str) -> Res<'_, MorphFlags> {
    alt((
        value(MorphFlags::SINGULAR, char('S')),
        value(MorphFlags::PLURAL, char('P')),
    ))(input)
}

fn gender(input: &str) -> Res<'_, MorphFlags> {
    alt((
        value(MorphFlags::MASCULINE, char('M')),
        value(MorphFlags::FEMININE, char('F')),
        value(MorphFlags::NEUTER, char('N')),
    ))(input)
}

fn person(input: &str) -> Res<'_, MorphFlags> {
    alt((
        value(MorphFlags::FIRST_PERSON, char('1')),
        value(MorphFlags::SECOND_PERSON, char('2')),
        value(MorphFlags::THIRD_PERSON, char('3')),
    ))(input)
}

/// Case, number and (usually) gender: `NSM`, `GP`.
fn case_number_gender(input: &str) -> Res<'_, MorphFlags> {
    map(tuple((case, number, opt(gender))), |(c, n, g)| {
        c | n | g.unwrap_or_else(MorphFlags::empty)
    })(input)
}

fn nominal(input: &str) -> Res<'_, Morphology> {
    let word_class = alt((
        value(PartOfSpeech::Noun, char('N')),
        value(PartOfSpeech::Adjective, char('A')),
        value(PartOfSpeech::Article, char('T')),
        value(PartOfSpeech::RelativePronoun, char('R')),
        value(PartOfSpeech::ReciprocalPronoun, char('C')),
        value(PartOfSpeech::DemonstrativePronoun, char('D')),
        value(PartOfSpeech::CorrelativePronoun, char('K')),
        value(PartOfSpeech::InterrogativePronoun, char('I')),
        value(PartOfSpeech::IndefinitePronoun, char('X')),
        value(PartOfSpeech::CorrelativeInterrogativePronoun, char('Q')),
    ));
    map(
        pair(terminated(word_class, char('-')), case_number_gender),
        |(pos, flags)| Morphology::new(pos, flags),
    )(input)
}

/// `P-1NS`, `P-GSM`
fn personal_pronoun(input: &str) -> Res<'_, Morphology> {
    map(
        preceded(tag("P-"), pair(opt(person), case_number_gender)),
        |(p, flags)| {
            Morphology::new(
                PartOfSpeech::PersonalPronoun,
                flags | p.unwrap_or_else(MorphFlags::empty),
            )
        },
    )(input)
}

/// Reflexive `F-3ASM`, possessive `S-1SNSM` (the possessor's number is dropped).
fn person_pronoun(input: &str) -> Res<'_, Morphology> {
    let reflexive = map(
        preceded(tag("F-"), pair(person, case_number_gender)),
        |(p, flags)| Morphology::new(PartOfSpeech::ReflexivePronoun, p | flags),
    );
    let possessive = map(
        preceded(tag("S-"), tuple((person, number, case_number_gender))),
        |(p, _, flags)| Morphology::new(PartOfSpeech::PossessivePronoun, p | flags),
    );
    alt((reflexive, possessive))(input)
}

fn tense(input: &str) -> Res<'_, MorphFlags> {
    let base = alt((
        value(MorphFlags::PRESENT, char('P')),
        value(MorphFlags::IMPERFECT, char('I')),
        value(MorphFlags::FUTURE, char('F')),
        value(MorphFlags::AORIST, char('A')),
        value(MorphFlags::PERFECT, char('R')),
        value(MorphFlags::PLUPERFECT, char('L')),
        value(MorphFlags::empty(), char('X')),
    ));
    map(pair(opt(char('2')), base), |(second, t)| {
        if second.is_some() {
            t | MorphFlags::SECOND_FORM
        } else {
            t
        }
    })(input)
}

fn voice(input: &str) -> Res<'_, MorphFlags> {
    alt((
        value(MorphFlags::ACTIVE, char('A')),
        value(MorphFlags::MIDDLE, char('M')),
        value(MorphFlags::PASSIVE, char('P')),
        value(MorphFlags::MIDDLE | MorphFlags::PASSIVE, char('E')),
        value(MorphFlags::MIDDLE | MorphFlags::DEPONENT, char('D')),
        value(MorphFlags::PASSIVE | MorphFlags::DEPONENT, char('O')),
        value(MorphFlags::MIDDLE | MorphFlags::PASSIVE | MorphFlags::DEPONENT, char('N')),
        value(MorphFlags::ACTIVE, char('Q')),
        value(MorphFlags::empty(), char('X')),
    ))(input)
}

fn mood(input: &str) -> Res<'_, MorphFlags> {
    alt((
        value(MorphFlags::INDICATIVE, char('I')),
        value(MorphFlags::SUBJUNCTIVE, char('S')),
        value(MorphFlags::OPTATIVE, char('O')),
        value(MorphFlags::IMPERATIVE, char('M')),
        value(MorphFlags::INFINITIVE, char('N')),
        value(MorphFlags::PARTICIPLE, char('P')),
        value(MorphFlags::PARTICIPLE | MorphFlags::IMPERATIVE, char('R')),
    ))(input)
}

/// `V-PAI-3S`, `V-2AAP-NPM`, `V-AAN`
fn verb(input: &str) -> Res<'_, Morphology> {
    let person_number = map(pair(person, number), |(p, n)| p | n);
    let ending = opt(preceded(char('-'), alt((person_number, case_number_gender))));
    map(
        preceded(tag("V-"), tuple((tense, voice, mood, ending))),
        |(t, v, m, e)| {
            Morphology::new(PartOfSpeech::Verb, t | v | m | e.unwrap_or_else(MorphFlags::empty))
        },
    )(input)
}
