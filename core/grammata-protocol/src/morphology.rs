use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Vocative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Aorist,
    Perfect,
    Pluperfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
    Infinitive,
    Participle,
}

/// Word classes distinguished by the Robinson tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Adjective = 1,
    Article = 2,
    Verb = 3,
    PersonalPronoun = 4,
    RelativePronoun = 5,
    ReciprocalPronoun = 6,
    DemonstrativePronoun = 7,
    CorrelativePronoun = 8,
    InterrogativePronoun = 9,
    IndefinitePronoun = 10,
    CorrelativeInterrogativePronoun = 11,
    ReflexivePronoun = 12,
    PossessivePronoun = 13,
    Adverb = 14,
    Conjunction = 15,
    ConditionalParticle = 16,
    Particle = 17,
    Preposition = 18,
    Interjection = 19,
    Aramaic = 20,
    Hebrew = 21,
    ProperNoun = 22,
    Numeral = 23,
    Letter = 24,
    OtherNoun = 25,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Case (Bits 0-4)
        const NOMINATIVE = 1 << 0;
        const GENITIVE = 1 << 1;
        const DATIVE = 1 << 2;
        const ACCUSATIVE = 1 << 3;
        const VOCATIVE = 1 << 4;

        // Gender (Bits 5-7)
        const MASCULINE = 1 << 5;
        const FEMININE = 1 << 6;
        const NEUTER = 1 << 7;

        // Number (Bits 8-9)
        const SINGULAR = 1 << 8;
        const PLURAL = 1 << 9;

        // Person (Bits 10-12)
        const FIRST_PERSON = 1 << 10;
        const SECOND_PERSON = 1 << 11;
        const THIRD_PERSON = 1 << 12;

        // Tense (Bits 13-19), SECOND_FORM marks 2nd aorist/perfect/future
        const PRESENT = 1 << 13;
        const IMPERFECT = 1 << 14;
        const FUTURE = 1 << 15;
        const AORIST = 1 << 16;
        const PERFECT = 1 << 17;
        const PLUPERFECT = 1 << 18;
        const SECOND_FORM = 1 << 19;

        // Voice (Bits 20-23)
        const ACTIVE = 1 << 20;
        const MIDDLE = 1 << 21;
        const PASSIVE = 1 << 22;
        const DEPONENT = 1 << 23;

        // Mood (Bits 24-29)
        const INDICATIVE = 1 << 24;
        const SUBJUNCTIVE = 1 << 25;
        const OPTATIVE = 1 << 26;
        const IMPERATIVE = 1 << 27;
        const INFINITIVE = 1 << 28;
        const PARTICIPLE = 1 << 29;
    }
}

// rkyv support for MorphFlags
impl Archive for MorphFlags {
    type Archived = u32;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for MorphFlags {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<MorphFlags, D> for u32 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<MorphFlags, D::Error> {
        Ok(MorphFlags::from_bits_truncate(*self))
    }
}

/// A decoded morphological tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Morphology {
    pub pos: PartOfSpeech,
    pub flags: MorphFlags,
}

impl Morphology {
    pub const fn new(pos: PartOfSpeech, flags: MorphFlags) -> Self {
        Self { pos, flags }
    }

    pub fn case(&self) -> Option<Case> {
        pick(self.flags, &[
            (MorphFlags::NOMINATIVE, Case::Nominative),
            (MorphFlags::GENITIVE, Case::Genitive),
            (MorphFlags::DATIVE, Case::Dative),
            (MorphFlags::ACCUSATIVE, Case::Accusative),
            (MorphFlags::VOCATIVE, Case::Vocative),
        ])
    }

    pub fn gender(&self) -> Option<Gender> {
        pick(self.flags, &[
            (MorphFlags::MASCULINE, Gender::Masculine),
            (MorphFlags::FEMININE, Gender::Feminine),
            (MorphFlags::NEUTER, Gender::Neuter),
        ])
    }

    pub fn number(&self) -> Option<Number> {
        pick(self.flags, &[
            (MorphFlags::SINGULAR, Number::Singular),
            (MorphFlags::PLURAL, Number::Plural),
        ])
    }

    pub fn person(&self) -> Option<Person> {
        pick(self.flags, &[
            (MorphFlags::FIRST_PERSON, Person::First),
            (MorphFlags::SECOND_PERSON, Person::Second),
            (MorphFlags::THIRD_PERSON, Person::Third),
        ])
    }

    pub fn tense(&self) -> Option<Tense> {
        pick(self.flags, &[
            (MorphFlags::PRESENT, Tense::Present),
            (MorphFlags::IMPERFECT, Tense::Imperfect),
            (MorphFlags::FUTURE, Tense::Future),
            (MorphFlags::AORIST, Tense::Aorist),
            (MorphFlags::PERFECT, Tense::Perfect),
            (MorphFlags::PLUPERFECT, Tense::Pluperfect),
        ])
    }

    /// Imperative-sense participles carry both flags; they report `Participle`.
    pub fn mood(&self) -> Option<Mood> {
        pick(self.flags, &[
            (MorphFlags::PARTICIPLE, Mood::Participle),
            (MorphFlags::INDICATIVE, Mood::Indicative),
            (MorphFlags::SUBJUNCTIVE, Mood::Subjunctive),
            (MorphFlags::OPTATIVE, Mood::Optative),
            (MorphFlags::IMPERATIVE, Mood::Imperative),
            (MorphFlags::INFINITIVE, Mood::Infinitive),
        ])
    }
}

fn pick<T: Copy>(flags: MorphFlags, table: &[(MorphFlags, T)]) -> Option<T> {
    table
        .iter()
        .find(|(flag, _)| flags.contains(*flag))
        .map(|(_, value)| *value)
}
