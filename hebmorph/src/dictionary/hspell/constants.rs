//! Fixed constants of the hspell dictionary distribution.
//!
//! The descriptor bit layout and the [`DMASKS`] inventory mirror the field
//! structure of the upstream linguistic resource: a word reading packs its
//! part of speech, gender, person, number, tense, possessive-suffix fields,
//! construct state, and lexical flags into one `u32`. Descriptor stream
//! records do not carry these masks directly; they carry base-26 indices
//! into [`DMASKS`].

/// File name of the front-coded word list (gzip).
pub const WORDS_FILE: &str = "hebrew.wgz";

/// File name of the per-word prefix-compatibility bytes (gzip).
pub const PREFIXES_FILE: &str = "hebrew.wgz.prefixes";

/// File name of the descriptor records (gzip).
pub const DESC_FILE: &str = "hebrew.wgz.desc";

/// File name of the stem-reference records (gzip).
pub const STEMS_FILE: &str = "hebrew.wgz.stems";

/// File name of the sizes metadata (plain text).
pub const SIZES_FILE: &str = "hebrew.wgz.sizes";

/// The pseudo-stem the upstream resource uses for "various/unspecified".
///
/// Stem references resolving to it are suppressed to a missing lemma,
/// except on the entry for the pseudo-stem itself.
pub const PSEUDO_STEM_VARIOUS: &str = "שונות";

// Part-of-speech field (bits 0..=2).
pub const D_NOUN: u32 = 1;
pub const D_VERB: u32 = 2;
pub const D_ADJ: u32 = 4;
pub const D_TYPEMASK: u32 = 7;

// Gender field (bits 3..=4).
pub const D_MASCULINE: u32 = 1 << 3;
pub const D_FEMININE: u32 = 2 << 3;
pub const D_GENDERMASK: u32 = 3 << 3;

// Person field (bits 5..=6).
pub const D_FIRST: u32 = 1 << 5;
pub const D_SECOND: u32 = 2 << 5;
pub const D_THIRD: u32 = 3 << 5;
pub const D_PERSONMASK: u32 = 3 << 5;

// Number field (bits 7..=8).
pub const D_SINGULAR: u32 = 1 << 7;
pub const D_DUAL: u32 = 2 << 7;
pub const D_PLURAL: u32 = 3 << 7;
pub const D_NUMMASK: u32 = 3 << 7;

// Tense field (bits 9..=11).
pub const D_INFINITIVE: u32 = 1 << 9;
pub const D_PAST: u32 = 2 << 9;
pub const D_PRESENT: u32 = 3 << 9;
pub const D_FUTURE: u32 = 4 << 9;
pub const D_BINFINITIVE: u32 = 5 << 9;
pub const D_IMPERATIVE: u32 = 6 << 9;
pub const D_TENSEMASK: u32 = 7 << 9;

// Possessive-suffix gender field (bits 12..=13).
pub const D_OMASCULINE: u32 = 1 << 12;
pub const D_OFEMININE: u32 = 2 << 12;
pub const D_OGENDERMASK: u32 = 3 << 12;

// Possessive-suffix person field (bits 14..=15).
pub const D_OFIRST: u32 = 1 << 14;
pub const D_OSECOND: u32 = 2 << 14;
pub const D_OTHIRD: u32 = 3 << 14;
pub const D_OPERSONMASK: u32 = 3 << 14;

// Possessive-suffix number field (bits 16..=17).
pub const D_OSINGULAR: u32 = 1 << 16;
pub const D_OPLURAL: u32 = 2 << 16;
pub const D_ONUMMASK: u32 = 3 << 16;

/// All possessive-suffix fields together.
pub const D_OMASK: u32 = D_OGENDERMASK | D_OPERSONMASK | D_ONUMMASK;

/// Construct state (the noun governs a following noun).
pub const D_CONSTRUCT: u32 = 1 << 18;

/// Proper noun.
pub const D_SPECNOUN: u32 = 1 << 19;

/// Acronym.
pub const D_ACRONYM: u32 = 1 << 20;

/// The fixed descriptor inventory indexed by descriptor-stream records.
///
/// Each record byte pair `(b0, b1)` addresses `DMASKS[(b0 - b'A') + (b1 -
/// b'A') * 26]`. The inventory enumerates the reading shapes the upstream
/// resource distinguishes; its order is part of the on-disk format and must
/// not change.
pub static DMASKS: &[u32] = &[
    // 0: unclassified
    0,
    // 1..=12: plain and construct nouns
    D_NOUN | D_MASCULINE | D_SINGULAR,
    D_NOUN | D_MASCULINE | D_DUAL,
    D_NOUN | D_MASCULINE | D_PLURAL,
    D_NOUN | D_FEMININE | D_SINGULAR,
    D_NOUN | D_FEMININE | D_DUAL,
    D_NOUN | D_FEMININE | D_PLURAL,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_CONSTRUCT,
    D_NOUN | D_MASCULINE | D_DUAL | D_CONSTRUCT,
    D_NOUN | D_MASCULINE | D_PLURAL | D_CONSTRUCT,
    D_NOUN | D_FEMININE | D_SINGULAR | D_CONSTRUCT,
    D_NOUN | D_FEMININE | D_DUAL | D_CONSTRUCT,
    D_NOUN | D_FEMININE | D_PLURAL | D_CONSTRUCT,
    // 13..=44: nouns with possessive suffixes
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OFIRST | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OSECOND | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OSECOND | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OTHIRD | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OTHIRD | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OFIRST | D_OPLURAL,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OSECOND | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_MASCULINE | D_SINGULAR | D_OTHIRD | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OFIRST | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OSECOND | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OSECOND | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OTHIRD | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OTHIRD | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OFIRST | D_OPLURAL,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OSECOND | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_MASCULINE | D_PLURAL | D_OTHIRD | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OFIRST | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OSECOND | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OSECOND | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OTHIRD | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OTHIRD | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OFIRST | D_OPLURAL,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OSECOND | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_FEMININE | D_SINGULAR | D_OTHIRD | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_FEMININE | D_PLURAL | D_OFIRST | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_PLURAL | D_OSECOND | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_PLURAL | D_OSECOND | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_PLURAL | D_OTHIRD | D_OMASCULINE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_PLURAL | D_OTHIRD | D_OFEMININE | D_OSINGULAR,
    D_NOUN | D_FEMININE | D_PLURAL | D_OFIRST | D_OPLURAL,
    D_NOUN | D_FEMININE | D_PLURAL | D_OSECOND | D_OMASCULINE | D_OPLURAL,
    D_NOUN | D_FEMININE | D_PLURAL | D_OTHIRD | D_OMASCULINE | D_OPLURAL,
    // 45..=47: proper nouns and acronyms
    D_NOUN | D_SPECNOUN | D_MASCULINE | D_SINGULAR,
    D_NOUN | D_SPECNOUN | D_FEMININE | D_SINGULAR,
    D_NOUN | D_ACRONYM | D_MASCULINE | D_SINGULAR,
    // 48..=59: adjectives
    D_ADJ | D_MASCULINE | D_SINGULAR,
    D_ADJ | D_MASCULINE | D_DUAL,
    D_ADJ | D_MASCULINE | D_PLURAL,
    D_ADJ | D_FEMININE | D_SINGULAR,
    D_ADJ | D_FEMININE | D_DUAL,
    D_ADJ | D_FEMININE | D_PLURAL,
    D_ADJ | D_MASCULINE | D_SINGULAR | D_CONSTRUCT,
    D_ADJ | D_MASCULINE | D_DUAL | D_CONSTRUCT,
    D_ADJ | D_MASCULINE | D_PLURAL | D_CONSTRUCT,
    D_ADJ | D_FEMININE | D_SINGULAR | D_CONSTRUCT,
    D_ADJ | D_FEMININE | D_DUAL | D_CONSTRUCT,
    D_ADJ | D_FEMININE | D_PLURAL | D_CONSTRUCT,
    // 60..=71: past-tense verbs
    D_VERB | D_PAST | D_FIRST | D_SINGULAR,
    D_VERB | D_PAST | D_FIRST | D_PLURAL,
    D_VERB | D_PAST | D_SECOND | D_MASCULINE | D_SINGULAR,
    D_VERB | D_PAST | D_SECOND | D_FEMININE | D_SINGULAR,
    D_VERB | D_PAST | D_SECOND | D_MASCULINE | D_PLURAL,
    D_VERB | D_PAST | D_SECOND | D_FEMININE | D_PLURAL,
    D_VERB | D_PAST | D_THIRD | D_MASCULINE | D_SINGULAR,
    D_VERB | D_PAST | D_THIRD | D_FEMININE | D_SINGULAR,
    D_VERB | D_PAST | D_THIRD | D_MASCULINE | D_PLURAL,
    D_VERB | D_PAST | D_THIRD | D_FEMININE | D_PLURAL,
    D_VERB | D_PAST | D_FIRST | D_MASCULINE | D_SINGULAR,
    D_VERB | D_PAST | D_FIRST | D_FEMININE | D_SINGULAR,
    // 72..=83: future-tense verbs
    D_VERB | D_FUTURE | D_FIRST | D_SINGULAR,
    D_VERB | D_FUTURE | D_FIRST | D_PLURAL,
    D_VERB | D_FUTURE | D_SECOND | D_MASCULINE | D_SINGULAR,
    D_VERB | D_FUTURE | D_SECOND | D_FEMININE | D_SINGULAR,
    D_VERB | D_FUTURE | D_SECOND | D_MASCULINE | D_PLURAL,
    D_VERB | D_FUTURE | D_SECOND | D_FEMININE | D_PLURAL,
    D_VERB | D_FUTURE | D_THIRD | D_MASCULINE | D_SINGULAR,
    D_VERB | D_FUTURE | D_THIRD | D_FEMININE | D_SINGULAR,
    D_VERB | D_FUTURE | D_THIRD | D_MASCULINE | D_PLURAL,
    D_VERB | D_FUTURE | D_THIRD | D_FEMININE | D_PLURAL,
    D_VERB | D_FUTURE | D_FIRST | D_MASCULINE | D_SINGULAR,
    D_VERB | D_FUTURE | D_FIRST | D_FEMININE | D_SINGULAR,
    // 84..=87: present-tense verbs
    D_VERB | D_PRESENT | D_MASCULINE | D_SINGULAR,
    D_VERB | D_PRESENT | D_FEMININE | D_SINGULAR,
    D_VERB | D_PRESENT | D_MASCULINE | D_PLURAL,
    D_VERB | D_PRESENT | D_FEMININE | D_PLURAL,
    // 88..=91: imperatives
    D_VERB | D_IMPERATIVE | D_SECOND | D_MASCULINE | D_SINGULAR,
    D_VERB | D_IMPERATIVE | D_SECOND | D_FEMININE | D_SINGULAR,
    D_VERB | D_IMPERATIVE | D_SECOND | D_MASCULINE | D_PLURAL,
    D_VERB | D_IMPERATIVE | D_SECOND | D_FEMININE | D_PLURAL,
    // 92..=93: infinitives
    D_VERB | D_INFINITIVE,
    D_VERB | D_BINFINITIVE,
];
