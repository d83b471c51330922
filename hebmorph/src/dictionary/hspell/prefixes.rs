//! The formative-prefix rule table.
//!
//! Hebrew glues conjunctions, prepositions, the relative pronoun, and the
//! definite article onto the following word. Which combination may precede
//! which word is governed by a small fixed rule set: every legal prefix
//! letter sequence carries a bitmask of the prefix categories it realizes,
//! and every dictionary reading maps (via [`dmask_to_prefix_spec`]) to the
//! categories it accepts. A segmentation is legal when the two masks
//! intersect.

use crate::dictionary::hspell::constants::{
    D_BINFINITIVE, D_CONSTRUCT, D_IMPERATIVE, D_INFINITIVE, D_OMASK, D_PRESENT,
    D_SPECNOUN, D_TENSEMASK, D_TYPEMASK, D_VERB,
};
use crate::radix::RadixTree;

/// Nouns and noun-likes taking the bet/kaf/lamed prepositions and the
/// definite article.
pub const PS_B: u8 = 1;

/// Infinitives taking the lamed prefix.
pub const PS_L: u8 = 2;

/// Finite verbs taking the conjunctive and relative prefixes.
pub const PS_VERB: u8 = 4;

/// Non-definite noun forms: prepositions attach, the article does not.
pub const PS_NONDEF: u8 = 8;

/// Imperatives.
pub const PS_IMPER: u8 = 16;

/// Miscellaneous closed-class attachments.
pub const PS_MISC: u8 = 32;

/// All prefix categories.
pub const PS_ALL: u8 = 63;

/// The base prefix sequences and the categories each realizes.
///
/// The table must stay prefix-closed (every proper prefix of a sequence is
/// itself a sequence): the lemmatizer extends a candidate prefix one letter
/// at a time and stops at the first miss. The conjunctive vav and its
/// combinations are generated in [`build_prefix_tree`], not listed here.
const BASE_PREFIXES: &[(&str, u8)] = &[
    ("ב", PS_B | PS_NONDEF),
    ("כ", PS_B | PS_NONDEF),
    ("ל", PS_B | PS_NONDEF | PS_L),
    ("מ", PS_B | PS_NONDEF),
    ("ה", PS_B | PS_MISC),
    ("ש", PS_ALL),
    ("מה", PS_B),
    ("שה", PS_B),
    ("כש", PS_VERB | PS_B | PS_NONDEF),
    ("כשה", PS_B),
    ("מש", PS_VERB),
    ("שב", PS_B | PS_NONDEF),
    ("שכ", PS_B | PS_NONDEF),
    ("של", PS_B | PS_NONDEF | PS_L),
    ("שמ", PS_B | PS_NONDEF),
];

/// Builds the prefix tree from the fixed rule table.
///
/// Every base sequence is inserted together with its conjunctive-vav
/// variant, plus the bare vav itself. When `allow_he_hasheela` is set, the
/// article entry additionally accepts finite verbs, admitting the
/// interrogative reading of a leading he.
pub fn build_prefix_tree(allow_he_hasheela: bool) -> RadixTree<u8> {
    let mut tree = RadixTree::new();
    tree.insert("ו", PS_ALL);
    for &(seq, mask) in BASE_PREFIXES {
        let mask = if seq == "ה" && allow_he_hasheela {
            mask | PS_VERB
        } else {
            mask
        };
        tree.insert(seq, mask);
        tree.insert(&format!("ו{seq}"), mask);
    }
    tree
}

/// Maps a descriptor mask to the prefix categories the reading accepts.
pub fn dmask_to_prefix_spec(mask: u32) -> u8 {
    if mask & D_TYPEMASK == 0 {
        // Unclassified readings accept anything.
        return PS_ALL;
    }
    if mask & D_TYPEMASK == D_VERB {
        return match mask & D_TENSEMASK {
            D_IMPERATIVE => PS_IMPER,
            D_INFINITIVE => PS_L,
            // Present-tense forms behave like nouns, as does the bare
            // infinitive.
            D_BINFINITIVE | D_PRESENT => PS_B,
            _ => PS_VERB,
        };
    }
    // Nouns and adjectives. Possessive suffixes, construct state, and
    // proper nouns exclude the definite article.
    if mask & (D_OMASK | D_CONSTRUCT | D_SPECNOUN) != 0 {
        PS_NONDEF
    } else {
        PS_B
    }
}
