//! # HebMorph
//!
//! A dictionary-driven morphological analyzer and lemmatizer for Hebrew.
//!
//! ## Overview
//!
//! Given a surface word form, the engine returns the plausible lemmas
//! (dictionary base forms), their grammatical descriptors, and a confidence
//! score. Hebrew glues conjunctions, prepositions, and the definite article
//! onto the following word; the engine segments those formative prefixes,
//! checks their legality against a rule table, and ranks the resulting
//! readings. A tolerant mode accommodates the optional vowel letters of
//! unvocalized spelling, and a heuristic spelling corrector suggests
//! repairs for words the dictionary does not cover.
//!
//! The dictionary is decoded from the compact binary distribution of the
//! hspell project (a front-coded word list with side-channel descriptor and
//! stem streams) into a compressed prefix tree built for shared-prefix
//! storage and fuzzy traversal.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use hebmorph::dictionary::hspell::codec;
//! use hebmorph::dictionary::hspell::constants::{
//!     D_MASCULINE, D_NOUN, D_PLURAL, D_SINGULAR,
//! };
//! use hebmorph::{Dictionary, Lemmatizer};
//!
//! // A two-entry dictionary: the noun בית and its plural בתים.
//! let words = ["בית", "בתים"];
//! let word_stream = codec::encode_word_list(&words);
//! let prefix_stream = [63u8, 63];
//! let mut desc_stream = Vec::new();
//! codec::encode_desc_record(&[D_NOUN | D_MASCULINE | D_SINGULAR], &mut desc_stream)?;
//! codec::encode_desc_record(&[D_NOUN | D_MASCULINE | D_PLURAL], &mut desc_stream)?;
//! let mut stem_stream = Vec::new();
//! codec::encode_stem_record(&[0], &mut stem_stream);
//! codec::encode_stem_record(&[0], &mut stem_stream);
//!
//! let dict = Dictionary::from_hspell_readers(
//!     word_stream.as_slice(),
//!     prefix_stream.as_slice(),
//!     Some((desc_stream.as_slice(), stem_stream.as_slice())),
//!     false,
//! )?;
//! let lemmatizer = Lemmatizer::new(dict);
//!
//! // בבית segments into the preposition ב and the stem בית.
//! let tokens = lemmatizer.lemmatize("בבית").unwrap();
//! assert_eq!(tokens[0].lemma(), "בית");
//! assert_eq!(tokens[0].prefix_length(), 1);
//! assert_eq!(tokens[0].score(), 0.9);
//! # Ok(())
//! # }
//! ```

/// The dictionary data structures and the hspell format decoders.
pub mod dictionary;

/// Error type definitions.
pub mod errors;

/// The lemmatization engine.
pub mod lemmatizer;

/// The compressed prefix tree.
pub mod radix;

/// Ranked lemmatization results.
pub mod token;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

// Re-exports
pub use dictionary::{Dictionary, LoadOptions, MorphData};
pub use errors::{HebMorphError, Result};
pub use lemmatizer::{remove_niqqud, Lemmatizer};
pub use radix::{RadixTree, TolerancePolicy, VowelLetterTolerance};
pub use token::{HebrewToken, RankedTokenList};

/// The version number of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
