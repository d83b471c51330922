//! The loaded dictionary: word tree plus prefix tree.
//!
//! A [`Dictionary`] is built once, either from an hspell dictionary folder
//! ([`Dictionary::from_hspell_dir`]) or from caller-supplied streams
//! ([`Dictionary::from_hspell_readers`]), and is immutable afterwards apart
//! from the explicit custom-relation operation on the
//! [`Lemmatizer`](crate::lemmatizer::Lemmatizer). A loaded dictionary can be
//! persisted to a compact cache with [`Dictionary::write`] and restored
//! with [`Dictionary::read`], skipping the hspell decode on later runs.

pub mod hspell;
mod morph;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use bincode::config::{self, Fixint, LittleEndian};
use bincode::{Decode, Encode};
use flate2::read::GzDecoder;

use crate::dictionary::hspell::constants::{
    DESC_FILE, PREFIXES_FILE, SIZES_FILE, STEMS_FILE, WORDS_FILE,
};
use crate::dictionary::hspell::prefixes::build_prefix_tree;
use crate::errors::{HebMorphError, Result};
use crate::radix::RadixTree;

pub use crate::dictionary::morph::MorphData;

/// Magic bytes identifying a dictionary cache file.
///
/// The version here tracks the cache format, not the crate version.
pub const MODEL_MAGIC: &[u8] = b"HebMorphDictionary 0.1\n";

/// Options controlling an hspell load.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Load descriptor and stem streams. Without them only prefix
    /// legality data is available and lemmatization is not possible.
    pub morphology: bool,

    /// Accept the interrogative he as a formative prefix on verbs.
    pub allow_he_hasheela: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            morphology: true,
            allow_he_hasheela: false,
        }
    }
}

/// The dictionary: morphological data per word, and the prefix rule tree.
#[derive(Debug)]
pub struct Dictionary {
    words: RadixTree<MorphData>,
    prefixes: RadixTree<u8>,
}

/// The flat serialized form of a dictionary cache. The trees are rebuilt
/// on read, so the cache stays independent of the tree's in-memory layout.
#[derive(Decode, Encode)]
struct DictionaryModel {
    words: Vec<(String, MorphData)>,
    prefixes: Vec<(String, u8)>,
}

const fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}

impl Dictionary {
    /// Loads a dictionary from an hspell dictionary folder.
    ///
    /// Expects the gzip-compressed `hebrew.wgz` family of files plus the
    /// plain-text sizes metadata. The decoded word count is cross-checked
    /// against the metadata; a mismatch is logged but not fatal, since the
    /// stored count includes a format artifact entry.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures opening or reading any stream, and
    /// [`CorruptDictionary`](HebMorphError::CorruptDictionary) on malformed
    /// stream content. No partial dictionary is exposed on failure.
    pub fn from_hspell_dir<P>(dir: P, opts: LoadOptions) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        let expected = hspell::read_word_count(File::open(dir.join(SIZES_FILE))?)?;

        let words_rdr = GzDecoder::new(BufReader::new(File::open(dir.join(WORDS_FILE))?));
        let prefixes_rdr =
            GzDecoder::new(BufReader::new(File::open(dir.join(PREFIXES_FILE))?));
        let morphology = if opts.morphology {
            Some((
                GzDecoder::new(BufReader::new(File::open(dir.join(DESC_FILE))?)),
                GzDecoder::new(BufReader::new(File::open(dir.join(STEMS_FILE))?)),
            ))
        } else {
            None
        };

        let words = hspell::load(words_rdr, prefixes_rdr, morphology)?;
        if words.len() != expected {
            log::warn!(
                "sizes metadata promises {} words, decoded {}",
                expected,
                words.len()
            );
        }
        Ok(Self {
            words,
            prefixes: build_prefix_tree(opts.allow_he_hasheela),
        })
    }

    /// Loads a dictionary from uncompressed hspell streams.
    ///
    /// `morphology` supplies the descriptor and stem streams as a pair, or
    /// `None` for the reduced prefix-only load.
    ///
    /// # Errors
    ///
    /// See [`Dictionary::from_hspell_dir`].
    pub fn from_hspell_readers<W, P, D, S>(
        word_list: W,
        prefix_hints: P,
        morphology: Option<(D, S)>,
        allow_he_hasheela: bool,
    ) -> Result<Self>
    where
        W: Read,
        P: Read,
        D: Read,
        S: Read,
    {
        Ok(Self {
            words: hspell::load(word_list, prefix_hints, morphology)?,
            prefixes: build_prefix_tree(allow_he_hasheela),
        })
    }

    /// Restores a dictionary from a cache previously produced by
    /// [`Dictionary::write`].
    ///
    /// # Errors
    ///
    /// Fails when the magic bytes mismatch or decoding fails.
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        if magic != MODEL_MAGIC {
            return Err(HebMorphError::invalid_argument(
                "rdr",
                "The magic number of the input cache mismatches.",
            ));
        }
        let model: DictionaryModel =
            bincode::decode_from_std_read(&mut rdr, bincode_config())?;
        let mut words = RadixTree::new();
        for (word, data) in model.words {
            words.insert(&word, data);
        }
        let mut prefixes = RadixTree::new();
        for (seq, mask) in model.prefixes {
            prefixes.insert(&seq, mask);
        }
        Ok(Self { words, prefixes })
    }

    /// Writes this dictionary as a cache byte stream.
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        let model = DictionaryModel {
            words: self
                .words
                .iter()
                .map(|(word, data)| (word, data.clone()))
                .collect(),
            prefixes: self
                .prefixes
                .iter()
                .map(|(seq, mask)| (seq, *mask))
                .collect(),
        };
        wtr.write_all(MODEL_MAGIC)?;
        bincode::encode_into_std_write(&model, &mut wtr, bincode_config())?;
        Ok(())
    }

    /// Gets the word tree.
    #[inline(always)]
    pub fn words(&self) -> &RadixTree<MorphData> {
        &self.words
    }

    /// Gets the prefix rule tree.
    #[inline(always)]
    pub fn prefixes(&self) -> &RadixTree<u8> {
        &self.prefixes
    }

    /// Returns the number of dictionary words.
    #[inline(always)]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub(crate) fn words_mut(&mut self) -> &mut RadixTree<MorphData> {
        &mut self.words
    }
}
