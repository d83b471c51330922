//! Shared helpers for tests: synthetic hspell stream assembly.

use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::dictionary::hspell::codec;
use crate::dictionary::hspell::constants::{
    DESC_FILE, PREFIXES_FILE, SIZES_FILE, STEMS_FILE, WORDS_FILE,
};
use crate::dictionary::Dictionary;
use crate::errors::Result;

/// One synthetic dictionary word: surface form, prefix-compatibility byte,
/// and readings as `(descriptor mask, stem word-index)` pairs.
pub(crate) struct Entry {
    pub word: &'static str,
    pub prefixes: u8,
    pub readings: Vec<(u32, usize)>,
}

impl Entry {
    pub fn new(word: &'static str, prefixes: u8, readings: Vec<(u32, usize)>) -> Self {
        Self {
            word,
            prefixes,
            readings,
        }
    }
}

/// The four uncompressed hspell streams for a set of entries.
pub(crate) struct Streams {
    pub words: Vec<u8>,
    pub prefixes: Vec<u8>,
    pub descs: Vec<u8>,
    pub stems: Vec<u8>,
}

pub(crate) fn build_streams(entries: &[Entry]) -> Streams {
    let words: Vec<&str> = entries.iter().map(|e| e.word).collect();
    let mut descs = vec![];
    let mut stems = vec![];
    for entry in entries {
        let masks: Vec<u32> = entry.readings.iter().map(|&(mask, _)| mask).collect();
        let refs: Vec<usize> = entry.readings.iter().map(|&(_, r)| r).collect();
        codec::encode_desc_record(&masks, &mut descs).unwrap();
        codec::encode_stem_record(&refs, &mut stems);
    }
    Streams {
        words: codec::encode_word_list(&words),
        prefixes: entries.iter().map(|e| e.prefixes).collect(),
        descs,
        stems,
    }
}

/// Loads a full-morphology dictionary straight from entry streams.
pub(crate) fn dictionary_of(entries: &[Entry]) -> Result<Dictionary> {
    let streams = build_streams(entries);
    Dictionary::from_hspell_readers(
        streams.words.as_slice(),
        streams.prefixes.as_slice(),
        Some((streams.descs.as_slice(), streams.stems.as_slice())),
        false,
    )
}

fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}

/// Writes a gzip-framed hspell dictionary folder for the entries.
pub(crate) fn write_hspell_dir(dir: &Path, entries: &[Entry]) {
    let streams = build_streams(entries);
    std::fs::write(dir.join(WORDS_FILE), gzip(&streams.words)).unwrap();
    std::fs::write(dir.join(PREFIXES_FILE), gzip(&streams.prefixes)).unwrap();
    std::fs::write(dir.join(DESC_FILE), gzip(&streams.descs)).unwrap();
    std::fs::write(dir.join(STEMS_FILE), gzip(&streams.stems)).unwrap();
    std::fs::write(dir.join(SIZES_FILE), codec::encode_sizes(entries.len())).unwrap();
}
