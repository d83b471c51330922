//! Dictionary loading from on-disk hspell folders and from caches.

use std::fs;

use tempfile::tempdir;

use crate::dictionary::hspell::constants::{
    D_FEMININE, D_MASCULINE, D_NOUN, D_PLURAL, D_SINGULAR, WORDS_FILE,
};
use crate::dictionary::hspell::prefixes::PS_ALL;
use crate::dictionary::{Dictionary, LoadOptions};
use crate::errors::HebMorphError;
use crate::test_utils::{build_streams, dictionary_of, write_hspell_dir, Entry};

const NOUN_MS: u32 = D_NOUN | D_MASCULINE | D_SINGULAR;
const NOUN_MP: u32 = D_NOUN | D_MASCULINE | D_PLURAL;
const NOUN_FP: u32 = D_NOUN | D_FEMININE | D_PLURAL;

fn folder_entries() -> Vec<Entry> {
    vec![
        Entry::new("אגם", PS_ALL, vec![(NOUN_MS, 0)]),
        Entry::new("אגמים", PS_ALL, vec![(NOUN_MP, 0)]),
        Entry::new("שונות", PS_ALL, vec![(NOUN_FP, 2)]),
        Entry::new("תקן", 0b101, vec![(0, 2)]),
    ]
}

#[test]
fn test_load_from_hspell_folder() {
    let dir = tempdir().unwrap();
    write_hspell_dir(dir.path(), &folder_entries());

    let dict = Dictionary::from_hspell_dir(dir.path(), LoadOptions::default()).unwrap();
    assert_eq!(dict.word_count(), 4);

    // The plural cross-reference landed on the singular.
    let data = dict.words().lookup_exact("אגם").unwrap();
    assert_eq!(data.desc_flags(), [NOUN_MS, NOUN_MP]);
    assert_eq!(
        data.lemmas(),
        [Some("אגם".to_string()), Some("אגמים".to_string())]
    );

    // A reading pointing at the pseudo-stem has no lemma; the pseudo-stem
    // itself keeps one.
    let data = dict.words().lookup_exact("תקן").unwrap();
    assert_eq!(data.lemmas(), [None]);
    assert_eq!(data.prefixes(), 0b101);
    let data = dict.words().lookup_exact("שונות").unwrap();
    assert_eq!(data.lemmas(), [Some("שונות".to_string())]);
}

#[test]
fn test_load_without_morphology() {
    let dir = tempdir().unwrap();
    write_hspell_dir(dir.path(), &folder_entries());

    let opts = LoadOptions {
        morphology: false,
        ..LoadOptions::default()
    };
    let dict = Dictionary::from_hspell_dir(dir.path(), opts).unwrap();
    assert_eq!(dict.word_count(), 4);
    let data = dict.words().lookup_exact("תקן").unwrap();
    assert_eq!(data.prefixes(), 0b101);
    assert_eq!(data.num_readings(), 0);
}

#[test]
fn test_missing_folder_files_fail_fast() {
    let dir = tempdir().unwrap();
    let err = Dictionary::from_hspell_dir(dir.path(), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, HebMorphError::StdIo(_)));
}

#[test]
fn test_corrupt_word_list_aborts_the_load() {
    let dir = tempdir().unwrap();
    write_hspell_dir(dir.path(), &folder_entries());
    // Two characters followed by a back-off of nine.
    let mut bogus = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    std::io::Write::write_all(&mut bogus, b"\xE0\xE19").unwrap();
    fs::write(dir.path().join(WORDS_FILE), bogus.finish().unwrap()).unwrap();

    let err = Dictionary::from_hspell_dir(dir.path(), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, HebMorphError::CorruptDictionary(_)));
}

#[test]
fn test_reload_is_indistinguishable() {
    let entries = folder_entries();
    let first = dictionary_of(&entries).unwrap();
    let second = dictionary_of(&entries).unwrap();
    assert_eq!(first.word_count(), second.word_count());
    for (word, data) in first.words().iter() {
        assert_eq!(Some(data), second.words().lookup_exact(&word));
    }
}

#[test]
fn test_cache_roundtrip_preserves_every_entry() {
    let dict = dictionary_of(&folder_entries()).unwrap();
    let mut cache = vec![];
    dict.write(&mut cache).unwrap();
    let restored = Dictionary::read(cache.as_slice()).unwrap();

    assert_eq!(restored.word_count(), dict.word_count());
    for (word, data) in dict.words().iter() {
        assert_eq!(Some(data), restored.words().lookup_exact(&word));
    }
    for (seq, mask) in dict.prefixes().iter() {
        assert_eq!(Some(mask), restored.prefixes().lookup_exact(&seq));
    }
}

#[test]
fn test_streams_must_come_as_a_pair() {
    let streams = build_streams(&folder_entries());
    // Descriptor records without stem records cannot be aligned; the typed
    // API makes the mismatch unrepresentable, so only the paired and the
    // bare layouts exist.
    let bare = Dictionary::from_hspell_readers::<_, _, &[u8], &[u8]>(
        streams.words.as_slice(),
        streams.prefixes.as_slice(),
        None,
        false,
    )
    .unwrap();
    assert_eq!(bare.word_count(), 4);
    assert_eq!(bare.words().lookup_exact("אגם").unwrap().num_readings(), 0);
}
