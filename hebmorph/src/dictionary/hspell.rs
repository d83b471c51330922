//! Decoding of the hspell binary dictionary distribution.
//!
//! The distribution splits a dictionary into parallel streams, all indexed
//! by word position:
//!
//! - a front-coded word list: printable ASCII digit runs mean "drop that
//!   many characters from the previous word", every other byte is one
//!   ISO-8859-8 character of the new suffix;
//! - one raw prefix-compatibility byte per word;
//! - descriptor records (newline/NUL-terminated), each a run of base-26
//!   letter pairs indexing the fixed [`DMASKS`](constants::DMASKS) table;
//! - stem records (newline/NUL-terminated), each a run of base-94 byte
//!   triples referencing lemmas by word-list index.
//!
//! Streams are decoded eagerly and strictly: a truncated record, a
//! non-digit framing error, or an out-of-range reference aborts the load
//! with [`CorruptDictionary`](crate::errors::HebMorphError::CorruptDictionary)
//! and exposes no partial tree.

pub mod codec;
pub mod constants;
pub mod prefixes;

use std::io::Read;

use crate::dictionary::hspell::constants::{
    D_GENDERMASK, D_NOUN, D_NUMMASK, D_OMASK, D_PLURAL, D_TYPEMASK, DMASKS,
    PSEUDO_STEM_VARIOUS,
};
use crate::dictionary::morph::MorphData;
use crate::errors::{HebMorphError, Result};
use crate::radix::RadixTree;

/// Offset of the printable encoding used by stem records.
const STEM_BYTE_OFFSET: u8 = 33;

/// Base of the stem-record encoding.
const STEM_BASE: usize = 94;

/// A plural-form entry scheduled for reciprocal linking onto its lemma.
struct CrossReference {
    word: String,
    to: String,
    mask: u32,
}

/// Decodes one ISO-8859-8 dictionary byte into its Unicode character.
///
/// The Hebrew block `0xE0..=0xFA` shifts by a constant into `U+05D0..`;
/// bytes at or below `0xBE` pass through; everything else has no mapping
/// and becomes a space placeholder.
#[inline]
fn decode_char(b: u8) -> char {
    match b {
        0xE0..=0xFA => {
            // Safe range: 0x05D0..=0x05EA is always a valid scalar.
            char::from_u32(u32::from(b) + 0x4F0).unwrap_or(' ')
        }
        0..=0xBE => char::from(b),
        _ => ' ',
    }
}

/// Decodes the front-coded word list.
///
/// Words are reconstructed into a single mutable buffer: suffix bytes
/// append, and a digit run first finalizes the buffer as the previous word
/// and then truncates it by the decoded count. A back-off longer than the
/// buffer is a framing error. The final word is finalized at end of stream
/// when suffix characters followed the last digit run.
pub(crate) fn decode_word_list(bytes: &[u8]) -> Result<Vec<String>> {
    let mut words = vec![];
    let mut current: Vec<char> = vec![];
    let mut pending = false;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            words.push(current.iter().collect());
            let mut back = 0usize;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                back = back * 10 + usize::from(bytes[i] - b'0');
                i += 1;
            }
            if back > current.len() {
                return Err(HebMorphError::corrupt_dictionary(
                    "word-list",
                    format!(
                        "back-reference of {} characters exceeds the {}-character buffer",
                        back,
                        current.len()
                    ),
                ));
            }
            current.truncate(current.len() - back);
            pending = false;
        } else {
            current.push(decode_char(bytes[i]));
            pending = true;
            i += 1;
        }
    }
    if pending {
        words.push(current.iter().collect());
    }
    Ok(words)
}

/// Parses the sizes metadata and returns the word count.
///
/// The second whitespace-delimited token after the first line break holds
/// the stored count, which exceeds the actual word count by one.
pub fn read_word_count<R>(mut rdr: R) -> Result<usize>
where
    R: Read,
{
    let mut buf = vec![];
    rdr.read_to_end(&mut buf)?;
    let text = String::from_utf8_lossy(&buf);
    let line = text.split_once('\n').map(|(_, rest)| rest).ok_or_else(|| {
        HebMorphError::corrupt_dictionary("sizes", "missing word-count line")
    })?;
    let token = line.split_whitespace().nth(1).ok_or_else(|| {
        HebMorphError::corrupt_dictionary("sizes", "missing word-count token")
    })?;
    let stored: usize = token.parse()?;
    if stored == 0 {
        return Err(HebMorphError::corrupt_dictionary(
            "sizes",
            "stored word count must be positive",
        ));
    }
    Ok(stored - 1)
}

/// Splits a record stream into newline/NUL-terminated records.
///
/// Requesting a record past the end of the stream is an error: side-channel
/// streams must supply one record per word, and exhaustion mid-load means
/// the streams are out of step.
struct RecordReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    stream: &'static str,
}

impl<'a> RecordReader<'a> {
    fn new(bytes: &'a [u8], stream: &'static str) -> Self {
        Self {
            bytes,
            pos: 0,
            stream,
        }
    }

    fn next_record(&mut self) -> Result<&'a [u8]> {
        if self.pos >= self.bytes.len() {
            return Err(HebMorphError::corrupt_dictionary(
                self.stream,
                "stream exhausted before every word had a record",
            ));
        }
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b == b'\n' || b == 0 {
                let record = &self.bytes[start..self.pos];
                self.pos += 1;
                return Ok(record);
            }
            self.pos += 1;
        }
        Ok(&self.bytes[start..])
    }
}

/// Decodes one descriptor record into descriptor masks.
fn parse_desc_record(record: &[u8]) -> Result<Vec<u32>> {
    if record.len() % 2 != 0 {
        return Err(HebMorphError::corrupt_dictionary(
            "descriptors",
            format!("record length {} is not a run of byte pairs", record.len()),
        ));
    }
    let mut masks = Vec::with_capacity(record.len() / 2);
    for pair in record.chunks_exact(2) {
        let (b0, b1) = (pair[0], pair[1]);
        if !b0.is_ascii_uppercase() || !b1.is_ascii_uppercase() {
            return Err(HebMorphError::corrupt_dictionary(
                "descriptors",
                format!("invalid index pair {b0:#04x} {b1:#04x}"),
            ));
        }
        let index = usize::from(b0 - b'A') + usize::from(b1 - b'A') * 26;
        let mask = DMASKS.get(index).copied().ok_or_else(|| {
            HebMorphError::corrupt_dictionary(
                "descriptors",
                format!("descriptor index {index} exceeds the mask table"),
            )
        })?;
        masks.push(mask);
    }
    Ok(masks)
}

/// Decodes one stem record into word-list indices.
fn parse_stem_record(record: &[u8]) -> Result<Vec<usize>> {
    if record.len() % 3 != 0 {
        return Err(HebMorphError::corrupt_dictionary(
            "stems",
            format!("record length {} is not a run of byte triples", record.len()),
        ));
    }
    let mut refs = Vec::with_capacity(record.len() / 3);
    for triple in record.chunks_exact(3) {
        let mut index = 0usize;
        for (radix_pos, &b) in triple.iter().enumerate() {
            if b < STEM_BYTE_OFFSET {
                return Err(HebMorphError::corrupt_dictionary(
                    "stems",
                    format!("byte {b:#04x} below the printable stem encoding"),
                ));
            }
            index += usize::from(b - STEM_BYTE_OFFSET) * STEM_BASE.pow(radix_pos as u32);
        }
        refs.push(index);
    }
    Ok(refs)
}

/// Checks whether a reading participates in the plural cross-reference
/// pass: a plural noun with its gender specified and no possessive suffix.
fn is_plural_cross_reference(mask: u32) -> bool {
    mask & D_TYPEMASK == D_NOUN
        && mask & D_NUMMASK == D_PLURAL
        && mask & D_GENDERMASK != 0
        && mask & D_OMASK == 0
}

/// Loads the word tree from uncompressed hspell streams.
///
/// Descriptor and stem streams come as a pair or not at all; without them
/// only the prefix-compatibility byte of each word is recorded (the
/// reduced load used for prefix legality checks).
pub(crate) fn load<W, P, D, S>(
    mut word_list: W,
    mut prefix_hints: P,
    morphology: Option<(D, S)>,
) -> Result<RadixTree<MorphData>>
where
    W: Read,
    P: Read,
    D: Read,
    S: Read,
{
    let mut word_bytes = vec![];
    word_list.read_to_end(&mut word_bytes)?;
    let words = decode_word_list(&word_bytes)?;

    let mut prefix_bytes = vec![];
    prefix_hints.read_to_end(&mut prefix_bytes)?;
    if prefix_bytes.len() < words.len() {
        return Err(HebMorphError::corrupt_dictionary(
            "prefixes",
            format!(
                "{} prefix bytes for {} words",
                prefix_bytes.len(),
                words.len()
            ),
        ));
    }

    match morphology {
        Some((desc, stems)) => load_morphology(&words, &prefix_bytes, desc, stems),
        None => {
            let mut tree = RadixTree::new();
            for (i, word) in words.iter().enumerate() {
                if word.is_empty() {
                    continue;
                }
                tree.insert(word, MorphData::new(prefix_bytes[i]));
            }
            log::debug!("loaded {} dictionary words without morphology", tree.len());
            Ok(tree)
        }
    }
}

fn load_morphology<D, S>(
    words: &[String],
    prefix_bytes: &[u8],
    mut desc: D,
    mut stems: S,
) -> Result<RadixTree<MorphData>>
where
    D: Read,
    S: Read,
{
    let mut desc_bytes = vec![];
    desc.read_to_end(&mut desc_bytes)?;
    let mut stem_bytes = vec![];
    stems.read_to_end(&mut stem_bytes)?;

    let mut desc_records = RecordReader::new(&desc_bytes, "descriptors");
    let mut stem_records = RecordReader::new(&stem_bytes, "stems");

    let mut tree = RadixTree::new();
    let mut relations: Vec<CrossReference> = vec![];
    for (i, word) in words.iter().enumerate() {
        let masks = parse_desc_record(desc_records.next_record()?)?;
        let stem_refs = parse_stem_record(stem_records.next_record()?)?;
        if masks.len() != stem_refs.len() {
            return Err(HebMorphError::corrupt_dictionary(
                "stems",
                format!(
                    "word {} has {} descriptors but {} stem references",
                    i,
                    masks.len(),
                    stem_refs.len()
                ),
            ));
        }

        let mut data = MorphData::new(prefix_bytes[i]);
        for (&mask, &stem_ref) in masks.iter().zip(stem_refs.iter()) {
            let lemma = words.get(stem_ref).ok_or_else(|| {
                HebMorphError::corrupt_dictionary(
                    "stems",
                    format!(
                        "stem reference {} out of range for {} words",
                        stem_ref,
                        words.len()
                    ),
                )
            })?;
            if lemma == PSEUDO_STEM_VARIOUS && word != PSEUDO_STEM_VARIOUS {
                data.push_reading(mask, None);
            } else {
                data.push_reading(mask, Some(lemma.clone()));
                if is_plural_cross_reference(mask) && word != lemma {
                    relations.push(CrossReference {
                        word: word.clone(),
                        to: lemma.clone(),
                        mask,
                    });
                }
            }
        }
        if word.is_empty() {
            // Artifact of a leading back-off run; its records are consumed
            // to keep the streams aligned, but nothing is stored.
            continue;
        }
        tree.insert(word, data);
    }

    // The upstream resource records plural -> singular only; synthesize the
    // reciprocal link now that the tree is fully built. Absent targets are
    // skipped.
    let mut linked = 0usize;
    for relation in relations {
        if let Some(data) = tree.lookup_mut(&relation.to) {
            data.push_reading(relation.mask, Some(relation.word));
            linked += 1;
        }
    }
    log::debug!(
        "loaded {} dictionary words, {} plural cross-references",
        tree.len(),
        linked
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::hspell::codec;
    use crate::dictionary::hspell::constants::{D_FEMININE, D_MASCULINE, D_SINGULAR};

    #[test]
    fn test_decode_char_ranges() {
        assert_eq!(decode_char(0xE0), 'א');
        assert_eq!(decode_char(0xFA), 'ת');
        assert_eq!(decode_char(b'\''), '\'');
        assert_eq!(decode_char(b'"'), '"');
        // Unmapped high bytes become a space placeholder.
        assert_eq!(decode_char(0xDF), ' ');
        assert_eq!(decode_char(0xFF), ' ');
    }

    #[test]
    fn test_decode_word_list_shared_prefixes() {
        let words = ["אב", "אבא", "אבן", "בית"];
        let encoded = codec::encode_word_list(&words);
        assert_eq!(decode_word_list(&encoded).unwrap(), words);
    }

    #[test]
    fn test_decode_word_list_no_shared_prefix() {
        // The back-off spans the whole previous word.
        let words = ["אבג", "דהו"];
        let encoded = codec::encode_word_list(&words);
        assert_eq!(decode_word_list(&encoded).unwrap(), words);
    }

    #[test]
    fn test_decode_word_list_trailing_back_off() {
        // A stream may end in a digit run; the last word is already
        // finalized then.
        let words = ["שלו", "שלום"];
        let mut encoded = codec::encode_word_list(&words);
        encoded.push(b'2');
        assert_eq!(decode_word_list(&encoded).unwrap(), words);
    }

    #[test]
    fn test_decode_word_list_truncation_successor() {
        // A word that is a pure truncation of its predecessor survives the
        // round trip: the encoder re-emits one character so the decoder
        // sees a suffix.
        let words = ["שלום", "שלו", "שלו"];
        let encoded = codec::encode_word_list(&words);
        assert_eq!(decode_word_list(&encoded).unwrap(), words);
    }

    #[test]
    fn test_decode_word_list_overlong_back_off() {
        let err = decode_word_list(b"\xE0\xE19").unwrap_err();
        assert!(matches!(err, HebMorphError::CorruptDictionary(_)));
    }

    #[test]
    fn test_read_word_count() {
        let sizes = "hspell dictionary\ndict 4\n";
        assert_eq!(read_word_count(sizes.as_bytes()).unwrap(), 3);
    }

    #[test]
    fn test_read_word_count_malformed() {
        assert!(read_word_count("no line break".as_bytes()).is_err());
        assert!(read_word_count("one\ntoken\n".as_bytes()).is_err());
    }

    #[test]
    fn test_parse_desc_record_roundtrip() {
        let masks = [DMASKS[1], DMASKS[30], DMASKS[93]];
        let mut record = vec![];
        codec::encode_desc_record(&masks, &mut record).unwrap();
        // Strip the terminator appended by the encoder.
        assert_eq!(parse_desc_record(&record[..record.len() - 1]).unwrap(), masks);
    }

    #[test]
    fn test_parse_desc_record_rejects_odd_length() {
        assert!(parse_desc_record(b"ABC").is_err());
        assert!(parse_desc_record(b"a@").is_err());
    }

    #[test]
    fn test_parse_stem_record_roundtrip() {
        let refs = [0usize, 93, 94, 8835, 830583];
        let mut record = vec![];
        codec::encode_stem_record(&refs, &mut record);
        assert_eq!(parse_stem_record(&record[..record.len() - 1]).unwrap(), refs);
    }

    #[test]
    fn test_stem_reference_out_of_range_is_fatal() {
        let words = ["אם", "בת"];
        let word_stream = codec::encode_word_list(&words);
        let prefix_stream = [63u8, 63];
        let mut desc_stream = vec![];
        codec::encode_desc_record(&[D_NOUN | D_FEMININE | D_SINGULAR], &mut desc_stream)
            .unwrap();
        codec::encode_desc_record(&[D_NOUN | D_FEMININE | D_SINGULAR], &mut desc_stream)
            .unwrap();
        let mut stem_stream = vec![];
        codec::encode_stem_record(&[0], &mut stem_stream);
        codec::encode_stem_record(&[7], &mut stem_stream);
        let err = load(
            word_stream.as_slice(),
            prefix_stream.as_slice(),
            Some((desc_stream.as_slice(), stem_stream.as_slice())),
        )
        .unwrap_err();
        assert!(matches!(err, HebMorphError::CorruptDictionary(_)));
    }

    #[test]
    fn test_truncated_record_stream_is_fatal() {
        let words = ["אם", "בת"];
        let word_stream = codec::encode_word_list(&words);
        let prefix_stream = [63u8, 63];
        // Only one record where two are required.
        let mut desc_stream = vec![];
        codec::encode_desc_record(&[D_NOUN | D_MASCULINE | D_SINGULAR], &mut desc_stream)
            .unwrap();
        let mut stem_stream = vec![];
        codec::encode_stem_record(&[0], &mut stem_stream);
        let err = load(
            word_stream.as_slice(),
            prefix_stream.as_slice(),
            Some((desc_stream.as_slice(), stem_stream.as_slice())),
        )
        .unwrap_err();
        assert!(matches!(err, HebMorphError::CorruptDictionary(_)));
    }

    #[test]
    fn test_short_prefix_stream_is_fatal() {
        let words = ["אם", "בת"];
        let word_stream = codec::encode_word_list(&words);
        let prefix_stream = [63u8];
        let err = load::<_, _, &[u8], &[u8]>(
            word_stream.as_slice(),
            prefix_stream.as_slice(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, HebMorphError::CorruptDictionary(_)));
    }
}
