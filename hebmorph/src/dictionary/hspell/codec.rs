//! Encoding of the hspell stream formats.
//!
//! The inverse of the loader's decoders, used to produce synthetic
//! dictionaries for tests, benches, and tooling. `decode(encode(x)) == x`
//! for any list of non-empty words.

use crate::dictionary::hspell::constants::DMASKS;
use crate::errors::{HebMorphError, Result};

use super::{STEM_BASE, STEM_BYTE_OFFSET};

/// Encodes one character into its ISO-8859-8 dictionary byte.
fn encode_char(c: char) -> u8 {
    match c {
        'א'..='ת' => (c as u32 - 0x4F0) as u8,
        _ if (c as u32) <= 0xBE => c as u8,
        // No mapping; mirrors the decoder's placeholder.
        _ => b' ',
    }
}

/// Front-codes a word list.
///
/// The first word is emitted verbatim; every later word is emitted as a
/// digit run (characters to drop from the previous word) followed by its
/// differing suffix. Adjacent words sharing a full prefix still get an
/// explicit `0` run so word boundaries stay unambiguous. A word that is
/// a pure truncation of its predecessor (possible only in unsorted lists)
/// is emitted with one extra dropped-and-repeated character, since the
/// decoder finalizes a word only once suffix characters follow.
pub fn encode_word_list<S>(words: &[S]) -> Vec<u8>
where
    S: AsRef<str>,
{
    let mut out = vec![];
    let mut prev: Vec<char> = vec![];
    for (i, word) in words.iter().enumerate() {
        let chars: Vec<char> = word.as_ref().chars().collect();
        let common = if i == 0 {
            0
        } else {
            let mut shared = prev
                .iter()
                .zip(chars.iter())
                .take_while(|(a, b)| a == b)
                .count();
            if shared == chars.len() && !chars.is_empty() {
                shared -= 1;
            }
            out.extend_from_slice((prev.len() - shared).to_string().as_bytes());
            shared
        };
        for &c in &chars[common..] {
            out.push(encode_char(c));
        }
        prev = chars;
    }
    out
}

/// Appends one descriptor record (with its terminator) to `out`.
///
/// # Errors
///
/// Fails when a mask is not part of the fixed
/// [`DMASKS`](crate::dictionary::hspell::constants::DMASKS) inventory.
pub fn encode_desc_record(masks: &[u32], out: &mut Vec<u8>) -> Result<()> {
    for &mask in masks {
        let index = DMASKS.iter().position(|&m| m == mask).ok_or_else(|| {
            HebMorphError::invalid_argument(
                "masks",
                format!("descriptor mask {mask:#x} is not in the inventory"),
            )
        })?;
        out.push(b'A' + (index % 26) as u8);
        out.push(b'A' + (index / 26) as u8);
    }
    out.push(b'\n');
    Ok(())
}

/// Appends one stem record (with its terminator) to `out`.
pub fn encode_stem_record(refs: &[usize], out: &mut Vec<u8>) {
    for &word_index in refs {
        debug_assert!(word_index < STEM_BASE.pow(3));
        let mut rest = word_index;
        for _ in 0..3 {
            out.push(STEM_BYTE_OFFSET + (rest % STEM_BASE) as u8);
            rest /= STEM_BASE;
        }
    }
    out.push(b'\n');
}

/// Renders a sizes metadata file for `word_count` words.
pub fn encode_sizes(word_count: usize) -> String {
    format!("hebmorph synthetic dictionary\ndict {}\n", word_count + 1)
}
