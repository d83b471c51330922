//! Per-word morphological data.

use bincode::{Decode, Encode};

/// The morphological readings stored for one dictionary surface form.
///
/// A word has one prefix-compatibility byte and any number of readings.
/// Each reading pairs a descriptor bitmask with an optional lemma; the two
/// sequences are parallel and only ever grow together, either during the
/// load or in the post-load cross-reference pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Decode, Encode)]
pub struct MorphData {
    prefixes: u8,
    desc_flags: Vec<u32>,
    lemmas: Vec<Option<String>>,
}

impl MorphData {
    /// Creates an entry with no readings yet.
    pub fn new(prefixes: u8) -> Self {
        Self {
            prefixes,
            desc_flags: vec![],
            lemmas: vec![],
        }
    }

    /// Gets the prefix-compatibility bitmask of this word.
    #[inline(always)]
    pub fn prefixes(&self) -> u8 {
        self.prefixes
    }

    /// Appends one reading.
    ///
    /// A `None` lemma marks a reading whose lemma was suppressed (the
    /// upstream pseudo-stem); consumers substitute the stem itself.
    pub fn push_reading(&mut self, mask: u32, lemma: Option<String>) {
        self.desc_flags.push(mask);
        self.lemmas.push(lemma);
    }

    /// Returns the number of readings.
    #[inline(always)]
    pub fn num_readings(&self) -> usize {
        debug_assert_eq!(self.desc_flags.len(), self.lemmas.len());
        self.desc_flags.len()
    }

    /// Iterates the readings as `(descriptor mask, lemma)` pairs.
    pub fn readings(&self) -> impl Iterator<Item = (u32, Option<&str>)> + '_ {
        self.desc_flags
            .iter()
            .copied()
            .zip(self.lemmas.iter().map(|lemma| lemma.as_deref()))
    }

    /// Gets the descriptor masks, parallel to [`MorphData::lemmas`].
    #[inline(always)]
    pub fn desc_flags(&self) -> &[u32] {
        &self.desc_flags
    }

    /// Gets the lemmas, parallel to [`MorphData::desc_flags`].
    #[inline(always)]
    pub fn lemmas(&self) -> &[Option<String>] {
        &self.lemmas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_stay_parallel() {
        let mut data = MorphData::new(0b11);
        data.push_reading(1, Some("בית".to_string()));
        data.push_reading(2, None);
        assert_eq!(data.num_readings(), 2);
        let readings: Vec<(u32, Option<&str>)> = data.readings().collect();
        assert_eq!(readings, [(1, Some("בית")), (2, None)]);
        assert_eq!(data.prefixes(), 0b11);
    }
}
