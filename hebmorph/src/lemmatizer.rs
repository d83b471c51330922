//! The lemmatization engine.
//!
//! A [`Lemmatizer`] owns a loaded [`Dictionary`] and answers per-word
//! queries: exact and tolerant lemmatization, prefix legality, and
//! heuristic spelling correction. All queries are read-only, so one engine
//! may be shared behind a reference across any number of reader threads.

use crate::dictionary::hspell::prefixes::dmask_to_prefix_spec;
use crate::dictionary::{Dictionary, MorphData};
use crate::errors::{HebMorphError, Result};
use crate::radix::VowelLetterTolerance;
use crate::token::{HebrewToken, RankedTokenList};

/// Score of a reading found without consuming a prefix.
const EXACT_SCORE: f32 = 1.0;

/// Multiplier applied once a formative prefix was consumed.
const PREFIX_PENALTY: f32 = 0.9;

/// The shortest stem a prefix segmentation may leave behind.
const MIN_STEM_LENGTH: usize = 2;

/// Letter groups a writer plausibly confuses, by sound or by sight.
///
/// Spelling correction tries every other member of a group in place of the
/// written letter.
static SIMILAR_LETTERS: &[&str] = &[
    "העא", "גה", "כח", "תט", "צס", "שס", "כק", "בו", "פב", "זס",
];

/// Final-form letter correspondences (regular, final).
static FINAL_FORMS: &[(char, char)] =
    &[('כ', 'ך'), ('מ', 'ם'), ('נ', 'ן'), ('פ', 'ף'), ('צ', 'ץ')];

const VAV: char = 'ו';
const YUD: char = 'י';
const ALEPH: char = 'א';
const GERESH: char = '\'';
const GERSHAYIM: char = '"';

/// A dictionary-driven lemmatizer for Hebrew.
pub struct Lemmatizer {
    dict: Dictionary,
    tolerance: VowelLetterTolerance,
}

impl Lemmatizer {
    /// Creates a lemmatizer over a loaded dictionary.
    pub fn new(dict: Dictionary) -> Self {
        Self {
            dict,
            tolerance: VowelLetterTolerance::default(),
        }
    }

    /// Replaces the tolerance policy used by
    /// [`Lemmatizer::lemmatize_tolerant`].
    pub fn with_tolerance(mut self, tolerance: VowelLetterTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Gets the underlying dictionary.
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Tears the engine down, releasing both trees.
    ///
    /// Consumes the lemmatizer: queries after teardown do not compile, so
    /// there is no half-initialized state to guard at run time.
    pub fn close(self) {}

    /// Checks whether `s` is a legal formative prefix sequence.
    pub fn is_legal_prefix(&self, s: &str) -> bool {
        matches!(self.dict.prefixes().lookup_exact(s), Some(&mask) if mask != 0)
    }

    /// Strips a legal prefix separated from the stem by a quotation mark.
    ///
    /// Punctuation convention: inside an acronym or quoted stem, a
    /// quotation mark (or an apostrophe, when no quotation mark precedes
    /// it) may separate a formative prefix from the stem. When the text
    /// before the first such mark is a legal prefix, the stem after it is
    /// returned; otherwise the word is returned unchanged.
    pub fn strip_quotation_prefix<'a>(&self, word: &'a str) -> &'a str {
        if let Some(at) = word.find(GERSHAYIM) {
            if self.is_legal_prefix(&word[..at]) {
                return &word[at + GERSHAYIM.len_utf8()..];
            }
        }
        let single = match word.find(GERESH) {
            None => return word,
            Some(at) => at,
        };
        if let Some(double) = word.find(GERSHAYIM) {
            if single > double {
                return word;
            }
        }
        if self.is_legal_prefix(&word[..single]) {
            return &word[single + GERESH.len_utf8()..];
        }
        word
    }

    /// Lemmatizes `word` against the dictionary, exact spelling only.
    ///
    /// Direct readings score `1.0`; readings reached by consuming a
    /// formative prefix score `0.9`, so an unprefixed analysis always
    /// outranks a prefix-segmented one. A word ending in a geresh is
    /// retried without it when it has no direct reading.
    ///
    /// # Returns
    ///
    /// The readings sorted by descending score, or `None` when the word is
    /// not covered by the dictionary at all.
    pub fn lemmatize(&self, word: &str) -> Option<Vec<HebrewToken>> {
        let mut ret = RankedTokenList::new();

        match self.dict.words().lookup_exact(word) {
            Some(data) => Self::emit_direct(&mut ret, word, data),
            None => {
                if let Some(stripped) = word.strip_suffix(GERESH) {
                    if let Some(data) = self.dict.words().lookup_exact(stripped) {
                        Self::emit_direct(&mut ret, word, data);
                    }
                }
            }
        }

        let chars: Vec<char> = word.chars().collect();
        for prefix_len in 1.. {
            if chars.len() < prefix_len + MIN_STEM_LENGTH {
                break;
            }
            let prefix: String = chars[..prefix_len].iter().collect();
            let prefix_mask = match self.dict.prefixes().lookup_exact(&prefix) {
                // Prefixes are tried shortest-first and the rule table is
                // prefix-closed, so the first miss ends the search.
                None => break,
                Some(&mask) => mask,
            };
            if prefix_mask == 0 {
                continue;
            }
            let stem: String = chars[prefix_len..].iter().collect();
            if let Some(data) = self.dict.words().lookup_exact(&stem) {
                if data.prefixes() & prefix_mask != 0 {
                    for (mask, lemma) in data.readings() {
                        if dmask_to_prefix_spec(mask) & prefix_mask != 0 {
                            ret.add_unique(HebrewToken::new(
                                word,
                                prefix_len,
                                mask,
                                lemma,
                                PREFIX_PENALTY,
                            ));
                        }
                    }
                }
            }
        }

        if ret.is_empty() {
            None
        } else {
            Some(ret.into_vec())
        }
    }

    /// Lemmatizes `word` tolerating vowel-letter spelling variation.
    ///
    /// The control flow matches [`Lemmatizer::lemmatize`], with tolerant
    /// lookups in place of exact ones: every token's score carries the
    /// tolerant match's own confidence (times `0.9` when a prefix was
    /// consumed), and its surface form is the prefix plus the matched
    /// dictionary spelling, which may differ from the input.
    pub fn lemmatize_tolerant(&self, word: &str) -> Option<Vec<HebrewToken>> {
        let mut ret = RankedTokenList::new();

        for found in self.dict.words().lookup_tolerant(word, &self.tolerance) {
            for (mask, lemma) in found.value.readings() {
                ret.add_unique(HebrewToken::new(
                    &found.word,
                    0,
                    mask,
                    lemma,
                    found.score,
                ));
            }
        }

        let chars: Vec<char> = word.chars().collect();
        for prefix_len in 1.. {
            if chars.len() < prefix_len + MIN_STEM_LENGTH {
                break;
            }
            let prefix: String = chars[..prefix_len].iter().collect();
            let prefix_mask = match self.dict.prefixes().lookup_exact(&prefix) {
                None => break,
                Some(&mask) => mask,
            };
            if prefix_mask == 0 {
                continue;
            }
            let stem: String = chars[prefix_len..].iter().collect();
            for found in self.dict.words().lookup_tolerant(&stem, &self.tolerance) {
                if found.value.prefixes() & prefix_mask == 0 {
                    continue;
                }
                for (mask, lemma) in found.value.readings() {
                    if dmask_to_prefix_spec(mask) & prefix_mask != 0 {
                        let surface = format!("{prefix}{}", found.word);
                        ret.add_unique(HebrewToken::new(
                            &surface,
                            prefix_len,
                            mask,
                            lemma,
                            found.score * PREFIX_PENALTY,
                        ));
                    }
                }
            }
        }

        if ret.is_empty() {
            None
        } else {
            Some(ret.into_vec())
        }
    }

    /// Checks whether `word` has any reading, without building tokens.
    ///
    /// The existence oracle behind [`Lemmatizer::try_correct`].
    pub fn have_lemmas(&self, word: &str) -> bool {
        if self.dict.words().contains_key(word) {
            return true;
        }
        if let Some(stripped) = word.strip_suffix(GERESH) {
            if self.dict.words().contains_key(stripped) {
                return true;
            }
        }

        let chars: Vec<char> = word.chars().collect();
        for prefix_len in 1.. {
            if chars.len() < prefix_len + MIN_STEM_LENGTH {
                break;
            }
            let prefix: String = chars[..prefix_len].iter().collect();
            let prefix_mask = match self.dict.prefixes().lookup_exact(&prefix) {
                None => break,
                Some(&mask) => mask,
            };
            if prefix_mask == 0 {
                continue;
            }
            let stem: String = chars[prefix_len..].iter().collect();
            if let Some(data) = self.dict.words().lookup_exact(&stem) {
                if data.prefixes() & prefix_mask != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Generates spelling-correction candidates for a word with no
    /// readings.
    ///
    /// A bounded generate-and-test pass over the known orthographic
    /// confusions of Hebrew writing, not an edit-distance search: vowel
    /// letters added or dropped, an aleph added or dropped, similar-letter
    /// substitutions (respecting consonantal-vav doubling), final-form
    /// swaps at the last letter, and acronym/abbreviation punctuation.
    /// Every returned candidate independently satisfies
    /// [`Lemmatizer::have_lemmas`]; candidates are not ranked or
    /// deduplicated.
    pub fn try_correct(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let mut corrections = vec![];
        if len == 0 {
            return corrections;
        }
        let push_if_known = |candidate: String, out: &mut Vec<String>| {
            if self.have_lemmas(&candidate) {
                out.push(candidate);
            }
        };

        // A missing vowel letter, yud or vav, at any internal boundary.
        for i in 1..len {
            push_if_known(splice(&chars, i, i, &[YUD]), &mut corrections);
            push_if_known(splice(&chars, i, i, &[VAV]), &mut corrections);
        }
        // A spurious internal vowel letter.
        for i in 1..len.saturating_sub(1) {
            if chars[i] == YUD || chars[i] == VAV {
                push_if_known(splice(&chars, i, i + 1, &[]), &mut corrections);
            }
        }
        // A missing or spurious internal aleph.
        for i in 1..len {
            push_if_known(splice(&chars, i, i, &[ALEPH]), &mut corrections);
        }
        for i in 1..len.saturating_sub(1) {
            if chars[i] == ALEPH {
                push_if_known(splice(&chars, i, i + 1, &[]), &mut corrections);
            }
        }
        // Similar-sounding or similar-looking letters.
        for i in 0..len {
            for group in SIMILAR_LETTERS {
                if !group.contains(chars[i]) {
                    continue;
                }
                for other in group.chars() {
                    if other == chars[i] {
                        continue;
                    }
                    let candidate = if i + 1 < len && chars[i] == VAV && chars[i + 1] == VAV
                    {
                        // A doubled consonantal vav collapses into the
                        // replacement.
                        splice(&chars, i, i + 2, &[other])
                    } else if other == VAV {
                        // A consonantal vav is written doubled mid-word.
                        splice(&chars, i, i + 1, &[VAV, VAV])
                    } else {
                        splice(&chars, i, i + 1, &[other])
                    };
                    push_if_known(candidate, &mut corrections);
                }
            }
        }
        // The last letter written in the wrong glyph form, a frequent slip
        // in abbreviations.
        let last = chars[len - 1];
        let swapped = FINAL_FORMS.iter().find_map(|&(regular, fin)| {
            if last == regular {
                Some(fin)
            } else if last == fin {
                Some(regular)
            } else {
                None
            }
        });
        if let Some(swapped) = swapped {
            push_if_known(splice(&chars, len - 1, len, &[swapped]), &mut corrections);
        }
        // Acronym: a quotation mark before the last letter.
        if len >= 2 {
            push_if_known(
                splice(&chars, len - 1, len, &[GERSHAYIM, last]),
                &mut corrections,
            );
        }
        // Abbreviation: a trailing geresh.
        push_if_known(format!("{word}{GERESH}"), &mut corrections);

        corrections
    }

    /// Registers `new_word` as a dictionary entry cross-linked to the
    /// existing `exist_word`.
    ///
    /// Both words end up carrying each other as an additional lemma;
    /// the new entry copies the existing word's descriptors.
    ///
    /// # Returns
    ///
    /// `Ok(false)` when `new_word` is already in the dictionary.
    ///
    /// # Errors
    ///
    /// [`MissingRelation`](HebMorphError::MissingRelation) when
    /// `exist_word` is not in the dictionary.
    pub fn add_custom_relation(&mut self, exist_word: &str, new_word: &str) -> Result<bool> {
        if self.dict.words().contains_key(new_word) {
            return Ok(false);
        }
        let exist_data = self.dict.words_mut().lookup_mut(exist_word).ok_or_else(|| {
            HebMorphError::MissingRelation {
                word: exist_word.to_string(),
            }
        })?;

        let head_mask = exist_data.desc_flags().first().copied().unwrap_or(0);
        let mut new_data = MorphData::new(exist_data.prefixes());
        for (mask, lemma) in exist_data.readings() {
            new_data.push_reading(mask, lemma.map(str::to_string));
        }
        new_data.push_reading(head_mask, Some(exist_word.to_string()));
        exist_data.push_reading(0, Some(new_word.to_string()));

        self.dict.words_mut().insert(new_word, new_data);
        Ok(true)
    }

    /// Iterates the dictionary words in key order.
    pub fn iter_words(&self) -> impl Iterator<Item = String> + '_ {
        self.dict.words().iter().map(|(word, _)| word)
    }

    fn emit_direct(ret: &mut RankedTokenList, word: &str, data: &MorphData) {
        for (mask, lemma) in data.readings() {
            ret.add_unique(HebrewToken::new(word, 0, mask, lemma, EXACT_SCORE));
        }
    }
}

/// Removes all niqqud (pointing) characters from a word.
pub fn remove_niqqud(word: &str) -> String {
    word.chars()
        .filter(|&c| !('\u{05AF}'..='\u{05C4}').contains(&c))
        .collect()
}

/// Rebuilds a word as `chars[..keep_until] + middle + chars[resume_from..]`.
fn splice(chars: &[char], keep_until: usize, resume_from: usize, middle: &[char]) -> String {
    chars[..keep_until]
        .iter()
        .chain(middle.iter())
        .chain(chars[resume_from..].iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice() {
        let chars: Vec<char> = "שלום".chars().collect();
        assert_eq!(splice(&chars, 2, 2, &['י']), "שליום");
        assert_eq!(splice(&chars, 2, 3, &[]), "שלם");
        assert_eq!(splice(&chars, 0, 4, &[]), "");
    }

    #[test]
    fn test_remove_niqqud() {
        assert_eq!(remove_niqqud("שָׁלוֹם"), "שלום");
        assert_eq!(remove_niqqud("בית"), "בית");
    }
}
