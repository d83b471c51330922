//! Ranked lemmatization results.

/// One lemmatization reading of a surface word.
///
/// A token records how the word was segmented (`prefix_length` leading
/// characters consumed as a formative prefix), the morphological descriptor
/// bitmask of the reading, the dictionary lemma, and a confidence score.
/// Tokens are self-contained and cheap to clone, so they can be collected,
/// stored, or sent across threads independently of the engine.
#[derive(Debug, Clone)]
pub struct HebrewToken {
    word: String,
    prefix_length: usize,
    mask: u32,
    lemma: String,
    score: f32,
}

impl HebrewToken {
    /// Creates a token.
    ///
    /// # Arguments
    ///
    /// * `word` - The analyzed surface form, prefix included.
    /// * `prefix_length` - Number of leading characters consumed as prefix.
    /// * `mask` - Morphological descriptor bitmask of this reading.
    /// * `lemma` - The dictionary lemma, or `None` for readings whose lemma
    ///   was suppressed; the stem (the word minus its prefix) then stands in
    ///   for it.
    /// * `score` - Confidence in `(0, 1]`.
    pub fn new(
        word: &str,
        prefix_length: usize,
        mask: u32,
        lemma: Option<&str>,
        score: f32,
    ) -> Self {
        let lemma = match lemma {
            Some(lemma) => lemma.to_string(),
            None => word.chars().skip(prefix_length).collect(),
        };
        Self {
            word: word.to_string(),
            prefix_length,
            mask,
            lemma,
            score,
        }
    }

    /// Gets the analyzed surface form, prefix included.
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Gets the number of leading characters consumed as prefix.
    #[inline(always)]
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Gets the morphological descriptor bitmask of this reading.
    #[inline(always)]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Gets the dictionary lemma.
    #[inline(always)]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Gets the confidence score.
    #[inline(always)]
    pub fn score(&self) -> f32 {
        self.score
    }
}

impl PartialEq for HebrewToken {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.prefix_length == other.prefix_length
            && self.mask == other.mask
            && self.lemma == other.lemma
            && self.score.to_bits() == other.score.to_bits()
    }
}

impl Eq for HebrewToken {}

/// A score-descending, duplicate-suppressing token collection.
///
/// Insertion keeps the list sorted by descending score; a token equal to an
/// already-stored one (structurally, score compared bitwise) is rejected.
/// Among equal scores insertion order is preserved, so a ranking pass is
/// stable.
#[derive(Debug, Default)]
pub struct RankedTokenList {
    items: Vec<HebrewToken>,
}

impl RankedTokenList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `token` at its rank unless an equal token is already stored.
    ///
    /// # Returns
    ///
    /// `true` when the token was inserted.
    pub fn add_unique(&mut self, token: HebrewToken) -> bool {
        if self.items.contains(&token) {
            return false;
        }
        let at = self
            .items
            .iter()
            .position(|t| t.score() < token.score())
            .unwrap_or(self.items.len());
        self.items.insert(at, token);
        true
    }

    /// Returns the number of stored tokens.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the list is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the tokens in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, HebrewToken> {
        self.items.iter()
    }

    /// Consumes the list into a rank-ordered vector.
    pub fn into_vec(self) -> Vec<HebrewToken> {
        self.items
    }
}

impl IntoIterator for RankedTokenList {
    type Item = HebrewToken;
    type IntoIter = std::vec::IntoIter<HebrewToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_lemma_falls_back_to_stem() {
        let token = HebrewToken::new("בבית", 1, 0, None, 0.9);
        assert_eq!(token.lemma(), "בית");
        assert_eq!(token.prefix_length(), 1);
    }

    #[test]
    fn test_ranked_insertion_is_descending() {
        let mut list = RankedTokenList::new();
        list.add_unique(HebrewToken::new("א", 0, 1, Some("א"), 0.9));
        list.add_unique(HebrewToken::new("ב", 0, 1, Some("ב"), 1.0));
        list.add_unique(HebrewToken::new("ג", 0, 1, Some("ג"), 0.72));
        let scores: Vec<f32> = list.iter().map(|t| t.score()).collect();
        assert_eq!(scores, [1.0, 0.9, 0.72]);
    }

    #[test]
    fn test_duplicates_are_suppressed() {
        let mut list = RankedTokenList::new();
        assert!(list.add_unique(HebrewToken::new("שלום", 0, 1, Some("שלום"), 1.0)));
        assert!(!list.add_unique(HebrewToken::new("שלום", 0, 1, Some("שלום"), 1.0)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut list = RankedTokenList::new();
        list.add_unique(HebrewToken::new("א", 0, 1, Some("ראשון"), 0.9));
        list.add_unique(HebrewToken::new("א", 0, 2, Some("שני"), 0.9));
        let lemmas: Vec<&str> = list.iter().map(|t| t.lemma()).collect();
        assert_eq!(lemmas, ["ראשון", "שני"]);
    }

    #[test]
    fn test_same_reading_with_different_score_is_kept() {
        let mut list = RankedTokenList::new();
        list.add_unique(HebrewToken::new("א", 0, 1, Some("א"), 1.0));
        assert!(list.add_unique(HebrewToken::new("א", 0, 1, Some("א"), 0.9)));
        assert_eq!(list.len(), 2);
    }
}
