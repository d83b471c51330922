//! Tolerant lookup under a pluggable equivalence policy.
//!
//! Unvocalized Hebrew spelling leaves the vowel letters vav and yud
//! optional, so the same word is commonly written with or without them.
//! Tolerant lookup walks the tree while letting a [`TolerancePolicy`] admit
//! a bounded set of deviations between the query and the stored keys, and
//! scores every match by how many deviations it needed.

use hashbrown::HashMap;

use crate::radix::{Node, RadixTree};

/// A single tolerated deviation between the query and a stored key.
///
/// Each variant carries the multiplicative penalty applied to the running
/// score of the traversal branch that takes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    /// Consume the stored character without consuming query input: the
    /// stored word carries a character the query omits.
    ConsumeStored {
        /// Multiplicative score penalty.
        penalty: f32,
    },
    /// Treat the query character as if it were the stored character.
    Substitute {
        /// Multiplicative score penalty.
        penalty: f32,
    },
}

/// A policy deciding which deviations are admissible at which positions.
///
/// The traversal algorithm is policy-agnostic; implementations encode one
/// equivalence class of spelling variation each. Policies must be cheap and
/// deterministic, and should admit deviations only for the character classes
/// they model, or tolerant lookup loses its bounded cost.
pub trait TolerancePolicy {
    /// Deviations admissible when the stored character `stored` faces the
    /// query at position `pos` (`pos < input.len()`).
    fn pair_deviations(&self, input: &[char], pos: usize, stored: char) -> Vec<Deviation>;

    /// Returns the penalty for skipping the query character at `pos`
    /// entirely (the query carries a character the stored word lacks), or
    /// `None` when that character may not be skipped.
    fn skip_input(&self, input: &[char], pos: usize) -> Option<f32>;
}

/// One tolerant match: a stored word reachable from the query under the
/// policy, with its payload and confidence score.
#[derive(Debug)]
pub struct LookupResult<'a, T> {
    /// The stored dictionary word that matched. May differ from the query.
    pub word: String,
    /// The payload stored at the matched word.
    pub value: &'a T,
    /// Confidence in `(0, 1]`. An exact match scores `1.0`; every tolerated
    /// deviation decays the score multiplicatively.
    pub score: f32,
}

/// The vowel-letter equivalence policy.
///
/// Treats the vowel letters vav (ו) and yud (י) as optionally present at any
/// position past the first character, in either the query or the stored
/// word. The first character is exempt since a leading vav is a conjunction
/// prefix, not a spelling variant.
#[derive(Debug, Clone, Copy)]
pub struct VowelLetterTolerance {
    penalty: f32,
}

impl VowelLetterTolerance {
    /// The default per-deviation penalty. One deviation keeps a tolerant
    /// match below a prefix-segmented exact analysis.
    pub const DEFAULT_PENALTY: f32 = 0.8;

    const VAV: char = 'ו';
    const YUD: char = 'י';

    /// Creates a policy with a custom per-deviation penalty in `(0, 1)`.
    pub fn new(penalty: f32) -> Self {
        debug_assert!(penalty > 0.0 && penalty < 1.0);
        Self { penalty }
    }

    #[inline(always)]
    fn is_vowel_letter(c: char) -> bool {
        c == Self::VAV || c == Self::YUD
    }
}

impl Default for VowelLetterTolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PENALTY)
    }
}

impl TolerancePolicy for VowelLetterTolerance {
    fn pair_deviations(&self, input: &[char], pos: usize, stored: char) -> Vec<Deviation> {
        if pos == 0 {
            return vec![];
        }
        if Self::is_vowel_letter(stored) && input[pos] != stored {
            vec![Deviation::ConsumeStored {
                penalty: self.penalty,
            }]
        } else {
            vec![]
        }
    }

    fn skip_input(&self, input: &[char], pos: usize) -> Option<f32> {
        if pos > 0 && Self::is_vowel_letter(input[pos]) {
            Some(self.penalty)
        } else {
            None
        }
    }
}

struct State<'a, T> {
    node: &'a Node<T>,
    /// Offset into `node.key`; characters before it are already matched.
    offset: usize,
    /// Offset into the query.
    pos: usize,
    score: f32,
    /// Stored-side characters consumed so far.
    path: Vec<char>,
}

impl<T> RadixTree<T> {
    /// Finds every stored word reachable from `key` under `policy`.
    ///
    /// The traversal keeps an explicit worklist of `(node, offset, query
    /// position)` states and prunes any state already visited with an equal
    /// or better score, so admitting deviations never degenerates into an
    /// exponential walk. Distinct matched words are deduplicated keeping
    /// their best score.
    ///
    /// # Returns
    ///
    /// Matches sorted by descending score (ties by word), empty on a miss.
    pub fn lookup_tolerant<P>(&self, key: &str, policy: &P) -> Vec<LookupResult<'_, T>>
    where
        P: TolerancePolicy + ?Sized,
    {
        let input: Vec<char> = key.chars().collect();
        let mut matches: HashMap<String, (f32, &T)> = HashMap::new();
        let mut best: HashMap<(usize, usize, usize), f32> = HashMap::new();
        let mut work = vec![State {
            node: &self.root,
            offset: 0,
            pos: 0,
            score: 1.0,
            path: vec![],
        }];

        while let Some(state) = work.pop() {
            let state_id = (
                state.node as *const Node<T> as usize,
                state.offset,
                state.pos,
            );
            match best.get(&state_id) {
                Some(&seen) if seen >= state.score => continue,
                _ => {
                    best.insert(state_id, state.score);
                }
            }

            if state.offset < state.node.key.len() {
                self.step_within_fragment(&state, &input, policy, &mut work);
            } else if state.pos == input.len() {
                if let Some(value) = state.node.value.as_ref() {
                    let word: String = state.path.iter().collect();
                    match matches.get(word.as_str()) {
                        Some(&(seen, _)) if seen >= state.score => {}
                        _ => {
                            matches.insert(word, (state.score, value));
                        }
                    }
                }
            } else {
                self.step_at_fragment_end(&state, &input, policy, &mut work);
            }
        }

        let mut results: Vec<LookupResult<'_, T>> = matches
            .into_iter()
            .map(|(word, (score, value))| LookupResult { word, value, score })
            .collect();
        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.word.cmp(&b.word))
        });
        results
    }

    /// Advances one state whose node fragment is not fully consumed.
    fn step_within_fragment<'a, P>(
        &'a self,
        state: &State<'a, T>,
        input: &[char],
        policy: &P,
        work: &mut Vec<State<'a, T>>,
    ) where
        P: TolerancePolicy + ?Sized,
    {
        if state.pos >= input.len() {
            // Query exhausted mid-fragment: dead end. Trailing deviations
            // are not admitted.
            return;
        }
        let stored = state.node.key[state.offset];
        if input[state.pos] == stored {
            let mut path = state.path.clone();
            path.push(stored);
            work.push(State {
                node: state.node,
                offset: state.offset + 1,
                pos: state.pos + 1,
                score: state.score,
                path,
            });
        }
        for deviation in policy.pair_deviations(input, state.pos, stored) {
            match deviation {
                Deviation::ConsumeStored { penalty } => {
                    let mut path = state.path.clone();
                    path.push(stored);
                    work.push(State {
                        node: state.node,
                        offset: state.offset + 1,
                        pos: state.pos,
                        score: state.score * penalty,
                        path,
                    });
                }
                Deviation::Substitute { penalty } => {
                    let mut path = state.path.clone();
                    path.push(stored);
                    work.push(State {
                        node: state.node,
                        offset: state.offset + 1,
                        pos: state.pos + 1,
                        score: state.score * penalty,
                        path,
                    });
                }
            }
        }
        if let Some(penalty) = policy.skip_input(input, state.pos) {
            work.push(State {
                node: state.node,
                offset: state.offset,
                pos: state.pos + 1,
                score: state.score * penalty,
                path: state.path.clone(),
            });
        }
    }

    /// Advances one state sitting at the end of its node fragment with
    /// query input remaining: descends into children and optionally skips
    /// the current query character.
    fn step_at_fragment_end<'a, P>(
        &'a self,
        state: &State<'a, T>,
        input: &[char],
        policy: &P,
        work: &mut Vec<State<'a, T>>,
    ) where
        P: TolerancePolicy + ?Sized,
    {
        let current = input[state.pos];
        for child in &state.node.children {
            let first = child.key[0];
            if first == current
                || !policy.pair_deviations(input, state.pos, first).is_empty()
            {
                work.push(State {
                    node: child,
                    offset: 0,
                    pos: state.pos,
                    score: state.score,
                    path: state.path.clone(),
                });
            }
        }
        if let Some(penalty) = policy.skip_input(input, state.pos) {
            work.push(State {
                node: state.node,
                offset: state.offset,
                pos: state.pos + 1,
                score: state.score * penalty,
                path: state.path.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(words: &[&str]) -> RadixTree<u32> {
        let mut tree = RadixTree::new();
        for (i, w) in words.iter().enumerate() {
            tree.insert(w, i as u32);
        }
        tree
    }

    #[test]
    fn test_exact_match_scores_one() {
        let tree = tree_of(&["חלום"]);
        let policy = VowelLetterTolerance::default();
        let results = tree.lookup_tolerant("חלום", &policy);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "חלום");
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn test_missing_vowel_letter_matches_with_penalty() {
        // Stored with vav, queried without.
        let tree = tree_of(&["חלום"]);
        let policy = VowelLetterTolerance::default();
        let results = tree.lookup_tolerant("חלם", &policy);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "חלום");
        assert!(results[0].score < 1.0);
        assert!(results[0].score > 0.0);
    }

    #[test]
    fn test_extra_vowel_letter_matches_with_penalty() {
        // Stored without yud, queried with.
        let tree = tree_of(&["דבש"]);
        let policy = VowelLetterTolerance::default();
        let results = tree.lookup_tolerant("דביש", &policy);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "דבש");
        assert!(results[0].score < 1.0);
    }

    #[test]
    fn test_deviation_strictly_lowers_score() {
        let tree = tree_of(&["שלום", "שלם"]);
        let policy = VowelLetterTolerance::default();
        let results = tree.lookup_tolerant("שלום", &policy);
        // Both words are reachable; the exact one must rank first at 1.0.
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].word, "שלום");
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[1].word, "שלם");
        assert!(results[1].score < 1.0);
    }

    #[test]
    fn test_two_deviations_decay_multiplicatively() {
        let tree = tree_of(&["חיסכון"]);
        let policy = VowelLetterTolerance::default();
        let one = tree.lookup_tolerant("חסכון", &policy);
        let two = tree.lookup_tolerant("חסכן", &policy);
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 1);
        assert!(two[0].score < one[0].score);
        let p = VowelLetterTolerance::DEFAULT_PENALTY;
        assert!((one[0].score - p).abs() < 1e-6);
        assert!((two[0].score - p * p).abs() < 1e-6);
    }

    #[test]
    fn test_leading_character_is_not_tolerated() {
        // A leading vav is a prefix, not a spelling variant.
        let tree = tree_of(&["ורד"]);
        let policy = VowelLetterTolerance::default();
        assert!(tree.lookup_tolerant("רד", &policy).is_empty());
    }

    #[test]
    fn test_non_vowel_mismatch_is_a_miss() {
        let tree = tree_of(&["ספר"]);
        let policy = VowelLetterTolerance::default();
        assert!(tree.lookup_tolerant("סבר", &policy).is_empty());
        assert!(tree.lookup_tolerant("", &policy).is_empty());
    }
}
