//! # BLEU Statistics Types

use crate::types::{NGramCount, WordType};

/// The number of n-grams of order `n` in a phrase of `length` words.
///
/// ``max(length - n + 1, 0)``; `n` is 1-based.
pub fn possible_ngrams(
    n: usize,
    length: usize,
) -> usize {
    debug_assert!(n >= 1, "n-gram orders are 1-based");
    (length + 1).saturating_sub(n)
}

/// A candidate translation and the line-search step at which it becomes
/// the decoder's best output.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<W: WordType> {
    /// The candidate phrase; may be empty.
    pub phrase: Vec<W>,

    /// The left boundary of the candidate's validity interval.
    pub left_boundary: f64,
}

impl<W: WordType> Candidate<W> {
    /// Create a new candidate.
    pub fn new<P: Into<Vec<W>>>(
        phrase: P,
        left_boundary: f64,
    ) -> Self {
        Self {
            phrase: phrase.into(),
            left_boundary,
        }
    }
}

impl<W: WordType, P: Into<Vec<W>>> From<(P, f64)> for Candidate<W> {
    fn from((phrase, left_boundary): (P, f64)) -> Self {
        Self::new(phrase, left_boundary)
    }
}

/// One sentence of a line search: its reference and the decoder's candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceCandidates<W: WordType> {
    /// The reference translation.
    pub reference: Vec<W>,

    /// The candidates along the search line.
    pub candidates: Vec<Candidate<W>>,
}

impl<W: WordType> SentenceCandidates<W> {
    /// Create a sentence with no candidates.
    pub fn new<P: Into<Vec<W>>>(reference: P) -> Self {
        Self {
            reference: reference.into(),
            candidates: Vec::new(),
        }
    }

    /// Append a candidate.
    pub fn with_candidate<P: Into<Vec<W>>>(
        mut self,
        phrase: P,
        left_boundary: f64,
    ) -> Self {
        self.candidates.push(Candidate::new(phrase, left_boundary));
        self
    }
}

/// Clipped n-gram statistics of one candidate against its reference.
#[derive(Debug, Clone, PartialEq)]
pub struct BleuStats {
    counts: Vec<NGramCount>,
    length: usize,
    left_boundary: f64,
}

impl BleuStats {
    /// Create new stats.
    ///
    /// ## Arguments
    /// * `counts` - ``counts[n - 1]`` is the clipped match count of order ``n``.
    /// * `length` - the candidate length in words.
    /// * `left_boundary` - where the candidate becomes the best output.
    pub fn new(
        counts: Vec<NGramCount>,
        length: usize,
        left_boundary: f64,
    ) -> Self {
        Self {
            counts,
            length,
            left_boundary,
        }
    }

    /// The BLEU order these stats were computed with.
    pub fn order(&self) -> usize {
        self.counts.len()
    }

    /// Clipped match counts; ``counts()[n - 1]`` is order ``n``.
    pub fn counts(&self) -> &[NGramCount] {
        &self.counts
    }

    /// The candidate length in words.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The left boundary of the candidate's validity interval.
    pub fn left_boundary(&self) -> f64 {
        self.left_boundary
    }

    /// The number of candidate n-grams of order `n` (1-based).
    pub fn possible(
        &self,
        n: usize,
    ) -> usize {
        possible_ngrams(n, self.length)
    }
}
