//! # Intervals

use crate::sweep::BleuTotals;

/// A half-open interval ``[left, right)`` of the line-search step, and the
/// corpus BLEU that holds on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Left edge; may be ``-inf``.
    pub left: f64,

    /// Right edge; may be ``+inf``.
    pub right: f64,

    /// Corpus BLEU on the interval.
    pub score: f64,
}

impl Interval {
    /// Create a new interval.
    pub fn new(
        left: f64,
        right: f64,
        score: f64,
    ) -> Self {
        Self { left, right, score }
    }

    /// Does the interval contain `step`?
    pub fn contains(
        &self,
        step: f64,
    ) -> bool {
        self.left <= step && step < self.right
    }

    /// Are both edges finite?
    pub fn is_bounded(&self) -> bool {
        self.left.is_finite() && self.right.is_finite()
    }
}

/// One interval of a sweep, with the totals that produced its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredInterval {
    /// The interval and its score.
    pub interval: Interval,

    /// The corpus totals on the interval.
    pub totals: BleuTotals,

    /// How many sorted boundary entries were folded into `totals`.
    pub applied: usize,
}
