//! # Corpus BLEU Totals

use crate::{
    options::BleuOptions,
    sweep::BoundaryDelta,
    types::CountDelta,
};

/// Running corpus totals of clipped matches and possible n-grams.
///
/// Layout matches [`BoundaryDelta::deltas`]: ``values[n - 1]`` holds the
/// clipped matches of order ``n``, ``values[order + n - 1]`` the possible
/// n-grams of order ``n``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BleuTotals {
    order: usize,
    values: Vec<CountDelta>,
}

impl BleuTotals {
    /// All-zero totals.
    pub fn new(options: BleuOptions) -> Self {
        Self {
            order: options.order(),
            values: vec![0; options.delta_width()],
        }
    }

    /// Totals from an explicit ``2 * order`` vector.
    ///
    /// ## Panics
    /// Panics if `values` is not ``2 * order`` long.
    pub fn from_values(
        options: BleuOptions,
        values: Vec<CountDelta>,
    ) -> Self {
        assert_eq!(values.len(), options.delta_width(), "totals width");
        Self {
            order: options.order(),
            values,
        }
    }

    /// The BLEU order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The raw ``2 * order`` totals.
    pub fn values(&self) -> &[CountDelta] {
        &self.values
    }

    /// Clipped matches of order `n` (1-based).
    pub fn matches(
        &self,
        n: usize,
    ) -> CountDelta {
        self.values[n - 1]
    }

    /// Possible n-grams of order `n` (1-based).
    pub fn possible(
        &self,
        n: usize,
    ) -> CountDelta {
        self.values[self.order + n - 1]
    }

    /// Total hypothesis length.
    ///
    /// Every word is a unigram, so this is the possible unigram total.
    pub fn hypothesis_length(&self) -> CountDelta {
        self.possible(1)
    }

    /// Fold a delta into the totals.
    pub fn apply(
        &mut self,
        delta: &BoundaryDelta,
    ) {
        debug_assert_eq!(delta.deltas.len(), self.values.len());
        for (total, d) in self.values.iter_mut().zip(&delta.deltas) {
            *total += *d;
        }
    }

    /// Corpus BLEU of these totals.
    ///
    /// Zero when any order has no clipped match. Otherwise the geometric mean
    /// of the n-gram precisions, times ``exp(1 - ref / hyp)`` when the
    /// hypothesis is shorter than the reference.
    pub fn score(
        &self,
        reference_length: usize,
    ) -> f64 {
        let mut log_bleu = 0.0;
        for n in 1..=self.order {
            let matches = self.matches(n);
            if matches <= 0 {
                return 0.0;
            }
            log_bleu += (matches as f64).ln() - (self.possible(n) as f64).ln();
        }
        log_bleu /= self.order as f64;

        // matches(1) > 0 here, so the length is positive.
        let hypothesis_length = self.hypothesis_length();
        if hypothesis_length < reference_length as CountDelta {
            log_bleu += 1.0 - reference_length as f64 / hypothesis_length as f64;
        }
        log_bleu.exp()
    }
}
