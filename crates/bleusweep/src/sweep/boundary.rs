//! # Boundary Deltas
//!
//! Each sentence's candidates are turned into differences against the
//! previous candidate of the same sentence. Summing the differences of all
//! sentences up to a boundary reproduces the corpus totals there, so the
//! whole corpus can be merged with one sort and one sweep.

use crate::{
    options::BleuOptions,
    stats::BleuStats,
    types::CountDelta,
};

/// The change of the corpus totals when the line crosses `boundary`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryDelta {
    /// The line-search step at which the change applies.
    pub boundary: f64,

    /// ``deltas[n - 1]``: change of clipped matches of order ``n``;
    /// ``deltas[order + n - 1]``: change of possible n-grams of order ``n``.
    pub deltas: Vec<CountDelta>,
}

impl BoundaryDelta {
    /// Create a new delta.
    pub fn new(
        boundary: f64,
        deltas: Vec<CountDelta>,
    ) -> Self {
        Self { boundary, deltas }
    }
}

/// Converts a sentence's [`BleuStats`] into [`BoundaryDelta`]s.
#[derive(Debug, Clone)]
pub struct BoundaryAccumulator {
    options: BleuOptions,
}

impl BoundaryAccumulator {
    /// Create a new accumulator.
    pub fn new(options: BleuOptions) -> Self {
        Self { options }
    }

    /// The accumulator options.
    pub fn options(&self) -> &BleuOptions {
        &self.options
    }

    /// One delta per stat, in input order.
    ///
    /// `stats` must all belong to one sentence.
    pub fn accumulate(
        &self,
        stats: &[BleuStats],
    ) -> Vec<BoundaryDelta> {
        let mut deltas = Vec::with_capacity(stats.len());
        self.accumulate_into(stats, &mut deltas);
        deltas
    }

    /// Append one delta per stat to `deltas`, in input order.
    ///
    /// The running previous totals start at zero on every call; so each
    /// call must receive exactly one sentence's stats.
    ///
    /// ## Panics
    /// Panics if a stat was computed with a different order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn accumulate_into(
        &self,
        stats: &[BleuStats],
        deltas: &mut Vec<BoundaryDelta>,
    ) {
        let order = self.options.order();
        let mut previous: Vec<CountDelta> = vec![0; self.options.delta_width()];

        for stat in stats {
            assert_eq!(
                stat.order(),
                order,
                "stats order does not match accumulator order"
            );

            let mut diffs = vec![0; self.options.delta_width()];
            for n in 1..=order {
                let matches = stat.counts()[n - 1] as CountDelta;
                let possible = stat.possible(n) as CountDelta;

                diffs[n - 1] = matches - previous[n - 1];
                diffs[order + n - 1] = possible - previous[order + n - 1];

                previous[n - 1] = matches;
                previous[order + n - 1] = possible;
            }
            deltas.push(BoundaryDelta::new(stat.left_boundary(), diffs));
        }
    }
}
