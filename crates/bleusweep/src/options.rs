//! # BLEU Options
//!
//! The BLEU order is the single configuration value of the numeric core;
//! every component is constructed from a [`BleuOptions`].

use crate::{
    errors::{BSResult, BleuSweepError},
    line_search::LineSearch,
    stats::SerialStatsCollector,
    sweep::{BoundaryAccumulator, IntervalOptimizer},
};

/// The conventional BLEU order.
pub const DEFAULT_BLEU_ORDER: usize = 4;

/// Validates and returns a BLEU order.
pub fn try_bleu_order(order: usize) -> BSResult<usize> {
    if order == 0 {
        Err(BleuSweepError::InvalidOrder { order })
    } else {
        Ok(order)
    }
}

/// Validates and returns a BLEU order, panicking if it is invalid.
pub fn expect_bleu_order(order: usize) -> usize {
    match try_bleu_order(order) {
        Ok(order) => order,
        Err(err) => panic!("{err}"),
    }
}

/// Options shared by all BLEU sweep components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BleuOptions {
    /// The maximum n-gram order; ``>= 1``.
    order: usize,
}

impl Default for BleuOptions {
    fn default() -> Self {
        Self {
            order: DEFAULT_BLEU_ORDER,
        }
    }
}

impl BleuOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `order` - The maximum n-gram order.
    ///
    /// ## Panics
    /// Panics if `order` is 0.
    pub fn new(order: usize) -> Self {
        Self {
            order: expect_bleu_order(order),
        }
    }

    /// Create new options, rejecting an invalid order.
    pub fn try_new(order: usize) -> BSResult<Self> {
        Ok(Self {
            order: try_bleu_order(order)?,
        })
    }

    /// The maximum n-gram order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The width of a delta / totals vector: ``2 * order``.
    pub fn delta_width(&self) -> usize {
        2 * self.order
    }

    /// Sets the maximum n-gram order.
    ///
    /// ## Panics
    /// Panics if `order` is 0.
    pub fn with_order(
        self,
        order: usize,
    ) -> Self {
        Self {
            order: expect_bleu_order(order),
        }
    }

    /// Initializes a [`BoundaryAccumulator`] from these options.
    pub fn init_accumulator(self) -> BoundaryAccumulator {
        BoundaryAccumulator::new(self)
    }

    /// Initializes an [`IntervalOptimizer`] from these options.
    pub fn init_optimizer(self) -> IntervalOptimizer {
        IntervalOptimizer::new(self)
    }

    /// Initializes a serial [`LineSearch`] from these options.
    pub fn init_line_search(self) -> LineSearch<SerialStatsCollector> {
        LineSearch::new(SerialStatsCollector::new(self))
    }
}
