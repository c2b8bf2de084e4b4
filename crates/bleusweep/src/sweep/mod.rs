//! # Boundary Sweep
//!
//! * [`BoundaryAccumulator`] - per-sentence [`crate::stats::BleuStats`] to
//!   boundary-keyed [`BoundaryDelta`]s.
//! * [`IntervalOptimizer`] - merge, sort and sweep the deltas of all
//!   sentences; find the best [`Interval`].
//! * [`BleuTotals`] - running corpus totals and the BLEU formula.

mod bleu_totals;
mod boundary;
mod interval;
mod interval_optimizer;

#[doc(inline)]
pub use bleu_totals::BleuTotals;
#[doc(inline)]
pub use boundary::{BoundaryAccumulator, BoundaryDelta};
#[doc(inline)]
pub use interval::{Interval, ScoredInterval};
#[doc(inline)]
pub use interval_optimizer::IntervalOptimizer;
