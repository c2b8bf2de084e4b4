//! # Interval Optimizer
//!
//! Sorts the boundary deltas of all sentences and sweeps them left to right,
//! keeping running corpus totals. Between two consecutive distinct boundaries
//! the totals, and so the corpus BLEU, are constant; the best such interval
//! wins.

use crate::{
    errors::{BSResult, BleuSweepError},
    options::BleuOptions,
    sweep::{BleuTotals, BoundaryDelta, Interval, ScoredInterval},
};

/// Finds the line-search interval with the best corpus BLEU.
#[derive(Debug, Clone)]
pub struct IntervalOptimizer {
    options: BleuOptions,
}

impl IntervalOptimizer {
    /// Create a new optimizer.
    pub fn new(options: BleuOptions) -> Self {
        Self { options }
    }

    /// The optimizer options.
    pub fn options(&self) -> &BleuOptions {
        &self.options
    }

    /// Validate and stable-sort `deltas` by boundary.
    fn sort_deltas(
        &self,
        deltas: &mut [BoundaryDelta],
    ) -> BSResult<()> {
        if deltas.is_empty() {
            return Err(BleuSweepError::EmptyInput);
        }
        let expected = self.options.delta_width();
        for (index, delta) in deltas.iter().enumerate() {
            if delta.deltas.len() != expected {
                return Err(BleuSweepError::OrderMismatch {
                    expected,
                    actual: delta.deltas.len(),
                });
            }
            if delta.boundary.is_nan() {
                return Err(BleuSweepError::NanBoundary { index });
            }
        }
        deltas.sort_by(|a, b| a.boundary.total_cmp(&b.boundary));
        Ok(())
    }

    /// Sweep sorted deltas.
    ///
    /// `on_interval` sees every closed interval ``[previous, boundary)``
    /// before the entries at ``boundary`` are folded in, along with the number
    /// of entries folded in so far. Entries sharing a boundary are merged.
    ///
    /// Returns the last boundary and the final totals, which hold on
    /// ``[last, +inf)``.
    fn sweep<F>(
        &self,
        sorted: &[BoundaryDelta],
        reference_length: usize,
        mut on_interval: F,
    ) -> (f64, BleuTotals)
    where
        F: FnMut(Interval, &BleuTotals, usize),
    {
        let mut totals = BleuTotals::new(self.options);
        let mut previous = f64::NEG_INFINITY;

        for (applied, entry) in sorted.iter().enumerate() {
            if entry.boundary != previous {
                let score = totals.score(reference_length);
                on_interval(
                    Interval::new(previous, entry.boundary, score),
                    &totals,
                    applied,
                );
                previous = entry.boundary;
            }
            totals.apply(entry);
        }

        (previous, totals)
    }

    /// Find the best-scoring interval.
    ///
    /// Sorts `deltas` in place. On equal scores the leftmost interval wins,
    /// except that the final ``[last, +inf)`` interval wins all ties.
    ///
    /// ## Arguments
    /// * `deltas` - the boundary deltas of all sentences, in any order.
    /// * `reference_length` - the summed length of all references.
    ///
    /// ## Returns
    /// The best interval, or an error for empty or malformed input.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, deltas)))]
    pub fn optimize(
        &self,
        deltas: &mut [BoundaryDelta],
        reference_length: usize,
    ) -> BSResult<Interval> {
        self.sort_deltas(deltas)?;
        log::debug!("considering {} line intersections", deltas.len());

        let mut best = Interval::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut scored = 0;

        let (last, totals) = self.sweep(deltas, reference_length, |interval, _, _| {
            scored += 1;
            if interval.score > best.score {
                best = interval;
            }
        });

        let score = totals.score(reference_length);
        if score >= best.score {
            best = Interval::new(last, f64::INFINITY, score);
        }
        debug_assert!(best.score > f64::NEG_INFINITY);

        log::debug!(
            "best interval [{} - {}) score: {} ({} intervals scored)",
            best.left,
            best.right,
            best.score,
            scored + 1
        );
        Ok(best)
    }

    /// Score every interval of the sweep.
    ///
    /// Sorts `deltas` in place. The last entry is always the unbounded
    /// ``[last, +inf)`` interval.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, deltas)))]
    pub fn profile(
        &self,
        deltas: &mut [BoundaryDelta],
        reference_length: usize,
    ) -> BSResult<Vec<ScoredInterval>> {
        self.sort_deltas(deltas)?;

        let mut intervals = Vec::new();
        let (last, totals) = self.sweep(deltas, reference_length, |interval, totals, applied| {
            intervals.push(ScoredInterval {
                interval,
                totals: totals.clone(),
                applied,
            });
        });

        let score = totals.score(reference_length);
        intervals.push(ScoredInterval {
            interval: Interval::new(last, f64::INFINITY, score),
            totals,
            applied: deltas.len(),
        });
        Ok(intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        stats::{BleuStats, Candidate, collect_bleu_stats},
        sweep::BoundaryAccumulator,
        types::CountDelta,
    };

    const NEG_INF: f64 = f64::NEG_INFINITY;
    const INF: f64 = f64::INFINITY;

    fn deltas_of(
        reference: &[&'static str],
        candidates: &[(Vec<&'static str>, f64)],
        options: BleuOptions,
    ) -> Vec<BoundaryDelta> {
        let candidates: Vec<Candidate<&'static str>> = candidates
            .iter()
            .cloned()
            .map(Candidate::from)
            .collect();
        let stats = collect_bleu_stats(reference, &candidates, options);
        BoundaryAccumulator::new(options).accumulate(&stats)
    }

    #[test]
    fn test_exact_match() {
        let options = BleuOptions::default();
        let mut deltas = deltas_of(&["A", "B", "C", "D"], &[(vec!["A", "B", "C", "D"], 0.0)], options);

        let best = IntervalOptimizer::new(options)
            .optimize(&mut deltas, 4)
            .unwrap();
        assert_eq!(best, Interval::new(0.0, INF, 1.0));
    }

    #[test]
    fn test_zero_match() {
        let options = BleuOptions::default();
        let mut deltas = deltas_of(&["A", "B", "C", "D"], &[(vec!["E", "F", "G", "H"], 0.0)], options);

        let optimizer = IntervalOptimizer::new(options);
        let best = optimizer.optimize(&mut deltas, 4).unwrap();
        assert_eq!(best.score, 0.0);

        let profile = optimizer.profile(&mut deltas, 4).unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile[1].interval, Interval::new(0.0, INF, 0.0));
        assert_eq!(profile[1].totals.matches(1), 0);
    }

    #[test]
    fn test_picks_middle_interval() {
        let options = BleuOptions::new(2);
        let mut deltas = deltas_of(
            &["a", "b", "c"],
            &[
                (vec!["x", "y", "z"], NEG_INF),
                (vec!["a", "b", "c"], -1.0),
                (vec!["a", "b"], 1.0),
                (vec!["z"], 2.0),
            ],
            options,
        );

        let best = IntervalOptimizer::new(options)
            .optimize(&mut deltas, 3)
            .unwrap();
        assert_eq!(best, Interval::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_only_parallel_lines() {
        // Every candidate holds on the whole line.
        let options = BleuOptions::new(1);
        let mut deltas = deltas_of(&["a", "b"], &[(vec!["a", "c"], NEG_INF)], options);

        let optimizer = IntervalOptimizer::new(options);
        let best = optimizer.optimize(&mut deltas, 2).unwrap();
        assert_eq!((best.left, best.right), (NEG_INF, INF));
        assert!((best.score - 0.5).abs() < 1e-12, "{best:?}");

        let profile = optimizer.profile(&mut deltas, 2).unwrap();
        assert_eq!(profile.len(), 1);
        assert_eq!(profile[0].applied, 1);
    }

    #[test]
    fn test_two_sentences_merge_boundaries() {
        let options = BleuOptions::new(2);
        let first = deltas_of(
            &["a", "b", "c"],
            &[(vec!["a", "x", "c"], NEG_INF), (vec!["a", "b", "c"], 0.5)],
            options,
        );
        let second = deltas_of(
            &["d", "e"],
            &[(vec!["d", "e"], NEG_INF), (vec!["d", "d"], 0.5)],
            options,
        );

        let mut deltas: Vec<BoundaryDelta> = first.iter().chain(&second).cloned().collect();
        let optimizer = IntervalOptimizer::new(options);
        let profile = optimizer.profile(&mut deltas, 5).unwrap();

        // Two distinct boundaries, not four entries.
        let boundaries: Vec<(f64, f64)> = profile
            .iter()
            .map(|s| (s.interval.left, s.interval.right))
            .collect();
        assert_eq!(boundaries, vec![(NEG_INF, 0.5), (0.5, INF)]);

        // Left of 0.5: both -inf candidates.
        assert_eq!(profile[0].applied, 2);
        assert_eq!(profile[0].totals.values(), &[4, 1, 5, 3]);

        // Crossing 0.5 adds the sum of both sentences' deltas there.
        let crossing: Vec<CountDelta> = (0..4)
            .map(|i| first[1].deltas[i] + second[1].deltas[i])
            .collect();
        let expected: Vec<CountDelta> = (0..4)
            .map(|i| profile[0].totals.values()[i] + crossing[i])
            .collect();
        assert_eq!(profile[1].applied, 4);
        assert_eq!(profile[1].totals.values(), expected.as_slice());
        assert_eq!(profile[1].totals.values(), &[4, 2, 5, 3]);
    }

    #[test]
    fn test_equal_boundaries_summed_before_scoring() {
        // Each entry alone would score differently; only the sum is scored.
        let options = BleuOptions::new(1);
        let mut deltas = vec![
            BoundaryDelta::new(1.0, vec![1, 2]),
            BoundaryDelta::new(0.0, vec![0, 2]),
            BoundaryDelta::new(1.0, vec![1, 0]),
        ];
        let profile = IntervalOptimizer::new(options)
            .profile(&mut deltas, 0)
            .unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile[0].interval, Interval::new(NEG_INF, 0.0, 0.0));
        assert_eq!(profile[1].interval, Interval::new(0.0, 1.0, 0.0));
        assert_eq!(
            (profile[2].interval.left, profile[2].interval.right),
            (1.0, INF)
        );
        assert!((profile[2].interval.score - 0.5).abs() < 1e-12);
        assert_eq!(profile[2].totals.values(), &[2, 4]);
    }

    #[test]
    fn test_ties() {
        let options = BleuOptions::new(1);
        let optimizer = IntervalOptimizer::new(options);

        // Two inner intervals tie: the leftmost wins.
        let mut deltas = vec![
            BoundaryDelta::new(NEG_INF, vec![1, 1]),
            BoundaryDelta::new(0.0, vec![0, 0]),
            BoundaryDelta::new(1.0, vec![-1, 1]),
        ];
        assert_eq!(
            optimizer.optimize(&mut deltas, 0).unwrap(),
            Interval::new(NEG_INF, 0.0, 1.0)
        );

        // The final interval wins a tie.
        let mut deltas = vec![
            BoundaryDelta::new(NEG_INF, vec![1, 1]),
            BoundaryDelta::new(1.0, vec![0, 0]),
        ];
        assert_eq!(
            optimizer.optimize(&mut deltas, 0).unwrap(),
            Interval::new(1.0, INF, 1.0)
        );
    }

    #[test]
    fn test_errors() {
        let optimizer = IntervalOptimizer::new(BleuOptions::new(2));

        assert_eq!(
            optimizer.optimize(&mut [], 1),
            Err(BleuSweepError::EmptyInput)
        );
        assert_eq!(
            optimizer
                .optimize(&mut [BoundaryDelta::new(0.0, vec![1, 1])], 1)
                .unwrap_err(),
            BleuSweepError::OrderMismatch {
                expected: 4,
                actual: 2
            }
        );
        assert_eq!(
            optimizer
                .profile(
                    &mut [
                        BoundaryDelta::new(0.0, vec![0; 4]),
                        BoundaryDelta::new(f64::NAN, vec![0; 4]),
                    ],
                    1
                )
                .unwrap_err(),
            BleuSweepError::NanBoundary { index: 1 }
        );
    }

    #[test]
    fn test_explicit_length_slot_is_redundant() {
        // The unigram possible total tracks the summed candidate length.
        let options = BleuOptions::default();
        let stats = vec![
            BleuStats::new(vec![0, 0, 0, 0], 3, NEG_INF),
            BleuStats::new(vec![0, 0, 0, 0], 0, -2.0),
            BleuStats::new(vec![0, 0, 0, 0], 7, 1.0),
        ];
        let mut deltas = BoundaryAccumulator::new(options).accumulate(&stats);
        let profile = IntervalOptimizer::new(options)
            .profile(&mut deltas, 0)
            .unwrap();

        let lengths: Vec<CountDelta> = profile
            .iter()
            .map(|s| s.totals.hypothesis_length())
            .collect();
        assert_eq!(lengths, vec![3, 0, 7]);
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(500))]

        /// The sweep agrees with scoring every interval from scratch.
        #[test]
        fn sweep_matches_brute_force(
            sentences in proptest::collection::vec(
                (
                    proptest::collection::vec(0..4u8, 0..6),
                    proptest::collection::vec(
                        (proptest::collection::vec(0..4u8, 0..6), -3..3i8),
                        1..4,
                    ),
                ),
                1..4,
            ),
        ) {
            let options = BleuOptions::new(2);
            let accumulator = BoundaryAccumulator::new(options);

            let mut reference_length = 0;
            let mut deltas = Vec::new();
            for (reference, candidates) in &sentences {
                reference_length += reference.len();
                let candidates: Vec<Candidate<u8>> = candidates
                    .iter()
                    .map(|(phrase, boundary)| Candidate::new(phrase.clone(), *boundary as f64 / 2.0))
                    .collect();
                let stats = collect_bleu_stats(reference, &candidates, options);
                accumulator.accumulate_into(&stats, &mut deltas);
            }

            // Brute force: every interval between distinct boundaries,
            // with totals summed from scratch.
            let mut edges: Vec<f64> = deltas.iter().map(|d| d.boundary).collect();
            edges.sort_by(f64::total_cmp);
            edges.dedup();
            let mut lefts = vec![f64::NEG_INFINITY];
            lefts.extend(edges.iter().copied().filter(|b| *b != f64::NEG_INFINITY));

            let score_at = |left: f64| {
                let mut totals = BleuTotals::new(options);
                for delta in deltas.iter().filter(|d| d.boundary <= left) {
                    totals.apply(delta);
                }
                totals.score(reference_length)
            };
            let brute_best = lefts
                .iter()
                .map(|left| score_at(*left))
                .fold(f64::NEG_INFINITY, f64::max);

            let best = IntervalOptimizer::new(options)
                .optimize(&mut deltas.clone(), reference_length)
                .unwrap();

            proptest::prop_assert_eq!(best.score, brute_best);
            proptest::prop_assert_eq!(score_at(best.left), best.score);
        }

        /// Each scored interval folds in a strictly longer prefix of the
        /// sorted entries, and its totals are exactly that prefix sum.
        #[test]
        fn sweep_totals_are_prefix_sums(
            entries in proptest::collection::vec((-4..4i8, 0..3i64, 0..3i64), 1..20),
        ) {
            let options = BleuOptions::new(1);
            let mut deltas: Vec<BoundaryDelta> = entries
                .iter()
                .map(|(b, m, p)| BoundaryDelta::new(*b as f64, vec![*m, *m + *p]))
                .collect();

            let profile = IntervalOptimizer::new(options)
                .profile(&mut deltas, 3)
                .unwrap();

            let mut last_applied = None;
            for scored in &profile {
                if let Some(last) = last_applied {
                    proptest::prop_assert!(scored.applied > last);
                }
                last_applied = Some(scored.applied);

                let mut prefix = BleuTotals::new(options);
                for delta in &deltas[..scored.applied] {
                    prefix.apply(delta);
                }
                proptest::prop_assert_eq!(&scored.totals, &prefix);
            }
            proptest::prop_assert_eq!(last_applied, Some(deltas.len()));
        }
    }
}
