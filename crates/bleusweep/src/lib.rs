//! # `bleusweep` BLEU Line Search
//!
//! The numerical core of a MERT-style line search: given, for every sentence,
//! a reference and the decoder's candidates along a search line (each with
//! the step at which it becomes the best output), find the interval of the
//! step with the best corpus BLEU.
//!
//! The pipeline:
//! * [`ngrams`] - n-gram prefix trees, intersected to clipped match counts.
//! * [`stats`] - per-candidate [`stats::BleuStats`].
//! * [`sweep`] - boundary deltas, merged and swept for the best [`sweep::Interval`].
//! * [`line_search`] - all of the above over a corpus.
//!
//! ```rust
//! use bleusweep::{BleuOptions, SentenceCandidates};
//!
//! let sentences = vec![
//!     SentenceCandidates::new(vec![1u32, 2, 3, 4])
//!         .with_candidate(vec![1u32, 2, 3, 4], f64::NEG_INFINITY)
//!         .with_candidate(vec![4u32, 3, 2, 1], 1.5),
//!     SentenceCandidates::new(vec![5u32, 6, 7, 8])
//!         .with_candidate(vec![5u32, 6, 7, 9], f64::NEG_INFINITY)
//!         .with_candidate(vec![5u32, 6, 7, 8], -0.5),
//! ];
//!
//! let result = BleuOptions::default()
//!     .init_line_search()
//!     .optimize(&sentences)
//!     .unwrap();
//!
//! assert_eq!((result.interval.left, result.interval.right), (-0.5, 1.5));
//! assert_eq!(result.interval.score, 1.0);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod line_search;
pub mod ngrams;
pub mod options;
pub mod stats;
pub mod sweep;
pub mod types;

#[doc(inline)]
pub use errors::{BSResult, BleuSweepError};
#[doc(inline)]
pub use line_search::{LineSearch, LineSearchResult};
#[doc(inline)]
pub use options::{BleuOptions, DEFAULT_BLEU_ORDER};
#[doc(inline)]
pub use stats::{BleuStats, Candidate, SentenceCandidates};
#[doc(inline)]
pub use sweep::Interval;
