//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel statistics collection.

mod rayon_collector;

pub use rayon_collector::ParallelRayonStatsCollector;
