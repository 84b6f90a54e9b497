//! Pure metric functions for the tastebench evaluation pipelines
//!
//! Three metric families live here:
//!
//! - **Set overlap**: precision, recall, and F1 over reference/test sets,
//!   plus the symmetric-difference diagnostics
//! - **Ranking**: recall against a rank-restricted reference
//! - **Agreement**: Cohen's Kappa and the mean positive-judgment rate
//!
//! Metrics that are undefined for their input (an empty set, mismatched
//! sequences) return `None` rather than a made-up value; callers decide
//! whether that is an error.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod agreement;
pub mod ranking;
pub mod sets;

pub use agreement::{cohen_kappa, mean_positive_rate};
pub use ranking::top_k_recall;
pub use sets::{f_measure, precision, recall, set_differences, SetDifferences};
