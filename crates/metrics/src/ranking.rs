//! Recall against a rank-restricted reference

use crate::sets::recall;
use std::collections::HashSet;
use tastebench_core::{SubstitutePair, SubstituteRanking};

/// Recall of the test pairs against the reference restricted to each
/// ingredient's `k` highest-ranked substitutes
///
/// Returns `None` when the restricted reference is empty.
pub fn top_k_recall(
    ranking: &SubstituteRanking,
    test: &HashSet<SubstitutePair>,
    k: usize,
) -> Option<f64> {
    recall(&ranking.top_k_pairs(k), test)
}
