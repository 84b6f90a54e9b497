//! Inter-annotator agreement metrics

use std::collections::HashMap;
use std::hash::Hash;

/// Cohen's Kappa over two aligned label sequences
///
/// Chance-corrected agreement: `(po - pe) / (1 - pe)`, where `po` is the
/// observed agreement rate and `pe` the agreement expected from each
/// annotator's marginal label distribution. Returns `None` for empty or
/// length-mismatched input. When expected agreement is total the sequences
/// are constant and identical, and the score is 1.0.
pub fn cohen_kappa<T: Eq + Hash>(first: &[T], second: &[T]) -> Option<f64> {
    if first.is_empty() || first.len() != second.len() {
        return None;
    }
    let n = first.len() as f64;

    let observed = first
        .iter()
        .zip(second)
        .filter(|(a, b)| a == b)
        .count() as f64
        / n;

    let mut first_counts: HashMap<&T, usize> = HashMap::new();
    for label in first {
        *first_counts.entry(label).or_default() += 1;
    }
    let mut second_counts: HashMap<&T, usize> = HashMap::new();
    for label in second {
        *second_counts.entry(label).or_default() += 1;
    }

    let expected: f64 = first_counts
        .iter()
        .filter_map(|(label, count)| {
            second_counts
                .get(label)
                .map(|other| (*count as f64 / n) * (*other as f64 / n))
        })
        .sum();

    if (1.0 - expected).abs() < f64::EPSILON {
        return Some(1.0);
    }
    Some((observed - expected) / (1.0 - expected))
}

/// Mean fraction of judgments equal to 1 across two annotators
///
/// Returns `None` when either sequence is empty.
pub fn mean_positive_rate(first: &[i64], second: &[i64]) -> Option<f64> {
    if first.is_empty() || second.is_empty() {
        return None;
    }
    let rate = |labels: &[i64]| {
        labels.iter().filter(|&&v| v == 1).count() as f64 / labels.len() as f64
    };
    Some((rate(first) + rate(second)) / 2.0)
}
