//! Set-overlap metrics over a reference set and a test set

use std::collections::HashSet;
use std::hash::Hash;

/// Fraction of test items present in the reference set
///
/// Returns `None` when the test set is empty, since the metric is undefined
/// there.
pub fn precision<T: Eq + Hash>(reference: &HashSet<T>, test: &HashSet<T>) -> Option<f64> {
    if test.is_empty() {
        return None;
    }
    Some(reference.intersection(test).count() as f64 / test.len() as f64)
}

/// Fraction of reference items present in the test set
///
/// Returns `None` when the reference set is empty.
pub fn recall<T: Eq + Hash>(reference: &HashSet<T>, test: &HashSet<T>) -> Option<f64> {
    if reference.is_empty() {
        return None;
    }
    Some(reference.intersection(test).count() as f64 / reference.len() as f64)
}

/// Harmonic mean of precision and recall
///
/// Zero when the sets are disjoint, `None` when either underlying metric
/// is undefined.
pub fn f_measure<T: Eq + Hash>(reference: &HashSet<T>, test: &HashSet<T>) -> Option<f64> {
    let p = precision(reference, test)?;
    let r = recall(reference, test)?;
    if p + r == 0.0 {
        return Some(0.0);
    }
    Some(2.0 * p * r / (p + r))
}

/// Disjoint partition of the symmetric difference between a reference set
/// and a test set, each side sorted for reproducible reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDifferences<'a, T> {
    /// Reference items the test set never produced
    pub missing_from_test: Vec<&'a T>,

    /// Test items with no counterpart in the reference
    pub unexpected_in_test: Vec<&'a T>,
}

/// Splits the symmetric difference of two sets into its two sides
pub fn set_differences<'a, T: Eq + Hash + Ord>(
    reference: &'a HashSet<T>,
    test: &'a HashSet<T>,
) -> SetDifferences<'a, T> {
    let mut missing_from_test: Vec<&T> = reference.difference(test).collect();
    missing_from_test.sort();
    let mut unexpected_in_test: Vec<&T> = test.difference(reference).collect();
    unexpected_in_test.sort();
    SetDifferences {
        missing_from_test,
        unexpected_in_test,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_precision_and_recall_half_overlap() {
        let reference = set(&["salt:pepper", "butter:oil"]);
        let test = set(&["salt:pepper", "butter:margarine"]);

        assert!((precision(&reference, &test).unwrap() - 0.5).abs() < 1e-9);
        assert!((recall(&reference, &test).unwrap() - 0.5).abs() < 1e-9);
        assert!((f_measure(&reference, &test).unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_precision_full_overlap() {
        let reference = set(&["a", "b", "c"]);
        let test = set(&["a", "b"]);

        assert_eq!(precision(&reference, &test), Some(1.0));
        assert!((recall(&reference, &test).unwrap() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_stay_in_unit_interval() {
        let reference = set(&["a", "b", "c", "d"]);
        let test = set(&["c", "d", "e", "f", "g"]);

        for value in [
            precision(&reference, &test).unwrap(),
            recall(&reference, &test).unwrap(),
            f_measure(&reference, &test).unwrap(),
        ] {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_disjoint_sets_have_zero_f_measure() {
        let reference = set(&["a", "b"]);
        let test = set(&["c", "d"]);

        assert_eq!(precision(&reference, &test), Some(0.0));
        assert_eq!(recall(&reference, &test), Some(0.0));
        assert_eq!(f_measure(&reference, &test), Some(0.0));
    }

    #[test]
    fn test_empty_sets_are_undefined() {
        let empty: HashSet<String> = HashSet::new();
        let nonempty = set(&["a"]);

        assert_eq!(precision(&nonempty, &empty), None);
        assert_eq!(recall(&empty, &nonempty), None);
        assert_eq!(f_measure(&empty, &nonempty), None);
        assert_eq!(f_measure(&nonempty, &empty), None);
    }

    #[test]
    fn test_set_differences_partition_symmetric_difference() {
        let reference = set(&["a", "b", "c"]);
        let test = set(&["b", "c", "d", "e"]);

        let differences = set_differences(&reference, &test);
        assert_eq!(differences.missing_from_test, vec![&"a".to_string()]);
        assert_eq!(
            differences.unexpected_in_test,
            vec![&"d".to_string(), &"e".to_string()]
        );

        // Every element of the symmetric difference lands on exactly one side
        let total = differences.missing_from_test.len() + differences.unexpected_in_test.len();
        assert_eq!(total, reference.symmetric_difference(&test).count());
    }

    #[test]
    fn test_set_differences_sorted_output() {
        let reference = set(&[]);
        let test = set(&["zucchini", "apple", "miso"]);

        let differences = set_differences(&reference, &test);
        let names: Vec<&str> = differences
            .unexpected_in_test
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(names, vec!["apple", "miso", "zucchini"]);
    }
}
