//! Exact-match comparison of predicted answers against the QA reference set

use serde::Serialize;
use tastebench_core::{PredictionMap, QaCase, SentinelPolicy};
use tracing::debug;

/// Sentinel reference answer marking a question with no valid answer
pub const CANNOT_ANSWER: &str = "cannotanswer";

/// Answer substituted for question ids absent from the prediction map
pub const NO_PREDICTION: &str = "No prediction found";

/// Per-case classification before the sentinel policy collapses it into the
/// two reported buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// Trimmed prediction equals a trimmed reference answer
    Exact,

    /// Exact match whose matched answer is the "cannotanswer" sentinel
    Sentinel,

    /// No reference answer matches
    Mismatch,
}

fn classify(case: &QaCase, predicted: &str) -> AnswerOutcome {
    let predicted = predicted.trim();
    if case.answers.iter().any(|answer| answer.trim() == predicted) {
        if predicted.eq_ignore_ascii_case(CANNOT_ANSWER) {
            AnswerOutcome::Sentinel
        } else {
            AnswerOutcome::Exact
        }
    } else {
        AnswerOutcome::Mismatch
    }
}

/// Classifies every case and assembles the report
///
/// Missing prediction ids resolve to [`NO_PREDICTION`] rather than failing.
/// The sentinel policy only moves sentinel matches between the two buckets;
/// every case lands in exactly one of them either way.
pub fn compare_answers(
    cases: &[QaCase],
    predictions: &PredictionMap,
    policy: SentinelPolicy,
    sample_count: usize,
) -> QaReport {
    let mut report = QaReport {
        policy,
        total_cases: cases.len(),
        exact_matches: 0,
        sentinel_matches: 0,
        mismatches: 0,
        exact_samples: Vec::new(),
        mismatch_samples: Vec::new(),
    };

    for case in cases {
        let predicted = predictions
            .get(&case.id)
            .map(String::as_str)
            .unwrap_or(NO_PREDICTION);

        let outcome = classify(case, predicted);
        let counts_as_exact = match outcome {
            AnswerOutcome::Exact => true,
            AnswerOutcome::Sentinel => {
                report.sentinel_matches += 1;
                policy == SentinelPolicy::Count
            }
            AnswerOutcome::Mismatch => false,
        };

        let (bucket_total, samples) = if counts_as_exact {
            (&mut report.exact_matches, &mut report.exact_samples)
        } else {
            (&mut report.mismatches, &mut report.mismatch_samples)
        };
        *bucket_total += 1;
        if samples.len() < sample_count {
            samples.push(QaSample::new(case, predicted));
        }
    }

    debug!(
        "Classified {} QA cases: {} exact, {} mismatched, {} sentinel",
        report.total_cases, report.exact_matches, report.mismatches, report.sentinel_matches
    );
    report
}

/// One case captured for manual inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaSample {
    pub id: String,
    pub question: String,

    /// First 100 characters of the dialogue context
    pub context_snippet: String,

    /// Reference answers, untrimmed as loaded
    pub answers: Vec<String>,

    /// Raw predicted answer (or [`NO_PREDICTION`]), untrimmed
    pub predicted: String,
}

impl QaSample {
    fn new(case: &QaCase, predicted: &str) -> Self {
        Self {
            id: case.id.clone(),
            question: case.question.clone(),
            context_snippet: snippet(&case.context, 100),
            answers: case.answers.clone(),
            predicted: predicted.to_string(),
        }
    }
}

/// The first `max_chars` characters, with an ellipsis only when something
/// was actually cut
fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Exact-match comparison results over one prediction file
#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    /// Sentinel policy the buckets were built under
    pub policy: SentinelPolicy,

    pub total_cases: usize,

    /// Cases in the exact-match bucket (sentinel matches included only
    /// under the `count` policy)
    pub exact_matches: usize,

    /// Exact matches whose matched answer was the sentinel, regardless of
    /// which bucket the policy put them in
    pub sentinel_matches: usize,

    /// Cases in the mismatch bucket
    pub mismatches: usize,

    pub exact_samples: Vec<QaSample>,
    pub mismatch_samples: Vec<QaSample>,
}

impl QaReport {
    /// Fraction of cases in the exact-match bucket
    pub fn exact_match_rate(&self) -> f64 {
        if self.total_cases == 0 {
            return 0.0;
        }
        self.exact_matches as f64 / self.total_cases as f64
    }

    /// Prints the report in the classic text layout
    pub fn print(&self) {
        println!("Total Cases: {}", self.total_cases);
        println!("Total Exact Matches: {}", self.exact_matches);
        println!("Total Mismatches: {}", self.mismatches);
        println!(
            "'CANNOTANSWER' Predictions: {}",
            self.sentinel_matches
        );
        println!("Exact Match Rate: {:.3}", self.exact_match_rate());

        let exact_title = match self.policy {
            SentinelPolicy::Count => "Exact Matches",
            SentinelPolicy::Exclude => "Exact Matches (excluding 'CANNOTANSWER')",
        };
        print_samples(&self.exact_samples, exact_title);
        print_samples(&self.mismatch_samples, "Mismatches");
    }
}

fn print_samples(samples: &[QaSample], title: &str) {
    println!("\n{title}:");
    for sample in samples {
        println!("\nQuestion ID: {}", sample.id);
        println!("Question: {}", sample.question);
        println!("Context: {}", sample.context_snippet);
        println!("True Answers: {:?}", sample.answers);
        println!("Predicted Answer: {}", sample.predicted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn case(id: &str, answers: &[&str]) -> QaCase {
        QaCase {
            id: id.to_string(),
            question: format!("question for {id}"),
            context: "Some cooking context.".to_string(),
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn predictions(entries: &[(&str, &str)]) -> PredictionMap {
        entries
            .iter()
            .map(|(id, answer)| (id.to_string(), answer.to_string()))
            .collect()
    }

    #[test]
    fn test_exact_match_after_trimming() {
        let cases = vec![case("q1", &["Paris", "paris "])];
        let preds = predictions(&[("q1", "Paris")]);

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 3);
        assert_eq!(report.exact_matches, 1);
        assert_eq!(report.mismatches, 0);
        assert_eq!(report.sentinel_matches, 0);
    }

    #[test]
    fn test_trimmed_prediction_matches_padded_reference() {
        let cases = vec![case("q1", &["paris "])];
        let preds = predictions(&[("q1", "  paris")]);

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 3);
        assert_eq!(report.exact_matches, 1);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let cases = vec![case("q1", &["Paris"])];
        let preds = predictions(&[("q1", "paris")]);

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 3);
        assert_eq!(report.exact_matches, 0);
        assert_eq!(report.mismatches, 1);
    }

    #[test]
    fn test_missing_prediction_resolves_to_sentinel_default() {
        let cases = vec![case("q1", &["an answer"])];
        let preds = PredictionMap::new();

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 3);
        assert_eq!(report.mismatches, 1);
        assert_eq!(report.mismatch_samples[0].predicted, NO_PREDICTION);
    }

    #[test]
    fn test_sentinel_policy_count_keeps_sentinel_in_exact_bucket() {
        let cases = vec![case("q1", &["CANNOTANSWER"]), case("q2", &["whisk"])];
        let preds = predictions(&[("q1", "CANNOTANSWER"), ("q2", "whisk")]);

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 3);
        assert_eq!(report.exact_matches, 2);
        assert_eq!(report.mismatches, 0);
        assert_eq!(report.sentinel_matches, 1);
    }

    #[test]
    fn test_sentinel_policy_exclude_moves_sentinel_to_mismatches() {
        let cases = vec![case("q1", &["CANNOTANSWER"]), case("q2", &["whisk"])];
        let preds = predictions(&[("q1", "CANNOTANSWER"), ("q2", "whisk")]);

        let report = compare_answers(&cases, &preds, SentinelPolicy::Exclude, 3);
        assert_eq!(report.exact_matches, 1);
        assert_eq!(report.mismatches, 1);
        assert_eq!(report.sentinel_matches, 1);
    }

    #[test]
    fn test_buckets_partition_all_cases_under_both_policies() {
        let cases = vec![
            case("q1", &["CANNOTANSWER"]),
            case("q2", &["whisk"]),
            case("q3", &["fold gently"]),
        ];
        let preds = predictions(&[("q1", "CANNOTANSWER"), ("q2", "whisk"), ("q3", "stir")]);

        for policy in [SentinelPolicy::Count, SentinelPolicy::Exclude] {
            let report = compare_answers(&cases, &preds, policy, 3);
            assert_eq!(report.exact_matches + report.mismatches, cases.len());
        }
    }

    #[test]
    fn test_sample_capture_respects_limit_and_order() {
        let cases: Vec<QaCase> = (0..5).map(|i| case(&format!("q{i}"), &["yes"])).collect();
        let preds: PredictionMap = cases
            .iter()
            .map(|c| (c.id.clone(), "yes".to_string()))
            .collect();

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 3);
        assert_eq!(report.exact_matches, 5);
        assert_eq!(report.exact_samples.len(), 3);
        assert_eq!(report.exact_samples[0].id, "q0");
        assert_eq!(report.exact_samples[2].id, "q2");
    }

    #[test]
    fn test_context_snippet_truncation() {
        let long_context = "x".repeat(150);
        let mut long_case = case("q1", &["yes"]);
        long_case.context = long_context;
        let preds = predictions(&[("q1", "yes")]);

        let report = compare_answers(&[long_case], &preds, SentinelPolicy::Count, 3);
        let snippet = &report.exact_samples[0].context_snippet;
        assert_eq!(snippet.chars().count(), 103);
        assert!(snippet.ends_with("..."));

        // Short contexts pass through without an ellipsis
        let short = compare_answers(&[case("q2", &["no"])], &HashMap::new(), SentinelPolicy::Count, 3);
        assert_eq!(
            short.mismatch_samples[0].context_snippet,
            "Some cooking context."
        );
    }

    #[test]
    fn test_exact_match_rate() {
        let cases = vec![case("q1", &["a"]), case("q2", &["b"])];
        let preds = predictions(&[("q1", "a"), ("q2", "wrong")]);

        let report = compare_answers(&cases, &preds, SentinelPolicy::Count, 0);
        assert!((report.exact_match_rate() - 0.5).abs() < 1e-9);
        assert!(report.exact_samples.is_empty());
    }
}
