//! Inter-annotator agreement over the human substitute judgments

use serde::Serialize;
use tastebench_core::config::AgreementConfig;
use tastebench_core::{Error, JudgmentMap, Result};
use tracing::debug;

/// Scores annotator agreement across every configured method and variant
///
/// Methods and variants are visited in their configured order; the
/// concatenated label sequences feed one pooled Cohen's Kappa at the end.
/// Annotators are paired by sample id, so both judgment files of a
/// (method, variant) must cover exactly the same samples.
pub fn score_agreement(config: &AgreementConfig) -> Result<AgreementReport> {
    let mut all_first: Vec<i64> = Vec::new();
    let mut all_second: Vec<i64> = Vec::new();
    let mut methods = Vec::new();

    for method in &config.methods {
        let mut variants = Vec::new();
        for variant in &config.variants {
            let (first, second) =
                tastebench_datasets::load_annotator_judgments(&config.labels_dir, method, variant)?;
            validate_sample_ids(method, variant, &first, &second)?;

            // BTreeMap iteration pairs the annotators by sorted sample id
            let first_labels: Vec<i64> = first.values().copied().collect();
            let second_labels: Vec<i64> = second.values().copied().collect();

            let accuracy = tastebench_metrics::mean_positive_rate(&first_labels, &second_labels)
                .ok_or_else(|| {
                    Error::invalid_input(format!(
                        "no judgments for method '{method}' variant '{variant}'"
                    ))
                })?;

            debug!(
                "Method '{}' variant '{}': {} judgments, accuracy {:.3}",
                method,
                variant,
                first_labels.len(),
                accuracy
            );

            variants.push(VariantAccuracy {
                variant: variant.clone(),
                judgments: first_labels.len(),
                accuracy,
            });
            all_first.extend(first_labels);
            all_second.extend(second_labels);
        }
        methods.push(MethodAgreement {
            method: method.clone(),
            variants,
        });
    }

    let kappa = tastebench_metrics::cohen_kappa(&all_first, &all_second)
        .ok_or_else(|| Error::invalid_input("no judgments were loaded for any method"))?;

    Ok(AgreementReport {
        methods,
        total_judgments: all_first.len(),
        kappa,
    })
}

fn validate_sample_ids(
    method: &str,
    variant: &str,
    first: &JudgmentMap,
    second: &JudgmentMap,
) -> Result<()> {
    if first.len() == second.len() && first.keys().eq(second.keys()) {
        return Ok(());
    }
    let only_first: Vec<&str> = first
        .keys()
        .filter(|id| !second.contains_key(*id))
        .map(String::as_str)
        .collect();
    let only_second: Vec<&str> = second
        .keys()
        .filter(|id| !first.contains_key(*id))
        .map(String::as_str)
        .collect();
    Err(Error::dataset(format!(
        "annotator sample ids disagree for method '{method}' variant '{variant}': \
         {} only in annotator 1 {only_first:?}, {} only in annotator 2 {only_second:?}",
        only_first.len(),
        only_second.len()
    )))
}

/// Accuracy of one (method, variant) pair of judgment files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantAccuracy {
    /// Variant file-name prefix; empty for the unrestricted variant
    pub variant: String,

    /// Judgments per annotator
    pub judgments: usize,

    /// Mean fraction of judgments equal to 1 across both annotators
    pub accuracy: f64,
}

/// Per-method accuracy lines, in configured variant order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodAgreement {
    pub method: String,
    pub variants: Vec<VariantAccuracy>,
}

/// Full agreement results: per-method accuracies plus the pooled Kappa
#[derive(Debug, Clone, Serialize)]
pub struct AgreementReport {
    pub methods: Vec<MethodAgreement>,

    /// Labels per annotator in the pooled sequence
    pub total_judgments: usize,

    /// Cohen's Kappa over the concatenated label sequences
    pub kappa: f64,
}

impl AgreementReport {
    /// Prints the report in the classic text layout
    pub fn print(&self) {
        for method in &self.methods {
            println!("\nResults {}:", method.method);
            for entry in &method.variants {
                if entry.variant.is_empty() {
                    println!("Average Accuracy: {:.3}", entry.accuracy);
                } else {
                    println!("Average {} Accuracy: {:.3}", entry.variant, entry.accuracy);
                }
            }
        }
        println!(
            "\nCohen-Kappa Score: {:.3} ({} paired judgments)",
            self.kappa, self.total_judgments
        );
    }
}
