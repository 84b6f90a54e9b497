//! Ground-truth based scoring of predicted ingredient-substitute pairs

use serde::Serialize;
use std::collections::HashSet;
use tastebench_core::config::SubstitutesConfig;
use tastebench_core::{Error, FrequencyTable, Result, SubstitutePair, SubstituteRanking};
use tastebench_metrics::SetDifferences;
use tracing::{debug, info};

/// Shared ground-truth context, loaded once and reused across approaches
pub struct SubstituteEvaluator {
    ground_truth: HashSet<SubstitutePair>,
    ranking: SubstituteRanking,
    universe: HashSet<String>,
    frequent: HashSet<String>,
    top_k_values: Vec<usize>,
    restrict_to_frequent_bases: bool,
}

impl SubstituteEvaluator {
    /// Loads the ground-truth artifacts named by the configuration
    pub fn from_config(config: &SubstitutesConfig) -> Result<Self> {
        let ground_truth = tastebench_datasets::load_pair_set(&config.ground_truth_pairs)?;
        let ranking = tastebench_datasets::load_substitute_ranking(&config.ground_truth_ranking)?;
        let universe =
            tastebench_datasets::load_ingredient_set(&config.ground_truth_ingredients)?;
        let counts: FrequencyTable =
            tastebench_datasets::load_frequency_table(&config.ingredient_counts)?;
        let frequent = counts
            .frequent_vocabulary(config.frequent_vocabulary_size, config.min_ingredient_count);

        let mut top_k_values = config.top_k_values.clone();
        top_k_values.sort_unstable();
        top_k_values.dedup();

        info!(
            "Loaded {} ground-truth pairs over {} ingredients ({} frequent)",
            ground_truth.len(),
            universe.len(),
            frequent.len()
        );

        Ok(Self {
            ground_truth,
            ranking,
            universe,
            frequent,
            top_k_values,
            restrict_to_frequent_bases: config.restrict_to_frequent_bases,
        })
    }

    /// Ground-truth pair set the predictions are scored against
    pub fn ground_truth(&self) -> &HashSet<SubstitutePair> {
        &self.ground_truth
    }

    /// Predicted pairs whose base ingredient lies inside the ground-truth
    /// universe; only these take part in precision and recall
    pub fn scored_predictions(
        &self,
        predicted: &HashSet<SubstitutePair>,
    ) -> HashSet<SubstitutePair> {
        predicted
            .iter()
            .filter(|pair| self.universe.contains(&pair.base))
            .cloned()
            .collect()
    }

    /// Rarity statistics over the raw predictions, before the universe filter
    fn rarity(&self, predicted: &HashSet<SubstitutePair>) -> RarityBreakdown {
        let mut rare_base = 0usize;
        let mut rare_substitute = 0usize;
        let mut considered = 0usize;
        for pair in predicted {
            if self.restrict_to_frequent_bases && !self.frequent.contains(&pair.base) {
                continue;
            }
            if !self.frequent.contains(&pair.base) {
                rare_base += 1;
            }
            if !self.frequent.contains(&pair.substitute) {
                rare_substitute += 1;
            }
            considered += 1;
        }
        RarityBreakdown {
            rare_base,
            rare_substitute,
            considered,
        }
    }

    /// Scores one approach's predicted pairs
    pub fn evaluate(
        &self,
        name: &str,
        predicted: &HashSet<SubstitutePair>,
    ) -> Result<SubstituteReport> {
        if predicted.is_empty() {
            return Err(Error::invalid_input(format!(
                "approach '{name}' predicted no pairs"
            )));
        }

        let rarity = self.rarity(predicted);
        let scored = self.scored_predictions(predicted);
        debug!(
            "{} of {} predicted pairs have a ground-truth base ingredient",
            scored.len(),
            predicted.len()
        );

        let precision = tastebench_metrics::precision(&self.ground_truth, &scored).ok_or_else(
            || {
                Error::invalid_input(format!(
                    "approach '{name}': no predicted pair has a ground-truth base ingredient"
                ))
            },
        )?;
        let recall = tastebench_metrics::recall(&self.ground_truth, &scored)
            .ok_or_else(|| Error::invalid_input("the ground-truth pair set is empty"))?;
        let f1 = tastebench_metrics::f_measure(&self.ground_truth, &scored)
            .ok_or_else(|| Error::invalid_input("F1 is undefined for empty inputs"))?;

        let top_k_recall = self
            .top_k_values
            .iter()
            .map(|&k| {
                let recall = tastebench_metrics::top_k_recall(&self.ranking, &scored, k)
                    .ok_or_else(|| {
                        Error::invalid_input(format!(
                            "the ranked ground truth has no substitutes at k = {k}"
                        ))
                    })?;
                Ok(TopKRecall { k, recall })
            })
            .collect::<Result<Vec<TopKRecall>>>()?;

        let covered_bases: HashSet<&str> = scored.iter().map(|pair| pair.base.as_str()).collect();

        Ok(SubstituteReport {
            approach: name.to_string(),
            total_predictions: predicted.len(),
            scored_predictions: scored.len(),
            pairs_per_ingredient: scored.len() as f64 / self.universe.len() as f64,
            ground_truth_coverage: covered_bases.len() as f64 / self.universe.len() as f64,
            precision,
            recall,
            f1,
            top_k_recall,
            rarity,
        })
    }
}

/// Scoring results for one approach
#[derive(Debug, Clone, Serialize)]
pub struct SubstituteReport {
    /// Approach name the predictions came from
    pub approach: String,

    /// Distinct predicted pairs before the universe filter
    pub total_predictions: usize,

    /// Predicted pairs whose base is a ground-truth ingredient
    pub scored_predictions: usize,

    /// Scored pairs per ground-truth ingredient
    pub pairs_per_ingredient: f64,

    /// Fraction of ground-truth ingredients with at least one scored pair
    pub ground_truth_coverage: f64,

    pub precision: f64,
    pub recall: f64,
    pub f1: f64,

    /// Recall against the rank-restricted ground truth, one entry per
    /// configured cutoff
    pub top_k_recall: Vec<TopKRecall>,

    pub rarity: RarityBreakdown,
}

/// Recall against the reference restricted to each ingredient's `k` best
/// substitutes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TopKRecall {
    pub k: usize,
    pub recall: f64,
}

/// How many considered pairs fall outside the frequent-ingredient vocabulary
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RarityBreakdown {
    /// Considered pairs whose base is not frequent
    pub rare_base: usize,

    /// Considered pairs whose substitute is not frequent
    pub rare_substitute: usize,

    /// Pairs the breakdown ran over
    pub considered: usize,
}

impl RarityBreakdown {
    /// Percentage of considered pairs with a rare base; zero when nothing
    /// was considered
    pub fn rare_base_percent(&self) -> f64 {
        if self.considered == 0 {
            return 0.0;
        }
        100.0 * self.rare_base as f64 / self.considered as f64
    }

    /// Percentage of considered pairs with a rare substitute; zero when
    /// nothing was considered
    pub fn rare_substitute_percent(&self) -> f64 {
        if self.considered == 0 {
            return 0.0;
        }
        100.0 * self.rare_substitute as f64 / self.considered as f64
    }
}

impl SubstituteReport {
    /// Prints the report in the classic text layout
    pub fn print(&self) {
        println!("Predicted {} substitute pairs", self.total_predictions);
        println!(
            "Predicted {:.2} pairs per ingredient",
            self.pairs_per_ingredient
        );
        println!(
            "Ground Truth Coverage: {}%",
            (self.ground_truth_coverage * 100.0) as u64
        );
        println!("Rare Base: {:.1}%", self.rarity.rare_base_percent());
        println!(
            "Rare Substitute: {:.1}%",
            self.rarity.rare_substitute_percent()
        );
        println!("Total Predictions: {}", self.rarity.considered);

        let top_k: String = self
            .top_k_recall
            .iter()
            .map(|entry| format!("Top{}-REC:{:.3} ", entry.k, entry.recall))
            .collect();
        println!(
            "PRE:{:.3} Full-REC:{:.3} {}F1:{:.3}",
            self.precision, self.recall, top_k, self.f1
        );
    }
}

/// Prints both sides of the symmetric difference between the scored
/// predictions and the ground truth
pub fn print_differences(
    differences: &SetDifferences<'_, SubstitutePair>,
    ground_truth_len: usize,
    scored_len: usize,
) {
    println!(
        "\nMISSING IN GROUND TRUTH: {} predicted pairs are not in the ground truth (from {} scored predictions)",
        differences.unexpected_in_test.len(),
        scored_len
    );
    for pair in &differences.unexpected_in_test {
        println!("{pair}");
    }

    println!(
        "\nMISSING IN PREDICTION: {} ground-truth pairs were never predicted (ground truth contains {})",
        differences.missing_from_test.len(),
        ground_truth_len
    );
    for pair in &differences.missing_from_test {
        println!("{pair}");
    }
}
