//! Configuration module for the tastebench evaluation suite
//!
//! This module provides configuration structures and loading mechanisms for the
//! evaluation pipelines. Configuration can be loaded from TOML files and/or
//! environment variables.

mod defaults;
mod loading;


use crate::entities::SentinelPolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.tastebench/config.toml` and applies
/// whenever no project-local configuration file is present.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".tastebench").join("config.toml"))
}

/// Returns the project-local configuration file path (`./tastebench.toml`)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// One candidate system whose predicted substitute pairs are scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachConfig {
    /// Display name used in reports and for `--approach` selection
    pub name: String,

    /// Path to the predicted pairs artifact
    pub predictions: PathBuf,
}

impl ApproachConfig {
    pub fn new(name: impl Into<String>, predictions: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            predictions: predictions.into(),
        }
    }
}

/// Substitute-evaluation pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutesConfig {
    /// Path to the ground-truth substitute pairs artifact
    #[serde(default = "default_ground_truth_pairs")]
    pub ground_truth_pairs: PathBuf,

    /// Path to the ranked ground-truth mapping artifact
    #[serde(default = "default_ground_truth_ranking")]
    pub ground_truth_ranking: PathBuf,

    /// Path to the ground-truth ingredient universe artifact
    #[serde(default = "default_ground_truth_ingredients")]
    pub ground_truth_ingredients: PathBuf,

    /// Path to the ingredient frequency table artifact
    #[serde(default = "default_ingredient_counts")]
    pub ingredient_counts: PathBuf,

    /// Cutoffs for top-k recall
    #[serde(default = "default_top_k_values")]
    pub top_k_values: Vec<usize>,

    /// Size of the frequent-ingredient vocabulary
    #[serde(default = "default_frequent_vocabulary_size")]
    pub frequent_vocabulary_size: usize,

    /// Minimum corpus count for an ingredient to enter the vocabulary
    #[serde(default = "default_min_ingredient_count")]
    pub min_ingredient_count: u64,

    /// Restrict the rarity breakdown to pairs whose base ingredient is in
    /// the frequent vocabulary
    #[serde(default)]
    pub restrict_to_frequent_bases: bool,

    /// Always print the pairs missing from either side, as if `--diff` were
    /// passed
    #[serde(default)]
    pub show_differences: bool,

    /// Candidate systems to evaluate, in report order
    #[serde(default = "default_approaches")]
    pub approaches: Vec<ApproachConfig>,
}

/// QA exact-match pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaConfig {
    /// Path to the QA reference dataset
    #[serde(default = "default_qa_dataset")]
    pub dataset: PathBuf,

    /// Path to the id -> predicted answer artifact
    #[serde(default = "default_qa_predictions")]
    pub predictions: PathBuf,

    /// How sentinel ("cannotanswer") matches are bucketed
    #[serde(default)]
    pub sentinel_policy: SentinelPolicy,

    /// Cases printed per bucket for manual inspection
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

/// Human-agreement pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementConfig {
    /// Directory holding the per-annotator judgment files
    #[serde(default = "default_labels_dir")]
    pub labels_dir: PathBuf,

    /// Prediction methods with annotated judgment files
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Judgment file variants; the empty string is the unrestricted variant
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

/// Main configuration structure for the tastebench evaluation suite
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Substitute-evaluation pipeline configuration
    #[serde(default)]
    pub substitutes: SubstitutesConfig,

    /// QA exact-match pipeline configuration
    #[serde(default)]
    pub qa: QaConfig,

    /// Human-agreement pipeline configuration
    #[serde(default)]
    pub agreement: AgreementConfig,
}

// Default implementations

impl Default for SubstitutesConfig {
    fn default() -> Self {
        Self {
            ground_truth_pairs: default_ground_truth_pairs(),
            ground_truth_ranking: default_ground_truth_ranking(),
            ground_truth_ingredients: default_ground_truth_ingredients(),
            ingredient_counts: default_ingredient_counts(),
            top_k_values: default_top_k_values(),
            frequent_vocabulary_size: default_frequent_vocabulary_size(),
            min_ingredient_count: default_min_ingredient_count(),
            restrict_to_frequent_bases: false,
            show_differences: false,
            approaches: default_approaches(),
        }
    }
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            dataset: default_qa_dataset(),
            predictions: default_qa_predictions(),
            sentinel_policy: SentinelPolicy::default(),
            sample_count: default_sample_count(),
        }
    }
}

impl Default for AgreementConfig {
    fn default() -> Self {
        Self {
            labels_dir: default_labels_dir(),
            methods: default_methods(),
            variants: default_variants(),
        }
    }
}

/// Rejects names that would escape the directory they are joined to
fn validate_file_name_part(section: &str, value: &str) -> Result<()> {
    if value.contains('/') || value.contains('\\') {
        return Err(Error::config(format!(
            "{section} must not contain path separators (got '{value}')"
        )));
    }
    Ok(())
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate top-k cutoffs
        if self.substitutes.top_k_values.is_empty() {
            return Err(Error::config(
                "substitutes.top_k_values must not be empty".to_string(),
            ));
        }
        for &k in &self.substitutes.top_k_values {
            if k == 0 {
                return Err(Error::config(
                    "substitutes.top_k_values entries must be greater than 0".to_string(),
                ));
            }
            if k > 100 {
                return Err(Error::config(format!(
                    "substitutes.top_k_values entry too large (max 100, got {k})"
                )));
            }
        }

        // Validate vocabulary bounds
        if self.substitutes.frequent_vocabulary_size == 0 {
            return Err(Error::config(
                "substitutes.frequent_vocabulary_size must be greater than 0".to_string(),
            ));
        }
        if self.substitutes.frequent_vocabulary_size > 100_000 {
            return Err(Error::config(format!(
                "substitutes.frequent_vocabulary_size too large (max 100000, got {})",
                self.substitutes.frequent_vocabulary_size
            )));
        }
        if self.substitutes.min_ingredient_count == 0 {
            return Err(Error::config(
                "substitutes.min_ingredient_count must be greater than 0".to_string(),
            ));
        }

        // Validate approaches
        let mut seen_approaches = std::collections::HashSet::new();
        for approach in &self.substitutes.approaches {
            if approach.name.is_empty() {
                return Err(Error::config(
                    "substitutes.approaches entries must have a non-empty name".to_string(),
                ));
            }
            if approach.predictions.as_os_str().is_empty() {
                return Err(Error::config(format!(
                    "approach '{}' must have a predictions path",
                    approach.name
                )));
            }
            if !seen_approaches.insert(approach.name.as_str()) {
                return Err(Error::config(format!(
                    "duplicate approach name '{}'",
                    approach.name
                )));
            }
        }

        // Validate QA sampling
        if self.qa.sample_count > 100 {
            return Err(Error::config(format!(
                "qa.sample_count too large (max 100, got {})",
                self.qa.sample_count
            )));
        }

        // Validate agreement file naming inputs
        if self.agreement.methods.is_empty() {
            return Err(Error::config(
                "agreement.methods must not be empty".to_string(),
            ));
        }
        for method in &self.agreement.methods {
            if method.is_empty() {
                return Err(Error::config(
                    "agreement.methods entries must be non-empty".to_string(),
                ));
            }
            validate_file_name_part("agreement.methods entries", method)?;
        }
        if self.agreement.variants.is_empty() {
            return Err(Error::config(
                "agreement.variants must not be empty".to_string(),
            ));
        }
        for variant in &self.agreement.variants {
            validate_file_name_part("agreement.variants entries", variant)?;
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
