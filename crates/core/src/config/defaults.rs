//! Default values and functions for configuration

use super::ApproachConfig;
use std::path::PathBuf;

// Default constants
pub(crate) const LOCAL_CONFIG_FILE: &str = "tastebench.toml";
pub(crate) const DEFAULT_GROUND_TRUTH_PAIRS: &str = "evaluation/data/ground_truth_substitutes.json";
pub(crate) const DEFAULT_GROUND_TRUTH_RANKING: &str =
    "evaluation/data/ground_truth_substitutes_dict.json";
pub(crate) const DEFAULT_GROUND_TRUTH_INGREDIENTS: &str =
    "evaluation/data/ground_truth_ingredients.json";
pub(crate) const DEFAULT_INGREDIENT_COUNTS: &str = "foodbert/data/ingredient_counts.json";
pub(crate) const DEFAULT_QA_DATASET: &str = "data/doqa-cooking-dev-v2.1.json";
pub(crate) const DEFAULT_QA_PREDICTIONS: &str = "data/predictions.json";
pub(crate) const DEFAULT_LABELS_DIR: &str = "evaluation/data/human_evaluation";

pub(crate) fn default_ground_truth_pairs() -> PathBuf {
    PathBuf::from(DEFAULT_GROUND_TRUTH_PAIRS)
}

pub(crate) fn default_ground_truth_ranking() -> PathBuf {
    PathBuf::from(DEFAULT_GROUND_TRUTH_RANKING)
}

pub(crate) fn default_ground_truth_ingredients() -> PathBuf {
    PathBuf::from(DEFAULT_GROUND_TRUTH_INGREDIENTS)
}

pub(crate) fn default_ingredient_counts() -> PathBuf {
    PathBuf::from(DEFAULT_INGREDIENT_COUNTS)
}

pub(crate) fn default_top_k_values() -> Vec<usize> {
    vec![1, 5]
}

pub(crate) fn default_frequent_vocabulary_size() -> usize {
    1000
}

pub(crate) fn default_min_ingredient_count() -> u64 {
    10
}

pub(crate) fn default_approaches() -> Vec<ApproachConfig> {
    vec![
        ApproachConfig::new(
            "FoodBERT-Text",
            "foodbert_embeddings/data/substitute_pairs_foodbert_text.json",
        ),
        ApproachConfig::new(
            "FoodBERT-Multimodal",
            "foodbert_embeddings/data/substitute_pairs_foodbert_multimodal.json",
        ),
        ApproachConfig::new(
            "Relation Extraction",
            "relation_extraction/data/substitute_pairs_relation_extraction.json",
        ),
        ApproachConfig::new(
            "Food2Vec-Text",
            "food2vec/data/substitute_pairs_food2vec_text.json",
        ),
        ApproachConfig::new(
            "Food2Vec-Multimodal",
            "food2vec/data/substitute_pairs_food2vec_multimodal.json",
        ),
    ]
}

pub(crate) fn default_qa_dataset() -> PathBuf {
    PathBuf::from(DEFAULT_QA_DATASET)
}

pub(crate) fn default_qa_predictions() -> PathBuf {
    PathBuf::from(DEFAULT_QA_PREDICTIONS)
}

pub(crate) fn default_sample_count() -> usize {
    3
}

pub(crate) fn default_labels_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LABELS_DIR)
}

pub(crate) fn default_methods() -> Vec<String> {
    vec![
        "foodbert_text".to_string(),
        "foodbert_multimodal".to_string(),
        "food2vec_text".to_string(),
        "food2vec_multimodal".to_string(),
        "relation_extraction".to_string(),
        "pattern_extraction".to_string(),
    ]
}

pub(crate) fn default_variants() -> Vec<String> {
    vec![String::new(), "top1000_".to_string()]
}
