//! Loading and validation of the JSON artifacts consumed by the tastebench
//! pipelines
//!
//! Artifacts come in three families:
//!
//! - **Substitutes**: ground-truth pairs, the ranked ground-truth mapping,
//!   the ingredient universe, frequency counts, and per-approach predictions
//! - **QA**: the nested reference dataset and the flat prediction map
//! - **Human**: per-annotator judgment files named by method and variant

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod error;
mod human;
mod qa;
mod substitutes;

pub use error::DatasetError;
pub use human::{judgment_file_name, load_annotator_judgments, load_judgments};
pub use qa::{load_answer_predictions, load_qa_cases};
pub use substitutes::{
    load_frequency_table, load_ingredient_set, load_pair_set, load_substitute_ranking,
};

use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads and deserializes one JSON artifact
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| DatasetError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
