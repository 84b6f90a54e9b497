//! Loaders for the per-annotator human judgment files

use crate::{read_json, DatasetError};
use std::path::Path;
use tastebench_core::JudgmentMap;
use tracing::debug;

/// File name for one annotator's judgments: `{method}_{variant}{annotator}.json`
///
/// The unrestricted variant is the empty string, so the file for annotator 1
/// of `foodbert_text` is `foodbert_text_1.json` and its frequent-vocabulary
/// counterpart is `foodbert_text_top1000_1.json`.
pub fn judgment_file_name(method: &str, variant: &str, annotator: u8) -> String {
    format!("{method}_{variant}{annotator}.json")
}

/// Loads one annotator's judgment map (sample id to integer judgment)
pub fn load_judgments(path: &Path) -> Result<JudgmentMap, DatasetError> {
    let judgments: JudgmentMap = read_json(path)?;
    debug!(
        "Loaded {} judgments from {}",
        judgments.len(),
        path.display()
    );
    Ok(judgments)
}

/// Loads both annotators' judgment files for one method and variant
pub fn load_annotator_judgments(
    dir: &Path,
    method: &str,
    variant: &str,
) -> Result<(JudgmentMap, JudgmentMap), DatasetError> {
    let first = load_judgments(&dir.join(judgment_file_name(method, variant, 1)))?;
    let second = load_judgments(&dir.join(judgment_file_name(method, variant, 2)))?;
    Ok((first, second))
}
