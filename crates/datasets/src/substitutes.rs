//! Loaders for the substitute-evaluation artifacts

use crate::{read_json, DatasetError};
use std::collections::HashSet;
use std::path::Path;
use tastebench_core::{FrequencyTable, SubstitutePair, SubstituteRanking};
use tracing::debug;

/// Loads a set of substitute pairs from an array of `["base", "substitute"]`
/// entries
///
/// Both the ground-truth artifact and the per-approach prediction artifacts
/// use this wire format. Duplicate entries collapse into one pair.
pub fn load_pair_set(path: &Path) -> Result<HashSet<SubstitutePair>, DatasetError> {
    let pairs: Vec<SubstitutePair> = read_json(path)?;
    let set: HashSet<SubstitutePair> = pairs.into_iter().collect();
    debug!("Loaded {} substitute pairs from {}", set.len(), path.display());
    Ok(set)
}

/// Loads the ground-truth ingredient universe (a flat array of names)
pub fn load_ingredient_set(path: &Path) -> Result<HashSet<String>, DatasetError> {
    let names: Vec<String> = read_json(path)?;
    let set: HashSet<String> = names.into_iter().collect();
    debug!("Loaded {} ingredients from {}", set.len(), path.display());
    Ok(set)
}

/// Loads the ranked ground-truth mapping (ingredient to ordered substitutes)
pub fn load_substitute_ranking(path: &Path) -> Result<SubstituteRanking, DatasetError> {
    let ranking: SubstituteRanking = read_json(path)?;
    debug!(
        "Loaded ranked substitutes for {} ingredients from {}",
        ranking.len(),
        path.display()
    );
    Ok(ranking)
}

/// Loads the ingredient frequency table (`["name", count]` entries, most
/// frequent first)
pub fn load_frequency_table(path: &Path) -> Result<FrequencyTable, DatasetError> {
    let table: FrequencyTable = read_json(path)?;
    debug!(
        "Loaded {} ingredient counts from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_artifact(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_pair_set_deduplicates() {
        let file = write_artifact(r#"[["salt", "pepper"], ["salt", "pepper"], ["a", "b"]]"#);

        let pairs = load_pair_set(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&SubstitutePair::new("salt", "pepper")));
    }

    #[test]
    fn test_load_pair_set_rejects_malformed_entry() {
        let file = write_artifact(r#"[["salt", "pepper"], ["lonely"]]"#);

        let result = load_pair_set(file.path());
        assert!(matches!(result, Err(DatasetError::Parse { .. })));
    }

    #[test]
    fn test_load_ingredient_set() {
        let file = write_artifact(r#"["salt", "butter", "salt"]"#);

        let ingredients = load_ingredient_set(file.path()).unwrap();
        assert_eq!(ingredients.len(), 2);
        assert!(ingredients.contains("butter"));
    }

    #[test]
    fn test_load_substitute_ranking_preserves_order() {
        let file = write_artifact(r#"{"salt": ["pepper", "sea salt"]}"#);

        let ranking = load_substitute_ranking(file.path()).unwrap();
        let top_one = ranking.top_k_pairs(1);
        assert_eq!(top_one.len(), 1);
        assert!(top_one.contains(&SubstitutePair::new("salt", "pepper")));
    }

    #[test]
    fn test_load_frequency_table() {
        let file = write_artifact(r#"[["salt", 120], ["saffron", 2]]"#);

        let table = load_frequency_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        let vocabulary = table.frequent_vocabulary(1000, 10);
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn test_load_frequency_table_rejects_non_numeric_count() {
        let file = write_artifact(r#"[["salt", "many"]]"#);

        let result = load_frequency_table(file.path());
        assert!(matches!(result, Err(DatasetError::Parse { .. })));
    }
}
