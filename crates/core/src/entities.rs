use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Map from question id to the predicted answer string
pub type PredictionMap = HashMap<String, String>;

/// Map from sample id to one annotator's judgment (1 = acceptable substitute)
pub type JudgmentMap = BTreeMap<String, i64>;

/// A directed ingredient-substitute pair
///
/// Serialized as a 2-element JSON array `["base", "substitute"]`, the wire
/// format shared by the ground-truth and prediction artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct SubstitutePair {
    /// Ingredient being replaced
    pub base: String,

    /// Ingredient proposed as its replacement
    pub substitute: String,
}

impl SubstitutePair {
    pub fn new(base: impl Into<String>, substitute: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            substitute: substitute.into(),
        }
    }
}

impl From<(String, String)> for SubstitutePair {
    fn from((base, substitute): (String, String)) -> Self {
        Self { base, substitute }
    }
}

impl From<SubstitutePair> for (String, String) {
    fn from(pair: SubstitutePair) -> Self {
        (pair.base, pair.substitute)
    }
}

impl fmt::Display for SubstitutePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base, self.substitute)
    }
}

/// Ranked ground-truth mapping from each ingredient to its substitutes,
/// ordered most relevant first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstituteRanking(BTreeMap<String, Vec<String>>);

impl SubstituteRanking {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self(entries)
    }

    /// Number of ingredients with a ranked substitute list
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs each ingredient with its `k` highest-ranked substitutes
    pub fn top_k_pairs(&self, k: usize) -> HashSet<SubstitutePair> {
        self.0
            .iter()
            .flat_map(|(base, substitutes)| {
                substitutes
                    .iter()
                    .take(k)
                    .map(|substitute| SubstitutePair::new(base.clone(), substitute.clone()))
            })
            .collect()
    }
}

/// One ingredient with its corpus occurrence count
///
/// Serialized as a 2-element JSON array `["name", count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct IngredientCount {
    pub name: String,
    pub count: u64,
}

impl From<(String, u64)> for IngredientCount {
    fn from((name, count): (String, u64)) -> Self {
        Self { name, count }
    }
}

impl From<IngredientCount> for (String, u64) {
    fn from(entry: IngredientCount) -> Self {
        (entry.name, entry.count)
    }
}

/// Ingredient frequency table, stored in the artifact's order
/// (most frequent first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(Vec<IngredientCount>);

impl FrequencyTable {
    pub fn new(entries: Vec<IngredientCount>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `size` ingredients with at least `min_count` occurrences
    ///
    /// The count artifact separates multi-word names with underscores while
    /// the pair artifacts use spaces, so names are space-normalized here.
    pub fn frequent_vocabulary(&self, size: usize, min_count: u64) -> HashSet<String> {
        self.0
            .iter()
            .filter(|entry| entry.count >= min_count)
            .take(size)
            .map(|entry| entry.name.replace('_', " "))
            .collect()
    }
}

/// One question from the QA reference dataset, flattened from the nested
/// article/paragraph layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaCase {
    /// Question id, the join key into the prediction map
    pub id: String,

    /// Question text
    pub question: String,

    /// Dialogue context the question was asked against
    pub context: String,

    /// Acceptable reference answers
    pub answers: Vec<String>,
}

/// How sentinel ("cannotanswer") matches are bucketed by the QA comparator
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SentinelPolicy {
    /// Sentinel matches stay in the exact-match bucket and are tallied
    /// separately
    #[default]
    Count,

    /// Sentinel matches are moved to the mismatch bucket
    Exclude,
}
