//! Loaders for the QA reference dataset and prediction artifacts

use crate::{read_json, DatasetError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tastebench_core::{PredictionMap, QaCase};
use tracing::debug;

// Wire-format structs for the nested reference dataset

#[derive(Deserialize)]
struct QaDatasetFile {
    data: Vec<QaArticle>,
}

#[derive(Deserialize)]
struct QaArticle {
    paragraphs: Vec<QaParagraph>,
}

#[derive(Deserialize)]
struct QaParagraph {
    context: String,
    qas: Vec<QaQuestion>,
}

#[derive(Deserialize)]
struct QaQuestion {
    id: String,
    question: String,
    answers: Vec<QaAnswerSpan>,
}

#[derive(Deserialize)]
struct QaAnswerSpan {
    text: String,
}

/// Loads the nested QA reference dataset and flattens it into one case per
/// question, preserving dataset order
///
/// Question ids are the join key into the prediction map, so a duplicate id
/// is rejected.
pub fn load_qa_cases(path: &Path) -> Result<Vec<QaCase>, DatasetError> {
    let file: QaDatasetFile = read_json(path)?;

    let mut cases = Vec::new();
    let mut seen_ids = HashSet::new();
    for article in file.data {
        for paragraph in article.paragraphs {
            let QaParagraph { context, qas } = paragraph;
            for question in qas {
                if !seen_ids.insert(question.id.clone()) {
                    return Err(DatasetError::Shape {
                        path: path.display().to_string(),
                        message: format!("duplicate question id '{}'", question.id),
                    });
                }
                cases.push(QaCase {
                    id: question.id,
                    question: question.question,
                    context: context.clone(),
                    answers: question.answers.into_iter().map(|a| a.text).collect(),
                });
            }
        }
    }

    debug!("Loaded {} QA cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Loads the flat id to predicted answer mapping
pub fn load_answer_predictions(path: &Path) -> Result<PredictionMap, DatasetError> {
    let predictions: PredictionMap = read_json(path)?;
    debug!(
        "Loaded {} answer predictions from {}",
        predictions.len(),
        path.display()
    );
    Ok(predictions)
}
