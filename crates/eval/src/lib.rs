//! The three tastebench evaluation pipelines
//!
//! Each pipeline is a single synchronous pass: load the configured JSON
//! artifacts, compute its metrics, and hand back a serializable report that
//! knows how to print itself.
//!
//! - [`substitutes`]: scores predicted ingredient-substitute pairs against
//!   the ground truth
//! - [`qa`]: exact-match comparison of predicted answers with sentinel
//!   bucketing
//! - [`agreement`]: per-method annotator accuracy and pooled Cohen's Kappa

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod agreement;
pub mod qa;
pub mod substitutes;

pub use agreement::{score_agreement, AgreementReport, MethodAgreement, VariantAccuracy};
pub use qa::{
    compare_answers, AnswerOutcome, QaReport, QaSample, CANNOT_ANSWER, NO_PREDICTION,
};
pub use substitutes::{
    print_differences, RarityBreakdown, SubstituteEvaluator, SubstituteReport, TopKRecall,
};
