//! Core types for the tastebench evaluation suite
//!
//! This crate provides the foundational abstractions used throughout the
//! tastebench pipelines, including:
//!
//! - **Entities**: Substitute pairs, rankings, frequency tables, and QA cases
//! - **Configuration**: Evaluation configuration management
//! - **Error handling**: Unified error types
//!

pub mod config;
pub mod entities;
pub mod error;

// Re-export main types for convenience
pub use config::{AgreementConfig, ApproachConfig, Config, QaConfig, SubstitutesConfig};
pub use entities::{
    FrequencyTable, IngredientCount, JudgmentMap, PredictionMap, QaCase, SentinelPolicy,
    SubstitutePair, SubstituteRanking,
};
pub use error::{Error, Result};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::entities::{QaCase, SentinelPolicy, SubstitutePair};
    pub use crate::error::Result;
}
