//! Error types for the planner library.
//!
//! Placement rejections are not errors; they come back as
//! [`PlacementDecision::Rejected`](crate::core::eligibility::PlacementDecision).
//! `PlannerError` covers I/O, parsing and references to things that do not
//! exist.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by catalog loading, plan persistence and export.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// File system operation failed
    #[error("File system error at path '{path}': {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Plan record could not be (de)serialized
    #[error("Plan serialization error: {source}")]
    Json {
        /// Underlying serde error
        #[from]
        source: serde_json::Error,
    },
    /// Catalog file is not valid TOML or does not match the course schema
    #[error("Invalid course catalog: {source}")]
    CatalogParse {
        /// Underlying TOML error
        #[from]
        source: toml::de::Error,
    },
    /// Configuration could not be written as TOML
    #[error("Failed to serialize configuration: {source}")]
    ConfigSerialize {
        /// Underlying TOML error
        #[from]
        source: toml::ser::Error,
    },
    /// Course id not present in the catalog
    #[error("Unknown course: '{id}'")]
    UnknownCourse {
        /// The id that was looked up
        id: String,
    },
    /// Term id not present in the plan
    #[error("Term with ID {id} not found")]
    UnknownTerm {
        /// The id that was looked up
        id: u32,
    },
    /// Removing the only remaining term
    #[error("A plan must keep at least one term")]
    LastTerm,
    /// Summary template failed to render
    #[error("Template rendering failed: {source}")]
    Template {
        /// Underlying askama error
        #[from]
        source: askama::Error,
    },
}

impl PlannerError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
