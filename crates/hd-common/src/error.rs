//! Error types for Heredity.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! Errors can be formatted for human consumption with headline, reason, and fix:
//! ```text
//! ✗ Invalid Priors Configuration
//!   Reason: invalid priors file: gene_prior.two must be in [0, 1]
//!   Fix: Run 'hd-core check' to validate, or drop --priors to use the built-in model.
//! ```
//!
//! # Machine-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 31,
//!   "category": "inference",
//!   "message": "evidence is jointly unsatisfiable at person Carl",
//!   "context": { "person": "Carl" }
//! }
//! ```

use crate::id::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for Heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration file errors (priors, schema).
    Config,
    /// Pedigree construction and loading errors.
    Pedigree,
    /// Bayesian inference and numerical errors.
    Inference,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Pedigree => write!(f, "pedigree"),
            ErrorCategory::Inference => write!(f, "inference"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Heredity.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid priors file: {0}")]
    InvalidPriors(String),

    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    // Pedigree errors (20-29)
    #[error("invalid pedigree: {0}")]
    Pedigree(String),

    #[error("duplicate person id: {id}")]
    DuplicatePerson { id: PersonId },

    #[error("person {child} references unknown parent {parent}")]
    DanglingParent { child: PersonId, parent: PersonId },

    #[error("person {person} has exactly one parent recorded; expected both or neither")]
    IncompleteParents { person: PersonId },

    #[error("person {person} is their own ancestor")]
    SelfAncestry { person: PersonId },

    #[error("pedigree has {count} people; enumeration is capped at {max}")]
    PedigreeTooLarge { count: usize, max: usize },

    // Inference errors (30-39)
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("evidence is jointly unsatisfiable at person {person}")]
    UnsatisfiableEvidence { person: PersonId },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Pedigree errors
    /// - 30-39: Inference errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidPriors(_) => 11,
            Error::SchemaValidation(_) => 12,
            Error::Pedigree(_) => 20,
            Error::DuplicatePerson { .. } => 21,
            Error::DanglingParent { .. } => 22,
            Error::IncompleteParents { .. } => 23,
            Error::SelfAncestry { .. } => 24,
            Error::PedigreeTooLarge { .. } => 25,
            Error::Inference(_) => 30,
            Error::UnsatisfiableEvidence { .. } => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidPriors(_) | Error::SchemaValidation(_) => {
                ErrorCategory::Config
            }

            Error::Pedigree(_)
            | Error::DuplicatePerson { .. }
            | Error::DanglingParent { .. }
            | Error::IncompleteParents { .. }
            | Error::SelfAncestry { .. }
            | Error::PedigreeTooLarge { .. } => ErrorCategory::Pedigree,

            Error::Inference(_) | Error::UnsatisfiableEvidence { .. } => ErrorCategory::Inference,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidPriors(_) => "Invalid Priors Configuration",
            Error::SchemaValidation(_) => "Schema Validation Failed",

            Error::Pedigree(_) => "Invalid Pedigree",
            Error::DuplicatePerson { .. } => "Duplicate Person",
            Error::DanglingParent { .. } => "Dangling Parent Reference",
            Error::IncompleteParents { .. } => "Incomplete Parent Pair",
            Error::SelfAncestry { .. } => "Ancestry Cycle",
            Error::PedigreeTooLarge { .. } => "Pedigree Too Large",

            Error::Inference(_) => "Inference Error",
            Error::UnsatisfiableEvidence { .. } => "Unsatisfiable Evidence",

            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => "Run 'hd-core check' to validate configuration files.",
            Error::InvalidPriors(_) => {
                "Run 'hd-core check' to validate, or drop --priors to use the built-in model."
            }
            Error::SchemaValidation(_) => {
                "Ensure the priors file matches the expected schema version."
            }

            Error::Pedigree(_) => {
                "Check the CSV for the documented columns: name, mother, father, trait."
            }
            Error::DuplicatePerson { .. } => "Each row in the data file must have a unique name.",
            Error::DanglingParent { .. } => {
                "Every mother/father value must name another row in the same file."
            }
            Error::IncompleteParents { .. } => {
                "Fill in both parents, or leave both blank for a founder."
            }
            Error::SelfAncestry { .. } => {
                "Parent links must form a family tree; remove the circular reference."
            }
            Error::PedigreeTooLarge { .. } => {
                "Exact enumeration is exponential in family size; split the pedigree or reduce it."
            }

            Error::Inference(_) => "Re-run with -v for details; report persistent failures.",
            Error::UnsatisfiableEvidence { .. } => {
                "The observed traits have zero probability under the configured model; check the trait column and the priors tables."
            }

            Error::Io(_) => "Check that the path exists and is readable.",
            Error::Json(_) => "Check file syntax, e.g. with 'cat <file> | jq .'.",
        }
    }
}

/// Structured error response for JSON output.
///
/// Used by `--format json` consumers for machine-parseable error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Additional structured context (e.g., person id).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::DuplicatePerson { id } => {
                context.insert("person".to_string(), serde_json::json!(id));
            }
            Error::DanglingParent { child, parent } => {
                context.insert("child".to_string(), serde_json::json!(child));
                context.insert("parent".to_string(), serde_json::json!(parent));
            }
            Error::IncompleteParents { person }
            | Error::SelfAncestry { person }
            | Error::UnsatisfiableEvidence { person } => {
                context.insert("person".to_string(), serde_json::json!(person));
            }
            Error::PedigreeTooLarge { count, max } => {
                context.insert("count".to_string(), serde_json::json!(count));
                context.insert("max".to_string(), serde_json::json!(max));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
