//! Heredity configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for priors.json
//! - Priors resolution (CLI → env → built-in defaults)
//! - Schema and semantic validation

pub mod priors;
pub mod resolve;
pub mod validate;

pub use priors::{GenePrior, Priors, TraitGivenGene};
pub use resolve::{load_priors, resolve_priors, PriorsSource};
pub use validate::{validate_priors, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
