//! Heredity common types, IDs, and errors.
//!
//! This crate provides foundational types shared across hd-core modules:
//! - Person identity type used throughout the pedigree model
//! - Gene-count domain shared by the config tables and the engine
//! - Common error types with stable codes for machine parsing
//! - Output format specifications
//! - Schema versioning for report payloads

pub mod error;
pub mod gene;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use gene::{GeneCount, NUM_GENE_STATES};
pub use id::PersonId;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
