//! Configuration validation errors and semantic validation.

use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate priors configuration semantically.
pub fn validate_priors(priors: &crate::priors::Priors) -> ValidationResult<()> {
    // Check schema version
    if priors.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: priors.schema_version.clone(),
        });
    }

    validate_probability("gene_prior.zero", priors.gene_prior.zero)?;
    validate_probability("gene_prior.one", priors.gene_prior.one)?;
    validate_probability("gene_prior.two", priors.gene_prior.two)?;

    // Gene prior must sum to 1.0 (within tolerance)
    let prior_sum = priors.gene_prior.zero + priors.gene_prior.one + priors.gene_prior.two;
    if (prior_sum - 1.0).abs() > 0.01 {
        return Err(ValidationError::SemanticError(format!(
            "gene_prior must sum to 1.0, got {} (zero={}, one={}, two={})",
            prior_sum, priors.gene_prior.zero, priors.gene_prior.one, priors.gene_prior.two,
        )));
    }

    validate_probability("trait_given_gene.zero", priors.trait_given_gene.zero)?;
    validate_probability("trait_given_gene.one", priors.trait_given_gene.one)?;
    validate_probability("trait_given_gene.two", priors.trait_given_gene.two)?;

    validate_probability("mutation_rate", priors.mutation_rate)?;

    Ok(())
}

/// Validate that a value is a probability in [0, 1].
fn validate_probability(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("Must be in [0, 1], got {}", value),
        });
    }

    Ok(())
}
