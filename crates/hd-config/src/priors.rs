//! Bayesian prior configuration types.
//!
//! These types match the priors.json format: an unconditional gene-count
//! prior for founders, a trait-given-gene conditional table, and a single
//! mutation rate applied per transmission event.

use hd_common::GeneCount;
use serde::{Deserialize, Serialize};

/// Complete priors configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priors {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Unconditional P(gene = g) applied to founders.
    pub gene_prior: GenePrior,

    /// P(trait = true | gene = g) per gene count.
    pub trait_given_gene: TraitGivenGene,

    /// Probability that a transmitted allele flips state.
    pub mutation_rate: f64,
}

/// Unconditional gene-count prior over {0, 1, 2} copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenePrior {
    pub zero: f64,
    pub one: f64,
    pub two: f64,

    #[serde(rename = "_comment", default)]
    pub comment: Option<String>,
}

impl GenePrior {
    /// P(gene = count) for a founder.
    pub fn prob(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }
}

/// Conditional trait table: P(trait = true | gene = g) per gene count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitGivenGene {
    pub zero: f64,
    pub one: f64,
    pub two: f64,

    #[serde(rename = "_comment", default)]
    pub comment: Option<String>,
}

impl TraitGivenGene {
    /// P(trait = has_trait | gene = count).
    pub fn prob(&self, count: GeneCount, has_trait: bool) -> f64 {
        let p_true = match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        };
        if has_trait {
            p_true
        } else {
            1.0 - p_true
        }
    }
}

impl Priors {
    /// The built-in inheritance model.
    ///
    /// A rare allele (prior 1% homozygous, 3% heterozygous) with a strongly
    /// correlated trait and a 1% per-transmission mutation rate.
    pub fn default_model() -> Self {
        Priors {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            description: Some("built-in rare-allele trait model".to_string()),
            gene_prior: GenePrior {
                zero: 0.96,
                one: 0.03,
                two: 0.01,
                comment: None,
            },
            trait_given_gene: TraitGivenGene {
                zero: 0.01,
                one: 0.56,
                two: 0.65,
                comment: None,
            },
            mutation_rate: 0.01,
        }
    }
}

impl Default for Priors {
    fn default() -> Self {
        Self::default_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn default_model_matches_published_tables() {
        let priors = Priors::default();
        assert!(approx_eq(priors.gene_prior.prob(GeneCount::Zero), 0.96, 1e-15));
        assert!(approx_eq(priors.gene_prior.prob(GeneCount::One), 0.03, 1e-15));
        assert!(approx_eq(priors.gene_prior.prob(GeneCount::Two), 0.01, 1e-15));
        assert!(approx_eq(priors.mutation_rate, 0.01, 1e-15));
    }

    #[test]
    fn trait_table_complements() {
        let priors = Priors::default();
        let p_true = priors.trait_given_gene.prob(GeneCount::One, true);
        let p_false = priors.trait_given_gene.prob(GeneCount::One, false);
        assert!(approx_eq(p_true + p_false, 1.0, 1e-15));
        assert!(approx_eq(p_true, 0.56, 1e-15));
    }

    #[test]
    fn parses_file_format_with_comments() {
        let json = r#"{
            "schema_version": "1.0.0",
            "gene_prior": {
                "zero": 0.9,
                "one": 0.08,
                "two": 0.02,
                "_comment": "pilot model"
            },
            "trait_given_gene": { "zero": 0.05, "one": 0.5, "two": 0.9 },
            "mutation_rate": 0.001
        }"#;
        let priors: Priors = serde_json::from_str(json).unwrap();
        assert!(approx_eq(priors.gene_prior.two, 0.02, 1e-15));
        assert_eq!(priors.gene_prior.comment.as_deref(), Some("pilot model"));
        assert!(priors.description.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let priors = Priors::default();
        let json = serde_json::to_string(&priors).unwrap();
        let back: Priors = serde_json::from_str(&json).unwrap();
        assert!(approx_eq(back.trait_given_gene.two, priors.trait_given_gene.two, 1e-15));
    }
}
