//! Posterior marginals by exact enumeration.
//!
//! Folds every evidence-consistent hidden assignment's joint probability
//! into per-person gene and trait accumulators, then normalizes each
//! distribution exactly once. The fold owns its accumulator and returns an
//! immutable result.

use crate::family::Family;
use crate::inference::enumerate::{GenePartitions, HiddenAssignment, TraitSets};
use crate::inference::joint::joint_probability;
use hd_common::{GeneCount, PersonId, NUM_GENE_STATES};
use hd_config::Priors;
use hd_math::normalize_probs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised during posterior computation.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Every admissible assignment scored zero for this person; the observed
    /// evidence has no support under the configured model.
    #[error("evidence is jointly unsatisfiable at person {person}")]
    UnsatisfiableEvidence { person: PersonId },
}

impl From<InferenceError> for hd_common::Error {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::UnsatisfiableEvidence { person } => {
                hd_common::Error::UnsatisfiableEvidence { person }
            }
        }
    }
}

/// Posterior over gene-copy counts for one person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneDistribution {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GeneDistribution {
    fn from_vec(values: &[f64]) -> Self {
        Self {
            zero: values[0],
            one: values[1],
            two: values[2],
        }
    }

    pub fn as_vec(&self) -> [f64; NUM_GENE_STATES] {
        [self.zero, self.one, self.two]
    }

    /// Posterior mass on `count`.
    pub fn prob(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }
}

/// Posterior over trait presence for one person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent: f64,
}

impl TraitDistribution {
    pub fn as_vec(&self) -> [f64; 2] {
        [self.present, self.absent]
    }
}

/// Posterior pair for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub person: PersonId,
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub trait_dist: TraitDistribution,
}

/// Running unnormalized totals, indexed by person bit index.
struct Accumulator {
    gene: Vec<[f64; NUM_GENE_STATES]>,
    traits: Vec<[f64; 2]>,
}

impl Accumulator {
    fn new(len: usize) -> Self {
        Accumulator {
            gene: vec![[0.0; NUM_GENE_STATES]; len],
            traits: vec![[0.0; 2]; len],
        }
    }

    /// Add one scored assignment into every person's buckets.
    fn record(&mut self, assignment: &HiddenAssignment, p: f64) {
        for idx in 0..self.gene.len() {
            self.gene[idx][assignment.gene_count(idx).to_index()] += p;
            self.traits[idx][usize::from(assignment.has_trait(idx))] += p;
        }
    }
}

/// Compute per-person posterior marginals by exact enumeration.
///
/// Enumerates trait subsets consistent with the evidence, then every gene
/// partition for each, scoring all of them with [`joint_probability`].
pub fn run_inference(
    family: &Family,
    priors: &Priors,
) -> Result<Vec<PersonPosterior>, InferenceError> {
    let mut acc = Accumulator::new(family.len());
    let mut assignments = 0u64;

    for trait_mask in TraitSets::new(family) {
        for (one_mask, two_mask) in GenePartitions::new(family) {
            let assignment = HiddenAssignment {
                one_mask,
                two_mask,
                trait_mask,
            };
            let p = joint_probability(family, priors, &assignment);
            acc.record(&assignment, p);
            assignments += 1;
        }
    }

    tracing::debug!(assignments, people = family.len(), "enumeration complete");

    let mut result = Vec::with_capacity(family.len());
    for (idx, person) in family.people().iter().enumerate() {
        let gene = normalize_probs(&acc.gene[idx]);
        let traits = normalize_probs(&acc.traits[idx]);
        if gene.iter().chain(traits.iter()).any(|v| v.is_nan()) {
            return Err(InferenceError::UnsatisfiableEvidence {
                person: person.id.clone(),
            });
        }
        result.push(PersonPosterior {
            person: person.id.clone(),
            gene: GeneDistribution::from_vec(&gene),
            trait_dist: TraitDistribution {
                present: traits[1],
                absent: traits[0],
            },
        });
    }

    Ok(result)
}
