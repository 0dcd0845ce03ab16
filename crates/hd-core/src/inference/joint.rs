//! Joint probability of one fully-specified hidden assignment.
//!
//! Pure function of (family, priors, assignment): founders draw from the
//! unconditional gene prior, children from their parents' transmission
//! probabilities under the same assignment, and everyone contributes a
//! trait term conditioned on their own gene count.

use crate::family::Family;
use crate::inference::enumerate::HiddenAssignment;
use hd_common::GeneCount;
use hd_config::Priors;

/// Probability that a parent with `count` copies transmits the allele.
///
/// A heterozygous parent passes either allele with equal chance; otherwise
/// transmission is certain up to a single mutation event.
fn transmission_prob(count: GeneCount, mutation_rate: f64) -> f64 {
    match count {
        GeneCount::Zero => mutation_rate,
        GeneCount::One => 0.5,
        GeneCount::Two => 1.0 - mutation_rate,
    }
}

/// Two-allele combination: P(child has `child` copies | parents' transmission
/// probabilities). Symmetric in the two parents.
fn inherited_prob(child: GeneCount, mother_t: f64, father_t: f64) -> f64 {
    match child {
        GeneCount::Zero => (1.0 - mother_t) * (1.0 - father_t),
        GeneCount::One => mother_t * (1.0 - father_t) + (1.0 - mother_t) * father_t,
        GeneCount::Two => mother_t * father_t,
    }
}

/// Joint probability that every person has exactly the gene count and trait
/// value specified by `assignment`.
///
/// May legitimately evaluate to 0.0 under a model with hard zeros; never
/// negative, never panics.
pub fn joint_probability(family: &Family, priors: &Priors, assignment: &HiddenAssignment) -> f64 {
    let mut joint = 1.0;

    for idx in 0..family.len() {
        let count = assignment.gene_count(idx);
        let has_trait = assignment.has_trait(idx);

        let gene_term = match family.parent_indices(idx) {
            Some((mother, father)) => {
                let mother_t =
                    transmission_prob(assignment.gene_count(mother), priors.mutation_rate);
                let father_t =
                    transmission_prob(assignment.gene_count(father), priors.mutation_rate);
                inherited_prob(count, mother_t, father_t)
            }
            None => priors.gene_prior.prob(count),
        };

        joint *= gene_term * priors.trait_given_gene.prob(count, has_trait);
    }

    joint
}
