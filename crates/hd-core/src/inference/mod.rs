//! Exact inference over the pedigree Bayesian network.
//!
//! The engine enumerates every hidden-state assignment consistent with
//! observed trait evidence, scores each with the inheritance model, folds
//! the scores into per-person marginals, and normalizes once at the end.

pub mod enumerate;
pub mod joint;
pub mod posterior;

pub use enumerate::{GenePartitions, HiddenAssignment, TraitSets};
pub use joint::joint_probability;
pub use posterior::{
    run_inference, GeneDistribution, InferenceError, PersonPosterior, TraitDistribution,
};
