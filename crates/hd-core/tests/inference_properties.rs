//! Property tests for the inference engine.
//!
//! The default model has no hard zeros, so every evidence pattern is
//! satisfiable and inference must succeed with normalized output.

use hd_config::Priors;
use hd_core::family::{Family, Person};
use hd_core::inference::run_inference;
use hd_math::sums_to_one;
use proptest::option;
use proptest::prelude::*;

fn family_with(phenotypes: [Option<bool>; 4]) -> Family {
    Family::new(vec![
        Person::founder("Molly", phenotypes[0]),
        Person::founder("Arthur", phenotypes[1]),
        Person::child("Ron", "Molly", "Arthur", phenotypes[2]),
        Person::child("Ginny", "Molly", "Arthur", phenotypes[3]),
    ])
    .expect("fixture pedigree is valid")
}

proptest! {
    #[test]
    fn posteriors_normalize_for_any_evidence(
        evidence in proptest::array::uniform4(option::of(any::<bool>()))
    ) {
        let family = family_with(evidence);
        let posteriors = run_inference(&family, &Priors::default()).unwrap();

        for posterior in &posteriors {
            prop_assert!(sums_to_one(&posterior.gene.as_vec(), 1e-6));
            prop_assert!(sums_to_one(&posterior.trait_dist.as_vec(), 1e-6));
        }

        // Observed evidence must come back as certainty.
        for (posterior, observed) in posteriors.iter().zip(evidence) {
            if let Some(has_trait) = observed {
                let mass = if has_trait {
                    posterior.trait_dist.present
                } else {
                    posterior.trait_dist.absent
                };
                prop_assert!((mass - 1.0).abs() < 1e-9);
            }
        }
    }
}
