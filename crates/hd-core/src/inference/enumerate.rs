//! Hidden-state enumeration over the pedigree.
//!
//! Both enumerators walk bitmask subsets in ascending numeric order, so a
//! full enumeration visits assignments in a reproducible order.

use crate::family::Family;
use hd_common::GeneCount;
use hd_math::Subsets;

/// One fully-specified hidden-state assignment over the family.
///
/// `one_mask` and `two_mask` are disjoint by construction; everyone outside
/// both carries zero copies. Everyone outside `trait_mask` does not exhibit
/// the trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenAssignment {
    pub one_mask: u32,
    pub two_mask: u32,
    pub trait_mask: u32,
}

impl HiddenAssignment {
    /// Gene count assigned to person `idx`.
    pub fn gene_count(&self, idx: usize) -> GeneCount {
        let bit = 1u32 << idx;
        if self.one_mask & bit != 0 {
            GeneCount::One
        } else if self.two_mask & bit != 0 {
            GeneCount::Two
        } else {
            GeneCount::Zero
        }
    }

    /// Whether person `idx` exhibits the trait in this assignment.
    pub fn has_trait(&self, idx: usize) -> bool {
        self.trait_mask & (1u32 << idx) != 0
    }
}

/// Trait subsets consistent with observed evidence.
///
/// Generates the full power set and rejects candidates that contradict an
/// observation: everyone observed with the trait must be a member, everyone
/// observed without it must be absent. Both conditions collapse to two mask
/// comparisons.
pub struct TraitSets {
    inner: Subsets,
    required: u32,
    forbidden: u32,
}

impl TraitSets {
    pub fn new(family: &Family) -> Self {
        let mut required = 0u32;
        let mut forbidden = 0u32;
        for (i, person) in family.people().iter().enumerate() {
            match person.phenotype {
                Some(true) => required |= 1u32 << i,
                Some(false) => forbidden |= 1u32 << i,
                None => {}
            }
        }
        TraitSets {
            inner: Subsets::of(family.full_mask()),
            required,
            forbidden,
        }
    }
}

impl Iterator for TraitSets {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.inner
            .by_ref()
            .find(|mask| mask & self.required == self.required && mask & self.forbidden == 0)
    }
}

/// Every partition of the family into one-copy / two-copy groups, the rest
/// implicitly zero-copy.
///
/// Gene counts are always fully hidden, so no evidence filters this stage:
/// every `(one_mask, two_mask)` pair with disjoint masks is yielded exactly
/// once.
pub struct GenePartitions {
    full: u32,
    one_iter: Subsets,
    current_one: Option<u32>,
    two_iter: Subsets,
}

impl GenePartitions {
    pub fn new(family: &Family) -> Self {
        let full = family.full_mask();
        let mut one_iter = Subsets::of(full);
        let current_one = one_iter.next();
        GenePartitions {
            full,
            one_iter,
            current_one,
            two_iter: Subsets::of(full),
        }
    }
}

impl Iterator for GenePartitions {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        loop {
            let one = self.current_one?;
            if let Some(two) = self.two_iter.next() {
                return Some((one, two));
            }
            self.current_one = self.one_iter.next();
            if let Some(next_one) = self.current_one {
                self.two_iter = Subsets::of(self.full & !next_one);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Person;

    fn family_of(people: Vec<Person>) -> Family {
        Family::new(people).unwrap()
    }

    fn trio(harry_trait: Option<bool>) -> Family {
        family_of(vec![
            Person::founder("Lily", None),
            Person::founder("James", None),
            Person::child("Harry", "Lily", "James", harry_trait),
        ])
    }

    #[test]
    fn trait_sets_unfiltered_is_power_set() {
        let family = trio(None);
        assert_eq!(TraitSets::new(&family).count(), 8);
    }

    #[test]
    fn trait_sets_respect_positive_evidence() {
        let family = trio(Some(true));
        let harry_bit = 1u32 << family.index_of(&"Harry".into()).unwrap();
        let sets: Vec<u32> = TraitSets::new(&family).collect();
        assert_eq!(sets.len(), 4);
        assert!(sets.iter().all(|mask| mask & harry_bit != 0));
    }

    #[test]
    fn trait_sets_respect_negative_evidence() {
        let family = trio(Some(false));
        let harry_bit = 1u32 << family.index_of(&"Harry".into()).unwrap();
        let sets: Vec<u32> = TraitSets::new(&family).collect();
        assert_eq!(sets.len(), 4);
        assert!(sets.iter().all(|mask| mask & harry_bit == 0));
    }

    #[test]
    fn gene_partitions_count_is_three_to_the_n() {
        // Each person lands in exactly one of three groups.
        let family = trio(None);
        assert_eq!(GenePartitions::new(&family).count(), 27);
    }

    #[test]
    fn gene_partitions_are_disjoint_and_unique() {
        let family = trio(None);
        let mut seen = std::collections::HashSet::new();
        for (one, two) in GenePartitions::new(&family) {
            assert_eq!(one & two, 0);
            assert!(seen.insert((one, two)));
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let family = trio(Some(true));
        let first: Vec<(u32, u32)> = GenePartitions::new(&family).collect();
        let second: Vec<(u32, u32)> = GenePartitions::new(&family).collect();
        assert_eq!(first, second);

        let traits_a: Vec<u32> = TraitSets::new(&family).collect();
        let traits_b: Vec<u32> = TraitSets::new(&family).collect();
        assert_eq!(traits_a, traits_b);
    }

    #[test]
    fn assignment_lookup() {
        let assignment = HiddenAssignment {
            one_mask: 0b001,
            two_mask: 0b010,
            trait_mask: 0b100,
        };
        assert_eq!(assignment.gene_count(0), GeneCount::One);
        assert_eq!(assignment.gene_count(1), GeneCount::Two);
        assert_eq!(assignment.gene_count(2), GeneCount::Zero);
        assert!(assignment.has_trait(2));
        assert!(!assignment.has_trait(0));
    }
}
