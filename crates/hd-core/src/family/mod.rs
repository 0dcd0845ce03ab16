//! Pedigree model: persons, parent links, and construction-time validation.
//!
//! A [`Family`] is immutable once built. Construction resolves parent ids to
//! indices and checks every structural invariant the inference engine relies
//! on, so the engine itself never re-validates.

pub mod loader;

use hd_common::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Maximum family size accepted for exact enumeration.
///
/// The triple-nested subset enumeration is exponential in family size, and
/// person indices must fit a u32 bitmask. Past 20 people a single run stops
/// being tractable long before the mask runs out of bits.
pub const MAX_FAMILY_SIZE: usize = 20;

/// Errors raised while constructing a pedigree.
#[derive(Debug, Error)]
pub enum FamilyError {
    #[error("pedigree contains no people")]
    Empty,

    #[error("duplicate person id: {id}")]
    Duplicate { id: PersonId },

    #[error("person {person} has exactly one parent recorded; expected both or neither")]
    IncompleteParents { person: PersonId },

    #[error("person {child} references unknown parent {parent}")]
    DanglingParent { child: PersonId, parent: PersonId },

    #[error("person {person} is their own ancestor")]
    SelfAncestry { person: PersonId },

    #[error("pedigree has {count} people; enumeration is capped at {max}")]
    TooLarge { count: usize, max: usize },
}

impl From<FamilyError> for hd_common::Error {
    fn from(err: FamilyError) -> Self {
        match err {
            FamilyError::Empty => hd_common::Error::Pedigree(err.to_string()),
            FamilyError::Duplicate { id } => hd_common::Error::DuplicatePerson { id },
            FamilyError::IncompleteParents { person } => {
                hd_common::Error::IncompleteParents { person }
            }
            FamilyError::DanglingParent { child, parent } => {
                hd_common::Error::DanglingParent { child, parent }
            }
            FamilyError::SelfAncestry { person } => hd_common::Error::SelfAncestry { person },
            FamilyError::TooLarge { count, max } => {
                hd_common::Error::PedigreeTooLarge { count, max }
            }
        }
    }
}

/// One individual in the pedigree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,

    /// Mother's id; present iff `father` is present.
    pub mother: Option<PersonId>,

    /// Father's id; present iff `mother` is present.
    pub father: Option<PersonId>,

    /// Observed trait evidence; `None` means unknown.
    pub phenotype: Option<bool>,
}

impl Person {
    /// A person with no recorded parents.
    pub fn founder(id: impl Into<PersonId>, phenotype: Option<bool>) -> Self {
        Person {
            id: id.into(),
            mother: None,
            father: None,
            phenotype,
        }
    }

    /// A person with both parents recorded.
    pub fn child(
        id: impl Into<PersonId>,
        mother: impl Into<PersonId>,
        father: impl Into<PersonId>,
        phenotype: Option<bool>,
    ) -> Self {
        Person {
            id: id.into(),
            mother: Some(mother.into()),
            father: Some(father.into()),
            phenotype,
        }
    }

    /// Whether this person has no parents in the model.
    pub fn is_founder(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// An immutable, validated pedigree.
///
/// People keep their input order; person `i` maps to bit `i` in the
/// enumeration bitmasks.
#[derive(Debug, Clone)]
pub struct Family {
    people: Vec<Person>,
    index: HashMap<PersonId, usize>,
    parents: Vec<Option<(usize, usize)>>,
}

impl Family {
    /// Build a pedigree, validating every structural invariant.
    pub fn new(people: Vec<Person>) -> Result<Self, FamilyError> {
        if people.is_empty() {
            return Err(FamilyError::Empty);
        }
        if people.len() > MAX_FAMILY_SIZE {
            return Err(FamilyError::TooLarge {
                count: people.len(),
                max: MAX_FAMILY_SIZE,
            });
        }

        let mut index = HashMap::with_capacity(people.len());
        for (i, person) in people.iter().enumerate() {
            if index.insert(person.id.clone(), i).is_some() {
                return Err(FamilyError::Duplicate {
                    id: person.id.clone(),
                });
            }
        }

        let mut parents = Vec::with_capacity(people.len());
        for person in &people {
            let pair = match (&person.mother, &person.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => {
                    let mother_idx = *index.get(mother).ok_or_else(|| {
                        FamilyError::DanglingParent {
                            child: person.id.clone(),
                            parent: mother.clone(),
                        }
                    })?;
                    let father_idx = *index.get(father).ok_or_else(|| {
                        FamilyError::DanglingParent {
                            child: person.id.clone(),
                            parent: father.clone(),
                        }
                    })?;
                    Some((mother_idx, father_idx))
                }
                _ => {
                    return Err(FamilyError::IncompleteParents {
                        person: person.id.clone(),
                    })
                }
            };
            parents.push(pair);
        }

        let family = Family {
            people,
            index,
            parents,
        };
        family.check_acyclic()?;
        Ok(family)
    }

    /// Reject pedigrees where someone is their own ancestor.
    fn check_acyclic(&self) -> Result<(), FamilyError> {
        for start in 0..self.people.len() {
            let mut stack: Vec<usize> = Vec::new();
            let mut seen = vec![false; self.people.len()];
            if let Some((m, f)) = self.parents[start] {
                stack.push(m);
                stack.push(f);
            }
            while let Some(node) = stack.pop() {
                if node == start {
                    return Err(FamilyError::SelfAncestry {
                        person: self.people[start].id.clone(),
                    });
                }
                if seen[node] {
                    continue;
                }
                seen[node] = true;
                if let Some((m, f)) = self.parents[node] {
                    stack.push(m);
                    stack.push(f);
                }
            }
        }
        Ok(())
    }

    /// Number of people in the pedigree.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Always false for a constructed pedigree; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in input order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Person at bit index `idx`.
    pub fn person(&self, idx: usize) -> &Person {
        &self.people[idx]
    }

    /// Bit index for an id.
    pub fn index_of(&self, id: &PersonId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// (mother, father) bit indices, or `None` for a founder.
    pub fn parent_indices(&self, idx: usize) -> Option<(usize, usize)> {
        self.parents[idx]
    }

    /// Bitmask with one bit per person.
    pub fn full_mask(&self) -> u32 {
        (1u32 << self.people.len()) - 1
    }
}
