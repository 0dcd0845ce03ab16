//! Hidden gene-copy-count domain.

use serde::{Deserialize, Serialize};

/// Number of gene-count states in the model.
pub const NUM_GENE_STATES: usize = 3;

/// Hidden gene-copy count for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneCount {
    /// No copies of the allele of interest.
    Zero = 0,
    /// Exactly one copy.
    One = 1,
    /// Two copies.
    Two = 2,
}

impl GeneCount {
    /// All states in ascending copy order.
    pub const ALL: [GeneCount; NUM_GENE_STATES] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Convert from index to state.
    pub fn from_index(idx: usize) -> Option<GeneCount> {
        match idx {
            0 => Some(GeneCount::Zero),
            1 => Some(GeneCount::One),
            2 => Some(GeneCount::Two),
            _ => None,
        }
    }

    /// Convert state to index.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Number of copies as an integer.
    pub fn copies(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for GeneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.copies())
    }
}
