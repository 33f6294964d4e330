use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::model::{Rarity, StrainKind};

pub const DEFAULT_STABILITY: f64 = 0.8;
pub const STABILITY_FACTOR: f64 = 0.9;
pub const TRAIT_INHERIT_CHANCE: f64 = 0.4;
pub const MUTATION_CHANCE: f64 = 0.1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingDomain {
    pub parents: [Option<String>; 2],
    /// Bred hybrids, looked up alongside the catalog strains.
    pub strains: Vec<StrainKind>,
    pub hybrids_id: Sequence,
    pub last_result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Breeding {
    ParentChanged {
        index: usize,
        strain: Option<String>,
    },
    HybridBred {
        strain: String,
        name: String,
        rarity: Rarity,
        generation: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum BreedingError {
    InvalidParentIndex { index: usize },
    ParentMissing { index: usize },
}
