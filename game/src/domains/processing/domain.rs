use serde::{Deserialize, Serialize};

use crate::collections::Sequence;

pub const DRYING_TIME: f64 = 240.0;
pub const CURING_TIME: f64 = 300.0;
pub const DRY_WEIGHT_MULTIPLIER: f64 = 0.3;
pub const DRY_QUALITY_MULTIPLIER: f64 = 1.5;
pub const CURING_QUALITY_BONUS: f64 = 0.25;
pub const PRESS_YIELD_MULTIPLIER: f64 = 0.35;
pub const DEFAULT_SLOTS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingDomain {
    pub batches: Vec<Batch>,
    pub slots: StageSlots,
    pub batches_id: Sequence,
}

impl Default for ProcessingDomain {
    fn default() -> Self {
        Self {
            batches: vec![],
            slots: StageSlots::default(),
            batches_id: Sequence::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSlots {
    pub drying: usize,
    pub curing: usize,
}

impl Default for StageSlots {
    fn default() -> Self {
        Self {
            drying: DEFAULT_SLOTS,
            curing: DEFAULT_SLOTS,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct BatchId(pub usize);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Dry,
    Cured,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Wet,
    Drying {
        remaining: f64,
        total: f64,
    },
    Curing {
        remaining: f64,
        total: f64,
        start: f64,
        target: f64,
    },
    Ready(Finish),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    pub strain: String,
    pub grams: f64,
    pub quality: f64,
    pub stage: Stage,
}

impl Batch {
    pub fn is_wet(&self) -> bool {
        self.stage == Stage::Wet
    }

    pub fn is_drying(&self) -> bool {
        matches!(self.stage, Stage::Drying { .. })
    }

    pub fn is_curing(&self) -> bool {
        matches!(self.stage, Stage::Curing { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.stage, Stage::Ready(_))
    }
}

/// Stage a kind of slot can be upgraded for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    Drying,
    Curing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Processing {
    BatchCreated { id: BatchId, grams: f64, quality: f64 },
    DryingStarted { id: BatchId },
    BatchDried { id: BatchId, grams: f64, quality: f64 },
    CuringStarted { id: BatchId, target: f64 },
    BatchCured { id: BatchId, quality: f64 },
    BatchCollected { id: BatchId, grams: f64 },
    BatchPressed { id: BatchId, output: f64 },
    SlotsUpgraded { station: Station, slots: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum ProcessingError {
    BatchNotFound { id: BatchId },
    NoWetBatches,
    DryingSlotsFull { slots: usize },
    CuringSlotsFull { slots: usize },
    BatchNotDry { id: BatchId },
    BatchNotReady { id: BatchId },
    NothingToCollect,
}
