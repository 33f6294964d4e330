use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::math::GaugeMath;

pub const WATER_MAX: f64 = 100.0;
pub const WATER_START: f64 = 55.0;
pub const WATER_DRAIN_PER_SEC: f64 = 0.6;
pub const WATER_ADD_AMOUNT: f64 = 55.0;
pub const WATER_COST: f64 = 0.2;

pub const NUTRIENT_MAX: f64 = 100.0;
pub const NUTRIENT_START: f64 = 60.0;
pub const NUTRIENT_DRAIN_PER_SEC: f64 = 0.35;
pub const NUTRIENT_ADD_AMOUNT: f64 = 45.0;
pub const NUTRIENT_QUALITY_GAIN: f64 = 0.04;

pub const BOOST_SECONDS: f64 = 60.0;

pub const HEALTH_MAX: f64 = 100.0;
pub const HEALTH_DECAY_DRY: f64 = 6.0;
pub const HEALTH_DECAY_HUNGRY: f64 = 4.0;
pub const HEALTH_RECOVER_RATE: f64 = 2.0;

pub const QUALITY_MIN: f64 = 0.4;
pub const QUALITY_MAX: f64 = 1.5;
pub const QUALITY_GAIN_GOOD: f64 = 0.03;
pub const QUALITY_LOSS_BAD: f64 = 0.06;

pub const READY_DECAY_DELAY: f64 = 45.0;
pub const STAGES: usize = 5;
pub const FLOWERING_STAGE: usize = 3;
pub const MAX_SEGMENTS: usize = 128;
pub const PEST_SEVERITY_MAX: f64 = 3.0;
pub const PEST_SEVERITY_GROWTH: f64 = 0.04;
pub const PEST_GLOBAL_RATE: f64 = 0.25;

pub const BULK_WATER_THRESHOLD: f64 = 0.6;
pub const BULK_FEED_THRESHOLD: f64 = 0.65;
pub const BULK_CONSERVE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantingDomain {
    pub plants: Vec<Plant>,
    pub slots_unlocked: usize,
    pub auto_grow: BTreeSet<String>,
    pub bulk_conserve: bool,
    pub difficulty: String,
}

impl Default for PlantingDomain {
    fn default() -> Self {
        Self {
            plants: vec![],
            slots_unlocked: 2,
            auto_grow: BTreeSet::new(),
            bulk_conserve: false,
            difficulty: "normal".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infestation {
    pub pest: String,
    #[serde(default = "Infestation::initial_severity")]
    pub severity: f64,
}

impl Infestation {
    pub fn new(pest: &str) -> Self {
        Self {
            pest: pest.to_string(),
            severity: 1.0,
        }
    }

    fn initial_severity() -> f64 {
        1.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plant {
    pub slot: usize,
    pub strain: String,
    pub level: u32,
    pub growth: f64,
    pub water: f64,
    pub nutrients: f64,
    pub health: f64,
    pub quality: f64,
    pub ready_time: f64,
    pub pest: Option<Infestation>,
    pub boost: f64,
}

impl Default for Plant {
    fn default() -> Self {
        Self {
            slot: 0,
            strain: String::new(),
            level: 1,
            growth: 0.0,
            water: WATER_START,
            nutrients: NUTRIENT_START,
            health: HEALTH_MAX,
            quality: 1.0,
            ready_time: 0.0,
            pest: None,
            boost: 0.0,
        }
    }
}

impl Plant {
    pub fn new(slot: usize, strain: &str) -> Self {
        Self {
            slot,
            strain: strain.to_string(),
            ..Plant::default()
        }
    }

    pub fn is_ready(&self) -> bool {
        self.growth >= 1.0
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Growth stage index in `0..STAGES`.
    pub fn stage(&self) -> usize {
        ((self.growth * STAGES as f64).floor() as usize).min(STAGES - 1)
    }

    /// Brings every gauge back into its range, replacing non-finite values with defaults.
    pub fn normalize(&mut self) {
        self.level = self.level.max(1);
        self.growth = self.growth.finite_or(0.0).bounded(0.0, 1.0);
        self.water = self.water.finite_or(WATER_START).bounded(0.0, WATER_MAX);
        self.nutrients = self
            .nutrients
            .finite_or(NUTRIENT_START)
            .bounded(0.0, NUTRIENT_MAX);
        self.health = self.health.finite_or(HEALTH_MAX).bounded(0.0, HEALTH_MAX);
        self.quality = self.quality.finite_or(1.0).bounded(QUALITY_MIN, QUALITY_MAX);
        self.ready_time = self.ready_time.non_negative();
        self.boost = self.boost.non_negative();
        if matches!(&self.pest, Some(infestation) if infestation.pest.is_empty()) {
            self.pest = None;
        }
        if let Some(infestation) = &mut self.pest {
            infestation.severity = infestation
                .severity
                .finite_or(1.0)
                .bounded(1.0, PEST_SEVERITY_MAX);
        }
    }
}

/// Per-strain inputs of the lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainProfile {
    pub grow_time: f64,
    pub speed: f64,
    pub water: f64,
    pub nutrient: f64,
    pub pest: f64,
}

impl Default for StrainProfile {
    fn default() -> Self {
        Self {
            grow_time: 180.0,
            speed: 1.0,
            water: 1.0,
            nutrient: 1.0,
            pest: 1.0,
        }
    }
}

/// Environment shared by every plant during one advance.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowConditions {
    pub difficulty_growth: f64,
    pub difficulty_pest: f64,
    pub growth_bonus: f64,
    pub pest_rate: f64,
    pub research_growth: f64,
    pub item_growth: f64,
    pub research_water: f64,
    pub water_multiplier: f64,
    pub day_of_year: u32,
    pub climate_control: bool,
    pub pest_modifiers: BTreeMap<String, f64>,
    pub profiles: BTreeMap<String, StrainProfile>,
}

impl Default for GrowConditions {
    fn default() -> Self {
        Self {
            difficulty_growth: 1.0,
            difficulty_pest: 1.0,
            growth_bonus: 1.0,
            pest_rate: PEST_GLOBAL_RATE,
            research_growth: 0.0,
            item_growth: 1.0,
            research_water: 0.0,
            water_multiplier: 1.0,
            day_of_year: 100,
            climate_control: false,
            pest_modifiers: BTreeMap::new(),
            profiles: BTreeMap::new(),
        }
    }
}

impl GrowConditions {
    pub fn base_growth(&self) -> f64 {
        self.difficulty_growth * self.growth_bonus * (1.0 + self.research_growth) * self.item_growth
    }

    pub fn is_winter(&self) -> bool {
        self.day_of_year >= 335 || self.day_of_year <= 59
    }

    pub fn is_summer(&self) -> bool {
        (152..=243).contains(&self.day_of_year)
    }

    pub fn profile(&self, strain: &str) -> StrainProfile {
        self.profiles.get(strain).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Planting {
    PlantCreated {
        slot: usize,
        strain: String,
    },
    PlantRemoved {
        slot: usize,
    },
    PlantHarvested {
        slot: usize,
        strain: String,
    },
    PlantUpgraded {
        slot: usize,
        level: u32,
    },
    PlantWatered {
        slot: usize,
        water: f64,
    },
    PlantFed {
        slot: usize,
        nutrients: f64,
        quality: f64,
        boost: f64,
    },
    PlantTreated {
        slot: usize,
        pest: String,
    },
    PlantInfested {
        slot: usize,
        pest: String,
    },
    PlantRipened {
        slot: usize,
    },
    PlantDied {
        slot: usize,
    },
    SlotsChanged {
        unlocked: usize,
    },
    AutoGrowChanged {
        strain: String,
        enabled: bool,
    },
    BulkConserveChanged {
        enabled: bool,
    },
    DifficultyChanged {
        difficulty: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum PlantingError {
    SlotLocked { slot: usize },
    SlotOccupied { slot: usize },
    PlantNotFound { slot: usize },
    NotReadyToHarvest { slot: usize },
    PlantNotInfested { slot: usize },
    SlotLimitReached { limit: usize },
    NoPlantsInNeed,
}
