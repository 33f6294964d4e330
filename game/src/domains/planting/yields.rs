use crate::formulas::{clamp_yield, trait_multiplier};
use crate::math::GaugeMath;
use crate::model::{StrainKind, TraitKind};
use crate::planting::{Plant, HEALTH_MAX, QUALITY_MAX, QUALITY_MIN};

/// Growth progress where flowers start to count toward the harvest.
pub const FLOWER_START: f64 = 0.62;

/// Owner-wide multipliers entering the harvest formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldConditions {
    pub research_yield: f64,
    pub research_quality: f64,
    pub global: f64,
    pub harvest_bonus: f64,
    pub mastery: u32,
    pub quality_penalty: f64,
}

impl Default for YieldConditions {
    fn default() -> Self {
        Self {
            research_yield: 0.0,
            research_quality: 0.0,
            global: 1.0,
            harvest_bonus: 1.0,
            mastery: 0,
            quality_penalty: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarvestYield {
    pub value: f64,
    pub cap: f64,
}

pub fn harvest_yield(plant: &Plant, strain: &StrainKind, conditions: &YieldConditions) -> HarvestYield {
    let cap = strain.rarity.yield_cap();
    if plant.growth < FLOWER_START {
        return HarvestYield { value: 0.0, cap };
    }
    let base = if strain.base_yield > 0.0 {
        strain.base_yield
    } else {
        10.0
    };
    let flower = 0.3 + 0.7 * ((plant.growth - FLOWER_START) / (1.0 - FLOWER_START)).max(0.0);
    let level = 1.0 + (plant.level.max(1) as f64 - 1.0).ln_1p() * 0.35;
    let research = 1.0 + conditions.research_yield;
    let mastery = if conditions.mastery >= 1 { 1.05 } else { 1.0 };
    let timing = if plant.ready_time <= 10.0 {
        1.15
    } else if plant.ready_time > 60.0 {
        0.85
    } else {
        1.0
    };
    let traits = trait_multiplier(&strain.traits, TraitKind::Yield)
        * trait_multiplier(&strain.traits, TraitKind::Quality);
    let raw = base
        * flower
        * level
        * research
        * conditions.global
        * conditions.harvest_bonus
        * mastery
        * timing
        * traits;
    HarvestYield {
        value: clamp_yield(raw, cap),
        cap,
    }
}

pub fn quality_multiplier(plant: &Plant, conditions: &YieldConditions) -> f64 {
    let quality = plant.quality.bounded(QUALITY_MIN, QUALITY_MAX);
    let health = (plant.health / HEALTH_MAX).bounded(0.4, 1.1);
    quality * (1.0 + conditions.research_quality) * health * conditions.quality_penalty
}

/// Wet grams of a harvest, `bonus` above one for exceptional harvests.
pub fn harvest_grams(harvest: HarvestYield, quality: f64, bonus: f64) -> f64 {
    clamp_yield(
        harvest.value * quality * bonus,
        harvest.cap * quality * bonus.max(1.0),
    )
}
