use std::collections::{BTreeMap, BTreeSet};

use crate::collections::Dictionary;
use crate::model::{
    Effect, GrowRoom, ItemKind, PestKind, ResearchEffect, ResearchNode, StrainKind, StrainTrait,
    TraitKind, UpgradeKind,
};

/// Summed effects of every owned research node.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResearchEffects {
    pub yield_bonus: f64,
    pub growth: f64,
    pub quality: f64,
    pub pest: f64,
    pub pest_mold: f64,
    pub water: f64,
    pub cost: f64,
    pub growth_time: f64,
    pub price: f64,
    pub nutrient_cost: f64,
    pub unlocks: Vec<String>,
}

impl ResearchEffects {
    pub fn collect(nodes: &Dictionary<ResearchNode>, owned: &BTreeSet<String>) -> Self {
        let mut effects = ResearchEffects::default();
        for node in nodes.iter().filter(|node| owned.contains(&node.id)) {
            for effect in &node.effects {
                match effect {
                    ResearchEffect::Yield(value) => effects.yield_bonus += value,
                    ResearchEffect::Quality(value) => effects.quality += value,
                    ResearchEffect::Growth(value) => effects.growth += value,
                    ResearchEffect::GrowthTime(value) => effects.growth_time += value,
                    ResearchEffect::Pest(value) => effects.pest += value,
                    ResearchEffect::PestMold(value) => effects.pest_mold += value,
                    ResearchEffect::Water(value) => effects.water += value,
                    ResearchEffect::Cost(value) => effects.cost += value,
                    ResearchEffect::PriceMultiplier(value) => effects.price += value,
                    ResearchEffect::NutrientCost(value) => effects.nutrient_cost += value,
                    ResearchEffect::Unlock(feature) => effects.unlocks.push(feature.clone()),
                }
            }
        }
        effects
    }

    pub fn unlocked(&self, feature: &str) -> bool {
        self.unlocks.iter().any(|unlock| unlock == feature)
    }
}

/// Compounded effects of owned items, each applied once per owned copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEffects {
    pub price: f64,
    pub yield_multiplier: f64,
    pub quality: f64,
    pub growth: f64,
    pub pest: BTreeMap<String, f64>,
    pub offer_slots: u32,
    pub spawn_delta: f64,
    pub nutrient_boost: f64,
}

impl Default for ItemEffects {
    fn default() -> Self {
        Self {
            price: 1.0,
            yield_multiplier: 1.0,
            quality: 1.0,
            growth: 1.0,
            pest: BTreeMap::new(),
            offer_slots: 0,
            spawn_delta: 0.0,
            nutrient_boost: 0.0,
        }
    }
}

impl ItemEffects {
    pub fn collect(items: &Dictionary<ItemKind>, owned: &BTreeMap<String, u32>) -> Self {
        let mut effects = ItemEffects::default();
        for item in items.iter() {
            let count = owned.get(&item.id).copied().unwrap_or(0);
            if count == 0 {
                continue;
            }
            let power = count as i32;
            for effect in &item.effects {
                match effect {
                    Effect::PriceMultiplier(value) => effects.price *= value.powi(power),
                    Effect::YieldMultiplier(value) => effects.yield_multiplier *= value.powi(power),
                    Effect::QualityMultiplier(value) => effects.quality *= value.powi(power),
                    Effect::GrowthMultiplier(value) => effects.growth *= value.powi(power),
                    Effect::PestReduction { pest, factor } => {
                        let modifier = effects.pest.entry(pest.clone()).or_insert(1.0);
                        *modifier *= factor.powi(power);
                    }
                    Effect::OfferSlots(slots) => effects.offer_slots += slots * count,
                    Effect::SpawnDelta(delta) => effects.spawn_delta += delta * count as f64,
                    Effect::NutrientBoost(boost) => effects.nutrient_boost += boost * count as f64,
                }
            }
        }
        effects
    }
}

pub fn trait_multiplier(traits: &[StrainTrait], kind: TraitKind) -> f64 {
    traits
        .iter()
        .filter(|strain_trait| strain_trait.kind == kind)
        .fold(1.0, |multiplier, strain_trait| {
            multiplier * (1.0 + strain_trait.value)
        })
}

/// Growth traits carry negative values for faster strains.
pub fn trait_speed(traits: &[StrainTrait]) -> f64 {
    traits
        .iter()
        .filter(|strain_trait| strain_trait.kind == TraitKind::Growth)
        .fold(1.0, |multiplier, strain_trait| {
            multiplier * (1.0 - strain_trait.value)
        })
        .max(0.2)
}

pub fn upgrade_multiplier(upgrades: &Dictionary<UpgradeKind>, levels: &BTreeMap<String, u32>) -> f64 {
    upgrades
        .iter()
        .filter_map(|upgrade| {
            levels
                .get(&upgrade.id)
                .filter(|level| **level > 0)
                .map(|level| (1.0 + upgrade.increment).powi(*level as i32))
        })
        .product()
}

pub fn haze_multiplier(haze: u32) -> f64 {
    1.0 + 0.05 * (haze as f64).sqrt()
}

pub fn grow_time(strain: &StrainKind, research: &ResearchEffects, mastery: u32) -> f64 {
    let base = if strain.grow > 0.0 { strain.grow } else { 180.0 };
    let mastery = if mastery >= 5 { 0.9 } else { 1.0 };
    base * (1.0 + research.growth_time) * mastery
}

pub fn pest_modifiers(
    pests: &Dictionary<PestKind>,
    research: &ResearchEffects,
    room: Option<&GrowRoom>,
    items: &ItemEffects,
) -> BTreeMap<String, f64> {
    let general = (1.0 - research.pest).max(0.0);
    let mut modifiers = BTreeMap::new();
    for pest in pests.iter().filter(|pest| !pest.secondary) {
        let mut modifier = general;
        if pest.id == "mold" {
            modifier *= (1.0 - research.pest_mold).max(0.0);
            if let Some(room) = room {
                modifier *= room.mold_risk;
            }
        }
        modifiers.insert(pest.id.clone(), modifier);
    }
    for (pest, reduction) in &items.pest {
        let modifier = modifiers.entry(pest.clone()).or_insert(1.0);
        *modifier *= reduction;
    }
    modifiers
}

/// Everything the simulation derives from owned upgrades, items, research and prestige.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifiers {
    pub research: ResearchEffects,
    pub items: ItemEffects,
    pub global: f64,
    pub pests: BTreeMap<String, f64>,
}

impl Modifiers {
    pub fn collect(
        research: ResearchEffects,
        items: ItemEffects,
        upgrades: f64,
        haze: u32,
        pests: &Dictionary<PestKind>,
        room: Option<&GrowRoom>,
    ) -> Self {
        let global = upgrades * items.yield_multiplier * haze_multiplier(haze);
        let pests = pest_modifiers(pests, &research, room, &items);
        Self {
            research,
            items,
            global,
            pests,
        }
    }

    /// Live item and research price multiplier.
    pub fn price(&self) -> f64 {
        self.items.price * (1.0 + self.research.price)
    }

    /// Harvest quality penalty, replaced by the item multiplier when the filter is serviced.
    pub fn quality_penalty(&self, filter_penalty: bool) -> f64 {
        if filter_penalty {
            0.95
        } else {
            self.items.quality
        }
    }
}

