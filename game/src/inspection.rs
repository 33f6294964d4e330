use std::collections::BTreeMap;

use crate::api::ActionError;
use crate::formulas::{
    grow_time, trait_multiplier, trait_speed, upgrade_multiplier, ItemEffects, Modifiers,
    ResearchEffects,
};
use crate::market::MarketConditions;
use crate::model::{GrowRoom, StrainKind, TraitKind};
use crate::processing::DRY_WEIGHT_MULTIPLIER;
use crate::planting::{
    harvest_yield, quality_multiplier, GrowConditions, Plant, StrainProfile, YieldConditions,
};
use crate::Game;

pub const CLIMATE_UPGRADE: &str = "climate";
pub const BREAKROOM_UPGRADE: &str = "breakroom";

impl Game {
    /// Catalog strain or bred hybrid.
    pub fn find_strain(&self, strain: &str) -> Result<StrainKind, ActionError> {
        if let Ok(kind) = self.known.strains.get(strain) {
            return Ok(kind.clone());
        }
        self.breeding
            .get_strain(strain)
            .cloned()
            .ok_or(ActionError::StrainNotFound {
                strain: strain.to_string(),
            })
    }

    pub fn current_room(&self) -> Option<&GrowRoom> {
        self.known.rooms.at(self.progress.grow_tier)
    }

    /// Most slots the current grow room holds.
    pub fn slot_limit(&self) -> usize {
        self.current_room()
            .map(|room| room.slots)
            .unwrap_or(self.known.start.slots_unlocked)
    }

    pub fn modifiers(&self) -> Modifiers {
        let research = ResearchEffects::collect(&self.known.research, &self.progress.research);
        let items = ItemEffects::collect(&self.known.items, &self.inventory.items);
        let upgrades = upgrade_multiplier(&self.known.upgrades, &self.progress.upgrades);
        Modifiers::collect(
            research,
            items,
            upgrades,
            self.progress.haze,
            &self.known.pests,
            self.current_room(),
        )
    }

    /// Growth and pest multipliers of the selected difficulty, neutral when unknown.
    pub fn difficulty_factors(&self) -> (f64, f64) {
        self.known
            .difficulties
            .get(&self.planting.difficulty)
            .map(|difficulty| (difficulty.growth, difficulty.pest))
            .unwrap_or((1.0, 1.0))
    }

    pub fn strain_profile(&self, strain: &str, modifiers: &Modifiers) -> StrainProfile {
        match self.find_strain(strain) {
            Ok(kind) => StrainProfile {
                grow_time: grow_time(&kind, &modifiers.research, self.progress.mastery_of(strain)),
                speed: trait_speed(&kind.traits),
                water: trait_multiplier(&kind.traits, TraitKind::Water),
                nutrient: trait_multiplier(&kind.traits, TraitKind::Nutrient),
                pest: trait_multiplier(&kind.traits, TraitKind::Pest),
            },
            Err(_) => StrainProfile::default(),
        }
    }

    pub fn grow_conditions(&self, modifiers: &Modifiers) -> GrowConditions {
        let (difficulty_growth, difficulty_pest) = self.difficulty_factors();
        let blessings = self.fortune.blessings();
        let mut profiles = BTreeMap::new();
        for plant in &self.planting.plants {
            if !profiles.contains_key(&plant.strain) {
                profiles.insert(
                    plant.strain.clone(),
                    self.strain_profile(&plant.strain, modifiers),
                );
            }
        }
        GrowConditions {
            difficulty_growth,
            difficulty_pest,
            growth_bonus: blessings.growth_bonus,
            pest_rate: blessings.pest_rate,
            research_growth: modifiers.research.growth,
            item_growth: modifiers.items.growth,
            research_water: modifiers.research.water,
            water_multiplier: self.market.water_multiplier,
            day_of_year: self.timing.day_of_year(),
            climate_control: self.progress.upgrade_level(CLIMATE_UPGRADE) > 0,
            pest_modifiers: modifiers.pests.clone(),
            profiles,
        }
    }

    pub fn yield_conditions(&self, strain: &str, modifiers: &Modifiers) -> YieldConditions {
        YieldConditions {
            research_yield: modifiers.research.yield_bonus,
            research_quality: modifiers.research.quality,
            global: modifiers.global,
            harvest_bonus: self.fortune.blessings().harvest_bonus,
            mastery: self.progress.mastery_of(strain),
            quality_penalty: modifiers
                .quality_penalty(self.progress.maintenance.filter_penalty),
        }
    }

    pub fn market_conditions(&self, modifiers: &Modifiers) -> MarketConditions {
        MarketConditions {
            now: self.timing.world_seconds,
            total_earned: self.economy.total_earned,
            level: self.progress.level,
            offer_slots: modifiers.items.offer_slots,
            spawn_delta: modifiers.items.spawn_delta,
            price_multiplier: modifiers.price(),
            average_quality: self.economy.average_quality(),
            strains: self.known.strains.iter().map(|kind| kind.id.clone()).collect(),
        }
    }

    /// Live price of one gram of the current stock.
    pub fn sale_price(&self) -> f64 {
        let modifiers = self.modifiers();
        self.market
            .sale_price(modifiers.price(), self.economy.average_quality())
    }

    /// Expected wet yield and quality multiplier of a plant harvested now.
    pub fn harvest_preview(&self, plant: &Plant, modifiers: &Modifiers) -> (f64, f64) {
        let strain = match self.find_strain(&plant.strain) {
            Ok(strain) => strain,
            Err(_) => return (0.0, 0.0),
        };
        let conditions = self.yield_conditions(&plant.strain, modifiers);
        let harvest = harvest_yield(plant, &strain, &conditions);
        (harvest.value, quality_multiplier(plant, &conditions))
    }

    /// Dry grams per real second the growing plants are expected to bring in.
    pub fn production_rate(&self) -> f64 {
        let modifiers = self.modifiers();
        let (difficulty_growth, _) = self.difficulty_factors();
        let difficulty_growth = if difficulty_growth > 0.0 {
            difficulty_growth
        } else {
            1.0
        };
        let base: f64 = self
            .planting
            .plants
            .iter()
            .filter(|plant| !plant.is_ready() && plant.is_alive())
            .map(|plant| {
                let profile = self.strain_profile(&plant.strain, &modifiers);
                let time = profile.grow_time.max(1.0) / difficulty_growth;
                let (harvest, quality) = self.harvest_preview(plant, &modifiers);
                let slow = if plant.water <= 0.0 || plant.nutrients <= 0.0 {
                    0.25
                } else {
                    1.0
                };
                harvest * quality * DRY_WEIGHT_MULTIPLIER / time * slow
            })
            .sum();
        base * self.timing.speed
    }
}
