use log::info;

use crate::api::{ActionError, Event};
use crate::formulas::{harvest_tier, harvest_xp, plant_upgrade_cost, slot_unlock_cost};
use crate::inventory::{Consumable, Consumables, SHEARS};
use crate::planting::{
    harvest_grams, harvest_yield, quality_multiplier, PlantingError, WATER_COST,
};
use crate::processing::DRY_WEIGHT_MULTIPLIER;
use crate::progress::{Milestone, MASTERY_XP_PER_HARVEST, PLANTING_XP};
use crate::{occur, Game};

/// Mastery level from which harvests may come out exceptional.
const EXCEPTIONAL_MASTERY: u32 = 10;
const EXCEPTIONAL_CHANCE: f64 = 0.15;
const EXCEPTIONAL_QUALITY: f64 = 2.0;

impl Game {
    pub(crate) fn plant_seed(
        &mut self,
        slot: usize,
        strain: &str,
    ) -> Result<Vec<Event>, ActionError> {
        self.find_strain(strain)?;
        let take_seed = self.inventory.take_seed(strain)?;
        let create_plant = self.planting.create_plant(slot, strain)?;
        let xp = self.progress.gain_xp(PLANTING_XP);
        Ok(occur![take_seed(), create_plant(), xp])
    }

    /// Digs the plant out and puts its seed back.
    pub(crate) fn remove_plant(&mut self, slot: usize) -> Result<Vec<Event>, ActionError> {
        let (strain, remove_plant) = self.planting.remove_plant(slot)?;
        let refund = self.inventory.add_seeds(&strain, 1);
        Ok(occur![remove_plant(), refund])
    }

    pub(crate) fn upgrade_plant(&mut self, slot: usize) -> Result<Vec<Event>, ActionError> {
        let plant = self.planting.get_plant(slot)?;
        let level = plant.level;
        let strain = self.find_strain(&plant.strain)?;
        let cost = plant_upgrade_cost(strain.cost, level);
        let spend_grams = self.economy.spend_grams(cost)?;
        let upgrade_plant = self.planting.upgrade_plant(slot)?;
        Ok(occur![spend_grams(), upgrade_plant()])
    }

    pub(crate) fn harvest_plant(&mut self, slot: usize) -> Result<Vec<Event>, ActionError> {
        let plant = self.planting.get_plant(slot)?.clone();
        if !plant.is_ready() || !plant.is_alive() {
            return Err(PlantingError::NotReadyToHarvest { slot }.into());
        }
        let strain = self.find_strain(&plant.strain)?;
        let modifiers = self.modifiers();
        let conditions = self.yield_conditions(&plant.strain, &modifiers);
        let harvest = harvest_yield(&plant, &strain, &conditions);
        let quality = quality_multiplier(&plant, &conditions);
        let grams = harvest_grams(harvest, quality, 1.0);
        let exceptional =
            conditions.mastery >= EXCEPTIONAL_MASTERY && self.random.chance(EXCEPTIONAL_CHANCE);
        let batch_quality = if exceptional {
            quality * EXCEPTIONAL_QUALITY
        } else {
            quality
        };
        let xp = harvest_xp(grams * DRY_WEIGHT_MULTIPLIER, harvest_tier(quality));
        let replant = self.planting.auto_grow.contains(&plant.strain)
            && self.inventory.seeds_of(&plant.strain) > 0
            && slot < self.planting.slots_unlocked;

        let (_, harvest_plant) = self.planting.harvest_plant(slot, replant)?;
        let create_batch = self
            .processing
            .create_batch(&plant.strain, grams, batch_quality);
        let wear_shears = self.inventory.wear_item(SHEARS);
        let take_seed = if replant {
            match self.inventory.take_seed(&plant.strain) {
                Ok(take_seed) => take_seed(),
                Err(_) => vec![],
            }
        } else {
            vec![]
        };
        let mastery = self
            .progress
            .gain_mastery(&plant.strain, MASTERY_XP_PER_HARVEST);
        let gain_xp = self.progress.gain_xp(xp);
        let milestone = Milestone::Harvest {
            strain: plant.strain.clone(),
            grams,
        };
        let quests = self
            .progress
            .record_milestone(&milestone, &self.known.quests);
        info!(
            "Harvested {:.1} g of {} from slot {} at quality {:.2}",
            grams, plant.strain, slot, batch_quality
        );
        Ok(occur![
            harvest_plant(),
            create_batch,
            wear_shears,
            take_seed,
            mastery,
            gain_xp,
            quests,
        ])
    }

    pub(crate) fn harvest_all(&mut self) -> Result<Vec<Event>, ActionError> {
        let slots = self.planting.ready_slots();
        self.care_all(slots, Game::harvest_plant)
    }

    pub(crate) fn water_plant(&mut self, slot: usize) -> Result<Vec<Event>, ActionError> {
        let water_plant = self.planting.water_plant(slot)?;
        let spend_cash = self.economy.spend_cash(WATER_COST)?;
        Ok(occur![spend_cash(), water_plant()])
    }

    pub(crate) fn water_all(&mut self) -> Result<Vec<Event>, ActionError> {
        let slots = self.planting.thirsty_slots();
        self.care_all(slots, Game::water_plant)
    }

    /// Feeds one nutrient dose, adding a growth booster when one is in stock.
    pub(crate) fn feed_plant(&mut self, slot: usize) -> Result<Vec<Event>, ActionError> {
        let bonus = 1.0 + self.modifiers().items.nutrient_boost;
        let boost = self.inventory.consumables.count(Consumable::Booster) > 0;
        let feed_plant = self.planting.feed_plant(slot, bonus, boost)?;
        let take_nutrient = self.inventory.take_consumable(Consumable::Nutrient, 1)?;
        let mut events = occur![take_nutrient(), feed_plant()];
        if boost {
            if let Some(take_booster) = self.inventory.use_optional(Consumable::Booster) {
                events.push(take_booster.into());
            }
        }
        Ok(events)
    }

    pub(crate) fn feed_all(&mut self) -> Result<Vec<Event>, ActionError> {
        let slots = self.planting.hungry_slots();
        self.care_all(slots, Game::feed_plant)
    }

    pub(crate) fn treat_plant(&mut self, slot: usize) -> Result<Vec<Event>, ActionError> {
        let (pest, treat_plant) = self.planting.treat_plant(slot)?;
        let remedy = remedy_for(&pest, &self.inventory.consumables)
            .ok_or(ActionError::NoRemedy { pest })?;
        let take_remedy = self.inventory.take_consumable(remedy, 1)?;
        Ok(occur![take_remedy(), treat_plant()])
    }

    pub(crate) fn treat_all(&mut self) -> Result<Vec<Event>, ActionError> {
        let slots = self.planting.infested_slots();
        self.care_all(slots, Game::treat_plant)
    }

    /// Opens the next slot for grams, up to what the grow room holds.
    pub(crate) fn unlock_slot(&mut self) -> Result<Vec<Event>, ActionError> {
        let limit = self.slot_limit();
        let (unlocked, unlock_slot) = self.planting.unlock_slot(limit)?;
        let spend_grams = self.economy.spend_grams(slot_unlock_cost(unlocked))?;
        Ok(occur![spend_grams(), unlock_slot()])
    }

    pub(crate) fn toggle_auto_grow(
        &mut self,
        strain: &str,
        enabled: bool,
    ) -> Result<Vec<Event>, ActionError> {
        self.find_strain(strain)?;
        Ok(occur![self.planting.set_auto_grow(strain, enabled)])
    }

    pub(crate) fn change_difficulty(&mut self, difficulty: &str) -> Result<Vec<Event>, ActionError> {
        self.known.difficulties.get(difficulty)?;
        Ok(occur![self.planting.change_difficulty(difficulty)])
    }

    /// Applies `care` to every slot, keeping what succeeded.
    ///
    /// Fails only when nothing needed care or every attempt was rejected.
    fn care_all(
        &mut self,
        slots: Vec<usize>,
        care: fn(&mut Game, usize) -> Result<Vec<Event>, ActionError>,
    ) -> Result<Vec<Event>, ActionError> {
        if slots.is_empty() {
            return Err(PlantingError::NoPlantsInNeed.into());
        }
        let mut events = vec![];
        let mut rejection = None;
        for slot in slots {
            match care(self, slot) {
                Ok(done) => events.extend(done),
                Err(error) => {
                    rejection.get_or_insert(error);
                }
            }
        }
        match rejection {
            Some(error) if events.is_empty() => Err(error),
            _ => Ok(events),
        }
    }
}

fn remedy_for(pest: &str, stock: &Consumables) -> Option<Consumable> {
    match pest {
        "mold" | "root_rot" | "leaf_rot" => Some(Consumable::Fungicide),
        "mites" | "thrips" if stock.spray == 0 && stock.beneficials > 0 => {
            Some(Consumable::Beneficials)
        }
        "mites" | "thrips" => Some(Consumable::Spray),
        _ => None,
    }
}
