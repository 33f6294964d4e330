#![allow(dead_code)]

use growbox::api::{Action, ActionError, Event};
use growbox::inventory::Consumable;
use growbox::market::{Contract, ContractId, ContractKind};
use growbox::math::{FixedRandom, Random};
use growbox::model::Knowledge;
use growbox::planting::Plant;
use growbox::processing::{Batch, BatchId, Finish, Stage};
use growbox::Game;

/// Random value high enough that no pest, news or fortune roll ever succeeds.
pub const CALM: f64 = 0.99;

pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

pub struct GameTestScenario {
    game: Game,
    current_action_result: Result<Vec<Event>, ActionError>,
    current_update_events: Vec<Event>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        Self::with_knowledge(Knowledge::standard())
    }

    pub fn with_knowledge(known: Knowledge) -> Self {
        let game = Game::with_random(known, Box::new(FixedRandom(CALM)));
        GameTestScenario {
            game,
            current_action_result: Ok(vec![]),
            current_update_events: vec![],
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn given_random(mut self, random: impl Random + 'static) -> Self {
        self.game.set_random(Box::new(random));
        self
    }

    pub fn given_cash(mut self, cash: f64) -> Self {
        self.game.economy.cash = cash;
        self
    }

    pub fn given_stock(mut self, grams: f64, quality: f64) -> Self {
        self.game.economy.add_stock(grams, quality);
        self
    }

    pub fn given_level(mut self, level: u32) -> Self {
        self.game.progress.level = level;
        self
    }

    pub fn given_seeds(mut self, strain: &str, count: u32) -> Self {
        self.game.inventory.add_seeds(strain, count);
        self
    }

    pub fn given_item(mut self, item: &str, count: u32) -> Self {
        self.game.inventory.add_items(item, count);
        self
    }

    pub fn given_consumable(mut self, consumable: Consumable, count: u32) -> Self {
        self.game.inventory.add_consumable(consumable, count);
        self
    }

    pub fn given_slots(mut self, slots: usize) -> Self {
        self.game.planting.slots_unlocked = slots;
        self
    }

    pub fn given_speed(mut self, speed: f64) -> Self {
        self.game.timing.speed = speed;
        self
    }

    pub fn given_plant(self, slot: usize, strain: &str) -> Self {
        self.given_plant_with(slot, strain, |_| {})
    }

    /// Fully grown plant that ripened a moment ago.
    pub fn given_ripe_plant(self, slot: usize, strain: &str) -> Self {
        self.given_plant_with(slot, strain, |plant| {
            plant.growth = 1.0;
            plant.ready_time = 0.0;
        })
    }

    pub fn given_plant_with<F>(mut self, slot: usize, strain: &str, setup: F) -> Self
    where
        F: FnOnce(&mut Plant),
    {
        let mut plant = Plant::new(slot, strain);
        setup(&mut plant);
        let plants = &mut self.game.planting.plants;
        plants.retain(|other| other.slot != slot);
        plants.push(plant);
        plants.sort_by_key(|plant| plant.slot);
        self
    }

    pub fn given_dry_batch(mut self, strain: &str, grams: f64, quality: f64) -> Self {
        let id = self.game.processing.batches_id.one(BatchId);
        self.game.processing.batches.push(Batch {
            id,
            strain: strain.to_string(),
            grams,
            quality,
            stage: Stage::Ready(Finish::Dry),
        });
        self
    }

    pub fn given_contract(
        mut self,
        kind: ContractKind,
        grams: f64,
        price: f64,
        expires_at: f64,
    ) -> Self {
        let id = self.game.market.contracts_id.one(ContractId);
        let contract = Contract {
            id,
            grams,
            price,
            expires_at,
            strain: None,
        };
        match kind {
            ContractKind::Offer => self.game.market.offers.push(contract),
            ContractKind::PharmacyOffer => self.game.market.pharmacy_offers.push(contract),
            ContractKind::Order => self.game.market.orders.push(contract),
        }
        self
    }

    pub fn given_hired(mut self, employee: &str) -> Self {
        if let Ok(hire) = self.game.staffing.hire(employee) {
            hire();
        }
        self
    }

    pub fn given_world_time(mut self, seconds: f64) -> Self {
        self.game.timing.world_seconds = seconds;
        self
    }

    pub fn given<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut Game),
    {
        setup(&mut self.game);
        self
    }

    pub fn when_player_perform(mut self, action: Action) -> Self {
        self.current_action_result = self.game.perform_action(action);
        self
    }

    pub fn when_time_passes(mut self, real_seconds: f64) -> Self {
        self.current_update_events = self.game.update(real_seconds);
        self
    }

    /// Feeds the same delta through the tick in small steps.
    pub fn when_time_passes_in_steps(mut self, real_seconds: f64, step: f64) -> Self {
        let mut remaining = real_seconds;
        let mut events = vec![];
        while remaining > 1e-9 {
            let delta = step.min(remaining);
            events.extend(self.game.update(delta));
            remaining -= delta;
        }
        self.current_update_events = events;
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        if let Err(error) = &self.current_action_result {
            panic!("action failed with {:?}", error);
        }
        self
    }

    pub fn then_action_should_fail<F>(self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected = expected_error(&self);
        assert_eq!(self.current_action_result, Err(expected));
        self
    }

    pub fn then_action_events_should_contain<F>(self, expected_event: F) -> Self
    where
        F: FnOnce(&Self) -> Event,
    {
        let expected = expected_event(&self);
        let events = self
            .current_action_result
            .as_ref()
            .unwrap_or_else(|error| panic!("action failed with {:?}", error));
        assert!(
            events.contains(&expected),
            "{:?} not found in {:?}",
            expected,
            events
        );
        self
    }

    pub fn then_update_events_should_contain(self, expected: Event) -> Self {
        assert!(
            self.current_update_events.contains(&expected),
            "{:?} not found in {:?}",
            expected,
            self.current_update_events
        );
        self
    }

    pub fn then_cash_should_be(self, expected: f64) -> Self {
        let cash = self.game.economy.cash;
        assert!(approx(cash, expected), "cash {} != {}", cash, expected);
        self
    }

    pub fn then_stock_should_be(self, expected: f64) -> Self {
        let grams = self.game.economy.grams;
        assert!(approx(grams, expected), "stock {} != {}", grams, expected);
        self
    }

    pub fn then_seeds_should_be(self, strain: &str, expected: u32) -> Self {
        assert_eq!(self.game.inventory.seeds_of(strain), expected);
        self
    }

    pub fn then_consumable_should_be(self, consumable: Consumable, expected: u32) -> Self {
        assert_eq!(self.game.inventory.consumables.count(consumable), expected);
        self
    }

    pub fn then_plant<F>(self, slot: usize, check: F) -> Self
    where
        F: FnOnce(&Plant),
    {
        match self.game.planting.get_plant(slot) {
            Ok(plant) => check(plant),
            Err(error) => panic!("no plant in slot {}: {:?}", slot, error),
        }
        self
    }

    pub fn then_slot_should_be_empty(self, slot: usize) -> Self {
        assert!(!self.game.planting.is_occupied(slot));
        self
    }

    pub fn then<F>(self, check: F) -> Self
    where
        F: FnOnce(&Game),
    {
        check(&self.game);
        self
    }
}
