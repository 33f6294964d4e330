use log::info;

pub use data::DataError;
pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::breeding::BreedingDomain;
use crate::economy::EconomyDomain;
use crate::fortune::FortuneDomain;
use crate::inventory::InventoryDomain;
use crate::journal::{JournalDomain, MessageSink, Severity};
use crate::market::{ContractKind, MarketDomain};
use crate::math::{Random, WyRandom};
use crate::model::Knowledge;
use crate::planting::PlantingDomain;
use crate::processing::ProcessingDomain;
use crate::progress::ProgressDomain;
use crate::staffing::StaffingDomain;
use crate::timing::TimingDomain;

mod actions;
pub mod api;
mod automation;
pub mod collections;
mod data;
mod domains;
pub mod formulas;
mod inspection;
pub mod journal;
pub mod math;
pub mod model;
pub mod persistence;
mod update;

/// Collects domain event vectors into game events.
#[macro_export]
macro_rules! occur {
    ($($events:expr),* $(,)?) => {
        vec![$($events.into()),*]
    };
}

pub struct Game {
    pub known: Knowledge,
    pub timing: TimingDomain,
    pub planting: PlantingDomain,
    pub processing: ProcessingDomain,
    pub market: MarketDomain,
    pub economy: EconomyDomain,
    pub inventory: InventoryDomain,
    pub progress: ProgressDomain,
    pub staffing: StaffingDomain,
    pub breeding: BreedingDomain,
    pub fortune: FortuneDomain,
    pub journal: JournalDomain,
    random: Box<dyn Random>,
    sink: Option<Box<dyn MessageSink>>,
}

impl Game {
    pub fn new(known: Knowledge) -> Self {
        Self::with_random(known, Box::new(WyRandom::new()))
    }

    pub fn with_random(known: Knowledge, random: Box<dyn Random>) -> Self {
        let mut game = Self {
            known,
            timing: TimingDomain::default(),
            planting: PlantingDomain::default(),
            processing: ProcessingDomain::default(),
            market: MarketDomain::default(),
            economy: EconomyDomain::default(),
            inventory: InventoryDomain::default(),
            progress: ProgressDomain::default(),
            staffing: StaffingDomain::default(),
            breeding: BreedingDomain::default(),
            fortune: FortuneDomain::default(),
            journal: JournalDomain::default(),
            random,
            sink: None,
        };
        let slots = game.known.start.slots_unlocked;
        game.start_run(slots);
        info!(
            "New game started with {} cash and {} slots",
            game.economy.cash, game.planting.slots_unlocked
        );
        game
    }

    pub fn set_random(&mut self, random: Box<dyn Random>) {
        self.random = random;
    }

    pub fn set_sink(&mut self, sink: Box<dyn MessageSink>) {
        self.sink = Some(sink);
    }

    /// Resets every run-scoped domain to the starting conditions.
    ///
    /// Haze, achievements, resets, the calendar, the speed and the journal survive.
    pub(crate) fn start_run(&mut self, slots: usize) {
        let start = self.known.start.clone();
        self.planting = PlantingDomain::default();
        self.processing = ProcessingDomain::default();
        self.market = MarketDomain::default();
        self.economy = EconomyDomain::default();
        self.inventory = InventoryDomain::default();
        self.staffing = StaffingDomain::default();
        self.breeding = BreedingDomain::default();
        self.fortune = FortuneDomain::default();
        self.economy.cash = start.cash;
        self.planting.slots_unlocked = slots.max(1);
        self.planting.difficulty = start.difficulty.clone();
        for (strain, count) in &start.seeds {
            self.inventory.add_seeds(strain, *count);
        }
        self.progress.sync_quests(&self.known.quests);
    }

    /// Records a message in the journal and forwards it to the sink.
    pub fn notify(&mut self, text: &str, severity: Severity) -> Vec<Event> {
        if let Some(sink) = self.sink.as_mut() {
            sink.receive(text, severity);
        }
        let events = self
            .journal
            .post(text, severity, self.timing.world_seconds);
        occur![events]
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        let events = match action {
            Action::PlantSeed { slot, strain } => self.plant_seed(slot, &strain)?,
            Action::RemovePlant { slot } => self.remove_plant(slot)?,
            Action::UpgradePlant { slot } => self.upgrade_plant(slot)?,
            Action::HarvestPlant { slot } => self.harvest_plant(slot)?,
            Action::HarvestAll => self.harvest_all()?,
            Action::WaterPlant { slot } => self.water_plant(slot)?,
            Action::WaterAll => self.water_all()?,
            Action::FeedPlant { slot } => self.feed_plant(slot)?,
            Action::FeedAll => self.feed_all()?,
            Action::TreatPlant { slot } => self.treat_plant(slot)?,
            Action::TreatAll => self.treat_all()?,
            Action::UnlockSlot => self.unlock_slot()?,
            Action::ToggleAutoGrow { strain, enabled } => self.toggle_auto_grow(&strain, enabled)?,
            Action::ToggleBulkConserve { enabled } => {
                occur![self.planting.set_bulk_conserve(enabled)]
            }
            Action::BuySeed { strain } => self.buy_seed(&strain)?,
            Action::BuyItem { item } => self.buy_item(&item)?,
            Action::BuyPack { pack } => self.buy_pack(&pack)?,
            Action::BuyUpgrade { upgrade } => self.buy_upgrade(&upgrade)?,
            Action::BuyResearch { node } => self.buy_research(&node)?,
            Action::BuyEstate { room } => self.buy_estate(&room)?,
            Action::SellEstate => self.sell_estate()?,
            Action::AddToCart { kind, id, quantity } => self.add_to_cart(kind, &id, quantity)?,
            Action::RemoveFromCart { index } => {
                let remove = self.inventory.remove_from_cart(index)?;
                occur![remove()]
            }
            Action::ClearCart => occur![self.inventory.clear_cart()],
            Action::Checkout => self.checkout()?,
            Action::SellGrams { grams } => self.sell_grams(grams)?,
            Action::SellToBuyer { buyer, grams } => self.sell_to_buyer(buyer, grams)?,
            Action::AcceptOffer { id } => self.settle_contract(ContractKind::Offer, id)?,
            Action::AcceptPharmacyOffer { id } => {
                self.settle_contract(ContractKind::PharmacyOffer, id)?
            }
            Action::DeliverOrder { id } => self.settle_contract(ContractKind::Order, id)?,
            Action::DeclineContract { kind, id } => {
                let decline = self.market.decline_contract(kind, id)?;
                occur![decline()]
            }
            Action::StartDrying { batch } => {
                let start = self.processing.start_drying(batch)?;
                occur![start()]
            }
            Action::StartCuring { batch } => {
                let start = self.processing.start_curing(batch)?;
                occur![start()]
            }
            Action::CollectBatch { batch } => self.collect_batch(batch)?,
            Action::CollectAll => self.collect_all()?,
            Action::PressBatch { batch } => self.press_batch(batch)?,
            Action::UpgradeStation { station } => self.upgrade_station(station)?,
            Action::HireEmployee { employee } => self.hire_employee(&employee)?,
            Action::UpgradeEmployee { employee } => self.upgrade_employee(&employee)?,
            Action::FireEmployee { employee } => self.fire_employee(&employee)?,
            Action::SendToRest { employee } => {
                let rest = self.staffing.set_resting(&employee, true)?;
                occur![rest()]
            }
            Action::GiveCoffee { employee } => self.give_coffee(&employee)?,
            Action::SignContract { contract } => self.sign_contract(&contract)?,
            Action::CancelContract { contract } => {
                let cancel = self.economy.cancel_contract(&contract)?;
                occur![cancel()]
            }
            Action::SetParent { index, strain } => self.set_parent(index, strain)?,
            Action::Breed => self.breed()?,
            Action::ClaimQuest { quest } => self.claim_quest(&quest)?,
            Action::Prestige => self.prestige()?,
            Action::ChangeSpeed { speed } => {
                let change = self.timing.change_speed(speed)?;
                occur![change()]
            }
            Action::ChangeDifficulty { difficulty } => self.change_difficulty(&difficulty)?,
            Action::ReadMessages => occur![self.journal.mark_read()],
        };
        Ok(events)
    }
}
