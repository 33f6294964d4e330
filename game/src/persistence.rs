use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::breeding::BreedingDomain;
use crate::economy::EconomyDomain;
use crate::fortune::FortuneDomain;
use crate::inventory::InventoryDomain;
use crate::journal::JournalDomain;
use crate::market::MarketDomain;
use crate::planting::PlantingDomain;
use crate::processing::ProcessingDomain;
use crate::progress::ProgressDomain;
use crate::staffing::StaffingDomain;
use crate::timing::TimingDomain;
use crate::Game;

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug)]
pub enum PersistenceError {
    Json(serde_json::Error),
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<bincode::error::EncodeError> for PersistenceError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::Encode(error)
    }
}

impl From<bincode::error::DecodeError> for PersistenceError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::Decode(error)
    }
}

/// Every piece of mutable game state. Catalogs and collaborators are not saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Save {
    pub version: u32,
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
}

impl Save {
    /// Repairs whatever an old or hand edited save got wrong.
    pub fn normalize(&mut self) {
        if self.version > SAVE_VERSION {
            warn!(
                "Save version {} is newer than {}, loading what is known",
                self.version, SAVE_VERSION
            );
        }
        self.version = SAVE_VERSION;
        self.timing.normalize();
        self.planting.normalize();
        self.processing.normalize();
        self.market.normalize();
        self.economy.normalize();
        self.progress.normalize();
        self.staffing.normalize();
        self.breeding.normalize();
        self.fortune.normalize();
        self.journal.normalize();
    }
}

impl Game {
    pub fn save(&self) -> Save {
        Save {
            version: SAVE_VERSION,
            timing: self.timing.clone(),
            planting: self.planting.clone(),
            processing: self.processing.clone(),
            market: self.market.clone(),
            economy: self.economy.clone(),
            inventory: self.inventory.clone(),
            progress: self.progress.clone(),
            staffing: self.staffing.clone(),
            breeding: self.breeding.clone(),
            fortune: self.fortune.clone(),
            journal: self.journal.clone(),
        }
    }

    /// Replaces the mutable state with a normalized copy of the given save.
    pub fn load(&mut self, mut save: Save) {
        save.normalize();
        self.timing = save.timing;
        self.planting = save.planting;
        self.processing = save.processing;
        self.market = save.market;
        self.economy = save.economy;
        self.inventory = save.inventory;
        self.progress = save.progress;
        self.staffing = save.staffing;
        self.breeding = save.breeding;
        self.fortune = save.fortune;
        self.journal = save.journal;
        self.progress.sync_quests(&self.known.quests);
    }

    pub fn save_json(&self) -> Result<String, PersistenceError> {
        let json = serde_json::to_string(&self.save())?;
        Ok(json)
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), PersistenceError> {
        let save: Save = serde_json::from_str(json)?;
        self.load(save);
        info!(
            "Save loaded: {} plants, {:.2} cash, level {}",
            self.planting.plants.len(),
            self.economy.cash,
            self.progress.level
        );
        Ok(())
    }

    /// Compact binary copy of the state.
    pub fn snapshot(&self) -> Result<Vec<u8>, PersistenceError> {
        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(self.save(), config)?;
        Ok(bytes)
    }

    pub fn restore(&mut self, snapshot: &[u8]) -> Result<(), PersistenceError> {
        let config = bincode::config::standard();
        let (save, _): (Save, usize) = bincode::serde::decode_from_slice(snapshot, config)?;
        self.load(save);
        Ok(())
    }
}
