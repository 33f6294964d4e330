use serde::{Deserialize, Serialize};

use crate::breeding::{Breeding, BreedingError};
use crate::collections::DictionaryError;
use crate::economy::{Economy, EconomyError};
use crate::fortune::Fortune;
use crate::inventory::{CartKind, Inventory, InventoryError};
use crate::journal::Journal;
use crate::market::{Buyer, ContractId, ContractKind, Market, MarketError};
use crate::planting::{Planting, PlantingError};
use crate::processing::{BatchId, Processing, ProcessingError, Station};
use crate::progress::{Progress, ProgressError};
use crate::staffing::{Staffing, StaffingError};
use crate::timing::{Timing, TimingError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Action {
    PlantSeed { slot: usize, strain: String },
    RemovePlant { slot: usize },
    UpgradePlant { slot: usize },
    HarvestPlant { slot: usize },
    HarvestAll,
    WaterPlant { slot: usize },
    WaterAll,
    FeedPlant { slot: usize },
    FeedAll,
    TreatPlant { slot: usize },
    TreatAll,
    UnlockSlot,
    ToggleAutoGrow { strain: String, enabled: bool },
    ToggleBulkConserve { enabled: bool },
    BuySeed { strain: String },
    BuyItem { item: String },
    BuyPack { pack: String },
    BuyUpgrade { upgrade: String },
    BuyResearch { node: String },
    BuyEstate { room: String },
    SellEstate,
    AddToCart { kind: CartKind, id: String, quantity: u32 },
    RemoveFromCart { index: usize },
    ClearCart,
    Checkout,
    SellGrams { grams: f64 },
    SellToBuyer { buyer: Buyer, grams: f64 },
    AcceptOffer { id: ContractId },
    AcceptPharmacyOffer { id: ContractId },
    DeliverOrder { id: ContractId },
    DeclineContract { kind: ContractKind, id: ContractId },
    StartDrying { batch: Option<BatchId> },
    StartCuring { batch: BatchId },
    CollectBatch { batch: BatchId },
    CollectAll,
    PressBatch { batch: BatchId },
    UpgradeStation { station: Station },
    HireEmployee { employee: String },
    UpgradeEmployee { employee: String },
    FireEmployee { employee: String },
    SendToRest { employee: String },
    GiveCoffee { employee: String },
    SignContract { contract: String },
    CancelContract { contract: String },
    SetParent { index: usize, strain: Option<String> },
    Breed,
    ClaimQuest { quest: String },
    Prestige,
    ChangeSpeed { speed: f64 },
    ChangeDifficulty { difficulty: String },
    ReadMessages,
}

impl Action {
    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<Action, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (action, _) = bincode::decode_from_slice(data, config)?;
        Ok(action)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Event {
    Timing(Vec<Timing>),
    Planting(Vec<Planting>),
    Processing(Vec<Processing>),
    Market(Vec<Market>),
    Economy(Vec<Economy>),
    Inventory(Vec<Inventory>),
    Progress(Vec<Progress>),
    Staffing(Vec<Staffing>),
    Breeding(Vec<Breeding>),
    Fortune(Vec<Fortune>),
    Journal(Vec<Journal>),
}

impl Event {
    pub fn is_empty(&self) -> bool {
        match self {
            Event::Timing(events) => events.is_empty(),
            Event::Planting(events) => events.is_empty(),
            Event::Processing(events) => events.is_empty(),
            Event::Market(events) => events.is_empty(),
            Event::Economy(events) => events.is_empty(),
            Event::Inventory(events) => events.is_empty(),
            Event::Progress(events) => events.is_empty(),
            Event::Staffing(events) => events.is_empty(),
            Event::Breeding(events) => events.is_empty(),
            Event::Fortune(events) => events.is_empty(),
            Event::Journal(events) => events.is_empty(),
        }
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }
}

macro_rules! domain_events {
    ($($domain:ident),* $(,)?) => {
        $(
            impl From<Vec<$domain>> for Event {
                fn from(events: Vec<$domain>) -> Self {
                    Self::$domain(events)
                }
            }
        )*
    };
}

domain_events!(
    Timing, Planting, Processing, Market, Economy, Inventory, Progress, Staffing, Breeding,
    Fortune, Journal,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum ActionError {
    Timing(TimingError),
    Planting(PlantingError),
    Processing(ProcessingError),
    Market(MarketError),
    Economy(EconomyError),
    Inventory(InventoryError),
    Progress(ProgressError),
    Staffing(StaffingError),
    Breeding(BreedingError),
    Dictionary(DictionaryError),
    StrainNotFound { strain: String },
    NoRemedy { pest: String },
}

macro_rules! domain_errors {
    ($($variant:ident($error:ident)),* $(,)?) => {
        $(
            impl From<$error> for ActionError {
                fn from(error: $error) -> Self {
                    Self::$variant(error)
                }
            }
        )*
    };
}

domain_errors!(
    Timing(TimingError),
    Planting(PlantingError),
    Processing(ProcessingError),
    Market(MarketError),
    Economy(EconomyError),
    Inventory(InventoryError),
    Progress(ProgressError),
    Staffing(StaffingError),
    Breeding(BreedingError),
    Dictionary(DictionaryError),
);
