use serde::{Deserialize, Serialize};

use crate::collections::Sequence;

pub const DRIFT_INTERVAL: f64 = 600.0;
pub const PRICE_HISTORY_LIMIT: usize = 20;
pub const NEWS_CHANCE_PER_SEC: f64 = 0.01;
pub const MAX_OFFERS_BASE: usize = 3;
pub const MAX_ORDERS: usize = 3;
pub const OFFER_SPAWN_MIN: f64 = 45.0;
pub const OFFER_SPAWN_MAX: f64 = 90.0;
pub const PHARMACY_LEVEL: u32 = 4;
pub const MARKET_EVENT_DURATION: f64 = 30.0;
pub const COOLDOWN_EVENT_CHANCE: f64 = 0.3;

pub const TRENDS: [(&str, f64); 5] = [
    ("indica", 1.2),
    ("sativa", 1.15),
    ("organic", 1.1),
    ("glut", 0.85),
    ("stable", 1.0),
];

/// Random headlines as (name, price multiplier, seconds).
pub const NEWS: [(&str, f64, f64); 3] = [
    ("raid", 1.2, 300.0),
    ("glut", 0.85, 240.0),
    ("medical", 1.15, 360.0),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDomain {
    pub trend: String,
    pub trend_multiplier: f64,
    pub drift_timer: f64,
    pub price_history: Vec<f64>,
    pub news: Option<String>,
    pub news_multiplier: f64,
    pub news_timer: f64,
    pub water_multiplier: f64,
    pub event: Option<String>,
    pub event_multiplier: f64,
    pub event_timer: f64,
    pub next_event: f64,
    pub event_cooldown: f64,
    pub offers: Vec<Contract>,
    pub pharmacy_offers: Vec<Contract>,
    pub orders: Vec<Contract>,
    pub next_offer: f64,
    pub next_pharmacy_offer: f64,
    pub next_order: f64,
    pub reputation: u32,
    pub contracts_id: Sequence,
}

impl Default for MarketDomain {
    fn default() -> Self {
        Self {
            trend: "stable".to_string(),
            trend_multiplier: 1.0,
            drift_timer: DRIFT_INTERVAL,
            price_history: vec![],
            news: None,
            news_multiplier: 1.0,
            news_timer: 0.0,
            water_multiplier: 1.0,
            event: None,
            event_multiplier: 1.0,
            event_timer: 0.0,
            next_event: 90.0,
            event_cooldown: 300.0,
            offers: vec![],
            pharmacy_offers: vec![],
            orders: vec![],
            next_offer: 10.0,
            next_pharmacy_offer: 30.0,
            next_order: 60.0,
            reputation: 0,
            contracts_id: Sequence::default(),
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
pub struct ContractId(pub usize);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Offer,
    PharmacyOffer,
    Order,
}

/// Standing buy request, settled in full or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Contract {
    pub id: ContractId,
    pub grams: f64,
    pub price: f64,
    /// Absolute world time in seconds.
    pub expires_at: f64,
    #[serde(default)]
    pub strain: Option<String>,
}

impl Contract {
    pub fn is_expired(&self, now: f64) -> bool {
        self.expires_at <= now
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum Buyer {
    Street,
    Market,
    Dispensary,
}

impl Buyer {
    pub fn multiplier(self) -> f64 {
        match self {
            Buyer::Street => 0.85,
            Buyer::Market => 1.0,
            Buyer::Dispensary => 1.15,
        }
    }
}

/// Outcome of settling a contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deal {
    Settled { grams: f64, price: f64 },
    Expired,
}

/// Owner state the market reads while spawning contracts and recording prices.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConditions {
    pub now: f64,
    pub total_earned: f64,
    pub level: u32,
    pub offer_slots: u32,
    pub spawn_delta: f64,
    pub price_multiplier: f64,
    pub average_quality: f64,
    pub strains: Vec<String>,
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self {
            now: 0.0,
            total_earned: 0.0,
            level: 1,
            offer_slots: 0,
            spawn_delta: 0.0,
            price_multiplier: 1.0,
            average_quality: 1.0,
            strains: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Market {
    TrendChanged {
        trend: String,
        multiplier: f64,
        price: f64,
    },
    NewsStarted {
        news: String,
        multiplier: f64,
    },
    NewsEnded,
    EventStarted {
        event: String,
        multiplier: f64,
    },
    EventEnded,
    ContractSpawned {
        kind: ContractKind,
        contract: Contract,
    },
    ContractSettled {
        kind: ContractKind,
        id: ContractId,
        grams: f64,
        price: f64,
    },
    ContractExpired {
        kind: ContractKind,
        id: ContractId,
    },
    ContractDeclined {
        kind: ContractKind,
        id: ContractId,
    },
    ReputationChanged {
        reputation: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum MarketError {
    ContractNotFound { kind: ContractKind, id: ContractId },
}
