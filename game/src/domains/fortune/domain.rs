use serde::{Deserialize, Serialize};

pub const FORTUNE_DURATION: f64 = 120.0;
pub const FIRST_FORTUNE_DELAY: f64 = 300.0;
pub const CASH_RAIN_CHANCE_PER_SEC: f64 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneDomain {
    pub active: Vec<FortuneEvent>,
    pub next_event: f64,
}

impl Default for FortuneDomain {
    fn default() -> Self {
        Self {
            active: vec![],
            next_event: FIRST_FORTUNE_DELAY,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum FortuneKind {
    PestPlague,
    HarvestBlessing,
    GrowthBoost,
    CashRain,
}

pub const FORTUNES: [FortuneKind; 4] = [
    FortuneKind::PestPlague,
    FortuneKind::HarvestBlessing,
    FortuneKind::GrowthBoost,
    FortuneKind::CashRain,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FortuneEvent {
    pub kind: FortuneKind,
    pub remaining: f64,
}

/// Multipliers derived from the active fortune events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blessings {
    pub pest_rate: f64,
    pub harvest_bonus: f64,
    pub growth_bonus: f64,
    pub cash_rain: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Fortune {
    FortuneStarted { kind: FortuneKind },
    FortuneEnded { kind: FortuneKind },
    CashRained { amount: f64 },
}
