use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::timing::DAYS_PER_YEAR;

pub const MASTERY_XP_PER_HARVEST: f64 = 10.0;
pub const PLANTING_XP: u64 = 6;
pub const FILTER_INTERVAL_DAYS: f64 = DAYS_PER_YEAR as f64 / 2.0;
pub const FILTER_PENALTY: f64 = 0.95;
pub const PRESTIGE_SLOTS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressDomain {
    pub level: u32,
    pub xp: u64,
    /// Harvest experience per strain.
    pub mastery: BTreeMap<String, f64>,
    pub haze: u32,
    pub resets: u32,
    pub research: BTreeSet<String>,
    pub upgrades: BTreeMap<String, u32>,
    pub grow_tier: usize,
    pub maintenance: Maintenance,
    pub quests: Vec<QuestProgress>,
    pub achievements: BTreeSet<String>,
}

impl Default for ProgressDomain {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            mastery: BTreeMap::new(),
            haze: 0,
            resets: 0,
            research: BTreeSet::new(),
            upgrades: BTreeMap::new(),
            grow_tier: 0,
            maintenance: Maintenance::default(),
            quests: vec![],
            achievements: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintenance {
    pub filter_penalty: bool,
    /// Calendar day the filter needs service, zero when unscheduled.
    pub filter_due_at: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Active,
    Ready,
    Claimed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub id: String,
    /// Progress of each catalog task, in catalog order.
    pub tasks: Vec<f64>,
    pub status: QuestStatus,
}

/// Something the player did that may advance quest tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Milestone {
    Harvest { strain: String, grams: f64 },
    Sell { grams: f64 },
    Cash { amount: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Progress {
    XpGained { xp: u64, total: u64 },
    LevelUp { level: u32 },
    MasteryGained { strain: String, xp: f64, level: u32 },
    ResearchBought { node: String },
    UpgradeBought { upgrade: String, level: u32 },
    GrowTierChanged { tier: usize },
    FilterDue,
    FilterServiced { next_due: f64 },
    QuestStarted { quest: String },
    QuestReady { quest: String },
    QuestClaimed { quest: String },
    AchievementUnlocked { achievement: String, haze: u32 },
    HazeChanged { haze: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum ProgressError {
    LevelTooLow { required: u32, level: u32 },
    ResearchAlreadyOwned { node: String },
    ResearchLocked { node: String, requires: String },
    NotEnoughResearchPoints { required: u32, available: u32 },
    QuestNotReady { quest: String },
    GrowTierAlreadyOwned { tier: usize },
    GrowTierNotOwned { tier: usize },
    NothingToPrestige,
}
