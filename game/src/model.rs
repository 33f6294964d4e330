use serde::{Deserialize, Serialize};

use crate::collections::{Dictionary, Keyed};
use crate::inventory::Consumable;

/// Immutable reference data the engine reads but never mutates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Knowledge {
    pub strains: Dictionary<StrainKind>,
    pub items: Dictionary<ItemKind>,
    pub pests: Dictionary<PestKind>,
    pub research: Dictionary<ResearchNode>,
    pub rooms: Dictionary<GrowRoom>,
    pub employees: Dictionary<EmployeeKind>,
    pub upgrades: Dictionary<UpgradeKind>,
    pub packs: Dictionary<ConsumablePack>,
    pub difficulties: Dictionary<Difficulty>,
    pub traits: Dictionary<StrainTrait>,
    pub quests: Dictionary<QuestKind>,
    pub achievements: Dictionary<AchievementKind>,
    pub contracts: Dictionary<PharmacyContract>,
    pub start: StartingConditions,
}

#[derive(
    Debug,
    Default,
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
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Upper bound of a single harvest before quality scaling.
    pub fn yield_cap(self) -> f64 {
        match self {
            Rarity::Common => 500.0,
            Rarity::Uncommon => 900.0,
            Rarity::Rare => 1500.0,
            Rarity::Epic => 2800.0,
            Rarity::Legendary => 5000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Yield,
    Growth,
    Water,
    Pest,
    Quality,
    Price,
    Nutrient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrainTrait {
    pub id: String,
    pub kind: TraitKind,
    pub value: f64,
}

impl Keyed for StrainTrait {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineage {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrainKind {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub rarity: Rarity,
    pub cost: f64,
    #[serde(rename = "yield")]
    pub base_yield: f64,
    pub grow: f64,
    pub quality: f64,
    pub traits: Vec<StrainTrait>,
    pub stability: Option<f64>,
    pub lineage: Option<Lineage>,
    pub generation: u32,
}

impl Default for StrainKind {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            tag: String::new(),
            rarity: Rarity::Common,
            cost: 50.0,
            base_yield: 10.0,
            grow: 180.0,
            quality: 1.0,
            traits: vec![],
            stability: None,
            lineage: None,
            generation: 1,
        }
    }
}

impl Keyed for StrainKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    PriceMultiplier(f64),
    YieldMultiplier(f64),
    QualityMultiplier(f64),
    GrowthMultiplier(f64),
    PestReduction { pest: String, factor: f64 },
    OfferSlots(u32),
    SpawnDelta(f64),
    NutrientBoost(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemKind {
    pub id: String,
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Keyed for ItemKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PestAffinity {
    Dry,
    Wet,
    WetRoot,
    Overfeed,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PestEffect {
    pub growth: f64,
    pub health: f64,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestKind {
    pub id: String,
    pub name: String,
    pub base: f64,
    pub effect: PestEffect,
    pub affinity: PestAffinity,
    /// Only rolls while the plant is flowering.
    #[serde(default)]
    pub flowering_only: bool,
    /// Rolls only after every primary pest missed, ignoring difficulty and countermeasures.
    #[serde(default)]
    pub secondary: bool,
}

impl Keyed for PestKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchEffect {
    Yield(f64),
    Quality(f64),
    Growth(f64),
    GrowthTime(f64),
    Pest(f64),
    PestMold(f64),
    Water(f64),
    Cost(f64),
    PriceMultiplier(f64),
    NutrientCost(f64),
    Unlock(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchNode {
    pub id: String,
    pub branch: String,
    pub name: String,
    pub cost: u32,
    #[serde(default)]
    pub effects: Vec<ResearchEffect>,
    #[serde(default)]
    pub requires: Vec<String>,
}

impl Keyed for ResearchNode {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowRoom {
    pub id: String,
    pub name: String,
    pub slots: usize,
    pub cost: f64,
    pub mold_risk: f64,
}

impl Keyed for GrowRoom {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Water,
    Feed,
    Treat,
    Harvest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Tasks(Vec<Task>),
    GrowHelper { capacity: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeKind {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub required_level: u32,
    pub role: EmployeeRole,
}

impl Keyed for EmployeeKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeKind {
    pub id: String,
    pub name: String,
    pub base_cost: f64,
    /// Yield increment per level, zero for utility upgrades.
    pub increment: f64,
}

impl Keyed for UpgradeKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackContent {
    pub consumable: Consumable,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumablePack {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub contents: Vec<PackContent>,
}

impl ConsumablePack {
    pub fn contains_nutrients(&self) -> bool {
        self.contents
            .iter()
            .any(|content| content.consumable == Consumable::Nutrient)
    }
}

impl Keyed for ConsumablePack {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub id: String,
    pub name: String,
    pub growth: f64,
    pub pest: f64,
}

impl Keyed for Difficulty {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestTaskKind {
    Harvest,
    Sell,
    Cash,
    Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestTask {
    pub kind: QuestTaskKind,
    #[serde(default)]
    pub target: Option<String>,
    pub required: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestReward {
    Cash(f64),
    Xp(u64),
    Seed { strain: String, count: u32 },
    Item { item: String, count: u32 },
    Consumable { consumable: Consumable, count: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestKind {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub previous: Option<String>,
    pub tasks: Vec<QuestTask>,
    pub rewards: Vec<QuestReward>,
}

impl Keyed for QuestKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCondition {
    TotalEarned(f64),
    Cash(f64),
    SlotsUnlocked(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementKind {
    pub id: String,
    pub title: String,
    pub condition: AchievementCondition,
    pub haze: u32,
}

impl Keyed for AchievementKind {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PharmacyContract {
    pub id: String,
    pub name: String,
    pub monthly_grams: f64,
    pub monthly_cash: f64,
    pub hire_cost: f64,
    pub required_level: u32,
}

impl Keyed for PharmacyContract {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingConditions {
    pub cash: f64,
    pub slots_unlocked: usize,
    pub difficulty: String,
    pub seeds: Vec<(String, u32)>,
}

impl Default for StartingConditions {
    fn default() -> Self {
        Self {
            cash: 500.0,
            slots_unlocked: 2,
            difficulty: "normal".to_string(),
            seeds: vec![],
        }
    }
}
