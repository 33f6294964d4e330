use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SHEARS: &str = "shears";
pub const FILTER: &str = "filter";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryDomain {
    pub seeds: BTreeMap<String, u32>,
    pub purchased: BTreeMap<String, u32>,
    pub items: BTreeMap<String, u32>,
    pub consumables: Consumables,
    pub cart: Vec<CartEntry>,
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
#[serde(rename_all = "snake_case")]
pub enum Consumable {
    Water,
    Nutrient,
    Spray,
    Fungicide,
    Beneficials,
    #[serde(alias = "pgr")]
    Booster,
    Coffee,
}

/// Counts of single-use supplies. Negative or fractional counts in saves are floored to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consumables {
    #[serde(with = "lenient_count")]
    pub water: u32,
    #[serde(with = "lenient_count")]
    pub nutrient: u32,
    #[serde(with = "lenient_count")]
    pub spray: u32,
    #[serde(with = "lenient_count")]
    pub fungicide: u32,
    #[serde(with = "lenient_count")]
    pub beneficials: u32,
    #[serde(with = "lenient_count", alias = "pgr")]
    pub booster: u32,
    #[serde(with = "lenient_count")]
    pub coffee: u32,
}

impl Consumables {
    pub fn count(&self, kind: Consumable) -> u32 {
        match kind {
            Consumable::Water => self.water,
            Consumable::Nutrient => self.nutrient,
            Consumable::Spray => self.spray,
            Consumable::Fungicide => self.fungicide,
            Consumable::Beneficials => self.beneficials,
            Consumable::Booster => self.booster,
            Consumable::Coffee => self.coffee,
        }
    }

    pub fn count_mut(&mut self, kind: Consumable) -> &mut u32 {
        match kind {
            Consumable::Water => &mut self.water,
            Consumable::Nutrient => &mut self.nutrient,
            Consumable::Spray => &mut self.spray,
            Consumable::Fungicide => &mut self.fungicide,
            Consumable::Beneficials => &mut self.beneficials,
            Consumable::Booster => &mut self.booster,
            Consumable::Coffee => &mut self.coffee,
        }
    }
}

/// Writes counts as optional numbers and floors whatever numeric value a save holds.
mod lenient_count {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(count: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_some(&(*count as f64))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
        if value.is_finite() && value > 0.0 {
            Ok(value.floor().min(u32::MAX as f64) as u32)
        } else {
            Ok(0)
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum CartKind {
    Seed,
    Item,
    Pack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct CartEntry {
    pub kind: CartKind,
    pub id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Inventory {
    SeedsChanged { strain: String, count: u32 },
    ItemsChanged { item: String, count: u32 },
    ConsumableChanged { consumable: Consumable, count: u32 },
    CartChanged { entries: Vec<CartEntry> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum InventoryError {
    SeedNotFound { strain: String },
    ItemNotFound { item: String },
    ConsumableNotFound { consumable: Consumable },
    CartEntryNotFound { index: usize },
    CartIsEmpty,
    InvalidQuantity { quantity: u32 },
}
