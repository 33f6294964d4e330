use log::info;

use crate::api::{ActionError, Event};
use crate::formulas::{estate_refund, item_cost, seed_cost, upgrade_cost};
use crate::inventory::{CartKind, InventoryError, FILTER};
use crate::model::ConsumablePack;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_seed(&mut self, strain: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.find_strain(strain)?;
        let research = self.modifiers().research;
        let cost = seed_cost(kind.cost, self.inventory.purchased_of(strain), research.cost);
        let spend_cash = self.economy.spend_cash(cost)?;
        Ok(occur![spend_cash(), self.inventory.buy_seed(strain)])
    }

    pub(crate) fn buy_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.get(item)?;
        let research = self.modifiers().research;
        let cost = item_cost(kind.cost, self.inventory.items_of(item), research.cost);
        let spend_cash = self.economy.spend_cash(cost)?;
        let mut events = occur![spend_cash(), self.inventory.add_items(item, 1)];
        if item == FILTER {
            events.push(self.progress.service_filter(self.timing.days_total).into());
        }
        Ok(events)
    }

    pub(crate) fn buy_pack(&mut self, pack: &str) -> Result<Vec<Event>, ActionError> {
        let pack = self.known.packs.get(pack)?.clone();
        let price = self.pack_price(&pack);
        let spend_cash = self.economy.spend_cash(price)?;
        let mut events = occur![spend_cash()];
        events.extend(self.unpack(&pack, 1));
        Ok(events)
    }

    pub(crate) fn buy_upgrade(&mut self, upgrade: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.upgrades.get(upgrade)?;
        let cost = upgrade_cost(kind.base_cost, self.progress.upgrade_level(upgrade));
        let spend_cash = self.economy.spend_cash(cost)?;
        Ok(occur![spend_cash(), self.progress.raise_upgrade(upgrade)])
    }

    pub(crate) fn buy_research(&mut self, node: &str) -> Result<Vec<Event>, ActionError> {
        let node = self.known.research.get(node)?.clone();
        let available = self
            .progress
            .research_available(&self.known.research, self.economy.total_earned);
        let buy_research = self.progress.buy_research(&node, available)?;
        Ok(occur![buy_research()])
    }

    /// Moves into a bigger grow room, opening all of its slots at once.
    pub(crate) fn buy_estate(&mut self, room: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.rooms.get(room)?;
        let (cost, slots) = (kind.cost, kind.slots);
        let tier = self.known.rooms.position(room).unwrap_or_default();
        let acquire_tier = self.progress.acquire_tier(tier)?;
        let spend_cash = self.economy.spend_cash(cost)?;
        let events = occur![
            spend_cash(),
            acquire_tier(),
            self.planting.resize_slots(slots),
        ];
        info!("Moved into {} with {} slots", room, slots);
        Ok(events)
    }

    /// Sells the current grow room back for part of its price.
    pub(crate) fn sell_estate(&mut self) -> Result<Vec<Event>, ActionError> {
        let tier = self.progress.grow_tier;
        let cost = self.known.rooms.at(tier).map(|room| room.cost).unwrap_or(0.0);
        let previous_slots = match tier.checked_sub(1) {
            Some(previous) => self.known.rooms.at(previous).map(|room| room.slots),
            None => None,
        }
        .unwrap_or(self.known.start.slots_unlocked);
        let release_tier = self.progress.release_tier(tier)?;
        let slots = self.planting.slots_unlocked.min(previous_slots);
        Ok(occur![
            release_tier(),
            self.economy.receive_cash(estate_refund(cost)),
            self.planting.resize_slots(slots),
        ])
    }

    pub(crate) fn add_to_cart(
        &mut self,
        kind: CartKind,
        id: &str,
        quantity: u32,
    ) -> Result<Vec<Event>, ActionError> {
        match kind {
            CartKind::Seed => {
                self.find_strain(id)?;
            }
            CartKind::Item => {
                self.known.items.get(id)?;
            }
            CartKind::Pack => {
                self.known.packs.get(id)?;
            }
        }
        let add_to_cart = self.inventory.add_to_cart(kind, id, quantity)?;
        Ok(occur![add_to_cart()])
    }

    /// Buys the whole cart in one payment or nothing at all.
    ///
    /// Seed and item prices climb with every unit, exactly as if bought one by one.
    pub(crate) fn checkout(&mut self) -> Result<Vec<Event>, ActionError> {
        if self.inventory.cart.is_empty() {
            return Err(InventoryError::CartIsEmpty.into());
        }
        let research = self.modifiers().research;
        let cart = self.inventory.cart.clone();
        let mut total = 0.0;
        let mut packs = vec![];
        for entry in &cart {
            match entry.kind {
                CartKind::Seed => {
                    let kind = self.find_strain(&entry.id)?;
                    let purchased = self.inventory.purchased_of(&entry.id);
                    for unit in 0..entry.quantity {
                        total += seed_cost(kind.cost, purchased + unit, research.cost);
                    }
                }
                CartKind::Item => {
                    let kind = self.known.items.get(&entry.id)?;
                    let owned = self.inventory.items_of(&entry.id);
                    for unit in 0..entry.quantity {
                        total += item_cost(kind.cost, owned + unit, research.cost);
                    }
                }
                CartKind::Pack => {
                    let pack = self.known.packs.get(&entry.id)?.clone();
                    total += self.pack_price(&pack) * entry.quantity as f64;
                    packs.push((pack, entry.quantity));
                }
            }
        }
        let spend_cash = self.economy.spend_cash(total)?;
        let mut events = occur![spend_cash()];
        for entry in &cart {
            match entry.kind {
                CartKind::Seed => {
                    for _ in 0..entry.quantity {
                        events.push(self.inventory.buy_seed(&entry.id).into());
                    }
                }
                CartKind::Item => {
                    events.push(self.inventory.add_items(&entry.id, entry.quantity).into());
                    if entry.id == FILTER {
                        events.push(self.progress.service_filter(self.timing.days_total).into());
                    }
                }
                CartKind::Pack => {}
            }
        }
        for (pack, quantity) in &packs {
            events.extend(self.unpack(pack, *quantity));
        }
        events.push(self.inventory.clear_cart().into());
        info!("Checked out {} cart entries for {:.0}", cart.len(), total);
        Ok(events)
    }

    /// Pack price, with nutrient packs following the nutrient cost research.
    fn pack_price(&self, pack: &ConsumablePack) -> f64 {
        if pack.contains_nutrients() {
            let research = self.modifiers().research;
            (pack.price * (1.0 + research.nutrient_cost)).max(0.0)
        } else {
            pack.price
        }
    }

    fn unpack(&mut self, pack: &ConsumablePack, quantity: u32) -> Vec<Event> {
        pack.contents
            .iter()
            .map(|content| {
                self.inventory
                    .add_consumable(content.consumable, content.amount.saturating_mul(quantity))
                    .into()
            })
            .collect()
    }
}
