use crate::inventory::Inventory::ItemsChanged;
use crate::inventory::InventoryError::ItemNotFound;
use crate::inventory::{Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    pub fn items_of(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn add_items(&mut self, item: &str, count: u32) -> Vec<Inventory> {
        let items = self.items.entry(item.to_string()).or_insert(0);
        *items = items.saturating_add(count);
        vec![ItemsChanged {
            item: item.to_string(),
            count: *items,
        }]
    }

    pub fn take_item(
        &mut self,
        item: &str,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let items = match self.items.get_mut(item) {
            Some(items) if *items > 0 => items,
            _ => {
                return Err(ItemNotFound {
                    item: item.to_string(),
                })
            }
        };
        let item = item.to_string();
        let operation = move || {
            *items -= 1;
            vec![ItemsChanged { item, count: *items }]
        };
        Ok(operation)
    }

    /// Spends one charge of a tool if any is left.
    pub fn wear_item(&mut self, item: &str) -> Vec<Inventory> {
        match self.items.get_mut(item) {
            Some(items) if *items > 0 => {
                *items -= 1;
                vec![ItemsChanged {
                    item: item.to_string(),
                    count: *items,
                }]
            }
            _ => vec![],
        }
    }
}
