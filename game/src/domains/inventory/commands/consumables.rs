use crate::inventory::Inventory::ConsumableChanged;
use crate::inventory::InventoryError::ConsumableNotFound;
use crate::inventory::{Consumable, Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    pub fn add_consumable(&mut self, consumable: Consumable, count: u32) -> Vec<Inventory> {
        let stock = self.consumables.count_mut(consumable);
        *stock = stock.saturating_add(count);
        vec![ConsumableChanged {
            consumable,
            count: *stock,
        }]
    }

    pub fn take_consumable(
        &mut self,
        consumable: Consumable,
        count: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let stock = self.consumables.count_mut(consumable);
        if *stock < count || count == 0 {
            return Err(ConsumableNotFound { consumable });
        }
        let operation = move || {
            *stock -= count;
            vec![ConsumableChanged {
                consumable,
                count: *stock,
            }]
        };
        Ok(operation)
    }

    /// Takes one unit if available, otherwise does nothing.
    pub fn use_optional(&mut self, consumable: Consumable) -> Option<Vec<Inventory>> {
        let stock = self.consumables.count_mut(consumable);
        if *stock == 0 {
            return None;
        }
        *stock -= 1;
        Some(vec![ConsumableChanged {
            consumable,
            count: *stock,
        }])
    }
}
