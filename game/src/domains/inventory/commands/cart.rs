use crate::inventory::Inventory::CartChanged;
use crate::inventory::InventoryError::{CartEntryNotFound, InvalidQuantity};
use crate::inventory::{CartEntry, CartKind, Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    /// Merges with an existing entry of the same kind and id.
    pub fn add_to_cart(
        &mut self,
        kind: CartKind,
        id: &str,
        quantity: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        if quantity == 0 {
            return Err(InvalidQuantity { quantity });
        }
        let id = id.to_string();
        let operation = move || {
            match self
                .cart
                .iter_mut()
                .find(|entry| entry.kind == kind && entry.id == id)
            {
                Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
                None => self.cart.push(CartEntry { kind, id, quantity }),
            }
            vec![CartChanged {
                entries: self.cart.clone(),
            }]
        };
        Ok(operation)
    }

    pub fn remove_from_cart(
        &mut self,
        index: usize,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        if index >= self.cart.len() {
            return Err(CartEntryNotFound { index });
        }
        let operation = move || {
            self.cart.remove(index);
            vec![CartChanged {
                entries: self.cart.clone(),
            }]
        };
        Ok(operation)
    }

    pub fn clear_cart(&mut self) -> Vec<Inventory> {
        self.cart.clear();
        vec![CartChanged { entries: vec![] }]
    }
}
