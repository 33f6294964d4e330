use crate::inventory::Inventory::SeedsChanged;
use crate::inventory::InventoryError::SeedNotFound;
use crate::inventory::{Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    pub fn seeds_of(&self, strain: &str) -> u32 {
        self.seeds.get(strain).copied().unwrap_or(0)
    }

    pub fn purchased_of(&self, strain: &str) -> u32 {
        self.purchased.get(strain).copied().unwrap_or(0)
    }

    /// First strain with at least one seed, in key order.
    pub fn first_seed(&self) -> Option<String> {
        self.seeds
            .iter()
            .find(|(_, count)| **count > 0)
            .map(|(strain, _)| strain.clone())
    }

    pub fn add_seeds(&mut self, strain: &str, count: u32) -> Vec<Inventory> {
        let seeds = self.seeds.entry(strain.to_string()).or_insert(0);
        *seeds = seeds.saturating_add(count);
        vec![SeedsChanged {
            strain: strain.to_string(),
            count: *seeds,
        }]
    }

    pub fn buy_seed(&mut self, strain: &str) -> Vec<Inventory> {
        let purchased = self.purchased.entry(strain.to_string()).or_insert(0);
        *purchased += 1;
        self.add_seeds(strain, 1)
    }

    pub fn take_seed(
        &mut self,
        strain: &str,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let seeds = match self.seeds.get_mut(strain) {
            Some(seeds) if *seeds > 0 => seeds,
            _ => {
                return Err(SeedNotFound {
                    strain: strain.to_string(),
                })
            }
        };
        let strain = strain.to_string();
        let operation = move || {
            *seeds -= 1;
            vec![SeedsChanged {
                strain,
                count: *seeds,
            }]
        };
        Ok(operation)
    }
}
