use crate::planting::Planting::{PlantCreated, PlantHarvested};
use crate::planting::PlantingError::NotReadyToHarvest;
use crate::planting::{Plant, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    /// Returns a copy of the ripe plant; applying clears the slot and optionally replants it.
    pub fn harvest_plant(
        &mut self,
        slot: usize,
        replant: bool,
    ) -> Result<(Plant, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let plant = self.get_plant(slot)?.clone();
        if !plant.is_ready() {
            return Err(NotReadyToHarvest { slot });
        }
        let strain = plant.strain.clone();
        let command = move || {
            self.plants.retain(|plant| plant.slot != slot);
            let mut events = vec![PlantHarvested {
                slot,
                strain: strain.clone(),
            }];
            if replant && slot < self.slots_unlocked {
                self.insert_plant(Plant::new(slot, &strain));
                events.push(PlantCreated { slot, strain });
            }
            events
        };
        Ok((plant, command))
    }
}
