use crate::planting::Planting::PlantRemoved;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    /// Returns the strain of the removed plant so its seed can be refunded.
    pub fn remove_plant(
        &mut self,
        slot: usize,
    ) -> Result<(String, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let strain = self.get_plant(slot)?.strain.clone();
        let command = move || {
            self.plants.retain(|plant| plant.slot != slot);
            vec![PlantRemoved { slot }]
        };
        Ok((strain, command))
    }
}
