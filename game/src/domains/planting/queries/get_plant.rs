use crate::planting::{Plant, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn get_plant(&self, slot: usize) -> Result<&Plant, PlantingError> {
        self.plants
            .iter()
            .find(|plant| plant.slot == slot)
            .ok_or(PlantingError::PlantNotFound { slot })
    }

    pub fn get_plant_mut(&mut self, slot: usize) -> Result<&mut Plant, PlantingError> {
        self.plants
            .iter_mut()
            .find(|plant| plant.slot == slot)
            .ok_or(PlantingError::PlantNotFound { slot })
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.plants.iter().any(|plant| plant.slot == slot)
    }

    pub fn free_slots(&self) -> Vec<usize> {
        (0..self.slots_unlocked)
            .filter(|slot| !self.is_occupied(*slot))
            .collect()
    }
}
