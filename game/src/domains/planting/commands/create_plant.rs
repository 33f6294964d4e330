use crate::planting::Planting::PlantCreated;
use crate::planting::PlantingError::{SlotLocked, SlotOccupied};
use crate::planting::{Plant, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn create_plant(
        &mut self,
        slot: usize,
        strain: &str,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        if slot >= self.slots_unlocked {
            return Err(SlotLocked { slot });
        }
        if self.is_occupied(slot) {
            return Err(SlotOccupied { slot });
        }
        let strain = strain.to_string();
        let command = move || {
            self.insert_plant(Plant::new(slot, &strain));
            vec![PlantCreated { slot, strain }]
        };
        Ok(command)
    }

    pub(crate) fn insert_plant(&mut self, plant: Plant) {
        let position = self
            .plants
            .iter()
            .position(|other| other.slot > plant.slot)
            .unwrap_or(self.plants.len());
        self.plants.insert(position, plant);
    }
}
