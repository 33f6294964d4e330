use crate::planting::Planting::PlantUpgraded;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn upgrade_plant(
        &mut self,
        slot: usize,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plant = self.get_plant_mut(slot)?;
        let command = move || {
            plant.level += 1;
            vec![PlantUpgraded {
                slot,
                level: plant.level,
            }]
        };
        Ok(command)
    }
}
