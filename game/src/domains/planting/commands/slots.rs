use crate::planting::Planting::SlotsChanged;
use crate::planting::PlantingError::SlotLimitReached;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    /// Opens one more slot while below `limit`, returning the count before unlocking.
    pub fn unlock_slot(
        &mut self,
        limit: usize,
    ) -> Result<(usize, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let unlocked = self.slots_unlocked;
        if unlocked >= limit {
            return Err(SlotLimitReached { limit });
        }
        let command = move || {
            self.slots_unlocked = unlocked + 1;
            vec![SlotsChanged {
                unlocked: self.slots_unlocked,
            }]
        };
        Ok((unlocked, command))
    }

    pub fn resize_slots(&mut self, unlocked: usize) -> Vec<Planting> {
        self.slots_unlocked = unlocked;
        vec![SlotsChanged { unlocked }]
    }
}
