use crate::planting::PlantingDomain;

impl PlantingDomain {
    /// Repairs plant records loaded from an untrusted save.
    pub fn normalize(&mut self) {
        self.slots_unlocked = self.slots_unlocked.max(1);
        let mut plants = std::mem::take(&mut self.plants);
        plants.sort_by_key(|plant| plant.slot);
        plants.dedup_by_key(|plant| plant.slot);
        for mut plant in plants {
            plant.normalize();
            if !plant.strain.is_empty() {
                self.plants.push(plant);
            }
        }
    }
}
