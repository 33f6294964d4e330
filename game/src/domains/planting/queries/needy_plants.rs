use crate::planting::{
    PlantingDomain, BULK_CONSERVE_THRESHOLD, BULK_FEED_THRESHOLD, BULK_WATER_THRESHOLD,
    NUTRIENT_MAX, WATER_MAX,
};

impl PlantingDomain {
    pub fn ready_slots(&self) -> Vec<usize> {
        self.plants
            .iter()
            .filter(|plant| plant.is_ready() && plant.is_alive())
            .map(|plant| plant.slot)
            .collect()
    }

    pub fn living_slots(&self) -> Vec<usize> {
        self.plants
            .iter()
            .filter(|plant| plant.is_alive())
            .map(|plant| plant.slot)
            .collect()
    }

    pub fn infested_slots(&self) -> Vec<usize> {
        self.plants
            .iter()
            .filter(|plant| plant.pest.is_some())
            .map(|plant| plant.slot)
            .collect()
    }

    /// Living plants below the bulk watering threshold, in slot order.
    pub fn thirsty_slots(&self) -> Vec<usize> {
        let threshold = if self.bulk_conserve {
            BULK_CONSERVE_THRESHOLD
        } else {
            BULK_WATER_THRESHOLD
        };
        self.plants
            .iter()
            .filter(|plant| plant.is_alive() && plant.water < WATER_MAX * threshold)
            .map(|plant| plant.slot)
            .collect()
    }

    pub fn hungry_slots(&self) -> Vec<usize> {
        let threshold = if self.bulk_conserve {
            BULK_CONSERVE_THRESHOLD
        } else {
            BULK_FEED_THRESHOLD
        };
        self.plants
            .iter()
            .filter(|plant| plant.is_alive() && plant.nutrients < NUTRIENT_MAX * threshold)
            .map(|plant| plant.slot)
            .collect()
    }
}
