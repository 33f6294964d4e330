use crate::math::GaugeMath;
use crate::planting::Planting::{PlantFed, PlantTreated, PlantWatered};
use crate::planting::PlantingError::PlantNotInfested;
use crate::planting::{
    Planting, PlantingDomain, PlantingError, BOOST_SECONDS, NUTRIENT_ADD_AMOUNT, NUTRIENT_MAX,
    NUTRIENT_QUALITY_GAIN, QUALITY_MAX, QUALITY_MIN, WATER_ADD_AMOUNT, WATER_MAX,
};

impl PlantingDomain {
    pub fn water_plant(
        &mut self,
        slot: usize,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plant = self.get_plant_mut(slot)?;
        let command = move || {
            plant.water = (plant.water + WATER_ADD_AMOUNT).min(WATER_MAX);
            vec![PlantWatered {
                slot,
                water: plant.water,
            }]
        };
        Ok(command)
    }

    /// Feeds one nutrient dose scaled by `bonus`, optionally adding a growth boost.
    pub fn feed_plant(
        &mut self,
        slot: usize,
        bonus: f64,
        boost: bool,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let plant = self.get_plant_mut(slot)?;
        let command = move || {
            plant.nutrients = (plant.nutrients + NUTRIENT_ADD_AMOUNT * bonus).min(NUTRIENT_MAX);
            plant.quality = (plant.quality + NUTRIENT_QUALITY_GAIN).bounded(QUALITY_MIN, QUALITY_MAX);
            if boost {
                plant.boost += BOOST_SECONDS;
            }
            vec![PlantFed {
                slot,
                nutrients: plant.nutrients,
                quality: plant.quality,
                boost: plant.boost,
            }]
        };
        Ok(command)
    }

    /// Returns the pest to treat so the caller can pick the remedy.
    pub fn treat_plant(
        &mut self,
        slot: usize,
    ) -> Result<(String, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let plant = self.get_plant_mut(slot)?;
        let pest = match &plant.pest {
            Some(infestation) => infestation.pest.clone(),
            None => return Err(PlantNotInfested { slot }),
        };
        let treated = pest.clone();
        let command = move || {
            plant.pest = None;
            vec![PlantTreated { slot, pest: treated }]
        };
        Ok((pest, command))
    }
}
