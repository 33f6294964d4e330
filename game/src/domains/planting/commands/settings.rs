use crate::planting::Planting::{AutoGrowChanged, BulkConserveChanged, DifficultyChanged};
use crate::planting::{Planting, PlantingDomain};

impl PlantingDomain {
    pub fn set_auto_grow(&mut self, strain: &str, enabled: bool) -> Vec<Planting> {
        if enabled {
            self.auto_grow.insert(strain.to_string());
        } else {
            self.auto_grow.remove(strain);
        }
        vec![AutoGrowChanged {
            strain: strain.to_string(),
            enabled,
        }]
    }

    pub fn set_bulk_conserve(&mut self, enabled: bool) -> Vec<Planting> {
        self.bulk_conserve = enabled;
        vec![BulkConserveChanged { enabled }]
    }

    pub fn change_difficulty(&mut self, difficulty: &str) -> Vec<Planting> {
        self.difficulty = difficulty.to_string();
        vec![DifficultyChanged {
            difficulty: difficulty.to_string(),
        }]
    }
}
