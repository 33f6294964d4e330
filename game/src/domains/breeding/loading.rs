use log::warn;

use crate::breeding::BreedingDomain;

impl BreedingDomain {
    pub fn normalize(&mut self) {
        let before = self.strains.len();
        self.strains.retain(|strain| !strain.id.is_empty());
        if self.strains.len() != before {
            warn!("Dropped {} hybrids without id", before - self.strains.len());
        }
        let counters: Vec<usize> = self
            .strains
            .iter()
            .filter_map(|strain| strain.id.strip_prefix("hybrid_"))
            .filter_map(|number| number.parse().ok())
            .collect();
        for counter in counters {
            self.hybrids_id.register(counter);
        }
    }
}
