use crate::breeding::Breeding::HybridBred;
use crate::breeding::BreedingError::ParentMissing;
use crate::breeding::{cross_strains, Breeding, BreedingDomain, BreedingError};
use crate::math::Random;
use crate::model::{StrainKind, StrainTrait};

impl BreedingDomain {
    /// Both chosen parent ids.
    pub fn chosen_parents(&self) -> Result<(String, String), BreedingError> {
        match &self.parents {
            [Some(first), Some(second)] => Ok((first.clone(), second.clone())),
            [None, _] => Err(ParentMissing { index: 0 }),
            [_, None] => Err(ParentMissing { index: 1 }),
        }
    }

    /// Crosses the resolved parents; applying stores the hybrid and clears the parent slots.
    pub fn breed(
        &mut self,
        first: &StrainKind,
        second: &StrainKind,
        pool: &[StrainTrait],
        random: &mut dyn Random,
    ) -> Result<(StrainKind, impl FnOnce() -> Vec<Breeding> + '_), BreedingError> {
        self.chosen_parents()?;
        let id = format!("hybrid_{}", self.hybrids_id.value() + 1);
        let hybrid = cross_strains(first, second, pool, id, random);
        let stored = hybrid.clone();
        let command = move || {
            self.hybrids_id.one(|_| ());
            self.parents = [None, None];
            self.last_result = Some(stored.id.clone());
            let event = HybridBred {
                strain: stored.id.clone(),
                name: stored.name.clone(),
                rarity: stored.rarity,
                generation: stored.generation,
            };
            self.strains.push(stored);
            vec![event]
        };
        Ok((hybrid, command))
    }
}
