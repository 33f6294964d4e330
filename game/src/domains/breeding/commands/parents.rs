use crate::breeding::Breeding::ParentChanged;
use crate::breeding::BreedingError::InvalidParentIndex;
use crate::breeding::{Breeding, BreedingDomain, BreedingError};
use crate::model::StrainKind;

impl BreedingDomain {
    pub fn set_parent(
        &mut self,
        index: usize,
        strain: Option<String>,
    ) -> Result<impl FnOnce() -> Vec<Breeding> + '_, BreedingError> {
        let parent = self
            .parents
            .get_mut(index)
            .ok_or(InvalidParentIndex { index })?;
        let command = move || {
            *parent = strain.clone();
            vec![ParentChanged { index, strain }]
        };
        Ok(command)
    }

    pub fn get_strain(&self, strain: &str) -> Option<&StrainKind> {
        self.strains.iter().find(|kind| kind.id == strain)
    }
}
