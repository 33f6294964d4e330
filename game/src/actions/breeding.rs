use log::info;

use crate::api::{ActionError, Event};
use crate::journal::Severity;
use crate::model::StrainTrait;
use crate::{occur, Game};

impl Game {
    pub(crate) fn set_parent(
        &mut self,
        index: usize,
        strain: Option<String>,
    ) -> Result<Vec<Event>, ActionError> {
        if let Some(strain) = &strain {
            self.find_strain(strain)?;
        }
        let set_parent = self.breeding.set_parent(index, strain)?;
        Ok(occur![set_parent()])
    }

    /// Crosses the chosen parents and puts one seed of the hybrid in stock.
    pub(crate) fn breed(&mut self) -> Result<Vec<Event>, ActionError> {
        let (first, second) = self.breeding.chosen_parents()?;
        let first = self.find_strain(&first)?;
        let second = self.find_strain(&second)?;
        let pool: Vec<StrainTrait> = self.known.traits.iter().cloned().collect();
        let (hybrid, breed) =
            self.breeding
                .breed(&first, &second, &pool, self.random.as_mut())?;
        let mut events = occur![breed(), self.inventory.add_seeds(&hybrid.id, 1)];
        info!(
            "Bred {} ({}) from {} and {}",
            hybrid.name, hybrid.id, first.id, second.id
        );
        let text = format!("New strain bred: {}", hybrid.name);
        events.extend(self.notify(&text, Severity::Success));
        Ok(events)
    }
}
