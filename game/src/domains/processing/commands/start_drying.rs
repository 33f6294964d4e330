use crate::processing::Processing::DryingStarted;
use crate::processing::ProcessingError::{BatchNotFound, DryingSlotsFull, NoWetBatches};
use crate::processing::{BatchId, Processing, ProcessingDomain, ProcessingError, Stage, DRYING_TIME};

impl ProcessingDomain {
    pub fn count_drying(&self) -> usize {
        self.batches.iter().filter(|batch| batch.is_drying()).count()
    }

    pub fn count_curing(&self) -> usize {
        self.batches.iter().filter(|batch| batch.is_curing()).count()
    }

    /// Moves wet batches into free drying slots, oldest first.
    pub fn fill_drying_slots(&mut self) -> Vec<Processing> {
        let mut events = vec![];
        let mut free = self.slots.drying.saturating_sub(self.count_drying());
        for batch in self.batches.iter_mut() {
            if free == 0 {
                break;
            }
            if batch.is_wet() {
                batch.stage = Stage::Drying {
                    remaining: DRYING_TIME,
                    total: DRYING_TIME,
                };
                free -= 1;
                events.push(DryingStarted { id: batch.id });
            }
        }
        events
    }

    /// Starts drying the given wet batch, or the oldest ones when none is given.
    pub fn start_drying(
        &mut self,
        id: Option<BatchId>,
    ) -> Result<impl FnOnce() -> Vec<Processing> + '_, ProcessingError> {
        if self.count_drying() >= self.slots.drying {
            return Err(DryingSlotsFull {
                slots: self.slots.drying,
            });
        }
        if !self.batches.iter().any(|batch| batch.is_wet()) {
            return Err(NoWetBatches);
        }
        if let Some(id) = id {
            if !self
                .batches
                .iter()
                .any(|batch| batch.id == id && batch.is_wet())
            {
                return Err(BatchNotFound { id });
            }
        }
        let command = move || match id {
            None => self.fill_drying_slots(),
            Some(id) => {
                let mut events = vec![];
                if let Some(batch) = self.batches.iter_mut().find(|batch| batch.id == id) {
                    batch.stage = Stage::Drying {
                        remaining: DRYING_TIME,
                        total: DRYING_TIME,
                    };
                    events.push(DryingStarted { id });
                }
                events
            }
        };
        Ok(command)
    }
}
