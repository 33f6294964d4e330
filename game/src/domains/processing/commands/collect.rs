use crate::processing::Processing::{BatchCollected, BatchPressed};
use crate::processing::ProcessingError::{BatchNotReady, NothingToCollect};
use crate::processing::{
    Batch, BatchId, Processing, ProcessingDomain, ProcessingError, PRESS_YIELD_MULTIPLIER,
};

impl ProcessingDomain {
    /// Returns the ready batch; applying takes it out of the pipeline.
    pub fn collect_batch(
        &mut self,
        id: BatchId,
    ) -> Result<(Batch, impl FnOnce() -> Vec<Processing> + '_), ProcessingError> {
        let batch = self
            .batches
            .iter()
            .find(|batch| batch.id == id && batch.is_ready())
            .cloned()
            .ok_or(BatchNotReady { id })?;
        let grams = batch.grams;
        let command = move || {
            self.batches.retain(|batch| batch.id != id);
            vec![BatchCollected { id, grams }]
        };
        Ok((batch, command))
    }

    pub fn collect_all(
        &mut self,
    ) -> Result<(Vec<Batch>, impl FnOnce() -> Vec<Processing> + '_), ProcessingError> {
        let ready: Vec<Batch> = self
            .batches
            .iter()
            .filter(|batch| batch.is_ready())
            .cloned()
            .collect();
        if ready.is_empty() {
            return Err(NothingToCollect);
        }
        let events = ready
            .iter()
            .map(|batch| BatchCollected {
                id: batch.id,
                grams: batch.grams,
            })
            .collect();
        let command = move || {
            self.batches.retain(|batch| !batch.is_ready());
            events
        };
        Ok((ready, command))
    }

    /// Returns concentrate grams pressed out of a ready batch.
    pub fn press_batch(
        &mut self,
        id: BatchId,
    ) -> Result<(f64, impl FnOnce() -> Vec<Processing> + '_), ProcessingError> {
        let grams = self
            .batches
            .iter()
            .find(|batch| batch.id == id && batch.is_ready())
            .map(|batch| batch.grams)
            .ok_or(BatchNotReady { id })?;
        let output = (grams * PRESS_YIELD_MULTIPLIER).max(0.0);
        let command = move || {
            self.batches.retain(|batch| batch.id != id);
            vec![BatchPressed { id, output }]
        };
        Ok((output, command))
    }
}
