use crate::processing::Processing::BatchCreated;
use crate::processing::{Batch, BatchId, Processing, ProcessingDomain, Stage};

impl ProcessingDomain {
    /// Queues freshly harvested material and starts drying it when a slot is free.
    pub fn create_batch(&mut self, strain: &str, grams: f64, quality: f64) -> Vec<Processing> {
        let id = self.batches_id.one(BatchId);
        self.batches.push(Batch {
            id,
            strain: strain.to_string(),
            grams,
            quality,
            stage: Stage::Wet,
        });
        let mut events = vec![BatchCreated { id, grams, quality }];
        events.extend(self.fill_drying_slots());
        events
    }
}
