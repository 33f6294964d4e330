use crate::formulas::clamp_batch_quality;
use crate::processing::Processing::CuringStarted;
use crate::processing::ProcessingError::{BatchNotDry, CuringSlotsFull};
use crate::processing::{
    BatchId, Finish, Processing, ProcessingDomain, ProcessingError, Stage, CURING_QUALITY_BONUS,
    CURING_TIME,
};

impl ProcessingDomain {
    pub fn start_curing(
        &mut self,
        id: BatchId,
    ) -> Result<impl FnOnce() -> Vec<Processing> + '_, ProcessingError> {
        if self.count_curing() >= self.slots.curing {
            return Err(CuringSlotsFull {
                slots: self.slots.curing,
            });
        }
        let batch = self
            .batches
            .iter_mut()
            .find(|batch| batch.id == id && batch.stage == Stage::Ready(Finish::Dry))
            .ok_or(BatchNotDry { id })?;
        let command = move || {
            let target = clamp_batch_quality(batch.quality * (1.0 + CURING_QUALITY_BONUS));
            batch.stage = Stage::Curing {
                remaining: CURING_TIME,
                total: CURING_TIME,
                start: batch.quality,
                target,
            };
            vec![CuringStarted { id, target }]
        };
        Ok(command)
    }
}
