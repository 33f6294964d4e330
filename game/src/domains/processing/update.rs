use crate::formulas::clamp_batch_quality;
use crate::math::GaugeMath;
use crate::processing::Processing::{BatchCured, BatchDried};
use crate::processing::{
    Finish, Processing, ProcessingDomain, Stage, DRY_QUALITY_MULTIPLIER, DRY_WEIGHT_MULTIPLIER,
};

impl ProcessingDomain {
    pub fn update(&mut self, time: f64) -> Vec<Processing> {
        if !(time > 0.0) {
            return vec![];
        }
        let mut events = vec![];
        let mut finished = vec![];
        for (index, batch) in self.batches.iter_mut().enumerate() {
            match &mut batch.stage {
                Stage::Drying { remaining, .. } => {
                    *remaining = (*remaining - time).max(0.0);
                    if *remaining <= 0.0 {
                        batch.grams = (batch.grams * DRY_WEIGHT_MULTIPLIER).non_negative();
                        batch.quality = clamp_batch_quality(batch.quality * DRY_QUALITY_MULTIPLIER);
                        batch.stage = Stage::Ready(Finish::Dry);
                        finished.push(index);
                        events.push(BatchDried {
                            id: batch.id,
                            grams: batch.grams,
                            quality: batch.quality,
                        });
                    }
                }
                Stage::Curing {
                    remaining,
                    total,
                    start,
                    target,
                } => {
                    *remaining = (*remaining - time).max(0.0);
                    let progress = (1.0 - *remaining / total.max(f64::EPSILON)).bounded(0.0, 1.0);
                    batch.quality = clamp_batch_quality(*start + (*target - *start) * progress);
                    if *remaining <= 0.0 {
                        batch.quality = *target;
                        batch.stage = Stage::Ready(Finish::Cured);
                        finished.push(index);
                        events.push(BatchCured {
                            id: batch.id,
                            quality: batch.quality,
                        });
                    }
                }
                Stage::Wet | Stage::Ready(_) => {}
            }
        }
        let mut moved = vec![];
        for index in finished.into_iter().rev() {
            moved.push(self.batches.remove(index));
        }
        self.batches.extend(moved.into_iter().rev());
        events.extend(self.fill_drying_slots());
        events
    }
}
