use log::warn;

use crate::math::GaugeMath;
use crate::processing::{Finish, ProcessingDomain, Stage, DEFAULT_SLOTS};

impl ProcessingDomain {
    /// Repairs queues loaded from an untrusted save without losing mass.
    pub fn normalize(&mut self) {
        if self.slots.drying == 0 {
            self.slots.drying = DEFAULT_SLOTS;
        }
        if self.slots.curing == 0 {
            self.slots.curing = DEFAULT_SLOTS;
        }
        let before = self.batches.len();
        self.batches.retain(|batch| batch.grams.is_finite());
        if self.batches.len() != before {
            warn!(
                "Dropped {} corrupt processing batches",
                before - self.batches.len()
            );
        }
        let mut drying = 0;
        let mut curing = 0;
        for batch in self.batches.iter_mut() {
            batch.grams = batch.grams.non_negative();
            batch.quality = batch.quality.finite_or(1.0).non_negative();
            self.batches_id.register(batch.id.0);
            match batch.stage {
                Stage::Drying { .. } => {
                    drying += 1;
                    if drying > self.slots.drying {
                        batch.stage = Stage::Wet;
                    }
                }
                Stage::Curing { start, .. } => {
                    curing += 1;
                    if curing > self.slots.curing {
                        batch.quality = start;
                        batch.stage = Stage::Ready(Finish::Dry);
                    }
                }
                _ => {}
            }
        }
    }
}
