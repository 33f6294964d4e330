use crate::formulas::{mastery_level, xp_for_next};
use crate::progress::Progress::{LevelUp, MasteryGained, XpGained};
use crate::progress::ProgressError::LevelTooLow;
use crate::progress::{Progress, ProgressDomain, ProgressError};

impl ProgressDomain {
    /// Adds experience, rolling over into as many levels as it covers.
    pub fn gain_xp(&mut self, xp: u64) -> Vec<Progress> {
        if xp == 0 {
            return vec![];
        }
        self.xp += xp;
        let mut events = vec![XpGained { xp, total: self.xp }];
        while self.xp >= xp_for_next(self.level) {
            self.xp -= xp_for_next(self.level);
            self.level += 1;
            events.push(LevelUp { level: self.level });
        }
        events
    }

    pub fn ensure_level(&self, required: u32) -> Result<(), ProgressError> {
        if self.level < required {
            return Err(LevelTooLow {
                required,
                level: self.level,
            });
        }
        Ok(())
    }

    pub fn mastery_of(&self, strain: &str) -> u32 {
        mastery_level(self.mastery.get(strain).copied().unwrap_or(0.0))
    }

    pub fn gain_mastery(&mut self, strain: &str, xp: f64) -> Vec<Progress> {
        let total = self.mastery.entry(strain.to_string()).or_insert(0.0);
        *total += xp;
        vec![MasteryGained {
            strain: strain.to_string(),
            xp: *total,
            level: mastery_level(*total),
        }]
    }
}
