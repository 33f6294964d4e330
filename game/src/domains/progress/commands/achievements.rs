use crate::collections::Dictionary;
use crate::formulas::prestige_gain;
use crate::model::{AchievementCondition, AchievementKind};
use crate::progress::Progress::{AchievementUnlocked, HazeChanged};
use crate::progress::ProgressError::NothingToPrestige;
use crate::progress::{Progress, ProgressDomain, ProgressError};

/// Owner totals achievements are measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Standing {
    pub total_earned: f64,
    pub cash: f64,
    pub slots_unlocked: usize,
}

impl ProgressDomain {
    pub fn evaluate_achievements(
        &mut self,
        catalog: &Dictionary<AchievementKind>,
        standing: Standing,
    ) -> Vec<Progress> {
        let mut events = vec![];
        for achievement in catalog.iter() {
            if self.achievements.contains(&achievement.id) {
                continue;
            }
            let reached = match achievement.condition {
                AchievementCondition::TotalEarned(amount) => standing.total_earned >= amount,
                AchievementCondition::Cash(amount) => standing.cash >= amount,
                AchievementCondition::SlotsUnlocked(slots) => standing.slots_unlocked >= slots,
            };
            if reached {
                self.achievements.insert(achievement.id.clone());
                self.haze += achievement.haze;
                events.push(AchievementUnlocked {
                    achievement: achievement.id.clone(),
                    haze: achievement.haze,
                });
            }
        }
        if !events.is_empty() {
            events.push(HazeChanged { haze: self.haze });
        }
        events
    }

    /// Haze a prestige reset would award; rejects when it would award nothing.
    pub fn prestige_reward(&self, total_earned: f64) -> Result<u32, ProgressError> {
        match prestige_gain(total_earned) {
            0 => Err(NothingToPrestige),
            gain => Ok(gain),
        }
    }

    /// Starts a fresh run that only keeps haze, achievements and the reset count.
    pub fn prestige(&mut self, gain: u32) -> Vec<Progress> {
        let haze = self.haze + gain;
        let resets = self.resets + 1;
        let achievements = std::mem::take(&mut self.achievements);
        *self = ProgressDomain {
            haze,
            resets,
            achievements,
            ..ProgressDomain::default()
        };
        vec![HazeChanged { haze }]
    }
}
