use crate::progress::Progress::{GrowTierChanged, UpgradeBought};
use crate::progress::ProgressError::{GrowTierAlreadyOwned, GrowTierNotOwned};
use crate::progress::{Progress, ProgressDomain, ProgressError};

impl ProgressDomain {
    pub fn upgrade_level(&self, upgrade: &str) -> u32 {
        self.upgrades.get(upgrade).copied().unwrap_or(0)
    }

    pub fn raise_upgrade(&mut self, upgrade: &str) -> Vec<Progress> {
        let level = self.upgrades.entry(upgrade.to_string()).or_insert(0);
        *level += 1;
        vec![UpgradeBought {
            upgrade: upgrade.to_string(),
            level: *level,
        }]
    }

    /// Moves up to a bigger grow room.
    pub fn acquire_tier(
        &mut self,
        tier: usize,
    ) -> Result<impl FnOnce() -> Vec<Progress> + '_, ProgressError> {
        if self.grow_tier >= tier {
            return Err(GrowTierAlreadyOwned { tier });
        }
        let command = move || {
            self.grow_tier = tier;
            vec![GrowTierChanged { tier }]
        };
        Ok(command)
    }

    /// Sells the current grow room and falls back to the previous one.
    pub fn release_tier(
        &mut self,
        tier: usize,
    ) -> Result<impl FnOnce() -> Vec<Progress> + '_, ProgressError> {
        if tier == 0 || self.grow_tier != tier {
            return Err(GrowTierNotOwned { tier });
        }
        let command = move || {
            self.grow_tier = tier - 1;
            vec![GrowTierChanged {
                tier: self.grow_tier,
            }]
        };
        Ok(command)
    }
}
