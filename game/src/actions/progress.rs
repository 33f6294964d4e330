use log::info;

use crate::api::{ActionError, Event};
use crate::journal::Severity;
use crate::model::QuestReward;
use crate::progress::PRESTIGE_SLOTS;
use crate::{occur, Game};

impl Game {
    /// Marks a finished quest claimed and hands out its rewards.
    pub(crate) fn claim_quest(&mut self, quest: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.quests.get(quest)?.clone();
        let claim_quest = self.progress.claim_quest(quest)?;
        let mut events = occur![claim_quest()];
        for reward in &kind.rewards {
            let event = match reward {
                QuestReward::Cash(amount) => self.economy.receive_cash(*amount).into(),
                QuestReward::Xp(xp) => self.progress.gain_xp(*xp).into(),
                QuestReward::Seed { strain, count } => {
                    self.inventory.add_seeds(strain, *count).into()
                }
                QuestReward::Item { item, count } => self.inventory.add_items(item, *count).into(),
                QuestReward::Consumable { consumable, count } => {
                    self.inventory.add_consumable(*consumable, *count).into()
                }
            };
            events.push(event);
        }
        events.push(self.progress.sync_quests(&self.known.quests).into());
        Ok(events)
    }

    /// Trades the run's lifetime earnings for haze and starts over.
    pub(crate) fn prestige(&mut self) -> Result<Vec<Event>, ActionError> {
        let gain = self.progress.prestige_reward(self.economy.total_earned)?;
        let mut events = occur![self.progress.prestige(gain)];
        self.start_run(PRESTIGE_SLOTS);
        info!(
            "Prestige {} for {} haze, {} in total",
            self.progress.resets, gain, self.progress.haze
        );
        let text = format!("Fresh start with {} more haze", gain);
        events.extend(self.notify(&text, Severity::Success));
        Ok(events)
    }
}
