use log::{debug, info};

use crate::api::Event;
use crate::economy::MonthlyBill;
use crate::formulas::monthly_upkeep;
use crate::fortune::{Fortune, FortuneKind};
use crate::inventory::SHEARS;
use crate::journal::Severity;
use crate::progress::Standing;
use crate::timing::{Timing, HOUSEKEEPING_INTERVAL};
use crate::{occur, Game};

impl Game {
    /// Advances the whole simulation by `real_seconds` of wall-clock time.
    ///
    /// Offline catch-up is the same call with one large delta.
    pub fn update(&mut self, real_seconds: f64) -> Vec<Event> {
        let mut events = vec![];
        let time = self.timing.elapse(real_seconds);
        if time > 0.0 {
            events.extend(self.advance_world(time));
        }
        if self.timing.housekeeping_due() {
            events.extend(self.housekeeping());
        }
        let quests = self.progress.sync_quests(&self.known.quests);
        events.push(quests.into());
        events.retain(|event| !event.is_empty());
        events
    }

    fn advance_world(&mut self, time: f64) -> Vec<Event> {
        let modifiers = self.modifiers();
        let conditions = self.grow_conditions(&modifiers);
        let planting = self.planting.update(
            time,
            &conditions,
            &self.known.pests,
            self.random.as_mut(),
        );

        let timing = self.timing.update(time);
        let maintenance = self.progress.update_maintenance(self.timing.days_total);
        let mut calendar: Vec<Event> = vec![];
        for event in &timing {
            match event {
                Timing::YearPassed { year } => {
                    info!("Year {} started", year);
                    calendar.push(self.inventory.wear_item(SHEARS).into());
                }
                Timing::MonthPassed { index } => {
                    debug!("Month {} settled", index);
                    calendar.extend(self.settle_month());
                }
                Timing::SpeedChanged { .. } => {}
            }
        }
        let processing = self.processing.update(time);

        let conditions = self.market_conditions(&modifiers);
        let market = self
            .market
            .update(time, &conditions, self.random.as_mut());

        let fortune = self.fortune.update(time, self.random.as_mut());
        let mut fortunes: Vec<Event> = vec![];
        for event in &fortune {
            match event {
                Fortune::CashRained { amount } => {
                    fortunes.push(self.economy.receive_cash(*amount).into());
                }
                Fortune::FortuneStarted { kind } => {
                    fortunes.extend(self.notify(fortune_message(*kind), Severity::Info));
                }
                Fortune::FortuneEnded { .. } => {}
            }
        }

        let rate = self.production_rate();
        if self.economy.record_rate(rate) {
            debug!("New best production rate {:.3} g/s", rate);
        }

        let mut events = occur![planting, timing, maintenance, processing, market, fortune,];
        events.extend(calendar);
        events.extend(fortunes);
        events.extend(self.run_shifts(time));
        events
    }

    /// Pays upkeep and salaries, then collects pharmacy contract payouts.
    fn settle_month(&mut self) -> Vec<Event> {
        let research = self.modifiers().research;
        let upkeep = monthly_upkeep(self.planting.plants.len(), research.cost);
        let salaries: f64 = self
            .staffing
            .employees
            .iter()
            .filter(|(_, state)| state.hired)
            .filter_map(|(id, _)| self.known.employees.get(id).ok())
            .map(|kind| kind.salary)
            .sum();
        let (payout, grams) = self
            .economy
            .contracts
            .iter()
            .filter_map(|id| self.known.contracts.get(id).ok())
            .fold((0.0, 0.0), |(cash, grams), contract| {
                (cash + contract.monthly_cash, grams + contract.monthly_grams)
            });
        let bills = self.economy.pay_bills(MonthlyBill {
            upkeep,
            salaries,
            payout,
            grams,
        });
        let mut events = occur![bills];
        let text = format!("Monthly bills paid: {:.0} upkeep, {:.0} salaries", upkeep, salaries);
        events.extend(self.notify(&text, Severity::Info));
        events
    }

    fn housekeeping(&mut self) -> Vec<Event> {
        let standing = Standing {
            total_earned: self.economy.total_earned,
            cash: self.economy.cash,
            slots_unlocked: self.planting.slots_unlocked,
        };
        let achievements = self
            .progress
            .evaluate_achievements(&self.known.achievements, standing);
        let cooldown = self
            .market
            .roll_cooldown(HOUSEKEEPING_INTERVAL, self.random.as_mut());
        let unlocked = achievements.len();
        let mut events = occur![achievements, cooldown];
        if unlocked > 0 {
            info!("Achievements unlocked, haze is now {}", self.progress.haze);
            events.extend(self.notify("Achievement unlocked", Severity::Success));
        }
        events
    }
}

fn fortune_message(kind: FortuneKind) -> &'static str {
    match kind {
        FortuneKind::PestPlague => "A pest plague is spreading",
        FortuneKind::HarvestBlessing => "Harvests are blessed",
        FortuneKind::GrowthBoost => "Plants are growing faster",
        FortuneKind::CashRain => "It is raining cash",
    }
}
