use crate::fortune::Fortune::{CashRained, FortuneEnded, FortuneStarted};
use crate::fortune::{
    Blessings, Fortune, FortuneDomain, FortuneEvent, FortuneKind, CASH_RAIN_CHANCE_PER_SEC,
    FORTUNES, FORTUNE_DURATION,
};
use crate::math::{GaugeMath, Random};
use crate::planting::PEST_GLOBAL_RATE;

impl FortuneDomain {
    /// Spawns and expires events, then rolls cash rain for the elapsed time.
    pub fn update(&mut self, time: f64, random: &mut dyn Random) -> Vec<Fortune> {
        let mut events = vec![];
        self.next_event = (self.next_event - time).max(0.0);
        if self.next_event == 0.0 {
            let kind = FORTUNES[random.index(FORTUNES.len())];
            self.active.push(FortuneEvent {
                kind,
                remaining: FORTUNE_DURATION,
            });
            events.push(FortuneStarted { kind });
            self.next_event = random.between(300.0, 900.0);
        }
        for event in self.active.iter_mut() {
            event.remaining = (event.remaining - time).max(0.0);
            if event.remaining == 0.0 {
                events.push(FortuneEnded { kind: event.kind });
            }
        }
        self.active.retain(|event| event.remaining > 0.0);
        if self.blessings().cash_rain && random.chance(CASH_RAIN_CHANCE_PER_SEC * time) {
            let amount = random.max(50.0).floor() + 10.0;
            events.push(CashRained { amount });
        }
        events
    }

    pub fn blessings(&self) -> Blessings {
        let active = |kind: FortuneKind| self.active.iter().any(|event| event.kind == kind);
        Blessings {
            pest_rate: if active(FortuneKind::PestPlague) {
                PEST_GLOBAL_RATE * 2.0
            } else {
                PEST_GLOBAL_RATE
            },
            harvest_bonus: if active(FortuneKind::HarvestBlessing) {
                2.0
            } else {
                1.0
            },
            growth_bonus: if active(FortuneKind::GrowthBoost) {
                1.5
            } else {
                1.0
            },
            cash_rain: active(FortuneKind::CashRain),
        }
    }

    pub fn normalize(&mut self) {
        self.next_event = self.next_event.non_negative();
        self.active
            .retain(|event| event.remaining.is_finite() && event.remaining > 0.0);
    }
}
