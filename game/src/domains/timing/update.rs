use crate::math::GaugeMath;
use crate::timing::{Timing, TimingDomain, GAME_DAY_SECONDS, HOUSEKEEPING_INTERVAL, SPEEDS};

impl TimingDomain {
    /// Accrues playtime and converts real seconds into a world delta at the current speed.
    pub fn elapse(&mut self, real_seconds: f64) -> f64 {
        let real_seconds = real_seconds.finite_or(0.0).non_negative();
        self.playtime += real_seconds;
        self.housekeeping += real_seconds;
        let speed = if SPEEDS.contains(&self.speed) {
            self.speed
        } else {
            1.0
        };
        real_seconds * speed
    }

    /// Advances the calendar, reporting every newly reached year and month once.
    pub fn update(&mut self, world_seconds: f64) -> Vec<Timing> {
        let mut events = vec![];
        self.world_seconds += world_seconds;
        self.days_total += world_seconds / GAME_DAY_SECONDS;
        let year = self.year();
        if year > self.last_year_processed {
            for year in self.last_year_processed + 1..=year {
                events.push(Timing::YearPassed { year });
            }
            self.last_year_processed = year;
        }
        let index = self.month_index();
        if index > self.last_month_processed {
            for index in self.last_month_processed + 1..=index {
                events.push(Timing::MonthPassed { index });
            }
            self.last_month_processed = index;
        }
        events
    }

    /// Returns true once per housekeeping interval of real time.
    pub fn housekeeping_due(&mut self) -> bool {
        if self.housekeeping >= HOUSEKEEPING_INTERVAL {
            self.housekeeping = 0.0;
            true
        } else {
            false
        }
    }
}
