use crate::math::GaugeMath;
use crate::timing::{TimingDomain, SPEEDS};

impl TimingDomain {
    pub fn normalize(&mut self) {
        if !SPEEDS.contains(&self.speed) {
            self.speed = 1.0;
        }
        self.playtime = self.playtime.non_negative();
        self.world_seconds = self.world_seconds.non_negative();
        self.days_total = self.days_total.non_negative();
        self.housekeeping = self.housekeeping.non_negative();
        self.last_year_processed = self.last_year_processed.clamp(1, self.year());
        self.last_month_processed = self.last_month_processed.max(1);
    }
}
