use serde::{Deserialize, Serialize};

pub const SPEEDS: [f64; 5] = [0.0, 0.5, 1.0, 2.0, 7.0];
pub const GAME_DAY_SECONDS: f64 = 120.0 / 42.0;
pub const DAYS_PER_YEAR: u32 = 365;
pub const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
pub const HOUSEKEEPING_INTERVAL: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingDomain {
    pub speed: f64,
    pub playtime: f64,
    pub world_seconds: f64,
    pub days_total: f64,
    pub last_year_processed: u32,
    pub last_month_processed: u32,
    pub housekeeping: f64,
}

impl Default for TimingDomain {
    fn default() -> Self {
        Self {
            speed: 0.0,
            playtime: 0.0,
            world_seconds: 0.0,
            days_total: 0.0,
            last_year_processed: 1,
            last_month_processed: 1,
            housekeeping: 0.0,
        }
    }
}

impl TimingDomain {
    pub fn year(&self) -> u32 {
        (self.days_total.max(0.0) / DAYS_PER_YEAR as f64).floor() as u32 + 1
    }

    /// Day of year in 1..=365.
    pub fn day_of_year(&self) -> u32 {
        (self.days_total.max(0.0).floor() as u64 % DAYS_PER_YEAR as u64) as u32 + 1
    }

    /// Month of the current day in 1..=12.
    pub fn month(&self) -> u32 {
        let mut day = self.day_of_year();
        for (index, days) in MONTH_DAYS.iter().enumerate() {
            if day <= *days {
                return index as u32 + 1;
            }
            day -= days;
        }
        12
    }

    pub fn month_index(&self) -> u32 {
        (self.year() - 1) * 12 + self.month()
    }

    pub fn is_winter(&self) -> bool {
        let day = self.day_of_year();
        day >= 335 || day <= 59
    }

    pub fn is_summer(&self) -> bool {
        (152..=243).contains(&self.day_of_year())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Timing {
    SpeedChanged { speed: f64 },
    YearPassed { year: u32 },
    MonthPassed { index: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum TimingError {
    UnsupportedSpeed { speed: f64 },
}
