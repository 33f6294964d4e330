use crate::timing::{Timing, TimingDomain, TimingError, SPEEDS};

impl TimingDomain {
    pub fn change_speed(
        &mut self,
        speed: f64,
    ) -> Result<impl FnOnce() -> Vec<Timing> + '_, TimingError> {
        if !SPEEDS.contains(&speed) {
            return Err(TimingError::UnsupportedSpeed { speed });
        }
        let operation = move || {
            self.speed = speed;
            vec![Timing::SpeedChanged { speed }]
        };
        Ok(operation)
    }
}
