use crate::staffing::{StaffingDomain, SHIFT_INTERVAL};

impl StaffingDomain {
    /// Accrues world time and returns true when the next shift starts.
    pub fn shift_due(&mut self, time: f64) -> bool {
        self.shift_timer += time;
        if self.shift_timer >= SHIFT_INTERVAL {
            self.shift_timer = 0.0;
            true
        } else {
            false
        }
    }
}
