use crate::math::GaugeMath;
use crate::staffing::{StaffingDomain, ENERGY_MAX};

impl StaffingDomain {
    pub fn normalize(&mut self) {
        self.employees.retain(|_, state| state.hired);
        for state in self.employees.values_mut() {
            state.level = state.level.max(1);
            state.energy = state.energy.finite_or(ENERGY_MAX).bounded(0.0, ENERGY_MAX);
        }
        self.shift_timer = self.shift_timer.non_negative();
    }
}
