use crate::math::GaugeMath;
use crate::staffing::Staffing::EnergyChanged;
use crate::staffing::StaffingError::EmployeeNotHired;
use crate::staffing::{
    Staffing, StaffingDomain, StaffingError, BREAKROOM_REGEN_BONUS, ENERGY_MAX, ENERGY_REGEN,
    RESTED_ENERGY,
};

impl StaffingDomain {
    pub fn set_resting(
        &mut self,
        employee: &str,
        resting: bool,
    ) -> Result<impl FnOnce() -> Vec<Staffing> + '_, StaffingError> {
        let state = self.employees.get_mut(employee).ok_or(EmployeeNotHired {
            employee: employee.to_string(),
        })?;
        let employee = employee.to_string();
        let command = move || {
            state.resting = resting;
            vec![EnergyChanged {
                employee,
                energy: state.energy,
                resting,
            }]
        };
        Ok(command)
    }

    /// Records energy after a shift, clamped to its range.
    pub fn update_energy(&mut self, employee: &str, energy: f64, resting: bool) -> Vec<Staffing> {
        match self.employees.get_mut(employee) {
            Some(state) => {
                state.energy = energy.bounded(0.0, ENERGY_MAX);
                state.resting = resting;
                vec![EnergyChanged {
                    employee: employee.to_string(),
                    energy: state.energy,
                    resting,
                }]
            }
            None => vec![],
        }
    }

    /// Back to full energy and duty after a coffee.
    pub fn refresh(&mut self, employee: &str) -> Vec<Staffing> {
        self.update_energy(employee, ENERGY_MAX, false)
    }

    /// One resting shift; stays resting until energy reaches the rested mark.
    pub fn regenerate(&mut self, employee: &str, breakroom: u32) -> Vec<Staffing> {
        let energy = match self.employees.get(employee) {
            Some(state) => state.energy,
            None => return vec![],
        };
        let regen = ENERGY_REGEN * (1.0 + BREAKROOM_REGEN_BONUS * breakroom as f64);
        let energy = (energy + regen).min(ENERGY_MAX);
        self.update_energy(employee, energy, energy < RESTED_ENERGY)
    }
}
