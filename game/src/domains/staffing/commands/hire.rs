use crate::staffing::Staffing::{EmployeeFired, EmployeeHired, EmployeeUpgraded};
use crate::staffing::StaffingError::{EmployeeAlreadyHired, EmployeeNotHired};
use crate::staffing::{EmployeeState, Staffing, StaffingDomain, StaffingError};

impl StaffingDomain {
    pub fn get_employee(&self, employee: &str) -> Result<&EmployeeState, StaffingError> {
        self.employees
            .get(employee)
            .ok_or(EmployeeNotHired {
                employee: employee.to_string(),
            })
    }

    pub fn hire(
        &mut self,
        employee: &str,
    ) -> Result<impl FnOnce() -> Vec<Staffing> + '_, StaffingError> {
        if self.employees.contains_key(employee) {
            return Err(EmployeeAlreadyHired {
                employee: employee.to_string(),
            });
        }
        let employee = employee.to_string();
        let command = move || {
            self.employees
                .insert(employee.clone(), EmployeeState::default());
            vec![EmployeeHired { employee }]
        };
        Ok(command)
    }

    /// Returns the current level; applying raises it by one.
    pub fn upgrade(
        &mut self,
        employee: &str,
    ) -> Result<(u32, impl FnOnce() -> Vec<Staffing> + '_), StaffingError> {
        let state = self.employees.get_mut(employee).ok_or(EmployeeNotHired {
            employee: employee.to_string(),
        })?;
        let level = state.level;
        let employee = employee.to_string();
        let command = move || {
            state.level = level + 1;
            vec![EmployeeUpgraded {
                employee,
                level: state.level,
            }]
        };
        Ok((level, command))
    }

    pub fn fire(
        &mut self,
        employee: &str,
    ) -> Result<impl FnOnce() -> Vec<Staffing> + '_, StaffingError> {
        self.get_employee(employee)?;
        let employee = employee.to_string();
        let command = move || {
            self.employees.remove(&employee);
            vec![EmployeeFired { employee }]
        };
        Ok(command)
    }
}
