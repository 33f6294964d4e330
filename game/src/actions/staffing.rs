use log::info;

use crate::api::{ActionError, Event};
use crate::formulas::employee_upgrade_cost;
use crate::inventory::Consumable;
use crate::{occur, Game};

impl Game {
    /// Hires an employee for the first salary, once the level allows it.
    pub(crate) fn hire_employee(&mut self, employee: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.employees.get(employee)?;
        let salary = kind.salary;
        self.progress.ensure_level(kind.required_level)?;
        let hire = self.staffing.hire(employee)?;
        let spend_cash = self.economy.spend_cash(salary)?;
        info!("Hired {}", employee);
        Ok(occur![spend_cash(), hire()])
    }

    pub(crate) fn upgrade_employee(&mut self, employee: &str) -> Result<Vec<Event>, ActionError> {
        let salary = self.known.employees.get(employee)?.salary;
        let (level, upgrade) = self.staffing.upgrade(employee)?;
        let spend_grams = self
            .economy
            .spend_grams(employee_upgrade_cost(salary, level))?;
        Ok(occur![spend_grams(), upgrade()])
    }

    pub(crate) fn fire_employee(&mut self, employee: &str) -> Result<Vec<Event>, ActionError> {
        let fire = self.staffing.fire(employee)?;
        info!("Fired {}", employee);
        Ok(occur![fire()])
    }

    /// Spends a coffee to bring a resting or tired employee back to full energy.
    pub(crate) fn give_coffee(&mut self, employee: &str) -> Result<Vec<Event>, ActionError> {
        self.staffing.get_employee(employee)?;
        let take_coffee = self.inventory.take_consumable(Consumable::Coffee, 1)?;
        Ok(occur![take_coffee(), self.staffing.refresh(employee)])
    }

    pub(crate) fn sign_contract(&mut self, contract: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.contracts.get(contract)?;
        let hire_cost = kind.hire_cost;
        self.progress.ensure_level(kind.required_level)?;
        let sign_contract = self.economy.sign_contract(contract, hire_cost)?;
        Ok(occur![sign_contract()])
    }
}
