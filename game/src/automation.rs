use log::debug;

use crate::api::Event;
use crate::formulas::employee_energy_cost;
use crate::inspection::BREAKROOM_UPGRADE;
use crate::inventory::{Consumable, SHEARS};
use crate::model::{EmployeeRole, Task};
use crate::planting::{NUTRIENT_MAX, WATER_MAX};
use crate::staffing::Staffing::EmployeeWorked;
use crate::staffing::{CARE_THRESHOLD, REST_ENERGY};
use crate::{occur, Game};

impl Game {
    /// Runs one shift for every hired employee whenever the shift cadence comes around.
    pub(crate) fn run_shifts(&mut self, time: f64) -> Vec<Event> {
        if !self.staffing.shift_due(time) {
            return vec![];
        }
        let mut events = vec![];
        let employees: Vec<String> = self.staffing.employees.keys().cloned().collect();
        for employee in employees {
            let kind = match self.known.employees.get(&employee) {
                Ok(kind) => kind.clone(),
                Err(_) => continue,
            };
            let state = match self.staffing.get_employee(&employee) {
                Ok(state) => state.clone(),
                Err(_) => continue,
            };
            if !state.hired {
                continue;
            }
            if state.resting {
                events.extend(self.rest(&employee));
                continue;
            }
            let cost = employee_energy_cost(state.level);
            let shift = match &kind.role {
                EmployeeRole::Tasks(tasks) => self.work_tasks(&employee, tasks, state.energy, cost),
                EmployeeRole::GrowHelper { capacity } => {
                    self.help_grow(&employee, *capacity, state.energy, cost)
                }
            };
            events.extend(shift);
        }
        events
    }

    fn rest(&mut self, employee: &str) -> Vec<Event> {
        match self.inventory.use_optional(Consumable::Coffee) {
            Some(coffee) => {
                debug!("{} drank a coffee and is back to work", employee);
                occur![coffee, self.staffing.refresh(employee)]
            }
            None => {
                let breakroom = self.progress.upgrade_level(BREAKROOM_UPGRADE);
                occur![self.staffing.regenerate(employee, breakroom)]
            }
        }
    }

    /// Tries each task against a random living plant, paying energy for every success.
    fn work_tasks(&mut self, employee: &str, tasks: &[Task], energy: f64, cost: f64) -> Vec<Event> {
        let mut events = vec![];
        let mut energy = energy;
        let mut resting = false;
        for task in tasks {
            if energy <= 0.0 {
                resting = true;
                break;
            }
            let living = self.planting.living_slots();
            if living.is_empty() {
                break;
            }
            let slot = living[self.random.index(living.len())];
            if let Some(done) = self.perform_task(*task, slot) {
                energy = (energy - cost).max(0.0);
                events.extend(done);
                events.push(worked(employee, *task, Some(slot)));
            }
            if energy <= REST_ENERGY {
                resting = true;
                break;
            }
        }
        events.push(self.staffing.update_energy(employee, energy, resting).into());
        events
    }

    fn perform_task(&mut self, task: Task, slot: usize) -> Option<Vec<Event>> {
        match task {
            Task::Water => self.water_plant(slot).ok(),
            Task::Feed => self.feed_plant(slot).ok(),
            Task::Treat => self.treat_plant(slot).ok(),
            Task::Harvest => match self.harvest_plant(slot) {
                Ok(events) => Some(events),
                Err(_) => {
                    let start = self.processing.start_drying(None).ok()?;
                    Some(occur![start()])
                }
            },
        }
    }

    /// Harvests, cares for the neediest plants, then replants, within an energy allowance.
    fn help_grow(&mut self, employee: &str, capacity: u32, energy: f64, cost: f64) -> Vec<Event> {
        let by_energy = (energy / cost).floor().max(0.0) as u32;
        let allowance = capacity.min(by_energy);
        if allowance == 0 {
            return match self.staffing.set_resting(employee, true) {
                Ok(rest) => occur![rest()],
                Err(_) => vec![],
            };
        }
        let mut events = vec![];
        let mut remaining = allowance;

        if self.inventory.items_of(SHEARS) > 0 {
            for slot in self.planting.ready_slots() {
                if remaining == 0 {
                    break;
                }
                if let Ok(done) = self.harvest_plant(slot) {
                    remaining -= 1;
                    events.extend(done);
                    events.push(worked(employee, Task::Harvest, Some(slot)));
                }
            }
        }

        let mut needy: Vec<(usize, f64, f64)> = self
            .planting
            .plants
            .iter()
            .filter(|plant| plant.is_alive())
            .map(|plant| (plant.slot, plant.water, plant.nutrients))
            .collect();
        needy.sort_by(|a, b| (a.1 + a.2).total_cmp(&(b.1 + b.2)));
        for (slot, water, nutrients) in needy {
            if remaining == 0 {
                break;
            }
            if water < WATER_MAX * CARE_THRESHOLD {
                if let Ok(done) = self.water_plant(slot) {
                    remaining -= 1;
                    events.extend(done);
                    events.push(worked(employee, Task::Water, Some(slot)));
                }
            }
            if remaining == 0 {
                break;
            }
            if nutrients < NUTRIENT_MAX * CARE_THRESHOLD {
                if let Ok(done) = self.feed_plant(slot) {
                    remaining -= 1;
                    events.extend(done);
                    events.push(worked(employee, Task::Feed, Some(slot)));
                }
            }
        }

        if let Some(strain) = self.inventory.first_seed() {
            for slot in self.planting.free_slots() {
                if remaining == 0 {
                    break;
                }
                if let Ok(done) = self.plant_seed(slot, &strain) {
                    remaining -= 1;
                    events.extend(done);
                }
            }
        }

        let spent = (allowance - remaining) as f64 * cost;
        let energy = (energy - spent).max(0.0);
        events.push(
            self.staffing
                .update_energy(employee, energy, energy <= REST_ENERGY)
                .into(),
        );
        events
    }
}

fn worked(employee: &str, task: Task, slot: Option<usize>) -> Event {
    vec![EmployeeWorked {
        employee: employee.to_string(),
        task,
        slot,
    }]
    .into()
}
