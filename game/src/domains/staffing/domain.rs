use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Task;

pub const SHIFT_INTERVAL: f64 = 5.0;
pub const ENERGY_MAX: f64 = 100.0;
pub const REST_ENERGY: f64 = 5.0;
pub const RESTED_ENERGY: f64 = 80.0;
pub const ENERGY_REGEN: f64 = 6.0;
pub const BREAKROOM_REGEN_BONUS: f64 = 0.5;
pub const CARE_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingDomain {
    pub employees: BTreeMap<String, EmployeeState>,
    pub shift_timer: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeState {
    pub hired: bool,
    pub level: u32,
    pub energy: f64,
    pub resting: bool,
}

impl Default for EmployeeState {
    fn default() -> Self {
        Self {
            hired: true,
            level: 1,
            energy: ENERGY_MAX,
            resting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Staffing {
    EmployeeHired {
        employee: String,
    },
    EmployeeUpgraded {
        employee: String,
        level: u32,
    },
    EmployeeFired {
        employee: String,
    },
    EmployeeWorked {
        employee: String,
        task: Task,
        slot: Option<usize>,
    },
    EnergyChanged {
        employee: String,
        energy: f64,
        resting: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum StaffingError {
    EmployeeAlreadyHired { employee: String },
    EmployeeNotHired { employee: String },
}
