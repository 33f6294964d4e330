use growbox::api::Action::{FireEmployee, GiveCoffee, HireEmployee, SendToRest, UpgradeEmployee};
use growbox::api::{ActionError, Event};
use growbox::economy::EconomyError::{NotEnoughCash, NotEnoughStock};
use growbox::inventory::Consumable;
use growbox::inventory::InventoryError::ConsumableNotFound;
use growbox::model::Task;
use growbox::progress::ProgressError::LevelTooLow;
use growbox::staffing::Staffing::EmployeeWorked;
use growbox::staffing::StaffingDomain;
use growbox::staffing::StaffingError::{EmployeeAlreadyHired, EmployeeNotHired};

use crate::testing::{approx, GameTestScenario};

mod testing;

#[test]
fn test_hire_employee() {
    GameTestScenario::new()
        .given_level(2)
        .given_cash(500.0)
        .when_player_perform(HireEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_succeed()
        .then_cash_should_be(300.0)
        .then(|game| {
            let grower = &game.staffing.employees["grower"];
            assert_eq!(grower.level, 1);
            assert!(approx(grower.energy, 100.0));
        });
}

#[test]
fn test_hire_employee_below_required_level() {
    GameTestScenario::new()
        .given_cash(500.0)
        .when_player_perform(HireEmployee {
            employee: "caretaker".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Progress(LevelTooLow {
                required: 5,
                level: 1,
            })
        })
        .then_cash_should_be(500.0)
        .then(|game| assert!(game.staffing.employees.is_empty()));
}

#[test]
fn test_hire_employee_without_cash() {
    GameTestScenario::new()
        .given_level(2)
        .given_cash(100.0)
        .when_player_perform(HireEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Economy(NotEnoughCash {
                required: 200.0,
                available: 100.0,
            })
        })
        .then(|game| assert!(game.staffing.employees.is_empty()));
}

#[test]
fn test_hire_same_employee_twice() {
    GameTestScenario::new()
        .given_level(2)
        .given_hired("grower")
        .when_player_perform(HireEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Staffing(EmployeeAlreadyHired {
                employee: "grower".to_string(),
            })
        });
}

#[test]
fn test_upgrade_employee_costs_grams() {
    GameTestScenario::new()
        .given_hired("grower")
        .given_stock(500.0, 1.0)
        .when_player_perform(UpgradeEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_succeed()
        .then_stock_should_be(100.0)
        .then(|game| assert_eq!(game.staffing.employees["grower"].level, 2));
}

#[test]
fn test_upgrade_employee_without_stock() {
    GameTestScenario::new()
        .given_hired("grower")
        .given_stock(50.0, 1.0)
        .when_player_perform(UpgradeEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Economy(NotEnoughStock {
                required: 400.0,
                available: 50.0,
            })
        })
        .then(|game| assert_eq!(game.staffing.employees["grower"].level, 1));
}

#[test]
fn test_fire_employee() {
    GameTestScenario::new()
        .given_hired("grower")
        .when_player_perform(FireEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_succeed()
        .then(|game| assert!(game.staffing.employees.is_empty()));
}

#[test]
fn test_fire_unknown_employee() {
    GameTestScenario::new()
        .when_player_perform(FireEmployee {
            employee: "grower".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Staffing(EmployeeNotHired {
                employee: "grower".to_string(),
            })
        });
}

#[test]
fn test_grower_waters_a_thirsty_plant_on_shift() {
    GameTestScenario::new()
        .given_hired("grower")
        .given_plant_with(0, "gelato", |plant| plant.water = 20.0)
        .given_speed(1.0)
        .when_time_passes(5.0)
        .then_update_events_should_contain(Event::Staffing(vec![EmployeeWorked {
            employee: "grower".to_string(),
            task: Task::Water,
            slot: Some(0),
        }]))
        .then(|game| {
            let grower = &game.staffing.employees["grower"];
            assert!(approx(grower.energy, 93.0));
            assert!(!grower.resting);
        })
        .then_plant(0, |plant| assert!(plant.water > 65.0));
}

#[test]
fn test_no_shift_before_the_interval() {
    GameTestScenario::new()
        .given_hired("grower")
        .given_plant_with(0, "gelato", |plant| plant.water = 20.0)
        .given_speed(1.0)
        .when_time_passes(4.0)
        .then(|game| assert!(approx(game.staffing.employees["grower"].energy, 100.0)))
        .then_plant(0, |plant| assert!(plant.water < 20.0));
}

#[test]
fn test_resting_employee_regenerates() {
    GameTestScenario::new()
        .given_hired("grower")
        .given(|game| {
            if let Some(grower) = game.staffing.employees.get_mut("grower") {
                grower.energy = 50.0;
                grower.resting = true;
            }
        })
        .given_speed(1.0)
        .when_time_passes(5.0)
        .then(|game| {
            let grower = &game.staffing.employees["grower"];
            assert!(approx(grower.energy, 56.0));
            assert!(grower.resting);
        });
}

#[test]
fn test_resting_employee_drinks_coffee_from_stock() {
    GameTestScenario::new()
        .given_hired("grower")
        .given_consumable(Consumable::Coffee, 1)
        .when_player_perform(SendToRest {
            employee: "grower".to_string(),
        })
        .then_action_should_succeed()
        .given_speed(1.0)
        .when_time_passes(5.0)
        .then_consumable_should_be(Consumable::Coffee, 0)
        .then(|game| {
            let grower = &game.staffing.employees["grower"];
            assert!(approx(grower.energy, 100.0));
            assert!(!grower.resting);
        });
}

#[test]
fn test_give_coffee() {
    GameTestScenario::new()
        .given_hired("grower")
        .given_consumable(Consumable::Coffee, 2)
        .given(|game| {
            if let Some(grower) = game.staffing.employees.get_mut("grower") {
                grower.energy = 3.0;
                grower.resting = true;
            }
        })
        .when_player_perform(GiveCoffee {
            employee: "grower".to_string(),
        })
        .then_action_should_succeed()
        .then_consumable_should_be(Consumable::Coffee, 1)
        .then(|game| {
            let grower = &game.staffing.employees["grower"];
            assert!(approx(grower.energy, 100.0));
            assert!(!grower.resting);
        });
}

#[test]
fn test_give_coffee_without_coffee() {
    GameTestScenario::new()
        .given_hired("grower")
        .when_player_perform(GiveCoffee {
            employee: "grower".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Inventory(ConsumableNotFound {
                consumable: Consumable::Coffee,
            })
        });
}

#[test]
fn test_regeneration_stops_resting_at_the_rested_mark() {
    let mut staffing = StaffingDomain::default();
    if let Ok(hire) = staffing.hire("grower") {
        hire();
    }
    staffing.update_energy("grower", 75.0, true);
    staffing.regenerate("grower", 0);
    assert!(approx(staffing.employees["grower"].energy, 81.0));
    assert!(!staffing.employees["grower"].resting);
}

#[test]
fn test_breakroom_speeds_up_regeneration() {
    let mut staffing = StaffingDomain::default();
    if let Ok(hire) = staffing.hire("grower") {
        hire();
    }
    staffing.update_energy("grower", 10.0, true);
    staffing.regenerate("grower", 2);
    assert!(approx(staffing.employees["grower"].energy, 22.0));
}

#[test]
fn test_shift_is_due_every_five_seconds() {
    let mut staffing = StaffingDomain::default();
    assert!(!staffing.shift_due(3.0));
    assert!(staffing.shift_due(2.0));
    assert!(!staffing.shift_due(4.9));
}
