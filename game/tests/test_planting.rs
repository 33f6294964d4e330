use growbox::api::Action::{
    FeedPlant, HarvestAll, HarvestPlant, PlantSeed, RemovePlant, TreatPlant, UnlockSlot,
    WaterAll, WaterPlant,
};
use growbox::api::ActionError;
use growbox::inventory::Consumable;
use growbox::inventory::InventoryError::{ConsumableNotFound, SeedNotFound};
use growbox::math::FixedRandom;
use growbox::model::Knowledge;
use growbox::planting::PlantingError::{
    NoPlantsInNeed, NotReadyToHarvest, SlotLimitReached, SlotLocked, SlotOccupied,
};
use growbox::planting::{
    advance_plant, GrowConditions, Infestation, Plant, StrainProfile, HEALTH_MAX, NUTRIENT_MAX,
    QUALITY_MAX, QUALITY_MIN, WATER_MAX,
};

use crate::testing::{approx, GameTestScenario, CALM};

mod testing;

#[test]
fn test_plant_seed_without_seeds() {
    GameTestScenario::new()
        .when_player_perform(PlantSeed {
            slot: 0,
            strain: "gelato".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Inventory(SeedNotFound {
                strain: "gelato".to_string(),
            })
        })
        .then_slot_should_be_empty(0);
}

#[test]
fn test_plant_seed_of_unknown_strain() {
    GameTestScenario::new()
        .given_seeds("ghost", 1)
        .when_player_perform(PlantSeed {
            slot: 0,
            strain: "ghost".to_string(),
        })
        .then_action_should_fail(|_| ActionError::StrainNotFound {
            strain: "ghost".to_string(),
        })
        .then_seeds_should_be("ghost", 1);
}

#[test]
fn test_regular_plant_seed() {
    GameTestScenario::new()
        .given_seeds("gelato", 2)
        .when_player_perform(PlantSeed {
            slot: 1,
            strain: "gelato".to_string(),
        })
        .then_action_should_succeed()
        .then_seeds_should_be("gelato", 1)
        .then_plant(1, |plant| {
            assert_eq!(plant.strain, "gelato");
            assert_eq!(plant.growth, 0.0);
        })
        .then(|game| assert_eq!(game.progress.xp, 6));
}

#[test]
fn test_plant_seed_in_locked_slot_keeps_the_seed() {
    GameTestScenario::new()
        .given_seeds("gelato", 1)
        .when_player_perform(PlantSeed {
            slot: 2,
            strain: "gelato".to_string(),
        })
        .then_action_should_fail(|_| ActionError::Planting(SlotLocked { slot: 2 }))
        .then_seeds_should_be("gelato", 1);
}

#[test]
fn test_plant_seed_in_occupied_slot() {
    GameTestScenario::new()
        .given_seeds("gelato", 1)
        .given_plant(0, "honey")
        .when_player_perform(PlantSeed {
            slot: 0,
            strain: "gelato".to_string(),
        })
        .then_action_should_fail(|_| ActionError::Planting(SlotOccupied { slot: 0 }))
        .then_seeds_should_be("gelato", 1)
        .then_plant(0, |plant| assert_eq!(plant.strain, "honey"));
}

#[test]
fn test_remove_plant_refunds_its_seed() {
    GameTestScenario::new()
        .given_plant(0, "gelato")
        .when_player_perform(RemovePlant { slot: 0 })
        .then_action_should_succeed()
        .then_slot_should_be_empty(0)
        .then_seeds_should_be("gelato", 1);
}

#[test]
fn test_harvest_of_growing_plant_is_rejected() {
    GameTestScenario::new()
        .given_plant_with(0, "gelato", |plant| plant.growth = 0.9)
        .when_player_perform(HarvestPlant { slot: 0 })
        .then_action_should_fail(|_| ActionError::Planting(NotReadyToHarvest { slot: 0 }))
        .then_plant(0, |plant| assert_eq!(plant.growth, 0.9))
        .then_stock_should_be(0.0)
        .then(|game| assert!(game.processing.batches.is_empty()));
}

#[test]
fn test_harvest_of_dead_plant_is_rejected() {
    GameTestScenario::new()
        .given_plant_with(0, "gelato", |plant| {
            plant.growth = 1.0;
            plant.health = 0.0;
        })
        .when_player_perform(HarvestPlant { slot: 0 })
        .then_action_should_fail(|_| ActionError::Planting(NotReadyToHarvest { slot: 0 }));
}

#[test]
fn test_regular_harvest_creates_drying_batch() {
    GameTestScenario::new()
        .given_ripe_plant(0, "gelato")
        .when_player_perform(HarvestPlant { slot: 0 })
        .then_action_should_succeed()
        .then_slot_should_be_empty(0)
        .then(|game| {
            let batches = &game.processing.batches;
            assert_eq!(batches.len(), 1);
            assert!(batches[0].is_drying());
            assert!(approx(batches[0].grams, 69.0));
            assert!(approx(batches[0].quality, 1.0));
            assert_eq!(game.progress.xp, 1);
            assert!(game.progress.mastery.get("gelato").is_some());
        });
}

#[test]
fn test_harvest_replants_auto_grow_strain() {
    GameTestScenario::new()
        .given_ripe_plant(0, "gelato")
        .given_seeds("gelato", 1)
        .given(|game| {
            game.planting.auto_grow.insert("gelato".to_string());
        })
        .when_player_perform(HarvestPlant { slot: 0 })
        .then_action_should_succeed()
        .then_plant(0, |plant| {
            assert_eq!(plant.strain, "gelato");
            assert_eq!(plant.growth, 0.0);
        })
        .then_seeds_should_be("gelato", 0);
}

#[test]
fn test_harvest_all_takes_only_ripe_plants() {
    GameTestScenario::new()
        .given_ripe_plant(0, "gelato")
        .given_plant_with(1, "honey", |plant| plant.growth = 0.5)
        .when_player_perform(HarvestAll)
        .then_action_should_succeed()
        .then_slot_should_be_empty(0)
        .then_plant(1, |plant| assert_eq!(plant.growth, 0.5))
        .then(|game| assert_eq!(game.processing.batches.len(), 1));
}

#[test]
fn test_harvest_all_with_nothing_ripe() {
    GameTestScenario::new()
        .given_plant(0, "gelato")
        .when_player_perform(HarvestAll)
        .then_action_should_fail(|_| ActionError::Planting(NoPlantsInNeed));
}

#[test]
fn test_water_plant_costs_cash() {
    GameTestScenario::new()
        .given_cash(10.0)
        .given_plant_with(0, "gelato", |plant| plant.water = 20.0)
        .when_player_perform(WaterPlant { slot: 0 })
        .then_action_should_succeed()
        .then_cash_should_be(9.8)
        .then_plant(0, |plant| assert_eq!(plant.water, 75.0));
}

#[test]
fn test_water_plant_is_capped() {
    GameTestScenario::new()
        .given_plant_with(0, "gelato", |plant| plant.water = 90.0)
        .when_player_perform(WaterPlant { slot: 0 })
        .then_action_should_succeed()
        .then_plant(0, |plant| assert_eq!(plant.water, WATER_MAX));
}

#[test]
fn test_water_all_skips_plants_that_are_not_thirsty() {
    GameTestScenario::new()
        .given_plant_with(0, "gelato", |plant| plant.water = 10.0)
        .given_plant_with(1, "gelato", |plant| plant.water = 80.0)
        .when_player_perform(WaterAll)
        .then_action_should_succeed()
        .then_plant(0, |plant| assert_eq!(plant.water, 65.0))
        .then_plant(1, |plant| assert_eq!(plant.water, 80.0));
}

#[test]
fn test_feed_plant_without_nutrients() {
    GameTestScenario::new()
        .given_plant_with(0, "gelato", |plant| plant.nutrients = 10.0)
        .when_player_perform(FeedPlant { slot: 0 })
        .then_action_should_fail(|_| {
            ActionError::Inventory(ConsumableNotFound {
                consumable: Consumable::Nutrient,
            })
        })
        .then_plant(0, |plant| assert_eq!(plant.nutrients, 10.0));
}

#[test]
fn test_feed_plant_with_booster() {
    GameTestScenario::new()
        .given_consumable(Consumable::Nutrient, 2)
        .given_consumable(Consumable::Booster, 1)
        .given_plant_with(0, "gelato", |plant| plant.nutrients = 10.0)
        .when_player_perform(FeedPlant { slot: 0 })
        .then_action_should_succeed()
        .then_consumable_should_be(Consumable::Nutrient, 1)
        .then_consumable_should_be(Consumable::Booster, 0)
        .then_plant(0, |plant| {
            assert_eq!(plant.nutrients, 55.0);
            assert!(approx(plant.quality, 1.04));
            assert_eq!(plant.boost, 60.0);
        });
}

#[test]
fn test_treat_mold_needs_fungicide() {
    GameTestScenario::new()
        .given_consumable(Consumable::Spray, 1)
        .given_plant_with(0, "gelato", |plant| plant.pest = Some(Infestation::new("mold")))
        .when_player_perform(TreatPlant { slot: 0 })
        .then_action_should_fail(|_| {
            ActionError::Inventory(ConsumableNotFound {
                consumable: Consumable::Fungicide,
            })
        })
        .then_plant(0, |plant| assert!(plant.pest.is_some()));
}

#[test]
fn test_treat_mites_falls_back_to_beneficials() {
    GameTestScenario::new()
        .given_consumable(Consumable::Beneficials, 1)
        .given_plant_with(0, "gelato", |plant| plant.pest = Some(Infestation::new("mites")))
        .when_player_perform(TreatPlant { slot: 0 })
        .then_action_should_succeed()
        .then_consumable_should_be(Consumable::Beneficials, 0)
        .then_plant(0, |plant| assert!(plant.pest.is_none()));
}

#[test]
fn test_unlock_slot_is_capped_by_the_room() {
    GameTestScenario::new()
        .given_stock(1000.0, 1.0)
        .when_player_perform(UnlockSlot)
        .then_action_should_fail(|_| ActionError::Planting(SlotLimitReached { limit: 2 }))
        .then_stock_should_be(1000.0);
}

#[test]
fn test_unlock_slot_spends_grams() {
    GameTestScenario::new()
        .given_stock(1000.0, 1.0)
        .given(|game| game.progress.grow_tier = 1)
        .when_player_perform(UnlockSlot)
        .then_action_should_succeed()
        .then_stock_should_be(825.0)
        .then(|game| assert_eq!(game.planting.slots_unlocked, 3));
}

fn knowledge() -> Knowledge {
    Knowledge::standard()
}

#[test]
fn test_dry_plant_loses_health_fast() {
    let known = knowledge();
    let conditions = GrowConditions::default();
    let profile = StrainProfile::default();
    let mut plant = Plant {
        water: 0.0,
        nutrients: 60.0,
        ..Plant::new(0, "gelato")
    };
    let events = advance_plant(
        &mut plant,
        10.0,
        &conditions,
        &profile,
        &known.pests,
        &mut FixedRandom(CALM),
    );
    assert!(events.is_empty());
    assert!(approx(plant.health, 40.0));
    assert!(approx(plant.growth, 10.0 / 180.0 * 0.05));
    assert!(approx(plant.quality, 0.64));
}

fn advance_once_and_stepped(start: Plant, seconds: usize) -> (Plant, Plant) {
    let known = knowledge();
    let conditions = GrowConditions {
        pest_rate: 0.0,
        ..GrowConditions::default()
    };
    let profile = StrainProfile::default();

    let mut once = start.clone();
    advance_plant(
        &mut once,
        seconds as f64,
        &conditions,
        &profile,
        &known.pests,
        &mut FixedRandom(CALM),
    );
    let mut stepped = start;
    for _ in 0..seconds {
        advance_plant(
            &mut stepped,
            1.0,
            &conditions,
            &profile,
            &known.pests,
            &mut FixedRandom(CALM),
        );
    }
    (once, stepped)
}

fn assert_same_plant(once: &Plant, stepped: &Plant) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
    assert!(close(once.water, stepped.water), "{:?} {:?}", once, stepped);
    assert!(close(once.nutrients, stepped.nutrients), "{:?} {:?}", once, stepped);
    assert!(close(once.health, stepped.health), "{:?} {:?}", once, stepped);
    assert!(close(once.quality, stepped.quality), "{:?} {:?}", once, stepped);
    assert!(close(once.growth, stepped.growth), "{:?} {:?}", once, stepped);
    assert!(close(once.ready_time, stepped.ready_time), "{:?} {:?}", once, stepped);
}

#[test]
fn test_one_large_advance_matches_many_small_ones() {
    let start = Plant {
        water: 70.0,
        nutrients: 70.0,
        ..Plant::new(0, "gelato")
    };
    let (once, stepped) = advance_once_and_stepped(start, 20);
    assert_same_plant(&once, &stepped);
}

#[test]
fn test_fresh_plant_leaving_the_optimal_band() {
    let (once, stepped) = advance_once_and_stepped(Plant::new(0, "gelato"), 60);
    assert_same_plant(&once, &stepped);
    assert!(once.water < 40.0);
    assert!(once.health < HEALTH_MAX);
    assert!(once.quality < QUALITY_MAX);
}

#[test]
fn test_fresh_plant_left_alone_for_an_hour() {
    let (once, stepped) = advance_once_and_stepped(Plant::new(0, "gelato"), 3600);
    assert_same_plant(&once, &stepped);
    assert_eq!(once.health, 0.0);
    assert_eq!(stepped.health, 0.0);
    assert!(once.growth <= 0.1);
}

#[test]
fn test_overwatered_plant_drains_into_the_optimal_band() {
    let start = Plant {
        water: 95.0,
        nutrients: 95.0,
        ..Plant::new(0, "gelato")
    };
    let (once, stepped) = advance_once_and_stepped(start, 60);
    assert_same_plant(&once, &stepped);
}

#[test]
fn test_ripening_plant_dwells_past_the_decay_delay() {
    let start = Plant {
        water: 80.0,
        nutrients: 70.0,
        growth: 0.9,
        quality: 1.2,
        ..Plant::new(0, "gelato")
    };
    let (once, stepped) = advance_once_and_stepped(start, 120);
    assert_same_plant(&once, &stepped);
    assert!(once.is_ready());
    assert!(once.ready_time > 45.0);
}

#[test]
fn test_large_advance_splits_at_the_moment_water_runs_out() {
    let start = Plant {
        water: 10.0,
        nutrients: 60.0,
        ..Plant::new(0, "gelato")
    };
    let (once, stepped) = advance_once_and_stepped(start, 20);
    assert_same_plant(&once, &stepped);
    assert_eq!(once.water, 0.0);
    assert!((once.health - 30.0).abs() < 1e-6);
}

#[test]
fn test_gauges_stay_in_bounds_after_long_neglect() {
    let known = knowledge();
    let conditions = GrowConditions::default();
    let profile = StrainProfile::default();
    let mut plant = Plant {
        water: 95.0,
        nutrients: 95.0,
        quality: 1.5,
        ..Plant::new(0, "gelato")
    };
    let events = advance_plant(
        &mut plant,
        100_000.0,
        &conditions,
        &profile,
        &known.pests,
        &mut FixedRandom(0.0),
    );
    assert!(!events.is_empty());
    assert!((0.0..=WATER_MAX).contains(&plant.water));
    assert!((0.0..=NUTRIENT_MAX).contains(&plant.nutrients));
    assert!((0.0..=HEALTH_MAX).contains(&plant.health));
    assert!((0.0..=1.0).contains(&plant.growth));
    assert!((QUALITY_MIN..=QUALITY_MAX).contains(&plant.quality));
}

#[test]
fn test_normalizing_a_normalized_plant_changes_nothing() {
    let mut plant = Plant {
        water: f64::NAN,
        nutrients: -5.0,
        health: 500.0,
        quality: 9.0,
        growth: f64::INFINITY,
        ..Plant::new(0, "gelato")
    };
    plant.normalize();
    let normalized = plant.clone();
    plant.normalize();
    assert_eq!(plant, normalized);
    assert_eq!(plant.nutrients, 0.0);
    assert_eq!(plant.health, HEALTH_MAX);
    assert_eq!(plant.quality, QUALITY_MAX);
}
