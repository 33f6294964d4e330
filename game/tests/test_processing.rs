use growbox::api::Action::{CollectAll, CollectBatch, PressBatch, StartCuring, UpgradeStation};
use growbox::api::ActionError;
use growbox::economy::EconomyError::NotEnoughCash;
use growbox::processing::ProcessingError::{BatchNotDry, BatchNotReady, NothingToCollect};
use growbox::processing::{
    BatchId, Finish, ProcessingDomain, Stage, Station, CURING_TIME, DRYING_TIME,
};

use crate::testing::{approx, GameTestScenario};

mod testing;

#[test]
fn test_drying_keeps_thirty_percent_of_the_weight_whatever_the_quality() {
    for quality in [0.5, 1.0, 1.4] {
        let mut processing = ProcessingDomain::default();
        processing.create_batch("gelato", 100.0, quality);
        processing.update(DRYING_TIME);
        let batch = &processing.batches[0];
        assert_eq!(batch.stage, Stage::Ready(Finish::Dry));
        assert!(approx(batch.grams, 30.0));
    }
}

#[test]
fn test_drying_raises_quality_within_bounds() {
    let mut processing = ProcessingDomain::default();
    processing.create_batch("gelato", 100.0, 1.2);
    processing.create_batch("gelato", 100.0, 1.6);
    processing.update(DRYING_TIME);
    assert!(approx(processing.batches[0].quality, 1.8));
    assert!(approx(processing.batches[1].quality, 2.2));
}

#[test]
fn test_wet_batches_wait_for_a_free_drying_slot() {
    let mut processing = ProcessingDomain::default();
    for _ in 0..3 {
        processing.create_batch("gelato", 10.0, 1.0);
    }
    assert_eq!(processing.count_drying(), 2);
    assert!(processing.batches[2].is_wet());

    processing.update(DRYING_TIME);

    let third = processing
        .batches
        .iter()
        .find(|batch| batch.id == BatchId(3))
        .map(|batch| batch.stage);
    assert_eq!(
        third,
        Some(Stage::Drying {
            remaining: DRYING_TIME,
            total: DRYING_TIME
        })
    );
}

#[test]
fn test_curing_quality_follows_progress() {
    let mut processing = ProcessingDomain::default();
    processing.create_batch("gelato", 100.0, 1.0);
    processing.update(DRYING_TIME);
    let start = processing.batches[0].quality;
    let target = start * 1.25;
    let start_curing = processing.start_curing(BatchId(1)).unwrap();
    start_curing();

    processing.update(CURING_TIME / 2.0);
    assert!(approx(
        processing.batches[0].quality,
        start + (target - start) * 0.5
    ));

    processing.update(CURING_TIME / 2.0);
    assert_eq!(processing.batches[0].stage, Stage::Ready(Finish::Cured));
    assert!(approx(processing.batches[0].quality, target));
}

#[test]
fn test_curing_needs_a_dry_batch() {
    let mut processing = ProcessingDomain::default();
    processing.create_batch("gelato", 100.0, 1.0);
    let result = processing.start_curing(BatchId(1)).map(|_| ());
    assert_eq!(result, Err(BatchNotDry { id: BatchId(1) }));
}

#[test]
fn test_collect_batch_moves_it_into_stock() {
    GameTestScenario::new()
        .given_dry_batch("gelato", 30.0, 1.5)
        .when_player_perform(CollectBatch { batch: BatchId(1) })
        .then_action_should_succeed()
        .then_stock_should_be(30.0)
        .then(|game| {
            assert!(game.processing.batches.is_empty());
            assert!(approx(game.economy.average_quality(), 1.5));
            assert!(approx(game.economy.total_earned, 30.0));
            assert_eq!(game.progress.xp, 1);
        });
}

#[test]
fn test_collect_batch_that_is_still_drying() {
    GameTestScenario::new()
        .given(|game| {
            game.processing.create_batch("gelato", 100.0, 1.0);
        })
        .when_player_perform(CollectBatch { batch: BatchId(1) })
        .then_action_should_fail(|_| {
            ActionError::Processing(BatchNotReady { id: BatchId(1) })
        })
        .then_stock_should_be(0.0);
}

#[test]
fn test_collect_all_batches() {
    GameTestScenario::new()
        .given_dry_batch("gelato", 40.0, 1.0)
        .given_dry_batch("honey", 80.0, 2.0)
        .when_player_perform(CollectAll)
        .then_action_should_succeed()
        .then_stock_should_be(120.0)
        .then(|game| {
            assert!(approx(game.economy.average_quality(), 200.0 / 120.0));
            assert_eq!(game.progress.xp, 3);
        });
}

#[test]
fn test_collect_all_with_nothing_ready() {
    GameTestScenario::new()
        .when_player_perform(CollectAll)
        .then_action_should_fail(|_| ActionError::Processing(NothingToCollect));
}

#[test]
fn test_press_batch_into_concentrate() {
    GameTestScenario::new()
        .given_dry_batch("gelato", 100.0, 1.0)
        .when_player_perform(PressBatch { batch: BatchId(1) })
        .then_action_should_succeed()
        .then_stock_should_be(0.0)
        .then(|game| {
            assert!(approx(game.economy.concentrate, 35.0));
            assert_eq!(game.progress.xp, 7);
        });
}

#[test]
fn test_start_curing_through_the_game() {
    GameTestScenario::new()
        .given_dry_batch("gelato", 30.0, 1.0)
        .when_player_perform(StartCuring { batch: BatchId(1) })
        .then_action_should_succeed()
        .then(|game| assert!(game.processing.batches[0].is_curing()));
}

#[test]
fn test_upgrade_drying_station() {
    GameTestScenario::new()
        .given_cash(300.0)
        .when_player_perform(UpgradeStation {
            station: Station::Drying,
        })
        .then_action_should_succeed()
        .then_cash_should_be(50.0)
        .then(|game| assert_eq!(game.processing.slots.drying, 3));
}

#[test]
fn test_upgrade_station_without_cash() {
    GameTestScenario::new()
        .given_cash(100.0)
        .when_player_perform(UpgradeStation {
            station: Station::Curing,
        })
        .then_action_should_fail(|_| {
            ActionError::Economy(NotEnoughCash {
                required: 250.0,
                available: 100.0,
            })
        })
        .then(|game| assert_eq!(game.processing.slots.curing, 2));
}
