use growbox::api::Action::{ChangeSpeed, ClaimQuest, Prestige, SellGrams};
use growbox::api::{ActionError, Event};
use growbox::progress::ProgressError::{NothingToPrestige, QuestNotReady};
use growbox::progress::{QuestStatus, PRESTIGE_SLOTS};
use growbox::timing::Timing::MonthPassed;
use growbox::timing::TimingError::UnsupportedSpeed;

use crate::testing::{approx, GameTestScenario};

mod testing;

#[test]
fn test_idle_game_only_accrues_playtime() {
    GameTestScenario::new()
        .given_plant(0, "gelato")
        .when_time_passes(10.0)
        .then(|game| {
            assert!(approx(game.timing.playtime, 10.0));
            assert_eq!(game.timing.world_seconds, 0.0);
        })
        .then_plant(0, |plant| {
            assert_eq!(plant.growth, 0.0);
            assert_eq!(plant.water, 55.0);
        });
}

#[test]
fn test_world_time_scales_with_speed() {
    GameTestScenario::new()
        .when_player_perform(ChangeSpeed { speed: 2.0 })
        .then_action_should_succeed()
        .when_time_passes(5.0)
        .then(|game| {
            assert!(approx(game.timing.playtime, 5.0));
            assert!(approx(game.timing.world_seconds, 10.0));
        });
}

#[test]
fn test_unsupported_speed_is_rejected() {
    GameTestScenario::new()
        .when_player_perform(ChangeSpeed { speed: 3.0 })
        .then_action_should_fail(|_| ActionError::Timing(UnsupportedSpeed { speed: 3.0 }))
        .then(|game| assert_eq!(game.timing.speed, 0.0));
}

#[test]
fn test_new_month_pays_upkeep_and_salaries() {
    GameTestScenario::new()
        .given_cash(500.0)
        .given_hired("grower")
        .given_speed(1.0)
        .when_time_passes(100.0)
        .then_update_events_should_contain(Event::Timing(vec![MonthPassed { index: 2 }]))
        .then_cash_should_be(500.0 - 25.0 - 200.0);
}

#[test]
fn test_bills_never_push_cash_below_zero() {
    GameTestScenario::new()
        .given_cash(10.0)
        .given_hired("grower")
        .given_speed(1.0)
        .when_time_passes(100.0)
        .then_cash_should_be(0.0);
}

#[test]
fn test_one_large_delta_settles_every_month_reached() {
    GameTestScenario::new()
        .given_cash(1000.0)
        .given(|game| game.fortune.next_event = 1e9)
        .given_speed(1.0)
        .when_time_passes(400.0)
        .then_update_events_should_contain(Event::Timing(vec![
            MonthPassed { index: 2 },
            MonthPassed { index: 3 },
            MonthPassed { index: 4 },
            MonthPassed { index: 5 },
        ]))
        .then_cash_should_be(1000.0 - 4.0 * 25.0)
        .then(|game| assert_eq!(game.timing.last_month_processed, 5));
}

#[test]
fn test_housekeeping_unlocks_achievements() {
    GameTestScenario::new()
        .given(|game| game.economy.total_earned = 10_000.0)
        .when_time_passes(4.0)
        .then(|game| assert!(game.progress.achievements.is_empty()))
        .when_time_passes(1.0)
        .then(|game| {
            assert!(game.progress.achievements.contains("harvest_10k"));
            assert_eq!(game.progress.haze, 1);
        });
}

#[test]
fn test_claim_a_finished_quest() {
    GameTestScenario::new()
        .given_cash(500.0)
        .given_stock(60.0, 1.0)
        .when_player_perform(SellGrams { grams: 60.0 })
        .then_action_should_succeed()
        .when_player_perform(ClaimQuest {
            quest: "market_rookie".to_string(),
        })
        .then_action_should_succeed()
        .then_cash_should_be(500.0 + 120.0 + 200.0)
        .then(|game| {
            assert_eq!(game.progress.xp, 31);
            assert!(game.progress.is_quest_claimed("market_rookie"));
        })
        .when_player_perform(ClaimQuest {
            quest: "market_rookie".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Progress(QuestNotReady {
                quest: "market_rookie".to_string(),
            })
        });
}

#[test]
fn test_claim_an_unfinished_quest() {
    GameTestScenario::new()
        .given_cash(500.0)
        .when_player_perform(ClaimQuest {
            quest: "starter_harvest".to_string(),
        })
        .then_action_should_fail(|_| {
            ActionError::Progress(QuestNotReady {
                quest: "starter_harvest".to_string(),
            })
        })
        .then_cash_should_be(500.0)
        .then(|game| {
            let status = game
                .progress
                .quests
                .iter()
                .find(|quest| quest.id == "starter_harvest")
                .map(|quest| quest.status);
            assert_eq!(status, Some(QuestStatus::Active));
        });
}

#[test]
fn test_prestige_trades_earnings_for_haze() {
    GameTestScenario::new()
        .given_cash(9_000.0)
        .given_level(7)
        .given_seeds("gelato", 3)
        .given_plant(0, "gelato")
        .given(|game| {
            game.economy.total_earned = 40_000.0;
            game.progress.achievements.insert("harvest_10k".to_string());
            game.progress.haze = 1;
        })
        .when_player_perform(Prestige)
        .then_action_should_succeed()
        .then_cash_should_be(500.0)
        .then_seeds_should_be("gelato", 0)
        .then_slot_should_be_empty(0)
        .then(|game| {
            assert_eq!(game.progress.haze, 3);
            assert_eq!(game.progress.resets, 1);
            assert_eq!(game.progress.level, 1);
            assert!(game.progress.achievements.contains("harvest_10k"));
            assert_eq!(game.planting.slots_unlocked, PRESTIGE_SLOTS);
            assert_eq!(game.economy.total_earned, 0.0);
        });
}

#[test]
fn test_prestige_needs_enough_earnings() {
    GameTestScenario::new()
        .given(|game| game.economy.total_earned = 9_999.0)
        .when_player_perform(Prestige)
        .then_action_should_fail(|_| ActionError::Progress(NothingToPrestige))
        .then(|game| assert_eq!(game.progress.resets, 0));
}
