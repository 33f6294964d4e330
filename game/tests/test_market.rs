use growbox::api::Action::{
    AcceptOffer, AcceptPharmacyOffer, DeclineContract, DeliverOrder, SellGrams, SellToBuyer,
};
use growbox::api::ActionError;
use growbox::economy::EconomyError::NotEnoughStock;
use growbox::economy::EconomyDomain;
use growbox::market::Market::{ContractExpired, EventEnded, EventStarted, NewsStarted};
use growbox::market::MarketError::ContractNotFound;
use growbox::market::{Buyer, ContractId, ContractKind, MarketConditions, MarketDomain};
use growbox::math::{FixedRandom, ScriptedRandom};

use crate::testing::{approx, GameTestScenario, CALM};

mod testing;

fn conditions(now: f64, level: u32) -> MarketConditions {
    MarketConditions {
        now,
        level,
        strains: vec!["gelato".to_string()],
        ..MarketConditions::default()
    }
}

#[test]
fn test_accept_offer_pays_the_quality_tier() {
    GameTestScenario::new()
        .given_cash(500.0)
        .given_stock(100.0, 1.4)
        .given_contract(ContractKind::Offer, 50.0, 3.0, 100.0)
        .when_player_perform(AcceptOffer { id: ContractId(1) })
        .then_action_should_succeed()
        .then_cash_should_be(500.0 + 50.0 * 3.0 * 1.6)
        .then_stock_should_be(50.0)
        .then(|game| {
            assert!(game.market.offers.is_empty());
            assert_eq!(game.progress.xp, 10);
            assert_eq!(game.economy.trades, 1);
        });
}

#[test]
fn test_accept_expired_offer_changes_nothing_but_the_offer_list() {
    GameTestScenario::new()
        .given_cash(500.0)
        .given_stock(100.0, 1.0)
        .given_contract(ContractKind::Offer, 50.0, 3.0, 100.0)
        .given_world_time(200.0)
        .when_player_perform(AcceptOffer { id: ContractId(1) })
        .then_action_should_succeed()
        .then_cash_should_be(500.0)
        .then_stock_should_be(100.0)
        .then(|game| {
            assert!(game.market.offers.is_empty());
            assert_eq!(game.journal.messages.len(), 1);
        });
}

#[test]
fn test_accept_offer_without_enough_stock_keeps_it() {
    GameTestScenario::new()
        .given_stock(10.0, 1.0)
        .given_contract(ContractKind::Offer, 50.0, 3.0, 100.0)
        .when_player_perform(AcceptOffer { id: ContractId(1) })
        .then_action_should_fail(|_| {
            ActionError::Economy(NotEnoughStock {
                required: 50.0,
                available: 10.0,
            })
        })
        .then(|game| assert_eq!(game.market.offers.len(), 1));
}

#[test]
fn test_accept_unknown_offer() {
    GameTestScenario::new()
        .when_player_perform(AcceptPharmacyOffer { id: ContractId(7) })
        .then_action_should_fail(|_| {
            ActionError::Market(ContractNotFound {
                kind: ContractKind::PharmacyOffer,
                id: ContractId(7),
            })
        });
}

#[test]
fn test_deliver_order_raises_reputation() {
    GameTestScenario::new()
        .given_cash(0.0)
        .given_stock(80.0, 1.0)
        .given_contract(ContractKind::Order, 80.0, 2.5, 100.0)
        .when_player_perform(DeliverOrder { id: ContractId(1) })
        .then_action_should_succeed()
        .then_cash_should_be(200.0)
        .then_stock_should_be(0.0)
        .then(|game| {
            assert_eq!(game.market.reputation, 1);
            assert_eq!(game.progress.xp, 12);
        });
}

#[test]
fn test_decline_contract() {
    GameTestScenario::new()
        .given_contract(ContractKind::Offer, 50.0, 3.0, 100.0)
        .when_player_perform(DeclineContract {
            kind: ContractKind::Offer,
            id: ContractId(1),
        })
        .then_action_should_succeed()
        .then(|game| assert!(game.market.offers.is_empty()));
}

#[test]
fn test_sell_grams_at_the_live_price() {
    GameTestScenario::new()
        .given_cash(0.0)
        .given_stock(150.0, 1.0)
        .when_player_perform(SellGrams { grams: 100.0 })
        .then_action_should_succeed()
        .then_cash_should_be(200.0)
        .then_stock_should_be(50.0)
        .then(|game| assert_eq!(game.progress.xp, 1));
}

#[test]
fn test_sell_to_dispensary_pays_more_than_street() {
    let dispensary = GameTestScenario::new()
        .given_cash(0.0)
        .given_stock(100.0, 1.0)
        .when_player_perform(SellToBuyer {
            buyer: Buyer::Dispensary,
            grams: 100.0,
        })
        .then_action_should_succeed()
        .then_cash_should_be(230.0);
    let street = GameTestScenario::new()
        .given_cash(0.0)
        .given_stock(100.0, 1.0)
        .when_player_perform(SellToBuyer {
            buyer: Buyer::Street,
            grams: 100.0,
        })
        .then_action_should_succeed()
        .then_cash_should_be(170.0);
    assert!(dispensary.game().economy.cash > street.game().economy.cash);
}

#[test]
fn test_sell_more_than_in_stock() {
    GameTestScenario::new()
        .given_cash(0.0)
        .given_stock(5.0, 1.0)
        .when_player_perform(SellGrams { grams: 6.0 })
        .then_action_should_fail(|_| {
            ActionError::Economy(NotEnoughStock {
                required: 6.0,
                available: 5.0,
            })
        })
        .then_cash_should_be(0.0);
}

#[test]
fn test_first_offer_spawns_after_ten_seconds() {
    let mut market = MarketDomain::default();
    market.update(10.0, &conditions(10.0, 1), &mut FixedRandom(CALM));
    assert_eq!(market.offers.len(), 1);
    let offer = &market.offers[0];
    assert_eq!(offer.grams, 436.0);
    assert!(approx(offer.price, 3.98));
    assert_eq!(offer.expires_at, 10.0 + 178.0);
    assert!(market.pharmacy_offers.is_empty());
}

#[test]
fn test_pharmacy_offers_need_level_four() {
    let mut market = MarketDomain::default();
    market.update(30.0, &conditions(30.0, 1), &mut FixedRandom(CALM));
    assert!(market.pharmacy_offers.is_empty());

    let mut market = MarketDomain::default();
    market.update(30.0, &conditions(30.0, 4), &mut FixedRandom(CALM));
    assert_eq!(market.pharmacy_offers.len(), 1);
    assert!(approx(market.pharmacy_offers[0].price, 4.38));
}

#[test]
fn test_expired_contracts_are_pruned() {
    let mut market = MarketDomain::default();
    market.update(10.0, &conditions(10.0, 1), &mut FixedRandom(CALM));
    let id = market.offers[0].id;
    let events = market.prune_expired(1000.0);
    assert_eq!(
        events,
        vec![ContractExpired {
            kind: ContractKind::Offer,
            id
        }]
    );
    assert!(market.offers.is_empty());
}

#[test]
fn test_market_event_reverts_after_thirty_seconds() {
    let mut market = MarketDomain::default();
    let events = market.update_event(90.0, &mut FixedRandom(CALM));
    assert_eq!(
        events,
        vec![EventStarted {
            event: "hype".to_string(),
            multiplier: 1.25
        }]
    );
    assert_eq!(market.event_multiplier, 1.25);

    let events = market.update_event(30.0, &mut FixedRandom(CALM));
    assert_eq!(events, vec![EventEnded]);
    assert_eq!(market.event_multiplier, 1.0);
    assert!(market.event.is_none());
}

#[test]
fn test_cooldown_roll_may_start_a_heatwave() {
    let mut market = MarketDomain::default();
    let mut random = ScriptedRandom::new(vec![0.1, 0.2, 0.5]);
    let events = market.roll_cooldown(300.0, &mut random);
    assert_eq!(
        events,
        vec![NewsStarted {
            news: "heatwave".to_string(),
            multiplier: 1.0
        }]
    );
    assert_eq!(market.water_multiplier, 1.5);
    assert_eq!(market.news_timer, 300.0);
    assert_eq!(market.event_cooldown, 450.0);
}

#[test]
fn test_cooldown_roll_waits_for_the_timer() {
    let mut market = MarketDomain::default();
    let events = market.roll_cooldown(5.0, &mut FixedRandom(0.0));
    assert!(events.is_empty());
    assert_eq!(market.event_cooldown, 295.0);
}

#[test]
fn test_stock_quality_is_held_to_the_batch_range() {
    let mut economy = EconomyDomain::default();
    economy.add_stock(10.0, 5.0);
    assert!(approx(economy.average_quality(), 2.2));
    economy.add_stock(10.0, 0.1);
    assert!(approx(economy.average_quality(), 1.3));
    assert!(approx(economy.grams, 20.0));
}
