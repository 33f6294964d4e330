use growbox::formulas::{
    clamp_batch_quality, estate_refund, harvest_tier, harvest_xp, item_cost, mastery_level,
    monthly_upkeep, plant_upgrade_cost, prestige_gain, processing_slot_cost, research_points,
    sale_quality_multiplier, seed_cost, slot_unlock_cost, upgrade_cost, xp_for_next,
};

#[test]
fn test_seed_cost_grows_with_every_purchase() {
    assert_eq!(seed_cost(60.0, 0, 0.0), 60.0);
    assert_eq!(seed_cost(60.0, 1, 0.0), 71.0);
    assert_eq!(seed_cost(60.0, 2, 0.0), 84.0);
}

#[test]
fn test_seed_cost_research_discount_never_goes_below_one() {
    assert_eq!(seed_cost(60.0, 0, 0.1), 54.0);
    assert_eq!(seed_cost(1.0, 0, 0.99), 1.0);
}

#[test]
fn test_item_cost_scales_with_owned_copies() {
    assert_eq!(item_cost(100.0, 0, 0.0), 100.0);
    assert_eq!(item_cost(100.0, 1, 0.0), 120.0);
    assert_eq!(item_cost(100.0, 2, 0.1), 130.0);
}

#[test]
fn test_upgrade_and_plant_upgrade_costs() {
    assert_eq!(upgrade_cost(75.0, 0), 75.0);
    assert_eq!(upgrade_cost(75.0, 2), 192.0);
    assert_eq!(plant_upgrade_cost(60.0, 1), 69.0);
}

#[test]
fn test_slot_unlock_cost_curve() {
    assert_eq!(slot_unlock_cost(0), 100.0);
    assert_eq!(slot_unlock_cost(1), 100.0);
    assert_eq!(slot_unlock_cost(2), 175.0);
    assert_eq!(slot_unlock_cost(3), 306.0);
}

#[test]
fn test_processing_slot_and_estate_prices() {
    assert_eq!(processing_slot_cost(2), 250.0);
    assert_eq!(processing_slot_cost(3), 500.0);
    assert_eq!(estate_refund(1200.0), 720.0);
}

#[test]
fn test_experience_curve() {
    assert_eq!(xp_for_next(1), 100);
    assert_eq!(xp_for_next(2), 135);
    assert_eq!(xp_for_next(3), 182);
    assert_eq!(xp_for_next(0), 100);
}

#[test]
fn test_mastery_thresholds() {
    assert_eq!(mastery_level(0.0), 0);
    assert_eq!(mastery_level(30.0), 1);
    assert_eq!(mastery_level(119.0), 2);
    assert_eq!(mastery_level(120.0), 3);
    assert_eq!(mastery_level(300.0), 5);
    assert_eq!(mastery_level(600.0), 7);
    assert_eq!(mastery_level(5000.0), 10);
}

#[test]
fn test_prestige_and_research_points() {
    assert_eq!(prestige_gain(9_999.0), 0);
    assert_eq!(prestige_gain(40_000.0), 2);
    assert_eq!(prestige_gain(f64::NAN), 0);
    assert_eq!(research_points(1_250.0, 3, 1), 4);
    assert_eq!(research_points(0.0, 0, 5), 0);
}

#[test]
fn test_sale_quality_tiers() {
    assert_eq!(sale_quality_multiplier(1.0), 1.0);
    assert_eq!(sale_quality_multiplier(1.15), 1.25);
    assert_eq!(sale_quality_multiplier(1.4), 1.6);
    assert_eq!(sale_quality_multiplier(f64::NAN), 1.0);
}

#[test]
fn test_monthly_upkeep_has_a_research_floor() {
    assert_eq!(monthly_upkeep(0, 0.0), 25.0);
    assert_eq!(monthly_upkeep(3, 0.0), 40.0);
    assert_eq!(monthly_upkeep(3, 0.9), 12.0);
}

#[test]
fn test_harvest_experience() {
    assert_eq!(harvest_tier(1.0), 1.0);
    assert_eq!(harvest_tier(1.2), 1.2);
    assert_eq!(harvest_tier(1.3), 1.5);
    assert_eq!(harvest_xp(10.0, 1.0), 1);
    assert_eq!(harvest_xp(150.0, 1.5), 4);
}

#[test]
fn test_batch_quality_bounds() {
    assert_eq!(clamp_batch_quality(0.1), 0.4);
    assert_eq!(clamp_batch_quality(3.0), 2.2);
    assert_eq!(clamp_batch_quality(f64::NAN), 0.4);
}
