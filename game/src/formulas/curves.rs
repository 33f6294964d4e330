use crate::math::GaugeMath;

pub const BASE_PRICE_PER_GRAM: f64 = 2.0;
pub const CURING_QUALITY_CAP: f64 = 2.2;
pub const MIN_BATCH_QUALITY: f64 = 0.4;

pub fn seed_cost(base_cost: f64, purchased: u32, research_cost: f64) -> f64 {
    let cost = (base_cost * 1.18f64.powi(purchased as i32)).round();
    (cost * (1.0 - research_cost)).round().max(1.0)
}

pub fn item_cost(base_cost: f64, owned: u32, research_cost: f64) -> f64 {
    let cost = base_cost * 1.2f64.powi(owned as i32);
    (cost * (1.0 - research_cost)).round().max(1.0)
}

pub fn upgrade_cost(base_cost: f64, level: u32) -> f64 {
    (base_cost * 1.6f64.powi(level as i32)).round()
}

/// Grams needed to unlock the next slot when `unlocked` slots are open.
pub fn slot_unlock_cost(unlocked: usize) -> f64 {
    let exponent = unlocked.saturating_sub(1) as i32;
    (100.0 * 1.75f64.powi(exponent)).round()
}

pub fn plant_upgrade_cost(strain_cost: f64, level: u32) -> f64 {
    (strain_cost * 1.15f64.powi(level as i32)).round()
}

pub fn employee_upgrade_cost(salary: f64, level: u32) -> f64 {
    (salary * level as f64 * 2.0).round()
}

pub fn processing_slot_cost(slots: usize) -> f64 {
    let exponent = slots.saturating_sub(2) as i32;
    (250.0 * 2f64.powi(exponent)).round()
}

pub fn estate_refund(cost: f64) -> f64 {
    (cost * 0.6).round()
}

pub fn xp_for_next(level: u32) -> u64 {
    let level = level.max(1);
    (100.0 * 1.35f64.powi(level as i32 - 1)).floor() as u64
}

pub fn mastery_level(xp: f64) -> u32 {
    match xp {
        xp if xp >= 1000.0 => 10,
        xp if xp >= 600.0 => 7,
        xp if xp >= 300.0 => 5,
        xp if xp >= 120.0 => 3,
        xp if xp >= 60.0 => 2,
        xp if xp >= 30.0 => 1,
        _ => 0,
    }
}

pub fn prestige_gain(total_earned: f64) -> u32 {
    (total_earned.non_negative() / 10_000.0).sqrt().floor() as u32
}

pub fn research_points(total_earned: f64, haze: u32, spent: u32) -> u32 {
    let total = (total_earned.non_negative() / 500.0).floor() as u32 + haze;
    total.saturating_sub(spent)
}

/// Settlement multiplier for contracts, tiered by the average pooled quality.
pub fn sale_quality_multiplier(average: f64) -> f64 {
    if !average.is_finite() || average <= 0.0 {
        1.0
    } else if average >= 1.35 {
        1.6
    } else if average >= 1.15 {
        1.25
    } else {
        1.0
    }
}

/// Continuous multiplier applied to the live sale price.
pub fn quality_price_multiplier(average: f64) -> f64 {
    1.0 + (average - 1.0).bounded(-0.6, 2.0)
}

pub fn clamp_yield(value: f64, cap: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.bounded(0.0, cap.max(0.0))
}

pub fn clamp_batch_quality(quality: f64) -> f64 {
    quality.bounded(MIN_BATCH_QUALITY, CURING_QUALITY_CAP)
}

pub fn monthly_upkeep(plants: usize, research_cost: f64) -> f64 {
    let total = 25.0 + 5.0 * plants as f64;
    (total * (1.0 - research_cost).max(0.3)).round()
}

pub fn employee_energy_cost(level: u32) -> f64 {
    (8.0 - level as f64).max(4.0)
}

pub fn harvest_xp(dry_grams: f64, tier: f64) -> u64 {
    ((dry_grams / 50.0 * tier).floor() as u64).max(1)
}

/// XP tier bonus for a harvest of quality multiplier `qm`.
pub fn harvest_tier(qm: f64) -> f64 {
    if qm >= 1.3 {
        1.5
    } else if qm >= 1.1 {
        1.2
    } else {
        1.0
    }
}
