use crate::collections::Dictionary;
use crate::math::{GaugeMath, Random};
use crate::model::{PestAffinity, PestEffect, PestKind};
use crate::planting::Planting::{PlantDied, PlantInfested, PlantRipened};
use crate::planting::{
    GrowConditions, Infestation, Plant, Planting, PlantingDomain, StrainProfile,
    FLOWERING_STAGE, HEALTH_DECAY_DRY, HEALTH_DECAY_HUNGRY, HEALTH_MAX, HEALTH_RECOVER_RATE,
    MAX_SEGMENTS, NUTRIENT_DRAIN_PER_SEC, NUTRIENT_MAX, PEST_SEVERITY_GROWTH, PEST_SEVERITY_MAX,
    QUALITY_GAIN_GOOD, QUALITY_LOSS_BAD, QUALITY_MAX, QUALITY_MIN, READY_DECAY_DELAY,
    WATER_DRAIN_PER_SEC, WATER_MAX,
};

const GAUGE_EPSILON: f64 = 1e-9;

const WATER_MARKS: [f64; 5] = [0.0, 0.25, 0.4, 0.85, 0.9];
const NUTRIENT_MARKS: [f64; 5] = [0.0, 0.3, 0.4, 0.8, 0.9];
const HEALTH_MARKS: [f64; 4] = [0.0, 40.0, 50.0, 85.0];

const UNKNOWN_PEST_EFFECT: PestEffect = PestEffect {
    growth: 0.8,
    health: -1.0,
    quality: -0.01,
};

impl PlantingDomain {
    pub fn update(
        &mut self,
        time: f64,
        conditions: &GrowConditions,
        pests: &Dictionary<PestKind>,
        random: &mut dyn Random,
    ) -> Vec<Planting> {
        let mut events = vec![];
        for plant in self.plants.iter_mut() {
            let profile = conditions.profile(&plant.strain);
            events.extend(advance_plant(
                plant, time, conditions, &profile, pests, random,
            ));
        }
        events
    }
}

/// Advances one plant by `time` world seconds.
///
/// The delta is split at every moment a gauge crosses one of the bands that change its rates:
/// water and nutrient bands, health marks, ripening, the ready dwell delay, boost expiry and the
/// pest severity cap. Within a segment every rate is constant (or linear in severity), so one
/// large step and many small ones land on the same state.
pub fn advance_plant(
    plant: &mut Plant,
    time: f64,
    conditions: &GrowConditions,
    profile: &StrainProfile,
    pests: &Dictionary<PestKind>,
    random: &mut dyn Random,
) -> Vec<Planting> {
    plant.normalize();
    if !(time > 0.0) || !time.is_finite() || !plant.is_alive() {
        return vec![];
    }
    let was_ready = plant.is_ready();
    let was_clean = plant.pest.is_none();

    let drains = Drains {
        water: WATER_DRAIN_PER_SEC
            * conditions.water_multiplier
            * (1.0 - conditions.research_water).max(0.0)
            * profile.water.max(0.1),
        nutrients: NUTRIENT_DRAIN_PER_SEC * profile.nutrient.max(0.1),
    };

    let mut remaining = time;
    for segment in 0..MAX_SEGMENTS {
        if remaining <= 0.0 {
            break;
        }
        let rates = Rates::of(plant, conditions, profile, pests, &drains);
        let mut step = remaining;
        if segment + 1 < MAX_SEGMENTS {
            if let Some(crossing) = next_crossing(plant, &rates, &drains) {
                step = step.min(crossing);
            }
        }

        advance_segment(plant, step, &rates, &drains, conditions, profile, pests, random);
        remaining -= step;

        if plant.health <= 0.0 {
            plant.health = 0.0;
            plant.growth = plant.growth.min(0.1);
            break;
        }
    }

    let mut events = vec![];
    if !was_ready && plant.is_ready() {
        events.push(PlantRipened { slot: plant.slot });
    }
    if was_clean {
        if let Some(infestation) = &plant.pest {
            events.push(PlantInfested {
                slot: plant.slot,
                pest: infestation.pest.clone(),
            });
        }
    }
    if !plant.is_alive() {
        events.push(PlantDied { slot: plant.slot });
    }
    events
}

struct Drains {
    water: f64,
    nutrients: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Side {
    Below,
    At,
    Above,
}

/// Where `value` sits against `threshold`; a value on the mark takes the side it is moving to.
fn side(value: f64, threshold: f64, slope: f64) -> Side {
    if value > threshold + GAUGE_EPSILON {
        Side::Above
    } else if value < threshold - GAUGE_EPSILON {
        Side::Below
    } else if slope > 0.0 {
        Side::Above
    } else if slope < 0.0 {
        Side::Below
    } else {
        Side::At
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Band {
    Empty,
    Low,
    Neutral,
    Optimal,
    Excess,
}

impl Band {
    /// `marks` are ratios of `max`: empty, low below, optimal from, optimal to, excess above.
    fn classify(value: f64, max: f64, marks: [f64; 5], slope: f64) -> Self {
        let [empty, low, optimal_from, optimal_to, excess] = marks.map(|ratio| ratio * max);
        if side(value, empty, slope) != Side::Above {
            Band::Empty
        } else if side(value, low, slope) == Side::Below {
            Band::Low
        } else if side(value, excess, slope) == Side::Above {
            Band::Excess
        } else if side(value, optimal_from, slope) != Side::Below
            && side(value, optimal_to, slope) != Side::Above
        {
            Band::Optimal
        } else {
            Band::Neutral
        }
    }
}

/// `value + slope × t + curvature × t²` over one segment.
#[derive(Debug, Clone, Copy, Default)]
struct Trajectory {
    slope: f64,
    curvature: f64,
}

impl Trajectory {
    fn linear(slope: f64) -> Self {
        Self {
            slope,
            curvature: 0.0,
        }
    }

    fn at(&self, value: f64, time: f64) -> f64 {
        value + self.slope * time + self.curvature * time * time
    }

    /// Earliest positive time the trajectory reaches `threshold`.
    fn crossing(&self, value: f64, threshold: f64) -> Option<f64> {
        let offset = value - threshold;
        if offset.abs() <= GAUGE_EPSILON {
            return None;
        }
        let roots = if self.curvature.abs() < f64::EPSILON {
            if self.slope == 0.0 {
                return None;
            }
            [-offset / self.slope, f64::NAN]
        } else {
            let discriminant = self.slope * self.slope - 4.0 * self.curvature * offset;
            if discriminant < 0.0 {
                return None;
            }
            let root = discriminant.sqrt();
            let denominator = 2.0 * self.curvature;
            [(-self.slope - root) / denominator, (-self.slope + root) / denominator]
        };
        roots.into_iter().filter(|time| *time > 0.0).reduce(f64::min)
    }

    fn turning_point(&self) -> Option<f64> {
        if self.curvature.abs() < f64::EPSILON {
            return None;
        }
        let time = -self.slope / (2.0 * self.curvature);
        (time > GAUGE_EPSILON).then_some(time)
    }
}

/// Per second rates holding until the next crossing.
struct Rates {
    growth: f64,
    health: Trajectory,
    quality: Trajectory,
    severity: f64,
}

impl Rates {
    fn of(
        plant: &Plant,
        conditions: &GrowConditions,
        profile: &StrainProfile,
        pests: &Dictionary<PestKind>,
        drains: &Drains,
    ) -> Self {
        let water = Band::classify(plant.water, WATER_MAX, WATER_MARKS, -drains.water);
        let nutrients = Band::classify(
            plant.nutrients,
            NUTRIENT_MAX,
            NUTRIENT_MARKS,
            -drains.nutrients,
        );
        let thriving = water == Band::Optimal && nutrients == Band::Optimal;
        let ripe = plant.is_ready();

        let mut growth = conditions.base_growth() * profile.speed;
        let mut health = 0.0;
        let mut quality = 0.0;
        let mut health_curvature = 0.0;
        let mut quality_curvature = 0.0;
        let mut severity = 0.0;

        if plant.boost > 0.0 {
            growth *= 1.25;
            quality -= 0.002;
        }

        match water {
            Band::Empty => {
                health -= HEALTH_DECAY_DRY;
                quality -= QUALITY_LOSS_BAD;
                growth *= 0.05;
            }
            Band::Low => {
                health -= HEALTH_DECAY_DRY / 2.0;
                quality -= QUALITY_LOSS_BAD / 2.0;
                growth *= 0.35;
            }
            Band::Excess => {
                quality -= 0.02;
                growth *= 0.8;
            }
            Band::Optimal => {
                quality += QUALITY_GAIN_GOOD;
                health += HEALTH_RECOVER_RATE * 0.3;
            }
            Band::Neutral => {}
        }

        match nutrients {
            Band::Empty => {
                health -= HEALTH_DECAY_HUNGRY;
                quality -= QUALITY_LOSS_BAD;
                growth *= 0.25;
            }
            Band::Low => {
                health -= HEALTH_DECAY_HUNGRY / 2.0;
                quality -= QUALITY_LOSS_BAD / 2.0;
                growth *= 0.5;
            }
            Band::Excess => quality -= 0.015,
            Band::Optimal => quality += QUALITY_GAIN_GOOD * 0.8,
            Band::Neutral => {}
        }

        if conditions.is_winter() && !conditions.climate_control {
            growth *= 0.9;
        }

        if let Some(infestation) = &plant.pest {
            let effect = pests
                .get(&infestation.pest)
                .map(|pest| pest.effect)
                .unwrap_or(UNKNOWN_PEST_EFFECT);
            if infestation.severity < PEST_SEVERITY_MAX - GAUGE_EPSILON {
                severity = PEST_SEVERITY_GROWTH;
            }
            let intensity = 0.5 + 0.5 * infestation.severity;
            growth *= effect.growth.max(0.2);
            health += effect.health * intensity;
            quality += effect.quality * intensity;
            health_curvature = 0.25 * effect.health * severity;
            quality_curvature = 0.25 * effect.quality * severity;
        }

        if ripe && side(plant.ready_time, READY_DECAY_DELAY, 1.0) == Side::Above {
            quality -= QUALITY_LOSS_BAD / 2.0;
        }

        if thriving && !ripe && side(plant.health, 50.0, health) == Side::Above {
            health += HEALTH_RECOVER_RATE;
        }

        if side(plant.health, 40.0, health) == Side::Below {
            growth *= 0.6;
        }
        if thriving && side(plant.health, 85.0, health) == Side::Above {
            growth *= 1.1;
        }

        Self {
            growth: if ripe {
                0.0
            } else {
                growth / profile.grow_time.max(1.0)
            },
            health: Trajectory {
                slope: health,
                curvature: health_curvature,
            },
            quality: Trajectory {
                slope: quality,
                curvature: quality_curvature,
            },
            severity,
        }
    }
}

fn next_crossing(plant: &Plant, rates: &Rates, drains: &Drains) -> Option<f64> {
    let water = Trajectory::linear(-drains.water);
    let nutrients = Trajectory::linear(-drains.nutrients);
    let mut times = vec![];
    times.extend(
        WATER_MARKS
            .iter()
            .filter_map(|ratio| water.crossing(plant.water, ratio * WATER_MAX)),
    );
    times.extend(
        NUTRIENT_MARKS
            .iter()
            .filter_map(|ratio| nutrients.crossing(plant.nutrients, ratio * NUTRIENT_MAX)),
    );
    times.extend(
        HEALTH_MARKS
            .iter()
            .filter_map(|mark| rates.health.crossing(plant.health, *mark)),
    );
    times.extend(rates.health.turning_point());
    times.extend(rates.quality.turning_point());
    if plant.is_ready() {
        times.extend(Trajectory::linear(1.0).crossing(plant.ready_time, READY_DECAY_DELAY));
    } else {
        times.extend(Trajectory::linear(rates.growth).crossing(plant.growth, 1.0));
    }
    if plant.boost > 0.0 {
        times.push(plant.boost);
    }
    if let Some(infestation) = &plant.pest {
        times.extend(
            Trajectory::linear(rates.severity).crossing(infestation.severity, PEST_SEVERITY_MAX),
        );
    }
    times.into_iter().reduce(f64::min)
}

fn drain(gauge: f64, amount: f64, max: f64) -> f64 {
    let value = (gauge - amount).bounded(0.0, max);
    if value < GAUGE_EPSILON {
        0.0
    } else {
        value
    }
}

#[allow(clippy::too_many_arguments)]
fn advance_segment(
    plant: &mut Plant,
    time: f64,
    rates: &Rates,
    drains: &Drains,
    conditions: &GrowConditions,
    profile: &StrainProfile,
    pests: &Dictionary<PestKind>,
    random: &mut dyn Random,
) {
    let stage = plant.stage();
    let water_ratio = plant.water / WATER_MAX;
    let nutrient_ratio = plant.nutrients / NUTRIENT_MAX;

    if plant.boost > 0.0 {
        plant.boost -= time;
        if plant.boost < GAUGE_EPSILON {
            plant.boost = 0.0;
        }
    }

    if plant.is_ready() {
        plant.ready_time += time;
    } else {
        plant.growth = (plant.growth + rates.growth * time).bounded(0.0, 1.0);
        if plant.growth >= 1.0 - GAUGE_EPSILON {
            plant.growth = 1.0;
            plant.ready_time = 0.0;
        }
    }

    plant.health = rates.health.at(plant.health, time).bounded(0.0, HEALTH_MAX);
    if plant.health < GAUGE_EPSILON {
        plant.health = 0.0;
    }
    plant.quality = rates
        .quality
        .at(plant.quality, time)
        .bounded(QUALITY_MIN, QUALITY_MAX);

    match plant.pest.as_mut() {
        Some(infestation) => {
            infestation.severity += rates.severity * time;
            if infestation.severity > PEST_SEVERITY_MAX - GAUGE_EPSILON {
                infestation.severity = PEST_SEVERITY_MAX;
            }
        }
        None => {
            plant.pest = roll_pest(
                stage,
                time,
                water_ratio,
                nutrient_ratio,
                conditions,
                profile,
                pests,
                random,
            );
        }
    }

    plant.water = drain(plant.water, drains.water * time, WATER_MAX);
    plant.nutrients = drain(plant.nutrients, drains.nutrients * time, NUTRIENT_MAX);
}

#[allow(clippy::too_many_arguments)]
fn roll_pest(
    stage: usize,
    time: f64,
    water_ratio: f64,
    nutrient_ratio: f64,
    conditions: &GrowConditions,
    profile: &StrainProfile,
    pests: &Dictionary<PestKind>,
    random: &mut dyn Random,
) -> Option<Infestation> {
    let trait_risk = profile.pest.max(0.05);
    let flowering = stage == FLOWERING_STAGE;
    for pest in pests.iter().filter(|pest| !pest.secondary) {
        if pest.flowering_only && !flowering {
            continue;
        }
        let mut risk =
            pest.base * time * conditions.difficulty_pest * conditions.pest_rate * trait_risk;
        match pest.affinity {
            PestAffinity::Dry if water_ratio < 0.35 => risk *= 3.0,
            PestAffinity::Wet if water_ratio > 0.85 => risk *= 3.5,
            PestAffinity::WetRoot => risk *= if water_ratio > 0.9 { 6.0 } else { 0.2 },
            PestAffinity::Overfeed => risk *= if nutrient_ratio > 0.9 { 5.0 } else { 0.2 },
            _ => {}
        }
        if nutrient_ratio < 0.25 {
            risk *= 1.3;
        }
        if conditions.is_summer() && pest.affinity == PestAffinity::Wet {
            risk *= 1.8;
        }
        if let Some(modifier) = conditions.pest_modifiers.get(&pest.id) {
            risk *= modifier;
        }
        if random.chance(1.0 - (-risk).exp()) {
            return Some(Infestation::new(&pest.id));
        }
    }
    for pest in pests.iter().filter(|pest| pest.secondary) {
        let mut risk = pest.base * time * conditions.pest_rate * trait_risk;
        risk *= match pest.affinity {
            PestAffinity::WetRoot if water_ratio > 0.9 => 6.0,
            PestAffinity::Overfeed if nutrient_ratio > 0.9 => 5.0,
            _ => 0.1,
        };
        if random.chance(1.0 - (-risk).exp()) {
            return Some(Infestation::new(&pest.id));
        }
    }
    None
}
