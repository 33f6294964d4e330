use crate::breeding::{DEFAULT_STABILITY, MUTATION_CHANCE, STABILITY_FACTOR, TRAIT_INHERIT_CHANCE};
use crate::math::{GaugeMath, Random};
use crate::model::{Lineage, StrainKind, StrainTrait};

/// Derives a hybrid of `a` and `b`.
///
/// Stats drift from the parental mean by up to a stat-specific bandwidth scaled by volatility,
/// the inverse of the combined stability. Rarity never drops below the rarer parent and the
/// label depends on the parents only, so a fixed random source reproduces the same hybrid.
pub fn cross_strains(
    a: &StrainKind,
    b: &StrainKind,
    pool: &[StrainTrait],
    id: String,
    random: &mut dyn Random,
) -> StrainKind {
    let stability_a = a.stability.unwrap_or(DEFAULT_STABILITY);
    let stability_b = b.stability.unwrap_or(DEFAULT_STABILITY);
    let stability = ((stability_a + stability_b) / 2.0 * STABILITY_FACTOR).bounded(0.1, 1.0);
    let volatility = 1.0 - stability;

    let mut swing = |bandwidth: f64| (random.generate() * 2.0 - 1.0) * volatility * bandwidth;
    let base_yield = ((a.base_yield + b.base_yield) / 2.0 * (1.0 + swing(0.2)))
        .round()
        .max(10.0);
    let grow = ((a.grow + b.grow) / 2.0 * (1.0 + swing(0.15)))
        .round()
        .max(30.0);
    let quality = ((a.quality + b.quality) / 2.0 * (1.0 + swing(0.08)))
        .round_to(2)
        .max(0.5);

    StrainKind {
        id,
        name: mash_name(&a.name, &b.name),
        tag: mash_tag(&a.tag, &b.tag),
        rarity: a.rarity.max(b.rarity),
        cost: ((a.cost + b.cost) / 2.0).round().max(50.0),
        base_yield,
        grow,
        quality,
        traits: inherit_traits(a, b, pool, random),
        stability: Some(stability),
        lineage: Some(Lineage {
            first: a.name.clone(),
            second: b.name.clone(),
        }),
        generation: a.generation.max(b.generation).max(1) + 1,
    }
}

fn inherit_traits(
    a: &StrainKind,
    b: &StrainKind,
    pool: &[StrainTrait],
    random: &mut dyn Random,
) -> Vec<StrainTrait> {
    let mut inherited: Vec<StrainTrait> = vec![];
    for candidate in a.traits.iter().chain(&b.traits) {
        if inherited.iter().any(|known| known.id == candidate.id) {
            continue;
        }
        if random.chance(TRAIT_INHERIT_CHANCE) {
            inherited.push(candidate.clone());
        }
    }
    if random.chance(MUTATION_CHANCE) {
        let absent: Vec<&StrainTrait> = pool
            .iter()
            .filter(|candidate| !inherited.iter().any(|known| known.id == candidate.id))
            .collect();
        if !absent.is_empty() {
            inherited.push(absent[random.index(absent.len())].clone());
        }
    }
    inherited
}

/// First half of `a` joined with the last half of `b`, capitalized.
pub fn mash_name(a: &str, b: &str) -> String {
    let clean = |name: &str, fallback: &str| -> Vec<char> {
        let chars: Vec<char> = name.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            fallback.chars().collect()
        } else {
            chars
        }
    };
    let a = clean(a, "Alpha");
    let b = clean(b, "Beta");
    let head = (a.len() / 2).max(1);
    let tail = ((b.len() + 1) / 2).max(1);
    let mut name: String = a[..head].iter().chain(&b[b.len() - tail..]).collect();
    if let Some(first) = name.chars().next() {
        let upper: String = first.to_uppercase().collect();
        name.replace_range(..first.len_utf8(), &upper);
    }
    name
}

pub fn mash_tag(a: &str, b: &str) -> String {
    let a: Vec<char> = if a.is_empty() { "H1" } else { a }.chars().collect();
    let b: Vec<char> = if b.is_empty() { "H2" } else { b }.chars().collect();
    let head = a.len().min(2);
    let tail = b.len().min(2);
    a[..head]
        .iter()
        .chain(&b[b.len() - tail..])
        .collect::<String>()
        .to_uppercase()
}
