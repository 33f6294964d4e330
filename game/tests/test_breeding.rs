use growbox::api::Action::{Breed, PlantSeed, SetParent};
use growbox::api::ActionError;
use growbox::breeding::BreedingError::{InvalidParentIndex, ParentMissing};
use growbox::breeding::{cross_strains, mash_name, mash_tag};
use growbox::math::{FixedRandom, ScriptedRandom};
use growbox::model::{Knowledge, Rarity, StrainKind, StrainTrait};

use crate::testing::{approx, GameTestScenario};

mod testing;

fn catalog_strain(id: &str) -> StrainKind {
    Knowledge::standard()
        .strains
        .get(id)
        .cloned()
        .unwrap_or_else(|error| panic!("{:?}", error))
}

fn catalog_trait(id: &str) -> StrainTrait {
    Knowledge::standard()
        .traits
        .get(id)
        .cloned()
        .unwrap_or_else(|error| panic!("{:?}", error))
}

fn trait_pool() -> Vec<StrainTrait> {
    Knowledge::standard().traits.iter().cloned().collect()
}

#[test]
fn test_hybrid_of_mean_parents_when_random_is_centered() {
    let gelato = catalog_strain("gelato");
    let honey = catalog_strain("honey");
    let hybrid = cross_strains(
        &gelato,
        &honey,
        &trait_pool(),
        "hybrid_1".to_string(),
        &mut FixedRandom(0.5),
    );
    assert_eq!(hybrid.id, "hybrid_1");
    assert_eq!(hybrid.name, "GreenCream");
    assert_eq!(hybrid.tag, "GGHC");
    assert_eq!(hybrid.rarity, Rarity::Common);
    assert_eq!(hybrid.cost, 100.0);
    assert_eq!(hybrid.base_yield, 80.0);
    assert_eq!(hybrid.grow, 129.0);
    assert_eq!(hybrid.generation, 2);
    assert!(approx(hybrid.stability.unwrap_or_default(), 0.72));
    assert!(hybrid.traits.is_empty());
    let lineage = hybrid.lineage.unwrap_or_else(|| panic!("lineage expected"));
    assert_eq!(lineage.first, "Green Gelato");
    assert_eq!(lineage.second, "Honey Cream");
}

#[test]
fn test_hybrid_is_at_least_as_rare_as_the_rarer_parent() {
    let gelato = catalog_strain("gelato");
    let zkittlez = catalog_strain("zkittlez");
    for value in [0.0, 0.3, 0.99] {
        let hybrid = cross_strains(
            &gelato,
            &zkittlez,
            &trait_pool(),
            "hybrid_1".to_string(),
            &mut FixedRandom(value),
        );
        assert!(hybrid.rarity >= Rarity::Rare);
        assert!(hybrid.base_yield >= 10.0);
        assert!(hybrid.grow >= 30.0);
        assert!(hybrid.quality >= 0.5);
    }
}

#[test]
fn test_same_random_source_reproduces_the_hybrid() {
    let gelato = catalog_strain("gelato");
    let honey = catalog_strain("honey");
    let cross = |seed: u64| {
        cross_strains(
            &gelato,
            &honey,
            &trait_pool(),
            "hybrid_1".to_string(),
            &mut growbox::math::SeededRandom::new(seed),
        )
    };
    assert_eq!(cross(7), cross(7));
}

#[test]
fn test_traits_are_inherited_once_and_may_mutate() {
    let mut first = catalog_strain("gelato");
    first.traits = vec![catalog_trait("high_yield")];
    let mut second = catalog_strain("honey");
    second.traits = vec![catalog_trait("high_yield"), catalog_trait("fast_flower")];
    let mut random = ScriptedRandom::new(vec![0.5, 0.5, 0.5, 0.1, 0.9, 0.05, 0.0]);
    let hybrid = cross_strains(
        &first,
        &second,
        &trait_pool(),
        "hybrid_1".to_string(),
        &mut random,
    );
    let traits: Vec<&str> = hybrid.traits.iter().map(|known| known.id.as_str()).collect();
    assert_eq!(traits, vec!["high_yield", "fast_flower"]);
}

#[test]
fn test_name_and_tag_mashing() {
    assert_eq!(mash_name("Green Gelato", "Honey Cream"), "GreenCream");
    assert_eq!(mash_name("", "ab"), "Alb");
    assert_eq!(mash_name("x", "y"), "Xy");
    assert_eq!(mash_tag("GG", "HC"), "GGHC");
    assert_eq!(mash_tag("", "z"), "H1Z");
}

#[test]
fn test_breed_gives_one_seed_of_the_hybrid() {
    GameTestScenario::new()
        .given_random(FixedRandom(0.5))
        .when_player_perform(SetParent {
            index: 0,
            strain: Some("gelato".to_string()),
        })
        .then_action_should_succeed()
        .when_player_perform(SetParent {
            index: 1,
            strain: Some("honey".to_string()),
        })
        .then_action_should_succeed()
        .when_player_perform(Breed)
        .then_action_should_succeed()
        .then_seeds_should_be("hybrid_1", 1)
        .then(|game| {
            assert_eq!(game.breeding.strains.len(), 1);
            assert_eq!(game.breeding.parents, [None, None]);
            assert_eq!(game.breeding.last_result.as_deref(), Some("hybrid_1"));
        })
        .when_player_perform(PlantSeed {
            slot: 0,
            strain: "hybrid_1".to_string(),
        })
        .then_action_should_succeed()
        .then_seeds_should_be("hybrid_1", 0)
        .then_plant(0, |plant| assert_eq!(plant.strain, "hybrid_1"));
}

#[test]
fn test_hybrids_can_be_parents() {
    GameTestScenario::new()
        .given_random(FixedRandom(0.5))
        .given(|game| {
            game.breeding.parents = [Some("gelato".to_string()), Some("honey".to_string())];
        })
        .when_player_perform(Breed)
        .then_action_should_succeed()
        .given(|game| {
            game.breeding.parents = [Some("hybrid_1".to_string()), Some("gelato".to_string())];
        })
        .when_player_perform(Breed)
        .then_action_should_succeed()
        .then_seeds_should_be("hybrid_2", 1)
        .then(|game| assert_eq!(game.breeding.strains[1].generation, 3));
}

#[test]
fn test_breed_without_both_parents() {
    GameTestScenario::new()
        .given(|game| game.breeding.parents = [Some("gelato".to_string()), None])
        .when_player_perform(Breed)
        .then_action_should_fail(|_| ActionError::Breeding(ParentMissing { index: 1 }));
}

#[test]
fn test_set_parent_with_unknown_strain() {
    GameTestScenario::new()
        .when_player_perform(SetParent {
            index: 0,
            strain: Some("moonrock".to_string()),
        })
        .then_action_should_fail(|_| ActionError::StrainNotFound {
            strain: "moonrock".to_string(),
        });
}

#[test]
fn test_set_parent_out_of_range() {
    GameTestScenario::new()
        .when_player_perform(SetParent {
            index: 2,
            strain: None,
        })
        .then_action_should_fail(|_| ActionError::Breeding(InvalidParentIndex { index: 2 }));
}
