use log::info;

use crate::collections::Dictionary;
use crate::inventory::Consumable;
use crate::model::{
    AchievementCondition, AchievementKind, ConsumablePack, Difficulty, Effect, EmployeeKind,
    EmployeeRole, GrowRoom, ItemKind, Knowledge, PackContent, PestAffinity, PestEffect, PestKind,
    PharmacyContract, QuestKind, QuestReward, QuestTask, QuestTaskKind, Rarity, ResearchEffect,
    ResearchNode, StartingConditions, StrainKind, StrainTrait, Task, TraitKind, UpgradeKind,
};

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Empty { catalog: &'static str },
    Inconsistent { reason: String },
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl Knowledge {
    /// Loads a replacement catalog. Missing tables deserialize empty and then fail validation.
    pub fn from_json(data: &str) -> Result<Knowledge, DataError> {
        let known: Knowledge = serde_json::from_str(data)?;
        known.validate()?;
        info!(
            "Loaded knowledge: {} strains, {} items, {} research nodes",
            known.strains.len(),
            known.items.len(),
            known.research.len()
        );
        Ok(known)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.strains.is_empty() {
            return Err(DataError::Empty { catalog: "strains" });
        }
        if self.rooms.is_empty() {
            return Err(DataError::Empty { catalog: "rooms" });
        }
        if self.difficulties.is_empty() {
            return Err(DataError::Empty {
                catalog: "difficulties",
            });
        }
        if !self.difficulties.contains(&self.start.difficulty) {
            return Err(DataError::Inconsistent {
                reason: format!("unknown starting difficulty {}", self.start.difficulty),
            });
        }
        for node in self.research.iter() {
            for required in &node.requires {
                if !self.research.contains(required) {
                    return Err(DataError::Inconsistent {
                        reason: format!("research {} requires unknown {}", node.id, required),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn standard() -> Knowledge {
        let known = Knowledge {
            strains: standard_strains(),
            items: standard_items(),
            pests: standard_pests(),
            research: standard_research(),
            rooms: standard_rooms(),
            employees: standard_employees(),
            upgrades: standard_upgrades(),
            packs: standard_packs(),
            difficulties: standard_difficulties(),
            traits: standard_traits(),
            quests: standard_quests(),
            achievements: standard_achievements(),
            contracts: standard_contracts(),
            start: StartingConditions::default(),
        };
        info!(
            "Standard knowledge prepared: {} strains, {} items",
            known.strains.len(),
            known.items.len()
        );
        known
    }
}

fn strain(
    id: &str,
    name: &str,
    tag: &str,
    rarity: Rarity,
    cost: f64,
    base_yield: f64,
    grow: f64,
    quality: f64,
) -> StrainKind {
    StrainKind {
        id: id.to_string(),
        name: name.to_string(),
        tag: tag.to_string(),
        rarity,
        cost,
        base_yield,
        grow,
        quality,
        traits: vec![],
        stability: None,
        lineage: None,
        generation: 1,
    }
}

fn standard_strains() -> Dictionary<StrainKind> {
    use Rarity::*;
    Dictionary::from(vec![
        strain("gelato", "Green Gelato", "GG", Common, 60.0, 60.0, 120.0, 1.0),
        strain("honey", "Honey Cream", "HC", Common, 140.0, 100.0, 138.0, 1.03),
        strain("citrusBud", "Citrus Bud", "CB", Common, 220.0, 140.0, 156.0, 1.06),
        strain("mintCookie", "Mint Cookie", "MC", Common, 300.0, 180.0, 174.0, 1.09),
        strain("sunsetAuto", "Sunset Auto", "SA", Common, 380.0, 220.0, 192.0, 1.12),
        strain("berryBloom", "Berry Bloom", "BBM", Common, 460.0, 260.0, 210.0, 1.15),
        strain("herbalTonic", "Herbal Tonic", "HT", Common, 540.0, 300.0, 228.0, 1.18),
        strain("chocoChunk", "Choco Chunk", "CC", Common, 620.0, 340.0, 246.0, 1.21),
        strain("zushi", "Blue Zushi", "BZ", Uncommon, 700.0, 260.0, 140.0, 1.12),
        strain("amnesia", "Amnesia", "AM", Uncommon, 840.0, 320.0, 228.0, 1.16),
        strain("gorilla", "Gorilla Glue", "GL", Uncommon, 980.0, 380.0, 246.0, 1.19),
        strain("cheese", "Cheese", "CH", Uncommon, 1120.0, 440.0, 264.0, 1.23),
        strain("bubbleGum", "Bubble Gum", "BG", Uncommon, 1260.0, 500.0, 282.0, 1.26),
        strain("candyNova", "Candy Nova", "CN", Uncommon, 1400.0, 560.0, 300.0, 1.3),
        strain("arcticBerry", "Arctic Berry", "AB", Uncommon, 1540.0, 620.0, 318.0, 1.33),
        strain("emeraldWave", "Emerald Wave", "EW", Uncommon, 1680.0, 680.0, 336.0, 1.37),
        strain("jungleJuice", "Jungle Juice", "JJ", Uncommon, 1820.0, 740.0, 354.0, 1.4),
        strain("cocoaNebula", "Cocoa Nebula", "CNB", Uncommon, 1960.0, 800.0, 372.0, 1.44),
        strain("zkittlez", "Zkittlez", "ZK", Rare, 2100.0, 520.0, 260.0, 1.3),
        strain("purpleHaze", "Purple Haze", "PH", Rare, 2280.0, 600.0, 280.0, 1.34),
        strain("whiteWidow", "White Widow", "WW", Rare, 2460.0, 680.0, 300.0, 1.38),
        strain("northernLights", "Northern Lights", "NL", Rare, 2640.0, 760.0, 320.0, 1.42),
        strain("sourDiesel", "Sour Diesel", "SD", Rare, 2820.0, 840.0, 340.0, 1.46),
        strain("blueDream", "Blue Dream", "BD", Rare, 3000.0, 920.0, 360.0, 1.5),
        strain("amnesiaLemon", "Amnesia Lemon", "AL", Rare, 3180.0, 1000.0, 380.0, 1.54),
        strain("jackHerer", "Jack Herer", "JH", Rare, 3360.0, 1080.0, 400.0, 1.58),
        strain("royalCitrus", "Royal Citrus", "RC", Rare, 3540.0, 1160.0, 420.0, 1.62),
        strain("cobaltRush", "Cobalt Rush", "CR", Rare, 3720.0, 1240.0, 440.0, 1.66),
        strain("scarletNova", "Scarlet Nova", "SN", Rare, 3900.0, 1320.0, 460.0, 1.7),
        strain("girlScoutCookies", "Girl Scout Cookies", "GSC", Epic, 3600.0, 780.0, 320.0, 1.45),
        strain("superSilverHaze", "Super Silver Haze", "SSH", Epic, 3820.0, 875.0, 342.0, 1.49),
        strain("ogKush", "OG Kush", "OG", Epic, 4040.0, 970.0, 364.0, 1.54),
        strain("trainwreck", "Trainwreck", "TW", Epic, 4260.0, 1065.0, 386.0, 1.58),
        strain("criticalMass", "Critical Mass", "CM", Epic, 4480.0, 1160.0, 408.0, 1.63),
        strain("bigBud", "Big Bud", "BGB", Epic, 4700.0, 1255.0, 430.0, 1.67),
        strain("masterKush", "Master Kush", "MK", Epic, 4920.0, 1350.0, 452.0, 1.72),
        strain("lemonHaze", "Lemon Haze", "LH", Epic, 5140.0, 1445.0, 474.0, 1.76),
        strain("afghanKush", "Afghan Kush", "AK", Epic, 5360.0, 1540.0, 496.0, 1.81),
        strain("emberQueen", "Ember Queen", "EQ", Epic, 5580.0, 1635.0, 518.0, 1.85),
        strain("frostedFuel", "Frosted Fuel", "FF", Epic, 5800.0, 1730.0, 540.0, 1.9),
        strain("templeLotus", "Temple Lotus", "TL", Epic, 6020.0, 1825.0, 562.0, 1.94),
        strain("gorillaGlue", "Gorilla Glue #4", "GG4", Legendary, 6200.0, 1100.0, 360.0, 1.6),
        strain("amnesiaHaze", "Amnesia Haze", "AHZ", Legendary, 6680.0, 1220.0, 385.0, 1.65),
        strain("blueZushi", "Blue Zushi", "BZ2", Legendary, 7160.0, 1340.0, 410.0, 1.7),
        strain("honeyCream", "Honey Cream Reserve", "HCR", Legendary, 7640.0, 1460.0, 435.0, 1.75),
        strain("durbanPoison", "Durban Poison", "DP", Legendary, 8120.0, 1580.0, 460.0, 1.8),
        strain("hinduKush", "Hindu Kush", "HK", Legendary, 8600.0, 1700.0, 485.0, 1.85),
        strain("nepaleseJam", "Nepalese Jam", "NJ", Legendary, 9080.0, 1820.0, 510.0, 1.9),
        strain("pakistaniChitral", "Pakistani Chitral", "PC", Legendary, 9560.0, 1940.0, 535.0, 1.95),
        strain("thaiStick", "Thai Stick", "TS", Legendary, 10040.0, 2060.0, 560.0, 2.0),
        strain("malawiGold", "Malawi Gold", "MG", Legendary, 10520.0, 2180.0, 585.0, 2.0),
        strain("dragonBreath", "Dragon Breath", "DB", Legendary, 11000.0, 2300.0, 610.0, 2.0),
        strain("zenithStar", "Zenith Star", "ZS", Legendary, 11480.0, 2420.0, 635.0, 2.0),
        strain("mythicMuse", "Mythic Muse", "MM", Legendary, 11960.0, 2540.0, 660.0, 2.0),
    ])
}

fn item(id: &str, name: &str, cost: f64, effects: Vec<Effect>) -> ItemKind {
    ItemKind {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        effects,
    }
}

fn pest_reduction(pest: &str, factor: f64) -> Effect {
    Effect::PestReduction {
        pest: pest.to_string(),
        factor,
    }
}

fn standard_items() -> Dictionary<ItemKind> {
    use Effect::*;
    Dictionary::from(vec![
        item("shears", "Shears", 80.0, vec![]),
        item("nutrients", "Nutrient Kit", 110.0, vec![]),
        item("scale", "Precision Scale", 150.0, vec![PriceMultiplier(1.05)]),
        item("jars", "Curing Jars", 300.0, vec![PriceMultiplier(1.1)]),
        item("van", "Delivery Van", 600.0, vec![OfferSlots(1), SpawnDelta(10.0)]),
        item("trimmer", "Trimmer", 500.0, vec![YieldMultiplier(1.05)]),
        item("filter", "Carbon Filter", 350.0, vec![YieldMultiplier(1.05)]),
        item("fan", "Fan", 220.0, vec![pest_reduction("mold", 0.6)]),
        item("dehumidifier", "Dehumidifier", 280.0, vec![pest_reduction("mold", 0.5)]),
        item("sticky_traps", "Sticky Traps", 120.0, vec![pest_reduction("thrips", 0.5)]),
        item("humidifier", "Humidifier", 260.0, vec![pest_reduction("mold", 0.8)]),
        item("irrigation", "Irrigation System", 700.0, vec![YieldMultiplier(1.05)]),
        item("ph_meter", "pH Meter", 180.0, vec![YieldMultiplier(1.05)]),
        item(
            "thermometer",
            "Thermometer",
            90.0,
            vec![pest_reduction("mold", 0.95), pest_reduction("thrips", 0.95)],
        ),
        item("soundscape", "Soundscape System", 620.0, vec![YieldMultiplier(1.04)]),
        item("aero_drone", "Aero Drone", 820.0, vec![YieldMultiplier(1.05)]),
        item("brand_wall", "Brand Wall", 1100.0, vec![PriceMultiplier(1.12)]),
        item("genetic_analyzer", "Genetic Analyzer", 1500.0, vec![]),
        item("hydro_system", "Hydroponic System", 2000.0, vec![YieldMultiplier(1.1)]),
        item("led_panel", "LED Panel", 1800.0, vec![GrowthMultiplier(1.15)]),
        item("co2_generator", "CO2 Generator", 2500.0, vec![YieldMultiplier(1.15)]),
        item(
            "pest_trap",
            "Pest Trap",
            1600.0,
            vec![pest_reduction("mites", 0.3), pest_reduction("thrips", 0.3)],
        ),
        item("soil_tester", "Soil Tester", 1300.0, vec![NutrientBoost(0.1)]),
        item("grow_tent", "Grow Tent", 3000.0, vec![YieldMultiplier(1.2)]),
        item("extraction_machine", "Extraction Machine", 4000.0, vec![PriceMultiplier(1.25)]),
        item("plasma_lantern", "Plasma Lantern", 5200.0, vec![GrowthMultiplier(1.12)]),
        item(
            "quantum_rootnet",
            "Quantum Rootnet",
            4400.0,
            vec![YieldMultiplier(1.12), QualityMultiplier(1.05)],
        ),
        item("ion_shower", "Ion Shower", 4800.0, vec![PriceMultiplier(1.18)]),
        item("lunar_timer", "Lunar Timer", 950.0, vec![GrowthMultiplier(1.08)]),
        item(
            "bio_sentry",
            "Bio Sentry",
            2900.0,
            vec![
                pest_reduction("mites", 0.4),
                pest_reduction("thrips", 0.4),
                pest_reduction("mold", 0.35),
            ],
        ),
    ])
}

fn pest(
    id: &str,
    name: &str,
    base: f64,
    effect: [f64; 3],
    affinity: PestAffinity,
    flowering_only: bool,
    secondary: bool,
) -> PestKind {
    PestKind {
        id: id.to_string(),
        name: name.to_string(),
        base,
        effect: PestEffect {
            growth: effect[0],
            health: effect[1],
            quality: effect[2],
        },
        affinity,
        flowering_only,
        secondary,
    }
}

fn standard_pests() -> Dictionary<PestKind> {
    use PestAffinity::*;
    Dictionary::from(vec![
        pest("mites", "Spider Mites", 0.02, [0.6, -2.0, -0.01], Dry, true, false),
        pest("mold", "Mold", 0.015, [0.3, -3.0, -0.03], Wet, true, false),
        pest("thrips", "Thrips", 0.018, [0.8, -1.0, -0.008], Any, false, false),
        pest("root_rot", "Root Rot", 0.006, [0.4, -2.5, -0.02], WetRoot, false, true),
        pest("leaf_rot", "Leaf Rot", 0.008, [0.7, -1.8, -0.015], Overfeed, false, true),
    ])
}

fn node(
    id: &str,
    branch: &str,
    name: &str,
    cost: u32,
    effects: Vec<ResearchEffect>,
    requires: &[&str],
) -> ResearchNode {
    ResearchNode {
        id: id.to_string(),
        branch: branch.to_string(),
        name: name.to_string(),
        cost,
        effects,
        requires: requires.iter().map(|id| id.to_string()).collect(),
    }
}

fn standard_research() -> Dictionary<ResearchNode> {
    use ResearchEffect::*;
    Dictionary::from(vec![
        node("start_botany", "botany", "Botany Basics", 0, vec![], &[]),
        node("yield_1", "botany", "Yield I", 1, vec![Yield(0.1)], &["start_botany"]),
        node("quality_1", "botany", "Quality I", 1, vec![Quality(0.05)], &["start_botany"]),
        node("yield_2", "botany", "Yield II", 3, vec![Yield(0.15)], &["yield_1"]),
        node("quality_2", "botany", "Quality II", 3, vec![Quality(0.1)], &["quality_1"]),
        node(
            "genetics",
            "botany",
            "Genetic Optimization",
            5,
            vec![Unlock("genetics".to_string())],
            &["yield_2", "quality_2"],
        ),
        node("start_training", "training", "Plant Training", 1, vec![], &[]),
        node(
            "lst",
            "training",
            "Low Stress Training",
            2,
            vec![Yield(0.15), GrowthTime(0.05)],
            &["start_training"],
        ),
        node(
            "hst",
            "training",
            "High Stress Training",
            2,
            vec![Quality(0.15), GrowthTime(0.1)],
            &["start_training"],
        ),
        node("scrog", "training", "Screen of Green", 4, vec![Yield(0.2)], &["lst"]),
        node("supercropping", "training", "Supercropping", 4, vec![Quality(0.2)], &["hst"]),
        node(
            "mainlining",
            "training",
            "Main-Lining",
            6,
            vec![Yield(0.25), Quality(0.15), GrowthTime(0.2)],
            &["scrog", "supercropping"],
        ),
        node("start_equipment", "equipment", "Equipment Upgrades", 1, vec![], &[]),
        node("lights_1", "equipment", "Better Lamps", 2, vec![Growth(0.1)], &["start_equipment"]),
        node(
            "ventilation_1",
            "equipment",
            "Better Ventilation",
            2,
            vec![Pest(0.15)],
            &["start_equipment"],
        ),
        node(
            "hydroponics",
            "equipment",
            "Hydroponics",
            5,
            vec![Growth(0.3), Water(1.0), NutrientCost(0.5)],
            &["lights_1", "ventilation_1"],
        ),
        node("start_economy", "economy", "Economy Knowledge", 1, vec![], &[]),
        node("prices_1", "economy", "Better Prices I", 2, vec![PriceMultiplier(0.1)], &["start_economy"]),
        node("costs_1", "economy", "Lower Costs I", 2, vec![Cost(0.15)], &["start_economy"]),
        node(
            "dealer",
            "economy",
            "Dealer Network",
            5,
            vec![Unlock("dealer".to_string())],
            &["prices_1", "costs_1"],
        ),
    ])
}

fn room(id: &str, name: &str, slots: usize, cost: f64, mold_risk: f64) -> GrowRoom {
    GrowRoom {
        id: id.to_string(),
        name: name.to_string(),
        slots,
        cost,
        mold_risk,
    }
}

fn standard_rooms() -> Dictionary<GrowRoom> {
    Dictionary::from(vec![
        room("closet", "Closet", 2, 0.0, 1.6),
        room("room", "Spare Room", 4, 1200.0, 1.2),
        room("basement", "Basement", 6, 3500.0, 1.0),
        room("garage", "Garage", 8, 8000.0, 0.95),
        room("warehouse", "Warehouse", 12, 20000.0, 0.9),
        room("bigwarehouse", "Big Warehouse", 16, 45000.0, 0.85),
        room("factory", "Factory", 20, 80000.0, 0.8),
        room("megafarm", "Mega Farm", 30, 150000.0, 0.75),
        room("hyperfarm", "Hyper Farm", 50, 300000.0, 0.7),
        room("ultrafarm", "Ultra Farm", 75, 600000.0, 0.65),
        room("supremefarm", "Supreme Farm", 100, 1000000.0, 0.6),
    ])
}

fn standard_employees() -> Dictionary<EmployeeKind> {
    let employee = |id: &str, name: &str, salary: f64, required_level: u32, role| EmployeeKind {
        id: id.to_string(),
        name: name.to_string(),
        salary,
        required_level,
        role,
    };
    Dictionary::from(vec![
        employee("grower", "Grower", 200.0, 2, EmployeeRole::Tasks(vec![Task::Water, Task::Feed])),
        employee("caretaker", "Caretaker", 250.0, 5, EmployeeRole::Tasks(vec![Task::Treat])),
        employee("harvester", "Harvester", 300.0, 8, EmployeeRole::Tasks(vec![Task::Harvest])),
        employee(
            "growhelper",
            "Grow Helper",
            220.0,
            3,
            EmployeeRole::GrowHelper { capacity: 4 },
        ),
    ])
}

fn standard_upgrades() -> Dictionary<UpgradeKind> {
    let upgrade = |id: &str, name: &str, base_cost: f64, increment: f64| UpgradeKind {
        id: id.to_string(),
        name: name.to_string(),
        base_cost,
        increment,
    };
    Dictionary::from(vec![
        upgrade("lights", "LED Growlights", 75.0, 0.02),
        upgrade("nutrients", "Nutrient Booster", 180.0, 0.025),
        upgrade("climate", "Climate Control", 420.0, 0.03),
        upgrade("automation", "Automation", 950.0, 0.035),
        upgrade("resonance", "Resonance Soundscapes", 1600.0, 0.03),
        upgrade("biophotonics", "Biophotonic Domes", 2600.0, 0.035),
        upgrade("hydroponics", "Hydroponic System", 3800.0, 0.04),
        upgrade("genetics", "Genetic Optimization", 5200.0, 0.04),
        upgrade("pest_control", "Pest Control", 7200.0, 0.025),
        upgrade("yield_enhancer", "Yield Enhancer", 9500.0, 0.045),
        upgrade("growth_accelerator", "Growth Accelerator", 12000.0, 0.035),
        upgrade("premium_lights", "Premium Lighting", 15500.0, 0.04),
        upgrade("ai_optimization", "AI Optimization", 19000.0, 0.045),
        upgrade("quantum_tech", "Quantum Technology", 23000.0, 0.05),
        upgrade("ultimate_boost", "Ultimate Boost", 28000.0, 0.055),
        upgrade("breakroom", "Break Room", 1500.0, 0.0),
    ])
}

fn pack(id: &str, name: &str, price: f64, contents: &[(Consumable, u32)]) -> ConsumablePack {
    ConsumablePack {
        id: id.to_string(),
        name: name.to_string(),
        price,
        contents: contents
            .iter()
            .map(|(consumable, amount)| PackContent {
                consumable: *consumable,
                amount: *amount,
            })
            .collect(),
    }
}

fn standard_packs() -> Dictionary<ConsumablePack> {
    use Consumable::*;
    Dictionary::from(vec![
        pack("nutrient_s", "Nutrient S", 5.0, &[(Nutrient, 1)]),
        pack("nutrient_m", "Nutrient M", 12.0, &[(Nutrient, 3)]),
        pack("nutrient_l", "Nutrient L", 22.0, &[(Nutrient, 6)]),
        pack("pgr_boost", "PGR Booster", 18.0, &[(Booster, 1)]),
        pack("pk_boost", "PK Boost", 14.0, &[(Nutrient, 2)]),
        pack("micro_tea", "Microbe Tea", 10.0, &[(Nutrient, 1)]),
        pack("micro_bio", "Bio Elixir", 26.0, &[(Nutrient, 2), (Booster, 1)]),
        pack("spray_s", "Plant Spray S", 9.0, &[(Spray, 1)]),
        pack("spray_m", "Plant Spray M", 24.0, &[(Spray, 3)]),
        pack("fungi_s", "Fungicide S", 11.0, &[(Fungicide, 1)]),
        pack("fungi_m", "Fungicide M", 30.0, &[(Fungicide, 3)]),
        pack("beneficial_s", "Beneficials S", 14.0, &[(Beneficials, 1)]),
        pack("beneficial_m", "Beneficials M", 36.0, &[(Beneficials, 3)]),
        pack("coffee", "Premium Coffee", 15.0, &[(Coffee, 1)]),
    ])
}

fn standard_difficulties() -> Dictionary<Difficulty> {
    let difficulty = |id: &str, name: &str, growth: f64, pest: f64| Difficulty {
        id: id.to_string(),
        name: name.to_string(),
        growth,
        pest,
    };
    Dictionary::from(vec![
        difficulty("easy", "Easy", 1.35, 0.7),
        difficulty("normal", "Normal", 1.15, 1.0),
        difficulty("hard", "Hard", 0.95, 9.0),
    ])
}

fn standard_traits() -> Dictionary<StrainTrait> {
    let strain_trait = |id: &str, kind: TraitKind, value: f64| StrainTrait {
        id: id.to_string(),
        kind,
        value,
    };
    Dictionary::from(vec![
        strain_trait("high_yield", TraitKind::Yield, 0.1),
        strain_trait("fast_flower", TraitKind::Growth, -0.1),
        strain_trait("drought_tolerant", TraitKind::Water, -0.2),
        strain_trait("pest_resistant", TraitKind::Pest, -0.3),
        strain_trait("terpene_rich", TraitKind::Quality, 0.08),
        strain_trait("connoisseur", TraitKind::Price, 0.1),
        strain_trait("light_feeder", TraitKind::Nutrient, -0.2),
    ])
}

fn standard_quests() -> Dictionary<QuestKind> {
    let task = |kind: QuestTaskKind, target: Option<&str>, required: f64| QuestTask {
        kind,
        target: target.map(|target| target.to_string()),
        required,
    };
    Dictionary::from(vec![
        QuestKind {
            id: "starter_harvest".to_string(),
            title: "First Harvest".to_string(),
            min_level: 0,
            previous: None,
            tasks: vec![task(QuestTaskKind::Harvest, None, 1.0)],
            rewards: vec![QuestReward::Cash(120.0), QuestReward::Xp(25)],
        },
        QuestKind {
            id: "market_rookie".to_string(),
            title: "Market Rookie".to_string(),
            min_level: 0,
            previous: None,
            tasks: vec![task(QuestTaskKind::Sell, None, 50.0)],
            rewards: vec![QuestReward::Cash(200.0), QuestReward::Xp(30)],
        },
        QuestKind {
            id: "gelato_run".to_string(),
            title: "Gelato Run".to_string(),
            min_level: 2,
            previous: None,
            tasks: vec![task(QuestTaskKind::Harvest, Some("gelato"), 3.0)],
            rewards: vec![
                QuestReward::Seed {
                    strain: "gelato".to_string(),
                    count: 2,
                },
                QuestReward::Cash(250.0),
            ],
        },
        QuestKind {
            id: "cash_stack".to_string(),
            title: "Cash Stack".to_string(),
            min_level: 3,
            previous: None,
            tasks: vec![task(QuestTaskKind::Cash, None, 1000.0)],
            rewards: vec![
                QuestReward::Cash(400.0),
                QuestReward::Item {
                    item: "scale".to_string(),
                    count: 1,
                },
            ],
        },
        QuestKind {
            id: "pro_grower".to_string(),
            title: "Pro Grower".to_string(),
            min_level: 1,
            previous: None,
            tasks: vec![task(QuestTaskKind::Level, None, 5.0)],
            rewards: vec![
                QuestReward::Consumable {
                    consumable: Consumable::Coffee,
                    count: 2,
                },
                QuestReward::Xp(50),
            ],
        },
    ])
}

fn standard_achievements() -> Dictionary<AchievementKind> {
    let achievement = |id: &str, title: &str, condition, haze| AchievementKind {
        id: id.to_string(),
        title: title.to_string(),
        condition,
        haze,
    };
    Dictionary::from(vec![
        achievement(
            "harvest_10k",
            "Harvest 10kg",
            AchievementCondition::TotalEarned(10_000.0),
            1,
        ),
        achievement(
            "cash_million",
            "Millionaire",
            AchievementCondition::Cash(1_000_000.0),
            2,
        ),
        achievement(
            "slots_max",
            "Fully Built",
            AchievementCondition::SlotsUnlocked(100),
            1,
        ),
    ])
}

fn standard_contracts() -> Dictionary<PharmacyContract> {
    let contract = |id: &str, name: &str, grams, cash, hire_cost, level| PharmacyContract {
        id: id.to_string(),
        name: name.to_string(),
        monthly_grams: grams,
        monthly_cash: cash,
        hire_cost,
        required_level: level,
    };
    Dictionary::from(vec![
        contract("small_pharmacy", "Small Pharmacy", 50.0, 500.0, 2000.0, 6),
        contract("medium_pharmacy", "Medium Pharmacy", 100.0, 1000.0, 4000.0, 8),
        contract("large_pharmacy", "Large Pharmacy", 200.0, 2000.0, 8000.0, 10),
        contract("chain_pharmacy", "Pharmacy Chain", 500.0, 5000.0, 20000.0, 12),
    ])
}
