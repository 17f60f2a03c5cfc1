//! Shared fixtures for building knowledge bases, rules and catalogs in tests.
use gizi::prelude::*;

/// Builds a BMI bracket rule with neutral macro targets.
#[allow(dead_code)]
pub fn bracket(id: &str, bmi_min: Option<f64>, bmi_max: Option<f64>) -> BmiRule {
    BmiRule {
        id: id.to_string(),
        bmi_min,
        bmi_max,
        protein_g_per_kg_ibw: 1.0,
        calories_kcal_per_kg_ibw_min: 25.0,
        calories_kcal_per_kg_ibw_max: 30.0,
    }
}

#[allow(dead_code)]
pub fn fact_rule(fact: &str, expected: bool, tags: &[&str], tips: &[&str]) -> FactRule {
    FactRule {
        fact: fact.to_string(),
        expected,
        diet_tags_add: tags.iter().map(|t| t.to_string()).collect(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
    }
}

/// Builds a catalog entry with zeroed nutrients; tests only care about tags.
#[allow(dead_code)]
pub fn food(id: &str, name: &str, tags: &[&str]) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        per_100g: Nutrients::default(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[allow(dead_code)]
pub fn facts(pairs: &[(&str, bool)]) -> AHashMap<String, bool> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// A knowledge base mirroring the shipped sample: one obese bracket rule,
/// condition rules for common diagnoses, preference rules, and a
/// twelve-entry food catalog.
#[allow(dead_code)]
pub fn sample_kb() -> KnowledgeBase {
    KnowledgeBase {
        bmi_rules: vec![BmiRule {
            id: "obese".to_string(),
            bmi_min: Some(30.0),
            bmi_max: None,
            protein_g_per_kg_ibw: 1.5,
            calories_kcal_per_kg_ibw_min: 20.0,
            calories_kcal_per_kg_ibw_max: 25.0,
        }],
        condition_rules: vec![
            fact_rule(
                "diabetes",
                true,
                &["low_sugar", "low_glycemic"],
                &[
                    "Limit added sugar and refined carbohydrates",
                    "Spread carbohydrate intake evenly across the day",
                ],
            ),
            fact_rule(
                "hypertension",
                true,
                &["low_sodium"],
                &["Keep sodium intake under 1500 mg per day"],
            ),
            fact_rule(
                "allergy_susu",
                true,
                &["avoid_dairy"],
                &["Replace dairy with calcium-fortified soy products"],
            ),
            fact_rule("allergy_seafood", true, &["avoid_seafood"], &[]),
            fact_rule(
                "gout",
                true,
                &["low_purine", "avoid_organ_meats"],
                &["Drink plenty of water to help clear uric acid"],
            ),
        ],
        preference_rules: vec![
            fact_rule(
                "vegetarian",
                true,
                &[],
                &["Combine legumes and grains for complete protein"],
            ),
            fact_rule("caffeine_free", true, &["avoid_caffeine"], &[]),
        ],
        foods: vec![
            food("nasi-merah", "Red rice", &["vegetarian"]),
            food("bubur-manis", "Sweet porridge", &["vegetarian", "high_sugar"]),
            food("ikan-bakar", "Grilled fish", &["seafood"]),
            food("ayam-panggang", "Roast chicken breast", &["halal"]),
            food("tahu-kukus", "Steamed tofu", &["vegetarian"]),
            food(
                "susu-full-cream",
                "Full cream milk",
                &["dairy", "vegetarian", "halal"],
            ),
            food(
                "keripik-asin",
                "Salted crackers",
                &["vegetarian", "high_sodium", "contains_gluten"],
            ),
            food("tempe-goreng", "Fried tempeh", &["vegetarian", "high_fat"]),
            food("udang-goreng", "Fried shrimp", &["seafood", "high_cholesterol"]),
            food("kopi-susu", "Milk coffee", &["dairy", "caffeinated", "high_sugar"]),
            food("sate-babi", "Pork satay", &["contains_pork", "non_halal"]),
            food("sayur-bening", "Clear vegetable soup", &["vegetarian"]),
        ],
    }
}
