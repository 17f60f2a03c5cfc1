//! Food catalog filtering against preference facts and accumulated diet tags.

use super::rules::TagSet;
use crate::kb::Food;
use ahash::AHashMap;

/// Maximum number of foods returned by the filter.
///
/// Truncation preserves catalog order; foods are never ranked by a scoring
/// function.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Each accumulated diet tag forbids exactly one catalog tag.
const TAG_EXCLUSIONS: &[(&str, &str)] = &[
    ("low_sugar", "high_sugar"),
    ("low_glycemic", "not_low_glycemic"),
    ("low_sodium", "high_sodium"),
    ("low_fat", "high_fat"),
    ("low_cholesterol", "high_cholesterol"),
    ("limit_potassium", "high_potassium"),
    ("low_purine", "high_purine"),
    ("avoid_organ_meats", "organ_meat"),
    ("avoid_acidic", "acidic"),
    ("avoid_caffeine", "caffeinated"),
    ("avoid_high_fat", "high_fat"),
];

/// Catalog tags the `halal` preference forbids.
const NON_HALAL_TAGS: &[&str] = &["contains_pork", "contains_alcohol", "non_halal"];

/// Diet tags interpreted by predicates outside the exclusion table.
const AVOIDANCE_TAGS: &[&str] = &["avoid_dairy", "avoid_seafood", "avoid_certain_seafood"];

/// Whether the filter interprets `tag` at all. Used by knowledge-base
/// validation to flag tags that can never exclude a food.
pub fn is_known_diet_tag(tag: &str) -> bool {
    AVOIDANCE_TAGS.contains(&tag) || TAG_EXCLUSIONS.iter().any(|(diet, _)| *diet == tag)
}

/// Returns up to [`MAX_RECOMMENDATIONS`] foods passing every exclusion
/// predicate, in catalog order.
pub fn recommend<'a>(
    diet_tags: &TagSet,
    preference_facts: &AHashMap<String, bool>,
    catalog: &'a [Food],
) -> Vec<&'a Food> {
    catalog
        .iter()
        .filter(|food| !is_excluded(food, diet_tags, preference_facts))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

fn pref(facts: &AHashMap<String, bool>, name: &str) -> bool {
    facts.get(name).copied().unwrap_or(false)
}

/// A food is excluded when any single predicate holds.
///
/// The predicates are independent conjunctive filters, never alternatives: a
/// `{dairy, halal}` food is still excluded for a lactose-free user. Order of
/// checks is irrelevant to the outcome, so bailing on the first violation is
/// just an early exit.
fn is_excluded(food: &Food, diet_tags: &TagSet, prefs: &AHashMap<String, bool>) -> bool {
    if pref(prefs, "vegetarian") && !food.has_tag("vegetarian") {
        return true;
    }
    if pref(prefs, "halal") && NON_HALAL_TAGS.iter().any(|&tag| food.has_tag(tag)) {
        return true;
    }
    if (pref(prefs, "lactose_free") || diet_tags.contains("avoid_dairy")) && food.has_tag("dairy") {
        return true;
    }
    if (pref(prefs, "no_seafood")
        || diet_tags.contains("avoid_seafood")
        || diet_tags.contains("avoid_certain_seafood"))
        && food.has_tag("seafood")
    {
        return true;
    }
    if pref(prefs, "gluten_free") && food.has_tag("contains_gluten") {
        return true;
    }
    TAG_EXCLUSIONS
        .iter()
        .any(|&(diet, forbidden)| diet_tags.contains(diet) && food.has_tag(forbidden))
}
