use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// A BMI bracket rule mapping an inclusive BMI interval to per-kg-IBW
/// macro-nutrient targets.
///
/// Rules form an ordered sequence; the first rule whose interval contains the
/// input BMI wins. An absent bound means unbounded on that side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRule {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi_max: Option<f64>,
    pub protein_g_per_kg_ibw: f64,
    pub calories_kcal_per_kg_ibw_min: f64,
    pub calories_kcal_per_kg_ibw_max: f64,
}

impl BmiRule {
    /// Whether `bmi` falls inside this rule's inclusive interval.
    pub fn contains(&self, bmi: f64) -> bool {
        if let Some(min) = self.bmi_min {
            if bmi < min {
                return false;
            }
        }
        if let Some(max) = self.bmi_max {
            if bmi > max {
                return false;
            }
        }
        true
    }
}

/// A flat condition/preference rule.
///
/// Fires when the named fact is present in the input and equals `expected`;
/// an absent fact never matches. Firing unions `diet_tags_add` into the
/// accumulated tag set and appends `tips` in rule order. Rules never
/// reference derived tags, so evaluation is a single pass with no chaining.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactRule {
    #[serde(alias = "condition_fact")]
    pub fact: String,
    #[serde(default = "default_true", alias = "value")]
    pub expected: bool,
    #[serde(default)]
    pub diet_tags_add: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Per-100g nutrient profile of a catalog entry.
///
/// Common fields are typed; anything else the catalog carries survives a
/// round trip untouched via `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub calories_kcal: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(flatten)]
    pub extra: AHashMap<String, serde_json::Value>,
}

/// An immutable food catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub per_100g: Nutrients,
    #[serde(default)]
    pub tags: AHashSet<String>,
}

impl Food {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
