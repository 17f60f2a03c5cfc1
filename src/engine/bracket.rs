//! First-match BMI bracket selection and the out-of-coverage fallback.

use crate::kb::BmiRule;

/// Fallback protein target when no bracket covers the BMI, in g/kg IBW.
pub const FALLBACK_PROTEIN_G_PER_KG_IBW: f64 = 1.2;
/// Fallback daily calorie floor when no bracket covers the BMI, in kcal/kg IBW.
pub const FALLBACK_CALORIES_MIN_PER_KG_IBW: f64 = 25.0;
/// Fallback daily calorie ceiling when no bracket covers the BMI, in kcal/kg IBW.
pub const FALLBACK_CALORIES_MAX_PER_KG_IBW: f64 = 30.0;

/// Per-kg-IBW macro-nutrient targets resolved from a bracket rule, or from
/// the fallback constants when no rule matched.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroTargets {
    pub protein_g_per_kg_ibw: f64,
    pub calories_min_per_kg_ibw: f64,
    pub calories_max_per_kg_ibw: f64,
    /// Id of the bracket rule the targets came from; `None` means fallback.
    pub rule_id: Option<String>,
}

/// Returns the first rule in list order whose inclusive interval contains `bmi`.
///
/// At most one rule should match under a well-formed knowledge base; the
/// engine does not enforce that, it just takes the first.
pub fn select_bmi_rule(bmi: f64, rules: &[BmiRule]) -> Option<&BmiRule> {
    for rule in rules {
        if rule.contains(bmi) {
            return Some(rule);
        }
    }
    None
}

/// Resolves macro targets for `bmi`.
///
/// A BMI outside every configured bracket is defined behavior, not an error:
/// it yields the documented fallback targets with no rule id.
pub fn macro_targets(bmi: f64, rules: &[BmiRule]) -> MacroTargets {
    match select_bmi_rule(bmi, rules) {
        Some(rule) => MacroTargets {
            protein_g_per_kg_ibw: rule.protein_g_per_kg_ibw,
            calories_min_per_kg_ibw: rule.calories_kcal_per_kg_ibw_min,
            calories_max_per_kg_ibw: rule.calories_kcal_per_kg_ibw_max,
            rule_id: Some(rule.id.clone()),
        },
        None => {
            tracing::debug!(bmi, "no BMI bracket matched, using fallback targets");
            MacroTargets {
                protein_g_per_kg_ibw: FALLBACK_PROTEIN_G_PER_KG_IBW,
                calories_min_per_kg_ibw: FALLBACK_CALORIES_MIN_PER_KG_IBW,
                calories_max_per_kg_ibw: FALLBACK_CALORIES_MAX_PER_KG_IBW,
                rule_id: None,
            }
        }
    }
}
