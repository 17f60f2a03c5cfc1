//! The recommendation engine: composes anthropometrics, bracket selection,
//! rule inference and food filtering into one evaluation.

mod bracket;
mod filter;
mod rules;

pub use bracket::{
    FALLBACK_CALORIES_MAX_PER_KG_IBW, FALLBACK_CALORIES_MIN_PER_KG_IBW,
    FALLBACK_PROTEIN_G_PER_KG_IBW, MacroTargets, macro_targets, select_bmi_rule,
};
pub use filter::{MAX_RECOMMENDATIONS, is_known_diet_tag, recommend};
pub use rules::{Inference, TagSet, infer};

use crate::anthropometry::{self, BmiCategory, TARGET_BMI};
use crate::error::ProfileError;
use crate::kb::{KnowledgeBase, Nutrients};
use crate::profile::UserProfile;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A food entry in the final recommendation, snapshotted from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedFood {
    pub id: String,
    pub name: String,
    pub per_100g: Nutrients,
    pub tags: AHashSet<String>,
}

/// The complete result of one evaluation.
///
/// Rounding here is part of the output contract: BMI, IBW and target weight
/// at two decimals, protein at one, calories at the nearest integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub ibw_kg: f64,
    pub target_bmi: f64,
    pub target_weight_kg: f64,
    pub protein_grams_per_day: f64,
    pub calories_min_per_day: i64,
    pub calories_max_per_day: i64,
    /// Id of the matched BMI bracket rule; `None` when the fallback applied.
    pub selected_bmi_rule: Option<String>,
    pub diet_tags: Vec<String>,
    pub tips: Vec<String>,
    pub recommended_foods: Vec<RecommendedFood>,
}

/// Evaluates user profiles against an immutable knowledge base.
///
/// A `Recommender` borrows the knowledge base and holds no mutable state, so
/// one instance can serve any number of evaluations, concurrently if shared.
pub struct Recommender<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> Recommender<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Runs the full pipeline for one profile.
    ///
    /// Fails only when the height precondition does not hold; everything else
    /// is total. A BMI outside all configured brackets resolves to the
    /// documented fallback targets rather than an error.
    pub fn evaluate(&self, profile: &UserProfile) -> Result<Recommendation, ProfileError> {
        profile.validate()?;

        let bmi = anthropometry::bmi(profile.weight_kg, profile.height_cm);
        let ibw = anthropometry::ibw(profile.height_cm);
        let targets = bracket::macro_targets(bmi, &self.kb.bmi_rules);

        tracing::debug!(bmi, ibw, rule = ?targets.rule_id, "resolved anthropometrics");

        let inference = rules::infer(
            &profile.health_facts,
            &profile.preference_facts,
            &self.kb.condition_rules,
            &self.kb.preference_rules,
        );

        let foods = filter::recommend(
            &inference.diet_tags,
            &profile.preference_facts,
            &self.kb.foods,
        );

        Ok(Recommendation {
            bmi: anthropometry::round2(bmi),
            bmi_category: BmiCategory::from_bmi(bmi),
            ibw_kg: anthropometry::round2(ibw),
            target_bmi: TARGET_BMI,
            // Target weight is the ideal body weight itself.
            target_weight_kg: anthropometry::round2(ibw),
            protein_grams_per_day: anthropometry::round1(targets.protein_g_per_kg_ibw * ibw),
            calories_min_per_day: (targets.calories_min_per_kg_ibw * ibw).round() as i64,
            calories_max_per_day: (targets.calories_max_per_kg_ibw * ibw).round() as i64,
            selected_bmi_rule: targets.rule_id,
            diet_tags: inference.diet_tags.into_vec(),
            tips: inference.tips,
            recommended_foods: foods
                .into_iter()
                .map(|food| RecommendedFood {
                    id: food.id.clone(),
                    name: food.name.clone(),
                    per_100g: food.per_100g.clone(),
                    tags: food.tags.clone(),
                })
                .collect(),
        })
    }
}
