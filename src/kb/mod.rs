//! The knowledge base: rule tables and food catalog, loaded once and immutable.

mod conversion;
mod model;

pub use conversion::IntoKnowledgeBase;
pub use model::{BmiRule, FactRule, Food, Nutrients};

use crate::engine::is_known_diet_tag;
use crate::error::KnowledgeBaseError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The immutable rule tables and food catalog the engine evaluates against.
///
/// Loaded once at process start and never mutated afterwards; it is
/// `Send + Sync` and can be read concurrently by any number of evaluations
/// without locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub bmi_rules: Vec<BmiRule>,
    #[serde(default)]
    pub condition_rules: Vec<FactRule>,
    #[serde(default)]
    pub preference_rules: Vec<FactRule>,
    #[serde(default)]
    pub foods: Vec<Food>,
}

impl KnowledgeBase {
    /// Parses a knowledge base from its JSON interchange format.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeBaseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a knowledge base file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let kb = Self::from_json(&content)?;
        tracing::info!(
            bmi_rules = kb.bmi_rules.len(),
            condition_rules = kb.condition_rules.len(),
            preference_rules = kb.preference_rules.len(),
            foods = kb.foods.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Opt-in well-formedness report.
    ///
    /// Evaluation itself never checks these: a BMI bracket lookup stays strict
    /// first-match in list order, and a rule naming a fact the caller never
    /// supplies simply never fires. This report exists so the loading layer
    /// can surface authoring mistakes at startup.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (a, b) in self.bmi_rules.iter().tuple_combinations() {
            if intervals_overlap(a, b) {
                issues.push(ValidationIssue::OverlappingBmiRules {
                    first: a.id.clone(),
                    second: b.id.clone(),
                });
            }
        }

        // Gap scan: walk intervals by lower bound and track the highest BMI
        // covered so far. Only meaningful between bounded neighbors.
        let ordered: Vec<&BmiRule> = self
            .bmi_rules
            .iter()
            .sorted_by(|a, b| {
                let a_min = a.bmi_min.unwrap_or(f64::NEG_INFINITY);
                let b_min = b.bmi_min.unwrap_or(f64::NEG_INFINITY);
                a_min.partial_cmp(&b_min).unwrap_or(std::cmp::Ordering::Equal)
            })
            .collect();
        let mut covered_up_to: Option<(f64, &BmiRule)> = None;
        for rule in ordered {
            if let (Some((max, below)), Some(min)) = (covered_up_to, rule.bmi_min) {
                if min > max {
                    issues.push(ValidationIssue::BmiCoverageGap {
                        below: below.id.clone(),
                        above: rule.id.clone(),
                    });
                }
            }
            let max = rule.bmi_max.unwrap_or(f64::INFINITY);
            if covered_up_to.is_none_or(|(prev, _)| max > prev) {
                covered_up_to = Some((max, rule));
            }
        }

        for rule in self.condition_rules.iter().chain(&self.preference_rules) {
            for tag in &rule.diet_tags_add {
                if !is_known_diet_tag(tag) {
                    issues.push(ValidationIssue::InertDietTag {
                        fact: rule.fact.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }

        for issue in &issues {
            tracing::warn!(%issue, "knowledge base validation issue");
        }
        issues
    }
}

fn intervals_overlap(a: &BmiRule, b: &BmiRule) -> bool {
    let a_min = a.bmi_min.unwrap_or(f64::NEG_INFINITY);
    let a_max = a.bmi_max.unwrap_or(f64::INFINITY);
    let b_min = b.bmi_min.unwrap_or(f64::NEG_INFINITY);
    let b_max = b.bmi_max.unwrap_or(f64::INFINITY);
    // Bounds are inclusive, so touching intervals both match the shared value.
    a_min <= b_max && b_min <= a_max
}

/// A well-formedness finding from [`KnowledgeBase::validate`].
///
/// Issues are advisory; none of them changes evaluation behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two BMI bracket rules both match some BMI value; the earlier one in
    /// list order wins at evaluation time.
    OverlappingBmiRules { first: String, second: String },
    /// Some BMI range between two bracket rules is covered by neither; values
    /// in it use the fallback targets.
    BmiCoverageGap { below: String, above: String },
    /// A rule adds a diet tag the food filter does not interpret; the tag is
    /// still surfaced in results but excludes nothing.
    InertDietTag { fact: String, tag: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::OverlappingBmiRules { first, second } => write!(
                f,
                "BMI rules '{first}' and '{second}' overlap; '{first}' shadows '{second}' where both match"
            ),
            ValidationIssue::BmiCoverageGap { below, above } => write!(
                f,
                "BMI values between rules '{below}' and '{above}' match no bracket and use fallback targets"
            ),
            ValidationIssue::InertDietTag { fact, tag } => write!(
                f,
                "rule for fact '{fact}' adds diet tag '{tag}', which the food filter does not interpret"
            ),
        }
    }
}
