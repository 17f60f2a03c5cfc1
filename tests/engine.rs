//! Tests for BMI bracket selection and the condition/preference rule engine.
mod common;
use common::*;
use gizi::engine::{
    FALLBACK_CALORIES_MAX_PER_KG_IBW, FALLBACK_CALORIES_MIN_PER_KG_IBW,
    FALLBACK_PROTEIN_G_PER_KG_IBW, infer, macro_targets, select_bmi_rule,
};
use gizi::prelude::*;

#[test]
fn test_first_matching_bracket_wins() {
    // Overlapping on purpose: the engine takes list order, not best fit.
    let rules = vec![
        bracket("a", Some(10.0), Some(20.0)),
        bracket("b", Some(15.0), Some(25.0)),
    ];

    assert_eq!(select_bmi_rule(17.0, &rules).unwrap().id, "a");
    assert_eq!(select_bmi_rule(24.0, &rules).unwrap().id, "b");
    assert!(select_bmi_rule(30.0, &rules).is_none());
}

#[test]
fn test_bracket_bounds_are_inclusive() {
    let rules = vec![bracket("normal", Some(18.5), Some(24.99))];

    assert!(select_bmi_rule(18.5, &rules).is_some());
    assert!(select_bmi_rule(24.99, &rules).is_some());
    assert!(select_bmi_rule(18.49, &rules).is_none());
    assert!(select_bmi_rule(25.0, &rules).is_none());
}

#[test]
fn test_absent_bound_is_unbounded() {
    let rules = vec![
        bracket("low", None, Some(18.49)),
        bracket("high", Some(30.0), None),
    ];

    assert_eq!(select_bmi_rule(1.0, &rules).unwrap().id, "low");
    assert_eq!(select_bmi_rule(120.0, &rules).unwrap().id, "high");
    assert!(select_bmi_rule(22.0, &rules).is_none());
}

#[test]
fn test_matched_rule_supplies_targets() {
    let kb = sample_kb();
    let targets = macro_targets(33.06, &kb.bmi_rules);

    assert_eq!(targets.rule_id.as_deref(), Some("obese"));
    assert_eq!(targets.protein_g_per_kg_ibw, 1.5);
    assert_eq!(targets.calories_min_per_kg_ibw, 20.0);
    assert_eq!(targets.calories_max_per_kg_ibw, 25.0);
}

#[test]
fn test_fallback_targets_are_exact() {
    // Out-of-coverage BMI is defined behavior: the documented constants apply.
    let kb = sample_kb();
    let empty: &[BmiRule] = &[];
    for rules in [&kb.bmi_rules[..], empty] {
        let targets = macro_targets(22.0, rules);
        assert_eq!(targets.rule_id, None);
        assert_eq!(targets.protein_g_per_kg_ibw, FALLBACK_PROTEIN_G_PER_KG_IBW);
        assert_eq!(targets.calories_min_per_kg_ibw, FALLBACK_CALORIES_MIN_PER_KG_IBW);
        assert_eq!(targets.calories_max_per_kg_ibw, FALLBACK_CALORIES_MAX_PER_KG_IBW);
        assert_eq!(FALLBACK_PROTEIN_G_PER_KG_IBW, 1.2);
        assert_eq!(FALLBACK_CALORIES_MIN_PER_KG_IBW, 25.0);
        assert_eq!(FALLBACK_CALORIES_MAX_PER_KG_IBW, 30.0);
    }
}

#[test]
fn test_rule_fires_on_matching_fact() {
    let kb = sample_kb();
    let inference = infer(
        &facts(&[("diabetes", true)]),
        &facts(&[]),
        &kb.condition_rules,
        &kb.preference_rules,
    );

    assert_eq!(
        inference.diet_tags.iter().collect::<Vec<_>>(),
        vec!["low_sugar", "low_glycemic"]
    );
    assert_eq!(inference.tips.len(), 2);
}

#[test]
fn test_absent_fact_never_matches() {
    let kb = sample_kb();
    let inference = infer(&facts(&[]), &facts(&[]), &kb.condition_rules, &kb.preference_rules);

    assert!(inference.diet_tags.is_empty());
    assert!(inference.tips.is_empty());
}

#[test]
fn test_false_valued_fact_is_not_absence() {
    // A rule can expect `false`; it fires only when the fact is present
    // and false, never when the fact is missing.
    let rules = vec![fact_rule("exercises_regularly", false, &["low_fat"], &[])];

    let fired = infer(&facts(&[("exercises_regularly", false)]), &facts(&[]), &rules, &[]);
    assert!(fired.diet_tags.contains("low_fat"));

    let missing = infer(&facts(&[]), &facts(&[]), &rules, &[]);
    assert!(missing.diet_tags.is_empty());

    let true_valued = infer(&facts(&[("exercises_regularly", true)]), &facts(&[]), &rules, &[]);
    assert!(true_valued.diet_tags.is_empty());
}

#[test]
fn test_tags_union_and_tips_append() {
    let condition_rules = vec![
        fact_rule("diabetes", true, &["low_sugar"], &["tip one"]),
        fact_rule("prediabetes", true, &["low_sugar", "low_glycemic"], &["tip one"]),
    ];

    let inference = infer(
        &facts(&[("diabetes", true), ("prediabetes", true)]),
        &facts(&[]),
        &condition_rules,
        &[],
    );

    // Tags collapse, tips keep duplicates in rule order.
    assert_eq!(
        inference.diet_tags.iter().collect::<Vec<_>>(),
        vec!["low_sugar", "low_glycemic"]
    );
    assert_eq!(inference.tips, vec!["tip one", "tip one"]);
}

#[test]
fn test_condition_rules_run_before_preference_rules() {
    let condition_rules = vec![fact_rule("hypertension", true, &["low_sodium"], &["health tip"])];
    let preference_rules = vec![fact_rule("caffeine_free", true, &["avoid_caffeine"], &["pref tip"])];

    let inference = infer(
        &facts(&[("hypertension", true)]),
        &facts(&[("caffeine_free", true)]),
        &condition_rules,
        &preference_rules,
    );

    assert_eq!(
        inference.diet_tags.into_vec(),
        vec!["low_sodium", "avoid_caffeine"]
    );
    assert_eq!(inference.tips, vec!["health tip", "pref tip"]);
}

#[test]
fn test_inference_is_idempotent() {
    let kb = sample_kb();
    let health = facts(&[("diabetes", true), ("hypertension", true), ("gout", true)]);
    let prefs = facts(&[("vegetarian", true), ("caffeine_free", true)]);

    let first = infer(&health, &prefs, &kb.condition_rules, &kb.preference_rules);
    let second = infer(&health, &prefs, &kb.condition_rules, &kb.preference_rules);

    assert_eq!(
        first.diet_tags.iter().collect::<Vec<_>>(),
        second.diet_tags.iter().collect::<Vec<_>>()
    );
    assert_eq!(first.tips, second.tips);
}
