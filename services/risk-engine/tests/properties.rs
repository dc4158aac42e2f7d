//! Property tests for the scorer using `proptest`.
//!
//! Explores random profiles, including values well outside the advisory
//! input bounds, under every rule set variant.

use proptest::prelude::*;
use risk_engine::{BloodPressurePolicy, RiskScorer, RuleSet, RuleSetConfig};
use types::factor::RiskFactor;
use types::profile::HealthProfile;
use types::risk::RiskCategory;

fn profile_strategy() -> impl Strategy<Value = HealthProfile> {
    (
        (
            -10i64..160,
            0.0f64..400.0,
            0.0f64..300.0,
            0.0f64..150.0,
            0.0f64..800.0,
            50.0f64..260.0,
        ),
        (
            30.0f64..160.0,
            0.0f64..15.0,
            20.0f64..200.0,
            any::<bool>(),
            any::<bool>(),
            0.0f64..16.0,
        ),
    )
        .prop_map(
            |((age, tc, ldl, hdl, trig, sbp), (dbp, crp, rhr, smoking, diabetes, sleep))| HealthProfile {
                age,
                total_cholesterol: tc,
                ldl_cholesterol: ldl,
                hdl_cholesterol: hdl,
                triglycerides: trig,
                systolic_bp: sbp,
                diastolic_bp: dbp,
                c_reactive_protein: crp,
                resting_heart_rate: rhr,
                smoking,
                diabetes,
                sleep_duration: Some(sleep),
            },
        )
}

fn rule_set_strategy() -> impl Strategy<Value = RuleSet> {
    (any::<bool>(), any::<bool>()).prop_map(|(combined, sleep_factor)| {
        RuleSet::from_config(RuleSetConfig {
            blood_pressure: if combined {
                BloodPressurePolicy::Combined
            } else {
                BloodPressurePolicy::Independent
            },
            sleep_factor,
        })
    })
}

proptest! {
    #[test]
    fn score_is_sum_of_contributions(profile in profile_strategy(), rules in rule_set_strategy()) {
        let assessment = RiskScorer::with_rules(rules).score(&profile).unwrap();
        let total: u32 = assessment.feature_contributions.iter().map(|c| c.weight).sum();
        prop_assert_eq!(assessment.risk_score, total);
        prop_assert!(assessment.check_invariant());
    }

    #[test]
    fn category_determined_by_score_alone(profile in profile_strategy(), rules in rule_set_strategy()) {
        let assessment = RiskScorer::with_rules(rules).score(&profile).unwrap();
        let expected = if assessment.risk_score >= 10 {
            RiskCategory::High
        } else if assessment.risk_score >= 5 {
            RiskCategory::Moderate
        } else {
            RiskCategory::Low
        };
        prop_assert_eq!(assessment.risk_category, expected);
    }

    #[test]
    fn scoring_is_idempotent(profile in profile_strategy(), rules in rule_set_strategy()) {
        let scorer = RiskScorer::with_rules(rules);
        let first = scorer.score(&profile).unwrap();
        let second = scorer.score(&profile).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn each_factor_contributes_at_most_once(profile in profile_strategy(), rules in rule_set_strategy()) {
        let assessment = RiskScorer::with_rules(rules).score(&profile).unwrap();
        let factors: Vec<RiskFactor> = assessment.feature_contributions.iter().map(|c| c.factor).collect();
        for factor in &factors {
            prop_assert_eq!(factors.iter().filter(|f| *f == factor).count(), 1);
        }
        for tiered in [RiskFactor::TotalCholesterol, RiskFactor::LdlCholesterol, RiskFactor::SleepDuration] {
            if let Some(weight) = assessment.contribution(tiered) {
                prop_assert!(weight == 2 || weight == 3);
            }
        }
    }

    #[test]
    fn score_never_exceeds_rule_set_maximum(profile in profile_strategy(), rules in rule_set_strategy()) {
        let max_score = rules.max_score();
        let assessment = RiskScorer::with_rules(rules).score(&profile).unwrap();
        prop_assert!(assessment.risk_score <= max_score);
    }

    #[test]
    fn dynamic_and_typed_paths_agree(profile in profile_strategy(), rules in rule_set_strategy()) {
        let scorer = RiskScorer::with_rules(rules);
        let value = serde_json::to_value(&profile).unwrap();
        prop_assert_eq!(scorer.score_value(&value).unwrap(), scorer.score(&profile).unwrap());
    }

    #[test]
    fn float_encoded_input_parses_the_same_both_ways(profile in profile_strategy(), rules in rule_set_strategy()) {
        let scorer = RiskScorer::with_rules(rules);
        let mut value = serde_json::to_value(&profile).unwrap();
        value["age"] = serde_json::json!(profile.age as f64);
        value["smoking"] = serde_json::json!(if profile.smoking { 1.0 } else { 0.0 });
        value["diabetes"] = serde_json::json!(if profile.diabetes { 1.0 } else { 0.0 });

        let typed: HealthProfile = serde_json::from_value(value.clone()).unwrap();
        prop_assert_eq!(&scorer.parse_profile(&value).unwrap(), &typed);
        prop_assert_eq!(&typed, &profile);
    }

    #[test]
    fn blood_pressure_policy_only_changes_bp_factors(profile in profile_strategy()) {
        let independent = RiskScorer::new().score(&profile).unwrap();
        let combined = RiskScorer::with_rules(RuleSet::combined_blood_pressure()).score(&profile).unwrap();

        let strip = |factor: &RiskFactor| {
            !matches!(factor, RiskFactor::SystolicBp | RiskFactor::DiastolicBp | RiskFactor::BloodPressure)
        };
        let rest_independent: Vec<_> = independent.feature_contributions.iter().filter(|c| strip(&c.factor)).collect();
        let rest_combined: Vec<_> = combined.feature_contributions.iter().filter(|c| strip(&c.factor)).collect();
        prop_assert_eq!(rest_independent, rest_combined);

        let bp_triggered = independent.contribution(RiskFactor::SystolicBp).is_some()
            || independent.contribution(RiskFactor::DiastolicBp).is_some();
        prop_assert_eq!(combined.contribution(RiskFactor::BloodPressure).is_some(), bp_triggered);
    }
}
