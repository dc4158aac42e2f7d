//! Scoring rule tables
//!
//! A rule set is an ordered list of rules. Each rule reports under one risk
//! factor and holds one or more tiers; the first tier whose conditions match
//! contributes its weight and the rest are skipped, so a tiered factor never
//! adds more than one weight. A tier matches when any of its conditions
//! holds. All threshold comparisons are strict.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use types::errors::ConfigError;
use types::factor::RiskFactor;
use types::profile::{HealthProfile, Measure};

// ── Conditions ───────────────────────────────────────────────────────────

/// Comparison applied to a measure's value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Comparison {
    /// value > threshold
    Above(f64),
    /// value < threshold
    Below(f64),
    /// Flag is set
    IsSet,
}

impl Comparison {
    pub fn holds(&self, value: f64) -> bool {
        match *self {
            Comparison::Above(threshold) => value > threshold,
            Comparison::Below(threshold) => value < threshold,
            Comparison::IsSet => value != 0.0,
        }
    }
}

/// A comparison bound to a measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub measure: Measure,
    pub comparison: Comparison,
}

impl Condition {
    pub fn above(measure: Measure, threshold: f64) -> Self {
        Self { measure, comparison: Comparison::Above(threshold) }
    }

    pub fn below(measure: Measure, threshold: f64) -> Self {
        Self { measure, comparison: Comparison::Below(threshold) }
    }

    pub fn is_set(measure: Measure) -> Self {
        Self { measure, comparison: Comparison::IsSet }
    }

    /// An absent optional measure never satisfies a condition.
    pub fn holds(&self, profile: &HealthProfile) -> bool {
        self.measure
            .read(profile)
            .is_some_and(|value| self.comparison.holds(value))
    }
}

// ── Rules ────────────────────────────────────────────────────────────────

/// One weight band of a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub any_of: Vec<Condition>,
    pub weight: u32,
}

impl Tier {
    pub fn new(condition: Condition, weight: u32) -> Self {
        Self { any_of: vec![condition], weight }
    }

    /// Tier that fires if any of the conditions holds
    pub fn any(conditions: Vec<Condition>, weight: u32) -> Self {
        Self { any_of: conditions, weight }
    }

    pub fn matches(&self, profile: &HealthProfile) -> bool {
        self.any_of.iter().any(|condition| condition.holds(profile))
    }
}

/// A scoring rule: tiers evaluated in order, first match wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub factor: RiskFactor,
    pub tiers: Vec<Tier>,
}

impl Rule {
    /// Single-tier rule
    pub fn single(factor: RiskFactor, condition: Condition, weight: u32) -> Self {
        Self { factor, tiers: vec![Tier::new(condition, weight)] }
    }

    /// Multi-tier rule; list the highest tier first
    pub fn tiered(factor: RiskFactor, tiers: Vec<Tier>) -> Self {
        Self { factor, tiers }
    }

    /// Weight contributed by this rule, if it triggers
    pub fn evaluate(&self, profile: &HealthProfile) -> Option<u32> {
        self.tiers
            .iter()
            .find(|tier| tier.matches(profile))
            .map(|tier| tier.weight)
    }

    /// Largest weight any single tier can contribute
    pub fn max_weight(&self) -> u32 {
        self.tiers.iter().map(|tier| tier.weight).max().unwrap_or(0)
    }

    /// Whether any condition of this rule reads the measure
    pub fn reads(&self, measure: Measure) -> bool {
        self.tiers
            .iter()
            .flat_map(|tier| tier.any_of.iter())
            .any(|condition| condition.measure == measure)
    }
}

// ── Rule set configuration ───────────────────────────────────────────────

/// How elevated blood pressure is scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressurePolicy {
    /// Systolic and diastolic each contribute (+3 each)
    #[default]
    Independent,
    /// One "Blood Pressure" trigger if either threshold is exceeded (+3)
    Combined,
}

impl fmt::Display for BloodPressurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodPressurePolicy::Independent => f.write_str("independent"),
            BloodPressurePolicy::Combined => f.write_str("combined"),
        }
    }
}

impl FromStr for BloodPressurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(BloodPressurePolicy::Independent),
            "combined" => Ok(BloodPressurePolicy::Combined),
            other => Err(ConfigError::UnknownBloodPressurePolicy(other.to_string())),
        }
    }
}

/// Switches that select a rule set variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub blood_pressure: BloodPressurePolicy,
    /// Score sleep duration (< 5 h: +3, > 9 h: +2)
    pub sleep_factor: bool,
}

// ── Thresholds ───────────────────────────────────────────────────────────

const TOTAL_CHOLESTEROL_HIGH: f64 = 240.0;
const TOTAL_CHOLESTEROL_BORDERLINE: f64 = 200.0;
const LDL_HIGH: f64 = 160.0;
const LDL_BORDERLINE: f64 = 130.0;
const HDL_LOW: f64 = 40.0;
const TRIGLYCERIDES_HIGH: f64 = 200.0;
const SYSTOLIC_HIGH: f64 = 140.0;
const DIASTOLIC_HIGH: f64 = 90.0;
const CRP_HIGH: f64 = 3.0;
const HEART_RATE_HIGH: f64 = 90.0;
const AGE_HIGH: f64 = 60.0;
const SLEEP_SHORT: f64 = 5.0;
const SLEEP_LONG: f64 = 9.0;

// ── Rule sets ────────────────────────────────────────────────────────────

/// Named, ordered rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    name: String,
    config: RuleSetConfig,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Canonical rule set: independent blood pressure triggers, no sleep factor
    pub fn standard() -> Self {
        Self::from_config(RuleSetConfig::default())
    }

    /// Single combined blood pressure trigger, no sleep factor
    pub fn combined_blood_pressure() -> Self {
        Self::from_config(RuleSetConfig {
            blood_pressure: BloodPressurePolicy::Combined,
            sleep_factor: false,
        })
    }

    /// Build the rule table for a configuration
    pub fn from_config(config: RuleSetConfig) -> Self {
        let mut rules = vec![
            Rule::tiered(
                RiskFactor::TotalCholesterol,
                vec![
                    Tier::new(Condition::above(Measure::TotalCholesterol, TOTAL_CHOLESTEROL_HIGH), 3),
                    Tier::new(Condition::above(Measure::TotalCholesterol, TOTAL_CHOLESTEROL_BORDERLINE), 2),
                ],
            ),
            Rule::tiered(
                RiskFactor::LdlCholesterol,
                vec![
                    Tier::new(Condition::above(Measure::LdlCholesterol, LDL_HIGH), 3),
                    Tier::new(Condition::above(Measure::LdlCholesterol, LDL_BORDERLINE), 2),
                ],
            ),
            Rule::single(RiskFactor::HdlCholesterol, Condition::below(Measure::HdlCholesterol, HDL_LOW), 2),
            Rule::single(RiskFactor::Triglycerides, Condition::above(Measure::Triglycerides, TRIGLYCERIDES_HIGH), 3),
        ];

        match config.blood_pressure {
            BloodPressurePolicy::Independent => {
                rules.push(Rule::single(RiskFactor::SystolicBp, Condition::above(Measure::SystolicBp, SYSTOLIC_HIGH), 3));
                rules.push(Rule::single(RiskFactor::DiastolicBp, Condition::above(Measure::DiastolicBp, DIASTOLIC_HIGH), 3));
            }
            BloodPressurePolicy::Combined => {
                rules.push(Rule::tiered(
                    RiskFactor::BloodPressure,
                    vec![Tier::any(
                        vec![
                            Condition::above(Measure::SystolicBp, SYSTOLIC_HIGH),
                            Condition::above(Measure::DiastolicBp, DIASTOLIC_HIGH),
                        ],
                        3,
                    )],
                ));
            }
        }

        rules.extend([
            Rule::single(RiskFactor::CReactiveProtein, Condition::above(Measure::CReactiveProtein, CRP_HIGH), 2),
            Rule::single(RiskFactor::HeartRate, Condition::above(Measure::RestingHeartRate, HEART_RATE_HIGH), 2),
            Rule::single(RiskFactor::Smoking, Condition::is_set(Measure::Smoking), 3),
            Rule::single(RiskFactor::Diabetes, Condition::is_set(Measure::Diabetes), 3),
            Rule::single(RiskFactor::Age, Condition::above(Measure::Age, AGE_HIGH), 2),
        ]);

        if config.sleep_factor {
            rules.push(Rule::tiered(
                RiskFactor::SleepDuration,
                vec![
                    Tier::new(Condition::below(Measure::SleepDuration, SLEEP_SHORT), 3),
                    Tier::new(Condition::above(Measure::SleepDuration, SLEEP_LONG), 2),
                ],
            ));
        }

        Self {
            name: rule_set_name(config),
            config,
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> RuleSetConfig {
        self.config
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Highest attainable score: every rule firing at its top tier
    pub fn max_score(&self) -> u32 {
        self.rules.iter().map(Rule::max_weight).sum()
    }

    /// Whether an input must carry the measure to be scored.
    ///
    /// Every core field is required; sleep duration only when a rule
    /// reads it.
    pub fn requires(&self, measure: Measure) -> bool {
        match measure {
            Measure::SleepDuration => self.rules.iter().any(|rule| rule.reads(measure)),
            _ => true,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn rule_set_name(config: RuleSetConfig) -> String {
    let base = match config.blood_pressure {
        BloodPressurePolicy::Independent => "standard",
        BloodPressurePolicy::Combined => "combined-bp",
    };
    if config.sleep_factor {
        format!("{}+sleep", base)
    } else {
        base.to_string()
    }
}
