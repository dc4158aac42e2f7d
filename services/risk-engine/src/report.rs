//! Report export
//!
//! Ranks contributions, computes the gauge reading over the rule set's
//! attainable range and renders a plain-text document. Percentages use
//! decimal arithmetic rounded half-up to one place so rendered figures are
//! stable across platforms.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use types::factor::RiskFactor;
use types::ids::AssessmentId;
use types::risk::{FeatureContribution, RiskAssessment, RiskCategory};

use crate::rules::RuleSet;

/// Default number of factors listed in a report
pub const DEFAULT_TOP_N: usize = 3;

const DISCLAIMER: &str =
    "This is a rule-based risk indication, not a validated clinical model or a diagnosis.";

/// Contributions by descending weight; ties keep evaluation order.
pub fn top_contributions(assessment: &RiskAssessment, n: usize) -> Vec<FeatureContribution> {
    let mut ranked = assessment.feature_contributions.clone();
    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked.truncate(n);
    ranked
}

/// `part / whole` as a percentage, one decimal place, half-up
fn percent(part: u32, whole: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

// ── Gauge ────────────────────────────────────────────────────────────────

/// Position of a score on the gauge `0..=max_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeReading {
    pub score: u32,
    pub max_score: u32,
    /// Fill percentage, capped at 100
    pub percent: Decimal,
}

impl GaugeReading {
    pub fn new(score: u32, max_score: u32) -> Self {
        Self {
            score,
            max_score,
            percent: percent(score, max_score).min(Decimal::ONE_HUNDRED),
        }
    }
}

// ── Report ───────────────────────────────────────────────────────────────

/// A contribution with its share of the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedContribution {
    pub factor: RiskFactor,
    pub weight: u32,
    /// Percentage of the risk score
    pub share: Decimal,
}

/// Exportable summary of one assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub assessment_id: AssessmentId,
    pub generated_at: DateTime<Utc>,
    pub rule_set: String,
    pub risk_score: u32,
    pub risk_category: RiskCategory,
    pub gauge: GaugeReading,
    pub top_factors: Vec<RankedContribution>,
}

impl RiskReport {
    /// Build a report for an assessment produced under `rules`
    pub fn build(
        assessment: &RiskAssessment,
        rules: &RuleSet,
        top_n: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let top_factors = top_contributions(assessment, top_n)
            .into_iter()
            .map(|c| RankedContribution {
                factor: c.factor,
                weight: c.weight,
                share: percent(c.weight, assessment.risk_score),
            })
            .collect();

        Self {
            assessment_id: AssessmentId::new(),
            generated_at,
            rule_set: rules.name().to_string(),
            risk_score: assessment.risk_score,
            risk_category: assessment.risk_category,
            gauge: GaugeReading::new(assessment.risk_score, rules.max_score()),
            top_factors,
        }
    }

    /// Render as a plain-text document
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "CAD Risk Assessment Report";

        writeln!(f, "{}", title)?;
        writeln!(f, "{}", "=".repeat(title.len()))?;
        writeln!(f, "Assessment: {}", self.assessment_id)?;
        writeln!(f, "Generated:  {}", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "Rule set:   {}", self.rule_set)?;
        writeln!(f)?;
        writeln!(f, "Result:     {}", self.risk_category)?;
        writeln!(
            f,
            "Risk score: {}/{} ({:.1}%)",
            self.gauge.score, self.gauge.max_score, self.gauge.percent
        )?;
        writeln!(f)?;

        if self.top_factors.is_empty() {
            writeln!(f, "No risk factors triggered.")?;
        } else {
            writeln!(f, "Top contributing factors:")?;
            for (rank, factor) in self.top_factors.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {:<20} +{}  ({:.1}% of score)",
                    rank + 1,
                    factor.factor.label(),
                    factor.weight,
                    factor.share
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", DISCLAIMER)
    }
}
