//! Risk assessment types
//!
//! The output record of a scoring call and the three-tier categorization.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::factor::RiskFactor;

/// Scores at or above this are High Risk
pub const HIGH_RISK_THRESHOLD: u32 = 10;
/// Scores at or above this (and below `HIGH_RISK_THRESHOLD`) are Moderate Risk
pub const MODERATE_RISK_THRESHOLD: u32 = 5;

/// Ordinal risk band derived solely from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    /// Classify a risk score
    ///
    /// `>= 10` → High, `5..10` → Moderate, `< 5` → Low
    pub fn from_score(risk_score: u32) -> Self {
        if risk_score >= HIGH_RISK_THRESHOLD {
            RiskCategory::High
        } else if risk_score >= MODERATE_RISK_THRESHOLD {
            RiskCategory::Moderate
        } else {
            RiskCategory::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Moderate => "Moderate Risk",
            RiskCategory::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight a single triggered rule added to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub factor: RiskFactor,
    pub weight: u32,
}

/// Output record of a scoring call
///
/// Invariant: `risk_score == sum(feature_contributions.weight)` and
/// `risk_category == RiskCategory::from_score(risk_score)`.
///
/// Contributions keep rule evaluation order and serialize as a JSON object
/// `{label: weight}` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_category: RiskCategory,
    #[serde(
        serialize_with = "serialize_contributions",
        deserialize_with = "deserialize_contributions"
    )]
    pub feature_contributions: Vec<FeatureContribution>,
}

impl RiskAssessment {
    /// Build an assessment from triggered contributions.
    ///
    /// Score and category are derived here, so the invariant holds by
    /// construction.
    pub fn from_contributions(feature_contributions: Vec<FeatureContribution>) -> Self {
        let risk_score = feature_contributions.iter().map(|c| c.weight).sum();
        Self {
            risk_score,
            risk_category: RiskCategory::from_score(risk_score),
            feature_contributions,
        }
    }

    /// Weight contributed by a factor, if it triggered
    pub fn contribution(&self, factor: RiskFactor) -> Option<u32> {
        self.feature_contributions
            .iter()
            .find(|c| c.factor == factor)
            .map(|c| c.weight)
    }

    /// Check assessment invariant: score is the sum of contributions and
    /// the category matches the score
    pub fn check_invariant(&self) -> bool {
        let total: u32 = self.feature_contributions.iter().map(|c| c.weight).sum();
        total == self.risk_score && self.risk_category == RiskCategory::from_score(self.risk_score)
    }
}

fn serialize_contributions<S: Serializer>(
    contributions: &[FeatureContribution],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(contributions.len()))?;
    for c in contributions {
        map.serialize_entry(c.factor.label(), &c.weight)?;
    }
    map.end()
}

fn deserialize_contributions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<FeatureContribution>, D::Error> {
    struct ContributionVisitor;

    impl<'de> Visitor<'de> for ContributionVisitor {
        type Value = Vec<FeatureContribution>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of factor label to weight")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut contributions = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((factor, weight)) = access.next_entry::<RiskFactor, u32>()? {
                contributions.push(FeatureContribution { factor, weight });
            }
            Ok(contributions)
        }
    }

    deserializer.deserialize_map(ContributionVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_thresholds() {
        assert_eq!(RiskCategory::from_score(0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(4), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(5), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(9), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(10), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(29), RiskCategory::High);
    }

    #[test]
    fn test_category_ordering() {
        assert!(RiskCategory::Low < RiskCategory::Moderate);
        assert!(RiskCategory::Moderate < RiskCategory::High);
    }

    #[test]
    fn test_from_contributions_sums() {
        let assessment = RiskAssessment::from_contributions(vec![
            FeatureContribution { factor: RiskFactor::Smoking, weight: 3 },
            FeatureContribution { factor: RiskFactor::Diabetes, weight: 3 },
            FeatureContribution { factor: RiskFactor::Age, weight: 2 },
        ]);
        assert_eq!(assessment.risk_score, 8);
        assert_eq!(assessment.risk_category, RiskCategory::Moderate);
        assert_eq!(assessment.contribution(RiskFactor::Age), Some(2));
        assert_eq!(assessment.contribution(RiskFactor::HeartRate), None);
        assert!(assessment.check_invariant());
    }

    #[test]
    fn test_empty_assessment() {
        let assessment = RiskAssessment::from_contributions(Vec::new());
        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.risk_category, RiskCategory::Low);
        assert!(assessment.check_invariant());
    }

    #[test]
    fn test_tampered_assessment_fails_invariant() {
        let mut assessment = RiskAssessment::from_contributions(vec![FeatureContribution {
            factor: RiskFactor::Triglycerides,
            weight: 3,
        }]);
        assessment.risk_score = 4;
        assert!(!assessment.check_invariant());
    }

    #[test]
    fn test_serializes_contributions_in_evaluation_order() {
        let assessment = RiskAssessment::from_contributions(vec![
            FeatureContribution { factor: RiskFactor::TotalCholesterol, weight: 2 },
            FeatureContribution { factor: RiskFactor::Age, weight: 2 },
            FeatureContribution { factor: RiskFactor::CReactiveProtein, weight: 2 },
        ]);
        let json = serde_json::to_string(&assessment).unwrap();
        assert_eq!(
            json,
            r#"{"risk_score":6,"risk_category":"Moderate Risk","feature_contributions":{"Total Cholesterol":2,"Age":2,"C-Reactive Protein":2}}"#
        );

        let parsed: RiskAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assessment);
    }
}
