//! Risk Engine — scorer
//!
//! Evaluates every rule of the configured rule set against a profile, sums
//! the triggered weights and derives the category. Single pass, no state,
//! no side effects: identical input always yields identical output.

use serde_json::Value;
use types::errors::ScoringError;
use types::profile::HealthProfile;
use types::risk::{FeatureContribution, RiskAssessment};

use crate::rules::{RuleSet, RuleSetConfig};
use crate::validator;

/// Stateless scoring service bound to one rule set
///
/// Immutable after construction, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    rules: RuleSet,
}

impl RiskScorer {
    /// Create a scorer with the standard rule set
    pub fn new() -> Self {
        Self { rules: RuleSet::standard() }
    }

    /// Create a scorer with a custom rule set
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn from_config(config: RuleSetConfig) -> Self {
        Self::with_rules(RuleSet::from_config(config))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score a typed profile.
    ///
    /// Fails only with `ScoringError::InvalidInput` (non-finite number, or
    /// missing sleep duration under a rule set that scores it).
    pub fn score(&self, profile: &HealthProfile) -> Result<RiskAssessment, ScoringError> {
        validator::validate_profile(profile, &self.rules)?;
        Ok(self.evaluate(profile))
    }

    /// Score a dynamic input record.
    pub fn score_value(&self, input: &Value) -> Result<RiskAssessment, ScoringError> {
        let profile = self.parse_profile(input)?;
        Ok(self.evaluate(&profile))
    }

    /// Parse and validate a dynamic input record against this scorer's
    /// rule set without scoring it.
    pub fn parse_profile(&self, input: &Value) -> Result<HealthProfile, ScoringError> {
        Ok(validator::parse_profile(input, &self.rules)?)
    }

    fn evaluate(&self, profile: &HealthProfile) -> RiskAssessment {
        let contributions = self
            .rules
            .rules()
            .iter()
            .filter_map(|rule| {
                rule.evaluate(profile).map(|weight| FeatureContribution {
                    factor: rule.factor,
                    weight,
                })
            })
            .collect();

        RiskAssessment::from_contributions(contributions)
    }
}

/// Score a profile with the standard rule set
pub fn score(profile: &HealthProfile) -> Result<RiskAssessment, ScoringError> {
    RiskScorer::new().score(profile)
}
