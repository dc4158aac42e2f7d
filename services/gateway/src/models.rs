use risk_engine::RuleSet;
use risk_engine::report::RiskReport;
use serde::{Deserialize, Serialize};
use types::ids::AssessmentId;
use types::reference::{InputBound, NormalRange};
use types::risk::RiskAssessment;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub assessment_id: AssessmentId,
    pub rule_set: String,
    pub max_score: u32,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    /// Fields outside the advisory input bounds (scored regardless)
    pub advisories: Vec<&'static str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    #[serde(flatten)]
    pub report: RiskReport,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RulesResponse {
    pub max_score: u32,
    #[serde(flatten)]
    pub rule_set: RuleSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalRangesResponse {
    pub ranges: &'static [NormalRange],
}

#[derive(Debug, Clone, Serialize)]
pub struct InputBoundsResponse {
    pub inputs: &'static [InputBound],
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
