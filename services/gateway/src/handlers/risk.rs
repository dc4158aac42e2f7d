use crate::error::AppError;
use crate::models::{ReportQuery, ReportResponse, ScoreResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
};
use risk_engine::report::RiskReport;
use serde_json::Value;
use types::ids::AssessmentId;
use types::profile::HealthProfile;
use types::risk::RiskAssessment;

pub async fn score(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(input) = payload?;
    let (profile, assessment) = assess(&state, &input)?;
    let rules = state.scorer.rules();

    Ok(Json(ScoreResponse {
        assessment_id: AssessmentId::new(),
        rule_set: rules.name().to_string(),
        max_score: rules.max_score(),
        assessment,
        advisories: profile.fields_outside_bounds(),
    }))
}

pub async fn report(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Query(query) = query?;
    let Json(input) = payload?;
    let (_, assessment) = assess(&state, &input)?;

    let top_n = query.top.unwrap_or(state.report_top_n);
    let report = RiskReport::build(&assessment, state.scorer.rules(), top_n, chrono::Utc::now());
    let text = report.render_text();

    Ok(Json(ReportResponse { report, text }))
}

/// Parse, score and log one input record
fn assess(state: &AppState, input: &Value) -> Result<(HealthProfile, RiskAssessment), AppError> {
    let scored = state
        .scorer
        .parse_profile(input)
        .and_then(|profile| state.scorer.score(&profile).map(|assessment| (profile, assessment)));

    match scored {
        Ok((profile, assessment)) => {
            tracing::info!(
                rule_set = state.scorer.rules().name(),
                risk_score = assessment.risk_score,
                risk_category = %assessment.risk_category,
                factors = assessment.feature_contributions.len(),
                "Assessment computed"
            );
            Ok((profile, assessment))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Rejected assessment input");
            Err(err.into())
        }
    }
}
