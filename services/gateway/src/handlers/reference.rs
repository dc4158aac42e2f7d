use crate::models::{InputBoundsResponse, NormalRangesResponse, RulesResponse};
use crate::state::AppState;
use axum::{Json, extract::State};
use types::reference::{INPUT_BOUNDS, NORMAL_RANGES};

pub async fn rules(State(state): State<AppState>) -> Json<RulesResponse> {
    let rule_set = state.scorer.rules().clone();
    Json(RulesResponse {
        max_score: rule_set.max_score(),
        rule_set,
    })
}

pub async fn normal_ranges() -> Json<NormalRangesResponse> {
    Json(NormalRangesResponse { ranges: &NORMAL_RANGES })
}

pub async fn input_bounds() -> Json<InputBoundsResponse> {
    Json(InputBoundsResponse { inputs: &INPUT_BOUNDS })
}
