use crate::config::GatewayConfig;
use risk_engine::RiskScorer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<RiskScorer>,
    pub report_top_n: usize,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            scorer: Arc::new(RiskScorer::from_config(config.rule_set)),
            report_top_n: config.report_top_n,
        }
    }
}
