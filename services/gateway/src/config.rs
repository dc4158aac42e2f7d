use risk_engine::report::DEFAULT_TOP_N;
use risk_engine::{BloodPressurePolicy, RuleSetConfig};
use std::net::SocketAddr;
use types::errors::ConfigError;

const ENV_ADDR: &str = "CAD_GATEWAY_ADDR";
const ENV_BP_POLICY: &str = "CAD_BP_POLICY";
const ENV_SLEEP_FACTOR: &str = "CAD_SLEEP_FACTOR";
const ENV_REPORT_TOP_N: &str = "CAD_REPORT_TOP_N";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Gateway settings, read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub rule_set: RuleSetConfig,
    /// Factors listed in a report when the request does not ask for a count
    pub report_top_n: usize,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr: SocketAddr = lookup(ENV_ADDR)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| invalid(ENV_ADDR, lookup(ENV_ADDR)))?;

        let blood_pressure = match lookup(ENV_BP_POLICY) {
            Some(value) => value.parse::<BloodPressurePolicy>()?,
            None => BloodPressurePolicy::default(),
        };

        let sleep_factor = match lookup(ENV_SLEEP_FACTOR) {
            Some(value) => parse_bool(&value).ok_or_else(|| invalid(ENV_SLEEP_FACTOR, Some(value)))?,
            None => false,
        };

        let report_top_n: usize = match lookup(ENV_REPORT_TOP_N) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_REPORT_TOP_N, Some(value)))?,
            None => DEFAULT_TOP_N,
        };

        Ok(Self {
            bind_addr,
            rule_set: RuleSetConfig { blood_pressure, sleep_factor },
            report_top_n,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: Option<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.unwrap_or_default(),
    }
}
