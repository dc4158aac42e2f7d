//! Risk Engine Service
//!
//! Deterministic, additive point-threshold scoring of coronary artery
//! disease risk.
//!
//! - `rules`: named rule tables the scorer is parameterised with
//! - `validator`: input checks and parsing of dynamic input records
//! - `engine`: the scorer itself
//! - `report`: ranked contributions, gauge reading and text export

pub mod rules;
pub mod validator;
pub mod engine;
pub mod report;

pub use engine::{score, RiskScorer};
pub use rules::{BloodPressurePolicy, RuleSet, RuleSetConfig};
