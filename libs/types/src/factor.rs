//! Risk factor types
//!
//! A factor is what a triggered rule is reported under in the contribution
//! breakdown. Blood pressure appears both split (systolic / diastolic) and
//! combined, depending on the rule set in use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk factor, serialized as its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Total Cholesterol")]
    TotalCholesterol,
    #[serde(rename = "LDL Cholesterol")]
    LdlCholesterol,
    #[serde(rename = "HDL Cholesterol")]
    HdlCholesterol,
    #[serde(rename = "Triglycerides")]
    Triglycerides,
    #[serde(rename = "Systolic BP")]
    SystolicBp,
    #[serde(rename = "Diastolic BP")]
    DiastolicBp,
    /// Single trigger covering both systolic and diastolic thresholds
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    #[serde(rename = "C-Reactive Protein")]
    CReactiveProtein,
    #[serde(rename = "Heart Rate")]
    HeartRate,
    #[serde(rename = "Smoking")]
    Smoking,
    #[serde(rename = "Diabetes")]
    Diabetes,
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Sleep Duration")]
    SleepDuration,
}

impl RiskFactor {
    /// Human-readable label used as the contribution key
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::TotalCholesterol => "Total Cholesterol",
            RiskFactor::LdlCholesterol => "LDL Cholesterol",
            RiskFactor::HdlCholesterol => "HDL Cholesterol",
            RiskFactor::Triglycerides => "Triglycerides",
            RiskFactor::SystolicBp => "Systolic BP",
            RiskFactor::DiastolicBp => "Diastolic BP",
            RiskFactor::BloodPressure => "Blood Pressure",
            RiskFactor::CReactiveProtein => "C-Reactive Protein",
            RiskFactor::HeartRate => "Heart Rate",
            RiskFactor::Smoking => "Smoking",
            RiskFactor::Diabetes => "Diabetes",
            RiskFactor::Age => "Age",
            RiskFactor::SleepDuration => "Sleep Duration",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
