//! Static reference tables
//!
//! Two hardcoded tables a presentation layer shows beside an assessment:
//! the advisory bounds of each input control, and normal physiological
//! ranges. Neither is derived from the scoring rules.

use serde::Serialize;

/// Advisory bounds and resting value of one input control
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputBound {
    /// Field name in the input record
    pub field: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputBound {
    /// Inclusive range check
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Input control bounds, in input-record order
pub const INPUT_BOUNDS: [InputBound; 12] = [
    InputBound { field: "age", label: "Age", unit: "years", min: 20.0, max: 90.0, default: 50.0 },
    InputBound { field: "total_cholesterol", label: "Total Cholesterol", unit: "mg/dL", min: 100.0, max: 300.0, default: 200.0 },
    InputBound { field: "ldl_cholesterol", label: "LDL Cholesterol", unit: "mg/dL", min: 50.0, max: 200.0, default: 100.0 },
    InputBound { field: "hdl_cholesterol", label: "HDL Cholesterol", unit: "mg/dL", min: 20.0, max: 100.0, default: 50.0 },
    InputBound { field: "triglycerides", label: "Triglycerides", unit: "mg/dL", min: 50.0, max: 500.0, default: 150.0 },
    InputBound { field: "systolic_bp", label: "Systolic BP", unit: "mmHg", min: 90.0, max: 200.0, default: 120.0 },
    InputBound { field: "diastolic_bp", label: "Diastolic BP", unit: "mmHg", min: 60.0, max: 120.0, default: 80.0 },
    InputBound { field: "c_reactive_protein", label: "C-Reactive Protein", unit: "mg/L", min: 0.1, max: 10.0, default: 2.0 },
    InputBound { field: "resting_heart_rate", label: "Resting Heart Rate", unit: "bpm", min: 40.0, max: 120.0, default: 70.0 },
    InputBound { field: "smoking", label: "Smoking Status", unit: "", min: 0.0, max: 1.0, default: 0.0 },
    InputBound { field: "diabetes", label: "Diabetes", unit: "", min: 0.0, max: 1.0, default: 0.0 },
    InputBound { field: "sleep_duration", label: "Sleep Duration", unit: "hours", min: 3.0, max: 12.0, default: 7.0 },
];

/// Look up the bounds of an input field
pub fn input_bound(field: &str) -> Option<&'static InputBound> {
    INPUT_BOUNDS.iter().find(|bound| bound.field == field)
}

/// Normal physiological range of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalRange {
    pub parameter: &'static str,
    pub range: &'static str,
    pub unit: &'static str,
}

pub const NORMAL_RANGES: [NormalRange; 9] = [
    NormalRange { parameter: "Total Cholesterol", range: "< 200", unit: "mg/dL" },
    NormalRange { parameter: "LDL Cholesterol", range: "< 100", unit: "mg/dL" },
    NormalRange { parameter: "HDL Cholesterol", range: ">= 40", unit: "mg/dL" },
    NormalRange { parameter: "Triglycerides", range: "< 150", unit: "mg/dL" },
    NormalRange { parameter: "Systolic BP", range: "< 120", unit: "mmHg" },
    NormalRange { parameter: "Diastolic BP", range: "< 80", unit: "mmHg" },
    NormalRange { parameter: "C-Reactive Protein", range: "< 3.0", unit: "mg/L" },
    NormalRange { parameter: "Resting Heart Rate", range: "60-100", unit: "bpm" },
    NormalRange { parameter: "Sleep Duration", range: "7-9", unit: "hours" },
];
