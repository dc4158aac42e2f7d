//! Health profile input record
//!
//! The record an input collector hands to the scorer. Every field is
//! independently valid within its own type; the typical domains listed in
//! `reference::INPUT_BOUNDS` are advisory and never enforced here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reference;

/// Input record for one scoring call
///
/// Flags accept either JSON booleans or the numbers 0/1 when deserialized;
/// age accepts any whole number, including whole floats such as `65.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in whole years
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub age: i64,
    /// mg/dL
    pub total_cholesterol: f64,
    /// mg/dL
    pub ldl_cholesterol: f64,
    /// mg/dL
    pub hdl_cholesterol: f64,
    /// mg/dL
    pub triglycerides: f64,
    /// mmHg
    pub systolic_bp: f64,
    /// mmHg
    pub diastolic_bp: f64,
    /// mg/L
    pub c_reactive_protein: f64,
    /// bpm
    pub resting_heart_rate: f64,
    #[serde(with = "flag")]
    pub smoking: bool,
    #[serde(with = "flag")]
    pub diabetes: bool,
    /// Hours per night; only read by rule sets that score sleep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_duration: Option<f64>,
}

impl Default for HealthProfile {
    /// Collector defaults (the resting position of each input control)
    fn default() -> Self {
        Self {
            age: 50,
            total_cholesterol: 200.0,
            ldl_cholesterol: 100.0,
            hdl_cholesterol: 50.0,
            triglycerides: 150.0,
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            c_reactive_protein: 2.0,
            resting_heart_rate: 70.0,
            smoking: false,
            diabetes: false,
            sleep_duration: None,
        }
    }
}

impl HealthProfile {
    /// Fields whose value lies outside the advisory collector bounds.
    ///
    /// Purely informational: out-of-bounds values are still scored.
    pub fn fields_outside_bounds(&self) -> Vec<&'static str> {
        Measure::ALL
            .iter()
            .filter_map(|measure| {
                let value = measure.read(self)?;
                let bound = reference::input_bound(measure.field_name())?;
                (!bound.contains(value)).then_some(bound.field)
            })
            .collect()
    }
}

/// A single readable quantity of a `HealthProfile`
///
/// Rules are expressed against measures rather than struct fields so a rule
/// table can be inspected and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Age,
    TotalCholesterol,
    LdlCholesterol,
    HdlCholesterol,
    Triglycerides,
    SystolicBp,
    DiastolicBp,
    CReactiveProtein,
    RestingHeartRate,
    Smoking,
    Diabetes,
    SleepDuration,
}

impl Measure {
    /// Every measure, in input-record order
    pub const ALL: [Measure; 12] = [
        Measure::Age,
        Measure::TotalCholesterol,
        Measure::LdlCholesterol,
        Measure::HdlCholesterol,
        Measure::Triglycerides,
        Measure::SystolicBp,
        Measure::DiastolicBp,
        Measure::CReactiveProtein,
        Measure::RestingHeartRate,
        Measure::Smoking,
        Measure::Diabetes,
        Measure::SleepDuration,
    ];

    /// Field name in the input record
    pub fn field_name(&self) -> &'static str {
        match self {
            Measure::Age => "age",
            Measure::TotalCholesterol => "total_cholesterol",
            Measure::LdlCholesterol => "ldl_cholesterol",
            Measure::HdlCholesterol => "hdl_cholesterol",
            Measure::Triglycerides => "triglycerides",
            Measure::SystolicBp => "systolic_bp",
            Measure::DiastolicBp => "diastolic_bp",
            Measure::CReactiveProtein => "c_reactive_protein",
            Measure::RestingHeartRate => "resting_heart_rate",
            Measure::Smoking => "smoking",
            Measure::Diabetes => "diabetes",
            Measure::SleepDuration => "sleep_duration",
        }
    }

    /// Read the measure from a profile.
    ///
    /// Flags read as 1.0 / 0.0. Returns `None` only for an absent
    /// optional field.
    pub fn read(&self, profile: &HealthProfile) -> Option<f64> {
        let value = match self {
            Measure::Age => profile.age as f64,
            Measure::TotalCholesterol => profile.total_cholesterol,
            Measure::LdlCholesterol => profile.ldl_cholesterol,
            Measure::HdlCholesterol => profile.hdl_cholesterol,
            Measure::Triglycerides => profile.triglycerides,
            Measure::SystolicBp => profile.systolic_bp,
            Measure::DiastolicBp => profile.diastolic_bp,
            Measure::CReactiveProtein => profile.c_reactive_protein,
            Measure::RestingHeartRate => profile.resting_heart_rate,
            Measure::Smoking => flag_value(profile.smoking),
            Measure::Diabetes => flag_value(profile.diabetes),
            Measure::SleepDuration => return profile.sleep_duration,
        };
        Some(value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

fn flag_value(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}

/// Serde adapter for yes/no flags sent either as booleans or as 0/1
mod flag {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Bool(bool),
        Number(f64),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Bool(b) => Ok(b),
            Wire::Number(x) if x == 0.0 => Ok(false),
            Wire::Number(x) if x == 1.0 => Ok(true),
            Wire::Number(other) => Err(<D::Error as DeError>::custom(format!(
                "expected a boolean or 0/1, got {}",
                other
            ))),
        }
    }
}

/// Integers sent either as JSON integers or as floats with no fraction
mod whole_number {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Int(n) => Ok(n),
            Wire::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => Ok(x as i64),
            Wire::Float(other) => Err(<D::Error as DeError>::custom(format!(
                "expected a whole number, got {}",
                other
            ))),
        }
    }
}
