//! Input validation
//!
//! Turns a dynamic input record (as an input collector sends it) into a
//! `HealthProfile`, and checks typed profiles before scoring. Only presence
//! and type are checked; the advisory domain ranges are never enforced.
//!
//! Checks performed per field, in input-record order:
//! 1. Present (absent or `null` counts as missing) when the rule set requires it
//! 2. Of the declared type: integer age, 0/1 or boolean flags, numbers elsewhere
//! 3. Finite

use serde_json::{Map, Value};
use types::errors::InputError;
use types::profile::{HealthProfile, Measure};

use crate::rules::RuleSet;

const EXPECTED_INTEGER: &str = "an integer";
const EXPECTED_NUMBER: &str = "a number";
const EXPECTED_FLAG: &str = "a boolean or 0/1";

/// Validate a typed profile against a rule set.
///
/// Returns the first failing check.
pub fn validate_profile(profile: &HealthProfile, rules: &RuleSet) -> Result<(), InputError> {
    for measure in Measure::ALL {
        match measure.read(profile) {
            Some(value) if !value.is_finite() => {
                return Err(InputError::NotFinite { field: measure.field_name() });
            }
            None if rules.requires(measure) => {
                return Err(InputError::MissingField { field: measure.field_name() });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parse a dynamic input record into a profile.
///
/// Unknown keys are ignored.
pub fn parse_profile(input: &Value, rules: &RuleSet) -> Result<HealthProfile, InputError> {
    let fields = input.as_object().ok_or_else(|| InputError::NotAnObject {
        found: describe(input),
    })?;

    let profile = HealthProfile {
        age: integer_field(fields, Measure::Age)?,
        total_cholesterol: number_field(fields, Measure::TotalCholesterol)?,
        ldl_cholesterol: number_field(fields, Measure::LdlCholesterol)?,
        hdl_cholesterol: number_field(fields, Measure::HdlCholesterol)?,
        triglycerides: number_field(fields, Measure::Triglycerides)?,
        systolic_bp: number_field(fields, Measure::SystolicBp)?,
        diastolic_bp: number_field(fields, Measure::DiastolicBp)?,
        c_reactive_protein: number_field(fields, Measure::CReactiveProtein)?,
        resting_heart_rate: number_field(fields, Measure::RestingHeartRate)?,
        smoking: flag_field(fields, Measure::Smoking)?,
        diabetes: flag_field(fields, Measure::Diabetes)?,
        sleep_duration: optional_number_field(fields, Measure::SleepDuration, rules)?,
    };

    validate_profile(&profile, rules)?;
    Ok(profile)
}

fn required<'a>(fields: &'a Map<String, Value>, measure: Measure) -> Result<&'a Value, InputError> {
    match fields.get(measure.field_name()) {
        None | Some(Value::Null) => Err(InputError::MissingField { field: measure.field_name() }),
        Some(value) => Ok(value),
    }
}

fn wrong_type(measure: Measure, expected: &'static str, value: &Value) -> InputError {
    InputError::WrongType {
        field: measure.field_name(),
        expected,
        found: describe(value),
    }
}

fn number_field(fields: &Map<String, Value>, measure: Measure) -> Result<f64, InputError> {
    let value = required(fields, measure)?;
    value.as_f64().ok_or_else(|| wrong_type(measure, EXPECTED_NUMBER, value))
}

fn optional_number_field(
    fields: &Map<String, Value>,
    measure: Measure,
    rules: &RuleSet,
) -> Result<Option<f64>, InputError> {
    match fields.get(measure.field_name()) {
        None | Some(Value::Null) if rules.requires(measure) => {
            Err(InputError::MissingField { field: measure.field_name() })
        }
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| wrong_type(measure, EXPECTED_NUMBER, value)),
    }
}

/// Whole numbers sent as floats (`65.0`) are accepted.
fn integer_field(fields: &Map<String, Value>, measure: Measure) -> Result<i64, InputError> {
    let value = required(fields, measure)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => Ok(x as i64),
        _ => Err(wrong_type(measure, EXPECTED_INTEGER, value)),
    }
}

fn flag_field(fields: &Map<String, Value>, measure: Measure) -> Result<bool, InputError> {
    let value = required(fields, measure)?;
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(false),
        Value::Number(n) if n.as_f64() == Some(1.0) => Ok(true),
        _ => Err(wrong_type(measure, EXPECTED_FLAG, value)),
    }
}

/// Short description of an offending value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{:?}", s),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSetConfig;
    use serde_json::json;

    fn baseline() -> Value {
        json!({
            "age": 50,
            "total_cholesterol": 200,
            "ldl_cholesterol": 100,
            "hdl_cholesterol": 50,
            "triglycerides": 150,
            "systolic_bp": 120,
            "diastolic_bp": 80,
            "c_reactive_protein": 2.0,
            "resting_heart_rate": 70,
            "smoking": 0,
            "diabetes": 0
        })
    }

    fn sleep_rules() -> RuleSet {
        RuleSet::from_config(RuleSetConfig { sleep_factor: true, ..RuleSetConfig::default() })
    }

    #[test]
    fn test_parse_baseline() {
        let profile = parse_profile(&baseline(), &RuleSet::standard()).unwrap();
        assert_eq!(profile, HealthProfile::default());
    }

    #[test]
    fn test_parse_accepts_boolean_flags_and_whole_float_age() {
        let mut input = baseline();
        input["smoking"] = json!(true);
        input["age"] = json!(65.0);
        let profile = parse_profile(&input, &RuleSet::standard()).unwrap();
        assert!(profile.smoking);
        assert_eq!(profile.age, 65);
    }

    #[test]
    fn test_parse_accepts_whole_float_flags() {
        let mut input = baseline();
        input["smoking"] = json!(1.0);
        input["diabetes"] = json!(0.0);
        let profile = parse_profile(&input, &RuleSet::standard()).unwrap();
        assert!(profile.smoking);
        assert!(!profile.diabetes);

        input["smoking"] = json!(0.5);
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, InputError::WrongType { field: "smoking", .. }));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let mut input = baseline();
        input["weight"] = json!(80);
        assert!(parse_profile(&input, &RuleSet::standard()).is_ok());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_profile(&json!([1, 2, 3]), &RuleSet::standard()).unwrap_err();
        assert_eq!(err, InputError::NotAnObject { found: "an array".to_string() });
    }

    #[test]
    fn test_parse_missing_field() {
        let mut input = baseline();
        input.as_object_mut().unwrap().remove("hdl_cholesterol");
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert_eq!(err, InputError::MissingField { field: "hdl_cholesterol" });
    }

    #[test]
    fn test_parse_null_is_missing() {
        let mut input = baseline();
        input["triglycerides"] = Value::Null;
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert_eq!(err, InputError::MissingField { field: "triglycerides" });
    }

    #[test]
    fn test_parse_non_numeric() {
        let mut input = baseline();
        input["systolic_bp"] = json!("120");
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert_eq!(
            err,
            InputError::WrongType {
                field: "systolic_bp",
                expected: "a number",
                found: "\"120\"".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_fractional_age() {
        let mut input = baseline();
        input["age"] = json!(64.5);
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, InputError::WrongType { field: "age", .. }));
    }

    #[test]
    fn test_parse_bad_flag() {
        let mut input = baseline();
        input["diabetes"] = json!(2);
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, InputError::WrongType { field: "diabetes", .. }));

        input["diabetes"] = json!("Yes");
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, InputError::WrongType { field: "diabetes", .. }));
    }

    #[test]
    fn test_out_of_domain_values_accepted() {
        let mut input = baseline();
        input["age"] = json!(150);
        input["total_cholesterol"] = json!(-10);
        let profile = parse_profile(&input, &RuleSet::standard()).unwrap();
        assert_eq!(profile.age, 150);
        assert_eq!(profile.total_cholesterol, -10.0);
    }

    #[test]
    fn test_sleep_optional_unless_scored() {
        let profile = parse_profile(&baseline(), &RuleSet::standard()).unwrap();
        assert!(profile.sleep_duration.is_none());

        let err = parse_profile(&baseline(), &sleep_rules()).unwrap_err();
        assert_eq!(err, InputError::MissingField { field: "sleep_duration" });

        let mut input = baseline();
        input["sleep_duration"] = json!(4);
        let profile = parse_profile(&input, &sleep_rules()).unwrap();
        assert_eq!(profile.sleep_duration, Some(4.0));
    }

    #[test]
    fn test_sleep_type_checked_even_when_unscored() {
        let mut input = baseline();
        input["sleep_duration"] = json!("seven");
        let err = parse_profile(&input, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, InputError::WrongType { field: "sleep_duration", .. }));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let profile = HealthProfile { c_reactive_protein: f64::NAN, ..HealthProfile::default() };
        assert_eq!(
            validate_profile(&profile, &RuleSet::standard()),
            Err(InputError::NotFinite { field: "c_reactive_protein" })
        );

        let profile = HealthProfile { ldl_cholesterol: f64::INFINITY, ..HealthProfile::default() };
        assert_eq!(
            validate_profile(&profile, &RuleSet::standard()),
            Err(InputError::NotFinite { field: "ldl_cholesterol" })
        );
    }

    #[test]
    fn test_validate_missing_sleep_on_typed_profile() {
        assert_eq!(
            validate_profile(&HealthProfile::default(), &sleep_rules()),
            Err(InputError::MissingField { field: "sleep_duration" })
        );
        assert_eq!(validate_profile(&HealthProfile::default(), &RuleSet::standard()), Ok(()));
    }
}
