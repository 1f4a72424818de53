//! Boundary between raw JSON and a typed [`OnboardingRecord`].

use serde_json::{Value, json};

use crate::error::{ValidationError, Violation};
use crate::onboarding::OnboardingRecord;
use crate::schema;

pub const AGE_MIN: f64 = 13.0;
pub const AGE_MAX: f64 = 100.0;

/// Validate a raw payload and produce a typed record.
///
/// Runs in three steps:
/// 1. the compiled shape schema — all violations collected and reported
///    together;
/// 2. the hand-coded age boundary rule — intentionally reported alone when it
///    fires, mirroring the original intake behavior (see DESIGN.md);
/// 3. typed deserialization, which cannot fail for a payload the schema
///    accepted.
pub fn validate_onboarding(raw: &Value) -> Result<OnboardingRecord, ValidationError> {
    let violations = schema::compiled().check(raw);
    if !violations.is_empty() {
        return Err(ValidationError::Schema(violations));
    }

    let age = raw.pointer("/userProfile/age").and_then(Value::as_f64);
    match age {
        Some(age) if (AGE_MIN..=AGE_MAX).contains(&age) => {}
        _ => {
            return Err(ValidationError::Boundary(
                Violation::new(
                    "userProfile.age",
                    format!("must be >= {AGE_MIN} and <= {AGE_MAX}"),
                )
                .with_params(json!({ "minimum": AGE_MIN, "maximum": AGE_MAX })),
            ));
        }
    }

    serde_json::from_value(raw.clone()).map_err(|err| {
        ValidationError::Schema(vec![Violation::new("(root)", err.to_string())])
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::validate_onboarding;
    use crate::error::ValidationError;

    fn minimal_payload(age: f64) -> serde_json::Value {
        json!({
            "userProfile": { "age": age, "heightCm": 175.0, "weightKg": 74.0 },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": 45, "daysPerWeek": 3 }
        })
    }

    #[test]
    fn minimal_valid_payload_produces_a_typed_record() {
        let record = validate_onboarding(&minimal_payload(28.0)).unwrap();
        assert_eq!(record.time_frequency.days_per_week, 3);
        assert_eq!(record.time_frequency.minutes_per_session, 45);
        assert!(record.nutrition.is_none());
    }

    #[test]
    fn shape_errors_win_over_the_boundary_rule() {
        // Both a schema problem and an out-of-range age: only the schema
        // violations are reported, the boundary rule never runs.
        let mut payload = minimal_payload(150.0);
        payload["goals"]["primary"] = json!("conquest");
        let err = validate_onboarding(&payload).unwrap_err();
        match err {
            ValidationError::Schema(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].path, "goals.primary");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn age_boundary_fires_alone_after_shape_passes() {
        let err = validate_onboarding(&minimal_payload(150.0)).unwrap_err();
        match err {
            ValidationError::Boundary(violation) => {
                assert_eq!(violation.path, "userProfile.age");
            }
            other => panic!("expected boundary error, got {other:?}"),
        }
    }

    #[test]
    fn fractional_age_inside_the_range_is_accepted() {
        assert!(validate_onboarding(&minimal_payload(13.5)).is_ok());
    }
}
