//! Non-binding scheduling hints from observance constraints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::onboarding::OnboardingRecord;

/// Descriptive scheduling preferences. The planner surfaces these to the user
/// but never enforces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingHints {
    /// Blackout windows rendered as `"<from>-<to>"`, in input order.
    pub blackout: Vec<String>,
    /// Requested weekly rest days, in input order.
    pub rest_days: Vec<String>,
    /// One entry per fasting window: `"daylight"` or `"time-bounded"`.
    pub fasting: Vec<String>,
}

pub fn scheduling_hints(record: &OnboardingRecord) -> SchedulingHints {
    let Some(observance) = &record.observance_constraints else {
        return SchedulingHints::default();
    };

    let blackout = observance
        .schedule_blackouts
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|b| format!("{}-{}", b.from, b.to))
        .collect();
    let rest_days = observance
        .rest_days
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|day| day.as_str().to_string())
        .collect();
    let fasting = observance
        .fasting_windows
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|window| {
            if window.daylight_only == Some(true) {
                "daylight".to_string()
            } else {
                "time-bounded".to_string()
            }
        })
        .collect();

    SchedulingHints {
        blackout,
        rest_days,
        fasting,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::scheduling_hints;
    use crate::validator::validate_onboarding;

    #[test]
    fn hints_pass_through_in_input_order() {
        let record = validate_onboarding(&json!({
            "userProfile": { "age": 30, "heightCm": 170, "weightKg": 70 },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": 30, "daysPerWeek": 3 },
            "observanceConstraints": {
                "consentProvided": true,
                "restDays": ["sat", "sun"],
                "scheduleBlackouts": [
                    { "from": "18:00", "to": "20:00" },
                    { "from": "06:00", "to": "07:00" }
                ],
                "fastingWindows": [
                    { "startDate": "2025-03-01", "endDate": "2025-03-30", "daylightOnly": true },
                    { "startDate": "2025-04-01", "endDate": "2025-04-02" }
                ]
            }
        }))
        .unwrap();

        let hints = scheduling_hints(&record);
        assert_eq!(hints.blackout, vec!["18:00-20:00", "06:00-07:00"]);
        assert_eq!(hints.rest_days, vec!["sat", "sun"]);
        assert_eq!(hints.fasting, vec!["daylight", "time-bounded"]);
    }

    #[test]
    fn absent_constraints_yield_empty_hints() {
        let record = validate_onboarding(&json!({
            "userProfile": { "age": 30, "heightCm": 170, "weightKg": 70 },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": 30, "daysPerWeek": 3 }
        }))
        .unwrap();

        let hints = scheduling_hints(&record);
        assert!(hints.blackout.is_empty());
        assert!(hints.rest_days.is_empty());
        assert!(hints.fasting.is_empty());
    }
}
