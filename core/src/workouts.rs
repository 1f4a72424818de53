//! Weekly workout synthesis: template substitution, not periodization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::onboarding::{Injury, OnboardingRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutBlock {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_sec: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// `"Day N"` label within the weekly split.
    pub day: String,
    pub blocks: Vec<WorkoutBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub weekly_split: Vec<String>,
    pub sessions: Vec<WorkoutSession>,
}

/// Fraction of the session spent cooling down.
const COOL_DOWN_RATIO: f64 = 0.15;

/// Build one session per training day from the validated record.
///
/// Every session shares the same block sequence: warm-up, a lower-body
/// compound (swapped to a short range-of-motion variant for knee injuries),
/// push and pull accessories, and a cool-down sized at 15% of the session
/// length, rounded to whole minutes.
pub fn build_workouts(record: &OnboardingRecord) -> WorkoutPlan {
    let days = record.time_frequency.days_per_week;
    let minutes = record.time_frequency.minutes_per_session;
    let knee_injury = record
        .user_profile
        .injuries
        .as_deref()
        .is_some_and(|injuries| injuries.contains(&Injury::Knee));

    let weekly_split: Vec<String> = (1..=days).map(|n| format!("Day {n}")).collect();

    let squat_name = if knee_injury {
        "Goblet Squat (short ROM)"
    } else {
        "Squat"
    };
    let cool_down_minutes = (f64::from(minutes) * COOL_DOWN_RATIO).round() as u32;

    let base_blocks = vec![
        WorkoutBlock {
            name: "Warm-up".to_string(),
            sets: 1,
            reps: "5-10 min".to_string(),
            rest_sec: Some(0),
            intensity: Some("easy".to_string()),
        },
        WorkoutBlock {
            name: squat_name.to_string(),
            sets: 3,
            reps: "8-10".to_string(),
            rest_sec: Some(90),
            intensity: None,
        },
        WorkoutBlock {
            name: "Push-up".to_string(),
            sets: 3,
            reps: "8-12".to_string(),
            rest_sec: Some(90),
            intensity: None,
        },
        WorkoutBlock {
            name: "Row".to_string(),
            sets: 3,
            reps: "8-12".to_string(),
            rest_sec: Some(90),
            intensity: None,
        },
        WorkoutBlock {
            name: "Cool-down".to_string(),
            sets: 1,
            reps: format!("{cool_down_minutes} min"),
            rest_sec: Some(0),
            intensity: Some("easy".to_string()),
        },
    ];

    let sessions = weekly_split
        .iter()
        .map(|day| WorkoutSession {
            day: day.clone(),
            blocks: base_blocks.clone(),
        })
        .collect();

    WorkoutPlan {
        weekly_split,
        sessions,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::build_workouts;
    use crate::validator::validate_onboarding;

    fn payload(days: u32, minutes: u32, injuries: serde_json::Value) -> serde_json::Value {
        json!({
            "userProfile": { "age": 35, "heightCm": 178, "weightKg": 86, "injuries": injuries },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": minutes, "daysPerWeek": days }
        })
    }

    #[test]
    fn one_session_per_training_day() {
        let record = validate_onboarding(&payload(5, 45, json!([]))).unwrap();
        let plan = build_workouts(&record);
        assert_eq!(plan.weekly_split.len(), 5);
        assert_eq!(plan.sessions.len(), 5);
        assert_eq!(plan.weekly_split[0], "Day 1");
        assert_eq!(plan.weekly_split[4], "Day 5");
        assert_eq!(plan.sessions[2].day, "Day 3");
    }

    #[test]
    fn knee_injury_swaps_the_squat_in_every_session() {
        let record = validate_onboarding(&payload(4, 45, json!(["knee"]))).unwrap();
        let plan = build_workouts(&record);
        for session in &plan.sessions {
            let names: Vec<&str> = session.blocks.iter().map(|b| b.name.as_str()).collect();
            assert!(names.contains(&"Goblet Squat (short ROM)"));
            assert!(!names.contains(&"Squat"));
        }
    }

    #[test]
    fn uninjured_profile_keeps_the_standard_squat() {
        let record = validate_onboarding(&payload(3, 60, json!(["wrist"]))).unwrap();
        let plan = build_workouts(&record);
        assert!(plan.sessions[0].blocks.iter().any(|b| b.name == "Squat"));
    }

    #[test]
    fn cool_down_is_fifteen_percent_of_session_minutes() {
        // 45 * 0.15 = 6.75 → 7; 10 * 0.15 = 1.5 → 2 (round half up).
        let record = validate_onboarding(&payload(2, 45, json!([]))).unwrap();
        let plan = build_workouts(&record);
        let cool_down = plan.sessions[0].blocks.last().unwrap();
        assert_eq!(cool_down.name, "Cool-down");
        assert_eq!(cool_down.reps, "7 min");

        let record = validate_onboarding(&payload(2, 10, json!([]))).unwrap();
        let plan = build_workouts(&record);
        assert_eq!(plan.sessions[0].blocks.last().unwrap().reps, "2 min");
    }
}
