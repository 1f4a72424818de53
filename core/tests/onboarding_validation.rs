//! End-to-end validation and derivation tests over full onboarding payloads.

use rand::prelude::*;
use serde_json::{Value, json};

use kaizen_core::error::ValidationError;
use kaizen_core::schema::MINUTES_PER_SESSION;
use kaizen_core::unlocks::{UnlockFlag, compute_unlocks};
use kaizen_core::validator::validate_onboarding;

/// Known-good payload exercising most optional sections.
fn base_payload() -> Value {
    json!({
        "meta": { "version": "1.2.0", "timestamp": "2025-08-25T10:00:00Z", "source": "ios" },
        "userProfile": {
            "age": 35,
            "heightCm": 178,
            "weightKg": 86,
            "biologicalSex": "unspecified",
            "conditions": ["injuries"],
            "injuries": ["knee"],
            "medicalClearance": "self-cleared",
            "medications": ["Lisinopril"]
        },
        "goals": { "primary": "strength", "secondary": ["mobility"], "targetTimelineDays": 120 },
        "environment": {
            "trainingLocation": "hybrid",
            "equipment": ["dumbbells", "yoga_mat"],
            "stylePreferences": ["calisthenics", "hiit", "yoga"],
            "culturalTags": ["brazil_capoeira", "india_yoga"]
        },
        "timeFrequency": {
            "minutesPerSession": 45,
            "daysPerWeek": 5,
            "restStrategy": "auto",
            "intensityPreference": "high",
            "impactLevel": "medium"
        },
        "nutrition": {
            "dietaryPattern": "omnivore",
            "culturalFlavors": ["korea", "japan"],
            "snackStyle": "gamer_snacks",
            "timingStyle": "night_owl",
            "proteinTargetGPerDay": 150,
            "calorieTargetKcalPerDay": 2600,
            "allergens": ["peanut", "gluten"],
            "diabetesSupport": { "type": "type2", "carbLimitPerMealG": 45, "preferLowGI": true },
            "dietaryLaws": ["halal"],
            "foodAvoidances": ["pork", "alcohol"]
        },
        "integrations": { "devices": ["apple_health"], "metricsIngest": ["heart_rate", "sleep", "steps"] },
        "behavior": {
            "motivationArchetype": "competitor",
            "gamificationOptIn": true,
            "notificationStyle": "system_update",
            "streakTargetDays": 30,
            "sessionFeedbackHistory": [
                { "date": "2025-08-20", "perceivedDifficulty": "too_easy" },
                { "date": "2025-08-22", "perceivedDifficulty": "just_right" },
                { "date": "2025-08-24", "perceivedDifficulty": "too_easy" }
            ]
        }
    })
}

fn with_age(age: f64) -> Value {
    let mut payload = base_payload();
    payload["userProfile"]["age"] = json!(age);
    payload
}

#[test]
fn full_payload_validates_and_unlocks_deterministically() {
    let record = validate_onboarding(&base_payload()).unwrap();
    let unlocks = compute_unlocks(&record);

    assert!(unlocks.flag_count >= 3);
    for expected in [
        UnlockFlag::Freq4plus,
        UnlockFlag::IntensityHigh,
        UnlockFlag::StyleMartialOrCalisthenics,
        UnlockFlag::FlavorJapanOrKorea,
        UnlockFlag::TimingNightOwl,
        UnlockFlag::SnackGamer,
        UnlockFlag::GamificationOn,
        UnlockFlag::TooEasyTrend,
        UnlockFlag::TechBiofeedbackInterest,
    ] {
        assert!(unlocks.flags.contains(&expected), "missing {expected:?}");
    }
    assert!(unlocks.ascension_candidate);
    assert!(!unlocks.unlock_reason.is_empty());

    // Serialized form is stable across runs (clients snapshot this).
    let first = serde_json::to_string(&unlocks).unwrap();
    let second = serde_json::to_string(&compute_unlocks(&record)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn structurally_broken_payload_is_rejected_with_the_standard_message() {
    let bad = json!({ "meta": { "version": "1.0.0" } });
    let err = validate_onboarding(&bad).unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Onboarding payload failed validation:")
    );
    assert!(err.violations().len() >= 3);
}

#[test]
fn age_boundaries_are_inclusive() {
    assert!(validate_onboarding(&with_age(13.0)).is_ok());
    assert!(validate_onboarding(&with_age(100.0)).is_ok());

    for age in [12.0, 101.0] {
        match validate_onboarding(&with_age(age)) {
            Err(ValidationError::Boundary(violation)) => {
                assert_eq!(violation.path, "userProfile.age");
            }
            other => panic!("age {age} should fail the boundary rule, got {other:?}"),
        }
    }
}

#[test]
fn every_valid_minutes_and_days_combination_validates() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let minutes = *MINUTES_PER_SESSION.choose(&mut rng).unwrap();
        let days = rng.gen_range(1..=7);
        let age = rng.gen_range(13..=100);
        let height = rng.gen_range(100.0..230.0);
        let weight = rng.gen_range(25.0..350.0);

        let mut payload = base_payload();
        payload["userProfile"]["age"] = json!(age);
        payload["userProfile"]["heightCm"] = json!(height);
        payload["userProfile"]["weightKg"] = json!(weight);
        payload["timeFrequency"]["minutesPerSession"] = json!(minutes);
        payload["timeFrequency"]["daysPerWeek"] = json!(days);

        let result = validate_onboarding(&payload);
        assert!(
            result.is_ok(),
            "minutes={minutes} days={days} age={age} should validate: {:?}",
            result.err()
        );
    }
}

#[test]
fn lowering_training_frequency_removes_the_frequency_flag() {
    let mut payload = base_payload();
    payload["timeFrequency"]["daysPerWeek"] = json!(2);
    let record = validate_onboarding(&payload).unwrap();
    let unlocks = compute_unlocks(&record);
    assert!(!unlocks.flags.contains(&UnlockFlag::Freq4plus));
}

#[test]
fn dropping_japan_korea_flavors_removes_the_flavor_flag() {
    let mut payload = base_payload();
    payload["nutrition"]["culturalFlavors"] = json!(["mexico"]);
    let record = validate_onboarding(&payload).unwrap();
    let unlocks = compute_unlocks(&record);
    assert!(!unlocks.flags.contains(&UnlockFlag::FlavorJapanOrKorea));
}
