//! Dietary exclusion tags derived from the nutrition and medication inputs.

use std::collections::BTreeSet;

use crate::onboarding::OnboardingRecord;

/// Collect category-prefixed exclusion tags from a validated record.
///
/// Tags are `allergen:<v>`, `law:<v>`, `avoid:<v>`, plus the literal
/// `medications:present` when any medication is listed. The result is
/// deduplicated and lexicographically sorted, so identical records always
/// produce identical output.
pub fn compute_dietary_exclusions(record: &OnboardingRecord) -> Vec<String> {
    let mut tags = BTreeSet::new();

    if let Some(nutrition) = &record.nutrition {
        for allergen in nutrition.allergens.as_deref().unwrap_or_default() {
            tags.insert(format!("allergen:{}", allergen.as_str()));
        }
        for law in nutrition.dietary_laws.as_deref().unwrap_or_default() {
            tags.insert(format!("law:{}", law.as_str()));
        }
        for avoided in nutrition.food_avoidances.as_deref().unwrap_or_default() {
            tags.insert(format!("avoid:{avoided}"));
        }
    }

    let has_medications = record
        .user_profile
        .medications
        .as_deref()
        .is_some_and(|m| !m.is_empty());
    if has_medications {
        tags.insert("medications:present".to_string());
    }

    tags.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::compute_dietary_exclusions;
    use crate::validator::validate_onboarding;

    #[test]
    fn tags_are_deduplicated_and_sorted() {
        let record = validate_onboarding(&json!({
            "userProfile": {
                "age": 30, "heightCm": 170, "weightKg": 70,
                "medications": ["lisinopril"]
            },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": 45, "daysPerWeek": 4 },
            "nutrition": {
                "allergens": ["peanut", "peanut"],
                "dietaryLaws": ["halal"],
                "foodAvoidances": ["alcohol", "alcohol"]
            }
        }))
        .unwrap();

        let out = compute_dietary_exclusions(&record);
        assert_eq!(
            out,
            vec![
                "allergen:peanut",
                "avoid:alcohol",
                "law:halal",
                "medications:present"
            ]
        );
        // Identical record, identical output — byte for byte.
        assert_eq!(out, compute_dietary_exclusions(&record));
    }

    #[test]
    fn empty_medication_list_adds_no_tag() {
        let record = validate_onboarding(&json!({
            "userProfile": { "age": 30, "heightCm": 170, "weightKg": 70, "medications": [] },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": 45, "daysPerWeek": 4 }
        }))
        .unwrap();
        assert!(compute_dietary_exclusions(&record).is_empty());
    }

    #[test]
    fn absent_nutrition_block_contributes_nothing() {
        let record = validate_onboarding(&json!({
            "userProfile": { "age": 30, "heightCm": 170, "weightKg": 70, "medications": ["metformin"] },
            "goals": { "primary": "strength" },
            "timeFrequency": { "minutesPerSession": 45, "daysPerWeek": 4 }
        }))
        .unwrap();
        assert_eq!(
            compute_dietary_exclusions(&record),
            vec!["medications:present"]
        );
    }
}
