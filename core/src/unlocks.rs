//! Feature-gating rule engine over a validated onboarding record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::onboarding::{
    CulturalFlavor, DeviceIntegration, DietaryPattern, ImpactLevel, IntensityPref,
    MotivationArchetype, OnboardingRecord, PerceivedDifficulty, SnackStyle, StylePreference,
    TimingStyle, TrainingLocation,
};

/// A named signal that the profile matched one gating predicate.
///
/// `consistency_80_plus` is part of the published vocabulary but has no
/// evaluating predicate yet — it is awarded by the streak tracker, not by
/// onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnlockFlag {
    #[serde(rename = "freq_4plus")]
    Freq4plus,
    IntensityHigh,
    StyleMartialOrCalisthenics,
    #[serde(rename = "timeline_90plus")]
    Timeline90plus,
    FlavorJapanOrKorea,
    SnackGamer,
    TimingNightOwl,
    GamificationOn,
    TooEasyTrend,
    #[serde(rename = "consistency_80_plus")]
    Consistency80Plus,
    TechBiofeedbackInterest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PremiumTheme {
    Ascension,
    Cybernetic,
    Zen,
    Hero,
    Adventure,
}

/// Result of the unlock evaluation. Derived, never stored on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlockEvaluation {
    /// Triggered flags, in predicate-evaluation order.
    pub flags: Vec<UnlockFlag>,
    pub flag_count: usize,
    /// Premium-tier eligibility: at least three triggered flags.
    pub ascension_candidate: bool,
    /// Alternate theme recommendations, deduplicated, never `ascension`.
    pub other_candidates: Vec<PremiumTheme>,
    /// One fixed justification line per triggered predicate, in evaluation
    /// order. Snapshotted by clients, so wording changes are breaking.
    pub unlock_reason: Vec<String>,
}

/// Evaluate the fixed predicate list against a validated record.
///
/// Deterministic and total: the same record always yields the same flags,
/// count, and reasons, and absent optional sections simply leave their
/// predicates untriggered.
pub fn compute_unlocks(record: &OnboardingRecord) -> UnlockEvaluation {
    let mut flags = Vec::new();
    let mut reasons = Vec::new();
    let mut trigger = |flag: UnlockFlag, reason: &str| {
        flags.push(flag);
        reasons.push(reason.to_string());
    };

    let tf = &record.time_frequency;
    if tf.days_per_week >= 4 {
        trigger(UnlockFlag::Freq4plus, "Trains ≥4 days/week");
    }
    if tf.intensity_preference == Some(IntensityPref::High) {
        trigger(UnlockFlag::IntensityHigh, "High intensity preference");
    }

    let styles = record
        .environment
        .as_ref()
        .and_then(|env| env.style_preferences.as_deref())
        .unwrap_or_default();
    if styles
        .iter()
        .any(|s| matches!(s, StylePreference::MartialArts | StylePreference::Calisthenics))
    {
        trigger(
            UnlockFlag::StyleMartialOrCalisthenics,
            "Style preference includes martial arts or calisthenics",
        );
    }

    if record.goals.target_timeline_days.unwrap_or(0) >= 90 {
        trigger(UnlockFlag::Timeline90plus, "Target timeline ≥ 90 days");
    }

    let nutrition = record.nutrition.as_ref();
    let flavors = nutrition
        .and_then(|n| n.cultural_flavors.as_deref())
        .unwrap_or_default();
    if flavors
        .iter()
        .any(|f| matches!(f, CulturalFlavor::Japan | CulturalFlavor::Korea))
    {
        trigger(
            UnlockFlag::FlavorJapanOrKorea,
            "Cultural flavors include Japan/Korea",
        );
    }
    if nutrition.and_then(|n| n.snack_style) == Some(SnackStyle::GamerSnacks) {
        trigger(UnlockFlag::SnackGamer, "Snack style suggests gamer snacks");
    }
    if nutrition.and_then(|n| n.timing_style) == Some(TimingStyle::NightOwl) {
        trigger(UnlockFlag::TimingNightOwl, "Night-owl timing");
    }

    let behavior = record.behavior.as_ref();
    if behavior.and_then(|b| b.gamification_opt_in) == Some(true) {
        trigger(UnlockFlag::GamificationOn, "Gamification opt-in enabled");
    }
    let too_easy = behavior
        .and_then(|b| b.session_feedback_history.as_deref())
        .unwrap_or_default()
        .iter()
        .filter(|fb| fb.perceived_difficulty == PerceivedDifficulty::TooEasy)
        .count();
    if too_easy >= 2 {
        trigger(UnlockFlag::TooEasyTrend, "Multiple 'too easy' feedback entries");
    }

    let devices = record
        .integrations
        .as_ref()
        .and_then(|i| i.devices.as_deref())
        .unwrap_or_default();
    if devices.iter().any(|d| *d != DeviceIntegration::None) {
        trigger(
            UnlockFlag::TechBiofeedbackInterest,
            "Health device integrations connected",
        );
    }

    let flag_count = flags.len();
    let ascension_candidate = flag_count >= 3;
    let mut other_candidates = Vec::new();
    let mut recommend = |theme: PremiumTheme| {
        if theme != PremiumTheme::Ascension && !other_candidates.contains(&theme) {
            other_candidates.push(theme);
        }
    };

    let archetype = behavior.and_then(|b| b.motivation_archetype);
    let location = record
        .environment
        .as_ref()
        .and_then(|env| env.training_location);
    if archetype == Some(MotivationArchetype::Explorer) || location == Some(TrainingLocation::Outdoor)
    {
        recommend(PremiumTheme::Adventure);
    }
    if styles.contains(&StylePreference::Yoga)
        || nutrition.and_then(|n| n.dietary_pattern) == Some(DietaryPattern::Vegetarian)
        || tf.impact_level == Some(ImpactLevel::Low)
    {
        recommend(PremiumTheme::Zen);
    }
    let wants_metrics = record
        .integrations
        .as_ref()
        .and_then(|i| i.metrics_ingest.as_deref())
        .is_some_and(|m| !m.is_empty());
    if devices
        .iter()
        .any(|d| matches!(d, DeviceIntegration::AppleHealth | DeviceIntegration::Garmin))
        && wants_metrics
    {
        recommend(PremiumTheme::Cybernetic);
    }

    UnlockEvaluation {
        flags,
        flag_count,
        ascension_candidate,
        other_candidates,
        unlock_reason: reasons,
    }
}
