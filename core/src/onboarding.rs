use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The complete structured questionnaire result for one user.
///
/// Wire format is the KaizenEdge onboarding JSON (v1.2.0): camelCase field
/// names, snake_case enum values. A record is only constructed through
/// [`crate::validator::validate_onboarding`] — once built it is immutable and
/// every derivation component (unlocks, exclusions, hints, workouts) is total
/// over it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    pub user_profile: UserProfile,
    pub goals: Goals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    pub time_frequency: TimeFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_profile: Option<CookingProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantry_and_shopping: Option<PantryAndShopping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<Localization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Integrations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observance_constraints: Option<ObservanceConstraints>,
}

/// Payload provenance. `version` tracks the questionnaire revision the client
/// was built against, not this crate's version.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PayloadSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSource {
    Ios,
    Android,
    Web,
    Import,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Must be 13..=100. The range is enforced by a dedicated boundary rule,
    /// not by the shape schema.
    pub age: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_sex: Option<BiologicalSex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injuries: Option<Vec<Injury>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_clearance: Option<MedicalClearance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    Female,
    Male,
    Intersex,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Injury {
    Knee,
    Back,
    Shoulder,
    Wrist,
    Ankle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MedicalClearance {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "self-cleared")]
    SelfCleared,
    #[serde(rename = "clinician-cleared")]
    ClinicianCleared,
    #[serde(rename = "rehab-program")]
    RehabProgram,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub primary: Goal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Vec<Goal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_timeline_days: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Endurance,
    WeightLoss,
    Mobility,
    GeneralFitness,
    Rehab,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_location: Option<TrainingLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<Equipment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_preferences: Option<Vec<StylePreference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_tags: Option<Vec<CulturalEnvTag>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLocation {
    Home,
    Gym,
    Outdoor,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    None,
    Bands,
    Dumbbells,
    Kettlebell,
    Barbell,
    Machines,
    Treadmill,
    Bike,
    Rower,
    YogaMat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StylePreference {
    Calisthenics,
    Weightlifting,
    Yoga,
    Pilates,
    MartialArts,
    CrossTraining,
    WalkingRunning,
    Cycling,
    Hiit,
    TaiChi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CulturalEnvTag {
    IndiaYoga,
    BrazilCapoeira,
    UsCrossfit,
    ChinaTaiChi,
    JapanKarate,
    KoreaTaekwondo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrequency {
    /// Restricted to {10, 20, 30, 45, 60, 75, 90} by the schema.
    pub minutes_per_session: u32,
    pub days_per_week: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_strategy: Option<RestStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_preference: Option<IntensityPref>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_level: Option<ImpactLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RestStrategy {
    Auto,
    UserSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntensityPref {
    Gentle,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_pattern: Option<DietaryPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_laws: Option<Vec<DietaryLaw>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_flavors: Option<Vec<CulturalFlavor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_style: Option<TimingStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snack_style: Option<SnackStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_target_g_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_target_kcal_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<Allergen>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_avoidances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diabetes_support: Option<DiabetesSupport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPattern {
    Omnivore,
    Vegetarian,
    Vegan,
    Pescetarian,
    Halal,
    Kosher,
    GlutenFree,
    DairyFree,
    LowFodmap,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietaryLaw {
    Halal,
    Kosher,
    Jain,
    Sattvic,
    BuddhistVeg,
    ItalRastafarian,
}

impl DietaryLaw {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryLaw::Halal => "halal",
            DietaryLaw::Kosher => "kosher",
            DietaryLaw::Jain => "jain",
            DietaryLaw::Sattvic => "sattvic",
            DietaryLaw::BuddhistVeg => "buddhist_veg",
            DietaryLaw::ItalRastafarian => "ital_rastafarian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CulturalFlavor {
    Japan,
    Korea,
    Mexico,
    India,
    Italy,
    Mediterranean,
    Caribbean,
    Brazil,
    China,
    Us,
    MiddleEast,
    Thai,
    Vietnam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimingStyle {
    EarlyBird,
    Standard,
    NightOwl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SnackStyle {
    Minimal,
    Balanced,
    GamerSnacks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Peanut,
    TreeNut,
    Milk,
    Egg,
    Wheat,
    Soy,
    Fish,
    Shellfish,
    Sesame,
    Gluten,
    Sulfites,
    Other,
}

impl Allergen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Allergen::Peanut => "peanut",
            Allergen::TreeNut => "tree_nut",
            Allergen::Milk => "milk",
            Allergen::Egg => "egg",
            Allergen::Wheat => "wheat",
            Allergen::Soy => "soy",
            Allergen::Fish => "fish",
            Allergen::Shellfish => "shellfish",
            Allergen::Sesame => "sesame",
            Allergen::Gluten => "gluten",
            Allergen::Sulfites => "sulfites",
            Allergen::Other => "other",
        }
    }
}

/// Non-clinical meal shaping preferences. Never used for dosing or treatment —
/// only for carb-aware meal ordering downstream.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesSupport {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub support_type: Option<DiabetesType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carb_limit_per_meal_g: Option<f64>,
    #[serde(rename = "preferLowGI", skip_serializing_if = "Option::is_none")]
    pub prefer_low_gi: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesType {
    None,
    Type1,
    Type2,
    Gestational,
    Unspecified,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CookingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chef_style: Option<ChefStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prep_minutes: Option<f64>,
    #[serde(rename = "budgetPerMealUSD", skip_serializing_if = "Option::is_none")]
    pub budget_per_meal_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice_tolerance: Option<SpiceTolerance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appliances: Option<Vec<Appliance>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChefStyle {
    Quick,
    Gourmet,
    Batch,
    OnePot,
    Grill,
    MinimalCleanup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Novice,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpiceTolerance {
    Mild,
    Medium,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    Stove,
    Oven,
    Microwave,
    AirFryer,
    SlowCooker,
    PressureCooker,
    Grill,
    Blender,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PantryAndShopping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantry_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_retailers: Option<Vec<Retailer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_substitutions: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Retailer {
    WholeFoods,
    TraderJoes,
    Kroger,
    Walmart,
    Costco,
    Aldi,
    AmazonFresh,
    Instacart,
    LocalOther,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonality_preference: Option<SeasonalityPreference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityPreference {
    InSeasonOnly,
    PreferInSeason,
    NoPreference,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceIntegration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_ingest: Option<Vec<MetricIngest>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIntegration {
    AppleHealth,
    GoogleFit,
    Fitbit,
    Garmin,
    Cgm,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricIngest {
    HeartRate,
    Steps,
    Sleep,
    CaloriesBurned,
    Glucose,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Behavior {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation_archetype: Option<MotivationArchetype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamification_opt_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_style: Option<NotificationStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_target_days: Option<i64>,
    /// Chronological difficulty self-reports, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_feedback_history: Option<Vec<SessionFeedback>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MotivationArchetype {
    SelfImprover,
    Competitor,
    Explorer,
    Collector,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStyle {
    Clinical,
    SystemUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionFeedback {
    pub date: String,
    pub perceived_difficulty: PerceivedDifficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PerceivedDifficulty {
    TooEasy,
    JustRight,
    TooHard,
    Painful,
}

/// Religious/cultural observance inputs. These only ever produce descriptive
/// hints (see [`crate::scheduling`]) — the planner never enforces them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObservanceConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_provided: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fasting_windows: Option<Vec<FastingWindow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_days: Option<Vec<Weekday>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_blackouts: Option<Vec<ScheduleBlackout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modesty_constraints: Option<ModestyConstraints>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FastingWindow {
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daylight_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlackout {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sun => "sun",
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModestyConstraints {
    None,
    PreferGenderSeparate,
    HomeOnly,
}
