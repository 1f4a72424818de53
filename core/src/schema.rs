//! Declarative onboarding schema, compiled once into a reusable checker.
//!
//! The questionnaire shape is described as a flat table of field rules (dotted
//! path, required flag, value constraint). `[]` in a path descends into every
//! element of an array field, so per-element violations carry their index
//! (`nutrition.allergens[1]`). The checker collects every violation in a single
//! pass — it never stops at the first problem.

use std::sync::OnceLock;

use serde_json::{Value, json};

use crate::error::Violation;

/// Value constraint applied at the end of a rule path.
#[derive(Debug)]
enum Kind {
    Object,
    Bool,
    Str,
    Number { min: Option<f64> },
    Integer { min: Option<i64>, max: Option<i64> },
    IntegerOneOf(&'static [i64]),
    Enumerated(&'static [&'static str]),
}

struct FieldRule {
    path: &'static str,
    required: bool,
    kind: Kind,
}

const fn req(path: &'static str, kind: Kind) -> FieldRule {
    FieldRule {
        path,
        required: true,
        kind,
    }
}

const fn opt(path: &'static str, kind: Kind) -> FieldRule {
    FieldRule {
        path,
        required: false,
        kind,
    }
}

/// Allowed values for `timeFrequency.minutesPerSession`. Session lengths are a
/// closed set — the planner's block templates only exist for these durations.
pub const MINUTES_PER_SESSION: &[i64] = &[10, 20, 30, 45, 60, 75, 90];

const GOALS: &[&str] = &[
    "strength",
    "endurance",
    "weight_loss",
    "mobility",
    "general_fitness",
    "rehab",
];

const INJURIES: &[&str] = &["knee", "back", "shoulder", "wrist", "ankle", "other"];

const EQUIPMENT: &[&str] = &[
    "none",
    "bands",
    "dumbbells",
    "kettlebell",
    "barbell",
    "machines",
    "treadmill",
    "bike",
    "rower",
    "yoga_mat",
];

const STYLE_PREFERENCES: &[&str] = &[
    "calisthenics",
    "weightlifting",
    "yoga",
    "pilates",
    "martial_arts",
    "cross_training",
    "walking_running",
    "cycling",
    "hiit",
    "tai_chi",
];

const CULTURAL_ENV_TAGS: &[&str] = &[
    "india_yoga",
    "brazil_capoeira",
    "us_crossfit",
    "china_tai_chi",
    "japan_karate",
    "korea_taekwondo",
];

const DIETARY_PATTERNS: &[&str] = &[
    "omnivore",
    "vegetarian",
    "vegan",
    "pescetarian",
    "halal",
    "kosher",
    "gluten_free",
    "dairy_free",
    "low_fodmap",
    "other",
];

const DIETARY_LAWS: &[&str] = &[
    "halal",
    "kosher",
    "jain",
    "sattvic",
    "buddhist_veg",
    "ital_rastafarian",
];

const CULTURAL_FLAVORS: &[&str] = &[
    "japan",
    "korea",
    "mexico",
    "india",
    "italy",
    "mediterranean",
    "caribbean",
    "brazil",
    "china",
    "us",
    "middle_east",
    "thai",
    "vietnam",
];

const ALLERGENS: &[&str] = &[
    "peanut",
    "tree_nut",
    "milk",
    "egg",
    "wheat",
    "soy",
    "fish",
    "shellfish",
    "sesame",
    "gluten",
    "sulfites",
    "other",
];

const APPLIANCES: &[&str] = &[
    "stove",
    "oven",
    "microwave",
    "air_fryer",
    "slow_cooker",
    "pressure_cooker",
    "grill",
    "blender",
];

const RETAILERS: &[&str] = &[
    "whole_foods",
    "trader_joes",
    "kroger",
    "walmart",
    "costco",
    "aldi",
    "amazon_fresh",
    "instacart",
    "local_other",
];

const DEVICES: &[&str] = &["apple_health", "google_fit", "fitbit", "garmin", "cgm", "none"];

const METRICS: &[&str] = &["heart_rate", "steps", "sleep", "calories_burned", "glucose"];

const WEEKDAYS: &[&str] = &["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Onboarding schema v1.2.0 as a static rule table.
static RULES: &[FieldRule] = &[
    // meta
    opt("meta", Kind::Object),
    req("meta.version", Kind::Str),
    opt("meta.timestamp", Kind::Str),
    opt(
        "meta.source",
        Kind::Enumerated(&["ios", "android", "web", "import"]),
    ),
    // userProfile
    req("userProfile", Kind::Object),
    req("userProfile.age", Kind::Number { min: None }),
    req("userProfile.heightCm", Kind::Number { min: None }),
    req("userProfile.weightKg", Kind::Number { min: None }),
    opt(
        "userProfile.biologicalSex",
        Kind::Enumerated(&["female", "male", "intersex", "unspecified"]),
    ),
    opt("userProfile.restingHrBpm", Kind::Number { min: None }),
    opt("userProfile.conditions[]", Kind::Str),
    opt("userProfile.injuries[]", Kind::Enumerated(INJURIES)),
    opt(
        "userProfile.medicalClearance",
        Kind::Enumerated(&[
            "none",
            "self-cleared",
            "clinician-cleared",
            "rehab-program",
        ]),
    ),
    opt("userProfile.medications[]", Kind::Str),
    // goals
    req("goals", Kind::Object),
    req("goals.primary", Kind::Enumerated(GOALS)),
    opt("goals.secondary[]", Kind::Enumerated(GOALS)),
    opt(
        "goals.targetTimelineDays",
        Kind::Integer {
            min: Some(0),
            max: None,
        },
    ),
    // environment
    opt("environment", Kind::Object),
    opt(
        "environment.trainingLocation",
        Kind::Enumerated(&["home", "gym", "outdoor", "hybrid"]),
    ),
    opt("environment.equipment[]", Kind::Enumerated(EQUIPMENT)),
    opt(
        "environment.stylePreferences[]",
        Kind::Enumerated(STYLE_PREFERENCES),
    ),
    opt(
        "environment.culturalTags[]",
        Kind::Enumerated(CULTURAL_ENV_TAGS),
    ),
    // timeFrequency
    req("timeFrequency", Kind::Object),
    req(
        "timeFrequency.minutesPerSession",
        Kind::IntegerOneOf(MINUTES_PER_SESSION),
    ),
    req(
        "timeFrequency.daysPerWeek",
        Kind::Integer {
            min: Some(1),
            max: Some(7),
        },
    ),
    opt(
        "timeFrequency.restStrategy",
        Kind::Enumerated(&["auto", "user_selected"]),
    ),
    opt(
        "timeFrequency.intensityPreference",
        Kind::Enumerated(&["gentle", "moderate", "high"]),
    ),
    opt(
        "timeFrequency.impactLevel",
        Kind::Enumerated(&["low", "medium", "high"]),
    ),
    // nutrition
    opt("nutrition", Kind::Object),
    opt(
        "nutrition.dietaryPattern",
        Kind::Enumerated(DIETARY_PATTERNS),
    ),
    opt("nutrition.dietaryLaws[]", Kind::Enumerated(DIETARY_LAWS)),
    opt(
        "nutrition.culturalFlavors[]",
        Kind::Enumerated(CULTURAL_FLAVORS),
    ),
    opt(
        "nutrition.timingStyle",
        Kind::Enumerated(&["early_bird", "standard", "night_owl"]),
    ),
    opt(
        "nutrition.snackStyle",
        Kind::Enumerated(&["minimal", "balanced", "gamer_snacks"]),
    ),
    opt(
        "nutrition.proteinTargetGPerDay",
        Kind::Number { min: Some(0.0) },
    ),
    opt(
        "nutrition.calorieTargetKcalPerDay",
        Kind::Number { min: Some(0.0) },
    ),
    opt("nutrition.allergens[]", Kind::Enumerated(ALLERGENS)),
    opt("nutrition.foodAvoidances[]", Kind::Str),
    opt("nutrition.diabetesSupport", Kind::Object),
    opt(
        "nutrition.diabetesSupport.type",
        Kind::Enumerated(&["none", "type1", "type2", "gestational", "unspecified"]),
    ),
    opt(
        "nutrition.diabetesSupport.carbLimitPerMealG",
        Kind::Number { min: Some(0.0) },
    ),
    opt("nutrition.diabetesSupport.preferLowGI", Kind::Bool),
    // cookingProfile
    opt("cookingProfile", Kind::Object),
    opt(
        "cookingProfile.chefStyle",
        Kind::Enumerated(&[
            "quick",
            "gourmet",
            "batch",
            "one_pot",
            "grill",
            "minimal_cleanup",
        ]),
    ),
    opt(
        "cookingProfile.skillLevel",
        Kind::Enumerated(&["novice", "intermediate", "advanced"]),
    ),
    opt("cookingProfile.maxPrepMinutes", Kind::Number { min: Some(0.0) }),
    opt(
        "cookingProfile.budgetPerMealUSD",
        Kind::Number { min: Some(0.0) },
    ),
    opt(
        "cookingProfile.spiceTolerance",
        Kind::Enumerated(&["mild", "medium", "hot"]),
    ),
    opt("cookingProfile.appliances[]", Kind::Enumerated(APPLIANCES)),
    // pantryAndShopping
    opt("pantryAndShopping", Kind::Object),
    opt("pantryAndShopping.pantryItems[]", Kind::Str),
    opt(
        "pantryAndShopping.preferredRetailers[]",
        Kind::Enumerated(RETAILERS),
    ),
    opt("pantryAndShopping.storeZip", Kind::Str),
    opt("pantryAndShopping.allowSubstitutions", Kind::Bool),
    // localization
    opt("localization", Kind::Object),
    opt("localization.country", Kind::Str),
    opt("localization.region", Kind::Str),
    opt(
        "localization.seasonalityPreference",
        Kind::Enumerated(&["in_season_only", "prefer_in_season", "no_preference"]),
    ),
    // integrations
    opt("integrations", Kind::Object),
    opt("integrations.devices[]", Kind::Enumerated(DEVICES)),
    opt("integrations.metricsIngest[]", Kind::Enumerated(METRICS)),
    // behavior
    opt("behavior", Kind::Object),
    opt(
        "behavior.motivationArchetype",
        Kind::Enumerated(&[
            "self_improver",
            "competitor",
            "explorer",
            "collector",
            "unspecified",
        ]),
    ),
    opt("behavior.gamificationOptIn", Kind::Bool),
    opt(
        "behavior.notificationStyle",
        Kind::Enumerated(&["clinical", "system_update"]),
    ),
    opt(
        "behavior.streakTargetDays",
        Kind::Integer {
            min: Some(0),
            max: None,
        },
    ),
    req("behavior.sessionFeedbackHistory[].date", Kind::Str),
    req(
        "behavior.sessionFeedbackHistory[].perceivedDifficulty",
        Kind::Enumerated(&["too_easy", "just_right", "too_hard", "painful"]),
    ),
    // observanceConstraints
    opt("observanceConstraints", Kind::Object),
    opt("observanceConstraints.consentProvided", Kind::Bool),
    req("observanceConstraints.fastingWindows[].startDate", Kind::Str),
    req("observanceConstraints.fastingWindows[].endDate", Kind::Str),
    opt(
        "observanceConstraints.fastingWindows[].daylightOnly",
        Kind::Bool,
    ),
    opt(
        "observanceConstraints.restDays[]",
        Kind::Enumerated(WEEKDAYS),
    ),
    req("observanceConstraints.scheduleBlackouts[].from", Kind::Str),
    req("observanceConstraints.scheduleBlackouts[].to", Kind::Str),
    opt(
        "observanceConstraints.modestyConstraints",
        Kind::Enumerated(&["none", "prefer_gender_separate", "home_only"]),
    ),
];

#[derive(Debug, Clone, Copy)]
enum Segment {
    /// Plain object field.
    Field(&'static str),
    /// Array field; the rest of the path applies to every element.
    Each(&'static str),
}

struct CompiledRule {
    segments: Vec<Segment>,
    required: bool,
    kind: &'static Kind,
}

/// The rule table with paths pre-split into segments.
pub struct CompiledSchema {
    rules: Vec<CompiledRule>,
}

/// The compiled schema, built on first use and shared for the process lifetime.
pub fn compiled() -> &'static CompiledSchema {
    static SCHEMA: OnceLock<CompiledSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| CompiledSchema::compile(RULES))
}

impl CompiledSchema {
    fn compile(rules: &'static [FieldRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledRule {
                segments: rule
                    .path
                    .split('.')
                    .map(|seg| match seg.strip_suffix("[]") {
                        Some(name) => Segment::Each(name),
                        None => Segment::Field(seg),
                    })
                    .collect(),
                required: rule.required,
                kind: &rule.kind,
            })
            .collect();
        Self { rules }
    }

    /// Check a raw payload against every rule, collecting all violations.
    pub fn check(&self, raw: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        if !raw.is_object() {
            violations.push(
                Violation::new("(root)", "must be an object")
                    .with_params(json!({ "type": "object" })),
            );
            return violations;
        }
        for rule in &self.rules {
            apply(rule, &rule.segments, raw, "", &mut violations);
        }
        violations
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn apply(rule: &CompiledRule, segments: &[Segment], value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some((segment, rest)) = segments.split_first() else {
        check_kind(rule.kind, value, path, out);
        return;
    };

    // A mistyped ancestor is reported by the ancestor's own rule; nothing to
    // say about fields below it.
    let Some(obj) = value.as_object() else {
        return;
    };

    match segment {
        Segment::Field(name) => {
            let child_path = join(path, name);
            match obj.get(*name) {
                Some(child) => apply(rule, rest, child, &child_path, out),
                None => {
                    if rule.required && rest.is_empty() {
                        out.push(
                            Violation::new(child_path, "is required")
                                .with_params(json!({ "missingProperty": name })),
                        );
                    }
                }
            }
        }
        Segment::Each(name) => {
            let child_path = join(path, name);
            match obj.get(*name) {
                None => {}
                Some(Value::Array(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        apply(rule, rest, item, &format!("{child_path}[{index}]"), out);
                    }
                }
                Some(_) => {
                    // Every rule descending through this field hits the same
                    // mismatch; it belongs to the field, so report it once.
                    let already_reported = out
                        .iter()
                        .any(|v| v.path == child_path && v.message == "must be an array");
                    if !already_reported {
                        out.push(
                            Violation::new(child_path, "must be an array")
                                .with_params(json!({ "type": "array" })),
                        );
                    }
                }
            }
        }
    }
}

fn check_kind(kind: &Kind, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match kind {
        Kind::Object => {
            if !value.is_object() {
                out.push(
                    Violation::new(path, "must be an object")
                        .with_params(json!({ "type": "object" })),
                );
            }
        }
        Kind::Bool => {
            if !value.is_boolean() {
                out.push(
                    Violation::new(path, "must be a boolean")
                        .with_params(json!({ "type": "boolean" })),
                );
            }
        }
        Kind::Str => {
            if !value.is_string() {
                out.push(
                    Violation::new(path, "must be a string")
                        .with_params(json!({ "type": "string" })),
                );
            }
        }
        Kind::Number { min } => match value.as_f64() {
            Some(n) => {
                if let Some(min) = min {
                    if n < *min {
                        out.push(
                            Violation::new(path, format!("must be >= {min}"))
                                .with_params(json!({ "minimum": min })),
                        );
                    }
                }
            }
            None => {
                out.push(
                    Violation::new(path, "must be a number")
                        .with_params(json!({ "type": "number" })),
                );
            }
        },
        Kind::Integer { min, max } => match value.as_i64() {
            Some(n) => {
                if let Some(min) = min {
                    if n < *min {
                        out.push(
                            Violation::new(path, format!("must be >= {min}"))
                                .with_params(json!({ "minimum": min })),
                        );
                    }
                }
                if let Some(max) = max {
                    if n > *max {
                        out.push(
                            Violation::new(path, format!("must be <= {max}"))
                                .with_params(json!({ "maximum": max })),
                        );
                    }
                }
            }
            None => {
                out.push(
                    Violation::new(path, "must be an integer")
                        .with_params(json!({ "type": "integer" })),
                );
            }
        },
        Kind::IntegerOneOf(allowed) => {
            let ok = value.as_i64().is_some_and(|n| allowed.contains(&n));
            if !ok {
                out.push(
                    Violation::new(path, "must be one of the allowed values")
                        .with_params(json!({ "allowedValues": allowed })),
                );
            }
        }
        Kind::Enumerated(allowed) => {
            let ok = value.as_str().is_some_and(|s| allowed.contains(&s));
            if !ok {
                out.push(
                    Violation::new(path, "must be one of the allowed values")
                        .with_params(json!({ "allowedValues": allowed })),
                );
            }
        }
    }
}
