use axum::{Json, Router, routing::post};
use serde::Serialize;
use utoipa::ToSchema;

use kaizen_core::error::ApiError;
use kaizen_core::exclusions::compute_dietary_exclusions;
use kaizen_core::scheduling::{SchedulingHints, scheduling_hints};
use kaizen_core::unlocks::{UnlockEvaluation, compute_unlocks};
use kaizen_core::validator::validate_onboarding;
use kaizen_core::workouts::{WorkoutPlan, build_workouts};

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/onboarding/validate", post(validate))
        .route("/v1/onboarding/plan", post(plan))
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOnboardingResponse {
    pub valid: bool,
}

/// All derivations over one validated record, assembled for the client.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub unlock_evaluation: UnlockEvaluation,
    pub dietary_exclusions: Vec<String>,
    pub scheduling_hints: SchedulingHints,
    pub workout_plan: WorkoutPlan,
}

/// Validate an onboarding questionnaire payload.
///
/// Schema violations are collected exhaustively and returned in one response;
/// the age boundary rule is reported on its own when it fires.
#[utoipa::path(
    post,
    path = "/v1/onboarding/validate",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Payload is a valid onboarding record", body = ValidateOnboardingResponse),
        (status = 400, description = "Payload rejected, message lists every violation", body = ApiError)
    ),
    tag = "onboarding"
)]
pub async fn validate(
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<ValidateOnboardingResponse>, AppError> {
    validate_onboarding(&raw)?;
    Ok(Json(ValidateOnboardingResponse { valid: true }))
}

/// Validate a payload, then run every derivation over the same record.
#[utoipa::path(
    post,
    path = "/v1/onboarding/plan",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Unlocks, exclusions, hints, and workout plan", body = PlanResponse),
        (status = 400, description = "Payload rejected", body = ApiError)
    ),
    tag = "onboarding"
)]
pub async fn plan(Json(raw): Json<serde_json::Value>) -> Result<Json<PlanResponse>, AppError> {
    let record = validate_onboarding(&raw)?;
    Ok(Json(PlanResponse {
        unlock_evaluation: compute_unlocks(&record),
        dietary_exclusions: compute_dietary_exclusions(&record),
        scheduling_hints: scheduling_hints(&record),
        workout_plan: build_workouts(&record),
    }))
}
