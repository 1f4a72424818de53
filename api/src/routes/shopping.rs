use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use kaizen_core::shopping::{Meal, ShoppingLine, build_shopping_list};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/shopping-list", post(build))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Items the user already owns; matched case-insensitively.
    #[serde(default)]
    pub pantry: Vec<String>,
    pub preferred_retailer: Option<String>,
    #[serde(default)]
    pub allow_substitutions: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    pub lines: Vec<ShoppingLine>,
}

/// Aggregate a shopping list from a generated meal plan.
#[utoipa::path(
    post,
    path = "/v1/shopping-list",
    request_body = ShoppingListRequest,
    responses(
        (status = 200, description = "One line per distinct ingredient", body = ShoppingListResponse)
    ),
    tag = "plans"
)]
pub async fn build(Json(req): Json<ShoppingListRequest>) -> Json<ShoppingListResponse> {
    let lines = build_shopping_list(
        &req.meals,
        &req.pantry,
        req.preferred_retailer.as_deref(),
        req.allow_substitutions,
    );
    Json(ShoppingListResponse { lines })
}
