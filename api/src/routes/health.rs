use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: String,
    pub version: String,
    pub database: bool,
    /// Whether the chat proxy has a provider key. Informational only; an
    /// unconfigured proxy does not degrade the service.
    pub chat_proxy: bool,
}

/// Readiness probe: round-trips a query to Postgres and reports whether the
/// chat proxy is configured.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok();
    let chat_proxy = state.llm.api_key.is_some();

    let http_status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(HealthResponse {
            status: if database { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            chat_proxy,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::HealthResponse;

    #[test]
    fn health_payload_reports_database_and_chat_proxy() {
        let body = serde_json::to_value(HealthResponse {
            status: "ok".to_string(),
            version: "1.2.0".to_string(),
            database: true,
            chat_proxy: false,
        })
        .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], true);
        assert_eq!(body["chatProxy"], false);
    }
}
