use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Newest messages are never truncated mid-conversation; the cap only bounds
/// very old sessions.
const HISTORY_LIMIT: i64 = 500;

const ALLOWED_ROLES: &[&str] = &["user", "assistant", "system"];

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/history", get(list_messages).post(append_message))
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    /// Chat session identifier (client-generated).
    pub session_id: String,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendMessageRequest {
    pub session_id: String,
    /// "user", "assistant", or "system"
    pub role: String,
    pub content: String,
}

/// List a session's chat messages, oldest first.
#[utoipa::path(
    get,
    path = "/v1/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Messages for the session, oldest first", body = HistoryResponse)
    ),
    tag = "chat"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, role, content, created_at
          FROM chat_messages
         WHERE session_id = $1
         ORDER BY created_at ASC
         LIMIT $2
        "#,
    )
    .bind(&query.session_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(HistoryResponse { messages }))
}

/// Append one message to a session.
#[utoipa::path(
    post,
    path = "/v1/history",
    request_body = AppendMessageRequest,
    responses(
        (status = 200, description = "The stored message", body = ChatMessage),
        (status = 400, description = "Empty content or unknown role", body = kaizen_core::error::ApiError)
    ),
    tag = "chat"
)]
pub async fn append_message(
    State(state): State<AppState>,
    Json(req): Json<AppendMessageRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    if !ALLOWED_ROLES.contains(&req.role.as_str()) {
        return Err(AppError::Validation {
            message: format!("role must be one of {ALLOWED_ROLES:?}"),
            field: Some("role".to_string()),
            received: Some(serde_json::Value::String(req.role)),
            docs_hint: None,
        });
    }
    if req.content.trim().is_empty() {
        return Err(AppError::Validation {
            message: "content must not be empty".to_string(),
            field: Some("content".to_string()),
            received: None,
            docs_hint: None,
        });
    }

    let message = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (id, session_id, role, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, role, content, created_at
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&req.session_id)
    .bind(&req.role)
    .bind(&req.content)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(message))
}
