use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_PROMPT: &str = "Say hello from KaizenEdge.";

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/chat", get(chat_status).post(chat_completion))
}

#[derive(Serialize, ToSchema)]
pub struct ChatStatusResponse {
    pub ok: bool,
    pub models: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
    pub prompt: Option<String>,
    /// Overrides the configured model for this request.
    pub model: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    pub ok: bool,
    /// Raw completion payload from the provider, passed through untouched.
    pub data: serde_json::Value,
}

/// Report whether the chat proxy is configured and which model it uses.
#[utoipa::path(
    get,
    path = "/v1/chat",
    responses(
        (status = 200, description = "Proxy configured", body = ChatStatusResponse),
        (status = 500, description = "No API key configured", body = ChatStatusResponse)
    ),
    tag = "chat"
)]
pub async fn chat_status(State(state): State<AppState>) -> impl IntoResponse {
    let ok = state.llm.api_key.is_some();
    let models = if ok {
        vec![state.llm.model.clone()]
    } else {
        Vec::new()
    };
    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ChatStatusResponse { ok, models }))
}

/// Forward a single-turn prompt to the configured LLM provider.
#[utoipa::path(
    post,
    path = "/v1/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Provider completion", body = ChatResponse),
        (status = 502, description = "Provider returned an error", body = kaizen_core::error::ApiError)
    ),
    tag = "chat"
)]
pub async fn chat_completion(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(api_key) = state.llm.api_key.clone() else {
        return Err(AppError::Internal("OPENAI_API_KEY is not set".to_string()));
    };

    let prompt = req.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    let model = req.model.unwrap_or_else(|| state.llm.model.clone());

    let response = state
        .http
        .post(format!("{}/chat/completions", state.llm.base_url))
        .bearer_auth(api_key)
        .json(&json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0.2
        }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let data: serde_json::Value = response.json().await?;
    Ok(Json(ChatResponse { ok: true, data }))
}
