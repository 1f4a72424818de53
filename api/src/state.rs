use sqlx::PgPool;

use crate::config::LlmConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub http: reqwest::Client,
    pub llm: LlmConfig,
}
