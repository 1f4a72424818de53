use std::net::SocketAddr;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KaizenEdge API",
        version = "1.2.0",
        description = "Fitness & nutrition onboarding: questionnaire validation, unlock evaluation, plan building, and the chat proxy behind the web UI."
    ),
    paths(
        routes::health::health_check,
        routes::onboarding::validate,
        routes::onboarding::plan,
        routes::shopping::build,
        routes::history::list_messages,
        routes::history::append_message,
        routes::chat::chat_status,
        routes::chat::chat_completion,
    ),
    components(schemas(
        routes::health::HealthResponse,
        routes::onboarding::ValidateOnboardingResponse,
        routes::onboarding::PlanResponse,
        routes::shopping::ShoppingListRequest,
        routes::shopping::ShoppingListResponse,
        routes::history::HistoryResponse,
        routes::history::ChatMessage,
        routes::history::AppendMessageRequest,
        routes::chat::ChatStatusResponse,
        routes::chat::ChatRequest,
        routes::chat::ChatResponse,
        kaizen_core::error::ApiError,
        kaizen_core::error::Violation,
        kaizen_core::unlocks::UnlockEvaluation,
        kaizen_core::unlocks::UnlockFlag,
        kaizen_core::unlocks::PremiumTheme,
        kaizen_core::scheduling::SchedulingHints,
        kaizen_core::workouts::WorkoutPlan,
        kaizen_core::workouts::WorkoutSession,
        kaizen_core::workouts::WorkoutBlock,
        kaizen_core::shopping::Meal,
        kaizen_core::shopping::Ingredient,
        kaizen_core::shopping::ShoppingLine,
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kaizen_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = config::AppConfig::from_env().expect("Invalid configuration");

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let app_state = state::AppState {
        db: pool,
        http: reqwest::Client::new(),
        llm: config.llm.clone(),
    };

    let cors_layer = middleware::cors::build_cors_layer(config.cors_origins.as_deref());

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(routes::health::router())
        .merge(routes::onboarding::router())
        .merge(routes::shopping::router())
        .merge(routes::history::router())
        .merge(routes::chat::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("KaizenEdge API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
