//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{MemStorage, OpenAiAssistantAdapter, OpenAiEmotionAdapter},
    config::Config,
    error::ApiError,
    web::{
        assistant_handler, create_journal_handler, get_journal_handler, insights_handler,
        list_journal_handler, rest::ApiDoc, state::AppState, strategies_handler,
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Create the Journal Store ---
    // In-memory reference store; constructed once and injected, never global.
    let store = Arc::new(MemStorage::new());

    // --- 3. Initialize Service Adapters ---
    let openai_config = OpenAIConfig::new().with_api_key(
        config
            .openai_api_key
            .as_ref()
            .ok_or_else(|| ApiError::Internal("OPENAI_API_KEY is required".to_string()))?,
    );
    let openai_client = Client::with_config(openai_config);

    let emotion_adapter = Arc::new(OpenAiEmotionAdapter::new(
        openai_client.clone(),
        config.emotion_model.clone(),
    ));
    let assistant_adapter = Arc::new(OpenAiAssistantAdapter::new(
        openai_client.clone(),
        config.assistant_model.clone(),
    ));

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        store,
        config: config.clone(),
        emotion_adapter,
        assistant_adapter,
    });

    // --- 5. Configure CORS for the Web Client ---
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:5173".parse::<HeaderValue>().unwrap())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // --- 6. Create the Web Router ---
    let api_router = Router::new()
        .route(
            "/api/journal",
            post(create_journal_handler).get(list_journal_handler),
        )
        .route("/api/journal/{id}", get(get_journal_handler))
        .route("/api/insights", get(insights_handler))
        .route("/api/strategies", get(strategies_handler))
        .route("/api/assistant", post(assistant_handler))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 7. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
