//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use aceso_core::domain::{AssistantMessage, InputMode, NewJournalEntry};
use aceso_core::ports::PortError;
use aceso_core::{insights, strategies};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        create_journal_handler,
        list_journal_handler,
        get_journal_handler,
        insights_handler,
        strategies_handler,
        assistant_handler,
    ),
    components(
        schemas(CreateJournalRequest, AssistantRequest, AssistantResponse)
    ),
    tags(
        (name = "Aceso Wellness API", description = "API endpoints for the mental-wellness journal.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Request and Response Structs
//=========================================================================================

/// The payload for creating a new journal entry. Emotions and mood rating
/// are attached server-side by the analyzer, never by the caller.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJournalRequest {
    pub content: String,
    #[schema(value_type = String, example = "text")]
    pub input_mode: InputMode,
}

/// Query parameters for the strategy catalog.
#[derive(Deserialize)]
pub struct StrategiesQuery {
    /// Comma-separated free-text emotion labels, e.g. `anxious,tired`.
    pub emotions: Option<String>,
}

/// The payload for one companion-chat exchange.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub message: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub conversation_history: Vec<AssistantMessage>,
}

/// The companion's reply.
#[derive(Serialize, ToSchema)]
pub struct AssistantResponse {
    pub response: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Create a new journal entry.
///
/// The entry text is sent to the emotion analyzer and the derived analysis
/// and mood rating are stored with the entry. Analyzer failure is not fatal:
/// the entry is persisted unanalyzed and remains analyzable later.
#[utoipa::path(
    post,
    path = "/api/journal",
    request_body = CreateJournalRequest,
    responses(
        (status = 201, description = "Journal entry created successfully"),
        (status = 400, description = "Empty content or invalid input mode"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_journal_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateJournalRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.content.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Journal content must not be empty".to_string(),
        ));
    }

    let (emotions, mood_rating) = match app_state.emotion_adapter.analyze(&req.content).await {
        Ok(analysis) => {
            let rating = analysis.mood_rating();
            (Some(analysis), Some(rating))
        }
        Err(e) => {
            // An entry without emotions is a valid, analyzable-later state.
            warn!("Emotion analysis failed, storing entry unanalyzed: {:?}", e);
            (None, None)
        }
    };

    let result = app_state
        .store
        .create_entry(NewJournalEntry {
            content: req.content,
            input_mode: req.input_mode,
            emotions,
            mood_rating,
        })
        .await;

    match result {
        Ok(entry) => Ok((StatusCode::CREATED, Json(entry))),
        Err(PortError::InvalidInput(msg)) => Err((StatusCode::BAD_REQUEST, msg)),
        Err(e) => {
            error!("Failed to create journal entry: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create journal entry".to_string(),
            ))
        }
    }
}

/// List all journal entries, newest first.
#[utoipa::path(
    get,
    path = "/api/journal",
    responses(
        (status = 200, description = "All journal entries, newest first"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_journal_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let entries = app_state.store.list_entries().await.map_err(|e| {
        error!("Failed to fetch journal entries: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch journal entries".to_string(),
        )
    })?;
    Ok(Json(entries))
}

/// Fetch a single journal entry by id.
#[utoipa::path(
    get,
    path = "/api/journal/{id}",
    params(
        ("id" = Uuid, Path, description = "The journal entry id")
    ),
    responses(
        (status = 200, description = "The journal entry"),
        (status = 404, description = "No entry with this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_journal_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match app_state.store.get_entry(id).await {
        Ok(entry) => Ok(Json(entry)),
        Err(PortError::NotFound(msg)) => Err((StatusCode::NOT_FOUND, msg)),
        Err(e) => {
            error!("Failed to fetch journal entry: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch journal entry".to_string(),
            ))
        }
    }
}

/// Compute aggregated mood insights over all entries.
///
/// Recomputed on every read from a consistent snapshot of the store.
#[utoipa::path(
    get,
    path = "/api/insights",
    responses(
        (status = 200, description = "Weekly average, trend, emotion distribution, totals and streak"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn insights_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let entries = app_state.store.list_entries().await.map_err(|e| {
        error!("Failed to fetch insights: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch insights".to_string(),
        )
    })?;
    Ok(Json(insights::mood_insight(&entries, Utc::now())))
}

/// Fetch the coping-strategy catalog, personalized by recent emotions.
///
/// With an `emotions` query parameter, matched strategies carry a
/// `personalizedReason` and sort to the front of the catalog.
#[utoipa::path(
    get,
    path = "/api/strategies",
    params(
        ("emotions" = Option<String>, Query, description = "Comma-separated free-text emotion labels")
    ),
    responses(
        (status = 200, description = "The full strategy catalog, optionally annotated")
    )
)]
pub async fn strategies_handler(
    Query(query): Query<StrategiesQuery>,
) -> impl IntoResponse {
    let labels: Vec<String> = query
        .emotions
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    Json(strategies::recommend(&labels))
}

/// Exchange one message with the wellness companion.
#[utoipa::path(
    post,
    path = "/api/assistant",
    request_body = AssistantRequest,
    responses(
        (status = 200, description = "The companion's reply", body = AssistantResponse),
        (status = 400, description = "Missing message"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn assistant_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<AssistantRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.message.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Message is required".to_string()));
    }

    let reply = app_state
        .assistant_adapter
        .chat(&req.message, &req.conversation_history)
        .await
        .map_err(|e| {
            error!("Failed to get assistant response: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get assistant response".to_string(),
            )
        })?;

    Ok(Json(AssistantResponse { response: reply }))
}
