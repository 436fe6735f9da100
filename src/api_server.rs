// Axum API Server Module
//
// Purpose: REST API over the farm scorer (scoring, yield, reports, advice)
// Scoring is CPU-bound and runs on the blocking thread pool.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use rayon::prelude::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::data::Catalog;
use crate::error::ScoringError;
use crate::explanation::{advise_or_fallback, CsvFormatter, OfflineAdvisor};
use crate::profile::FarmProfile;
use crate::scorer::{FarmScorer, ScoringResult};
use crate::utils::ScoringConstants;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<FarmScorer>,
}

impl AppState {
    /// Load catalog and constants (builtin defaults when no path is given)
    pub fn new(catalog_path: Option<&Path>, constants_path: Option<&Path>) -> anyhow::Result<Self> {
        let catalog = match catalog_path {
            Some(path) => Catalog::load(path)?,
            None => {
                tracing::info!("No catalog path configured, using builtin catalog");
                Catalog::builtin()
            }
        };

        let constants = match constants_path {
            Some(path) => ScoringConstants::load(path)?,
            None => ScoringConstants::default(),
        };

        tracing::info!("Scorer ready: {} crops", catalog.len());
        Ok(Self::from_scorer(FarmScorer::new(Arc::new(catalog), Arc::new(constants))))
    }

    pub fn from_scorer(scorer: FarmScorer) -> Self {
        Self {
            scorer: Arc::new(scorer),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Reference data
        .route("/api/catalog", get(get_catalog))

        // Scoring endpoints
        .route("/api/score", post(score_farm))
        .route("/api/score/batch", post(score_batch))
        .route("/api/yield", post(predict_yield))

        // Presentation endpoints
        .route("/api/report/csv", post(report_csv))
        .route("/api/advice", post(advice))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

/// JSON body extractor whose rejections are reported through `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Profiles are kept as raw JSON so one malformed entry fails alone
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub profiles: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct YieldRequest {
    pub profile: FarmProfile,
    pub crop: String,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    let crops = state.scorer.catalog().crops();
    Json(serde_json::json!({
        "count": crops.len(),
        "crops": crops,
    }))
}

/// Score on the blocking pool
async fn score_blocking(state: &AppState, profile: FarmProfile) -> Result<ScoringResult, AppError> {
    let scorer = state.scorer.clone();
    let result = tokio::task::spawn_blocking(move || scorer.score(&profile))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;
    Ok(result)
}

async fn score_farm(
    State(state): State<AppState>,
    AppJson(profile): AppJson<FarmProfile>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::info!("Scoring farm: {} acres, {} soil", profile.area_acres, profile.soil_type);

    let result = score_blocking(&state, profile).await?;

    Ok(Json(serde_json::to_value(result).map_err(|e| AppError::Internal(e.to_string()))?))
}

async fn score_batch(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BatchRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::info!("Batch scoring {} farms", payload.profiles.len());

    let scorer = state.scorer.clone();
    let results = tokio::task::spawn_blocking(move || {
        payload
            .profiles
            .par_iter()
            .map(|value| FarmProfile::from_value(value).and_then(|profile| scorer.score(&profile)))
            .collect::<Vec<Result<ScoringResult, ScoringError>>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let items: Vec<serde_json::Value> = results
        .into_iter()
        .map(|r| match r {
            Ok(result) => serde_json::json!({ "ok": result }),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        })
        .collect();

    Ok(Json(serde_json::json!({ "count": items.len(), "results": items })))
}

async fn predict_yield(
    State(state): State<AppState>,
    AppJson(payload): AppJson<YieldRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.scorer.catalog().get(&payload.crop).is_none() {
        return Err(AppError::NotFound(format!("Crop '{}' not in catalog", payload.crop)));
    }

    let predicted = state.scorer.predict_yield_for(&payload.profile, &payload.crop)?;

    Ok(Json(serde_json::json!({
        "crop": payload.crop,
        "predicted_yield_per_acre": predicted,
    })))
}

async fn report_csv(
    State(state): State<AppState>,
    AppJson(profile): AppJson<FarmProfile>,
) -> Result<impl IntoResponse, AppError> {
    let result = score_blocking(&state, profile).await?;
    let csv = CsvFormatter::format(&result).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"farm_report.csv\""),
        ],
        csv,
    ))
}

async fn advice(
    State(state): State<AppState>,
    AppJson(profile): AppJson<FarmProfile>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = score_blocking(&state, profile.clone()).await?;
    let advice = advise_or_fallback(&OfflineAdvisor, &profile, &result);

    Ok(Json(serde_json::to_value(advice).map_err(|e| AppError::Internal(e.to_string()))?))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Scoring(ScoringError),
    /// Body could not be read as JSON at all (content type, size)
    Rejected(StatusCode, String),
    NotFound(String),
    Internal(String),
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        AppError::Scoring(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            // Malformed JSON, missing fields and out-of-domain labels
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Scoring(ScoringError::invalid("body", message))
            }
            other => AppError::Rejected(other.status(), message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Scoring(e @ ScoringError::InvalidInput { .. }) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Scoring(e @ ScoringError::EmptyCatalog) => {
                (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
            }
            AppError::Scoring(e @ ScoringError::NegativeYield { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Rejected(status, msg) => (status, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
