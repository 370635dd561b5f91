//! Axum router exposing the cookbook over HTTP
//!
//! - `POST /parse`   normalize a handwritten recipe name
//! - `POST /entry`   add an ingredient or recipe
//! - `GET /summary`  total cost and base ingredients of a recipe
//! - `GET /health`

use crate::core::cookbook::Cookbook;
use crate::core::normalize::normalize_recipe_name;
use crate::domain::model::{EntryCandidate, SummaryResult};
use crate::utils::error::{AdmissionError, CookbookError, ErrorCategory, Result};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryResponse {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: f64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl From<SummaryResult> for SummaryResponse {
    fn from(summary: SummaryResult) -> Self {
        Self {
            name: summary.recipe_name,
            cook_time: summary.total_cost,
            ingredients: summary
                .flattened_ingredients
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity { name, quantity })
                .collect(),
        }
    }
}

impl IntoResponse for CookbookError {
    fn into_response(self) -> Response {
        let status = match self.category() {
            ErrorCategory::Validation | ErrorCategory::Resolution => StatusCode::BAD_REQUEST,
            ErrorCategory::Configuration | ErrorCategory::System => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub fn create_router(cookbook: Cookbook) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse_name))
        .route("/entry", post(create_entry))
        .route("/summary", get(get_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(cookbook)
}

/// Bind `address` and serve until Ctrl-C.
pub async fn serve(cookbook: Cookbook, address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("🚀 Running on: http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(cookbook))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn health_check() -> &'static str {
    "OK"
}

/// POST /parse
async fn parse_name(body: std::result::Result<Json<ParseRequest>, JsonRejection>) -> Response {
    let input = match body {
        Ok(Json(request)) => request.input,
        Err(e) => {
            tracing::debug!("Rejected /parse body: {}", e.body_text());
            None
        }
    };

    match input.as_deref().and_then(normalize_recipe_name) {
        Some(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        None => {
            let error = serde_json::json!({
                "error": "unparseable_name",
                "message": "this string is cooked",
            });
            (StatusCode::BAD_REQUEST, Json(error)).into_response()
        }
    }
}

/// POST /entry
async fn create_entry(
    State(cookbook): State<Cookbook>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(body) = body.map_err(|e| AdmissionError::MalformedCandidate {
        reason: e.body_text(),
    })?;
    if !body.is_object() {
        return Err(AdmissionError::MalformedCandidate {
            reason: "entry must be a JSON object".to_string(),
        }
        .into());
    }
    let candidate: EntryCandidate =
        serde_json::from_value(body).map_err(|e| AdmissionError::MalformedCandidate {
            reason: e.to_string(),
        })?;

    cookbook.admit(candidate).await?;
    Ok(StatusCode::OK)
}

/// GET /summary?name=
async fn get_summary(
    State(cookbook): State<Cookbook>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>> {
    let name = query.name.unwrap_or_default();
    let summary = cookbook.summarize(&name).await?;
    Ok(Json(summary.into()))
}
