//! HTTP API for website generation and deployment.

use crate::config::ServerConfig;
use crate::request::{DeploySiteBody, GenerateSiteBody};
use crate::response::{DeploySiteResponse, ErrorBody, GenerateSiteResponse};
use crate::site;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, instrument, warn};
use vitrine_error::ConfigError;
use vitrine_interface::{DeploymentHost, TextGenerator};
use vitrine_models::{GeminiClient, VercelClient};

/// Largest accepted request body. Generated documents are shipped back
/// through the deploy endpoint, so this is well above typical pages.
const BODY_LIMIT_BYTES: usize = 5 * 1024 * 1024;

/// API server state: immutable configuration products shared by all
/// requests. Absent clients mean the corresponding credential is not
/// configured.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend; `None` enables fallback-template mode.
    pub generator: Option<Arc<dyn TextGenerator>>,
    /// Deployment host; `None` makes deploys a configuration error.
    pub host: Option<Arc<dyn DeploymentHost>>,
}

impl AppState {
    /// Creates a state from explicit seam implementations.
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        host: Option<Arc<dyn DeploymentHost>>,
    ) -> Self {
        Self { generator, host }
    }

    /// Builds the production clients out of the loaded configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        let generator = config.generator().api_key().as_ref().map(|key| {
            Arc::new(GeminiClient::new(key.clone(), config.generator().model()))
                as Arc<dyn TextGenerator>
        });

        let host = config.publisher().token().as_ref().map(|token| {
            Arc::new(
                VercelClient::new(token.clone())
                    .with_project_id(config.publisher().project_id().clone())
                    .with_project_name(config.publisher().project_name().clone())
                    .with_team_id(config.publisher().team_id().clone()),
            ) as Arc<dyn DeploymentHost>
        });

        Self { generator, host }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/website/generate", post(generate_website))
        .route("/api/website/deploy", post(deploy_website))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "ok": true })))
}

/// Generates a website for the submitted plan.
#[instrument(skip_all)]
pub async fn generate_website(
    State(state): State<AppState>,
    Json(body): Json<GenerateSiteBody>,
) -> Response {
    let Some(plan) = body.into_plan() else {
        warn!("Rejected generation request without a usable prompt");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("prompt is required")),
        )
            .into_response();
    };

    match site::generate_site(&plan, state.generator.as_deref()).await {
        Ok(generated) => {
            (StatusCode::OK, Json(GenerateSiteResponse::from(generated))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Website generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Deploys a finished document to the hosting provider.
#[instrument(skip_all)]
pub async fn deploy_website(
    State(state): State<AppState>,
    Json(body): Json<DeploySiteBody>,
) -> Response {
    let Some(html) = body.html() else {
        warn!("Rejected deploy request without a usable document");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("html is required")),
        )
            .into_response();
    };

    let Some(host) = state.host.as_deref() else {
        let err = ConfigError::new("VERCEL_TOKEN is not configured");
        error!(error = %err, "Deploy rejected: provider not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(err.to_string())),
        )
            .into_response();
    };

    match site::publish_site(
        &html,
        body.company_name().as_deref(),
        body.prompt().as_deref(),
        host,
    )
    .await
    {
        Ok(record) => (StatusCode::OK, Json(DeploySiteResponse::from(record))).into_response(),
        Err(e) => {
            error!(error = %e, "Website deploy failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(e.to_string())),
            )
                .into_response()
        }
    }
}
