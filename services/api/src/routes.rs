use crate::infra::{fold_choices, sample_catalog, AppState, RecordedChoice};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use scorecard::assessment::catalog::{Catalog, CatalogImportError};
use scorecard::assessment::export::{ExportDocument, SessionMetadata};
use scorecard::assessment::report::Report;
use scorecard::assessment;
use scorecard::config::ScoringConfig;
use scorecard::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentReportRequest {
    /// Catalog to score against; the built-in questionnaire when omitted.
    #[serde(default)]
    pub(crate) catalog: Option<Catalog>,
    #[serde(default)]
    pub(crate) choices: Vec<RecordedChoice>,
    /// Per-criterion recommendation cap override.
    #[serde(default)]
    pub(crate) cap: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReportResponse {
    pub(crate) answered: usize,
    pub(crate) total_questions: usize,
    pub(crate) report: Report,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentExportRequest {
    #[serde(default)]
    pub(crate) catalog: Option<Catalog>,
    #[serde(default)]
    pub(crate) choices: Vec<RecordedChoice>,
    pub(crate) organization_name: String,
    #[serde(default)]
    pub(crate) user_email: Option<String>,
    /// Override the document date (defaults to today).
    #[serde(default)]
    pub(crate) generated_on: Option<NaiveDate>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessment/catalog",
            axum::routing::get(catalog_endpoint),
        )
        .route(
            "/api/v1/assessment/report",
            axum::routing::post(assessment_report_endpoint),
        )
        .route(
            "/api/v1/assessment/export",
            axum::routing::post(assessment_export_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint() -> Json<Catalog> {
    Json(sample_catalog())
}

pub(crate) async fn assessment_report_endpoint(
    Extension(scoring): Extension<ScoringConfig>,
    Json(payload): Json<AssessmentReportRequest>,
) -> Result<Json<AssessmentReportResponse>, AppError> {
    let AssessmentReportRequest {
        catalog,
        choices,
        cap,
    } = payload;

    let catalog = catalog.unwrap_or_else(sample_catalog);
    let answers = fold_choices(&catalog, &choices).map_err(CatalogImportError::from)?;
    let cap = cap.unwrap_or(scoring.recommendation_cap);

    let report = assessment::assemble(&catalog, &answers, cap);

    Ok(Json(AssessmentReportResponse {
        answered: answers.answered_count(),
        total_questions: catalog.len(),
        report,
    }))
}

pub(crate) async fn assessment_export_endpoint(
    Json(payload): Json<AssessmentExportRequest>,
) -> Result<Json<ExportDocument>, AppError> {
    let AssessmentExportRequest {
        catalog,
        choices,
        organization_name,
        user_email,
        generated_on,
    } = payload;

    let catalog = catalog.unwrap_or_else(sample_catalog);
    let answers = fold_choices(&catalog, &choices).map_err(CatalogImportError::from)?;
    let generated_on = generated_on.unwrap_or_else(|| Local::now().date_naive());

    let document = ExportDocument::build(
        &catalog,
        &answers,
        SessionMetadata {
            organization_name,
            user_email,
        },
        generated_on,
    );

    Ok(Json(document))
}
