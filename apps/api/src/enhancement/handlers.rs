//! Axum route handlers for the Enhancement API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhancement::skills::SkillEntry;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub basic_summary: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub enhanced_summary: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<SkillEntry>,
}

/// Shared by the tips and CV endpoints.
#[derive(Debug, Deserialize)]
pub struct CvRequest {
    #[serde(default)]
    pub cv_content: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeCvResponse {
    pub optimized_cv: String,
}

fn require_job_description(job_description: &str) -> Result<(), AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/enhance/summary
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let enhanced_summary = state
        .enhancer
        .enhance_summary(&request.basic_summary, &request.job_description)
        .await;

    Ok(Json(SummaryResponse { enhanced_summary }))
}

/// POST /api/v1/enhance/skills
///
/// One entry per submitted skill in demo mode; live mode may rephrase names.
pub async fn handle_prioritize_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let skills = state
        .enhancer
        .prioritize_skills(&request.skills, &request.job_description)
        .await;

    Ok(Json(SkillsResponse { skills }))
}

/// POST /api/v1/enhance/tips
pub async fn handle_generate_tips(
    State(state): State<AppState>,
    Json(request): Json<CvRequest>,
) -> Result<Json<TipsResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let tips = state
        .enhancer
        .generate_tips(&request.cv_content, &request.job_description)
        .await;

    Ok(Json(TipsResponse { tips }))
}

/// POST /api/v1/enhance/cv
pub async fn handle_optimize_cv(
    State(state): State<AppState>,
    Json(request): Json<CvRequest>,
) -> Result<Json<OptimizeCvResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let optimized_cv = state
        .enhancer
        .optimize_cv(&request.cv_content, &request.job_description)
        .await;

    Ok(Json(OptimizeCvResponse { optimized_cv }))
}
