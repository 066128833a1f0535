//! Axum route handlers for ATS scoring.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::ats::analyze_resume;
use crate::ats::report::AtsReport;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resumes::store;
use crate::state::AppState;

/// POST /api/v1/ats/analyze
///
/// Scores a posted resume snapshot. Pure computation, so the wizard can call
/// this on every step change without saving first.
pub async fn handle_analyze(Json(resume): Json<ResumeData>) -> Json<AtsReport> {
    Json(analyze_resume(&resume))
}

/// GET /api/v1/resumes/:id/ats
///
/// Loads a stored snapshot and scores it. The score is recomputed on every
/// call; nothing is cached.
pub async fn handle_analyze_stored(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AtsReport>, AppError> {
    let row = store::fetch_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let resume: ResumeData = serde_json::from_value(row.data)
        .map_err(|e| AppError::Validation(format!("stored snapshot is not resume data: {e}")))?;

    Ok(Json(analyze_resume(&resume)))
}
