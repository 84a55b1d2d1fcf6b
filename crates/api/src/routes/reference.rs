//! Reference data routes used by the registration form.

use axum::{extract::State, Json};
use domain::models::{Company, YearsOfExperience};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/companies
pub async fn list_companies(State(state): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    Ok(Json(state.reference.list_companies().await?))
}

/// GET /api/years-of-experience
pub async fn list_years_of_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<YearsOfExperience>>, ApiError> {
    Ok(Json(state.reference.list_years_of_experience().await?))
}
