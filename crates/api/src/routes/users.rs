//! User registration route.

use axum::{extract::State, Json};
use domain::models::{CandidateUser, RegisteredUser};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::record_registration;

/// Register a new user.
///
/// POST /api/users/newuser
///
/// The company fields of the response come from the company directory when
/// the e-mail domain matches an entry, overriding the submitted name.
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(candidate): JsonBody<CandidateUser>,
) -> Result<Json<RegisteredUser>, ApiError> {
    let result = state.registration.register(candidate).await;

    record_registration(match &result {
        Ok(_) => "success",
        Err(err) => err.outcome(),
    });

    Ok(Json(result?))
}
