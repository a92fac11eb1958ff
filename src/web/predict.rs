use crate::domain::profile::UserProfile;
use crate::engine::{self, HealthReport};
use crate::state::SharedState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use thiserror::Error;

/// The engine documents two caller-owned invariants instead of handling
/// them itself (BMI needs a positive height, the macro ratios need nonzero
/// calories). This layer is that caller, so the guards live here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("height must be positive")]
    NonPositiveHeight,
    #[error("calories must be positive")]
    NonPositiveCalories,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .with_state(state)
}

async fn predict(Json(profile): Json<UserProfile>) -> Result<Json<HealthReport>, ApiError> {
    validate(&profile)?;
    let report = engine::evaluate(&profile);
    tracing::debug!(
        score = report.score.score,
        category = %report.score.category,
        risks = report.risks.len(),
        "assessment computed"
    );
    Ok(Json(report))
}

fn validate(profile: &UserProfile) -> Result<(), ApiError> {
    if profile.height <= 0.0 {
        return Err(ApiError::NonPositiveHeight);
    }
    if profile.calories <= 0 {
        return Err(ApiError::NonPositiveCalories);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::baseline;

    #[test]
    fn test_validate_accepts_baseline() {
        assert_eq!(validate(&baseline()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_non_positive_height() {
        let mut profile = baseline();
        profile.height = 0.0;
        assert_eq!(validate(&profile), Err(ApiError::NonPositiveHeight));
        profile.height = -170.0;
        assert_eq!(validate(&profile), Err(ApiError::NonPositiveHeight));
    }

    #[test]
    fn test_validate_rejects_non_positive_calories() {
        let mut profile = baseline();
        profile.calories = 0;
        assert_eq!(validate(&profile), Err(ApiError::NonPositiveCalories));
    }

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(ApiError::NonPositiveHeight.to_string(), "height must be positive");
        assert_eq!(
            ApiError::NonPositiveCalories.to_string(),
            "calories must be positive"
        );
    }
}
