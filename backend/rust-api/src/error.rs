use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Every handler error. Rendered as `{"code": "CAMPUS_…", "message": "…"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required or session invalid")]
    AuthDeclined,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Insufficient permissions")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("You are already registered for this event!")]
    DuplicateRegistration,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Database error")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AuthDeclined | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateRegistration | ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::AuthDeclined => "CAMPUS_AUTH_DECLINED",
            ApiError::InvalidCredentials => "CAMPUS_INVALID_CREDENTIALS",
            ApiError::Forbidden => "CAMPUS_FORBIDDEN",
            ApiError::NotFound(_) => "CAMPUS_NOT_FOUND",
            ApiError::Validation(_) => "CAMPUS_VALIDATION",
            ApiError::DuplicateRegistration => "CAMPUS_DUPLICATE_REGISTRATION",
            ApiError::EmailTaken => "CAMPUS_EMAIL_TAKEN",
            ApiError::Database(_) | ApiError::Internal(_) => "CAMPUS_INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => tracing::error!("Database error: {:?}", e),
            ApiError::Internal(e) => tracing::error!("Internal error: {}", e),
            _ => {}
        }
        let body = serde_json::json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
