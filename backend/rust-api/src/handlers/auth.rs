use axum::{extract::State, http::StatusCode, response::Json, Extension};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::{issue_token, AuthUser};
use crate::models::{Profile, ProfileRow, Role};
use crate::AppState;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub profile: Profile,
}

impl SignupRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::Validation("A valid email address is required".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if self.full_name.trim().is_empty() {
            return Err(ApiError::Validation("Full name is required".to_string()));
        }
        Ok(())
    }
}

fn session_for(state: &AppState, profile: Profile) -> Result<SessionResponse, ApiError> {
    let access_token = issue_token(
        &profile.id,
        &profile.email,
        profile.role,
        &state.config.jwt_secret,
        state.config.jwt_expiration,
    )
    .map_err(|e| ApiError::Internal(format!("Failed to issue token: {}", e)))?;
    Ok(SessionResponse { access_token, profile })
}

pub(crate) fn row_to_profile(row: ProfileRow) -> Result<Profile, ApiError> {
    row.into_profile().map_err(ApiError::Internal)
}

/// `POST /api/auth/signup`: create a profile with the chosen role and start a session.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    payload.validate()?;
    let email = payload.email.trim();

    let taken: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM profiles WHERE email = $1")
        .bind(email)
        .fetch_optional(&*state.db_pool)
        .await?;
    if taken.is_some() {
        return Err(ApiError::EmailTaken);
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, email, password_hash, full_name, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, password_hash, full_name, role
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(&password_hash)
    .bind(payload.full_name.trim())
    .bind(payload.role.as_str())
    .fetch_one(&*state.db_pool)
    .await
    .map_err(|e| match &e {
        // Lost a race with a concurrent signup for the same email.
        sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::EmailTaken,
        _ => ApiError::Database(e),
    })?;

    let profile = row_to_profile(row)?;
    tracing::info!("Profile created: {} ({})", profile.email, profile.role);

    Ok((StatusCode::CREATED, Json(session_for(&state, profile)?)))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("Email and password are required".to_string()));
    }

    let row = sqlx::query_as::<_, ProfileRow>(
        "SELECT id, email, password_hash, full_name, role FROM profiles WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(&*state.db_pool)
    .await?;

    let Some(row) = row else {
        tracing::warn!("Login failed: unknown email {}", email);
        return Err(ApiError::InvalidCredentials);
    };

    let valid = verify(&payload.password, &row.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::InvalidCredentials
    })?;
    if !valid {
        tracing::warn!("Login failed: wrong password for {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let profile = row_to_profile(row)?;
    tracing::info!("Login successful: {}", profile.email);
    Ok(Json(session_for(&state, profile)?))
}

/// `GET /api/auth/session`: the profile behind the presented token.
pub async fn current_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Profile>, ApiError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        "SELECT id, email, password_hash, full_name, role FROM profiles WHERE id = $1",
    )
    .bind(user.user_id)
    .fetch_optional(&*state.db_pool)
    .await?
    // The token outlived its profile.
    .ok_or(ApiError::AuthDeclined)?;

    Ok(Json(row_to_profile(row)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str, password: &str, name: &str) -> SignupRequest {
        SignupRequest {
            email: email.into(),
            password: password.into(),
            full_name: name.into(),
            role: Role::Student,
        }
    }

    #[test]
    fn signup_validation() {
        assert!(signup("ada@x.edu", "secret", "Ada").validate().is_ok());
        assert!(signup("ada", "secret", "Ada").validate().is_err());
        assert!(signup("ada@x.edu", "12345", "Ada").validate().is_err());
        assert!(signup("ada@x.edu", "secret", "  ").validate().is_err());
    }

    #[test]
    fn signup_role_defaults_to_student() {
        let req: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "ada@x.edu",
            "password": "secret",
            "full_name": "Ada"
        }))
        .unwrap();
        assert_eq!(req.role, Role::Student);
    }
}
