use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::Role;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Profile id.
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: usize,
}

/// Caller identity attached to every request behind [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            tracing::warn!("User {} ({}) attempted an admin-only action", self.user_id, self.role);
            Err(ApiError::Forbidden)
        }
    }
}

pub fn issue_token(
    user_id: &Uuid,
    email: &str,
    role: Role,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::seconds(expiration_secs as i64)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Validate signature and expiry, then resolve the caller.
pub fn decode_token(token: &str, secret: &str) -> Result<AuthUser, ApiError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::new(Algorithm::HS256);

    let claims = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| {
            tracing::debug!("Token validation failed: {:?}", e);
            ApiError::AuthDeclined
        })?
        .claims;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::AuthDeclined)?;
    Ok(AuthUser {
        user_id,
        email: claims.email,
        role: claims.role,
    })
}

/// Requires `Authorization: Bearer <jwt>`. The role travels in the token, so no lookup is needed here.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(ApiError::AuthDeclined)?;

    let auth_user = decode_token(token, &state.config.jwt_secret)?;
    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}
