use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::auth::row_to_profile;
use crate::middleware::auth::AuthUser;
use crate::models::{Profile, ProfileRow};
use crate::AppState;

/// `GET /api/profiles/:id`. Students may only read their own profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    if id != user.user_id {
        user.require_admin()?;
    }

    let row = sqlx::query_as::<_, ProfileRow>(
        "SELECT id, email, password_hash, full_name, role FROM profiles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&*state.db_pool)
    .await?
    .ok_or(ApiError::NotFound("Profile"))?;

    Ok(Json(row_to_profile(row)?))
}
