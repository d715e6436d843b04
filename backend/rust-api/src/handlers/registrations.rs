use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::ApiError;
use crate::models::{ChangeKind, Registration, RegistrationRequest, Table};
use crate::websocket::broadcast_change;
use crate::AppState;

/// `GET /api/registrations`: newest first.
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let registrations = sqlx::query_as::<_, Registration>(
        r#"
        SELECT id, event_id, student_name, student_email, registered_at
        FROM registrations
        ORDER BY registered_at DESC
        "#,
    )
    .fetch_all(&*state.db_pool)
    .await?;

    Ok(Json(registrations))
}

/// `POST /api/registrations`. Any signed-in user may register any name and email.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationRequest>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    let new = payload.validate()?;

    let registration = sqlx::query_as::<_, Registration>(
        r#"
        INSERT INTO registrations (id, event_id, student_name, student_email)
        VALUES ($1, $2, $3, $4)
        RETURNING id, event_id, student_name, student_email, registered_at
        "#,
    )
    .bind(uuid::Uuid::new_v4())
    .bind(new.event_id)
    .bind(&new.student_name)
    .bind(&new.student_email)
    .fetch_one(&*state.db_pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::DuplicateRegistration,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => ApiError::NotFound("Event"),
        _ => ApiError::Database(e),
    })?;

    tracing::info!(
        "Registration created: {} for event {}",
        registration.student_email,
        registration.event_id
    );
    broadcast_change(
        &state.broadcast_tx,
        Table::Registrations,
        ChangeKind::Insert,
        Some(registration.id),
    );

    Ok((StatusCode::CREATED, Json(registration)))
}
