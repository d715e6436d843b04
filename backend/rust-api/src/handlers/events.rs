use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::{ChangeKind, Event, EventRequest, Table};
use crate::websocket::broadcast_change;
use crate::AppState;

const EVENT_COLUMNS: &str = "id, title, description, event_date, event_time, location, poster_url";

/// `GET /api/events`: every event, soonest first.
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = sqlx::query_as::<_, Event>(&format!(
        "SELECT {} FROM events ORDER BY event_date ASC, event_time ASC",
        EVENT_COLUMNS
    ))
    .fetch_all(&*state.db_pool)
    .await?;

    Ok(Json(events))
}

/// `POST /api/events` (admin)
pub async fn create_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<EventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    user.require_admin()?;
    let input = payload.validate()?;

    let event = sqlx::query_as::<_, Event>(&format!(
        r#"
        INSERT INTO events (id, title, description, event_date, event_time, location, poster_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {}
        "#,
        EVENT_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.event_date)
    .bind(input.event_time)
    .bind(&input.location)
    .bind(&input.poster_url)
    .fetch_one(&*state.db_pool)
    .await?;

    tracing::info!("Event created: {} ({}) by {}", event.title, event.id, user.email);
    broadcast_change(&state.broadcast_tx, Table::Events, ChangeKind::Insert, Some(event.id));

    Ok((StatusCode::CREATED, Json(event)))
}

/// `PUT /api/events/:id` (admin). Registrations are untouched.
pub async fn update_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventRequest>,
) -> Result<Json<Event>, ApiError> {
    user.require_admin()?;
    let input = payload.validate()?;

    let event = sqlx::query_as::<_, Event>(&format!(
        r#"
        UPDATE events
        SET title = $2, description = $3, event_date = $4, event_time = $5,
            location = $6, poster_url = $7, updated_at = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        EVENT_COLUMNS
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.event_date)
    .bind(input.event_time)
    .bind(&input.location)
    .bind(&input.poster_url)
    .fetch_optional(&*state.db_pool)
    .await?
    .ok_or(ApiError::NotFound("Event"))?;

    tracing::info!("Event updated: {} by {}", event.id, user.email);
    broadcast_change(&state.broadcast_tx, Table::Events, ChangeKind::Update, Some(event.id));

    Ok(Json(event))
}

/// `DELETE /api/events/:id` (admin). Registrations go with it via `ON DELETE CASCADE`.
pub async fn delete_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    user.require_admin()?;

    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(&*state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Event"));
    }

    tracing::info!("Event deleted: {} by {}", id, user.email);
    broadcast_change(&state.broadcast_tx, Table::Events, ChangeKind::Delete, Some(id));
    // The cascade removed rows registration subscribers cannot see otherwise.
    broadcast_change(&state.broadcast_tx, Table::Registrations, ChangeKind::Delete, None);

    Ok(StatusCode::NO_CONTENT)
}
