use crate::events::EventRecord;
use axum::{extract::Extension, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::{error, instrument};

#[utoipa::path(
    get,
    path= "/events",
    responses (
        (status = 200, description = "Event listing ordered by date", body = [EventRecord], content_type = "application/json"),
    ),
    tag= "events"
)]
// axum handler for the event listing
#[instrument(skip_all)]
pub async fn events(
    pool: Extension<PgPool>,
) -> Result<Json<Vec<EventRecord>>, (StatusCode, String)> {
    match list_events(&pool).await {
        Ok(events) => Ok(Json(events)),
        Err(e) => {
            error!("Error listing events: {:?}", e);

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error listing events".to_string(),
            ))
        }
    }
}

async fn list_events(pool: &PgPool) -> Result<Vec<EventRecord>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, title, description, image, date FROM events ORDER BY date")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| EventRecord {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            image: row.get("image"),
            date: row.get::<DateTime<Utc>, _>("date"),
        })
        .collect())
}
