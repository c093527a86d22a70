//! Event records and their display-ready rendering.

mod card;
pub use self::card::{format_event_date, EventCard, IMAGES_BASE_URL};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single displayable event, as served by `GET /events`.
///
/// Owned by the event store; consumers only read it. The `date` is an
/// RFC 3339 timestamp and `image` resolves under the images base URL.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub date: DateTime<Utc>,
}
