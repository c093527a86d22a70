use crate::events::EventRecord;
use chrono::{DateTime, Utc};

/// Base URL the event image references resolve against.
pub const IMAGES_BASE_URL: &str = "http://localhost:3000/images/";

/// Display-ready projection of an [`EventRecord`].
///
/// Pure data: image loading stays with the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub image_src: String,
    pub title: String,
    pub description: String,
    pub date_label: String,
}

impl EventCard {
    #[must_use]
    pub fn render(event: &EventRecord) -> Self {
        Self {
            image_src: format!("{IMAGES_BASE_URL}{}", event.image),
            title: event.title.clone(),
            description: event.description.clone(),
            date_label: format_event_date(&event.date),
        }
    }
}

/// Format an event date as a label like `Friday Jan 5 2024`.
///
/// Long weekday, abbreviated month, unpadded day and year, with the
/// locale-dependent commas stripped.
#[must_use]
pub fn format_event_date(date: &DateTime<Utc>) -> String {
    date.format("%A %b %-d %Y").to_string()
}
