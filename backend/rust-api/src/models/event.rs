use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use super::EventId;

/// Row of the `events` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::utils::date")]
    pub event_date: NaiveDate,
    #[serde(with = "crate::utils::time")]
    pub event_time: NaiveTime,
    pub location: String,
    pub poster_url: Option<String>,
}

/// Body of `POST /api/events` and `PUT /api/events/:id`. Updates replace every column.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "crate::utils::date")]
    pub event_date: NaiveDate,
    #[serde(with = "crate::utils::time")]
    pub event_time: NaiveTime,
    pub location: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// A validated, trimmed [`EventRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub location: String,
    pub poster_url: Option<String>,
}

impl EventRequest {
    pub fn validate(self) -> Result<EventInput, ApiError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("Event title is required".to_string()));
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ApiError::Validation("Location is required".to_string()));
        }
        let poster_url = self
            .poster_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);

        Ok(EventInput {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            event_date: self.event_date,
            event_time: self.event_time,
            location: location.to_string(),
            poster_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> EventRequest {
        serde_json::from_value(json).expect("valid request json")
    }

    #[test]
    fn validate_trims_and_drops_blank_poster() {
        let input = request(serde_json::json!({
            "title": "  Hack Night ",
            "event_date": "2026-10-15",
            "event_time": "18:00",
            "location": "Lab 2",
            "poster_url": "   "
        }))
        .validate()
        .expect("valid");

        assert_eq!(input.title, "Hack Night");
        assert_eq!(input.description, "");
        assert_eq!(input.poster_url, None);
        assert_eq!(input.event_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn validate_rejects_blank_title_and_location() {
        let blank_title = request(serde_json::json!({
            "title": " ",
            "event_date": "2026-10-15",
            "event_time": "18:00",
            "location": "Lab 2"
        }));
        assert!(matches!(blank_title.validate(), Err(ApiError::Validation(_))));

        let blank_location = request(serde_json::json!({
            "title": "Hack Night",
            "event_date": "2026-10-15",
            "event_time": "18:00",
            "location": ""
        }));
        assert!(matches!(blank_location.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn event_serializes_dates_in_wire_format() {
        let event = Event {
            id: uuid::Uuid::nil(),
            title: "Hack Night".into(),
            description: String::new(),
            event_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            location: "Lab 2".into(),
            poster_url: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_date"], "2026-10-15");
        assert_eq!(json["event_time"], "18:00");
        assert!(json["poster_url"].is_null());
    }
}
