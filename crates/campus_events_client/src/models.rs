//! Wire models shared with the backend. Dates are `YYYY-MM-DD`, times `HH:MM`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;
use crate::ids::{EventId, RegistrationId, UserId};

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(de)?;
        super::parse_time(&s).map_err(serde::de::Error::custom)
    }
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time {:?} (expected HH:MM)", s))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date {:?} (expected YYYY-MM-DD)", s))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub event_time: NaiveTime,
    pub location: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl Event {
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            event_date: self.event_date,
            event_time: self.event_time,
            location: self.location.clone(),
            poster_url: self.poster_url.clone(),
        }
    }
}

/// Every user-editable event field. Sent as the body of both insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub event_time: NaiveTime,
    pub location: String,
    pub poster_url: Option<String>,
}

impl EventDraft {
    /// Trimmed copy, or the first missing required field.
    pub fn validated(&self) -> Result<EventDraft, ClientError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ClientError::Validation("Event title is required".to_string()));
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ClientError::Validation("Location is required".to_string()));
        }
        Ok(EventDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            event_date: self.event_date,
            event_time: self.event_time,
            location: location.to_string(),
            poster_url: self
                .poster_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(String::from),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub student_name: String,
    pub student_email: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub event_id: EventId,
    pub student_name: String,
    pub student_email: String,
}

impl NewRegistration {
    pub fn validated(&self) -> Result<NewRegistration, ClientError> {
        let student_name = self.student_name.trim();
        if student_name.is_empty() {
            return Err(ClientError::Validation("Name is required".to_string()));
        }
        let student_email = self.student_email.trim();
        if student_email.is_empty() {
            return Err(ClientError::Validation("Email is required".to_string()));
        }
        Ok(NewRegistration {
            event_id: self.event_id,
            student_name: student_name.to_string(),
            student_email: student_email.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Events,
    Registrations,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Events, Table::Registrations];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Events => "events",
            Table::Registrations => "registrations",
        }
    }
}

impl FromStr for Table {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "events" => Ok(Table::Events),
            "registrations" => Ok(Table::Registrations),
            other => Err(format!("unknown table {:?}", other)),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// One realtime message. Only `table` matters to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub table: Table,
    pub kind: ChangeKind,
    #[serde(default)]
    pub id: Option<uuid::Uuid>,
}
