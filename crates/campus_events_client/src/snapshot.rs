use chrono::NaiveDate;

use crate::ids::EventId;
use crate::models::{Event, Registration};

/// Last known contents of both tables. Replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Ascending by date, then time.
    pub events: Vec<Event>,
    /// Newest first.
    pub registrations: Vec<Registration>,
    /// Bumped on every replacement of either half.
    pub revision: u64,
}

impl Snapshot {
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Roster for one event, in snapshot order.
    pub fn participants(&self, event_id: EventId) -> Vec<&Registration> {
        self.registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .collect()
    }

    pub fn participant_count(&self, event_id: EventId) -> usize {
        self.registrations.iter().filter(|r| r.event_id == event_id).count()
    }

    /// Exact match on the trimmed email; case is significant.
    pub fn is_registered(&self, event_id: EventId, email: &str) -> bool {
        let email = email.trim();
        !email.is_empty()
            && self
                .registrations
                .iter()
                .any(|r| r.event_id == event_id && r.student_email == email)
    }

    /// Events on `today` or later. Only the date is compared.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.event_date >= today).collect();
        events.sort_by_key(|e| (e.event_date, e.event_time));
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RegistrationId;
    use chrono::{NaiveTime, Utc};

    fn event(title: &str, date: NaiveDate, hour: u32) -> Event {
        Event {
            id: EventId::new(),
            title: title.into(),
            description: String::new(),
            event_date: date,
            event_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            location: "Main Hall".into(),
            poster_url: None,
        }
    }

    fn registration(event_id: EventId, email: &str) -> Registration {
        Registration {
            id: RegistrationId::new(),
            event_id,
            student_name: "Ada".into(),
            student_email: email.into(),
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn upcoming_keeps_today_and_sorts() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let snap = Snapshot {
            events: vec![
                event("Later", today.succ_opt().unwrap(), 9),
                event("Yesterday", today.pred_opt().unwrap(), 9),
                event("Tonight", today, 20),
                event("This morning", today, 8),
            ],
            ..Default::default()
        };
        let titles: Vec<&str> = snap.upcoming(today).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["This morning", "Tonight", "Later"]);
    }

    #[test]
    fn registration_lookup_is_per_event_and_exact() {
        let e1 = EventId::new();
        let e2 = EventId::new();
        let snap = Snapshot {
            registrations: vec![registration(e1, "ada@campus.edu")],
            ..Default::default()
        };
        assert!(snap.is_registered(e1, " ada@campus.edu "));
        assert!(!snap.is_registered(e1, "Ada@campus.edu"));
        assert!(!snap.is_registered(e2, "ada@campus.edu"));
        assert!(!snap.is_registered(e1, ""));
        assert_eq!(snap.participants(e1).len(), 1);
        assert_eq!(snap.participant_count(e2), 0);
    }
}
