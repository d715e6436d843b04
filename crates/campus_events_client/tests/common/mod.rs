//! In-memory backend for scenario tests. Behaves like the server: cascade on delete,
//! unique `(event_id, student_email)`, server-side ordering and timestamps.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use campus_events_client::{
    Backend, ClientError, Event, EventDraft, EventId, NewRegistration, Registration, RegistrationId,
};
use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};

#[derive(Default)]
pub struct FakeBackend {
    events: Mutex<Vec<Event>>,
    registrations: Mutex<Vec<Registration>>,
    fail_next_fetch: AtomicBool,
    event_fetches: AtomicUsize,
    registration_fetches: AtomicUsize,
    clock: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }

    pub fn event_fetches(&self) -> usize {
        self.event_fetches.load(Ordering::SeqCst)
    }

    pub fn registration_fetches(&self) -> usize {
        self.registration_fetches.load(Ordering::SeqCst)
    }

    /// Rows as stored on the server, bypassing the client snapshot.
    pub fn stored_registrations(&self) -> Vec<Registration> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn stored_events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn check_fail(&self) -> Result<(), ClientError> {
        if self.fail_next_fetch.swap(false, Ordering::SeqCst) {
            return Err(ClientError::Network("connection refused".into()));
        }
        Ok(())
    }

    fn tick(&self) -> chrono::DateTime<Utc> {
        let n = self.clock.fetch_add(1, Ordering::SeqCst) as i64;
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap() + Duration::seconds(n)
    }
}

fn event_from(id: EventId, draft: EventDraft) -> Event {
    Event {
        id,
        title: draft.title,
        description: draft.description,
        event_date: draft.event_date,
        event_time: draft.event_time,
        location: draft.location,
        poster_url: draft.poster_url,
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        self.event_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_fail()?;
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by_key(|e| (e.event_date, e.event_time));
        Ok(events)
    }

    async fn fetch_registrations(&self) -> Result<Vec<Registration>, ClientError> {
        self.registration_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_fail()?;
        let mut regs = self.registrations.lock().unwrap().clone();
        regs.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(regs)
    }

    async fn insert_event(&self, draft: EventDraft) -> Result<Event, ClientError> {
        let event = event_from(EventId::new(), draft);
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: EventId, draft: EventDraft) -> Result<Event, ClientError> {
        let mut events = self.events.lock().unwrap();
        let slot = events.iter_mut().find(|e| e.id == id).ok_or(ClientError::Api {
            status: 404,
            code: "CAMPUS_NOT_FOUND".into(),
            message: "Event not found".into(),
        })?;
        *slot = event_from(id, draft);
        Ok(slot.clone())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ClientError> {
        self.events.lock().unwrap().retain(|e| e.id != id);
        self.registrations.lock().unwrap().retain(|r| r.event_id != id);
        Ok(())
    }

    async fn insert_registration(&self, new: NewRegistration) -> Result<Registration, ClientError> {
        let registered_at = self.tick();
        let mut regs = self.registrations.lock().unwrap();
        if regs
            .iter()
            .any(|r| r.event_id == new.event_id && r.student_email == new.student_email)
        {
            return Err(ClientError::DuplicateRegistration);
        }
        let reg = Registration {
            id: RegistrationId::new(),
            event_id: new.event_id,
            student_name: new.student_name,
            student_email: new.student_email,
            registered_at,
        };
        regs.push(reg.clone());
        Ok(reg)
    }
}

pub fn draft(title: &str, date: NaiveDate, hour: u32, location: &str) -> EventDraft {
    EventDraft {
        title: title.into(),
        description: String::new(),
        event_date: date,
        event_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        location: location.into(),
        poster_url: None,
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}
