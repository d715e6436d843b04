//! CRUD: validate, write through the backend, never touch the snapshot directly.
//! New rows show up through the notification-driven reload.

use crate::api::Backend;
use crate::error::ClientError;
use crate::ids::EventId;
use crate::models::{Event, EventDraft, NewRegistration, Registration};
use crate::sync::SyncStore;

impl<B: Backend> SyncStore<B> {
    pub async fn add_event(&self, draft: &EventDraft) -> Result<Event, ClientError> {
        let draft = draft.validated()?;
        log::info!("[campus_events] crud::add_event title={:?} date={}", draft.title, draft.event_date);
        let event = self.backend().insert_event(draft).await.map_err(|e| {
            log::error!("[campus_events] crud::add_event failed: {}", e);
            e
        })?;
        Ok(event)
    }

    /// Full-row update. Registrations for the event are untouched.
    pub async fn update_event(&self, id: EventId, draft: &EventDraft) -> Result<Event, ClientError> {
        let draft = draft.validated()?;
        log::info!("[campus_events] crud::update_event id={}", id);
        self.backend().update_event(id, draft).await.map_err(|e| {
            log::error!("[campus_events] crud::update_event id={} failed: {}", id, e);
            e
        })
    }

    /// The backend removes the event's registrations with it.
    pub async fn delete_event(&self, id: EventId) -> Result<(), ClientError> {
        log::info!("[campus_events] crud::delete_event id={}", id);
        self.backend().delete_event(id).await.map_err(|e| {
            log::error!("[campus_events] crud::delete_event id={} failed: {}", id, e);
            e
        })
    }

    /// Rejects a second registration for the same `(event, email)` without writing.
    pub async fn register(
        &self,
        event_id: EventId,
        student_name: &str,
        student_email: &str,
    ) -> Result<Registration, ClientError> {
        let new = NewRegistration {
            event_id,
            student_name: student_name.to_string(),
            student_email: student_email.to_string(),
        }
        .validated()?;

        if self.snapshot().is_registered(event_id, &new.student_email) {
            log::info!(
                "[campus_events] crud::register rejected duplicate event={} email={}",
                event_id,
                new.student_email
            );
            return Err(ClientError::DuplicateRegistration);
        }

        log::info!("[campus_events] crud::register event={} email={}", event_id, new.student_email);
        self.backend().insert_registration(new).await.map_err(|e| {
            log::error!("[campus_events] crud::register event={} failed: {}", event_id, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MockBackend;
    use crate::error::ClientError;
    use crate::ids::{EventId, RegistrationId};
    use crate::models::{EventDraft, Registration, Table};
    use crate::sync::SyncStore;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn draft(title: &str, location: &str) -> EventDraft {
        EventDraft {
            title: title.into(),
            description: String::new(),
            event_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            location: location.into(),
            poster_url: None,
        }
    }

    fn existing(event_id: EventId, email: &str) -> Registration {
        Registration {
            id: RegistrationId::new(),
            event_id,
            student_name: "Ada".into(),
            student_email: email.into(),
            registered_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_registration_never_reaches_backend() {
        let event_id = EventId::new();
        let mut backend = MockBackend::new();
        backend
            .expect_fetch_registrations()
            .returning(move || Ok(vec![existing(event_id, "ada@campus.edu")]));
        backend.expect_insert_registration().times(0);

        let store = SyncStore::new(backend);
        store.refresh(Table::Registrations).await.unwrap();

        let result = store.register(event_id, "Ada Lovelace", "ada@campus.edu").await;
        assert!(matches!(result, Err(ClientError::DuplicateRegistration)));
    }

    #[tokio::test]
    async fn register_trims_before_insert() {
        let event_id = EventId::new();
        let mut backend = MockBackend::new();
        backend
            .expect_insert_registration()
            .withf(move |n| n.event_id == event_id && n.student_name == "Ada" && n.student_email == "ada@campus.edu")
            .times(1)
            .returning(|n| {
                Ok(Registration {
                    id: RegistrationId::new(),
                    event_id: n.event_id,
                    student_name: n.student_name,
                    student_email: n.student_email,
                    registered_at: Utc::now(),
                })
            });

        let store = SyncStore::new(backend);
        let reg = store.register(event_id, " Ada ", " ada@campus.edu").await.unwrap();
        assert_eq!(reg.student_email, "ada@campus.edu");
    }

    #[tokio::test]
    async fn blank_fields_fail_without_backend_call() {
        let mut backend = MockBackend::new();
        backend.expect_insert_event().times(0);
        backend.expect_insert_registration().times(0);
        let store = SyncStore::new(backend);

        assert!(matches!(store.add_event(&draft(" ", "Lab 2")).await, Err(ClientError::Validation(_))));
        assert!(matches!(
            store.register(EventId::new(), "", "ada@campus.edu").await,
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            store.register(EventId::new(), "Ada", "  ").await,
            Err(ClientError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn add_event_does_not_patch_snapshot() {
        let mut backend = MockBackend::new();
        backend.expect_insert_event().times(1).returning(|d| {
            Ok(crate::models::Event {
                id: EventId::new(),
                title: d.title,
                description: d.description,
                event_date: d.event_date,
                event_time: d.event_time,
                location: d.location,
                poster_url: d.poster_url,
            })
        });
        let store = SyncStore::new(backend);

        store.add_event(&draft("Hack Night", "Lab 2")).await.unwrap();
        assert!(store.snapshot().events.is_empty());
        assert_eq!(store.snapshot().revision, 0);
    }

    #[tokio::test]
    async fn backend_conflict_surfaces_as_duplicate() {
        let mut backend = MockBackend::new();
        backend
            .expect_insert_registration()
            .returning(|_| Err(ClientError::DuplicateRegistration));
        let store = SyncStore::new(backend);

        let result = store.register(EventId::new(), "Ada", "ada@campus.edu").await;
        assert_eq!(
            result.unwrap_err().user_message(),
            "You are already registered for this event!"
        );
    }
}
