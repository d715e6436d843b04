//! Form state tests: create/edit switching, validation, duplicate detection.

use campus_events_client::{Event, EventId, Registration, RegistrationId, Role, Snapshot};
use campus_events_frontend::forms::{
    AuthForm, AuthMode, AuthRequest, EventForm, EventSubmission, RegisterButton, RegistrationForm,
};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn hack_night() -> Event {
    Event {
        id: EventId::new(),
        title: "Hack Night".to_string(),
        description: "Bring a laptop".to_string(),
        event_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        location: "Lab 2".to_string(),
        poster_url: None,
    }
}

fn filled_form() -> EventForm {
    let mut form = EventForm::default();
    form.open_create();
    form.title = "  Career Fair ".to_string();
    form.event_date = "2026-10-21".to_string();
    form.event_time = "10:00".to_string();
    form.location = "Main Hall".to_string();
    form
}

#[test]
fn new_form_is_in_create_mode() {
    let mut form = EventForm::default();
    form.open_create();
    assert!(form.open);
    assert!(!form.is_editing());
    assert_eq!(form.heading(), "Create New Event");
    assert_eq!(form.submit_label(), "Create");
}

#[test]
fn editing_prefills_every_field() {
    let event = Event {
        poster_url: Some("https://example.edu/p.png".to_string()),
        ..hack_night()
    };
    let mut form = EventForm::default();
    form.edit(&event);

    assert_eq!(form.editing, Some(event.id));
    assert_eq!(form.heading(), "Edit Event");
    assert_eq!(form.submit_label(), "Update");
    assert_eq!(form.title, "Hack Night");
    assert_eq!(form.event_date, "2026-10-15");
    assert_eq!(form.event_time, "18:00");
    assert_eq!(form.location, "Lab 2");
    assert_eq!(form.poster_url, "https://example.edu/p.png");
}

#[test]
fn create_submission_trims_and_drops_blank_poster() {
    let mut form = filled_form();
    form.poster_url = "   ".to_string();

    match form.submission().unwrap() {
        EventSubmission::Create(draft) => {
            assert_eq!(draft.title, "Career Fair");
            assert_eq!(draft.event_date, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
            assert_eq!(draft.event_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
            assert_eq!(draft.poster_url, None);
        }
        other => panic!("expected create, got {:?}", other),
    }
}

#[test]
fn edit_submission_targets_the_edited_event() {
    let event = hack_night();
    let mut form = EventForm::default();
    form.edit(&event);
    form.location = "Engineering Lab 2".to_string();

    match form.submission().unwrap() {
        EventSubmission::Update(id, draft) => {
            assert_eq!(id, event.id);
            assert_eq!(draft.location, "Engineering Lab 2");
            assert_eq!(draft.title, event.title);
            assert_eq!(draft.event_date, event.event_date);
        }
        other => panic!("expected update, got {:?}", other),
    }
}

#[test]
fn missing_required_fields_are_reported() {
    let mut form = filled_form();
    form.title = " ".to_string();
    assert_eq!(form.submission().unwrap_err(), "Event title is required");

    let mut form = filled_form();
    form.location.clear();
    assert_eq!(form.submission().unwrap_err(), "Location is required");

    let mut form = filled_form();
    form.event_time.clear();
    assert_eq!(form.submission().unwrap_err(), "Time is required");
}

#[test]
fn reset_returns_to_closed_create_mode() {
    let mut form = EventForm::default();
    form.edit(&hack_night());
    form.reset();
    assert_eq!(form, EventForm::default());
    assert!(!form.is_editing());
}

fn snapshot_with(event_id: EventId, email: &str) -> Snapshot {
    Snapshot {
        events: Vec::new(),
        registrations: vec![Registration {
            id: RegistrationId::new(),
            event_id,
            student_name: "Ada".to_string(),
            student_email: email.to_string(),
            registered_at: Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap(),
        }],
        revision: 1,
    }
}

#[test]
fn register_button_waits_for_an_email() {
    let event_id = EventId::new();
    let snapshot = snapshot_with(event_id, "ada@college.edu");
    let mut form = RegistrationForm::default();

    assert_eq!(form.button_status(&snapshot, event_id), RegisterButton::Register);

    form.email = "ada@college.edu".to_string();
    let status = form.button_status(&snapshot, event_id);
    assert_eq!(status, RegisterButton::AlreadyRegistered);
    assert!(status.disabled());
    assert_eq!(status.label(), "Already Registered");

    assert_eq!(form.button_status(&snapshot, EventId::new()), RegisterButton::Register);
}

#[test]
fn registration_form_requires_name_and_email() {
    let mut form = RegistrationForm::default();
    form.open(EventId::new());
    form.email = "ada@college.edu".to_string();
    assert!(form.submission().is_err());

    form.name = " Ada ".to_string();
    assert_eq!(
        form.submission().unwrap(),
        ("Ada".to_string(), "ada@college.edu".to_string())
    );
}

#[test]
fn registration_form_opens_for_one_event_at_a_time() {
    let first = EventId::new();
    let second = EventId::new();
    let mut form = RegistrationForm::default();

    form.open(first);
    form.name = "Ada".to_string();
    form.open(second);
    assert!(!form.is_open_for(first));
    assert!(form.is_open_for(second));
    assert_eq!(form.name, "Ada");

    form.cancel();
    assert!(!form.is_open_for(second));

    form.finish();
    assert_eq!(form, RegistrationForm::default());
}

#[test]
fn login_requires_six_character_password() {
    let form = AuthForm {
        email: "ada@college.edu".to_string(),
        password: "12345".to_string(),
        ..AuthForm::default()
    };
    assert_eq!(form.request().unwrap_err(), "Password must be at least 6 characters");

    let form = AuthForm {
        password: "123456".to_string(),
        ..form
    };
    assert_eq!(
        form.request().unwrap(),
        AuthRequest::Login {
            email: "ada@college.edu".to_string(),
            password: "123456".to_string(),
        }
    );
}

#[test]
fn signup_collects_name_and_defaults_to_student() {
    let mut form = AuthForm::default();
    form.toggle();
    assert_eq!(form.mode, AuthMode::Signup);
    form.email = "grace@college.edu".to_string();
    form.password = "secret1".to_string();
    assert_eq!(form.request().unwrap_err(), "Full name is required");

    form.full_name = "Grace Hopper".to_string();
    match form.request().unwrap() {
        AuthRequest::Signup(signup) => {
            assert_eq!(signup.full_name, "Grace Hopper");
            assert_eq!(signup.role, Role::Student);
        }
        other => panic!("expected signup, got {:?}", other),
    }
}

#[test]
fn toggling_auth_mode_clears_fields() {
    let mut form = AuthForm {
        email: "ada@college.edu".to_string(),
        password: "secret1".to_string(),
        role: Role::Admin,
        ..AuthForm::default()
    };
    form.toggle();
    assert_eq!(form.mode, AuthMode::Signup);
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert_eq!(form.role, Role::Student);

    form.toggle();
    assert_eq!(form.mode, AuthMode::Login);
}
