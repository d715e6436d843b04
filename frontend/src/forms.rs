//! Form state for the three screens, kept free of UI types so it can be tested directly.

use campus_events_client::{parse_date, parse_time, Event, EventDraft, EventId, Role, SignUp, Snapshot};

use crate::format;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Admin create/edit form. `editing` decides whether submit creates or updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub open: bool,
    pub editing: Option<EventId>,
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub poster_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventSubmission {
    Create(EventDraft),
    Update(EventId, EventDraft),
}

impl EventForm {
    pub fn open_create(&mut self) {
        *self = EventForm {
            open: true,
            ..EventForm::default()
        };
    }

    pub fn edit(&mut self, event: &Event) {
        *self = EventForm {
            open: true,
            editing: Some(event.id),
            title: event.title.clone(),
            description: event.description.clone(),
            event_date: format::date_input(event.event_date),
            event_time: format::time_of_day(event.event_time),
            location: event.location.clone(),
            poster_url: event.poster_url.clone().unwrap_or_default(),
        };
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Event"
        } else {
            "Create New Event"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn submission(&self) -> Result<EventSubmission, String> {
        if self.title.trim().is_empty() {
            return Err("Event title is required".to_string());
        }
        if self.event_date.trim().is_empty() {
            return Err("Date is required".to_string());
        }
        if self.event_time.trim().is_empty() {
            return Err("Time is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        let draft = EventDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            event_date: parse_date(&self.event_date)?,
            event_time: parse_time(&self.event_time)?,
            location: self.location.trim().to_string(),
            poster_url: Some(self.poster_url.trim().to_string()).filter(|u| !u.is_empty()),
        };
        Ok(match self.editing {
            Some(id) => EventSubmission::Update(id, draft),
            None => EventSubmission::Create(draft),
        })
    }

    /// Back to an empty, closed create form.
    pub fn reset(&mut self) {
        *self = EventForm::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterButton {
    Register,
    AlreadyRegistered,
}

impl RegisterButton {
    pub fn label(&self) -> &'static str {
        match self {
            RegisterButton::Register => "Register",
            RegisterButton::AlreadyRegistered => "Already Registered",
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, RegisterButton::AlreadyRegistered)
    }
}

/// Inline student registration form. Name and email persist across events until a registration goes through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub open_for: Option<EventId>,
    pub name: String,
    pub email: String,
}

impl RegistrationForm {
    pub fn open(&mut self, event_id: EventId) {
        self.open_for = Some(event_id);
    }

    pub fn cancel(&mut self) {
        self.open_for = None;
    }

    pub fn is_open_for(&self, event_id: EventId) -> bool {
        self.open_for == Some(event_id)
    }

    /// Only known once an email has been typed.
    pub fn button_status(&self, snapshot: &Snapshot, event_id: EventId) -> RegisterButton {
        if !self.email.trim().is_empty() && snapshot.is_registered(event_id, &self.email) {
            RegisterButton::AlreadyRegistered
        } else {
            RegisterButton::Register
        }
    }

    pub fn submission(&self) -> Result<(String, String), String> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err("Please enter your name and email".to_string());
        }
        Ok((name.to_string(), email.to_string()))
    }

    pub fn finish(&mut self) {
        *self = RegistrationForm::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Signup(SignUp),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

impl AuthForm {
    /// Switch between login and signup; clears every field.
    pub fn toggle(&mut self) {
        let mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        *self = AuthForm {
            mode,
            ..AuthForm::default()
        };
    }

    pub fn request(&self) -> Result<AuthRequest, String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
        }
        match self.mode {
            AuthMode::Login => Ok(AuthRequest::Login {
                email: email.to_string(),
                password: self.password.clone(),
            }),
            AuthMode::Signup => {
                let full_name = self.full_name.trim();
                if full_name.is_empty() {
                    return Err("Full name is required".to_string());
                }
                Ok(AuthRequest::Signup(SignUp {
                    email: email.to_string(),
                    password: self.password.clone(),
                    full_name: full_name.to_string(),
                    role: self.role,
                }))
            }
        }
    }
}
