pub mod auth;
pub mod events;
pub mod profiles;
pub mod registrations;

pub use auth::{current_session, login, signup, LoginRequest, SessionResponse, SignupRequest};
pub use events::{create_event, delete_event, list_events, update_event};
pub use profiles::get_profile;
pub use registrations::{create_registration, list_registrations};
