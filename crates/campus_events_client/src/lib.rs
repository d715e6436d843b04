//! Client core for the campus events app, shared by the desktop and web frontends.
//!
//! [`SyncStore`] owns the snapshot of both tables and reloads a table whenever the backend
//! reports a change to it. Writes go through the `crud` methods on the store and become
//! visible only after that reload.

mod api;
mod backoff;
mod config;
mod crud;
mod error;
mod ids;
mod models;
pub mod realtime;
mod snapshot;
mod sync;

pub use api::{Backend, HttpBackend};
pub use backoff::Backoff;
pub use config::ClientConfig;
pub use error::{ClientError, DUPLICATE_REGISTRATION_MESSAGE};
pub use ids::{EventId, RegistrationId, UserId};
pub use models::{
    parse_date, parse_time, ChangeKind, ChangeNotification, Event, EventDraft, NewRegistration, Profile,
    Registration, Role, Session, SignUp, Table,
};
pub use snapshot::Snapshot;
pub use sync::SyncStore;
