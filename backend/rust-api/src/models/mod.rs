//! Table rows and request payloads. Dates and times use chrono types, never raw strings.

pub mod event;
pub mod ids;
pub mod notification;
pub mod profile;
pub mod registration;

pub use event::{Event, EventInput, EventRequest};
pub use ids::{EventId, RegistrationId, UserId};
pub use notification::{ChangeKind, ChangeNotification, Table};
pub use profile::{Profile, ProfileRow, Role};
pub use registration::{NewRegistration, Registration, RegistrationRequest};
