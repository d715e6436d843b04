//! Type aliases for table identities. All are UUIDs assigned by the server.

use uuid::Uuid;

pub type UserId = Uuid;
pub type EventId = Uuid;
pub type RegistrationId = Uuid;
