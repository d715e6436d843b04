use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use super::{EventId, RegistrationId};

/// Row of the `registrations` table. `registered_at` is set by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub student_name: String,
    pub student_email: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub event_id: EventId,
    pub student_name: String,
    pub student_email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub event_id: EventId,
    pub student_name: String,
    pub student_email: String,
}

impl RegistrationRequest {
    pub fn validate(self) -> Result<NewRegistration, ApiError> {
        let student_name = self.student_name.trim();
        if student_name.is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }
        let student_email = self.student_email.trim();
        if student_email.is_empty() {
            return Err(ApiError::Validation("Email is required".to_string()));
        }
        if !student_email.contains('@') {
            return Err(ApiError::Validation("Email address is not valid".to_string()));
        }
        Ok(NewRegistration {
            event_id: self.event_id,
            student_name: student_name.to_string(),
            student_email: student_email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn validate_requires_name_and_email() {
        let req = |name: &str, email: &str| RegistrationRequest {
            event_id: Uuid::new_v4(),
            student_name: name.to_string(),
            student_email: email.to_string(),
        };

        assert!(req("Ada", "ada@x.edu").validate().is_ok());
        assert!(matches!(req("", "ada@x.edu").validate(), Err(ApiError::Validation(_))));
        assert!(matches!(req("Ada", "  ").validate(), Err(ApiError::Validation(_))));
        assert!(matches!(req("Ada", "ada").validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn validate_trims_but_keeps_email_case() {
        let new = RegistrationRequest {
            event_id: Uuid::new_v4(),
            student_name: " Ada ".into(),
            student_email: " Ada@X.edu ".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(new.student_name, "Ada");
        assert_eq!(new.student_email, "Ada@X.edu");
    }
}
