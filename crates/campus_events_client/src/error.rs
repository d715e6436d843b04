//! Client-side error taxonomy. `user_message` is what the UI shows in its notice banner.

use thiserror::Error;

pub const DUPLICATE_REGISTRATION_MESSAGE: &str = "You are already registered for this event!";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{status} {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("session expired or invalid")]
    AuthDeclined,
    #[error("{}", DUPLICATE_REGISTRATION_MESSAGE)]
    DuplicateRegistration,
    #[error("{0}")]
    Validation(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not signed in")]
    NotSignedIn,
}

impl ClientError {
    /// Map a non-success HTTP response onto the taxonomy via the server's `{code, message}` body.
    pub fn from_response_parts(status: u16, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let code = parsed
            .as_ref()
            .and_then(|v| v.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| body.trim().to_string());

        match (status, code.as_str()) {
            (_, "CAMPUS_DUPLICATE_REGISTRATION") => ClientError::DuplicateRegistration,
            (_, "CAMPUS_VALIDATION") => ClientError::Validation(message),
            // A refused sign-in is not an expired session.
            (_, "CAMPUS_INVALID_CREDENTIALS") => ClientError::Api {
                status,
                code,
                message,
            },
            (401, _) | (_, "CAMPUS_AUTH_DECLINED") => ClientError::AuthDeclined,
            _ => ClientError::Api {
                status,
                code,
                message,
            },
        }
    }

    /// The server no longer accepts the token; the caller should sign out.
    pub fn ends_session(&self) -> bool {
        matches!(self, ClientError::AuthDeclined)
    }

    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
            ClientError::Api { status, .. } => format!("Request failed ({})", status),
            ClientError::AuthDeclined => "Your session has expired. Please sign in again.".to_string(),
            ClientError::DuplicateRegistration => DUPLICATE_REGISTRATION_MESSAGE.to_string(),
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ClientError::NotSignedIn => "Please sign in first.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_codes_map_to_variants() {
        let dup = ClientError::from_response_parts(
            409,
            r#"{"code":"CAMPUS_DUPLICATE_REGISTRATION","message":"You are already registered for this event!"}"#,
        );
        assert!(matches!(dup, ClientError::DuplicateRegistration));

        let auth = ClientError::from_response_parts(401, r#"{"code":"CAMPUS_AUTH_DECLINED","message":"x"}"#);
        assert!(matches!(auth, ClientError::AuthDeclined));

        let wrong_password = ClientError::from_response_parts(
            401,
            r#"{"code":"CAMPUS_INVALID_CREDENTIALS","message":"Invalid email or password"}"#,
        );
        assert!(!wrong_password.ends_session());
        assert_eq!(wrong_password.user_message(), "Invalid email or password");

        let invalid = ClientError::from_response_parts(400, r#"{"code":"CAMPUS_VALIDATION","message":"Location is required"}"#);
        assert_eq!(invalid.user_message(), "Location is required");
    }

    #[test]
    fn plain_text_bodies_become_api_errors() {
        match ClientError::from_response_parts(502, "Bad Gateway") {
            ClientError::Api { status, code, message } => {
                assert_eq!(status, 502);
                assert_eq!(code, "");
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn only_a_declined_token_ends_the_session() {
        let expired = ClientError::from_response_parts(401, r#"{"code":"CAMPUS_AUTH_DECLINED","message":"x"}"#);
        assert!(expired.ends_session());
        assert!(!ClientError::from_response_parts(403, r#"{"code":"CAMPUS_FORBIDDEN","message":"x"}"#).ends_session());
        assert!(!ClientError::Network("reset".into()).ends_session());
        assert!(!ClientError::DuplicateRegistration.ends_session());
    }

    #[test]
    fn duplicate_message_matches_ui_text() {
        assert_eq!(
            ClientError::DuplicateRegistration.user_message(),
            "You are already registered for this event!"
        );
    }
}
