//! HTTP client for the backend API (auth, events, registrations).

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::ids::{EventId, UserId};
use crate::models::{Event, EventDraft, NewRegistration, Profile, Registration, Session, SignUp};

/// Table operations the sync and mutation layers need. `HttpBackend` is the real one.
#[cfg_attr(test, mockall::automock)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Backend {
    /// Ordered by date then time, ascending.
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError>;
    /// Ordered by `registered_at`, newest first.
    async fn fetch_registrations(&self) -> Result<Vec<Registration>, ClientError>;
    async fn insert_event(&self, draft: EventDraft) -> Result<Event, ClientError>;
    async fn update_event(&self, id: EventId, draft: EventDraft) -> Result<Event, ClientError>;
    async fn delete_event(&self, id: EventId) -> Result<(), ClientError>;
    async fn insert_registration(&self, new: NewRegistration) -> Result<Registration, ClientError>;
}

#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(30));
        let client = builder.build()?;
        Ok(Self {
            client,
            config,
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    fn bearer(&self) -> Result<String, ClientError> {
        self.token()
            .map(|t| format!("Bearer {}", t))
            .ok_or(ClientError::NotSignedIn)
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_response_parts(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .client
            .get(self.config.api_url(path))
            .header(reqwest::header::AUTHORIZATION, self.bearer()?)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// POST /api/auth/login -> Session. The token is kept for later calls.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let body = serde_json::json!({ "email": email.trim(), "password": password });
        let resp = self
            .client
            .post(self.config.api_url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;
        let session: Session = Self::read_json(resp).await?;
        self.set_token(Some(session.access_token.clone()));
        log::info!("[campus_events] signed in as {} ({})", session.profile.email, session.profile.role);
        Ok(session)
    }

    /// POST /api/auth/signup -> Session
    pub async fn sign_up(&self, request: &SignUp) -> Result<Session, ClientError> {
        let resp = self
            .client
            .post(self.config.api_url("/api/auth/signup"))
            .json(request)
            .send()
            .await?;
        let session: Session = Self::read_json(resp).await?;
        self.set_token(Some(session.access_token.clone()));
        log::info!("[campus_events] signed up {} as {}", session.profile.email, session.profile.role);
        Ok(session)
    }

    pub fn sign_out(&self) {
        self.set_token(None);
        log::info!("[campus_events] signed out");
    }

    /// GET /api/auth/session: validates a restored token.
    pub async fn current_profile(&self) -> Result<Profile, ClientError> {
        self.get("/api/auth/session").await
    }

    pub async fn fetch_profile(&self, id: UserId) -> Result<Profile, ClientError> {
        self.get(&format!("/api/profiles/{}", id)).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Backend for HttpBackend {
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        self.get("/api/events").await
    }

    async fn fetch_registrations(&self) -> Result<Vec<Registration>, ClientError> {
        self.get("/api/registrations").await
    }

    async fn insert_event(&self, draft: EventDraft) -> Result<Event, ClientError> {
        let resp = self
            .client
            .post(self.config.api_url("/api/events"))
            .header(reqwest::header::AUTHORIZATION, self.bearer()?)
            .json(&draft)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn update_event(&self, id: EventId, draft: EventDraft) -> Result<Event, ClientError> {
        let resp = self
            .client
            .put(self.config.api_url(&format!("/api/events/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.bearer()?)
            .json(&draft)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(self.config.api_url(&format!("/api/events/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.bearer()?)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await?;
            return Err(ClientError::from_response_parts(status.as_u16(), &text));
        }
        Ok(())
    }

    async fn insert_registration(&self, new: NewRegistration) -> Result<Registration, ClientError> {
        let resp = self
            .client
            .post(self.config.api_url("/api/registrations"))
            .header(reqwest::header::AUTHORIZATION, self.bearer()?)
            .json(&new)
            .send()
            .await?;
        Self::read_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn calls_without_token_fail_before_network() {
        let backend = HttpBackend::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        assert!(matches!(backend.fetch_events().await, Err(ClientError::NotSignedIn)));
    }

    #[test]
    fn token_is_shared_between_clones() {
        let backend = HttpBackend::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let clone = backend.clone();
        backend.set_token(Some("abc".into()));
        assert_eq!(clone.token().as_deref(), Some("abc"));
        clone.sign_out();
        assert_eq!(backend.token(), None);
    }
}
