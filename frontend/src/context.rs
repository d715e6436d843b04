//! Shared state handed down through Dioxus context.

use std::sync::Arc;

use campus_events_client::{ClientError, HttpBackend, Session, Snapshot, SyncStore};
use dioxus::prelude::*;

use crate::theme::Palette;

pub type Store = Arc<SyncStore<HttpBackend>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-line message shown in the banner until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn from_error(err: &ClientError) -> Self {
        Self::error(err.user_message())
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub store: Store,
    pub snapshot: Signal<Snapshot>,
    pub notice: Signal<Option<Notice>>,
    pub auth: AuthContext,
}

impl AppContext {
    pub fn notify(&self, notice: Notice) {
        let mut slot = self.notice;
        slot.set(Some(notice));
    }

    /// Show a failed load or write. A declined token also signs the user out.
    pub fn report(&self, err: &ClientError) {
        if err.ends_session() {
            log::info!("Session declined by the server, signing out");
            crate::app::end_session(self.auth, &self.store);
        }
        self.notify(Notice::from_error(err));
    }

    pub fn dismiss(&self) {
        let mut slot = self.notice;
        slot.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: Signal<Option<Session>>,
    /// True while a stored session is being checked at startup.
    pub loading: Signal<bool>,
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark: Signal<bool>,
}

impl ThemeContext {
    pub fn palette(&self) -> Palette {
        Palette::new((self.is_dark)())
    }
}
