use std::sync::Arc;

use campus_events_client::realtime::SubscriptionSet;
use campus_events_client::{ClientConfig, ClientError, HttpBackend, Session, SyncStore};
use dioxus::prelude::*;

use crate::config::FrontendConfig;
use crate::context::{AppContext, AuthContext, Notice, Store, ThemeContext};
use crate::screens::{AdminScreen, HomeScreen, StudentScreen};
#[cfg(not(target_arch = "wasm32"))]
use crate::session_store::SessionFile;
use crate::theme::spacing;
use crate::view::RoleView;
use crate::widgets::{NoticeBanner, PageBackground};

/// Props need `PartialEq`; two handles are equal when they share the store.
#[derive(Clone)]
pub struct StoreHandle(pub Store);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn build_store(config: &FrontendConfig) -> Result<Store, String> {
    let backend = HttpBackend::new(ClientConfig::new(config.api_url.clone())).map_err(|e| e.to_string())?;
    Ok(Arc::new(SyncStore::new(backend)))
}

#[component]
pub fn App() -> Element {
    let store = use_hook(|| build_store(&FrontendConfig::from_env()));

    match store {
        Ok(store) => rsx! {
            Root { store: StoreHandle(store) }
        },
        Err(message) => rsx! {
            div { style: "font-family: system-ui, sans-serif; padding: 24px;",
                h1 { "Campus Events" }
                p { "Could not start the client: {message}" }
            }
        },
    }
}

/// Record a fresh login or signup and persist it where the platform allows.
pub fn start_session(auth: AuthContext, session: Session) {
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(file) = SessionFile::default_location() {
        if let Err(e) = file.save(&session) {
            log::warn!("Could not save session to {}: {}", file.path().display(), e);
        }
    }
    let mut slot = auth.session;
    slot.set(Some(session));
}

pub fn end_session(auth: AuthContext, store: &Store) {
    store.backend().sign_out();
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(file) = SessionFile::default_location() {
        if let Err(e) = file.clear() {
            log::warn!("Could not remove session file {}: {}", file.path().display(), e);
        }
    }
    let mut slot = auth.session;
    slot.set(None);
}

/// Check a stored token against the backend; a declined token is discarded.
#[cfg(not(target_arch = "wasm32"))]
async fn restore_session(store: &Store) -> Option<Session> {
    let file = SessionFile::default_location()?;
    let stored = file.load()?;
    store.backend().set_token(Some(stored.access_token.clone()));
    match store.backend().current_profile().await {
        Ok(profile) => Some(Session {
            access_token: stored.access_token,
            profile,
        }),
        Err(e) => {
            log::info!("Stored session rejected: {}", e);
            store.backend().set_token(None);
            let _ = file.clear();
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn restore_session(_store: &Store) -> Option<Session> {
    None
}

#[component]
fn Root(store: StoreHandle) -> Element {
    let store = store.0;
    let snapshot = use_signal(|| store.snapshot());
    let notice = use_signal(|| Option::<Notice>::None);
    let mut session = use_signal(|| Option::<Session>::None);
    let mut loading = use_signal(|| true);
    let mut is_dark = use_signal(|| false);

    let auth = use_context_provider(|| AuthContext { session, loading });
    let app = use_context_provider(|| AppContext {
        store: store.clone(),
        snapshot,
        notice,
        auth,
    });
    let theme = use_context_provider(|| ThemeContext { is_dark });

    // Mirror every published snapshot into the signal the screens read.
    use_hook(|| {
        let store = store.clone();
        let mut snapshot = snapshot;
        spawn(async move {
            let mut rx = store.subscribe();
            loop {
                let current = rx.borrow_and_update().clone();
                snapshot.set(current);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    use_hook(|| {
        let store = store.clone();
        spawn(async move {
            if let Some(restored) = restore_session(&store).await {
                session.set(Some(restored));
            }
            loading.set(false);
        });
    });

    let mut subscriptions = use_signal(|| Option::<SubscriptionSet>::None);

    {
        let app = app.clone();
        use_effect(move || {
            let current = session.read().clone();
            if let Some(open) = subscriptions.write().take() {
                open.close();
            }
            let Some(current) = current else {
                return;
            };
            let store = app.store.clone();
            let set = SubscriptionSet::open(store.clone(), store.backend().config(), &current.access_token);
            let mut declined = set.declined();
            subscriptions.set(Some(set));

            // Ends when the set closes and its tasks drop the sender.
            let watcher = app.clone();
            spawn(async move {
                if declined.wait_for(|d| *d).await.is_ok() {
                    watcher.report(&ClientError::AuthDeclined);
                }
            });

            let app = app.clone();
            spawn(async move {
                if let Err(e) = store.load().await {
                    app.report(&e);
                }
            });
        });
    }

    let palette = theme.palette();
    let profile = session().map(|s| s.profile);
    let badge = profile.as_ref().map(|p| RoleView::for_role(p.role).badge());
    let button_style = palette.secondary_button_style();

    let body = if loading() {
        rsx! {
            p { style: "text-align: center; color: {palette.muted}; padding: {spacing::XL};", "Loading…" }
        }
    } else {
        match profile.as_ref().map(|p| RoleView::for_role(p.role)) {
            None => rsx! { HomeScreen {} },
            Some(RoleView::Admin) => rsx! { AdminScreen {} },
            Some(RoleView::Student) => rsx! { StudentScreen {} },
        }
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            PageBackground { palette,
                nav {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: {spacing::MD} {spacing::SCREEN_PADDING}; background: {palette.surface}; border-bottom: 1px solid {palette.border};",
                    div { style: "display: flex; align-items: center; gap: {spacing::MD};",
                        h1 { style: "font-size: 1.25rem; font-weight: 700; margin: 0; color: {palette.primary};", "Campus Events" }
                        if let Some(badge) = badge {
                            span {
                                style: "font-size: 0.8rem; padding: 2px 10px; border-radius: 999px; border: 1px solid {palette.border}; color: {palette.muted};",
                                "{badge}"
                            }
                        }
                    }
                    div { style: "display: flex; align-items: center; gap: {spacing::SM};",
                        if let Some(p) = profile.as_ref() {
                            span { style: "color: {palette.muted}; font-size: 0.9rem;", "{p.full_name}" }
                        }
                        button {
                            onclick: move |_| is_dark.set(!is_dark()),
                            style: "{button_style}",
                            if is_dark() { "Light" } else { "Dark" }
                        }
                        if profile.is_some() {
                            button {
                                onclick: {
                                    let store = store.clone();
                                    move |_| end_session(auth, &store)
                                },
                                style: "{button_style}",
                                "Sign out"
                            }
                        }
                    }
                }
                main { style: "max-width: {spacing::CONTENT_MAX_WIDTH}; margin: 0 auto; padding: {spacing::SCREEN_PADDING};",
                    NoticeBanner {}
                    {body}
                }
            }
        }
    }
}
