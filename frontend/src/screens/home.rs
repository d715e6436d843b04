use campus_events_client::Role;
use dioxus::prelude::*;

use crate::app::start_session;
use crate::context::{AppContext, AuthContext, ThemeContext};
use crate::forms::{AuthForm, AuthMode, AuthRequest};
use crate::theme::spacing;
use crate::widgets::Card;

#[component]
pub fn HomeScreen() -> Element {
    let app = use_context::<AppContext>();
    let auth = use_context::<AuthContext>();
    let palette = use_context::<ThemeContext>().palette();

    let mut form = use_signal(AuthForm::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let current = form();
    let is_login = current.mode == AuthMode::Login;
    let input_style = palette.input_style();
    let primary_button = palette.primary_button_style();
    let label_style = format!("display: block; margin-bottom: {}; font-size: 0.875rem; color: {};", spacing::XS, palette.muted);

    let submit = move |ev: FormEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }
        let request = match form.read().request() {
            Ok(r) => r,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        let store = app.store.clone();
        spawn(async move {
            let result = match &request {
                AuthRequest::Login { email, password } => store.backend().sign_in(email, password).await,
                AuthRequest::Signup(signup) => store.backend().sign_up(signup).await,
            };
            submitting.set(false);
            match result {
                Ok(session) => start_session(auth, session),
                Err(e) => {
                    log::warn!("Authentication failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: {spacing::XL}; align-items: center; padding: {spacing::LG} 0;",
            div {
                h2 { style: "font-size: 2rem; font-weight: 700; margin: 0 0 {spacing::MD};", "Discover & Register for Campus Events" }
                p { style: "font-size: 1.1rem; color: {palette.muted}; margin-bottom: {spacing::LG};",
                    "Stay connected with all the exciting events happening on campus. Register with one click and never miss out!"
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: {spacing::MD};",
                    Card { palette,
                        h3 { style: "margin: 0 0 {spacing::SM}; font-size: 1rem;", "For Students" }
                        p { style: "margin: 0; font-size: 0.875rem; color: {palette.muted};", "Browse events, register instantly, and track your registrations" }
                    }
                    Card { palette,
                        h3 { style: "margin: 0 0 {spacing::SM}; font-size: 1rem;", "For Admins" }
                        p { style: "margin: 0; font-size: 0.875rem; color: {palette.muted};", "Create events, manage registrations, and view participant lists" }
                    }
                }
            }
            Card { palette,
                h3 { style: "font-size: 1.5rem; margin: 0 0 {spacing::XS};",
                    if is_login { "Welcome Back" } else { "Create Account" }
                }
                p { style: "color: {palette.muted}; margin: 0 0 {spacing::LG};",
                    if is_login { "Sign in to your account" } else { "Sign up to get started" }
                }
                form { onsubmit: submit,
                    if !is_login {
                        div { style: "margin-bottom: {spacing::MD};",
                            label { style: "{label_style}", "Full Name" }
                            input {
                                r#type: "text",
                                placeholder: "Enter your full name",
                                value: "{current.full_name}",
                                oninput: move |ev| form.write().full_name = ev.value(),
                                style: "{input_style}",
                            }
                        }
                    }
                    div { style: "margin-bottom: {spacing::MD};",
                        label { style: "{label_style}", "Email" }
                        input {
                            r#type: "email",
                            placeholder: "your.email@college.edu",
                            value: "{current.email}",
                            oninput: move |ev| form.write().email = ev.value(),
                            style: "{input_style}",
                        }
                    }
                    div { style: "margin-bottom: {spacing::MD};",
                        label { style: "{label_style}", "Password" }
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{current.password}",
                            oninput: move |ev| form.write().password = ev.value(),
                            style: "{input_style}",
                        }
                    }
                    if !is_login {
                        div { style: "margin-bottom: {spacing::MD};",
                            label { style: "{label_style}", "I am a" }
                            div { style: "display: flex; gap: {spacing::MD};",
                                label { style: "display: flex; align-items: center; gap: {spacing::XS}; cursor: pointer;",
                                    input {
                                        r#type: "radio",
                                        name: "role",
                                        checked: current.role == Role::Student,
                                        onchange: move |_| form.write().role = Role::Student,
                                    }
                                    "Student"
                                }
                                label { style: "display: flex; align-items: center; gap: {spacing::XS}; cursor: pointer;",
                                    input {
                                        r#type: "radio",
                                        name: "role",
                                        checked: current.role == Role::Admin,
                                        onchange: move |_| form.write().role = Role::Admin,
                                    }
                                    "Admin"
                                }
                            }
                        }
                    }
                    if let Some(e) = error() {
                        p { style: "color: {palette.error}; font-size: 0.875rem; margin-bottom: {spacing::SM};", "{e}" }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        style: "width: 100%; {primary_button}",
                        if submitting() {
                            "Please wait..."
                        } else if is_login {
                            "Sign In"
                        } else {
                            "Sign Up"
                        }
                    }
                }
                div { style: "text-align: center; margin-top: {spacing::MD};",
                    button {
                        onclick: move |_| {
                            form.write().toggle();
                            error.set(None);
                        },
                        style: "background: none; border: none; color: {palette.primary}; cursor: pointer; font-size: 0.9rem;",
                        if is_login { "Don't have an account? Sign up" } else { "Already have an account? Sign in" }
                    }
                }
            }
        }
    }
}
