use campus_events_client::{ClientError, Event};
use chrono::Local;
use dioxus::prelude::*;

use crate::context::{AppContext, Notice, ThemeContext};
use crate::format;
use crate::forms::RegistrationForm;
use crate::theme::spacing;
use crate::widgets::Card;

#[component]
pub fn StudentScreen() -> Element {
    let app = use_context::<AppContext>();
    let palette = use_context::<ThemeContext>().palette();
    let form = use_signal(RegistrationForm::default);

    let snapshot = (app.snapshot)();
    let today = Local::now().date_naive();
    let upcoming: Vec<Event> = snapshot.upcoming(today).into_iter().cloned().collect();

    rsx! {
        div {
            h1 { style: "font-size: 1.75rem; margin: 0 0 {spacing::LG};", "Upcoming Events" }
            if upcoming.is_empty() {
                Card { palette,
                    p { style: "text-align: center; color: {palette.muted}; margin: 0;", "No upcoming events at the moment." }
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: {spacing::MD};",
                for event in upcoming.iter() {
                    StudentEventCard { key: "{event.id}", event: event.clone(), form }
                }
            }
        }
    }
}

#[component]
fn StudentEventCard(event: Event, form: Signal<RegistrationForm>) -> Element {
    let app = use_context::<AppContext>();
    let palette = use_context::<ThemeContext>().palette();
    let mut form = form;
    let mut submitting = use_signal(|| false);

    let snapshot = (app.snapshot)();
    let current = form();
    let event_id = event.id;
    let status = current.button_status(&snapshot, event_id);
    let date = format::long_date(event.event_date);
    let time = format::time_of_day(event.event_time);
    let input_style = palette.input_style();
    let secondary_button = palette.secondary_button_style();
    let register_style = if status.disabled() {
        format!(
            "width: 100%; padding: 10px 16px; border-radius: 8px; border: none; background: {}; color: #FFFFFF; cursor: not-allowed;",
            palette.muted
        )
    } else {
        format!(
            "width: 100%; padding: 10px 16px; border-radius: 8px; border: none; background: {}; color: #FFFFFF; font-weight: 600; cursor: pointer;",
            palette.success
        )
    };

    let submit = {
        let app = app.clone();
        move |ev: FormEvent| {
            ev.prevent_default();
            if submitting() {
                return;
            }
            let (name, email) = match form.read().submission() {
                Ok(fields) => fields,
                Err(msg) => {
                    app.notify(Notice::error(msg));
                    return;
                }
            };
            submitting.set(true);
            let app = app.clone();
            spawn(async move {
                let store = app.store.clone();
                let result = store.register(event_id, &name, &email).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        form.write().finish();
                        app.notify(Notice::success("Registration successful!"));
                    }
                    Err(ClientError::DuplicateRegistration) => {
                        form.write().finish();
                        app.notify(Notice::from_error(&ClientError::DuplicateRegistration));
                    }
                    Err(e) => app.report(&e),
                }
            });
        }
    };

    rsx! {
        div { style: "background: {palette.surface}; border: 1px solid {palette.border}; border-radius: 12px; overflow: hidden;",
            if let Some(url) = event.poster_url.as_ref() {
                img {
                    src: "{url}",
                    alt: "{event.title}",
                    style: "width: 100%; height: 192px; object-fit: cover; display: block;",
                }
            }
            div { style: "padding: {spacing::CARD_PADDING};",
                h2 { style: "font-size: 1.3rem; margin: 0 0 {spacing::SM};", "{event.title}" }
                if !event.description.is_empty() {
                    p { style: "color: {palette.muted}; margin: 0 0 {spacing::MD};", "{event.description}" }
                }
                div { style: "display: grid; gap: {spacing::XS}; margin-bottom: {spacing::MD}; font-size: 0.9rem; color: {palette.muted};",
                    span { "📅 {date}" }
                    span { "🕒 {time}" }
                    span { "📍 {event.location}" }
                }
                if current.is_open_for(event_id) {
                    form { onsubmit: submit,
                        input {
                            r#type: "text",
                            placeholder: "Your Name",
                            value: "{current.name}",
                            oninput: move |ev| form.write().name = ev.value(),
                            style: "{input_style} margin-bottom: {spacing::SM};",
                        }
                        input {
                            r#type: "email",
                            placeholder: "Your Email",
                            value: "{current.email}",
                            oninput: move |ev| form.write().email = ev.value(),
                            style: "{input_style} margin-bottom: {spacing::SM};",
                        }
                        div { style: "display: flex; gap: {spacing::SM};",
                            button {
                                r#type: "submit",
                                disabled: submitting(),
                                style: "flex: 1; {register_style}",
                                "Confirm"
                            }
                            button {
                                r#type: "button",
                                onclick: move |_| form.write().cancel(),
                                style: "flex: 1; {secondary_button}",
                                "Cancel"
                            }
                        }
                    }
                } else {
                    button {
                        disabled: status.disabled(),
                        onclick: move |_| form.write().open(event_id),
                        style: "{register_style}",
                        "{status.label()}"
                    }
                }
            }
        }
    }
}
