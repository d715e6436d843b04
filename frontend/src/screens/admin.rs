use campus_events_client::Event;
use dioxus::prelude::*;

use crate::context::{AppContext, Notice, ThemeContext};
use crate::format;
use crate::forms::{EventForm, EventSubmission};
use crate::theme::spacing;
use crate::widgets::Card;

#[component]
pub fn AdminScreen() -> Element {
    let app = use_context::<AppContext>();
    let palette = use_context::<ThemeContext>().palette();
    let mut form = use_signal(EventForm::default);
    let mut saving = use_signal(|| false);

    let snapshot = (app.snapshot)();
    let current = form();
    let input_style = palette.input_style();
    let primary_button = palette.primary_button_style();
    let secondary_button = palette.secondary_button_style();
    let label_style = format!(
        "display: block; margin-bottom: {}; font-size: 0.875rem; color: {};",
        spacing::XS,
        palette.muted
    );

    let submit = {
        let app = app.clone();
        move |ev: FormEvent| {
            ev.prevent_default();
            if saving() {
                return;
            }
            let submission = match form.read().submission() {
                Ok(s) => s,
                Err(msg) => {
                    app.notify(Notice::error(msg));
                    return;
                }
            };
            saving.set(true);
            let app = app.clone();
            spawn(async move {
                let store = app.store.clone();
                let result = match &submission {
                    EventSubmission::Create(draft) => store.add_event(draft).await.map(|_| ()),
                    EventSubmission::Update(id, draft) => store.update_event(*id, draft).await.map(|_| ()),
                };
                saving.set(false);
                match result {
                    Ok(()) => form.write().reset(),
                    Err(e) => app.report(&e),
                }
            });
        }
    };

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: {spacing::LG};",
                h1 { style: "font-size: 1.75rem; margin: 0;", "Admin Panel" }
                if !current.open {
                    button {
                        onclick: move |_| form.write().open_create(),
                        style: "{primary_button}",
                        "+ Add Event"
                    }
                }
            }

            if current.open {
                Card { palette,
                    h2 { style: "font-size: 1.2rem; margin: 0 0 {spacing::MD};", "{current.heading()}" }
                    form { onsubmit: submit,
                        div { style: "margin-bottom: {spacing::MD};",
                            label { style: "{label_style}", "Event Title" }
                            input {
                                r#type: "text",
                                value: "{current.title}",
                                oninput: move |ev| form.write().title = ev.value(),
                                style: "{input_style}",
                            }
                        }
                        div { style: "margin-bottom: {spacing::MD};",
                            label { style: "{label_style}", "Description" }
                            textarea {
                                rows: "3",
                                value: "{current.description}",
                                oninput: move |ev| form.write().description = ev.value(),
                                style: "{input_style}",
                            }
                        }
                        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: {spacing::MD}; margin-bottom: {spacing::MD};",
                            div {
                                label { style: "{label_style}", "Date" }
                                input {
                                    r#type: "date",
                                    value: "{current.event_date}",
                                    oninput: move |ev| form.write().event_date = ev.value(),
                                    style: "{input_style}",
                                }
                            }
                            div {
                                label { style: "{label_style}", "Time" }
                                input {
                                    r#type: "time",
                                    value: "{current.event_time}",
                                    oninput: move |ev| form.write().event_time = ev.value(),
                                    style: "{input_style}",
                                }
                            }
                        }
                        div { style: "margin-bottom: {spacing::MD};",
                            label { style: "{label_style}", "Location" }
                            input {
                                r#type: "text",
                                value: "{current.location}",
                                oninput: move |ev| form.write().location = ev.value(),
                                style: "{input_style}",
                            }
                        }
                        div { style: "margin-bottom: {spacing::MD};",
                            label { style: "{label_style}", "Poster URL (Optional)" }
                            input {
                                r#type: "url",
                                placeholder: "https://res.cloudinary.com/...",
                                value: "{current.poster_url}",
                                oninput: move |ev| form.write().poster_url = ev.value(),
                                style: "{input_style}",
                            }
                        }
                        div { style: "display: flex; gap: {spacing::SM};",
                            button {
                                r#type: "submit",
                                disabled: saving(),
                                style: "{primary_button}",
                                "{current.submit_label()}"
                            }
                            button {
                                r#type: "button",
                                onclick: move |_| form.write().reset(),
                                style: "{secondary_button}",
                                "Cancel"
                            }
                        }
                    }
                }
            }

            Card { palette,
                h2 { style: "font-size: 1.2rem; margin: 0 0 {spacing::MD};", "All Events" }
                if snapshot.events.is_empty() {
                    p { style: "color: {palette.muted};", "No events created yet." }
                }
                for event in snapshot.events.iter() {
                    AdminEventRow { key: "{event.id}", event: event.clone(), form }
                }
            }
        }
    }
}

/// One event with its edit, delete and roster controls.
#[component]
fn AdminEventRow(event: Event, form: Signal<EventForm>) -> Element {
    let app = use_context::<AppContext>();
    let palette = use_context::<ThemeContext>().palette();
    let mut form = form;
    let mut show_roster = use_signal(|| false);
    let mut confirming = use_signal(|| false);

    let snapshot = (app.snapshot)();
    let roster: Vec<_> = snapshot.participants(event.id).into_iter().cloned().collect();
    let date = format::short_date(event.event_date);
    let time = format::time_of_day(event.event_time);
    let secondary_button = palette.secondary_button_style();
    let danger_button = palette.danger_button_style();
    let event_id = event.id;

    let on_delete = {
        let app = app.clone();
        move |_| {
            confirming.set(false);
            let app = app.clone();
            spawn(async move {
                let store = app.store.clone();
                match store.delete_event(event_id).await {
                    Ok(()) => {
                        if form.read().editing == Some(event_id) {
                            form.write().reset();
                        }
                    }
                    Err(e) => app.report(&e),
                }
            });
        }
    };

    let edit_target = event.clone();

    rsx! {
        div { style: "border: 1px solid {palette.border}; border-radius: 8px; padding: {spacing::MD}; margin-bottom: {spacing::SM};",
            div { style: "display: flex; justify-content: space-between; gap: {spacing::MD};",
                div {
                    h3 { style: "margin: 0; font-size: 1.05rem;", "{event.title}" }
                    if !event.description.is_empty() {
                        p { style: "margin: {spacing::XS} 0 0; color: {palette.muted}; font-size: 0.9rem;", "{event.description}" }
                    }
                    div { style: "display: flex; gap: {spacing::MD}; margin-top: {spacing::SM}; font-size: 0.875rem; color: {palette.muted};",
                        span { "{date}" }
                        span { "{time}" }
                        span { "{event.location}" }
                    }
                    if let Some(url) = event.poster_url.as_ref() {
                        img {
                            src: "{url}",
                            alt: "{event.title}",
                            style: "margin-top: {spacing::SM}; width: 128px; height: 128px; object-fit: cover; border-radius: 6px;",
                        }
                    }
                }
                div { style: "display: flex; gap: {spacing::XS}; align-items: flex-start;",
                    button {
                        title: "View Participants",
                        onclick: move |_| show_roster.set(!show_roster()),
                        style: "{secondary_button}",
                        "Participants ({roster.len()})"
                    }
                    button {
                        title: "Edit Event",
                        onclick: move |_| form.write().edit(&edit_target),
                        style: "{secondary_button}",
                        "Edit"
                    }
                    if confirming() {
                        button { onclick: on_delete, style: "{danger_button}", "Confirm delete" }
                        button {
                            onclick: move |_| confirming.set(false),
                            style: "{secondary_button}",
                            "Keep"
                        }
                    } else {
                        button {
                            title: "Delete Event",
                            onclick: move |_| confirming.set(true),
                            style: "{danger_button}",
                            "Delete"
                        }
                    }
                }
            }
            if show_roster() {
                div { style: "margin-top: {spacing::MD}; padding-top: {spacing::MD}; border-top: 1px solid {palette.border};",
                    h4 { style: "margin: 0 0 {spacing::SM};", "Participants ({roster.len()})" }
                    if roster.is_empty() {
                        p { style: "color: {palette.muted}; font-size: 0.875rem;", "No registrations yet." }
                    }
                    for reg in roster.iter() {
                        div { key: "{reg.id}", style: "font-size: 0.875rem; padding: {spacing::SM}; margin-bottom: {spacing::XS}; border-radius: 6px; background: {palette.background};",
                            div { style: "font-weight: 600;", "{reg.student_name}" }
                            div { style: "color: {palette.muted};", "{reg.student_email}" }
                            div { style: "color: {palette.muted}; font-size: 0.75rem;", "{format::local_timestamp(reg.registered_at)}" }
                        }
                    }
                }
            }
        }
    }
}
