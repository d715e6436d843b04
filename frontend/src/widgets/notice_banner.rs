use dioxus::prelude::*;

use crate::context::{AppContext, NoticeKind, ThemeContext};
use crate::theme::spacing;

/// Current notice, if any, with a dismiss button.
#[component]
pub fn NoticeBanner() -> Element {
    let app = use_context::<AppContext>();
    let palette = use_context::<ThemeContext>().palette();
    let notice = (app.notice)();

    let Some(notice) = notice else {
        return rsx! {};
    };
    let color = match notice.kind {
        NoticeKind::Success => palette.success,
        NoticeKind::Error => palette.error,
    };

    rsx! {
        div {
            role: "status",
            style: "display: flex; align-items: center; justify-content: space-between; gap: {spacing::MD}; padding: {spacing::SM} {spacing::MD}; margin-bottom: {spacing::MD}; border-radius: 8px; border: 1px solid {color}; color: {color}; background: {palette.surface};",
            span { "{notice.text}" }
            button {
                onclick: move |_| app.dismiss(),
                style: "background: none; border: none; color: {color}; cursor: pointer; font-size: 1rem;",
                "✕"
            }
        }
    }
}
