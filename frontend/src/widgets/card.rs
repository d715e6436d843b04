use dioxus::prelude::*;

use crate::theme::{spacing, Palette};

#[component]
pub fn Card(palette: Palette, children: Element) -> Element {
    rsx! {
        div {
            style: "background: {palette.surface}; border: 1px solid {palette.border}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin-bottom: {spacing::MD}; color: {palette.on_surface};",
            {children}
        }
    }
}
