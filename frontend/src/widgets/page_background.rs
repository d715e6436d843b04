use dioxus::prelude::*;

use crate::theme::Palette;

#[component]
pub fn PageBackground(palette: Palette, children: Element) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: {palette.background}; color: {palette.on_surface};",
            {children}
        }
    }
}
