use dioxus::prelude::*;

use crate::routes::Page;
use crate::state::AppState;

fn glyph(page: Page) -> &'static str {
    match page {
        Page::Home => "🏠",
        Page::Projects => "🗂️",
        Page::About => "👤",
        Page::Contact => "✉️",
    }
}

/// Narrow icon strip on the far left. On narrow viewports it also hosts the
/// drawer toggle, since the sidebar column is gone.
#[component]
pub fn ActivityBar() -> Element {
    let mut state = use_context::<AppState>();
    let active_path = state.active_path();

    rsx! {
        aside { class: "activity-bar",
            if state.is_narrow() {
                button {
                    class: "activity-item",
                    title: "Explorer",
                    onclick: move |_| state.toggle_drawer(),
                    "☰"
                }
            }
            for page in Page::ALL {
                button {
                    class: "activity-item",
                    class: if page.path() == active_path { "active" },
                    title: page.title(),
                    onclick: move |_| state.navigate(page.path()),
                    {glyph(page)}
                }
            }
            div { class: "activity-spacer" }
            button {
                class: "activity-item",
                title: "Command Palette (Ctrl+P)",
                onclick: move |_| state.toggle_palette(),
                "⌘"
            }
        }
    }
}
