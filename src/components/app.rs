use dioxus::desktop::tao::event::{Event as TaoEvent, WindowEvent};
use dioxus::desktop::{use_wry_event_handler, window};
use dioxus::prelude::*;

use super::activity_bar::ActivityBar;
use super::editor::Editor;
use super::palette::Palette;
use super::panel::Panel;
use super::preview_dialog::PreviewDialog;
use super::sidebar::{Drawer, Sidebar};
use super::tab::TabBar;
use crate::assets;
use crate::events::{UiEvent, UI_EVENTS};
use crate::routes;
use crate::state::AppState;

/// Root component: owns the shared state, window-level event wiring, and
/// the overall workbench layout.
#[component]
pub fn App() -> Element {
    let mut state = use_context_provider(|| {
        let window = window();
        let size = window
            .inner_size()
            .to_logical::<f64>(window.scale_factor());
        AppState::restore(routes::initial_page(), (size.width, size.height))
    });

    // Keep the viewport signal in sync so resize bounds and the narrow
    // breakpoint track the real window.
    use_wry_event_handler(move |event, _| {
        if let TaoEvent::WindowEvent {
            event: WindowEvent::Resized(size),
            window_id,
            ..
        } = event
        {
            let window = window();
            if window_id == &window.id() {
                let size = size.to_logical::<f64>(window.scale_factor());
                state.set_viewport(size.width, size.height);
            }
        }
    });

    // Sole subscriber of the UI event bus: publishers (palette entries,
    // project cards) stay decoupled from the layout they affect.
    use_future(move || async move {
        let mut rx = UI_EVENTS.subscribe();

        while let Ok(event) = rx.recv().await {
            tracing::debug!(?event, "UI event");
            match event {
                UiEvent::OpenPreview(slug) => state.open_preview(slug),
                UiEvent::SetTheme(theme) => state.set_theme(theme),
            }
        }
    });

    let theme = *state.theme.read();
    let narrow = state.is_narrow();

    rsx! {
        style { {assets::STYLESHEET} }

        div {
            class: "app {theme.class()}",
            tabindex: 0,
            onkeydown: move |evt| {
                let modifiers = evt.modifiers();
                match evt.key() {
                    Key::Character(c)
                        if c.eq_ignore_ascii_case("p")
                            && (modifiers.ctrl() || modifiers.meta()) =>
                    {
                        evt.prevent_default();
                        state.toggle_palette();
                    }
                    Key::Escape => {
                        state.dismiss_overlay();
                    }
                    _ => {}
                }
            },

            div { class: "workbench",
                ActivityBar {}
                if !narrow {
                    Sidebar {}
                }
                div { class: "main-area",
                    TabBar {}
                    Editor {}
                }
            }

            Panel {}

            if narrow && *state.drawer_open.read() {
                Drawer {}
            }
            if *state.palette_open.read() {
                Palette {}
            }
            if *state.preview_open.read() {
                PreviewDialog {}
            }
        }
    }
}
