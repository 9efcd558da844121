use dioxus::prelude::*;

use super::tab_bar::MenuRequest;
use crate::state::AppState;
use crate::workspace::Tab;

#[component]
pub fn TabItem(
    index: usize,
    tab: Tab,
    is_active: bool,
    on_drag_start: EventHandler<usize>,
    on_drag_enter: EventHandler<usize>,
    on_menu: EventHandler<MenuRequest>,
) -> Element {
    let mut state = use_context::<AppState>();
    let path = tab.to.clone();

    let close_path = path.clone();
    let menu_path = path.clone();
    let menu_pinned = tab.pinned;

    rsx! {
        div {
            class: "tab",
            class: if is_active { "active" },
            role: "tab",
            onpointerdown: move |evt| {
                if evt.data().trigger_button()
                    == Some(dioxus::html::input_data::MouseButton::Primary)
                {
                    on_drag_start.call(index);
                }
            },
            onpointerenter: move |_| on_drag_enter.call(index),
            onclick: move |_| state.activate_tab(index),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                let coords = evt.client_coordinates();
                on_menu.call(MenuRequest {
                    path: menu_path.clone(),
                    pinned: menu_pinned,
                    position: (coords.x as i32, coords.y as i32),
                });
            },

            if tab.pinned {
                span { class: "pin-marker", "📌" }
            }
            span { class: "tab-label", "{tab.label}" }
            button {
                class: "tab-close",
                title: "Close",
                onclick: move |evt| {
                    // Keep the click from also activating the tab.
                    evt.stop_propagation();
                    state.close_tab(&close_path);
                },
                "×"
            }
        }
    }
}
