use dioxus::document;
use dioxus::prelude::*;

mod global_search;

use global_search::GlobalSearch;

use super::resize;
use crate::routes::Page;
use crate::state::AppState;
use crate::workspace::{self, ResizeAxis, ResizeDrag};

/// Explorer column: title, search box, page navigation. Rendered only on
/// wide viewports; [`Drawer`] is the narrow-viewport variant.
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let width = *state.sidebar_width.read();
    let is_resizing = use_signal(|| false);

    rsx! {
        aside {
            class: "sidebar",
            class: if is_resizing() { "resizing" },
            style: "width: {width}px;",

            SidebarContent {}
            SidebarResizeHandle { is_resizing }
        }
    }
}

/// Overlay variant of the sidebar for narrow viewports. A backdrop click
/// dismisses it.
#[component]
pub fn Drawer() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| state.drawer_open.set(false),
        }
        aside { class: "drawer", SidebarContent {} }
    }
}

#[component]
fn SidebarContent() -> Element {
    let mut state = use_context::<AppState>();
    let active_path = state.active_path();

    rsx! {
        div { class: "sidebar-title", "PORTFOLIO" }
        GlobalSearch {}
        nav { class: "sidebar-nav",
            for page in Page::ALL {
                button {
                    class: "nav-item",
                    class: if page.path() == active_path { "active" },
                    onclick: move |_| {
                        state.navigate(page.path());
                        // No-op on wide viewports; collapses the drawer
                        // after navigating from it.
                        state.drawer_open.set(false);
                    },
                    {page.title()}
                }
            }
        }
    }
}

#[component]
fn SidebarResizeHandle(is_resizing: Signal<bool>) -> Element {
    let mut state = use_context::<AppState>();
    let mut drag = use_signal(ResizeDrag::default);

    rsx! {
        div {
            class: "sidebar-resize-handle",
            class: if is_resizing() { "resizing" },
            onmousedown: move |evt| {
                evt.prevent_default();
                is_resizing.set(true);
                let start_x = evt.page_coordinates().x;
                let start_width = *state.sidebar_width.read();
                drag.write().begin(ResizeAxis::Forward, start_x, start_width);

                spawn(async move {
                    let mut eval = document::eval(resize::TRACK_POINTER_X);

                    while let Ok(msg) = eval.recv::<resize::DragMessage>().await {
                        match msg.r#type.as_str() {
                            "move" => {
                                if let Some(pos) = msg.pos {
                                    let bounds = workspace::sidebar_bounds(
                                        state.viewport.read().0,
                                    );
                                    if let Some(width) = drag.read().update(pos, bounds) {
                                        state.set_sidebar_width(width);
                                    }
                                }
                            }
                            "end" => {
                                drag.write().end();
                                is_resizing.set(false);
                                break;
                            }
                            _ => {}
                        }
                    }
                });
            },
        }
    }
}
