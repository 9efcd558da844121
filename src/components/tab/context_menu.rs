use dioxus::prelude::*;

use super::tab_bar::MenuRequest;
use crate::state::AppState;

/// Right-click menu for a tab. Pinned tabs survive the bulk operations, so
/// the menu only offers what will actually have an effect.
#[component]
pub fn TabContextMenu(request: MenuRequest, on_close: EventHandler<()>) -> Element {
    let mut state = use_context::<AppState>();

    let close_path = request.path.clone();
    let others_path = request.path.clone();
    let right_path = request.path.clone();
    let pin_path = request.path.clone();

    rsx! {
        // Backdrop to close the menu on outside click
        div {
            class: "context-menu-backdrop",
            onclick: move |_| on_close.call(()),
        }

        div {
            class: "context-menu",
            style: "left: {request.position.0}px; top: {request.position.1}px;",
            onclick: move |evt| evt.stop_propagation(),

            ContextMenuItem {
                label: "Close",
                on_click: move |_| {
                    state.close_tab(&close_path);
                    on_close.call(());
                },
            }
            ContextMenuItem {
                label: "Close Others",
                on_click: move |_| {
                    state.close_other_tabs(&others_path);
                    on_close.call(());
                },
            }
            ContextMenuItem {
                label: "Close to the Right",
                on_click: move |_| {
                    state.close_tabs_right_of(&right_path);
                    on_close.call(());
                },
            }

            ContextMenuSeparator {}

            ContextMenuItem {
                label: if request.pinned { "Unpin Tab" } else { "Pin Tab" },
                on_click: move |_| {
                    state.toggle_pin(&pin_path);
                    on_close.call(());
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ContextMenuItemProps {
    label: String,
    on_click: EventHandler<()>,
}

#[component]
fn ContextMenuItem(props: ContextMenuItemProps) -> Element {
    rsx! {
        div {
            class: "context-menu-item",
            onclick: move |_| props.on_click.call(()),
            span { class: "context-menu-label", "{props.label}" }
        }
    }
}

#[component]
fn ContextMenuSeparator() -> Element {
    rsx! {
        div { class: "context-menu-separator" }
    }
}
