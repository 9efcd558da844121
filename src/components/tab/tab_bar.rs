use dioxus::document;
use dioxus::prelude::*;

use super::context_menu::TabContextMenu;
use super::tab_item::TabItem;
use crate::state::AppState;
use crate::workspace::ReorderDrag;

/// A pending right-click menu: which tab it targets and where to show it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRequest {
    pub path: String,
    pub pinned: bool,
    pub position: (i32, i32),
}

/// Editor-style tab strip above the content area.
///
/// Reordering is live: pressing a tab starts a drag, and every tab the
/// pointer passes over swaps with the dragged one immediately. Release
/// anywhere ends the drag, which is why the release listener is registered
/// at the document level rather than on the strip.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let mut drag = use_signal(ReorderDrag::default);
    let mut menu = use_signal(|| None::<MenuRequest>);

    let tabs = state.tabs.read().clone();
    let active_index = tabs.active_index();

    rsx! {
        div { class: "tab-bar", role: "tablist",
            for (index, tab) in tabs.tabs().iter().enumerate() {
                TabItem {
                    key: "{tab.to}",
                    index,
                    tab: tab.clone(),
                    is_active: index == active_index,
                    on_drag_start: move |index: usize| {
                        drag.write().begin(index);

                        // Dragging must survive the pointer leaving the
                        // strip, so watch for release document-wide.
                        spawn(async move {
                            document::eval(
                                r#"
                                new Promise((resolve) => {
                                    const handleMouseUp = () => {
                                        document.removeEventListener('mouseup', handleMouseUp);
                                        resolve();
                                    };
                                    document.addEventListener('mouseup', handleMouseUp);
                                })
                                "#,
                            )
                            .await
                            .ok();
                            drag.write().end();
                        });
                    },
                    on_drag_enter: move |target: usize| {
                        if let Some((from, to)) = drag.write().enter(target) {
                            state.reorder_tabs(from, to);
                        }
                    },
                    on_menu: move |request: MenuRequest| menu.set(Some(request)),
                }
            }
        }

        if let Some(request) = menu() {
            TabContextMenu {
                request,
                on_close: move |_| menu.set(None),
            }
        }
    }
}
