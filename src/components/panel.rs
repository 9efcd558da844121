use dioxus::document;
use dioxus::prelude::*;

use super::resize;
use crate::state::AppState;
use crate::terminal::{Terminal, PROMPT};
use crate::workspace::{self, ResizeAxis, ResizeDrag};

const PANEL_TABS: [&str; 4] = ["TERMINAL", "OUTPUT", "PROBLEMS", "DEBUG CONSOLE"];

/// Bottom panel hosting the toy terminal. Resizable by dragging its top
/// edge; the height is persisted on every move.
#[component]
pub fn Panel() -> Element {
    let mut state = use_context::<AppState>();
    let height = *state.panel_height.read();
    let is_resizing = use_signal(|| false);

    let mut terminal = use_signal(Terminal::default);
    let mut input = use_signal(String::new);

    let mut submit = move || {
        let line = input.read().clone();
        if let Some(path) = terminal.write().run(&line) {
            state.navigate(&path);
        }
        input.set(String::new());
        // Keep the newest line in view.
        spawn(async move {
            document::eval(
                "const el = document.querySelector('.terminal-scrollback'); \
                 if (el) el.scrollTop = el.scrollHeight;",
            )
            .await
            .ok();
        });
    };

    rsx! {
        section {
            class: "panel",
            class: if is_resizing() { "resizing" },
            style: "height: {height}px;",

            PanelResizeHandle { is_resizing }

            header { class: "panel-header",
                for (index, name) in PANEL_TABS.iter().enumerate() {
                    span { class: if index == 0 { "current" }, "{name}" }
                }
            }

            div { class: "terminal-scrollback",
                for (index, line) in terminal.read().lines().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "terminal-line",
                        class: if line.is_input() { "input" },
                        "{line.text()}"
                    }
                }
            }

            div { class: "terminal-input-row",
                span { class: "terminal-prompt", "{PROMPT}" }
                input {
                    r#type: "text",
                    spellcheck: "false",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt| {
                        let modifiers = evt.modifiers();
                        match evt.key() {
                            Key::Enter => submit(),
                            Key::Character(c)
                                if c.eq_ignore_ascii_case("c")
                                    && (modifiers.ctrl() || modifiers.meta()) =>
                            {
                                evt.prevent_default();
                                terminal.write().interrupt();
                                input.set(String::new());
                            }
                            _ => {}
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn PanelResizeHandle(is_resizing: Signal<bool>) -> Element {
    let mut state = use_context::<AppState>();
    let mut drag = use_signal(ResizeDrag::default);

    rsx! {
        div {
            class: "panel-resize-handle",
            class: if is_resizing() { "resizing" },
            onmousedown: move |evt| {
                evt.prevent_default();
                is_resizing.set(true);
                let start_y = evt.page_coordinates().y;
                let start_height = *state.panel_height.read();
                // The panel grows as the pointer moves up.
                drag.write().begin(ResizeAxis::Reverse, start_y, start_height);

                spawn(async move {
                    let mut eval = document::eval(resize::TRACK_POINTER_Y);

                    while let Ok(msg) = eval.recv::<resize::DragMessage>().await {
                        match msg.r#type.as_str() {
                            "move" => {
                                if let Some(pos) = msg.pos {
                                    let bounds = workspace::panel_bounds(
                                        state.viewport.read().1,
                                    );
                                    if let Some(height) = drag.read().update(pos, bounds) {
                                        state.set_panel_height(height);
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
