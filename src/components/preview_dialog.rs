use dioxus::prelude::*;

use crate::projects::{self, PROJECTS};
use crate::state::AppState;

/// Modal card for a project. Opened through the UI event bus; with no slug
/// it falls back to the first catalog entry.
#[component]
pub fn PreviewDialog() -> Element {
    let mut state = use_context::<AppState>();

    let project = state
        .preview_slug
        .read()
        .as_deref()
        .and_then(projects::find)
        .unwrap_or(&PROJECTS[0]);

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| state.close_preview(),

            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                h2 { "{project.name}" }
                p { class: "description", "{project.description}" }

                if let Some(url) = project.url {
                    button {
                        onclick: move |_| {
                            if let Err(e) = open::that(url) {
                                tracing::error!(%e, url, "Failed to open repository URL");
                            }
                        },
                        "Open repository ↗"
                    }
                }
            }
        }
    }
}
