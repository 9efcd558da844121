use dioxus::prelude::*;

use crate::events::{self, UiEvent};
use crate::projects::PROJECTS;
use crate::routes::Page;
use crate::state::AppState;

/// Content area for the active tab.
#[component]
pub fn Editor() -> Element {
    let state = use_context::<AppState>();
    let path = state.active_path();

    rsx! {
        main { class: "editor",
            match Page::from_path(&path) {
                Some(Page::Home) => rsx! { HomePage {} },
                Some(Page::Projects) => rsx! { ProjectsPage {} },
                Some(Page::About) => rsx! { AboutPage {} },
                Some(Page::Contact) => rsx! { ContactPage {} },
                None => rsx! { NotFoundPage { path } },
            }
        }
    }
}

#[component]
fn HomePage() -> Element {
    rsx! {
        h1 { "Hi, I build things." }
        p {
            "Welcome to my portfolio. Poke around with the sidebar, the "
            "terminal below, or press "
            code { "Ctrl+P" }
            " to jump anywhere."
        }
        p { "Start with the projects page to see what I have been working on." }
    }
}

#[component]
fn ProjectsPage() -> Element {
    rsx! {
        h1 { "Projects" }
        for project in PROJECTS {
            div { class: "project-card", key: "{project.slug}",
                h3 { "{project.name}" }
                p { "{project.description}" }
                button {
                    onclick: move |_| {
                        events::publish(UiEvent::OpenPreview(Some(project.slug.to_string())));
                    },
                    "Preview"
                }
            }
        }
    }
}

#[component]
fn AboutPage() -> Element {
    rsx! {
        h1 { "About" }
        p {
            "Software engineer with a soft spot for developer tools, text "
            "editors, and terminals. This site is a small love letter to all "
            "three."
        }
    }
}

#[component]
fn ContactPage() -> Element {
    rsx! {
        h1 { "Contact" }
        p { "Say hello:" }
        ul {
            li { "Email: hello@example.com" }
            li { "GitHub: github.com/example" }
        }
    }
}

/// Shown for paths opened through the terminal that are not content pages.
#[component]
fn NotFoundPage(path: String) -> Element {
    rsx! {
        h1 { "404" }
        p {
            "No file at "
            code { "{path}" }
            ". It may have been an experiment that never shipped."
        }
    }
}
