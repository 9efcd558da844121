use dioxus::prelude::*;

use crate::events::{self, UiEvent};
use crate::projects::PROJECTS;
use crate::routes::Page;
use crate::search::{rank, Matchable};
use crate::state::AppState;

const MAX_RESULTS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
enum SearchAction {
    Goto(&'static str),
    Preview(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
struct SearchEntry {
    label: String,
    hint: &'static str,
    action: SearchAction,
}

impl Matchable for SearchEntry {
    fn label(&self) -> &str {
        &self.label
    }
    fn hint(&self) -> Option<&str> {
        Some(self.hint)
    }
}

fn entries() -> Vec<SearchEntry> {
    let mut out: Vec<SearchEntry> = Page::ALL
        .iter()
        .map(|page| SearchEntry {
            label: page.title().to_string(),
            hint: page.path(),
            action: SearchAction::Goto(page.path()),
        })
        .collect();
    out.extend(PROJECTS.iter().map(|project| SearchEntry {
        label: format!("Preview {}", project.name),
        hint: project.slug,
        action: SearchAction::Preview(project.slug),
    }));
    out
}

/// Best matches for `query`, capped at [`MAX_RESULTS`]. A blank query shows
/// nothing rather than everything.
fn matches(query: &str) -> Vec<SearchEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    rank(query, &entries())
        .into_iter()
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

/// Fuzzy search box above the sidebar nav.
#[component]
pub fn GlobalSearch() -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| 0usize);

    let results = matches(&query.read());

    let mut run = move |entry: &SearchEntry| {
        match entry.action {
            SearchAction::Goto(path) => {
                state.navigate(path);
                state.drawer_open.set(false);
            }
            SearchAction::Preview(slug) => {
                events::publish(UiEvent::OpenPreview(Some(slug.to_string())));
            }
        }
        query.set(String::new());
        selected.set(0);
    };

    rsx! {
        div { class: "global-search",
            input {
                r#type: "text",
                placeholder: "Search",
                value: "{query}",
                oninput: move |evt| {
                    query.set(evt.value());
                    selected.set(0);
                },
                onkeydown: move |evt| {
                    let results = matches(&query.peek());
                    if results.is_empty() {
                        if evt.key() == Key::Escape {
                            query.set(String::new());
                        }
                        return;
                    }
                    match evt.key() {
                        Key::ArrowDown => {
                            evt.prevent_default();
                            let current = *selected.peek();
                            selected.set((current + 1).min(results.len() - 1));
                        }
                        Key::ArrowUp => {
                            evt.prevent_default();
                            let current = *selected.peek();
                            selected.set(current.saturating_sub(1));
                        }
                        Key::Enter => {
                            let index = (*selected.peek()).min(results.len() - 1);
                            run(&results[index]);
                        }
                        Key::Escape => {
                            query.set(String::new());
                            selected.set(0);
                        }
                        _ => {}
                    }
                },
            }
            if !results.is_empty() {
                ul { class: "global-search-results",
                    for (index, entry) in results.iter().enumerate() {
                        li {
                            key: "{entry.hint}",
                            class: if index == *selected.read() { "selected" },
                            button {
                                onmouseenter: move |_| selected.set(index),
                                onclick: {
                                    let entry = entry.clone();
                                    move |_| run(&entry)
                                },
                                "{entry.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
