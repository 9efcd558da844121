use dioxus::prelude::*;

use crate::events::{self, UiEvent};
use crate::projects::PROJECTS;
use crate::routes::Page;
use crate::search::{rank, Matchable};
use crate::state::AppState;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
enum PaletteAction {
    Goto(&'static str),
    Preview(&'static str),
    SetTheme(Theme),
}

#[derive(Debug, Clone, PartialEq)]
struct PaletteEntry {
    label: String,
    hint: String,
    action: PaletteAction,
}

impl Matchable for PaletteEntry {
    fn label(&self) -> &str {
        &self.label
    }
    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }
}

fn entries() -> Vec<PaletteEntry> {
    let mut out: Vec<PaletteEntry> = Page::ALL
        .iter()
        .map(|page| PaletteEntry {
            label: page.title().to_string(),
            hint: page.path().to_string(),
            action: PaletteAction::Goto(page.path()),
        })
        .collect();
    out.extend(PROJECTS.iter().map(|project| PaletteEntry {
        label: format!("Preview {}", project.name),
        hint: project.slug.to_string(),
        action: PaletteAction::Preview(project.slug),
    }));
    out.extend([Theme::Dark, Theme::Light].map(|theme| PaletteEntry {
        label: format!("Theme: {}", theme.title()),
        hint: String::new(),
        action: PaletteAction::SetTheme(theme),
    }));
    out
}

/// Matches for `query`, best first. A blank query lists every entry in
/// catalog order so the palette doubles as a command reference.
fn matches(query: &str) -> Vec<PaletteEntry> {
    let all = entries();
    if query.trim().is_empty() {
        return all;
    }
    rank(query, &all).into_iter().cloned().collect()
}

/// Quick-open overlay, toggled with Ctrl/Cmd+P.
#[component]
pub fn Palette() -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| 0usize);

    let results = matches(&query.read());

    let mut run = move |entry: &PaletteEntry| {
        match &entry.action {
            PaletteAction::Goto(path) => state.navigate(path),
            PaletteAction::Preview(slug) => {
                events::publish(UiEvent::OpenPreview(Some(slug.to_string())));
            }
            PaletteAction::SetTheme(theme) => {
                events::publish(UiEvent::SetTheme(*theme));
            }
        }
        state.palette_open.set(false);
    };

    rsx! {
        div {
            class: "palette-backdrop",
            onclick: move |_| state.palette_open.set(false),
        }

        div { class: "palette",
            input {
                class: "palette-input",
                r#type: "text",
                placeholder: "Type to jump to a page, project, or theme",
                autofocus: true,
                value: "{query}",
                oninput: move |evt| {
                    query.set(evt.value());
                    selected.set(0);
                },
                onkeydown: move |evt| {
                    let results = matches(&query.peek());
                    match evt.key() {
                        Key::ArrowDown if !results.is_empty() => {
                            evt.prevent_default();
                            let current = *selected.peek();
                            selected.set((current + 1).min(results.len() - 1));
                        }
                        Key::ArrowUp => {
                            evt.prevent_default();
                            let current = *selected.peek();
                            selected.set(current.saturating_sub(1));
                        }
                        Key::Enter if !results.is_empty() => {
                            let index = (*selected.peek()).min(results.len() - 1);
                            run(&results[index]);
                        }
                        Key::Escape => state.palette_open.set(false),
                        _ => {}
                    }
                },
            }

            ul { class: "palette-results",
                if results.is_empty() {
                    li { class: "palette-item", "No matching commands" }
                }
                for (index, entry) in results.iter().enumerate() {
                    li {
                        key: "{entry.label}",
                        class: "palette-item",
                        class: if index == *selected.read() { "selected" },
                        onmouseenter: move |_| selected.set(index),
                        onclick: {
                            let entry = entry.clone();
                            move |_| run(&entry)
                        },
                        span { "{entry.label}" }
                        if !entry.hint.is_empty() {
                            span { class: "hint", "{entry.hint}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_lists_full_catalog() {
        let all = matches("");
        assert_eq!(all.len(), Page::ALL.len() + PROJECTS.len() + 2);
        // Catalog order: pages first, then projects, then themes.
        assert_eq!(all[0].label, "Home");
        assert!(all.last().map(|e| e.label.as_str()) == Some("Theme: Light"));
    }

    #[test]
    fn test_query_narrows_to_matches() {
        let results = matches("prj");
        assert!(results.iter().any(|e| e.label == "Projects"));
        assert!(results.iter().all(|e| e.label != "About"));
    }

    #[test]
    fn test_project_entries_match_on_slug_hint() {
        let results = matches("cli-playground");
        assert!(results.iter().any(|e| e.label == "Preview CLI Playground"));
    }

    #[test]
    fn test_theme_entries_present() {
        let results = matches("theme");
        let labels: Vec<&str> = results.iter().map(|e| e.label.as_str()).collect();
        assert!(labels.contains(&"Theme: Dark"));
        assert!(labels.contains(&"Theme: Light"));
    }
}
