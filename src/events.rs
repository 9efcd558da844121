//! Typed publish/subscribe bus between loosely coupled UI collaborators.
//!
//! Palette entries, search results, and page content all need to poke the
//! layout (open the preview dialog, switch theme) without being wired to it
//! directly. They publish here; the layout component is the sole subscriber
//! that acts on the messages.

use std::sync::LazyLock;

use tokio::sync::broadcast;

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Show the project preview dialog. `None` means "show the picker",
    /// which defaults to the first project.
    OpenPreview(Option<String>),
    SetTheme(Theme),
}

/// Global broadcast sender for UI events.
///
/// Subscribe via `UI_EVENTS.subscribe()`; publish via [`publish`].
pub static UI_EVENTS: LazyLock<broadcast::Sender<UiEvent>> =
    LazyLock::new(|| broadcast::channel(16).0);

/// Fire-and-forget publish. A send error only means no subscriber is
/// listening yet, which is fine during startup.
pub fn publish(event: UiEvent) {
    UI_EVENTS.send(event).ok();
}
