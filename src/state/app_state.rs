use dioxus::prelude::*;

use crate::storage::{keys, STORE};
use crate::theme::Theme;
use crate::workspace::{self, TabSet};

/// Application state shared through the component tree.
///
/// All fields are `Signal<T>`, so the struct is `Copy` and can be captured
/// by closures and async blocks without explicit clones. Per-field signals
/// keep reactivity fine-grained: a panel resize does not re-render the tab
/// bar, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub tabs: Signal<TabSet>,
    pub theme: Signal<Theme>,
    pub panel_height: Signal<f64>,
    pub sidebar_width: Signal<f64>,
    /// Logical viewport size (width, height).
    pub viewport: Signal<(f64, f64)>,
    pub drawer_open: Signal<bool>,
    pub palette_open: Signal<bool>,
    pub preview_open: Signal<bool>,
    /// Slug shown by the preview dialog; `None` means the picker default.
    pub preview_slug: Signal<Option<String>>,
}

impl AppState {
    /// Restore persisted state, falling back to defaults where storage is
    /// absent or unusable. Dimensions are clamped into the bounds for the
    /// given viewport before first use.
    pub fn restore(initial_path: &str, viewport: (f64, f64)) -> Self {
        let (tabs, panel_height, sidebar_width) = {
            let store = STORE.read();
            let tabs = TabSet::restore(store.get(keys::OPEN_TABS), initial_path);
            let panel_height = store
                .get(keys::PANEL_HEIGHT)
                .and_then(|value| value.parse().ok())
                .unwrap_or(workspace::DEFAULT_PANEL_HEIGHT);
            let sidebar_width = store
                .get(keys::SIDEBAR_WIDTH)
                .and_then(|value| value.parse().ok())
                .unwrap_or(workspace::DEFAULT_SIDEBAR_WIDTH);
            (tabs, panel_height, sidebar_width)
        };

        Self {
            tabs: Signal::new(tabs),
            theme: Signal::new(Theme::load()),
            panel_height: Signal::new(workspace::panel_bounds(viewport.1).clamp(panel_height)),
            sidebar_width: Signal::new(workspace::sidebar_bounds(viewport.0).clamp(sidebar_width)),
            viewport: Signal::new(viewport),
            drawer_open: Signal::new(false),
            palette_open: Signal::new(false),
            preview_open: Signal::new(false),
            preview_slug: Signal::new(None),
        }
    }

    pub fn active_path(&self) -> String {
        self.tabs.read().active_path().to_string()
    }

    // === tabs ===

    pub fn navigate(&mut self, path: &str) {
        self.tabs.write().navigate(path);
        self.persist_tabs();
    }

    pub fn activate_tab(&mut self, index: usize) {
        self.tabs.write().activate(index);
        self.persist_tabs();
    }

    pub fn close_tab(&mut self, path: &str) {
        self.tabs.write().close(path);
        self.persist_tabs();
    }

    pub fn close_other_tabs(&mut self, path: &str) {
        self.tabs.write().close_others(path);
        self.persist_tabs();
    }

    pub fn close_tabs_right_of(&mut self, path: &str) {
        self.tabs.write().close_right_of(path);
        self.persist_tabs();
    }

    pub fn toggle_pin(&mut self, path: &str) {
        self.tabs.write().toggle_pin(path);
        self.persist_tabs();
    }

    pub fn reorder_tabs(&mut self, from: usize, to: usize) {
        self.tabs.write().reorder(from, to);
        self.persist_tabs();
    }

    fn persist_tabs(&self) {
        let json = self.tabs.read().to_json();
        STORE.write().set(keys::OPEN_TABS, &json);
    }

    // === theme ===

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
        STORE.write().set(keys::THEME, theme.as_str());
    }

    // === resizable regions ===

    /// Apply a panel height, clamped into the current viewport's bounds.
    /// Persisted on every change so an interrupted drag still sticks.
    pub fn set_panel_height(&mut self, height: f64) {
        let (_, viewport_height) = *self.viewport.read();
        let clamped = workspace::panel_bounds(viewport_height).clamp(height);
        self.panel_height.set(clamped);
        STORE
            .write()
            .set(keys::PANEL_HEIGHT, &format!("{}", clamped.round() as i64));
    }

    /// Apply a sidebar width, clamped into the current viewport's bounds.
    pub fn set_sidebar_width(&mut self, width: f64) {
        let (viewport_width, _) = *self.viewport.read();
        let clamped = workspace::sidebar_bounds(viewport_width).clamp(width);
        self.sidebar_width.set(clamped);
        STORE
            .write()
            .set(keys::SIDEBAR_WIDTH, &format!("{}", clamped.round() as i64));
    }

    /// Track a viewport change and re-clamp both dimensions, since their
    /// bounds depend on it.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport.set((width, height));
        let panel_height = *self.panel_height.read();
        let clamped = workspace::panel_bounds(height).clamp(panel_height);
        if clamped != panel_height {
            self.set_panel_height(clamped);
        }
        let sidebar_width = *self.sidebar_width.read();
        let clamped = workspace::sidebar_bounds(width).clamp(sidebar_width);
        if clamped != sidebar_width {
            self.set_sidebar_width(clamped);
        }
        if !self.is_narrow() {
            self.drawer_open.set(false);
        }
    }

    pub fn is_narrow(&self) -> bool {
        workspace::is_narrow(self.viewport.read().0)
    }

    // === overlays ===

    pub fn toggle_drawer(&mut self) {
        let open = !*self.drawer_open.read();
        self.drawer_open.set(open);
    }

    pub fn toggle_palette(&mut self) {
        let open = !*self.palette_open.read();
        self.palette_open.set(open);
    }

    pub fn open_preview(&mut self, slug: Option<String>) {
        self.preview_slug.set(slug);
        self.preview_open.set(true);
    }

    pub fn close_preview(&mut self) {
        self.preview_open.set(false);
    }

    /// Escape or a backdrop click: close whichever overlay is on top.
    /// Returns false when nothing was open.
    pub fn dismiss_overlay(&mut self) -> bool {
        if *self.palette_open.read() {
            self.palette_open.set(false);
            return true;
        }
        if *self.preview_open.read() {
            self.preview_open.set(false);
            return true;
        }
        if *self.drawer_open.read() {
            self.drawer_open.set(false);
            return true;
        }
        false
    }
}
