use super::tab::Tab;
use crate::routes;

/// The open-tab sequence and the active tab.
///
/// Invariants, upheld by every operation:
/// - the sequence is never empty (closing the last tab reseeds a home tab);
/// - the active index always points inside the sequence;
/// - tabs are unique by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: usize,
}

impl Default for TabSet {
    fn default() -> Self {
        Self {
            tabs: vec![Tab::new(routes::DEFAULT_PATH)],
            active: 0,
        }
    }
}

impl TabSet {
    /// Build from restored tabs, making sure `current_path` is open and
    /// active. An empty list seeds a single tab for `current_path`.
    pub fn from_tabs(tabs: Vec<Tab>, current_path: &str) -> Self {
        if tabs.is_empty() {
            return Self {
                tabs: vec![Tab::new(current_path)],
                active: 0,
            };
        }
        let mut set = Self { tabs, active: 0 };
        set.navigate(current_path);
        set
    }

    /// Restore from the serialized `tabs:open` value. Absent or corrupt
    /// data falls back to a single tab for `current_path`.
    pub fn restore(stored: Option<&str>, current_path: &str) -> Self {
        let tabs = stored
            .and_then(|raw| match serde_json::from_str::<Vec<Tab>>(raw) {
                Ok(tabs) => Some(tabs),
                Err(e) => {
                    tracing::warn!(%e, "Stored tab set is corrupt, starting fresh");
                    None
                }
            })
            .unwrap_or_default();
        Self::from_tabs(tabs, current_path)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.tabs).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false: every operation upholds the at-least-one-tab
    /// invariant.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn active_path(&self) -> &str {
        &self.active().to
    }

    fn index_of(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.to == path)
    }

    /// Open `path`: activate the existing tab, or append a new unpinned one.
    pub fn navigate(&mut self, path: &str) {
        match self.index_of(path) {
            Some(index) => self.active = index,
            None => {
                self.tabs.push(Tab::new(path));
                self.active = self.tabs.len() - 1;
            }
        }
    }

    pub fn activate(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    /// Close the tab for `path`. If it was active, the tab that slid into
    /// its index takes over, else the previous one. Closing the only tab
    /// reseeds a single home tab.
    pub fn close(&mut self, path: &str) {
        let Some(index) = self.index_of(path) else {
            return;
        };
        let was_active = index == self.active;
        self.tabs.remove(index);

        if self.tabs.is_empty() {
            self.reseed();
        } else if was_active {
            self.active = index.min(self.tabs.len() - 1);
        } else if self.active > index {
            self.active -= 1;
        }
    }

    /// Keep only the tab for `path` and any pinned tabs.
    pub fn close_others(&mut self, path: &str) {
        self.tabs.retain(|tab| tab.to == path || tab.pinned);
        if self.tabs.is_empty() {
            self.reseed();
            return;
        }
        self.active = self.index_of(path).unwrap_or(0);
    }

    /// Keep tabs at or before `path`'s index, plus pinned tabs anywhere.
    /// If the active tab is removed, the anchor tab becomes active.
    pub fn close_right_of(&mut self, path: &str) {
        let Some(anchor) = self.index_of(path) else {
            return;
        };
        let active_path = self.active().to.clone();
        self.tabs = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(index, tab)| *index <= anchor || tab.pinned)
            .map(|(_, tab)| tab.clone())
            .collect();
        // Tabs at or before the anchor keep their positions, so the anchor
        // index is still valid here.
        self.active = self.index_of(&active_path).unwrap_or(anchor);
    }

    /// Flip pinned state, then resort so pinned tabs precede unpinned ones.
    /// Relative order within each group is preserved; the active tab
    /// follows its path.
    pub fn toggle_pin(&mut self, path: &str) {
        let Some(index) = self.index_of(path) else {
            return;
        };
        self.tabs[index].pinned = !self.tabs[index].pinned;
        let active_path = self.active().to.clone();
        // sort_by_key is stable, which is exactly the partition we want.
        self.tabs.sort_by_key(|tab| !tab.pinned);
        self.active = self.index_of(&active_path).unwrap_or(0);
    }

    /// Move the tab at `from` to `to`. Out-of-range indices are ignored.
    /// Called on every pointer-enter during a drag, so reordering is live.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tabs.len() || to >= self.tabs.len() {
            return;
        }
        let active_path = self.active().to.clone();
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.active = self.index_of(&active_path).unwrap_or(0);
    }

    fn reseed(&mut self) {
        self.tabs = vec![Tab::new(routes::DEFAULT_PATH)];
        self.active = 0;
    }
}
