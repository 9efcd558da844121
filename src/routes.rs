//! Static content routes and path → label derivation.

use std::sync::OnceLock;

/// Route opened when nothing else is (also the reseed target when the last
/// tab is closed).
pub const DEFAULT_PATH: &str = "/";

/// The four content pages of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Projects, Page::About, Page::Contact];

    /// Navigation path, as used in tabs and the terminal alias table.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::About => "/about",
            Page::Contact => "/contact",
        }
    }

    /// Human title, as shown in the sidebar nav and the palette.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Editor-style file name, as shown on the tab.
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => "home.md",
            Page::Projects => "projects.md",
            Page::About => "about.md",
            Page::Contact => "contact.md",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|page| page.path() == path)
    }
}

/// Derive the tab label for a path.
///
/// Known routes map to their editor-style file names; anything else falls
/// back to the last non-empty path segment with the `.md` marker appended.
pub fn tab_label(path: &str) -> String {
    if let Some(page) = Page::from_path(path) {
        return page.file_name().to_string();
    }
    let segment = path
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or("untitled");
    format!("{segment}.md")
}

static INITIAL_PAGE: OnceLock<String> = OnceLock::new();

/// Record the route requested on the command line. First call wins.
pub fn set_initial_page(path: impl Into<String>) {
    INITIAL_PAGE.set(path.into()).ok();
}

/// The route the first window should show.
pub fn initial_page() -> &'static str {
    INITIAL_PAGE
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_roundtrip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_tab_label_known_routes() {
        assert_eq!(tab_label("/"), "home.md");
        assert_eq!(tab_label("/projects"), "projects.md");
        assert_eq!(tab_label("/contact"), "contact.md");
    }

    #[test]
    fn test_tab_label_fallback_last_segment() {
        assert_eq!(tab_label("/x/y"), "y.md");
        assert_eq!(tab_label("/x/y/"), "y.md");
        assert_eq!(tab_label("notes"), "notes.md");
    }

    #[test]
    fn test_tab_label_degenerate_path() {
        assert_eq!(tab_label("///"), "untitled.md");
        assert_eq!(tab_label(""), "untitled.md");
    }
}
