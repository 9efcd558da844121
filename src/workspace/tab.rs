use serde::{Deserialize, Serialize};

use crate::routes;

/// One open editor tab: a navigation target plus its derived display label.
///
/// The serialized shape is `{to, label, pinned?}`, matching the `tabs:open`
/// storage entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub to: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pinned: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl Tab {
    pub fn new(path: impl Into<String>) -> Self {
        let to = path.into();
        let label = routes::tab_label(&to);
        Self {
            to,
            label,
            pinned: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_label() {
        assert_eq!(Tab::new("/").label, "home.md");
        assert_eq!(Tab::new("/projects").label, "projects.md");
        assert_eq!(Tab::new("/notes/rust").label, "rust.md");
    }

    #[test]
    fn test_new_is_unpinned() {
        assert!(!Tab::new("/about").pinned);
    }

    #[test]
    fn test_serialize_omits_pinned_when_false() {
        let json = serde_json::to_string(&Tab::new("/about")).expect("serialize tab");
        assert_eq!(json, r#"{"to":"/about","label":"about.md"}"#);
    }

    #[test]
    fn test_serialize_keeps_pinned_when_true() {
        let mut tab = Tab::new("/about");
        tab.pinned = true;
        let json = serde_json::to_string(&tab).expect("serialize tab");
        assert!(json.contains(r#""pinned":true"#));
    }

    #[test]
    fn test_deserialize_without_pinned() {
        let tab: Tab = serde_json::from_str(r#"{"to":"/","label":"home.md"}"#)
            .expect("deserialize tab");
        assert!(!tab.pinned);
    }
}
