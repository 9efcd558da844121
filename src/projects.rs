//! The project catalog shown on the projects page, in the palette, and in
//! the preview dialog.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "editor-portfolio",
        name: "Editor-style Portfolio",
        description: "This very app: a portfolio dressed up as a code editor, with terminal and tabs.",
        url: Some("https://github.com/"),
    },
    Project {
        slug: "cli-playground",
        name: "CLI Playground",
        description: "Interactive terminal UI experiments.",
        url: Some("https://github.com/"),
    },
    Project {
        slug: "data-viz-demos",
        name: "Data Viz Demos",
        description: "Small chart and visualization demos.",
        url: Some("https://github.com/"),
    },
];

/// Look up a project by slug.
pub fn find(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_slug() {
        assert_eq!(find("cli-playground").map(|p| p.name), Some("CLI Playground"));
        assert_eq!(find("missing"), None);
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
