//! Static assets bundled into the binary.

/// Application stylesheet, injected from the root component.
pub const STYLESHEET: &str = include_str!("../assets/styles.css");
