//! Shared plumbing for pointer-driven resize handles.
//!
//! A handle's `onmousedown` starts the drag and spawns an eval that tracks
//! the pointer at the document level, so the drag keeps working when the
//! cursor leaves the 4px handle. The promise resolves on mouse release
//! anywhere, which ends the drag.

use serde::Deserialize;

/// Tracks `pageX` for horizontal drags (sidebar width).
pub const TRACK_POINTER_X: &str = r#"
    new Promise((resolve) => {
        const handleMouseMove = (e) => {
            dioxus.send({ type: 'move', pos: e.pageX });
        };
        const handleMouseUp = () => {
            document.removeEventListener('mousemove', handleMouseMove);
            document.removeEventListener('mouseup', handleMouseUp);
            dioxus.send({ type: 'end' });
            resolve();
        };
        document.addEventListener('mousemove', handleMouseMove);
        document.addEventListener('mouseup', handleMouseUp);
    })
"#;

/// Tracks `pageY` for vertical drags (panel height).
pub const TRACK_POINTER_Y: &str = r#"
    new Promise((resolve) => {
        const handleMouseMove = (e) => {
            dioxus.send({ type: 'move', pos: e.pageY });
        };
        const handleMouseUp = () => {
            document.removeEventListener('mousemove', handleMouseMove);
            document.removeEventListener('mouseup', handleMouseUp);
            dioxus.send({ type: 'end' });
            resolve();
        };
        document.addEventListener('mousemove', handleMouseMove);
        document.addEventListener('mouseup', handleMouseUp);
    })
"#;

#[derive(Debug, Deserialize)]
pub struct DragMessage {
    pub r#type: String,
    pub pos: Option<f64>,
}
