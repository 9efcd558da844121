// Workspace module - open tabs, resizable chrome regions, drag state

mod layout;
mod tab;
mod tabs;

pub use layout::{
    is_narrow, panel_bounds, sidebar_bounds, Bounds, ReorderDrag, ResizeAxis, ResizeDrag,
    DEFAULT_PANEL_HEIGHT, DEFAULT_SIDEBAR_WIDTH,
};
pub use tab::Tab;
pub use tabs::TabSet;
