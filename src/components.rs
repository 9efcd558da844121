// Components module - the Dioxus view layer
//
// State machinery lives in plain structs (`workspace`, `terminal`,
// `search`) so it stays testable without a Dioxus runtime; components here
// only wire events to it.

pub mod app;

mod activity_bar;
mod editor;
mod palette;
mod panel;
mod preview_dialog;
mod resize;
mod sidebar;
mod tab;
