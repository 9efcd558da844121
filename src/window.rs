//! Desktop window configuration.

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

pub const INITIAL_WIDTH: f64 = 1280.0;
pub const INITIAL_HEIGHT: f64 = 800.0;

pub fn desktop_config() -> Config {
    let window = WindowBuilder::new()
        .with_title("Folio")
        .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
        .with_min_inner_size(LogicalSize::new(480.0, 360.0));
    Config::new().with_window(window)
}
