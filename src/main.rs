mod assets;
mod components;
mod events;
mod projects;
mod routes;
mod search;
mod state;
mod storage;
mod terminal;
mod theme;
mod window;
mod workspace;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// Folio — a portfolio dressed up as a code editor
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    long_about = "Folio — a portfolio dressed up as a code editor\n\n\
        A desktop app that presents a personal portfolio through editor\n\
        chrome: tabs, a sidebar explorer, a command palette, and a toy\n\
        terminal.",
    after_long_help = "Examples:\n\
        \x20 folio                    Launch on the home page\n\
        \x20 folio --page /projects   Launch on the projects page"
)]
struct Cli {
    /// Page path to open at startup
    #[arg(long, default_value = routes::DEFAULT_PATH)]
    page: String,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() {
    let cli = Cli::parse();

    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    routes::set_initial_page(cli.page);
    tracing::info!(page = routes::initial_page(), "Starting Folio");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window::desktop_config())
        .launch(components::app::App);
}

fn init_tracing() {
    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer)
        .init();
}
