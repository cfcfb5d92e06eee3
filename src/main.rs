//! Timeline Ruler
//!
//! Desktop demo hosting the time ruler component.

mod app;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timeline_ruler=info")))
        .with(fmt::layer())
        .init();

    tracing::info!("starting timeline ruler demo");

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Timeline Ruler")
                .with_inner_size(LogicalSize::new(1280.0, 320.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
