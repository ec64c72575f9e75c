//! Widget Manager
//!
//! Desktop management interface for a remote widget catalog.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Launch the Dioxus desktop application
    widget_ui::launch();
}
