//! # Widget UI
//!
//! Dioxus Desktop UI for Widget Manager.
//!
//! This crate provides the management interface for the remote widget
//! catalog: list, debounced search, create, update, and delete, with
//! inline validation and transient notifications.

use std::sync::OnceLock;

use widget_api::WidgetApi;
use widget_core::ApiConfig;

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use widget_api;
pub use widget_core;

// Re-export main components
pub use app::App;
pub use components::{
    AlertDialog, ConfirmDeleteDialog, CreateWidgetDialog, TextArea, TextInput,
    UpdateWidgetDialog, WidgetCard,
};
pub use pages::CatalogPage;
pub use state::{
    APP_STATE, Alert, AlertKind, AppState, CreateDialog, DeleteDialog, LoadState, SearchState,
    UpdateDialog,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Widget Manager";

/// Application display title
pub const TITLE: &str = "Widget Manager - Catalog";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../assets/main.css");

// ============================================================================
// API Client Handle
// ============================================================================

/// The process-wide API client, configured once at launch.
static API: OnceLock<WidgetApi> = OnceLock::new();

/// Configure the API client. Later calls are ignored.
pub fn init_api(config: &ApiConfig) {
    let _ = API.set(WidgetApi::new(config));
}

/// The API client used by the UI flows.
pub(crate) fn api() -> &'static WidgetApi {
    API.get_or_init(|| WidgetApi::new(&ApiConfig::default()))
}

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Widget Manager desktop application
///
/// Loads the endpoint configuration, initializes the API client, and
/// starts the Dioxus desktop app.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     widget_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let config = match ApiConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to the default API endpoint: {}", e);
            ApiConfig::default()
        }
    };
    tracing::info!("Using widget API at {}", config.base_url);
    init_api(&config);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 760.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Widget Manager");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Widget Manager"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".widget-card"));
    }
}
