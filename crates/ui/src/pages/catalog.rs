//! # Catalog Page
//!
//! The widget collection manager. This page owns the three flows that touch
//! the remote API directly:
//!
//! - **Initial load**: fetches the full collection on mount; a failure is
//!   shown with a Retry button instead of being swallowed.
//! - **Search**: keystrokes update the query immediately; the remote
//!   derivation runs after a 300 ms quiet period. An empty query restores
//!   the full collection without a network call.
//! - **Derivation**: [`refresh_filtered`] is the single function that
//!   recomputes the filtered view. It is memoized on the (trimmed query,
//!   collection revision) key, so query edits and collection mutations can
//!   both trigger it without double-issuing requests, and every remote
//!   search carries a token so superseded responses are discarded.

use dioxus::prelude::*;
use widget_core::Widget;

use crate::api;
use crate::components::inputs::TextInput;
use crate::components::widget_card::WidgetCard;
use crate::state::{APP_STATE, AppState, LoadState, SEARCH_DEBOUNCE};

// ============================================================================
// Catalog Page Component
// ============================================================================

/// Main catalog page component
#[component]
pub fn CatalogPage() -> Element {
    // Kick off the initial load once on mount.
    use_effect(|| {
        load_widgets();
    });

    let state = APP_STATE.read();
    let load = state.load.clone();
    let query = state.search.query.clone();
    let filtered = state.search.filtered.clone();
    let notice = state.notice.clone();
    drop(state);

    rsx! {
        div {
            class: "catalog-page",

            h2 { class: "catalog-title", "List of Widgets" }

            // Transient success notice
            if let Some(notice) = notice {
                div { class: "notice-banner", "{notice}" }
            }

            match load {
                LoadState::Loading => rsx! {
                    p { class: "catalog-status", "Loading widgets..." }
                },

                LoadState::Failed(ref message) => rsx! {
                    div {
                        class: "catalog-error",
                        p { "Failed to load widgets: {message}" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| load_widgets(),
                            "Retry"
                        }
                    }
                },

                LoadState::Ready => rsx! {
                    div {
                        class: "catalog-toolbar",

                        button {
                            class: "btn btn-accent btn-wide",
                            onclick: move |_| {
                                APP_STATE.write().create_dialog.open();
                            },
                            "Create Widget"
                        }

                        TextInput {
                            value: query.clone(),
                            label: "Search Widget",
                            placeholder: "Search by name",
                            on_change: move |value: String| set_query(value),
                        }
                    }

                    if filtered.is_empty() {
                        p { class: "catalog-empty", "No widgets found." }
                    } else {
                        div {
                            class: "widget-grid",

                            for widget in filtered.iter() {
                                WidgetCard {
                                    key: "{widget.name}",
                                    widget: widget.clone(),
                                    on_edit: move |w: Widget| {
                                        APP_STATE.write().update_dialog.open_for(&w);
                                    },
                                    on_delete: move |w: Widget| {
                                        APP_STATE.write().delete_dialog.open_for(w);
                                    },
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

// ============================================================================
// Load Flow
// ============================================================================

/// Fetch the full collection and seed both views.
///
/// Also used by the Retry button when the initial load failed.
pub(crate) fn load_widgets() {
    APP_STATE.write().load = LoadState::Loading;

    spawn(async move {
        match api().list_all().await {
            Ok(widgets) => {
                tracing::info!("Loaded {} widgets", widgets.len());
                APP_STATE.write().seed(widgets);
                refresh_filtered();
            }
            Err(e) => {
                tracing::error!("Failed to load widget catalog: {}", e);
                APP_STATE.write().load = LoadState::Failed(e.user_message());
            }
        }
    });
}

// ============================================================================
// Search Flow
// ============================================================================

/// Store a search keystroke and schedule the debounced derivation.
///
/// Each keystroke spawns its own timer; only the timer whose captured value
/// still matches the query when it fires actually runs the derivation.
fn set_query(value: String) {
    APP_STATE.write().search.query = value.clone();

    spawn(async move {
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        if APP_STATE.read().search.query != value {
            return;
        }
        refresh_filtered();
    });
}

/// Outcome of planning a derivation run.
#[derive(Debug, PartialEq)]
enum Derivation {
    /// Neither the query nor the collection changed since the last run.
    Skip,
    /// Empty query: the authoritative collection was applied directly.
    Local,
    /// A remote search must be issued with this token.
    Remote { token: u64, query: String },
}

/// Decide what the derivation should do and apply the local cases.
///
/// An empty query needs no remote call: the authoritative collection is the
/// filtered view. Issuing the token even in that case supersedes any search
/// still in flight, so a slow response cannot overwrite the restored list.
fn plan_derivation(state: &mut AppState) -> Derivation {
    let key = (state.search.query.trim().to_string(), state.revision);

    if state.search.key_matches(&key) {
        return Derivation::Skip;
    }

    let token = state.search.issue(key.clone());
    let (query, _revision) = key;

    if query.is_empty() {
        let full = state.widgets.clone();
        state.search.try_apply(token, full);
        return Derivation::Local;
    }

    Derivation::Remote { token, query }
}

/// Recompute the filtered view from the current query and collection.
///
/// This is the single derivation point: the debounced query path, the
/// post-mutation paths, and the post-load path all land here. The memo key
/// makes repeat invocations with unchanged inputs free, and the issued
/// token makes sure only the latest search's result is ever applied.
pub(crate) fn refresh_filtered() {
    let plan = plan_derivation(&mut APP_STATE.write());

    let Derivation::Remote { token, query } = plan else {
        return;
    };

    spawn(async move {
        match api().search_by_name(&query).await {
            Ok(results) => {
                if APP_STATE.write().search.try_apply(token, results) {
                    tracing::debug!("Applied search results for '{}'", query);
                }
            }
            Err(e) => {
                tracing::warn!("Search for '{}' failed: {}", query, e);
                APP_STATE.write().search.try_apply(token, Vec::new());
            }
        }
    });
}

// ============================================================================
// Tests
// ============================================================================
