//! Application State Management for Widget Manager
//!
//! Centralized state management using Dioxus Signals. The collection
//! manager's state lives here: the authoritative widget collection, the
//! derived search view, one explicit finite-state machine per dialog, and
//! the transient notification slots.
//!
//! Each dialog is `Closed` or `Open { .. }` with its draft and typed field
//! errors carried inside the open state, so a dialog can never be "open
//! without a draft" or leak errors into a sibling dialog.

use std::time::Duration;

use dioxus::prelude::*;
use widget_core::{CoreError, FieldErrors, Widget, WidgetDraft};

// ============================================================================
// Timing constants
// ============================================================================

/// Quiet period after the last keystroke before a remote search is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// How long a transient success notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

// ============================================================================
// Load State
// ============================================================================

/// State of the initial catalog load.
///
/// A failed load is surfaced to the user with a retry affordance rather
/// than being logged and swallowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// The initial `list_all` call is in flight.
    #[default]
    Loading,
    /// The catalog has been loaded.
    Ready,
    /// The load failed with the given user-facing message.
    Failed(String),
}

impl LoadState {
    /// Whether the catalog is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Whether the load failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

// ============================================================================
// Dialog State Machines
// ============================================================================

/// Create-widget dialog: closed, or open with a draft and its field errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CreateDialog {
    #[default]
    Closed,
    Open {
        draft: WidgetDraft,
        errors: FieldErrors,
    },
}

impl CreateDialog {
    /// Open with an empty draft.
    pub fn open(&mut self) {
        *self = CreateDialog::Open {
            draft: WidgetDraft::default(),
            errors: FieldErrors::default(),
        };
    }

    /// Close, discarding the draft.
    pub fn close(&mut self) {
        *self = CreateDialog::Closed;
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        matches!(self, CreateDialog::Open { .. })
    }
}

/// Update-widget dialog. The name is immutable: `original_name` identifies
/// the widget on the server regardless of what the draft holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UpdateDialog {
    #[default]
    Closed,
    Open {
        original_name: String,
        draft: WidgetDraft,
        errors: FieldErrors,
    },
}

impl UpdateDialog {
    /// Open seeded with a copy of the selected widget.
    pub fn open_for(&mut self, widget: &Widget) {
        *self = UpdateDialog::Open {
            original_name: widget.name.clone(),
            draft: WidgetDraft::from_widget(widget),
            errors: FieldErrors::default(),
        };
    }

    /// Close, discarding the draft.
    pub fn close(&mut self) {
        *self = UpdateDialog::Closed;
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        matches!(self, UpdateDialog::Open { .. })
    }
}

/// Delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Open { widget: Widget },
}

impl DeleteDialog {
    /// Open for the selected widget.
    pub fn open_for(&mut self, widget: Widget) {
        *self = DeleteDialog::Open { widget };
    }

    /// Close, clearing the selection.
    pub fn close(&mut self) {
        *self = DeleteDialog::Closed;
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        matches!(self, DeleteDialog::Open { .. })
    }
}

// ============================================================================
// Alerts and Notices
// ============================================================================

/// Kind of blocking alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Duplicate widget name rejected before any network call.
    Conflict,
    /// A network or API failure.
    Remote,
}

/// A blocking alert dialog (conflict or remote failure).
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    /// Dialog title for this alert.
    pub fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::Conflict => "Duplicate Name",
            AlertKind::Remote => "Error",
        }
    }
}

// ============================================================================
// Search State
// ============================================================================

/// Memo key for the filtered-view derivation: the trimmed query plus the
/// authoritative collection's revision.
pub type SearchKey = (String, u64);

/// Search query, derived view, and the bookkeeping that keeps remote
/// searches race-free.
///
/// Every issued search carries a monotonically increasing token; a result
/// is applied only if its token is still the latest issued, so a slow
/// superseded response can never overwrite a newer one. The last derivation
/// key is remembered so the derivation is a no-op when neither the query
/// nor the collection has changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// The raw query as typed.
    pub query: String,
    /// The filtered/search view rendered by the catalog page.
    pub filtered: Vec<Widget>,
    /// Token of the most recently issued search.
    issued: u64,
    /// Key of the last derivation that ran.
    last_key: Option<SearchKey>,
}

impl SearchState {
    /// Whether the derivation already ran for this key.
    pub fn key_matches(&self, key: &SearchKey) -> bool {
        self.last_key.as_ref() == Some(key)
    }

    /// Record a new derivation and hand out its token. Any token issued
    /// earlier is superseded from this point on.
    pub fn issue(&mut self, key: SearchKey) -> u64 {
        self.issued += 1;
        self.last_key = Some(key);
        self.issued
    }

    /// Apply a search result if its token is still the latest issued.
    /// Returns whether the result was applied.
    pub fn try_apply(&mut self, token: u64, results: Vec<Widget>) -> bool {
        if token != self.issued {
            return false;
        }
        self.filtered = results;
        true
    }

    /// The latest issued token.
    pub fn latest_token(&self) -> u64 {
        self.issued
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// The authoritative widget collection.
    pub widgets: Vec<Widget>,
    /// Bumped on every mutation of `widgets`; half of the search memo key.
    pub revision: u64,
    /// State of the initial load.
    pub load: LoadState,
    /// Search query and derived view.
    pub search: SearchState,
    /// Create dialog state machine.
    pub create_dialog: CreateDialog,
    /// Update dialog state machine.
    pub update_dialog: UpdateDialog,
    /// Delete confirmation state machine.
    pub delete_dialog: DeleteDialog,
    /// Blocking alert, if any.
    pub alert: Option<Alert>,
    /// Transient success notice.
    pub notice: Option<String>,
    /// Sequence number guarding notice expiry.
    notice_seq: u64,
}

impl AppState {
    /// Create new application state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a widget with this name already exists (case-insensitive).
    pub fn has_widget_named(&self, name: &str) -> bool {
        self.widgets.iter().any(|w| w.name_matches(name))
    }

    /// Seed both the authoritative collection and, for an empty query, the
    /// filtered view after a successful initial load.
    pub fn seed(&mut self, widgets: Vec<Widget>) {
        self.revision += 1;
        self.load = LoadState::Ready;
        self.widgets = widgets;
        if self.search.query.trim().is_empty() {
            self.search.filtered = self.widgets.clone();
            self.search.last_key = Some((String::new(), self.revision));
        }
    }

    /// Append a newly created widget.
    pub fn insert_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
        self.revision += 1;
    }

    /// Replace the entry whose name equals the updated widget's name.
    pub fn replace_widget(&mut self, widget: Widget) {
        if let Some(slot) = self.widgets.iter_mut().find(|w| w.name == widget.name) {
            *slot = widget;
            self.revision += 1;
        }
    }

    /// Remove the entry with this exact name.
    pub fn remove_widget(&mut self, name: &str) {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.name != name);
        if self.widgets.len() != before {
            self.revision += 1;
        }
    }

    /// Surface the duplicate-name conflict for `name`.
    pub fn show_conflict(&mut self, name: &str) {
        self.alert = Some(Alert {
            kind: AlertKind::Conflict,
            message: CoreError::duplicate(name).to_string(),
        });
    }

    /// Surface a remote failure.
    pub fn show_remote_error(&mut self, message: impl Into<String>) {
        self.alert = Some(Alert {
            kind: AlertKind::Remote,
            message: message.into(),
        });
    }

    /// Dismiss the current alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Set the transient notice; returns the sequence number its expiry
    /// must present to clear it.
    pub fn set_notice(&mut self, text: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(text.into());
        self.notice_seq
    }

    /// Clear the notice, but only if no newer notice has replaced it.
    pub fn clear_notice_if(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }
}

// ============================================================================
// Global State
// ============================================================================

/// Global application state signal.
/// Use this in components to access and modify app state.
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Set the transient success notice and schedule its expiry.
///
/// The sequence guard means an expiry timer can only clear the notice it
/// was started for, never a newer one.
pub fn show_notice(text: impl Into<String>) {
    let seq = APP_STATE.write().set_notice(text);
    spawn(async move {
        tokio::time::sleep(NOTICE_TTL).await;
        APP_STATE.write().clear_notice_if(seq);
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(name: &str) -> Widget {
        Widget::new(name, "Bright outdoor light", 29.99)
    }

    #[test]
    fn test_create_dialog_state_machine() {
        let mut dialog = CreateDialog::default();
        assert!(!dialog.is_open());

        dialog.open();
        assert!(dialog.is_open());
        match &dialog {
            CreateDialog::Open { draft, errors } => {
                assert_eq!(*draft, WidgetDraft::default());
                assert!(!errors.has_errors());
            }
            CreateDialog::Closed => panic!("dialog should be open"),
        }

        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_update_dialog_seeds_draft_and_keeps_name() {
        let mut dialog = UpdateDialog::default();
        dialog.open_for(&widget("Solar Lamp"));
        match &dialog {
            UpdateDialog::Open {
                original_name,
                draft,
                ..
            } => {
                assert_eq!(original_name, "Solar Lamp");
                assert_eq!(draft.name, "Solar Lamp");
                assert_eq!(draft.price, "29.99");
            }
            UpdateDialog::Closed => panic!("dialog should be open"),
        }
    }

    #[test]
    fn test_delete_dialog_holds_selection() {
        let mut dialog = DeleteDialog::default();
        dialog.open_for(widget("Solar Lamp"));
        assert!(dialog.is_open());
        dialog.close();
        assert_eq!(dialog, DeleteDialog::Closed);
    }

    #[test]
    fn test_seed_initializes_both_views() {
        let mut state = AppState::new();
        state.seed(vec![widget("Solar Lamp"), widget("Desk Fan")]);
        assert!(state.load.is_ready());
        assert_eq!(state.widgets.len(), 2);
        assert_eq!(state.search.filtered.len(), 2);
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_seed_with_active_query_leaves_filtered_view_alone() {
        let mut state = AppState::new();
        state.search.query = "lamp".to_string();
        state.seed(vec![widget("Solar Lamp")]);
        // The remote search derivation owns the filtered view here.
        assert!(state.search.filtered.is_empty());
        assert!(!state.search.key_matches(&("lamp".to_string(), 1)));
    }

    #[test]
    fn test_mutations_bump_revision() {
        let mut state = AppState::new();
        state.seed(vec![widget("Solar Lamp")]);
        assert_eq!(state.revision, 1);

        state.insert_widget(widget("Desk Fan"));
        assert_eq!(state.revision, 2);
        assert_eq!(state.widgets.len(), 2);

        let mut updated = widget("Desk Fan");
        updated.price = 15.0;
        state.replace_widget(updated);
        assert_eq!(state.revision, 3);
        assert_eq!(state.widgets[1].price, 15.0);

        state.remove_widget("Desk Fan");
        assert_eq!(state.revision, 4);
        assert!(!state.has_widget_named("Desk Fan"));

        // Removing a missing name is a no-op.
        state.remove_widget("Desk Fan");
        assert_eq!(state.revision, 4);
    }

    #[test]
    fn test_has_widget_named_is_case_insensitive() {
        let mut state = AppState::new();
        state.seed(vec![widget("Solar Lamp")]);
        assert!(state.has_widget_named("solar lamp"));
        assert!(state.has_widget_named("SOLAR LAMP"));
        assert!(!state.has_widget_named("Desk Fan"));
    }

    #[test]
    fn test_search_token_discards_stale_results() {
        let mut search = SearchState::default();
        let first = search.issue(("lamp".to_string(), 1));
        let second = search.issue(("lamps".to_string(), 1));
        assert!(first < second);
        assert_eq!(search.latest_token(), second);

        // The second search resolves first and wins.
        assert!(search.try_apply(second, vec![widget("Solar Lamp")]));
        assert_eq!(search.filtered.len(), 1);

        // The superseded first search resolves late and is discarded.
        assert!(!search.try_apply(first, Vec::new()));
        assert_eq!(search.filtered.len(), 1);
    }

    #[test]
    fn test_search_key_memoization() {
        let mut search = SearchState::default();
        let key = ("lamp".to_string(), 3);
        assert!(!search.key_matches(&key));
        search.issue(key.clone());
        assert!(search.key_matches(&key));
        // A different revision means a fresh derivation.
        assert!(!search.key_matches(&("lamp".to_string(), 4)));
    }

    #[test]
    fn test_conflict_alert_message() {
        let mut state = AppState::new();
        state.show_conflict("Solar Lamp");
        let alert = state.alert.as_ref().expect("alert should be set");
        assert_eq!(alert.kind, AlertKind::Conflict);
        assert_eq!(alert.title(), "Duplicate Name");
        assert_eq!(
            alert.message,
            "Widget with name \"Solar Lamp\" already exists. Please choose another name."
        );

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_notice_sequence_guard() {
        let mut state = AppState::new();
        let first = state.set_notice("Widget created successfully!");
        let second = state.set_notice("Widget 'Solar Lamp' deleted successfully!");

        // The stale timer fires and must not clear the newer notice.
        state.clear_notice_if(first);
        assert!(state.notice.is_some());

        state.clear_notice_if(second);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_load_state_predicates() {
        assert!(!LoadState::Loading.is_ready());
        assert!(LoadState::Ready.is_ready());
        assert!(LoadState::Failed("boom".to_string()).is_failed());
    }
}
