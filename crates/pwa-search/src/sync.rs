//! Debounced search input synchronisation.

use std::sync::Arc;

use pwa_navigation::QueryParams;
use tokio::runtime::Handle;

use crate::actions::SearchActions;
use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::session::{AnimationPhase, InputState, SearchSessionState, SearchView};

/// The search overlay controller.
///
/// Visibility is driven by an external "active" flag (usually the store's
/// `search.active`). The overlay becomes visible as soon as the flag turns
/// on, but only disappears once its closing animation has finished.
/// While invisible it renders nothing and ignores input events.
pub struct SearchSync {
    config: SearchConfig,
    actions: Arc<dyn SearchActions>,
    session: SearchSessionState,
    input: InputState,
    external_active: bool,
    focus_on_render: bool,
    debouncer: Debouncer,
}

impl std::fmt::Debug for SearchSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSync")
            .field("session", &self.session)
            .field("input", &self.input)
            .field("external_active", &self.external_active)
            .field("commit_pending", &self.debouncer.is_pending())
            .finish_non_exhaustive()
    }
}

impl SearchSync {
    /// Create an inactive, invisible search overlay.
    ///
    /// Debounced commits are timed on `runtime`, so input events may be fed
    /// from outside of it.
    pub fn new(config: SearchConfig, actions: Arc<dyn SearchActions>, runtime: Handle) -> Self {
        let debouncer = Debouncer::new(config.debounce(), runtime);
        Self {
            config,
            actions,
            session: SearchSessionState::default(),
            input: InputState::default(),
            external_active: false,
            focus_on_render: false,
            debouncer,
        }
    }

    /// Current session state.
    pub fn session(&self) -> &SearchSessionState {
        &self.session
    }

    /// Current focus and caret state.
    pub fn input(&self) -> InputState {
        self.input
    }

    /// Whether a debounced commit is waiting.
    pub fn is_commit_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // =========================================================================
    // EXTERNAL FLAG
    // =========================================================================

    /// Follow a change of the external "active" flag.
    ///
    /// When the flag turns on, the overlay is activated and seeded with the
    /// current search phrase from the query parameters.
    pub fn set_active(&mut self, active: bool, params: &dyn QueryParams) {
        if self.external_active == active {
            return;
        }
        self.external_active = active;

        if active {
            let phrase = params
                .query_param(&self.config.query_param)
                .unwrap_or_default();
            self.activate(phrase);
        }
    }

    /// Show the overlay with the input seeded to `current_phrase`.
    ///
    /// Focus moves to the input after the next render. No-op while the
    /// overlay is already visible.
    pub fn activate(&mut self, current_phrase: impl Into<String>) {
        if self.session.is_visible {
            return;
        }

        self.session.is_visible = true;
        self.session.input_value = current_phrase.into();
        self.focus_on_render = true;
        tracing::debug!(phrase = %self.session.input_value, "search activated");
    }

    // =========================================================================
    // INPUT EVENTS
    // =========================================================================

    /// Handle a change of the input value.
    pub fn on_keystroke(&mut self, raw_value: impl Into<String>) {
        if !self.session.is_visible {
            return;
        }

        let value = raw_value.into();
        self.session.input_value.clone_from(&value);

        let actions = Arc::clone(&self.actions);
        self.debouncer
            .schedule(move || actions.set_search_phrase(&value));
    }

    /// Handle the input losing focus.
    pub fn on_blur(&mut self) {
        if !self.session.is_visible {
            return;
        }

        self.input.focused = false;
        self.flush();
    }

    /// Handle the input gaining focus. Places the caret at the end.
    pub fn on_focus(&mut self) {
        if !self.session.is_visible {
            return;
        }

        self.input.focused = true;
        self.flush();

        let end = self.session.input_value.encode_utf16().count();
        self.input.selection_start = end;
        self.input.selection_end = end;
    }

    /// Handle a form submission.
    ///
    /// An empty input swallows the submission. Returns whether the search
    /// was submitted.
    pub fn on_submit(&mut self) -> bool {
        if !self.session.is_visible || self.session.input_value.is_empty() {
            return false;
        }

        self.input.focused = false;
        self.flush();
        self.actions.submit_search();
        true
    }

    /// Handle a click on the backdrop.
    ///
    /// Only requests hiding; the overlay stays until its closing animation
    /// ends.
    pub fn on_overlay_dismiss(&mut self) {
        if !self.session.is_visible {
            return;
        }

        self.actions.toggle_search(false);
    }

    /// Handle the end of an open/close animation.
    pub fn on_visual_transition_end(&mut self) {
        self.session.is_visible = self.external_active;

        if !self.session.is_visible {
            self.focus_on_render = false;
            self.input.focused = false;
            tracing::debug!("search hidden");
        }
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Render output, or `None` while invisible.
    pub fn render(&self) -> Option<SearchView> {
        if !self.session.is_visible {
            return None;
        }

        let animation = if self.external_active {
            AnimationPhase::In
        } else {
            AnimationPhase::Out
        };

        Some(SearchView {
            input_value: self.session.input_value.clone(),
            placeholder: self.config.placeholder.clone(),
            animation,
            input: self.input,
        })
    }

    /// Run effects scheduled for after the render, such as auto-focus.
    pub fn did_render(&mut self) {
        if self.focus_on_render && self.session.is_visible {
            self.focus_on_render = false;
            self.on_focus();
        }
    }

    /// Commit the mirror now, dropping any waiting debounced commit.
    fn flush(&mut self) {
        self.debouncer.cancel();
        self.actions.set_search_phrase(&self.session.input_value);
    }
}
