//! Search session state and render output.

/// State of one search overlay session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSessionState {
    /// Whether the overlay is rendered at all.
    pub is_visible: bool,

    /// Mirror of what the user typed. Never written to the store directly.
    pub input_value: String,
}

/// Focus and caret state of the search input.
///
/// Selection offsets are in UTF-16 code units, the unit text inputs report
/// their selection in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub focused: bool,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Which animation the overlay container runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Opening.
    In,
    /// Closing; the overlay disappears when the animation ends.
    Out,
}

/// Render output of a visible search overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub input_value: String,
    pub placeholder: String,
    pub animation: AnimationPhase,
    pub input: InputState,
}
