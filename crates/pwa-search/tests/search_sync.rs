//! Integration tests for the debounced search overlay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use proptest::prelude::*;
use pwa_navigation::Location;
use pwa_search::{AnimationPhase, SearchActions, SearchConfig, SearchSync, StoreSearchActions};
use pwa_store::{Action, Store};
use tokio::runtime::{Builder, Handle, Runtime};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    SetPhrase(String),
    Toggle(bool),
    Submit,
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn phrases(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SetPhrase(phrase) => Some(phrase),
                _ => None,
            })
            .collect()
    }
}

impl SearchActions for Recorder {
    fn set_search_phrase(&self, phrase: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::SetPhrase(phrase.to_string()));
    }

    fn toggle_search(&self, visible: bool) {
        self.calls.lock().unwrap().push(Call::Toggle(visible));
    }

    fn submit_search(&self) {
        self.calls.lock().unwrap().push(Call::Submit);
    }
}

fn visible_search() -> (SearchSync, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let mut search = SearchSync::new(SearchConfig::default(), recorder.clone(), Handle::current());
    search.set_active(true, &Location::parse("/"));
    (search, recorder)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn paused_runtime() -> Runtime {
    Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_burst_commits_last_value_only() {
    let (mut search, recorder) = visible_search();

    search.on_keystroke("r");
    tokio::time::sleep(ms(100)).await;
    search.on_keystroke("re");
    tokio::time::sleep(ms(100)).await;
    search.on_keystroke("red");

    // Mirror follows every keystroke immediately
    assert_eq!(search.session().input_value, "red");
    assert!(recorder.phrases().is_empty());

    tokio::time::sleep(ms(249)).await;
    assert!(recorder.phrases().is_empty());

    tokio::time::sleep(ms(2)).await;
    assert_eq!(recorder.phrases(), vec!["red".to_string()]);
    assert!(!search.is_commit_pending());
}

#[tokio::test(start_paused = true)]
async fn test_blur_flushes_immediately() {
    let (mut search, recorder) = visible_search();

    search.on_keystroke("boots");
    tokio::time::sleep(ms(10)).await;
    search.on_blur();

    assert_eq!(recorder.phrases(), vec!["boots".to_string()]);
    assert!(!search.input().focused);

    // The flushed commit does not fire a second time
    tokio::time::sleep(ms(500)).await;
    assert_eq!(recorder.phrases(), vec!["boots".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_focus_flushes_and_moves_caret_to_end() {
    let (mut search, recorder) = visible_search();

    search.on_keystroke("grün");
    search.on_focus();

    assert_eq!(recorder.phrases(), vec!["grün".to_string()]);
    let input = search.input();
    assert!(input.focused);
    assert_eq!(input.selection_start, 4);
    assert_eq!(input.selection_end, 4);
}

#[tokio::test(start_paused = true)]
async fn test_caret_counts_utf16_units() {
    let (mut search, _recorder) = visible_search();

    search.on_keystroke("\u{1F462}s");
    search.on_focus();

    // The boot emoji lies outside the BMP and takes two units
    assert_eq!(search.input().selection_start, 3);
    assert_eq!(search.input().selection_end, 3);
}

#[tokio::test(start_paused = true)]
async fn test_empty_submit_is_swallowed() {
    let (mut search, recorder) = visible_search();
    search.on_focus();
    let before = recorder.calls();

    assert!(!search.on_submit());
    assert_eq!(recorder.calls(), before);
    assert!(search.input().focused);
}

#[tokio::test(start_paused = true)]
async fn test_submit_blurs_commits_then_submits() {
    let (mut search, recorder) = visible_search();
    search.on_focus();
    search.on_keystroke("hat");

    assert!(search.on_submit());

    let calls = recorder.calls();
    assert_eq!(
        &calls[calls.len() - 2..],
        &[Call::SetPhrase("hat".into()), Call::Submit]
    );
    assert!(!search.input().focused);
    assert!(!search.is_commit_pending());
}

#[tokio::test(start_paused = true)]
async fn test_activation_seeds_from_query_and_autofocuses() {
    let recorder = Arc::new(Recorder::default());
    let mut search = SearchSync::new(SearchConfig::default(), recorder.clone(), Handle::current());
    assert!(search.render().is_none());

    search.set_active(true, &Location::parse("/search?s=red+shoes"));
    let view = search.render().expect("visible after activation");
    assert_eq!(view.input_value, "red shoes");
    assert_eq!(view.animation, AnimationPhase::In);
    assert!(!view.input.focused);

    search.did_render();
    assert!(search.input().focused);
    assert_eq!(search.input().selection_end, 9);
    assert_eq!(recorder.phrases(), vec!["red shoes".to_string()]);

    // The focus effect runs once
    search.did_render();
    assert_eq!(recorder.phrases().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_activate_is_noop_while_visible() {
    let (mut search, _recorder) = visible_search();
    search.on_keystroke("typed");
    search.activate("other");
    assert_eq!(search.session().input_value, "typed");
}

#[tokio::test(start_paused = true)]
async fn test_overlay_dismiss_waits_for_animation() {
    let (mut search, recorder) = visible_search();

    search.on_overlay_dismiss();
    assert_eq!(recorder.calls(), vec![Call::Toggle(false)]);
    assert!(search.session().is_visible);

    // External flag follows the toggle, closing animation plays
    search.set_active(false, &Location::parse("/"));
    assert_eq!(
        search.render().map(|view| view.animation),
        Some(AnimationPhase::Out)
    );

    search.on_visual_transition_end();
    assert!(search.render().is_none());
    assert!(!search.session().is_visible);
}

#[tokio::test(start_paused = true)]
async fn test_opening_animation_end_keeps_overlay() {
    let (mut search, _recorder) = visible_search();
    search.on_visual_transition_end();
    assert!(search.session().is_visible);
}

#[tokio::test(start_paused = true)]
async fn test_invisible_overlay_ignores_input() {
    let recorder = Arc::new(Recorder::default());
    let mut search = SearchSync::new(SearchConfig::default(), recorder.clone(), Handle::current());

    search.on_keystroke("ghost");
    search.on_focus();
    search.on_blur();
    assert!(!search.on_submit());
    search.on_overlay_dismiss();

    tokio::time::sleep(ms(500)).await;
    assert!(recorder.calls().is_empty());
    assert_eq!(search.session().input_value, "");
}

#[tokio::test(start_paused = true)]
async fn test_store_backed_actions() {
    let store = Store::new();
    let submitted = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&submitted);
    let actions = Arc::new(StoreSearchActions::new(store.clone(), move || {
        *counter.lock().unwrap() += 1;
    }));

    let mut search = SearchSync::new(SearchConfig::default(), actions, Handle::current());
    store.dispatch(Action::ToggleSearch(true));
    search.set_active(store.state().search.active, &Location::parse("/"));

    search.on_keystroke("scarf");
    tokio::time::sleep(ms(300)).await;
    assert_eq!(store.state().search.phrase, "scarf");

    search.on_keystroke("scarves");
    assert!(search.on_submit());
    assert_eq!(store.state().search.phrase, "scarves");
    assert_eq!(*submitted.lock().unwrap(), 1);

    search.on_overlay_dismiss();
    assert!(!store.state().search.active);
}

#[test]
fn test_synchronous_caller_still_debounces() {
    let runtime = paused_runtime();
    let store = Store::new();
    let actions = Arc::new(StoreSearchActions::new(store.clone(), || {}));
    let mut search = SearchSync::new(SearchConfig::default(), actions, runtime.handle().clone());

    let commits = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&commits);
    store.subscribe(move |action| {
        if let Action::SetSearchPhrase(phrase) = action {
            sink.lock().unwrap().push(phrase.clone());
        }
    });

    store.dispatch(Action::ToggleSearch(true));
    search.set_active(true, &Location::parse("/"));
    for value in ["r", "re", "red"] {
        search.on_keystroke(value);
    }

    assert!(commits.lock().unwrap().is_empty());
    assert_eq!(store.state().search.phrase, "");
    assert!(search.is_commit_pending());

    runtime.block_on(async { tokio::time::sleep(ms(300)).await });
    assert_eq!(*commits.lock().unwrap(), vec!["red".to_string()]);
    assert_eq!(store.state().search.phrase, "red");
}

proptest! {
    /// Keystrokes closer together than the quiet period collapse into one
    /// commit of the final value.
    #[test]
    fn prop_burst_commits_only_last(
        values in prop::collection::vec("[a-z]{1,8}", 1..12),
        gaps in prop::collection::vec(0u64..250, 12),
    ) {
        let runtime = paused_runtime();

        let phrases = runtime.block_on(async {
            let (mut search, recorder) = visible_search();
            for (value, gap) in values.iter().zip(&gaps) {
                search.on_keystroke(value.as_str());
                tokio::time::sleep(ms(*gap)).await;
            }
            tokio::time::sleep(ms(300)).await;
            recorder.phrases()
        });

        prop_assert_eq!(phrases, vec![values.last().unwrap().clone()]);
    }
}
