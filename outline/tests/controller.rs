//! Tests for the outline controller: loading, expansion, rendering and
//! activation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use outline::{
    DestinationResolutionError, LoadState, NodePath, OutlineConfig, OutlineController,
    OutlineFetchError, OutlineNode, OutlineSource, OutlineView,
};

/// A source whose behavior is scripted by the test.
#[derive(Default)]
struct ScriptedSource {
    outline: Option<Vec<OutlineNode<u32>>>,
    fail_fetch: bool,
    fail_resolve: bool,
    fetch_gate: Option<Arc<Notify>>,
    resolve_gate: Option<Arc<Notify>>,
    fetch_calls: AtomicUsize,
    resolve_calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(outline: Vec<OutlineNode<u32>>) -> Self {
        Self {
            outline: Some(outline),
            ..Default::default()
        }
    }

    fn without_outline() -> Self {
        Self::default()
    }

    fn failing() -> Self {
        Self {
            fail_fetch: true,
            ..Default::default()
        }
    }

    fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.fetch_gate = Some(gate);
        self
    }

    fn resolve_gated(mut self, gate: Arc<Notify>) -> Self {
        self.resolve_gate = Some(gate);
        self
    }

    fn failing_resolve(mut self) -> Self {
        self.fail_resolve = true;
        self
    }
}

#[async_trait]
impl OutlineSource for ScriptedSource {
    type Destination = u32;
    type Location = String;

    async fn fetch_outline(&self) -> Result<Option<Vec<OutlineNode<u32>>>, OutlineFetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.fetch_gate {
            gate.notified().await;
        }
        if self.fail_fetch {
            return Err(OutlineFetchError::malformed("broken outline dictionary"));
        }
        Ok(self.outline.clone())
    }

    async fn resolve_destination(&self, destination: &u32) -> Result<String, DestinationResolutionError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.resolve_gate {
            gate.notified().await;
        }
        if self.fail_resolve {
            return Err(DestinationResolutionError::unresolvable(destination.to_string()));
        }
        Ok(format!("page {}", destination))
    }
}

type Navigations = Arc<Mutex<Vec<String>>>;

fn controller_with_log() -> (OutlineController<ScriptedSource>, Navigations) {
    let log: Navigations = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let controller = OutlineController::new().with_navigate(move |location: String| {
        sink.lock().unwrap().push(location);
    });
    (controller, log)
}

/// `[{Ch1, [1.1]}, {Ch2}]`
fn chapters() -> Vec<OutlineNode<u32>> {
    vec![
        OutlineNode::new("Ch1").with_child(OutlineNode::new("1.1")),
        OutlineNode::new("Ch2"),
    ]
}

async fn load(controller: &OutlineController<ScriptedSource>, source: ScriptedSource) -> Arc<ScriptedSource> {
    let source = Arc::new(source);
    let fetch = controller
        .set_document(Some(Arc::clone(&source)))
        .expect("fetch should be spawned");
    fetch.await.unwrap();
    source
}

/// `(glyph, title, depth)` for every row.
fn rows(view: &OutlineView) -> Vec<(Option<String>, String, usize)> {
    view.rows()
        .iter()
        .map(|r| (r.glyph.clone(), r.title.clone(), r.depth))
        .collect()
}

fn row(glyph: Option<&str>, title: &str, depth: usize) -> (Option<String>, String, usize) {
    (glyph.map(str::to_string), title.to_string(), depth)
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn test_no_document_shows_placeholder() {
    let controller = OutlineController::<ScriptedSource>::new();

    assert!(controller.set_document(None).is_none());
    assert_eq!(
        controller.view(),
        OutlineView::Placeholder("No outline available".to_string())
    );
    assert_eq!(controller.load_state(), LoadState::Idle);
}

#[tokio::test]
async fn test_clearing_document_drops_outline_and_pending_fetch() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;
    controller.toggle(&NodePath::root(0));
    assert_eq!(controller.visible_len(), 3);

    let gate = Arc::new(Notify::new());
    let pending = controller
        .set_document(Some(Arc::new(ScriptedSource::new(chapters()).gated(Arc::clone(&gate)))))
        .unwrap();
    tokio::task::yield_now().await;

    assert!(controller.set_document(None).is_none());
    gate.notify_one();
    pending.await.unwrap();

    assert!(controller.view().is_placeholder());
    assert_eq!(controller.load_state(), LoadState::Idle);
    assert!(controller.expanded_paths().is_empty());
    assert!(controller.source().is_none());
}

#[tokio::test]
async fn test_absent_outline_shows_placeholder() {
    let controller = OutlineController::new();
    let source = load(&controller, ScriptedSource::without_outline()).await;

    assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 1);
    assert!(controller.view().is_placeholder());
    assert_eq!(controller.load_state(), LoadState::Empty);
}

#[tokio::test]
async fn test_empty_outline_shows_placeholder() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(Vec::new())).await;

    assert!(controller.view().is_placeholder());
    assert!(controller.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_leaves_outline_empty() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::failing()).await;

    assert!(controller.view().is_placeholder());
    let state = controller.load_state();
    assert!(state.as_error().unwrap().contains("broken outline dictionary"));
}

#[tokio::test]
async fn test_custom_placeholder() {
    let controller: OutlineController<ScriptedSource> =
        OutlineController::with_config(OutlineConfig::default().with_placeholder("Nothing to show"));
    controller.set_document(None);

    assert_eq!(
        controller.view(),
        OutlineView::Placeholder("Nothing to show".to_string())
    );
}

#[test]
fn test_set_document_outside_runtime_does_not_panic() {
    let controller = OutlineController::new();
    let fetch = controller.set_document(Some(Arc::new(ScriptedSource::new(chapters()))));

    assert!(fetch.is_none());
    assert!(controller.load_state().as_error().is_some());
    assert!(controller.view().is_placeholder());
}

#[tokio::test]
async fn test_loading_state_while_fetch_pending() {
    let controller = OutlineController::new();
    let gate = Arc::new(Notify::new());
    let fetch = controller
        .set_document(Some(Arc::new(ScriptedSource::new(chapters()).gated(Arc::clone(&gate)))))
        .unwrap();

    assert!(controller.load_state().is_loading());
    assert!(controller.view().is_placeholder());

    gate.notify_one();
    fetch.await.unwrap();
    assert!(controller.load_state().is_ready());
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_initial_render_is_collapsed() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;

    assert_eq!(
        rows(&controller.view()),
        vec![row(Some("▶"), "Ch1", 0), row(None, "Ch2", 0)]
    );
}

#[tokio::test]
async fn test_click_expands_then_collapses() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;
    let ch1 = NodePath::root(0);

    let activation = controller.activate(&ch1);
    assert_eq!(activation.toggled, Some(true));
    assert!(activation.resolution.is_none());
    assert_eq!(controller.expanded_paths(), vec![ch1.clone()]);

    let view = controller.view();
    assert_eq!(
        rows(&view),
        vec![row(Some("▼"), "Ch1", 0), row(None, "1.1", 1), row(None, "Ch2", 0)]
    );
    assert_eq!(view.rows()[1].indent, 20);
    assert_eq!(view.rows()[1].path, ch1.child(0));

    let activation = controller.activate(&ch1);
    assert_eq!(activation.toggled, Some(false));
    assert!(controller.expanded_paths().is_empty());
    assert_eq!(
        rows(&controller.view()),
        vec![row(Some("▶"), "Ch1", 0), row(None, "Ch2", 0)]
    );
}

#[tokio::test]
async fn test_click_resolves_destination_once() {
    let (controller, navigations) = controller_with_log();
    let source = load(
        &controller,
        ScriptedSource::new(vec![OutlineNode::new("X").with_destination(42)]),
    )
    .await;

    let activation = controller.activate(&NodePath::root(0));
    assert!(activation.toggled.is_none());
    activation.finished().await;

    assert_eq!(source.resolve_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*navigations.lock().unwrap(), vec!["page 42".to_string()]);
}

#[tokio::test]
async fn test_resolution_failure_is_swallowed() {
    let (controller, navigations) = controller_with_log();
    let source = load(
        &controller,
        ScriptedSource::new(vec![OutlineNode::new("X").with_destination(42)]).failing_resolve(),
    )
    .await;

    let activation = controller.activate(&NodePath::root(0));
    let handle = activation.resolution.expect("resolution should be spawned");
    assert!(handle.await.is_ok());

    assert_eq!(source.resolve_calls.load(Ordering::SeqCst), 1);
    assert!(navigations.lock().unwrap().is_empty());
    assert_eq!(controller.visible_len(), 1);
}

#[tokio::test]
async fn test_stale_fetch_is_discarded() {
    let controller = OutlineController::new();
    let gate = Arc::new(Notify::new());
    let document_a = ScriptedSource::new(vec![OutlineNode::new("From A")]).gated(Arc::clone(&gate));
    let document_b = ScriptedSource::new(vec![OutlineNode::new("From B")]);

    let fetch_a = controller.set_document(Some(Arc::new(document_a))).unwrap();
    tokio::task::yield_now().await;
    let fetch_b = controller.set_document(Some(Arc::new(document_b))).unwrap();
    fetch_b.await.unwrap();

    gate.notify_one();
    fetch_a.await.unwrap();

    assert_eq!(rows(&controller.view()), vec![row(None, "From B", 0)]);
}

#[tokio::test]
async fn test_stale_fetch_does_not_fill_pending_document() {
    let controller = OutlineController::new();
    let gate_a = Arc::new(Notify::new());
    let gate_b = Arc::new(Notify::new());
    let document_a = ScriptedSource::new(vec![OutlineNode::new("From A")]).gated(Arc::clone(&gate_a));
    let document_b = ScriptedSource::new(vec![OutlineNode::new("From B")]).gated(Arc::clone(&gate_b));

    let fetch_a = controller.set_document(Some(Arc::new(document_a))).unwrap();
    let fetch_b = controller.set_document(Some(Arc::new(document_b))).unwrap();

    gate_a.notify_one();
    fetch_a.await.unwrap();
    assert!(controller.view().is_placeholder());
    assert!(controller.load_state().is_loading());

    gate_b.notify_one();
    fetch_b.await.unwrap();
    assert_eq!(rows(&controller.view()), vec![row(None, "From B", 0)]);
}

// =============================================================================
// Expansion
// =============================================================================

#[tokio::test]
async fn test_leaf_toggle_has_no_effect() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;
    let ch2 = NodePath::root(1);
    let before = controller.view();

    assert!(!controller.toggle(&ch2));
    assert!(controller.activate(&ch2).is_noop());
    assert!(!controller.is_expanded(&ch2));
    assert_eq!(controller.view(), before);
}

#[tokio::test]
async fn test_unknown_path_is_ignored() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;

    assert!(!controller.toggle(&NodePath::root(9)));
    assert!(controller.activate(&NodePath::root(0).child(5)).is_noop());
    assert!(controller.activate_row(17).is_noop());
}

#[tokio::test]
async fn test_same_title_in_different_branches_expands_independently() {
    let controller = OutlineController::new();
    load(
        &controller,
        ScriptedSource::new(vec![
            OutlineNode::new("Part I").with_child(
                OutlineNode::new("Introduction").with_child(OutlineNode::new("Scope")),
            ),
            OutlineNode::new("Part II").with_child(
                OutlineNode::new("Introduction").with_child(OutlineNode::new("Goals")),
            ),
        ]),
    )
    .await;
    controller.expand_all();
    controller.toggle(&NodePath::root(0).child(0));

    let titles: Vec<String> = controller.view().rows().iter().map(|r| r.title.clone()).collect();
    assert_eq!(
        titles,
        vec!["Part I", "Introduction", "Part II", "Introduction", "Goals"]
    );
}

#[tokio::test]
async fn test_expand_all_and_collapse_all() {
    let controller = OutlineController::new();
    load(
        &controller,
        ScriptedSource::new(vec![
            OutlineNode::new("Ch1").with_child(OutlineNode::new("1.1").with_child(OutlineNode::new("1.1.1"))),
            OutlineNode::new("Ch2"),
        ]),
    )
    .await;

    controller.expand_all();
    assert_eq!(
        rows(&controller.view()),
        vec![
            row(Some("▼"), "Ch1", 0),
            row(Some("▼"), "1.1", 1),
            row(None, "1.1.1", 2),
            row(None, "Ch2", 0),
        ]
    );

    controller.collapse_all();
    assert_eq!(controller.visible_len(), 2);
    assert!(controller.expanded_paths().is_empty());
}

#[tokio::test]
async fn test_children_hidden_when_ancestor_collapsed() {
    let controller = OutlineController::new();
    load(
        &controller,
        ScriptedSource::new(vec![OutlineNode::new("Ch1")
            .with_child(OutlineNode::new("1.1").with_child(OutlineNode::new("1.1.1")))]),
    )
    .await;
    let ch1 = NodePath::root(0);
    let section = ch1.child(0);

    controller.toggle(&ch1);
    controller.toggle(&section);
    assert_eq!(controller.visible_len(), 3);

    controller.toggle(&ch1);
    assert_eq!(controller.visible_len(), 1);
    // the inner entry keeps its own state
    assert!(controller.is_expanded(&section));

    controller.toggle(&ch1);
    assert_eq!(controller.visible_len(), 3);
}

#[tokio::test]
async fn test_document_switch_resets_expansion() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;
    controller.toggle(&NodePath::root(0));
    let generation = controller.generation();

    load(&controller, ScriptedSource::new(chapters())).await;

    assert_eq!(controller.generation(), generation + 1);
    assert!(controller.expanded_paths().is_empty());
    assert_eq!(controller.visible_len(), 2);
}

// =============================================================================
// Activation
// =============================================================================

#[tokio::test]
async fn test_activation_toggles_and_resolves() {
    let (controller, navigations) = controller_with_log();
    let source = load(
        &controller,
        ScriptedSource::new(vec![
            OutlineNode::new("Ch1")
                .with_destination(1)
                .with_child(OutlineNode::new("1.1").with_destination(2)),
        ]),
    )
    .await;

    let activation = controller.activate_row(0);
    assert_eq!(activation.toggled, Some(true));
    activation.finished().await;

    let activation = controller.activate_row(1);
    assert!(activation.toggled.is_none());
    activation.finished().await;

    assert_eq!(source.resolve_calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        *navigations.lock().unwrap(),
        vec!["page 1".to_string(), "page 2".to_string()]
    );
}

#[tokio::test]
async fn test_resolution_for_previous_document_is_dropped() {
    let (controller, navigations) = controller_with_log();
    let gate = Arc::new(Notify::new());
    load(
        &controller,
        ScriptedSource::new(vec![OutlineNode::new("X").with_destination(3)])
            .resolve_gated(Arc::clone(&gate)),
    )
    .await;

    let activation = controller.activate(&NodePath::root(0));
    load(&controller, ScriptedSource::new(chapters())).await;
    gate.notify_one();
    activation.finished().await;

    assert!(navigations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rows_carry_emphasis_and_destination() {
    let controller = OutlineController::new();
    load(
        &controller,
        ScriptedSource::new(vec![
            OutlineNode::new("Styled")
                .bold()
                .italic()
                .with_color([200, 0, 0])
                .with_destination(5),
        ]),
    )
    .await;

    let view = controller.view();
    let styled = &view.rows()[0];
    assert!(styled.has_destination);
    assert_eq!(
        styled.style.css(),
        "font-weight: bold; font-style: italic; color: rgb(200,0,0)"
    );
}

// =============================================================================
// Dirty tracking
// =============================================================================

#[tokio::test]
async fn test_dirty_flag() {
    let controller = OutlineController::new();
    load(&controller, ScriptedSource::new(chapters())).await;
    assert!(controller.is_dirty());

    controller.clear_dirty();
    controller.toggle(&NodePath::root(1));
    assert!(!controller.is_dirty());

    controller.toggle(&NodePath::root(0));
    assert!(controller.is_dirty());
}
