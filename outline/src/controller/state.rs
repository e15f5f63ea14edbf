//! Outline controller state.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tokio::task::JoinHandle;

use crate::config::OutlineConfig;
use crate::error::OutlineFetchError;
use crate::expansion::ExpansionState;
use crate::node::OutlineNode;
use crate::source::OutlineSource;
use crate::tree::{FlatNode, NodePath, OutlineTree};

/// Callback receiving resolved destinations.
pub type NavigateFn<L> = Arc<dyn Fn(L) + Send + Sync>;

/// Where the outline of the current document is in its lifecycle.
///
/// Informational only; the rendered view never shows a loading state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No document is loaded.
    #[default]
    Idle,
    /// The outline fetch is in flight.
    Loading,
    /// The outline was loaded and has entries.
    Ready,
    /// The document has no outline.
    Empty,
    /// The fetch failed; the outline is empty.
    Failed(String),
}

impl LoadState {
    /// Check if the fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if an outline with entries is loaded
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Get the failure message if present
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Internal state for the controller.
pub(super) struct ControllerInner<S: OutlineSource> {
    /// Source of the current document.
    pub source: Option<Arc<S>>,
    /// Bumped on every document change; fetch results carry the value they
    /// were issued under.
    pub generation: u64,
    /// Outline of the current document.
    pub tree: OutlineTree<S::Destination>,
    /// Expanded entries.
    pub expanded: ExpansionState,
    /// Flattened visible entries (rebuilt on every change).
    pub visible: Vec<FlatNode>,
    /// Lifecycle of the current outline.
    pub load_state: LoadState,
}

impl<S: OutlineSource> Default for ControllerInner<S> {
    fn default() -> Self {
        Self {
            source: None,
            generation: 0,
            tree: OutlineTree::new(),
            expanded: ExpansionState::new(),
            visible: Vec::new(),
            load_state: LoadState::Idle,
        }
    }
}

/// Owns the outline of the active document and its expansion state.
///
/// The controller reacts to two kinds of events: a document change
/// ([`set_document`](Self::set_document)) and a user activation
/// ([`activate`](Self::activate)). Both may start asynchronous work on the
/// ambient tokio runtime; results are applied when they arrive and failures
/// are logged.
///
/// Clones share state, like the widgets they back.
///
/// # Example
///
/// ```ignore
/// let controller = OutlineController::new()
///     .with_navigate(|location| viewer.go_to(location));
///
/// controller.set_document(Some(Arc::new(source)));
/// // later, when the user clicks a row
/// controller.activate_row(3);
/// ```
pub struct OutlineController<S: OutlineSource> {
    pub(super) inner: Arc<RwLock<ControllerInner<S>>>,
    pub(super) dirty: Arc<AtomicBool>,
    pub(super) config: Arc<OutlineConfig>,
    pub(super) on_navigate: Option<NavigateFn<S::Location>>,
}

impl<S: OutlineSource> OutlineController<S> {
    /// Create a controller with no document loaded.
    pub fn new() -> Self {
        Self::with_config(OutlineConfig::default())
    }

    /// Create a controller with custom presentation settings.
    pub fn with_config(config: OutlineConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ControllerInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            config: Arc::new(config),
            on_navigate: None,
        }
    }

    /// Set the callback that receives resolved destinations.
    pub fn with_navigate<F>(mut self, on_navigate: F) -> Self
    where
        F: Fn(S::Location) + Send + Sync + 'static,
    {
        self.on_navigate = Some(Arc::new(on_navigate));
        self
    }

    /// Presentation settings.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Document lifecycle
    // -------------------------------------------------------------------------

    /// Switch to another document, or to none.
    ///
    /// Clears the outline and expansion state immediately. With a source,
    /// spawns one outline fetch and returns its handle; the result is applied
    /// only if no other document change happened in the meantime.
    pub fn set_document(&self, source: Option<Arc<S>>) -> Option<JoinHandle<()>> {
        let generation = {
            let mut guard = self.inner.write().ok()?;
            guard.generation += 1;
            guard.source = source.clone();
            guard.tree.clear();
            guard.expanded.clear();
            guard.load_state = if source.is_some() {
                LoadState::Loading
            } else {
                LoadState::Idle
            };
            Self::rebuild_visible(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
            guard.generation
        };

        let source = source?;
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("Cannot load outline without an async runtime: {}", err);
                self.apply_failure(generation, err.to_string());
                return None;
            }
        };

        log::debug!("Fetching outline (generation {})", generation);
        let controller = self.clone();
        Some(runtime.spawn(async move {
            let result = source.fetch_outline().await;
            controller.apply_fetch(generation, result);
        }))
    }

    /// Apply a finished fetch if it still belongs to the current document.
    pub(super) fn apply_fetch(
        &self,
        generation: u64,
        result: Result<Option<Vec<OutlineNode<S::Destination>>>, OutlineFetchError>,
    ) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.generation != generation {
            log::debug!(
                "Discarding outline for stale document (generation {}, current {})",
                generation,
                guard.generation
            );
            return;
        }

        match result {
            Ok(Some(roots)) if !roots.is_empty() => {
                guard.tree = OutlineTree::with_roots(roots);
                guard.load_state = LoadState::Ready;
                log::info!("Loaded outline with {} entries", guard.tree.node_count());
            }
            Ok(_) => {
                guard.tree.clear();
                guard.load_state = LoadState::Empty;
                log::info!("Document has no outline");
            }
            Err(err) => {
                log::error!("Error loading outline: {}", err);
                guard.tree.clear();
                guard.load_state = LoadState::Failed(err.to_string());
            }
        }
        guard.expanded.clear();
        Self::rebuild_visible(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn apply_failure(&self, generation: u64, message: String) {
        if let Ok(mut guard) = self.inner.write()
            && guard.generation == generation
        {
            guard.load_state = LoadState::Failed(message);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the current document's source.
    pub fn source(&self) -> Option<Arc<S>> {
        self.inner.read().ok().and_then(|g| g.source.clone())
    }

    /// Get the document generation (bumped on every document change).
    pub fn generation(&self) -> u64 {
        self.inner.read().map(|g| g.generation).unwrap_or(0)
    }

    /// Get the outline lifecycle state.
    pub fn load_state(&self) -> LoadState {
        self.inner
            .read()
            .map(|g| g.load_state.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Tree access
    // -------------------------------------------------------------------------

    /// Get a copy of the current outline.
    pub fn tree(&self) -> OutlineTree<S::Destination> {
        self.inner
            .read()
            .map(|g| g.tree.clone())
            .unwrap_or_default()
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().map(|g| g.tree.is_empty()).unwrap_or(true)
    }

    /// Get an entry by path.
    pub fn node(&self, path: &NodePath) -> Option<OutlineNode<S::Destination>> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.tree.get(path).cloned())
    }

    /// Get the number of visible entries.
    pub fn visible_len(&self) -> usize {
        self.inner.read().map(|g| g.visible.len()).unwrap_or(0)
    }

    /// Get a visible entry by row index.
    pub fn visible_node(&self, index: usize) -> Option<FlatNode> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.visible.get(index).cloned())
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Toggle an entry that has children.
    ///
    /// Leaves and unknown paths are ignored. Returns `true` if the expansion
    /// state changed.
    pub fn toggle(&self, path: &NodePath) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let expandable = guard.tree.get(path).is_some_and(|n| n.has_children());
        if !expandable {
            return false;
        }
        guard.expanded.toggle(path);
        Self::rebuild_visible(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    /// Check if an entry is expanded.
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.inner
            .read()
            .map(|g| g.expanded.is_expanded(path))
            .unwrap_or(false)
    }

    /// Get the expanded entries in pre-order.
    pub fn expanded_paths(&self) -> Vec<NodePath> {
        self.inner
            .read()
            .map(|g| g.expanded.paths())
            .unwrap_or_default()
    }

    /// Expand every entry that has children.
    pub fn expand_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            for path in guard.tree.expandable_paths() {
                guard.expanded.expand(&path);
            }
            Self::rebuild_visible(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Collapse every entry.
    pub fn collapse_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.expanded.clear();
            Self::rebuild_visible(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Rebuild the flattened visible list.
    pub(super) fn rebuild_visible(inner: &mut ControllerInner<S>) {
        inner.visible = inner.tree.visible(&inner.expanded);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the outline changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<S: OutlineSource> Clone for OutlineController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            config: Arc::clone(&self.config),
            on_navigate: self.on_navigate.clone(),
        }
    }
}

impl<S: OutlineSource> Default for OutlineController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutlineSource> fmt::Debug for OutlineController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("OutlineController");
        if let Ok(guard) = self.inner.read() {
            out.field("generation", &guard.generation)
                .field("load_state", &guard.load_state)
                .field("entries", &guard.tree.node_count())
                .field("expanded", &guard.expanded.len())
                .field("visible", &guard.visible.len());
        }
        out.field("dirty", &self.is_dirty())
            .field("config", &self.config)
            .finish()
    }
}
