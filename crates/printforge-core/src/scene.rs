//! Scene document and editor state for the model builder.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::placement::{Placement, SPAWN_EXTENT};
use crate::shapes::{Shape, ShapeId, ShapeKind};

/// Which manipulation gizmo is active for the selected shape.
///
/// Changing the mode never touches shape data; it only selects which class
/// of gesture the rendering collaborator translates into
/// [`SceneEditor::transform_shape`] calls. Setting a mode with no selection
/// is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Shape storage with stable insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDocument {
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Insertion order of shapes (for iteration and display).
    order: Vec<ShapeId>,
}

impl SceneDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape at the end of the insertion order.
    pub fn insert(&mut self, shape: Shape) {
        let id = shape.id();
        self.order.push(id);
        self.shapes.insert(id, shape);
    }

    /// Remove a shape, preserving the relative order of the rest.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Check whether a shape with this ID exists.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Shapes in insertion order.
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// An owned, consistent view of the editor for a rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Shapes in insertion order.
    pub shapes: Vec<Shape>,
    /// Selected shape ID, if any.
    pub selected: Option<ShapeId>,
    /// Active gizmo mode.
    pub mode: TransformMode,
}

/// The authoritative editor state: shape set, selection, transform mode.
///
/// Single-threaded and event-driven; every operation is a synchronous
/// in-memory edit. Operations on IDs that no longer exist are silent
/// no-ops, because pointer and gizmo events can race with deletions.
#[derive(Debug, Clone)]
pub struct SceneEditor {
    /// The document being edited.
    pub document: SceneDocument,
    /// Currently selected shape. Always references a live shape.
    selected: Option<ShapeId>,
    /// Active gizmo mode.
    mode: TransformMode,
    /// Spawn position generator.
    placement: Placement,
}

impl Default for SceneEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneEditor {
    /// Create an editor with an empty scene.
    pub fn new() -> Self {
        Self::with_placement(Placement::default())
    }

    /// Create an editor with a specific placement generator
    /// (seed it for deterministic spawn positions).
    pub fn with_placement(placement: Placement) -> Self {
        Self {
            document: SceneDocument::new(),
            selected: None,
            mode: TransformMode::default(),
            placement,
        }
    }

    /// Add a shape of the given kind at a random position inside the spawn
    /// cube, with identity rotation, unit scale, and the default color.
    /// The new shape becomes the selection. Returns its ID.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let position = self.placement.next_position(SPAWN_EXTENT);
        let shape = Shape::new(kind, position);
        let id = shape.id();
        self.document.insert(shape);
        self.selected = Some(id);
        log::debug!("added {} {} at {}", kind.label(), id, position);
        id
    }

    /// Set the selection. `None` clears it; so does an ID that no longer
    /// exists, since click events can arrive after a concurrent deletion.
    pub fn select_shape(&mut self, id: Option<ShapeId>) {
        self.selected = id.filter(|&id| self.document.contains(id));
    }

    /// Currently selected shape ID, if any.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Currently selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.document.get(id))
    }

    /// Delete the selected shape and clear the selection.
    /// No-op when nothing is selected.
    pub fn remove_selected(&mut self) -> Option<Shape> {
        let id = self.selected.take()?;
        let removed = self.document.remove(id);
        log::debug!("removed shape {id}");
        removed
    }

    /// Remove every shape and clear the selection.
    pub fn clear_all(&mut self) {
        self.document.clear();
        self.selected = None;
        log::debug!("cleared scene");
    }

    /// Replace the position, rotation, and scale of the shape with this ID.
    /// `kind`, `color`, and `id` are untouched. A missing ID is a silent
    /// no-op: gizmo change events can be delivered after a deletion.
    ///
    /// Called on every frame of a manipulation gesture, so it stays a plain
    /// map lookup with no logging.
    pub fn transform_shape(&mut self, id: ShapeId, position: Vec3, rotation: Vec3, scale: Vec3) {
        if let Some(shape) = self.document.get_mut(id) {
            shape.position = position;
            shape.rotation = rotation;
            shape.scale = scale;
        }
    }

    /// Set the active gizmo mode.
    pub fn set_mode(&mut self, mode: TransformMode) {
        self.mode = mode;
    }

    /// Active gizmo mode.
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Shapes in insertion order.
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.document.shapes_ordered()
    }

    /// Owned view of the current shapes, selection, and mode.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            shapes: self.shapes_ordered().cloned().collect(),
            selected: self.selected,
            mode: self.mode,
        }
    }
}
