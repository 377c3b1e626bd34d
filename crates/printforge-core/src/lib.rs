//! PrintForge Core Library
//!
//! State for the PrintForge model builder: the set of placed primitive
//! shapes, the current selection, and the active transform mode. Rendering
//! is an external collaborator that reads snapshots from here and writes
//! back through the editor operations.

pub mod placement;
pub mod scene;
pub mod shapes;

pub use placement::{Placement, SPAWN_EXTENT};
pub use scene::{SceneDocument, SceneEditor, SceneSnapshot, TransformMode};
pub use shapes::{Rgba, Shape, ShapeId, ShapeKind};
