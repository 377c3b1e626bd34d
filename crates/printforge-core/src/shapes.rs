//! Primitive shape definitions for the model builder.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// RGBA8 color carried by each shape for unselected rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Color applied to newly placed shapes (the shop's terracotta, `#d97556`).
pub const DEFAULT_COLOR: Rgba = Rgba::new(0xd9, 0x75, 0x56, 0xff);

/// The closed set of primitives that can be placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
}

impl ShapeKind {
    /// All placeable kinds, in toolbar order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cube, ShapeKind::Sphere, ShapeKind::Cylinder];

    /// Display label used by toolbars and scene lists.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
        }
    }

    /// Volume of the unit-scale primitive, in scene units cubed.
    ///
    /// Matches the meshes the viewer instantiates: a 1x1x1 cube, a sphere
    /// of radius 0.6, and a cylinder of radius 0.5 and height 1.
    pub fn unit_volume(&self) -> f32 {
        match self {
            ShapeKind::Cube => 1.0,
            ShapeKind::Sphere => 4.0 / 3.0 * PI * 0.6_f32.powi(3),
            ShapeKind::Cylinder => PI * 0.5_f32.powi(2),
        }
    }
}

/// A placed primitive in the scene.
///
/// `kind` and `color` are fixed at creation; only `position`, `rotation`
/// and `scale` change afterwards, via the editor's transform operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Primitive variant.
    pub kind: ShapeKind,
    /// Center position.
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    /// Component-wise scale. Degenerate values are the renderer's concern.
    pub scale: Vec3,
    /// Color used for unselected rendering.
    pub color: Rgba,
}

impl Shape {
    /// Create a new shape of the given kind at a position, with identity
    /// rotation, unit scale, and the default color.
    pub fn new(kind: ShapeKind, position: Vec3) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: DEFAULT_COLOR,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Volume of this shape with its current scale applied.
    pub fn volume(&self) -> f32 {
        self.kind.unit_volume() * (self.scale.x * self.scale.y * self.scale.z).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shape_defaults() {
        let shape = Shape::new(ShapeKind::Cube, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(shape.kind, ShapeKind::Cube);
        assert_eq!(shape.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(shape.rotation, Vec3::ZERO);
        assert_eq!(shape.scale, Vec3::ONE);
        assert_eq!(shape.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Shape::new(ShapeKind::Sphere, Vec3::ZERO);
        let b = Shape::new(ShapeKind::Sphere, Vec3::ZERO);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_unit_volumes() {
        assert!((ShapeKind::Cube.unit_volume() - 1.0).abs() < 1e-6);
        let sphere = 4.0 / 3.0 * PI * 0.216;
        assert!((ShapeKind::Sphere.unit_volume() - sphere).abs() < 1e-5);
        let cylinder = PI * 0.25;
        assert!((ShapeKind::Cylinder.unit_volume() - cylinder).abs() < 1e-6);
    }

    #[test]
    fn test_scaled_volume() {
        let mut shape = Shape::new(ShapeKind::Cube, Vec3::ZERO);
        shape.scale = Vec3::new(2.0, 2.0, 2.0);
        assert!((shape.volume() - 8.0).abs() < 1e-6);

        // Negative scale components still yield a positive volume.
        shape.scale = Vec3::new(-2.0, 2.0, 2.0);
        assert!((shape.volume() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_shape_roundtrip_json() {
        let shape = Shape::new(ShapeKind::Cylinder, Vec3::new(0.5, -1.0, 2.0));
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, back);
    }
}
