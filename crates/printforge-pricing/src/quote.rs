//! Instant cost estimates and order totals.

use printforge_core::Shape;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base cost applied to every custom print, in rupees.
const BASE_COST: f64 = 50.0;
/// Rate per unit of entered print volume, in rupees.
const VOLUME_RATE: f64 = 2.5;
/// Flat multiplier covering slicing and support complexity.
const COMPLEXITY_FACTOR: f64 = 1.2;

/// GST applied to order subtotals.
pub const GST_RATE: f64 = 0.18;
/// Flat shipping charge per order, in rupees.
pub const SHIPPING_FLAT: f64 = 500.0;

#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("invalid print dimensions {0}x{1}x{2} mm; all sides must be positive")]
    InvalidDimensions(f64, f64, f64),
}

/// Requested print dimensions in millimetres. Construction validates that
/// every side is a positive, finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, QuoteError> {
        let valid = [length, width, height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0);
        if !valid {
            return Err(QuoteError::InvalidDimensions(length, width, height));
        }
        Ok(Self {
            length,
            width,
            height,
        })
    }

    /// Product of the entered sides, the volume figure the estimator bills.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Estimate the cost of a custom print from its requested dimensions, in
/// rupees: `round((base + volume * rate) * complexity)`.
///
/// This is the storefront's instant estimate; the final price is confirmed
/// by the shop via email before the order is placed.
pub fn estimate_print_cost(dims: Dimensions) -> f64 {
    let estimate = (BASE_COST + dims.volume() * VOLUME_RATE) * COMPLEXITY_FACTOR;
    log::debug!("estimated print cost {estimate:.2} for volume {}", dims.volume());
    estimate.round()
}

/// Total printed volume of a composed scene, in scene units cubed.
/// Feeds the weight estimate shown beside the material picker.
pub fn scene_volume<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> f64 {
    shapes.into_iter().map(|s| f64::from(s.volume())).sum()
}

/// Totals for a cart or checkout view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub gst: f64,
    pub shipping: f64,
    pub total: f64,
}

impl OrderSummary {
    /// Compute totals from `(unit price, quantity)` line items.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let subtotal = items
            .into_iter()
            .map(|(price, quantity)| price * f64::from(quantity))
            .sum();
        Self::from_subtotal(subtotal)
    }

    /// GST at 18% plus flat shipping on top of a subtotal.
    pub fn from_subtotal(subtotal: f64) -> Self {
        let gst = subtotal * GST_RATE;
        Self {
            subtotal,
            gst,
            shipping: SHIPPING_FLAT,
            total: subtotal + gst + SHIPPING_FLAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use printforge_core::{SceneEditor, Placement, ShapeKind};

    #[test]
    fn test_dimensions_reject_nonpositive_sides() {
        assert!(Dimensions::new(100.0, 100.0, 100.0).is_ok());
        assert_eq!(
            Dimensions::new(0.0, 10.0, 10.0),
            Err(QuoteError::InvalidDimensions(0.0, 10.0, 10.0))
        );
        assert!(Dimensions::new(-1.0, 10.0, 10.0).is_err());
        assert!(Dimensions::new(10.0, f64::NAN, 10.0).is_err());
        assert!(Dimensions::new(10.0, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_estimate_formula() {
        // volume 1000 -> (50 + 2500) * 1.2 = 3060
        let dims = Dimensions::new(10.0, 10.0, 10.0).unwrap();
        assert_eq!(estimate_print_cost(dims), 3060.0);

        // Tiny print is dominated by the base cost: (50 + 2.5) * 1.2 = 63.
        let dims = Dimensions::new(1.0, 1.0, 1.0).unwrap();
        assert_eq!(estimate_print_cost(dims), 63.0);
    }

    #[test]
    fn test_scene_volume_sums_scaled_shapes() {
        let mut editor = SceneEditor::with_placement(Placement::seeded(9));
        let cube = editor.add_shape(ShapeKind::Cube);
        editor.add_shape(ShapeKind::Cylinder);
        editor.transform_shape(cube, Vec3::ZERO, Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));

        let expected = 8.0 + f64::from(ShapeKind::Cylinder.unit_volume());
        let total = scene_volume(editor.shapes_ordered());
        assert!((total - expected).abs() < 1e-4);
    }

    #[test]
    fn test_scene_volume_empty_scene() {
        let editor = SceneEditor::with_placement(Placement::seeded(1));
        assert_eq!(scene_volume(editor.shapes_ordered()), 0.0);
    }

    #[test]
    fn test_order_summary_from_subtotal() {
        let summary = OrderSummary::from_subtotal(1000.0);
        assert_eq!(summary.subtotal, 1000.0);
        assert!((summary.gst - 180.0).abs() < 1e-9);
        assert_eq!(summary.shipping, 500.0);
        assert!((summary.total - 1680.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_summary_from_items() {
        let summary = OrderSummary::from_items([(250.0, 2), (100.0, 5)]);
        assert_eq!(summary.subtotal, 1000.0);
        assert!((summary.total - 1680.0).abs() < 1e-9);
    }

    #[test]
    fn test_quote_types_roundtrip_json() {
        let dims = Dimensions::new(100.0, 50.0, 25.0).unwrap();
        let json = serde_json::to_string(&dims).unwrap();
        let back: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, back);

        let summary = OrderSummary::from_subtotal(1000.0);
        let json = serde_json::to_string(&summary).unwrap();
        let back: OrderSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn test_order_summary_empty_cart() {
        let summary = OrderSummary::from_items(std::iter::empty::<(f64, u32)>());
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.gst, 0.0);
        // Shipping is flat, charged per order regardless of contents.
        assert_eq!(summary.total, SHIPPING_FLAT);
    }
}
