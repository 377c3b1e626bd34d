//! Client-side pricing arithmetic for the PrintForge storefront.
//!
//! Instant estimates and order totals only. Authoritative pricing, payment
//! processing, and currency formatting live in the hosted backend; every
//! estimate produced here is confirmed manually before an order is final.

pub mod material;
pub mod quote;

pub use material::Material;
pub use quote::{
    Dimensions, OrderSummary, QuoteError, estimate_print_cost, scene_volume, GST_RATE,
    SHIPPING_FLAT,
};
