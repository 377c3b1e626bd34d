//! Random placement for newly added shapes.
//!
//! New shapes spawn at a random position inside a cube around the origin so
//! consecutive additions do not land on top of each other. The generator is
//! a small seedable splitmix64 so tests can pin exact placement.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

/// Half-extent of the spawn cube: each axis is drawn from `±SPAWN_EXTENT`.
pub const SPAWN_EXTENT: f32 = 2.0;

/// Seedable spawn-position generator.
#[derive(Debug, Clone)]
pub struct Placement {
    state: u64,
}

impl Placement {
    /// Create a generator with a fixed seed, for deterministic placement.
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        // splitmix64
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform value in `[-extent, extent)`.
    fn next_axis(&mut self, extent: f32) -> f32 {
        (self.next_unit() - 0.5) * 2.0 * extent
    }

    /// Random spawn position with each axis uniform in `±extent`.
    pub fn next_position(&mut self, extent: f32) -> Vec3 {
        Vec3::new(
            self.next_axis(extent),
            self.next_axis(extent),
            self.next_axis(extent),
        )
    }
}

impl Default for Placement {
    /// Seed from a global counter so editors created back to back still
    /// scatter differently. Works on all platforms without an entropy or
    /// time source.
    fn default() -> Self {
        static SEED_COUNTER: AtomicU64 = AtomicU64::new(1);
        let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut placement = Self {
            state: counter.wrapping_mul(0x9E3779B97F4A7C15),
        };
        // Advance once so low-entropy counter seeds diverge immediately.
        placement.next_u64();
        placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = Placement::seeded(42);
        let mut b = Placement::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_position(SPAWN_EXTENT), b.next_position(SPAWN_EXTENT));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Placement::seeded(1);
        let mut b = Placement::seeded(2);
        assert_ne!(a.next_position(SPAWN_EXTENT), b.next_position(SPAWN_EXTENT));
    }

    #[test]
    fn test_positions_within_spawn_cube() {
        let mut placement = Placement::seeded(7);
        for _ in 0..1000 {
            let p = placement.next_position(SPAWN_EXTENT);
            for axis in [p.x, p.y, p.z] {
                assert!(axis >= -SPAWN_EXTENT && axis < SPAWN_EXTENT, "axis {axis} out of range");
            }
        }
    }

    #[test]
    fn test_default_generators_differ() {
        let mut a = Placement::default();
        let mut b = Placement::default();
        assert_ne!(a.next_position(SPAWN_EXTENT), b.next_position(SPAWN_EXTENT));
    }
}
