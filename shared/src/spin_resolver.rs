use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{EXTRA_REVOLUTIONS, FULL_CIRCLE, MIN_REVOLUTIONS};
use crate::wheel_layout::Wedge;

/// Outcome of mapping a rotation onto the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub index: usize,
    /// Set when no wedge matched and index 0 was substituted.
    pub fallback: bool,
}

/// Maps terminal rotations onto a partitioned wheel.
#[derive(Debug, Clone, Copy)]
pub struct SpinResolver<'a> {
    wedges: &'a [Wedge],
}

impl<'a> SpinResolver<'a> {
    pub fn new(wedges: &'a [Wedge]) -> Self {
        Self { wedges }
    }

    /// Resolves the wedge under the pointer after the wheel has rotated to
    /// `total_rotation` degrees.
    pub fn resolve(&self, total_rotation: f64) -> Resolution {
        self.resolve_adjusted(pointer_angle(total_rotation))
    }

    /// Resolves an angle already expressed in wheel coordinates.
    pub fn resolve_adjusted(&self, adjusted_angle: f64) -> Resolution {
        match self.wedges.iter().position(|w| w.contains(adjusted_angle)) {
            Some(index) => Resolution { index, fallback: false },
            None => {
                log::warn!(
                    "Internal inconsistency: no wedge contains angle {}; falling back to wedge 0",
                    adjusted_angle
                );
                Resolution { index: 0, fallback: true }
            }
        }
    }
}

/// Folds any rotation into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let angle = ((degrees % FULL_CIRCLE) + FULL_CIRCLE) % FULL_CIRCLE;
    if angle >= FULL_CIRCLE { 0.0 } else { angle }
}

/// The wheel turns under a fixed pointer, so the wedge under it sits at the
/// complement of the wheel's orientation.
pub fn pointer_angle(total_rotation: f64) -> f64 {
    let final_angle = normalize_angle(total_rotation);
    (FULL_CIRCLE - final_angle) % FULL_CIRCLE
}

/// Random spin amount: at least `MIN_REVOLUTIONS` full turns, up to
/// `EXTRA_REVOLUTIONS` more, plus an offset in `[0, 360)`.
pub fn random_spin_delta<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let turns = MIN_REVOLUTIONS + rng.gen::<f64>() * EXTRA_REVOLUTIONS;
    let offset = rng.gen::<f64>() * FULL_CIRCLE;
    FULL_CIRCLE * turns + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WHEEL_WIDTHS;
    use crate::wheel_layout::layout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wedges() -> Vec<Wedge> {
        layout(&WHEEL_WIDTHS)
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(725.0), 5.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(-720.0), 0.0);
        assert!(normalize_angle(-1e-20) < 360.0);
    }

    #[test]
    fn test_pointer_angle() {
        assert_eq!(pointer_angle(0.0), 0.0);
        assert_eq!(pointer_angle(90.0), 270.0);
        assert_eq!(pointer_angle(1810.0), 350.0);
    }

    #[test]
    fn test_resolve_adjusted_boundaries() {
        let wedges = wedges();
        let resolver = SpinResolver::new(&wedges);
        assert_eq!(resolver.resolve_adjusted(0.0).index, 0);
        assert_eq!(resolver.resolve_adjusted(29.9).index, 0);
        assert_eq!(resolver.resolve_adjusted(30.0).index, 1);
        assert_eq!(resolver.resolve_adjusted(359.9).index, 5);
        assert!(!resolver.resolve_adjusted(359.9).fallback);
    }

    #[test]
    fn test_resolve_five_turns_plus_ten() {
        let wedges = wedges();
        let resolver = SpinResolver::new(&wedges);
        // 10 + (5 * 360) = 1810
        let resolution = resolver.resolve(1810.0);
        assert_eq!(resolution, Resolution { index: 5, fallback: false });
    }

    #[test]
    fn test_resolve_is_periodic() {
        let wedges = wedges();
        let resolver = SpinResolver::new(&wedges);
        for x in [0.5, 17.0, 123.4, 250.0, 359.5, -42.0] {
            let base = resolver.resolve(x).index;
            for k in [-3.0, -1.0, 1.0, 4.0, 12.0] {
                assert_eq!(resolver.resolve(x + 360.0 * k).index, base, "x={} k={}", x, k);
            }
        }
    }

    #[test]
    fn test_every_rotation_resolves_once() {
        let wedges = wedges();
        let resolver = SpinResolver::new(&wedges);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let total: f64 = rng.gen_range(-1.0e6..1.0e6);
            let adjusted = pointer_angle(total);
            let hits = wedges.iter().filter(|w| w.contains(adjusted)).count();
            assert_eq!(hits, 1, "angle {}", adjusted);
            let resolution = resolver.resolve(total);
            assert!(!resolution.fallback);
            assert!(resolution.index < wedges.len());
        }
    }

    #[test]
    fn test_unmatched_angle_falls_back_to_first() {
        let wedges = wedges();
        let resolver = SpinResolver::new(&wedges);
        assert_eq!(resolver.resolve(f64::NAN), Resolution { index: 0, fallback: true });
        assert_eq!(resolver.resolve_adjusted(360.0), Resolution { index: 0, fallback: true });
    }

    #[test]
    fn test_random_spin_delta_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let delta = random_spin_delta(&mut rng);
            assert!(delta >= 360.0 * MIN_REVOLUTIONS);
            assert!(delta < 360.0 * (MIN_REVOLUTIONS + EXTRA_REVOLUTIONS) + 360.0);
        }
    }
}
