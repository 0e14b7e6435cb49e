//! Deformations layered on the base superquadric.
//!
//! Every vertex runs through the same fixed chain: stochastic spike, then the
//! height-proportional twist, then the bulge/indentation lobes. The twist reads
//! the height produced by the spike stage, while the lobes read the original
//! grid angles, so the stage order is part of the shape definition.

use std::f64::consts::PI;

use friendshape_math::{DVec3, Point3};

use crate::noise::NoiseSource;
use crate::params::ShapeParameters;

/// Relative amplitude of one unit of `bulge` or `indentations`.
pub const LOBE_AMPLITUDE: f64 = 0.2;
/// Angular harmonic of the bulge lobes.
pub const BULGE_HARMONIC: f64 = 3.0;
/// Angular harmonic of the indentation lobes.
pub const INDENT_HARMONIC: f64 = 4.0;

/// Per-vertex radial scaling by a random factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spike {
    pub randomness: f64,
    pub spikiness: f64,
}

impl Spike {
    pub fn from_params(params: &ShapeParameters) -> Self {
        Self {
            randomness: params.randomness,
            spikiness: params.spikiness,
        }
    }

    /// Scale factor for a noise offset drawn from `[-0.5, 0.5)`.
    pub fn factor(&self, offset: f64) -> f64 {
        let noise = offset * self.randomness;
        1.0 + self.spikiness * noise
    }

    pub fn apply(&self, p: Point3, offset: f64) -> Point3 {
        p * self.factor(offset)
    }
}

/// Rotation about the vertical axis by an angle proportional to height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twist {
    pub asymmetry: f64,
    pub size: f64,
}

impl Twist {
    pub fn from_params(params: &ShapeParameters) -> Self {
        Self {
            asymmetry: params.asymmetry,
            size: params.size,
        }
    }

    /// Twist angle in radians at height `z`; zero on the equatorial plane.
    pub fn angle(&self, z: f64) -> f64 {
        self.asymmetry * PI * (z / self.size)
    }

    pub fn apply(&self, p: Point3) -> Point3 {
        let (sin, cos) = self.angle(p.z).sin_cos();
        DVec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
    }
}

/// 3-fold bulge and 4-fold indentation, as one multiplicative radial factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lobes {
    pub bulge: f64,
    pub indentations: f64,
}

impl Lobes {
    pub fn from_params(params: &ShapeParameters) -> Self {
        Self {
            bulge: params.bulge,
            indentations: params.indentations,
        }
    }

    pub fn factor(&self, theta: f64, phi: f64) -> f64 {
        let bulge = 1.0
            + (self.bulge * LOBE_AMPLITUDE)
                * (BULGE_HARMONIC * theta).sin()
                * (BULGE_HARMONIC * phi).cos();
        let indent = 1.0
            - (self.indentations * LOBE_AMPLITUDE)
                * (INDENT_HARMONIC * theta).sin()
                * (INDENT_HARMONIC * phi).cos();
        bulge * indent
    }

    pub fn apply(&self, p: Point3, theta: f64, phi: f64) -> Point3 {
        p * self.factor(theta, phi)
    }
}

/// The complete spike → twist → lobes pipeline for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeformationChain {
    pub spike: Spike,
    pub twist: Twist,
    pub lobes: Lobes,
}

impl DeformationChain {
    pub fn from_params(params: &ShapeParameters) -> Self {
        Self {
            spike: Spike::from_params(params),
            twist: Twist::from_params(params),
            lobes: Lobes::from_params(params),
        }
    }

    /// Deform a base surface point sampled at `(theta, phi)`.
    ///
    /// Draws exactly one offset from `noise`, whatever the parameters.
    pub fn apply<N: NoiseSource + ?Sized>(
        &self,
        base: Point3,
        theta: f64,
        phi: f64,
        noise: &mut N,
    ) -> Point3 {
        let p = self.spike.apply(base, noise.next_offset());
        let p = self.twist.apply(p);
        self.lobes.apply(p, theta, phi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    /// Hands out a fixed offset and counts draws.
    struct Fixed {
        offset: f64,
        draws: usize,
    }

    impl NoiseSource for Fixed {
        fn next_offset(&mut self) -> f64 {
            self.draws += 1;
            self.offset
        }
    }

    #[test]
    fn test_spike_is_identity_without_randomness() {
        let spike = Spike { randomness: 0.0, spikiness: 2.0 };
        assert_eq!(spike.factor(0.49), 1.0);
        let spike = Spike { randomness: 0.8, spikiness: 0.0 };
        assert_eq!(spike.factor(-0.5), 1.0);
    }

    #[test]
    fn test_spike_factor_range() {
        let spike = Spike { randomness: 0.5, spikiness: 2.0 };
        assert_abs_diff_eq!(spike.factor(-0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(spike.factor(0.25), 1.25, epsilon = 1e-12);
        let p = spike.apply(DVec3::new(1.0, -2.0, 3.0), 0.25);
        assert_abs_diff_eq!(p.y, -2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_twist_leaves_equator_alone() {
        let twist = Twist { asymmetry: 0.7, size: 10.0 };
        let p = DVec3::new(3.0, 4.0, 0.0);
        assert_eq!(twist.apply(p), p);
    }

    #[test]
    fn test_twist_half_turn_at_pole() {
        let twist = Twist { asymmetry: 1.0, size: 2.0 };
        let p = twist.apply(DVec3::new(1.0, 0.5, 2.0));
        assert_abs_diff_eq!(p.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, -0.5, epsilon = 1e-12);
        assert_eq!(p.z, 2.0);
    }

    #[test]
    fn test_twist_preserves_radius() {
        let twist = Twist { asymmetry: 0.3, size: 5.0 };
        let p = DVec3::new(2.0, -1.0, 3.5);
        let q = twist.apply(p);
        assert_abs_diff_eq!(q.truncate().length(), p.truncate().length(), epsilon = 1e-12);
    }

    #[test]
    fn test_lobes_vanish_on_equator() {
        let lobes = Lobes { bulge: 10.0, indentations: 2.0 };
        for k in 0..12 {
            let phi = k as f64 * 0.5;
            assert_abs_diff_eq!(lobes.factor(0.0, phi), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bulge_peak() {
        // sin(3θ) = 1 at θ = π/6, cos(3φ) = 1 at φ = 0.
        let lobes = Lobes { bulge: 1.0, indentations: 0.0 };
        assert_abs_diff_eq!(lobes.factor(PI / 6.0, 0.0), 1.2, epsilon = 1e-12);
        // sin(4θ) = 1 at θ = π/8: indentations pull inward.
        let lobes = Lobes { bulge: 0.0, indentations: 1.0 };
        assert_abs_diff_eq!(lobes.factor(PI / 8.0, 0.0), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_chain_draws_once_per_vertex() {
        let params = ShapeParameters {
            randomness: 0.0,
            ..ShapeParameters::default()
        };
        let chain = DeformationChain::from_params(&params);
        let mut noise = Fixed { offset: 0.3, draws: 0 };
        for _ in 0..5 {
            chain.apply(DVec3::X, 0.0, 0.0, &mut noise);
        }
        assert_eq!(noise.draws, 5);
    }

    #[test]
    fn test_chain_twist_sees_spiked_height() {
        let params = ShapeParameters {
            size: 1.0,
            randomness: 1.0,
            spikiness: 1.0,
            asymmetry: 1.0,
            ..ShapeParameters::default()
        };
        let chain = DeformationChain::from_params(&params);
        let mut noise = Fixed { offset: -0.5, draws: 0 };
        // Spike halves the point to z = 0.5, so the twist is a quarter turn.
        let p = chain.apply(DVec3::new(1.0, 0.0, 1.0), FRAC_PI_2, 0.0, &mut noise);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 0.5, epsilon = 1e-12);
    }
}
