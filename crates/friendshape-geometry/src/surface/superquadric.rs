//! Superquadric surface.

use std::f64::consts::{FRAC_PI_2, TAU};

use friendshape_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::params::ShapeParameters;

/// `sign(v) * |v|^p`, with `sign(0) = 0`.
///
/// Fractional powers of negative trig values would be NaN; keeping the sign
/// outside the power is what lets the exponents be arbitrary positive reals.
#[inline]
pub fn signed_pow(v: f64, p: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v.signum() * v.abs().powf(p)
    }
}

/// A superquadric parameterized by latitude `u` in `[-PI/2, PI/2]` and
/// longitude `v` in `[0, 2*PI]`.
///
/// Points are computed as:
/// `P(u, v) = size * (c(u)^e2 * c(v)^e1, c(u)^e2 * s(v)^e1, s(u)^e2)`
/// where `e1 = 2 / roundness`, `e2 = 2 / stretch` and `c^e`, `s^e` are signed
/// powers of cosine and sine. `roundness = stretch = 2` is a sphere; large
/// values approach a cube, `1` gives an octahedron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Superquadric {
    pub roundness: f64,
    pub stretch: f64,
    pub size: f64,
}

impl Superquadric {
    pub fn new(roundness: f64, stretch: f64, size: f64) -> Self {
        Self {
            roundness,
            stretch,
            size,
        }
    }

    pub fn from_params(params: &ShapeParameters) -> Self {
        Self::new(params.roundness, params.stretch, params.size)
    }

    /// Longitudinal exponent `2 / roundness`.
    pub fn e1(&self) -> f64 {
        2.0 / self.roundness
    }

    /// Latitudinal exponent `2 / stretch`.
    pub fn e2(&self) -> f64 {
        2.0 / self.stretch
    }
}

impl Surface for Superquadric {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (e1, e2) = (self.e1(), self.e2());
        let ring = signed_pow(u.cos(), e2);
        let x = self.size * ring * signed_pow(v.cos(), e1);
        let y = self.size * ring * signed_pow(v.sin(), e1);
        let z = self.size * signed_pow(u.sin(), e2);
        DVec3::new(x, y, z)
    }

    // Ill-defined at pinched poles (stretch < 1), where the exponent goes negative.
    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        let (a1, a2) = (2.0 - self.e1(), 2.0 - self.e2());
        let ring = signed_pow(u.cos(), a2);
        let x = ring * signed_pow(v.cos(), a1);
        let y = ring * signed_pow(v.sin(), a1);
        let z = signed_pow(u.sin(), a2);
        DVec3::new(x, y, z).normalize_or_zero()
    }

    fn domain_u(&self) -> (f64, f64) {
        (-FRAC_PI_2, FRAC_PI_2)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
