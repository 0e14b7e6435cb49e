//! Parametric surfaces.

mod superquadric;

use friendshape_math::{Point3, Vector3};

pub use superquadric::{signed_pow, Superquadric};

/// Trait for closed parametric surfaces sampled on a latitude/longitude grid.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at latitude `u` and longitude `v`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Evaluate the outward unit normal at `(u, v)`.
    fn normal_at(&self, u: f64, v: f64) -> Vector3;

    /// Return the latitude domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the longitude domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);
}
