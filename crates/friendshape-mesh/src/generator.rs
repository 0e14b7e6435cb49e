//! Superquadric tessellation on a latitude/longitude grid.
//!
//! The grid has `segments + 1` rows (latitude, pole to pole) and
//! `segments + 1` columns (longitude). Column `segments` lands on the same
//! angle as column 0; its positions are kept in the buffer but triangles wrap
//! back to column 0 so each ring closes on itself.

use friendshape_core::{Result, ShapeError, Validate};
use friendshape_geometry::{DeformationChain, NoiseSource, ShapeParameters, Superquadric, Surface};
use friendshape_math::Point3;

use crate::TriangleMesh;

/// Default grid resolution.
pub const SEGMENTS: usize = 50;

const MIN_SEGMENTS: usize = 3;
const MAX_SEGMENTS: usize = 4096;

/// Turns [`ShapeParameters`] into a closed [`TriangleMesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGenerator {
    segments: usize,
}

impl Default for SurfaceGenerator {
    fn default() -> Self {
        Self { segments: SEGMENTS }
    }
}

impl SurfaceGenerator {
    pub fn new(segments: usize) -> Result<Self> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
            return Err(ShapeError::invalid_param(
                "segments",
                segments,
                "must be between 3 and 4096",
            ));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// `(segments + 1)^2`, seam column included.
    pub fn vertex_count(&self) -> usize {
        (self.segments + 1) * (self.segments + 1)
    }

    pub fn triangle_count(&self) -> usize {
        2 * self.segments * self.segments
    }

    /// Generate a mesh, drawing spike noise from the thread-local RNG.
    pub fn generate(&self, params: &ShapeParameters) -> Result<TriangleMesh> {
        self.generate_with(params, &mut rand::rng())
    }

    /// Generate a mesh with an explicit noise source.
    ///
    /// Exactly one offset is drawn per vertex in row-major order, so a seeded
    /// source reproduces the same mesh.
    ///
    /// # Errors
    /// Returns [`ShapeError::InvalidParameter`] when the parameters would
    /// produce NaN geometry (zero exponents, zero size, negative amplitudes).
    pub fn generate_with<N: NoiseSource + ?Sized>(
        &self,
        params: &ShapeParameters,
        noise: &mut N,
    ) -> Result<TriangleMesh> {
        params.validate()?;

        let surface = Superquadric::from_params(params);
        let chain = DeformationChain::from_params(params);

        let mut mesh = TriangleMesh {
            positions: self.sample_positions(&surface, &chain, noise),
            normals: Vec::new(),
            indices: self.seam_indices(),
        };
        mesh.compute_normals();
        self.share_seam_normals(&mut mesh);

        tracing::debug!(
            segments = self.segments,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "generated superquadric mesh"
        );
        Ok(mesh)
    }

    fn sample_positions<N: NoiseSource + ?Sized>(
        &self,
        surface: &dyn Surface,
        chain: &DeformationChain,
        noise: &mut N,
    ) -> Vec<Point3> {
        let (u_min, u_max) = surface.domain_u();
        let (v_min, v_max) = surface.domain_v();
        let n = self.segments;

        let mut positions = Vec::with_capacity(self.vertex_count());
        for i in 0..=n {
            let theta = u_min + (u_max - u_min) * (i as f64 / n as f64);
            for j in 0..=n {
                let phi = v_min + (v_max - v_min) * (j as f64 / n as f64);
                let base = surface.point_at(theta, phi);
                positions.push(chain.apply(base, theta, phi, noise));
            }
        }
        positions
    }

    /// Two triangles per cell; the last column's right edge reuses column 0.
    fn seam_indices(&self) -> Vec<u32> {
        let n = self.segments;
        let row = n + 1;

        let mut indices = Vec::with_capacity(n * n * 6);
        for i in 0..n {
            for j in 0..n {
                let a = i * row + j;
                let mut b = a + 1;
                let c = (i + 1) * row + j;
                let mut d = c + 1;

                // Row width is n + 1 but the ring has only n distinct steps.
                if j == n - 1 {
                    b -= n;
                    d -= n;
                }

                indices.extend([a, b, c, b, d, c].map(|k| k as u32));
            }
        }
        indices
    }

    /// The seam column has no triangles of its own; give it column 0's normals.
    fn share_seam_normals(&self, mesh: &mut TriangleMesh) {
        let n = self.segments;
        let row = n + 1;
        for i in 0..=n {
            mesh.normals[i * row + n] = mesh.normals[i * row];
        }
    }
}

/// Generate a mesh at the default resolution with thread-local noise.
pub fn generate(params: &ShapeParameters) -> Result<TriangleMesh> {
    SurfaceGenerator::default().generate(params)
}

/// Generate a mesh at the default resolution with an explicit noise source.
pub fn generate_with<N: NoiseSource + ?Sized>(
    params: &ShapeParameters,
    noise: &mut N,
) -> Result<TriangleMesh> {
    SurfaceGenerator::default().generate_with(params, noise)
}
