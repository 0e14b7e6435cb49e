//! Regenerate-and-publish session around [`SurfaceGenerator`].
//!
//! Every edit builds candidate parameters, generates a complete new mesh and
//! only then replaces the published parameters and mesh. Readers holding an
//! earlier `Arc<TriangleMesh>` keep a valid mesh; a rejected edit changes
//! nothing.

use std::sync::Arc;

use friendshape_core::{Result, ShapeError};
use friendshape_geometry::{is_hex_color, NoiseSource, Preset, ShapeParameters};
use rand::rngs::ThreadRng;

use crate::{SurfaceGenerator, TriangleMesh};

pub struct Sculptor<N: NoiseSource = ThreadRng> {
    generator: SurfaceGenerator,
    params: ShapeParameters,
    mesh: Arc<TriangleMesh>,
    noise: N,
}

impl Sculptor<ThreadRng> {
    /// Start a session with thread-local noise and build the startup mesh.
    pub fn new(params: ShapeParameters) -> Result<Self> {
        Self::with_noise(params, rand::rng())
    }
}

impl<N: NoiseSource> Sculptor<N> {
    pub fn with_noise(params: ShapeParameters, noise: N) -> Result<Self> {
        Self::with_generator(SurfaceGenerator::default(), params, noise)
    }

    pub fn with_generator(
        generator: SurfaceGenerator,
        params: ShapeParameters,
        mut noise: N,
    ) -> Result<Self> {
        let params = checked(params)?;
        let mesh = Arc::new(generator.generate_with(&params, &mut noise)?);
        tracing::info!(
            shape = %params.shape,
            vertices = mesh.vertex_count(),
            "sculptor started"
        );
        Ok(Self {
            generator,
            params,
            mesh,
            noise,
        })
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// The currently published mesh.
    pub fn mesh(&self) -> Arc<TriangleMesh> {
        Arc::clone(&self.mesh)
    }

    pub fn generator(&self) -> SurfaceGenerator {
        self.generator
    }

    /// Edit a copy of the current parameters and publish the result.
    pub fn update<F>(&mut self, edit: F) -> Result<Arc<TriangleMesh>>
    where
        F: FnOnce(&mut ShapeParameters),
    {
        let mut candidate = self.params.clone();
        edit(&mut candidate);
        self.publish(candidate)
    }

    pub fn set_params(&mut self, params: ShapeParameters) -> Result<Arc<TriangleMesh>> {
        self.publish(params)
    }

    pub fn select_preset(&mut self, preset: Preset) -> Result<Arc<TriangleMesh>> {
        self.update(|p| p.apply_preset(preset))
    }

    pub fn set_wireframe(&mut self, wireframe: bool) -> Result<Arc<TriangleMesh>> {
        self.update(|p| p.wireframe = wireframe)
    }

    /// Change the display color. Geometry is not regenerated.
    pub fn set_color(&mut self, color: &str) -> Result<()> {
        if !is_hex_color(color) {
            return Err(ShapeError::invalid_param("color", color, "expected #rrggbb"));
        }
        self.params.color = color.to_string();
        Ok(())
    }

    /// Rebuild the mesh from unchanged parameters, drawing fresh noise.
    pub fn regenerate(&mut self) -> Result<Arc<TriangleMesh>> {
        self.publish(self.params.clone())
    }

    fn publish(&mut self, candidate: ShapeParameters) -> Result<Arc<TriangleMesh>> {
        let candidate = checked(candidate)?;
        let mesh = Arc::new(self.generator.generate_with(&candidate, &mut self.noise)?);

        self.params = candidate;
        self.mesh = Arc::clone(&mesh);
        tracing::info!(
            shape = %self.params.shape,
            triangles = mesh.triangle_count(),
            "published regenerated mesh"
        );
        Ok(mesh)
    }
}

/// Caller-side guard: clamp the exponents and reject malformed colors.
fn checked(params: ShapeParameters) -> Result<ShapeParameters> {
    if !is_hex_color(&params.color) {
        return Err(ShapeError::invalid_param("color", &params.color, "expected #rrggbb"));
    }
    Ok(params.clamped())
}
