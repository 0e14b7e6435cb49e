use friendshape_core::{Result, ShapeError, Validate};
use friendshape_math::aabb::Aabb3;
use friendshape_math::{Point3, Vector3};

/// Indexed triangle mesh with one normal per vertex.
///
/// Treated as immutable once handed out: regeneration builds a new mesh
/// rather than editing one in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples in emitted winding order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Right-hand rule normal of one triangle, scaled by twice its area.
    pub fn face_normal(&self, tri: [u32; 3]) -> Vector3 {
        let p0 = self.positions[tri[0] as usize];
        let p1 = self.positions[tri[1] as usize];
        let p2 = self.positions[tri[2] as usize];
        (p1 - p0).cross(p2 - p0)
    }

    /// Compute smooth vertex normals from triangle indices.
    ///
    /// Accumulates the area-weighted normal of every incident triangle and
    /// normalizes the sum. Vertices no triangle touches keep a zero normal.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let tri = [tri[0], tri[1], tri[2]];
            let normal = self.face_normal(tri);
            for &i in &tri {
                self.normals[i as usize] += normal;
            }
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }

    /// Positions flattened to `[x0, y0, z0, x1, ...]` for display buffers.
    pub fn position_buffer(&self) -> Vec<f32> {
        flatten(&self.positions)
    }

    /// Normals flattened to `[x0, y0, z0, x1, ...]` for display buffers.
    pub fn normal_buffer(&self) -> Vec<f32> {
        flatten(&self.normals)
    }
}

fn flatten(points: &[Point3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

impl Validate for TriangleMesh {
    fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(ShapeError::Geometry(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if self.normals.len() != self.positions.len() {
            return Err(ShapeError::Geometry(format!(
                "{} normals for {} positions",
                self.normals.len(),
                self.positions.len()
            )));
        }
        let n = self.positions.len();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(ShapeError::Geometry(format!(
                "index {bad} out of bounds (n={n})"
            )));
        }
        if let Some(p) = self.positions.iter().find(|p| !p.is_finite()) {
            return Err(ShapeError::Geometry(format!("non-finite position {p:?}")));
        }
        Ok(())
    }
}
