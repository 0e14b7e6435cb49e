//! STL (stereolithography) export.
//!
//! STL stores a triangle soup: one facet normal and three vertices per
//! triangle. Both the ASCII and the binary layout are supported.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use friendshape_core::{Result, ShapeError, Validate};
use friendshape_math::{Point3, Vector3};
use friendshape_mesh::TriangleMesh;

/// On-disk STL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    Ascii,
    #[default]
    Binary,
}

/// Facet normal for one triangle.
///
/// Uses the right-hand cross product in index winding, the same orientation
/// the vertex normals were accumulated with. Degenerate slivers at the poles
/// have no usable cross product, so they fall back to the mean of their
/// vertex normals.
pub fn facet_normal(mesh: &TriangleMesh, tri: [u32; 3]) -> Vector3 {
    let n = mesh.face_normal(tri);
    if n.length() > 1e-12 {
        return n.normalize();
    }
    tri.iter()
        .filter_map(|&i| mesh.normals.get(i as usize))
        .fold(Vector3::ZERO, |acc, &v| acc + v)
        .normalize_or_zero()
}

fn corners(mesh: &TriangleMesh, tri: [u32; 3]) -> [Point3; 3] {
    tri.map(|i| mesh.positions[i as usize])
}

/// Convert a mesh to an **ASCII STL** string with the given solid `name`.
///
/// Fails with [`ShapeError::Geometry`] when the mesh does not validate.
pub fn to_stl_ascii(mesh: &TriangleMesh, name: &str) -> Result<String> {
    mesh.validate()?;
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for tri in mesh.triangles() {
        let n = facet_normal(mesh, tri);
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in corners(mesh, tri) {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}

/// Convert a mesh to a **binary STL** byte vector.
///
/// Fails with [`ShapeError::Geometry`] when the mesh does not validate.
pub fn to_stl_binary(mesh: &TriangleMesh) -> Result<Vec<u8>> {
    mesh.validate()?;
    let triangles = stl_triangles(mesh);
    let mut cursor = Cursor::new(Vec::new());
    stl_io::write_stl(&mut cursor, triangles.iter())
        .map_err(|e| ShapeError::Export(format!("binary STL encoding failed: {e}")))?;
    Ok(cursor.into_inner())
}

fn stl_triangles(mesh: &TriangleMesh) -> Vec<stl_io::Triangle> {
    mesh.triangles()
        .map(|tri| {
            let n = facet_normal(mesh, tri);
            stl_io::Triangle {
                normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: corners(mesh, tri)
                    .map(|p| stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            }
        })
        .collect()
}

/// Encode `mesh` and write it to `path`. Nothing is written for a mesh that
/// does not validate.
pub fn save<P: AsRef<Path>>(
    mesh: &TriangleMesh,
    path: P,
    format: StlFormat,
    name: &str,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = match format {
        StlFormat::Ascii => to_stl_ascii(mesh, name)?.into_bytes(),
        StlFormat::Binary => to_stl_binary(mesh)?,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    tracing::debug!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        ?format,
        "wrote STL"
    );
    Ok(())
}
