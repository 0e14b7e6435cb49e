//! Export of sculpted shapes: an STL mesh plus the parameter record that
//! produced it.

pub mod record;
pub mod stl;

use std::fs;
use std::path::{Path, PathBuf};

use friendshape_core::Result;
use friendshape_geometry::ShapeParameters;
use friendshape_mesh::TriangleMesh;

pub use record::RECORD_FILE_NAME;
pub use stl::StlFormat;

/// File name of the mesh inside an export bundle.
pub const STL_FILE_NAME: &str = "friendshape.stl";

/// Solid name written into ASCII STL headers.
pub const SOLID_NAME: &str = "friendshape";

/// Where [`export_bundle`] put its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub record: PathBuf,
    pub stl: PathBuf,
}

/// Write the parameter record and then the mesh into `dir`, creating it if needed.
pub fn export_bundle<P: AsRef<Path>>(
    mesh: &TriangleMesh,
    params: &ShapeParameters,
    dir: P,
    format: StlFormat,
) -> Result<ExportPaths> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let paths = ExportPaths {
        record: dir.join(RECORD_FILE_NAME),
        stl: dir.join(STL_FILE_NAME),
    };
    record::save(params, &paths.record)?;
    stl::save(mesh, &paths.stl, format, SOLID_NAME)?;

    tracing::info!(
        dir = %dir.display(),
        shape = %params.shape,
        triangles = mesh.triangle_count(),
        "exported friendshape"
    );
    Ok(paths)
}
