// Export of generated meshes to STL and parameter records.

use std::io::Cursor;

use friendshape_export::stl::{facet_normal, to_stl_ascii, to_stl_binary};
use friendshape_export::{export_bundle, record, StlFormat, RECORD_FILE_NAME, STL_FILE_NAME};
use friendshape_geometry::{Preset, ShapeParameters};
use friendshape_mesh::{generate, TriangleMesh};

fn sphere_mesh() -> (ShapeParameters, TriangleMesh) {
    let params = ShapeParameters {
        size: 3.0,
        ..ShapeParameters::from_preset(Preset::Sphere)
    };
    let mesh = generate(&params).unwrap();
    (params, mesh)
}

#[test]
fn ascii_stl_has_one_facet_per_triangle() {
    let (_, mesh) = sphere_mesh();
    let stl = to_stl_ascii(&mesh, "friendshape").unwrap();
    assert!(stl.starts_with("solid friendshape\n"));
    assert!(stl.ends_with("endsolid friendshape\n"));
    assert_eq!(stl.matches("facet normal").count(), mesh.triangle_count());
    assert_eq!(stl.matches("vertex ").count(), 3 * mesh.triangle_count());
}

#[test]
fn binary_stl_reads_back() {
    let (_, mesh) = sphere_mesh();
    let bytes = to_stl_binary(&mesh).unwrap();
    assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());

    let decoded = stl_io::read_stl(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(decoded.faces.len(), mesh.triangle_count());
}

#[test]
fn facet_normals_face_outward_on_sphere() {
    let (_, mesh) = sphere_mesh();
    for tri in mesh.triangles() {
        let n = facet_normal(&mesh, tri);
        let centroid = tri
            .iter()
            .map(|&i| mesh.positions[i as usize])
            .fold(friendshape_math::DVec3::ZERO, |acc, p| acc + p)
            / 3.0;
        assert!((n.length() - 1.0).abs() < 1e-9);
        assert!(n.dot(centroid) > 0.0, "facet {tri:?} faces inward");
    }
}

#[test]
fn bundle_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested");
    let (params, mesh) = sphere_mesh();

    let paths = export_bundle(&mesh, &params, &out, StlFormat::Ascii).unwrap();

    assert_eq!(paths.stl, out.join(STL_FILE_NAME));
    assert_eq!(paths.record, out.join(RECORD_FILE_NAME));
    let stl = std::fs::read_to_string(&paths.stl).unwrap();
    assert!(stl.starts_with("solid friendshape"));

    let back = record::load(&paths.record).unwrap();
    assert_eq!(back, params);
}

#[test]
fn bundle_binary_size() {
    let dir = tempfile::tempdir().unwrap();
    let (params, mesh) = sphere_mesh();
    let paths = export_bundle(&mesh, &params, dir.path(), StlFormat::Binary).unwrap();
    let len = std::fs::metadata(&paths.stl).unwrap().len() as usize;
    assert_eq!(len, 84 + 50 * mesh.triangle_count());
}

#[test]
fn toml_parameter_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shape.toml");
    std::fs::write(&path, "shape = \"cylinder\"\nroundness = 2.0\nstretch = 10.0\nbulge = 1.5\n").unwrap();

    let params = record::load(&path).unwrap();
    assert_eq!(params.shape, Preset::Cylinder);
    assert_eq!(params.stretch, 10.0);
    assert_eq!(params.bulge, 1.5);
    generate(&params).unwrap();
}

#[test]
fn missing_parameter_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = record::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, friendshape_core::ShapeError::Io(_)));
}
