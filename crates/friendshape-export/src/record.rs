//! Flat parameter record written next to the exported mesh.
//!
//! The record is a pretty-printed JSON object with one key per
//! [`ShapeParameters`] field. Reading also accepts TOML files, so a hand
//! written `shape.toml` works as a parameter file.

use std::fs;
use std::path::Path;

use friendshape_core::{Result, ShapeError};
use friendshape_geometry::ShapeParameters;

/// File name of the parameter record inside an export bundle.
pub const RECORD_FILE_NAME: &str = "friendshape_parameters.txt";

pub fn to_record(params: &ShapeParameters) -> Result<String> {
    serde_json::to_string_pretty(params)
        .map_err(|e| ShapeError::Export(format!("parameter record: {e}")))
}

pub fn from_record(text: &str) -> Result<ShapeParameters> {
    serde_json::from_str(text).map_err(|e| ShapeError::Parse(format!("parameter record: {e}")))
}

pub fn from_toml(text: &str) -> Result<ShapeParameters> {
    toml::from_str(text).map_err(|e| ShapeError::Parse(format!("parameter file: {e}")))
}

pub fn save<P: AsRef<Path>>(params: &ShapeParameters, path: P) -> Result<()> {
    let mut text = to_record(params)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

/// Load parameters from a record or parameter file; `.toml` selects TOML,
/// anything else is read as JSON.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ShapeParameters> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    if is_toml {
        from_toml(&text)
    } else {
        from_record(&text)
    }
}
