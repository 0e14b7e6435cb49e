use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ShapeError {
    /// Build an [`ShapeError::InvalidParameter`] naming the field, its value and the rule it broke.
    pub fn invalid_param(name: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::InvalidParameter(format!("{name} = {value} ({reason})"))
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
