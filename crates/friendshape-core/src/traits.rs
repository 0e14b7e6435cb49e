use crate::error::Result;

/// Validate structural integrity of parameters or generated geometry.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
