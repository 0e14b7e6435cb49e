pub mod error;
pub mod traits;

pub use error::{Result, ShapeError};
pub use traits::Validate;
