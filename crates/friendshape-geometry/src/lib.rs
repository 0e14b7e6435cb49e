//! Friendshape geometry: shape parameters, the superquadric surface, and the
//! deformation chain layered on top of it.

pub mod deform;
pub mod noise;
pub mod params;
pub mod surface;

pub use deform::{DeformationChain, Lobes, Spike, Twist};
pub use noise::NoiseSource;
pub use params::{is_hex_color, Preset, PresetOverrides, ShapeParameters, MIN_EXPONENT};
pub use surface::{Superquadric, Surface};
