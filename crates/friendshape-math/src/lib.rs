pub mod aabb;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
