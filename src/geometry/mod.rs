pub mod aabb;
pub mod point_2;

pub use aabb::Aabb2;
pub use point_2::Point2;
