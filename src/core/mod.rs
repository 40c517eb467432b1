pub mod codec;
pub mod demo;
pub mod geometry;
pub mod rotation;

pub use crate::domain::model::{Point, Triangle, TriangleKind, TriangleMetrics};
pub use crate::domain::ports::TriangleStore;
pub use crate::utils::error::Result;
