use crate::domain::model::Triangle;
use crate::utils::error::Result;

/// Somewhere a triangle can be written to and read back from.
pub trait TriangleStore {
    fn save(&self, triangle: &Triangle) -> Result<()>;
    fn load(&self) -> Result<Triangle>;
}
