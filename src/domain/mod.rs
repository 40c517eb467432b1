// Domain layer: plain data types and the storage port. Geometry lives in core.

pub mod model;
pub mod ports;
