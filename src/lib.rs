pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::JsonFileStore;
pub use config::DemoConfig;
pub use crate::core::demo::{DemoReport, DemoRunner};
pub use crate::core::geometry::EPSILON;
pub use domain::model::{Point, Triangle, TriangleKind, TriangleMetrics};
pub use domain::ports::TriangleStore;
pub use utils::error::{Result, TrigonError};
