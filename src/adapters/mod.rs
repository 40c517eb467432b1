// Adapters layer: concrete storage backends for the domain ports.

pub mod json_file;

pub use json_file::JsonFileStore;
