//! Configuration: file schema and multi-source loader

mod file_config;
mod loader;

pub use file_config::{FileConfig, ProfileConfig, ProjectEntry, ThemeConfig};
pub use loader::ConfigLoader;
