//! Configuration file loading for bilet
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./bilet.toml` or `./.bilet.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/bilet/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLayoutConfig, FileOutputConfig, FileOutputFormat, FileSheetConfig,
    FileTicketsConfig,
};
pub use loader::ConfigLoader;
