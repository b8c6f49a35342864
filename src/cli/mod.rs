// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, ExportArgs, StatArgs};
pub use handlers::{handle_export, handle_stat, handle_vertices, load_dataset};
