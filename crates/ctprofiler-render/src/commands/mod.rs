//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use models::RenderArgs;
pub use render::{build_config, execute_render, validate_args};
pub use utils::{display_schema, display_version, validate_session_file};
